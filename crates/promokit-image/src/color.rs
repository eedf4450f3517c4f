// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Colour normalization — reduce any decoded image to opaque 8-bit RGB,
// blending transparent pixels onto a solid background.

use image::{ColorType, DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use promokit_core::ColorMode;
use tracing::debug;

/// Classify the decoded colour representation of `image`.
///
/// Indexed PNG and GIF sources never reach this point as `Palette`: the
/// decoders expand them to RGB, or to RGBA when they carry transparency.
pub fn color_mode(image: &DynamicImage) -> ColorMode {
    match image.color() {
        ColorType::Rgb8 => ColorMode::Rgb,
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => ColorMode::Rgba,
        ColorType::La8 | ColorType::La16 => ColorMode::GrayAlpha,
        ColorType::L8 => ColorMode::Gray,
        ColorType::L16 => ColorMode::Other("I;16".into()),
        ColorType::Rgb16 => ColorMode::Other("RGB;16".into()),
        ColorType::Rgb32F => ColorMode::Other("RGB;32F".into()),
        other => ColorMode::Other(format!("{other:?}")),
    }
}

/// Convert `image` to canonical 8-bit RGB.
///
/// 8-bit RGB input is returned untouched. Images with an alpha channel are
/// composited onto `background`, so fully transparent pixels take the
/// background colour and partially transparent ones blend proportionally.
/// Everything else goes through the decoder's standard RGB conversion.
pub fn flatten_to_rgb(image: DynamicImage, background: [u8; 3]) -> RgbImage {
    if let DynamicImage::ImageRgb8(rgb) = image {
        return rgb;
    }

    if image.color().has_alpha() {
        debug!(mode = ?image.color(), "Compositing transparency onto background");
        composite_on_background(&image.to_rgba8(), background)
    } else {
        debug!(mode = ?image.color(), "Converting directly to RGB");
        image.into_rgb8()
    }
}

/// Blend every pixel of `rgba` over an opaque `background`, using alpha as
/// the mask.
fn composite_on_background(rgba: &RgbaImage, background: [u8; 3]) -> RgbImage {
    let [bg_r, bg_g, bg_b] = background;
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
        Rgb([blend(r, bg_r, a), blend(g, bg_g, a), blend(b, bg_b, a)])
    })
}

/// `src * alpha + bg * (1 - alpha)` in 8-bit fixed point, rounded.
fn blend(src: u8, bg: u8, alpha: u8) -> u8 {
    let alpha = u32::from(alpha);
    ((u32::from(src) * alpha + u32::from(bg) * (255 - alpha) + 127) / 255) as u8
}
