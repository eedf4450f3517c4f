// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Proportional fit — aspect-preserving resize into a square bounding box.

use image::RgbImage;
use image::imageops::{self, FilterType};
use tracing::{debug, info};

/// Target size for a `width` x `height` image fitted inside a `bound` x
/// `bound` box.
///
/// Images that already fit are returned at their own size unless `upscale`
/// is set, in which case the longest side is stretched to `bound`. Neither
/// side ever exceeds `bound` or drops below one pixel.
pub fn fit_dimensions(width: u32, height: u32, bound: u32, upscale: bool) -> (u32, u32) {
    if width == 0 || height == 0 || bound == 0 {
        return (width.min(bound), height.min(bound));
    }
    if !upscale && width <= bound && height <= bound {
        return (width, height);
    }

    let bound_f = f64::from(bound);
    let scale = (bound_f / f64::from(width)).min(bound_f / f64::from(height));
    let scaled = |side: u32| ((f64::from(side) * scale).round() as u32).clamp(1, bound);
    (scaled(width), scaled(height))
}

/// Resize `image` to its fitted size using Lanczos3 filtering.
///
/// Returns the input unchanged when no resize is needed.
pub fn fit_within(image: RgbImage, bound: u32, upscale: bool) -> RgbImage {
    let (width, height) = image.dimensions();
    let (target_w, target_h) = fit_dimensions(width, height, bound, upscale);

    if (target_w, target_h) == (width, height) {
        debug!(width, height, "Image already fits, no resize");
        return image;
    }

    info!(
        from_w = width,
        from_h = height,
        to_w = target_w,
        to_h = target_h,
        "Resizing image"
    );
    imageops::resize(&image, target_w, target_h, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn small_image_keeps_size_by_default() {
        assert_eq!(fit_dimensions(500, 300, 1024, false), (500, 300));
    }

    #[test]
    fn small_image_upscales_when_requested() {
        assert_eq!(fit_dimensions(500, 300, 1024, true), (1024, 614));
        assert_eq!(fit_dimensions(300, 500, 1024, true), (614, 1024));
    }

    #[test]
    fn large_square_shrinks_to_bound() {
        assert_eq!(fit_dimensions(2000, 2000, 1024, false), (1024, 1024));
    }

    #[test]
    fn wide_image_keeps_aspect() {
        assert_eq!(fit_dimensions(4000, 1000, 1024, false), (1024, 256));
        assert_eq!(fit_dimensions(3000, 1000, 1024, false), (1024, 341));
    }

    #[test]
    fn extreme_aspect_never_collapses_to_zero() {
        assert_eq!(fit_dimensions(100_000, 10, 1024, false), (1024, 1));
    }

    #[test]
    fn exact_bound_is_untouched_either_way() {
        assert_eq!(fit_dimensions(1024, 1024, 1024, false), (1024, 1024));
        assert_eq!(fit_dimensions(1024, 512, 1024, true), (1024, 512));
    }

    #[test]
    fn fit_within_resizes_buffer() {
        let img = RgbImage::from_pixel(2048, 1024, Rgb([10, 20, 30]));
        let out = fit_within(img, 1024, false);
        assert_eq!(out.dimensions(), (1024, 512));
    }

    #[test]
    fn fit_within_noop_returns_identical_pixels() {
        let img = RgbImage::from_fn(16, 8, |x, y| Rgb([x as u8, y as u8, 0]));
        let out = fit_within(img.clone(), 1024, false);
        assert_eq!(out, img);
    }
}
