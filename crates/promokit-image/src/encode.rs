// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output encoding — PNG with a `pHYs` chunk, JPEG with a JFIF density, and
// write-or-nothing file output.

use std::io::Write;
use std::path::Path;

use image::RgbImage;
use image::codecs::jpeg::{JpegEncoder, PixelDensity};
use promokit_core::error::{PromoError, Result};
use promokit_core::{NormalizeConfig, OutputFormat};
use tracing::{debug, info, instrument};

/// Encode `image` as an 8-bit RGB PNG tagged with `pixels_per_metre` in both
/// directions.
pub fn encode_png(image: &RgbImage, pixels_per_metre: u32) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: pixels_per_metre,
            yppu: pixels_per_metre,
            unit: png::Unit::Meter,
        }));

        let mut writer = encoder
            .write_header()
            .map_err(|err| PromoError::Encode(format!("PNG header: {err}")))?;
        writer
            .write_image_data(image.as_raw())
            .map_err(|err| PromoError::Encode(format!("PNG image data: {err}")))?;
        writer
            .finish()
            .map_err(|err| PromoError::Encode(format!("PNG trailer: {err}")))?;
    }
    Ok(buffer)
}

/// Encode `image` as a JPEG with the given quality (1-100) and a JFIF
/// density of `dpi` dots per inch.
pub fn encode_jpeg(image: &RgbImage, quality: u8, dpi: u16) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder.set_pixel_density(PixelDensity::dpi(dpi));
    image
        .write_with_encoder(encoder)
        .map_err(|err| PromoError::Encode(format!("JPEG encoding failed: {err}")))?;
    Ok(buffer)
}

/// Encode `image` in `format` using the resolution and quality from `config`.
#[instrument(skip(image, config), fields(width = image.width(), height = image.height()))]
pub fn encode_image(
    image: &RgbImage,
    format: OutputFormat,
    config: &NormalizeConfig,
) -> Result<Vec<u8>> {
    let bytes = match format {
        OutputFormat::Png => encode_png(image, config.pixels_per_metre())?,
        OutputFormat::Jpeg => encode_jpeg(image, config.jpeg_quality, config.dpi)?,
    };
    debug!(len = bytes.len(), "Image encoded");
    Ok(bytes)
}

/// Write `bytes` to `path` so that the destination either holds the complete
/// data or is left as it was.
///
/// The data goes to a temporary file in the destination directory first and
/// is renamed into place once fully flushed. On any failure the temporary
/// file is removed. A replaced file keeps its permissions; a new file gets
/// the mode a plain create would give it under the current umask.
#[instrument(skip_all, fields(path = %path.display(), len = bytes.len()))]
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = std::fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut builder = tempfile::Builder::new();
    builder.prefix(".promokit-").suffix(".tmp");
    // Temporary files default to owner-only; 0o666 is masked by the umask at
    // creation, as with `File::create`.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder.tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions)?;
    }

    tmp.persist(path).map_err(|err| err.error)?;
    info!("Output written");
    Ok(())
}
