// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Normalizer configuration.

use crate::error::{PromoError, Result};

/// Edge length of the square output canvas, in pixels.
pub const CANVAS_SIZE: u32 = 1024;

/// Resolution tag written into every output file.
pub const OUTPUT_DPI: u16 = 72;

/// JPEG quality used for lossy output.
pub const JPEG_QUALITY: u8 = 90;

/// Opaque white, used for both the canvas and transparency flattening.
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Settings for a single normalization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Width and height of the square canvas.
    pub canvas_size: u32,
    /// Dots-per-inch metadata written to the output.
    pub dpi: u16,
    /// JPEG encoder quality (1-100). Ignored for PNG.
    pub jpeg_quality: u8,
    /// Canvas and flattening background colour.
    pub background: [u8; 3],
    /// Enlarge images smaller than the canvas so their longest side touches
    /// the canvas edge. When false, small images keep their native size.
    pub upscale: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            dpi: OUTPUT_DPI,
            jpeg_quality: JPEG_QUALITY,
            background: WHITE,
            upscale: false,
        }
    }
}

impl NormalizeConfig {
    /// Enable or disable enlarging of small images.
    pub fn with_upscale(mut self, upscale: bool) -> Self {
        self.upscale = upscale;
        self
    }

    /// Reject settings the encoders cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 {
            return Err(PromoError::InvalidConfig(
                "canvas size must be at least 1 pixel".into(),
            ));
        }
        if self.dpi == 0 {
            return Err(PromoError::InvalidConfig("dpi must be positive".into()));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(PromoError::InvalidConfig(format!(
                "JPEG quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }

    /// The `pHYs` density equivalent of `dpi`, in pixels per metre.
    pub fn pixels_per_metre(&self) -> u32 {
        (f64::from(self.dpi) / 0.0254).round() as u32
    }
}
