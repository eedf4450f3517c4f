// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Promokit normalizer.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::PromoError;

/// Encodings the normalizer can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Lossless PNG.
    #[default]
    Png,
    /// Baseline JPEG at the configured quality.
    Jpeg,
}

impl OutputFormat {
    /// Upper-case name shown in progress output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
        }
    }

    /// File extension (without the dot) used for default output names.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// MIME type string.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Output path used when the caller does not name one.
    pub fn default_output_path(&self) -> PathBuf {
        PathBuf::from(format!("promotional-image.{}", self.extension()))
    }
}

impl FromStr for OutputFormat {
    type Err = PromoError;

    /// Parse a format argument. Case-insensitive; `JPG` is an alias of `JPEG`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PNG" => Ok(Self::Png),
            "JPEG" | "JPG" => Ok(Self::Jpeg),
            other => Err(PromoError::InvalidFormat(other.to_owned())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Colour representation of a decoded source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorMode {
    /// 8-bit three-channel colour. Already canonical.
    Rgb,
    /// Colour with an alpha channel.
    Rgba,
    /// Grayscale with an alpha channel.
    GrayAlpha,
    /// Indexed colour. Part of the mode vocabulary only: the `image`
    /// decoders expand palettes to RGB, or RGBA when a transparency table is
    /// present, so `promokit_image::color_mode` never reports it.
    Palette,
    /// Grayscale without alpha.
    Gray,
    /// Anything else (16-bit or float colour, etc.), named by the decoder.
    Other(String),
}

impl ColorMode {
    /// Conventional short mode name (`RGB`, `RGBA`, `LA`, `P`, `L`).
    pub fn label(&self) -> &str {
        match self {
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::GrayAlpha => "LA",
            Self::Palette => "P",
            Self::Gray => "L",
            Self::Other(name) => name,
        }
    }

    /// Whether flattening must blend against the background rather than
    /// convert directly.
    pub fn has_transparency(&self) -> bool {
        matches!(self, Self::Rgba | Self::GrayAlpha | Self::Palette)
    }

    /// Whether the image is already in the canonical output representation.
    pub fn is_canonical(&self) -> bool {
        matches!(self, Self::Rgb)
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What the decoder reported about the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    pub width: u32,
    pub height: u32,
    pub mode: ColorMode,
}

/// Summary of a completed normalization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOutcome {
    /// The decoded input, before any conversion.
    pub source: SourceInfo,
    /// Size of the content after proportional fitting.
    pub fitted: (u32, u32),
    /// Top-left corner at which the content was pasted.
    pub offset: (u32, u32),
    /// Edge length of the square canvas.
    pub canvas_size: u32,
    /// Resolution tag written to the file.
    pub dpi: u16,
    pub format: OutputFormat,
    pub output_path: PathBuf,
}
