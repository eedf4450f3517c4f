// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image normalizer — decode, flatten, fit, compose, and save a single image
// as a square promotional asset.

use std::borrow::Cow;
use std::path::Path;

use image::{DynamicImage, ImageReader, RgbImage};
use promokit_core::error::{PromoError, Result};
use promokit_core::{NormalizeConfig, NormalizeOutcome, OutputFormat, SourceInfo};
use tracing::{debug, info, instrument};

use crate::canvas::{centered_offset, compose_on_canvas};
use crate::color::{color_mode, flatten_to_rgb};
use crate::encode::{encode_image, write_atomic};
use crate::fit::fit_within;

/// Promotional image pipeline operating on a single decoded image.
///
/// Every stage consumes `self` and returns the transformed normalizer, so the
/// whole conversion reads as one chain:
///
/// ```ignore
/// let config = NormalizeConfig::default();
/// let outcome = ImageNormalizer::open("icon.png")?
///     .flatten(config.background)
///     .fit(&config)
///     .compose(&config)
///     .save("promotional-image.png", OutputFormat::Png, &config)?;
/// ```
///
/// Stages may be skipped: `fit`, `compose`, and `encode` flatten on demand, so
/// the output is always opaque RGB.
pub struct ImageNormalizer {
    /// The current working image.
    image: DynamicImage,
    /// What the decoder produced, before any stage ran.
    source: SourceInfo,
    /// Content size and paste offset, once `compose` has run.
    placement: Option<((u32, u32), (u32, u32))>,
}

impl ImageNormalizer {
    // -- Construction ---------------------------------------------------------

    /// Decode the image at `path`.
    ///
    /// The format is sniffed from the file contents, so a mislabelled
    /// extension still decodes. A missing file fails before any read.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PromoError::InputNotFound(path.to_path_buf()));
        }
        let normalizer = Self::decode_file(path)?;
        info!(width = normalizer.width(), height = normalizer.height(), "Image loaded");
        Ok(normalizer)
    }

    /// Decode `path` without checking that it exists first.
    fn decode_file(path: &Path) -> Result<Self> {
        let decode_err =
            |err: &dyn std::fmt::Display| PromoError::Decode(format!("{}: {err}", path.display()));
        let image = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| decode_err(&err))?
            .decode()
            .map_err(|err| decode_err(&err))?;
        Ok(Self::from_dynamic(image))
    }

    /// Decode an image from encoded bytes (PNG, JPEG, GIF, ...).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(data)
            .map_err(|err| PromoError::Decode(format!("failed to decode image: {err}")))?;
        debug!(width = image.width(), height = image.height(), "Image decoded from bytes");
        Ok(Self::from_dynamic(image))
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let source = SourceInfo {
            width: image.width(),
            height: image.height(),
            mode: color_mode(&image),
        };
        Self {
            image,
            source,
            placement: None,
        }
    }

    // -- Accessors ------------------------------------------------------------

    /// Dimensions and colour mode of the decoded input.
    pub fn source_info(&self) -> &SourceInfo {
        &self.source
    }

    /// Current image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the normalizer and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Stages (consume self, return new Self) -------------------------------

    /// Reduce the image to opaque 8-bit RGB, compositing any transparency
    /// onto `background`.
    #[instrument(skip(self), fields(mode = %self.source.mode))]
    pub fn flatten(self, background: [u8; 3]) -> Self {
        let rgb = flatten_to_rgb(self.image, background);
        Self {
            image: DynamicImage::ImageRgb8(rgb),
            source: self.source,
            placement: self.placement,
        }
    }

    /// Shrink the image to fit the canvas, preserving aspect ratio. Small
    /// images are enlarged only when `config.upscale` is set.
    #[instrument(skip_all, fields(upscale = config.upscale))]
    pub fn fit(self, config: &NormalizeConfig) -> Self {
        let rgb = flatten_to_rgb(self.image, config.background);
        let fitted = fit_within(rgb, config.canvas_size, config.upscale);
        Self {
            image: DynamicImage::ImageRgb8(fitted),
            source: self.source,
            placement: self.placement,
        }
    }

    /// Centre the image on a square canvas of `config.background`.
    ///
    /// Content larger than the canvas is cropped by the canvas edges, so call
    /// `fit` first.
    #[instrument(skip_all, fields(canvas = config.canvas_size))]
    pub fn compose(self, config: &NormalizeConfig) -> Self {
        let content = flatten_to_rgb(self.image, config.background);
        let size = content.dimensions();
        let offset = centered_offset(config.canvas_size, size);
        let canvas = compose_on_canvas(&content, config.canvas_size, config.background);
        Self {
            image: DynamicImage::ImageRgb8(canvas),
            source: self.source,
            placement: Some((size, offset)),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image in `format` with the configured resolution.
    pub fn encode(&self, format: OutputFormat, config: &NormalizeConfig) -> Result<Vec<u8>> {
        encode_image(&self.rgb(config.background), format, config)
    }

    /// Encode and write the current image to `path`.
    ///
    /// Encoding finishes before the file is touched, and the write itself is
    /// all-or-nothing, so a failure never leaves a partial file behind.
    #[instrument(skip_all, fields(path = %path.as_ref().display(), format = %format))]
    pub fn save(
        &self,
        path: impl AsRef<Path>,
        format: OutputFormat,
        config: &NormalizeConfig,
    ) -> Result<NormalizeOutcome> {
        let path = path.as_ref();
        let bytes = self.encode(format, config)?;
        write_atomic(path, &bytes)?;

        let (fitted, offset) = self
            .placement
            .unwrap_or(((self.width(), self.height()), (0, 0)));
        Ok(NormalizeOutcome {
            source: self.source.clone(),
            fitted,
            offset,
            canvas_size: self.width(),
            dpi: config.dpi,
            format,
            output_path: path.to_path_buf(),
        })
    }

    fn rgb(&self, background: [u8; 3]) -> Cow<'_, RgbImage> {
        match &self.image {
            DynamicImage::ImageRgb8(rgb) => Cow::Borrowed(rgb),
            other => Cow::Owned(flatten_to_rgb(other.clone(), background)),
        }
    }
}

/// Milestones reported by `normalize_file_with_progress`.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// The input exists and is about to be decoded.
    Opening(&'a Path),
    /// The input decoded; carries what the decoder reported.
    Decoded(&'a SourceInfo),
}

/// Convert the image at `input` into a promotional asset at `output`
/// (or the format's default file name).
///
/// Runs validate → decode → flatten → fit → compose → encode → write and
/// returns a summary of what was produced.
pub fn normalize_file(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    config: &NormalizeConfig,
) -> Result<NormalizeOutcome> {
    normalize_file_with_progress(input, output, format, config, |_| {})
}

/// `normalize_file`, calling `progress` as each milestone is reached.
///
/// A missing input fails before `Progress::Opening` is reported.
#[instrument(skip_all, fields(input = %input.display(), format = %format))]
pub fn normalize_file_with_progress(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    config: &NormalizeConfig,
    mut progress: impl FnMut(Progress<'_>),
) -> Result<NormalizeOutcome> {
    config.validate()?;
    if !input.exists() {
        return Err(PromoError::InputNotFound(input.to_path_buf()));
    }
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| format.default_output_path());

    progress(Progress::Opening(input));
    let normalizer = ImageNormalizer::decode_file(input)?;
    info!(width = normalizer.width(), height = normalizer.height(), "Image loaded");
    progress(Progress::Decoded(normalizer.source_info()));

    normalizer
        .flatten(config.background)
        .fit(config)
        .compose(config)
        .save(&output, format, config)
}
