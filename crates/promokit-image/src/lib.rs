// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// promokit-image — The promotional image pipeline.
//
// Each stage is a plain function over in-memory buffers (colour flattening,
// proportional fit, canvas composition, encoding with resolution metadata,
// atomic file output). `ImageNormalizer` chains them over a decoded file.

pub mod canvas;
pub mod color;
pub mod encode;
pub mod fit;
pub mod normalizer;

// Re-export the primary entry points so callers can use `promokit_image::ImageNormalizer` etc.
pub use canvas::{centered_offset, compose_on_canvas};
pub use color::{color_mode, flatten_to_rgb};
pub use encode::{encode_image, encode_jpeg, encode_png, write_atomic};
pub use fit::{fit_dimensions, fit_within};
pub use normalizer::{ImageNormalizer, Progress, normalize_file, normalize_file_with_progress};
