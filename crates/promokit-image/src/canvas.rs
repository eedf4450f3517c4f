// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Canvas composition — centre fitted content on a square solid background.

use image::{Rgb, RgbImage, imageops};
use tracing::debug;

/// Top-left corner that centres a `content` sized box on a square canvas.
///
/// Odd leftovers are floored, so the extra pixel of padding lands on the
/// right or bottom edge.
pub fn centered_offset(canvas_size: u32, content: (u32, u32)) -> (u32, u32) {
    (
        canvas_size.saturating_sub(content.0) / 2,
        canvas_size.saturating_sub(content.1) / 2,
    )
}

/// Paste `content` at the centre of a new `canvas_size` square filled with
/// `background`. Pixels outside the pasted region keep the background.
pub fn compose_on_canvas(content: &RgbImage, canvas_size: u32, background: [u8; 3]) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(canvas_size, canvas_size, Rgb(background));
    let (x, y) = centered_offset(canvas_size, content.dimensions());
    debug!(x, y, width = content.width(), height = content.height(), "Pasting onto canvas");
    imageops::replace(&mut canvas, content, i64::from(x), i64::from(y));
    canvas
}
