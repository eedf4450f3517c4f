// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable progress and verification output.

use std::fmt::Write;

use promokit_core::human_errors::humanize_error;
use promokit_core::{NormalizeOutcome, PromoError, SourceInfo};

/// Lines describing the decoded input, plus a conversion notice when the
/// colour mode is not already RGB.
pub fn render_source(source: &SourceInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "   Original size: {}x{}", source.width, source.height);
    let _ = writeln!(out, "   Original mode: {}", source.mode);
    if !source.mode.is_canonical() {
        let _ = writeln!(out, "   Converting from {} to RGB...", source.mode);
    }
    out
}

/// Confirmation of the written file and the five guaranteed properties.
pub fn render_success(outcome: &NormalizeOutcome) -> String {
    let size = outcome.canvas_size;
    let format = outcome.format.label();
    let (fit_w, fit_h) = outcome.fitted;
    let (x, y) = outcome.offset;

    let mut out = String::new();
    let _ = writeln!(out, "\n✅ Success! Created: {}", outcome.output_path.display());
    let _ = writeln!(out, "   Size: {size}x{size} pixels");
    let _ = writeln!(out, "   Mode: RGB");
    let _ = writeln!(out, "   Format: {format}");
    let _ = writeln!(out, "   DPI: {}", outcome.dpi);
    let _ = writeln!(out, "   Content: {fit_w}x{fit_h} at ({x}, {y})");
    let _ = writeln!(out, "\n📋 Verification:");
    let _ = writeln!(out, "   ✓ Dimensions: {size} x {size}");
    let _ = writeln!(out, "   ✓ Resolution: {} dpi", outcome.dpi);
    let _ = writeln!(out, "   ✓ Color mode: RGB");
    let _ = writeln!(out, "   ✓ Flattened: Yes");
    let _ = writeln!(out, "   ✓ Format: {format}");
    out
}

/// Failure marker, plain-English message, and suggestion.
pub fn render_failure(err: &PromoError) -> String {
    let human = humanize_error(err);
    format!("❌ Error: {}\n   {}\n", human.message, human.suggestion)
}
