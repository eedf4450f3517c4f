// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Promokit.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all Promokit operations.
#[derive(Debug, Error)]
pub enum PromoError {
    // -- Argument errors --
    #[error("file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("format must be PNG or JPEG, got: {0}")]
    InvalidFormat(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // -- Image errors --
    #[error("image decoding failed: {0}")]
    Decode(String),

    #[error("image encoding failed: {0}")]
    Encode(String),

    // -- Filesystem --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PromoError>;
