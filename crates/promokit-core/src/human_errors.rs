// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages.
//
// Every technical error is mapped to plain English with a clear suggestion,
// so the command line never shows a bare decoder message on its own.

use crate::error::PromoError;

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (printed after the failure marker).
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
}

/// Convert a `PromoError` into a `HumanError`.
pub fn humanize_error(err: &PromoError) -> HumanError {
    match err {
        PromoError::InputNotFound(path) => HumanError {
            message: format!("File not found: {}", path.display()),
            suggestion: "Check the path and spelling, then try again.".into(),
        },

        PromoError::InvalidFormat(got) => HumanError {
            message: format!("Format must be PNG or JPEG, got: {got}"),
            suggestion: "Pass PNG, JPEG, or JPG as the third argument, or leave it out for PNG."
                .into(),
        },

        PromoError::InvalidConfig(detail) => HumanError {
            message: format!("The converter settings are not usable: {detail}"),
            suggestion: "Restore the default settings and try again.".into(),
        },

        PromoError::Decode(detail) => HumanError {
            message: format!("This image could not be read: {detail}"),
            suggestion: "The file may be damaged or in an unusual format. Try re-exporting it as PNG or JPEG first."
                .into(),
        },

        PromoError::Encode(detail) => HumanError {
            message: format!("The promotional image could not be encoded: {detail}"),
            suggestion: "Try the other output format (PNG or JPEG).".into(),
        },

        PromoError::Io(io_err) => match io_err.kind() {
            std::io::ErrorKind::NotFound => HumanError {
                message: format!("A file or folder could not be found: {io_err}"),
                suggestion: "Make sure the output folder exists.".into(),
            },
            std::io::ErrorKind::PermissionDenied => HumanError {
                message: format!("Permission denied: {io_err}"),
                suggestion: "Choose an output location you are allowed to write to.".into(),
            },
            _ => HumanError {
                message: format!("There was a problem reading or writing a file: {io_err}"),
                suggestion: "Try again. If this keeps happening, your disk may be full.".into(),
            },
        },
    }
}
