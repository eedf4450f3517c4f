// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Promokit — App Store promotional image converter.
//
// Entry point. Parses arguments, initialises logging, runs the normalizer on
// one file, and prints progress plus a verification summary.

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use promokit_core::error::Result;
use promokit_core::{NormalizeConfig, NormalizeOutcome, OutputFormat};
use promokit_image::{Progress, normalize_file_with_progress};

const EXAMPLES: &str = "\
Examples:
  promokit icon.png
  promokit icon.png promotional.png PNG
  promokit icon.png promotional.jpg JPEG";

/// Convert any image to App Store promotional image format:
/// 1024 x 1024 pixels, 72 dpi, RGB, flattened, PNG or JPEG.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
struct Args {
    /// Image to convert (any format the decoder understands)
    input: PathBuf,

    /// Output file [default: promotional-image.png or promotional-image.jpg]
    output: Option<PathBuf>,

    /// Output format: PNG, JPEG, or JPG (case-insensitive) [default: PNG]
    format: Option<String>,

    /// Enlarge images smaller than the canvas until they touch its edges
    #[arg(long)]
    upscale: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return usage_error(err),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    match parse_format(args.format.as_deref()).and_then(|format| run(&args, format)) {
        Ok(outcome) => {
            print!("{}", report::render_success(&outcome));
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "conversion failed");
            print!("{}", report::render_failure(&err));
            ExitCode::FAILURE
        }
    }
}

/// Help and version requests succeed; every other argument problem is a
/// usage error with exit code 1.
fn usage_error(err: clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

/// Resolve the optional format argument. Runs before the input is looked at.
fn parse_format(value: Option<&str>) -> Result<OutputFormat> {
    value.map_or(Ok(OutputFormat::Png), str::parse)
}

fn run(args: &Args, format: OutputFormat) -> Result<NormalizeOutcome> {
    let config = NormalizeConfig::default().with_upscale(args.upscale);

    normalize_file_with_progress(
        &args.input,
        args.output.as_deref(),
        format,
        &config,
        |progress| match progress {
            Progress::Opening(path) => println!("📖 Opening: {}", path.display()),
            Progress::Decoded(source) => print!("{}", report::render_source(source)),
        },
    )
}
