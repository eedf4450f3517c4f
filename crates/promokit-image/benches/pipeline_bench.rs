// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the promotional image pipeline in the
// promokit-image crate, run on synthetic in-memory images.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgba, RgbaImage};

use promokit_core::{NormalizeConfig, OutputFormat};
use promokit_image::ImageNormalizer;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// A 2000x1500 RGBA image with a transparent border, so every stage does
/// real work: alpha compositing, a Lanczos downscale, and padding.
fn synthetic_source() -> DynamicImage {
    let img = RgbaImage::from_fn(2000, 1500, |x, y| {
        let border = x < 100 || y < 100 || x >= 1900 || y >= 1400;
        if border {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        }
    });
    DynamicImage::ImageRgba8(img)
}

/// Flatten, fit, and compose without touching the filesystem.
fn bench_normalize(c: &mut Criterion) {
    let source = synthetic_source();
    let config = NormalizeConfig::default();

    c.bench_function("normalize (2000x1500 RGBA)", |b| {
        b.iter(|| {
            let out = ImageNormalizer::from_dynamic(black_box(source.clone()))
                .flatten(config.background)
                .fit(&config)
                .compose(&config);
            black_box(out.into_dynamic());
        });
    });
}

/// Encode a finished canvas in both output formats.
fn bench_encode(c: &mut Criterion) {
    let config = NormalizeConfig::default();
    let canvas = ImageNormalizer::from_dynamic(synthetic_source())
        .flatten(config.background)
        .fit(&config)
        .compose(&config);

    c.bench_function("encode PNG (1024x1024)", |b| {
        b.iter(|| black_box(canvas.encode(OutputFormat::Png, &config)));
    });
    c.bench_function("encode JPEG (1024x1024)", |b| {
        b.iter(|| black_box(canvas.encode(OutputFormat::Jpeg, &config)));
    });
}

criterion_group!(benches, bench_normalize, bench_encode);
criterion_main!(benches);
