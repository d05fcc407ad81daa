// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for document rendering in the cahier-document crate.
// Benchmarks the markup renderer and the PDF writer on the built-in sample.

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cahier_document::{PdfWriter, render_markup, sample};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_render_markup(c: &mut Criterion) {
    let spec = sample();
    let generated_on = NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid date");

    c.bench_function("render_markup (sample)", |b| {
        b.iter(|| black_box(render_markup(black_box(&spec), generated_on)));
    });
}

fn bench_render_pdf(c: &mut Criterion) {
    let spec = sample();
    let generated_on = NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid date");

    c.bench_function("render_specification_pdf (sample)", |b| {
        b.iter(|| {
            let writer = PdfWriter::new();
            let bytes = writer
                .render_specification(black_box(&spec), generated_on)
                .expect("render");
            black_box(bytes);
        });
    });
}

criterion_group!(benches, bench_render_markup, bench_render_pdf);
criterion_main!(benches);
