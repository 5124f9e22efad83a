// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use storyline_axis::{AxisConfig, DateAxis};
use storyline_date::DateParser;

const SAMPLES: [&str; 8] = [
    "5/3/2024",
    "2024-03-05",
    "5 march 2024",
    "march 5th, 2024",
    "5 mar",
    "sometime in spring",
    "",
    "12.11.1890",
];

fn bench_parse(c: &mut Criterion) {
    let parser = DateParser::new(2024);
    let mut group = c.benchmark_group("date/parse");
    for text in SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(text), text, |b, text| {
            b.iter(|| black_box(parser.parse(black_box(text))));
        });
    }
    group.finish();
}

fn bench_axis_build(c: &mut Criterion) {
    let parser = DateParser::new(2024);
    let mut group = c.benchmark_group("axis/build");

    // Mostly distinct dates, as in a long story; every tenth one repeats.
    for len in [64usize, 512, 4_096] {
        let texts: Vec<String> = (0..len)
            .map(|i| {
                let i = if i % 10 == 9 { i - 1 } else { i };
                format!("{}/{}/{}", i % 28 + 1, i / 28 % 12 + 1, 1800 + i / 336)
            })
            .collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("parse_and_build", len), &texts, |b, texts| {
            b.iter(|| {
                let axis = DateAxis::build(
                    texts.iter().map(|t| parser.parse(t)),
                    1_200.0,
                    0.0,
                    &AxisConfig::default(),
                );
                black_box(axis);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_axis_build);
criterion_main!(benches);
