//! Benchmarks for DWML parsing and time alignment.
//!
//! Run with: cargo bench --package dwml-parser
//! Or: cargo bench --package dwml-parser --bench align_benchmarks

use chrono::Duration;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use dwml_parser::{extract_time_layouts, Document, ForecastExtractor, TimeAligner};
use ndfd_common::{parse_dwml_time, Interval};
use test_utils::generate_glance_document;

// =============================================================================
// ALIGNMENT BENCHMARKS
// =============================================================================

fn ranged_intervals(count: usize) -> Vec<Interval> {
    let start = parse_dwml_time("2008-06-02T08:00:00-05:00").unwrap();
    (0..count)
        .map(|i| {
            let s = start + Duration::hours(12 * i as i64);
            Interval::ranged(s, s + Duration::hours(12))
        })
        .collect()
}

fn instant_intervals(count: usize) -> Vec<Interval> {
    let start = parse_dwml_time("2008-06-02T08:00:00-05:00").unwrap();
    (0..count)
        .map(|i| Interval::instant(start + Duration::hours(3 * i as i64)))
        .collect()
}

fn bench_align(c: &mut Criterion) {
    let mut group = c.benchmark_group("align");
    let aligner = TimeAligner::default();

    for count in [14, 56, 224] {
        let intervals = ranged_intervals(count);
        group.throughput(Throughput::Elements(aligner.expanded_len(&intervals) as u64));
        group.bench_with_input(BenchmarkId::new("ranged", count), &intervals, |b, iv| {
            b.iter(|| aligner.align("k", black_box(iv), (0..count as i64).collect()))
        });

        let intervals = instant_intervals(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("instant", count), &intervals, |b, iv| {
            b.iter(|| aligner.align("k", black_box(iv), (0..count as i64).collect()))
        });
    }

    group.finish();
}

// =============================================================================
// DOCUMENT BENCHMARKS
// =============================================================================

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");

    for locations in [1, 10, 50] {
        let xml = generate_glance_document(locations, 40);
        group.throughput(Throughput::Bytes(xml.len() as u64));

        group.bench_with_input(BenchmarkId::new("parse", locations), &xml, |b, xml| {
            b.iter(|| Document::parse(black_box(xml)))
        });

        let doc = Document::parse(&xml).unwrap();
        group.bench_with_input(BenchmarkId::new("time_layouts", locations), &doc, |b, doc| {
            b.iter(|| extract_time_layouts(black_box(doc)))
        });
    }

    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let extractor = ForecastExtractor::default();

    for locations in [1, 10, 50] {
        let xml = generate_glance_document(locations, 40);
        group.throughput(Throughput::Elements(locations as u64));
        group.bench_with_input(BenchmarkId::new("sky_maxt", locations), &xml, |b, xml| {
            b.iter(|| extractor.extract(black_box(xml), &["sky", "maxt"]))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_align, bench_document, bench_extract);
criterion_main!(benches);
