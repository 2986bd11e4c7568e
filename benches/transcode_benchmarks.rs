#![allow(missing_docs)]
//! Transcoding benchmarks: control text parsing, per-record transcoding,
//! and the sequential and parallel batch drivers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use debsrc::formats::{DocumentWriter, MessagePackWriter};
use debsrc::{
    transcode_batch, transcode_batch_parallel, ControlReader, ControlRecord, Transcoder,
};
use std::io::Cursor;

/// Load the sample `Sources` index.
fn load_fixture() -> String {
    let path = "tests/data/Sources";
    std::fs::read_to_string(path).unwrap_or_else(|_| panic!("Failed to load fixture: {path}"))
}

/// Repeat the fixture until it holds at least `count` paragraphs.
fn synthetic_index(count: usize) -> String {
    let fixture = load_fixture();
    let per_copy = debsrc::control::split_paragraphs(&fixture).len();
    let mut text = String::with_capacity(fixture.len() * (count / per_copy + 1));
    for _ in 0..(count + per_copy - 1) / per_copy {
        text.push_str(&fixture);
        text.push('\n');
    }
    text
}

fn parse_records(text: &str) -> Vec<ControlRecord> {
    ControlReader::new(Cursor::new(text))
        .collect::<debsrc::Result<Vec<_>>>()
        .expect("fixture parses")
}

fn benchmark_control_parsing(c: &mut Criterion) {
    let text = synthetic_index(1_000);
    let mut group = c.benchmark_group("control_parsing");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("split_paragraphs", |b| {
        b.iter(|| debsrc::control::split_paragraphs(black_box(&text)).len());
    });
    group.bench_function("control_reader", |b| {
        b.iter(|| parse_records(black_box(&text)).len());
    });
    group.finish();
}

fn benchmark_transcode(c: &mut Criterion) {
    let records = parse_records(&load_fixture());
    let transcoder = Transcoder::default();

    c.bench_function("transcode_single_record", |b| {
        b.iter(|| transcoder.transcode(black_box(&records[0])));
    });

    c.bench_function("transcode_and_encode_messagepack", |b| {
        b.iter(|| {
            let mut writer = MessagePackWriter::new(Vec::new());
            for record in &records {
                let transcoded = transcoder.transcode(record).expect("fixture transcodes");
                writer.write_document(&transcoded.document).expect("encodes");
            }
            writer.into_inner().expect("flushes").len()
        });
    });
}

fn benchmark_batches(c: &mut Criterion) {
    let transcoder = Transcoder::default();
    let mut group = c.benchmark_group("batch");

    for count in [1_000, 10_000] {
        let records = parse_records(&synthetic_index(count));
        group.throughput(Throughput::Elements(records.len() as u64));

        group.bench_with_input(BenchmarkId::new("sequential", count), &records, |b, records| {
            b.iter(|| transcode_batch(records, &transcoder));
        });
        group.bench_with_input(BenchmarkId::new("parallel", count), &records, |b, records| {
            b.iter(|| transcode_batch_parallel(records, &transcoder));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_control_parsing,
    benchmark_transcode,
    benchmark_batches
);
criterion_main!(benches);
