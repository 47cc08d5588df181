//! Performance benchmarks for event encoding
//!
//! Measures encode time for scalar, multi-line and structured payloads.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;
use sse_encoder::{encode, Event};

/// Generate scalar text with the given number of lines
fn generate_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("line {} of the payload with some filler text", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Benchmark scalar payloads of increasing line count
fn bench_encode_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_scalar");

    for lines in [1, 10, 100, 1000].iter() {
        let event = Event::text(generate_text(*lines))
            .with_id("evt-1")
            .with_event_type("message");
        group.throughput(Throughput::Elements(*lines as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_lines", lines)),
            &event,
            |b, event| {
                let mut out = Vec::with_capacity(64 * 1024);
                b.iter(|| {
                    out.clear();
                    encode(&mut out, black_box(event)).unwrap();
                    black_box(out.len())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark structured payloads of increasing size
fn bench_encode_structured(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_structured");

    for items in [1, 10, 100].iter() {
        let value = json!({
            "items": (0..*items)
                .map(|i| json!({"id": i, "name": format!("item-{}", i), "tags": ["a", "b"]}))
                .collect::<Vec<_>>()
        });
        let event = Event::json(value).with_id("evt-2");
        group.throughput(Throughput::Elements(*items as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_items", items)),
            &event,
            |b, event| {
                let mut out = Vec::with_capacity(64 * 1024);
                b.iter(|| {
                    out.clear();
                    encode(&mut out, black_box(event)).unwrap();
                    black_box(out.len())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encode_scalar, bench_encode_structured);
criterion_main!(benches);
