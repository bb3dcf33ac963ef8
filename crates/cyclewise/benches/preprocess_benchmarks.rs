//! Preprocessing performance benchmarks.
//!
//! Measures parsing plus imputation/normalization across dataset sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cyclewise::{Cyclewise, DataPreprocessor, Parser};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a cycle-log CSV with roughly 10% missing cells.
fn generate_cycle_log(rows: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let flows = ["light", "medium", "heavy"];
    let moods = ["calm", "irritable", "anxious", "happy"];

    let mut data =
        String::from("cycle_length,bleeding_duration,sleep_hours,stress_level,flow,mood\n");

    for row in 0..rows {
        let values = [
            rng.gen_range(21..=35).to_string(),
            rng.gen_range(1..=7).to_string(),
            format!("{:.1}", rng.gen_range(3.0..12.0)),
            rng.gen_range(1..=10).to_string(),
            flows[row % flows.len()].to_string(),
            moods[row % moods.len()].to_string(),
        ];
        let line: Vec<String> = values
            .into_iter()
            .map(|v| if rng.gen_bool(0.1) { String::new() } else { v })
            .collect();
        data.push_str(&line.join(","));
        data.push('\n');
    }

    data
}

/// Benchmark parsing alone.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_cycle_log(*rows);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            let parser = Parser::new();
            b.iter(|| black_box(parser.parse_bytes(data.as_bytes(), "bench.csv").unwrap()));
        });
    }

    group.finish();
}

/// Benchmark imputation and normalization on an already-parsed dataset.
fn bench_preprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocess");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_cycle_log(*rows);
        let (raw, _) = Parser::new().parse_bytes(data.as_bytes(), "bench.csv").unwrap();

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &raw, |b, raw| {
            let preprocessor = DataPreprocessor::new();
            b.iter(|| black_box(preprocessor.preprocess(raw).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the full upload path.
fn bench_load(c: &mut Criterion) {
    let data = generate_cycle_log(5_000);
    let cyclewise = Cyclewise::new();

    c.bench_function("load_5000_rows", |b| {
        b.iter(|| black_box(cyclewise.load_bytes(data.as_bytes(), "bench.csv").unwrap()));
    });
}

criterion_group!(benches, bench_parse, bench_preprocess, bench_load);
criterion_main!(benches);
