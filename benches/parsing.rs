//! Benchmarks for chatlens parsing, aggregation and rendering.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- line_parsing`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlens::ParsedCollection;
use chatlens::analysis::Analysis;
use chatlens::config::{AnalysisConfig, DashboardConfig};
use chatlens::core::emoji::count_emoji;
use chatlens::core::output::{to_csv, to_json};
use chatlens::core::stats::ChatStats;
use chatlens::dashboard::Dashboard;
use chatlens::parser::LineParser;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_export(count: usize) -> String {
    let authors = ["Alice", "Bob", "Carol", "Dave"];
    let mut lines = Vec::with_capacity(count + count / 10);
    for i in 0..count {
        let hour = i % 12 + 1;
        let minute = i % 60;
        let meridiem = if (i / 12) % 2 == 0 { "AM" } else { "PM" };
        lines.push(format!(
            "12/{}/23, {}:{:02} {} - {}: Message number {} about lunch 😀",
            i % 28 + 1,
            hour,
            minute,
            meridiem,
            authors[i % authors.len()],
            i
        ));
        if i % 10 == 0 {
            lines.push("continuation line without a header".to_string());
        }
    }
    lines.join("\n")
}

fn generate_collection(count: usize) -> ParsedCollection {
    let parser = LineParser::new().unwrap();
    parser.parse_str(&generate_export(count)).unwrap()
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_line_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_parsing");
    let parser = LineParser::new().unwrap();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let records = parser.parse_str(black_box(txt)).unwrap();
                black_box(records)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Aggregation Benchmarks
// =============================================================================

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");
    let config = AnalysisConfig::default();

    for size in [100_usize, 1_000, 10_000, 100_000] {
        let records = generate_collection(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                let stats = ChatStats::compute(black_box(records), &config);
                black_box(stats)
            });
        });
    }
    group.finish();
}

fn bench_emoji_count(c: &mut Criterion) {
    let text = "Party time 🎉🎉 see you there 😀👍🚀 🤔 ❤️ ".repeat(1_000);
    c.bench_function("emoji_count", |b| {
        b.iter(|| black_box(count_emoji(black_box(&text))));
    });
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");
    let config = DashboardConfig::default();

    for size in [100_usize, 1_000, 10_000] {
        let analysis = Analysis::new(generate_collection(size), &AnalysisConfig::default());
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &analysis,
            |b, analysis| {
                b.iter(|| {
                    let text = Dashboard::new(black_box(analysis), &config).to_string();
                    black_box(text)
                });
            },
        );
    }
    group.finish();
}

fn bench_output_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_csv");

    for size in [100_usize, 1_000, 10_000] {
        let records = generate_collection(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                let csv = to_csv(black_box(records.as_slice())).unwrap();
                black_box(csv)
            });
        });
    }
    group.finish();
}

fn bench_output_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_json");

    for size in [100_usize, 1_000, 10_000] {
        let analysis = Analysis::new(generate_collection(size), &AnalysisConfig::default());
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &analysis,
            |b, analysis| {
                b.iter(|| {
                    let json = to_json(black_box(analysis)).unwrap();
                    black_box(json)
                });
            },
        );
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let analysis_config = AnalysisConfig::default();
    let dashboard_config = DashboardConfig::default();

    for size in [1_000_usize, 10_000, 50_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                // parse -> aggregate -> render
                let analysis = Analysis::from_str(black_box(txt), &analysis_config).unwrap();
                let text = Dashboard::new(&analysis, &dashboard_config).to_string();
                black_box(text)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_line_parsing,
    bench_stats,
    bench_emoji_count,
    bench_dashboard,
    bench_output_csv,
    bench_output_json,
    bench_full_pipeline,
);

criterion_main!(benches);
