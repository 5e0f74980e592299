//! Benchmarks for sentiview loading, filtering and aggregation.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench pipeline -- render`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use sentiview::Post;
use sentiview::config::{AnalysisConfig, LoaderConfig};
use sentiview::core::analysis::{term_frequencies, top_mentioned_users};
use sentiview::core::{FilterParams, filter_posts, render};
use sentiview::loader::load_from_str;
use sentiview::mentions::decode;

const SIZES: [usize; 3] = [1_000, 10_000, 50_000];

// =============================================================================
// Test Data Generators
// =============================================================================

const WORDS: &[&str] = &[
    "climate", "policy", "vote", "energy", "solar", "dogs", "market", "housing", "rates", "team",
];
const HANDLES: &[&str] = &["alice", "bob", "carol", "dave", "eve", "newsdesk"];

fn generate_csv(count: usize) -> String {
    let mut out = String::from(
        "id,created_at,text,sentiment_score,mentions,retweet_count,reply_count,like_count,quote_count\n",
    );
    for i in 0..count {
        let day = i % 28 + 1;
        let hour = i % 24;
        let text = format!(
            "{} {} and {} number {}",
            WORDS[i % WORDS.len()],
            WORDS[(i * 7) % WORDS.len()],
            WORDS[(i * 3) % WORDS.len()],
            i
        );
        let score = ((i % 21) as f64 - 10.0) / 10.0;
        let mentions = format!(
            "\"['{}', '{}']\"",
            HANDLES[i % HANDLES.len()],
            HANDLES[(i / 3) % HANDLES.len()]
        );
        out.push_str(&format!(
            "{i},2024-02-{day:02} {hour:02}:00:00,{text},{score},{mentions},{},{},{},{}\n",
            i % 13,
            i % 5,
            (i * 31) % 997,
            i % 3
        ));
    }
    out
}

fn generate_posts(count: usize) -> Vec<Post> {
    load_from_str(&generate_csv(count), &LoaderConfig::default())
        .unwrap()
        .posts
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_loading(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_csv");

    for size in SIZES {
        let csv = generate_csv(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &csv, |b, csv| {
            b.iter(|| {
                let report = load_from_str(black_box(csv), &LoaderConfig::default()).unwrap();
                black_box(report)
            });
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in SIZES {
        let posts = generate_posts(size);
        let params = FilterParams::spanning(&posts).unwrap().with_keyword("Solar");
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &posts, |b, posts| {
            b.iter(|| black_box(filter_posts(black_box(posts), &params).len()));
        });
    }
    group.finish();
}

fn bench_views(c: &mut Criterion) {
    let posts = generate_posts(10_000);
    let refs: Vec<&Post> = posts.iter().collect();
    let config = AnalysisConfig::default();

    c.bench_function("terms_10k", |b| {
        b.iter(|| black_box(term_frequencies(black_box(&refs), &config)));
    });
    c.bench_function("top_users_10k", |b| {
        b.iter(|| black_box(top_mentioned_users(black_box(&refs), 10)));
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let config = AnalysisConfig::default();

    for size in SIZES {
        let posts = generate_posts(size);
        let params = FilterParams::spanning(&posts).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &posts, |b, posts| {
            b.iter(|| black_box(render(black_box(posts), &params, &config)));
        });
    }
    group.finish();
}

fn bench_mentions_decode(c: &mut Criterion) {
    let raw = "['alice', 'bob', \"carol\", 'dave_the_\\'great\\'']";
    c.bench_function("mentions_decode", |b| {
        b.iter(|| black_box(decode(black_box(raw)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_loading,
    bench_filter,
    bench_views,
    bench_render,
    bench_mentions_decode
);
criterion_main!(benches);
