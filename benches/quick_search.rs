//! Quick search and outline tracking benchmarks
//!
//! Measures the work done per keystroke and per animation frame:
//! - Matching and rendering quick results over indexes of 100 to 5000 posts
//! - Loading through an index source and searching end to end
//! - Picking the active heading in long articles
//!
//! Run benchmarks: `cargo bench --bench quick_search`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kiji::core::outline::select_active;
use kiji::core::search::{self, QueryPattern};
use kiji::types::{PostRecord, Viewport};
use kiji::{InMemoryIndexSource, NavigatorConfig, QuickResults, SearchConfig};
use std::hint::black_box;

/// Synthetic posts; only every 50th one mentions the query.
fn generate_posts(count: usize) -> Vec<PostRecord> {
    (0..count)
        .map(|i| {
            let topic = if i % 50 == 0 { "ownership" } else { "gardening" };
            PostRecord::new(
                format!("Post {i}: notes on {topic}"),
                format!("Body of post {i}. It talks about {topic} at some length. ").repeat(20),
                format!("/posts/{i}/"),
            )
        })
        .collect()
}

fn benchmark_quick_results(c: &mut Criterion) {
    let mut group = c.benchmark_group("quick_results");
    let config = SearchConfig::default();
    let pattern = QueryPattern::new("owner").expect("literal pattern");

    for count in [100, 1000, 5000] {
        let posts = generate_posts(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("posts", count), &posts, |b, posts| {
            b.iter(|| {
                let results = QuickResults::build(black_box(posts), &pattern, &config);
                black_box(results.to_html(&config.labels))
            });
        });
    }

    group.finish();
}

/// Worst case: nothing matches, so every post is scanned.
fn benchmark_no_match(c: &mut Criterion) {
    let config = SearchConfig::default();
    let pattern = QueryPattern::new("zeppelin").expect("literal pattern");
    let posts = generate_posts(5000);

    c.bench_function("quick_results_no_match_5000", |b| {
        b.iter(|| QuickResults::build(black_box(&posts), &pattern, &config))
    });
}

fn benchmark_search_end_to_end(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("Failed to create Tokio runtime");
    let config = SearchConfig::default();
    let source = InMemoryIndexSource::new(generate_posts(5000));

    c.bench_function("search_in_memory_5000", |b| {
        b.iter(|| {
            rt.block_on(async {
                search::search(&source, black_box("ownership"), &config)
                    .await
                    .expect("search succeeds")
            })
        })
    });
}

fn benchmark_active_heading(c: &mut Criterion) {
    let mut group = c.benchmark_group("active_heading");
    let config = NavigatorConfig::default();

    for count in [10, 100, 500] {
        // Headings every 400px, reader halfway down.
        let scroll_top = count as f64 * 200.0;
        let tops: Vec<Option<f64>> = (0..count)
            .map(|i| Some(i as f64 * 400.0 - scroll_top))
            .collect();
        let viewport = Viewport::new(scroll_top, 800.0, count as f64 * 400.0 + 800.0);

        group.bench_with_input(BenchmarkId::new("headings", count), &tops, |b, tops| {
            b.iter(|| select_active(black_box(viewport), black_box(tops), &config))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_quick_results,
    benchmark_no_match,
    benchmark_search_end_to_end,
    benchmark_active_heading
);
criterion_main!(benches);
