use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use github_topics::github::{build_search_url, parse_search_response};

/// Generate a synthetic search response with N items
fn generate_response(num_items: usize) -> String {
    let items: Vec<String> = (0..num_items)
        .map(|i| {
            format!(
                r#"{{"html_url":"https://github.com/owner{i}/repo{i}","name":"repo{i}","full_name":"owner{i}/repo{i}","description":"Repository number {i} with a moderately long description","updated_at":"2024-01-{day:02}T12:00:00Z","pushed_at":"2024-01-{day:02}T11:00:00Z","created_at":"2019-06-01T00:00:00Z","stargazers_count":{i},"watchers_count":{i},"owner":{{"login":"owner{i}","avatar_url":"https://avatars.githubusercontent.com/u/{i}"}},"topics":["rust","cli","tui","search"],"language":"Rust"}}"#,
                i = i,
                day = (i % 28) + 1
            )
        })
        .collect();
    format!(r#"{{"total_count":{},"incomplete_results":false,"items":[{}]}}"#, num_items, items.join(","))
}

fn bench_parse_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_search_response");

    // GitHub pages hold 30 items by default and at most 100
    for size in [30, 100, 1_000].iter() {
        let body = generate_response(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse_search_response(black_box(&body)).unwrap());
        });
    }

    group.finish();
}

fn bench_build_url(c: &mut Criterion) {
    let topics: Vec<String> =
        ["rust", "command line", "c++", "terminal-ui", "async"].iter().map(|s| s.to_string()).collect();

    c.bench_function("build_search_url", |b| {
        b.iter(|| build_search_url(black_box("https://api.github.com"), black_box(&topics), 3));
    });
}

criterion_group!(benches, bench_parse_response, bench_build_url);
criterion_main!(benches);
