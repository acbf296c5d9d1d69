//! Reading time benchmarks over generated articles.
//!
//! Run with: `cargo bench --package readtime-bench`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use readtime_bench::{ArticleConfig, synthetic_article};
use readtime_lib::{HtmlDocument, RequestTimeOption, calculate, count_words, get_time};

/// Article sizes from a short note to a long-form essay.
fn article_configs() -> Vec<(&'static str, ArticleConfig)> {
    vec![
        (
            "short",
            ArticleConfig {
                sections: 1,
                paragraphs_per_section: 3,
                words_per_paragraph: 50,
            },
        ),
        ("medium", ArticleConfig::default()),
        (
            "long",
            ArticleConfig {
                sections: 20,
                paragraphs_per_section: 8,
                words_per_paragraph: 120,
            },
        ),
    ]
}

fn calculate_benchmark(c: &mut Criterion) {
    c.bench_function("calculate", |b| {
        b.iter(|| calculate(black_box(1501.0), black_box(100.0)));
    });
}

fn count_words_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_words");

    for (name, config) in article_configs() {
        let text = vec!["word"; config.body_words()].join(" ");
        group.throughput(Throughput::Elements(config.body_words() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| count_words(black_box(text)));
        });
    }

    group.finish();
}

fn get_time_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_time");
    let options = RequestTimeOption::new([".title", "article.post", ".missing"]);

    for (name, config) in article_configs() {
        let html = synthetic_article(&config);
        group.throughput(Throughput::Bytes(html.len() as u64));

        let document = HtmlDocument::parse(&html);
        group.bench_with_input(
            BenchmarkId::new("query", name),
            &document,
            |b, document| {
                b.iter(|| get_time(black_box(document), &options));
            },
        );

        group.bench_with_input(BenchmarkId::new("parse_and_query", name), &html, |b, html| {
            b.iter(|| get_time(&HtmlDocument::parse(black_box(html)), &options));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    calculate_benchmark,
    count_words_benchmark,
    get_time_benchmark
);
criterion_main!(benches);
