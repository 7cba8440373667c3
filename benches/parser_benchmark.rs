use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pinquery::query::lexer::tokenize;
use pinquery::query::parser::QueryParser;
use rand::Rng;

/// Helper to build a synthetic query with the given number of clauses
fn generate_query(clauses: usize) -> String {
    let mut rng = rand::thread_rng();
    let words = ["beach", "market", "temple", "sunset", "food", "hike", "museum", "rain"];
    let tags = ["tag:food", "tag:history", "city:hanoi", "city:osaka"];

    let mut parts = Vec::with_capacity(clauses);
    for i in 0..clauses {
        let part = match rng.gen_range(0..4) {
            0 => words[rng.gen_range(0..words.len())].to_string(),
            1 => tags[rng.gen_range(0..tags.len())].to_string(),
            2 => format!("\"{} {}\"",
                words[rng.gen_range(0..words.len())],
                words[rng.gen_range(0..words.len())]),
            _ => format!("NOT {}", words[rng.gen_range(0..words.len())]),
        };
        if i > 0 && rng.gen_bool(0.5) {
            parts.push(if rng.gen_bool(0.5) { "AND" } else { "OR" }.to_string());
        }
        parts.push(part);
    }
    parts.join(" ")
}

/// Benchmark tokenizing a typical interactive query
fn bench_tokenize(c: &mut Criterion) {
    let input = "tag:food \"night market\" NOT (city:osaka OR rainy)";
    c.bench_function("tokenize_typical_query", |b| {
        b.iter(|| tokenize(black_box(input)).unwrap());
    });
}

/// Benchmark full parses of a typical interactive query
fn bench_parse(c: &mut Criterion) {
    let parser = QueryParser::new();
    let input = "tag:food \"night market\" NOT (city:osaka OR rainy)";
    c.bench_function("parse_typical_query", |b| {
        b.iter(|| parser.parse(black_box(input)).unwrap());
    });
}

/// Benchmark parsing as query length grows
fn bench_parse_by_length(c: &mut Criterion) {
    let parser = QueryParser::new();
    let mut group = c.benchmark_group("parse_by_clause_count");

    for clauses in [4, 16, 64, 256].iter() {
        let query = generate_query(*clauses);
        group.bench_with_input(
            BenchmarkId::from_parameter(clauses),
            &query,
            |b, query| {
                b.iter(|| parser.parse(black_box(query)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_parse, bench_parse_by_length);
criterion_main!(benches);
