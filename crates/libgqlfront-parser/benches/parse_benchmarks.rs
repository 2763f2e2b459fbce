mod fixtures;

use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use libgqlfront_parser::parse_request_document;
use libgqlfront_parser::parse_schema_document;
use libgqlfront_parser::Lexer;

// ─── Group 1: Schema Parsing ─────────────────────────────

fn schema_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_parse");

    group.bench_function("small", |b| {
        b.iter(|| black_box(parse_schema_document(fixtures::SMALL_SCHEMA, "small.graphql")))
    });

    for type_count in [10, 100, 1000] {
        let schema = fixtures::synthetic_schema(type_count);
        group.throughput(Throughput::Bytes(schema.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("synthetic", type_count),
            &schema,
            |b, schema| b.iter(|| black_box(parse_schema_document(schema, "synthetic.graphql"))),
        );
    }

    group.finish();
}

// ─── Group 2: Request Document Parsing ───────────────────

fn request_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_parse");

    group.bench_function("simple_query", |b| {
        b.iter(|| {
            black_box(parse_request_document(
                fixtures::operations::SIMPLE_QUERY,
                "q.graphql",
            ))
        })
    });

    group.bench_function("complex_query", |b| {
        b.iter(|| {
            black_box(parse_request_document(
                fixtures::operations::COMPLEX_QUERY,
                "q.graphql",
            ))
        })
    });

    for depth in [10, 30] {
        let nested = fixtures::operations::deeply_nested_query(depth);
        group.bench_with_input(BenchmarkId::new("nested_depth", depth), &nested, |b, q| {
            b.iter(|| black_box(parse_request_document(q, "q.graphql")))
        });
    }

    let many_ops = fixtures::operations::many_operations(50);
    group.bench_function("many_operations_50", |b| {
        b.iter(|| black_box(parse_request_document(&many_ops, "q.graphql")))
    });

    group.finish();
}

// ─── Group 3: Lexer (Tokenization Only) ──────────────────

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    for type_count in [10, 1000] {
        let schema = fixtures::synthetic_schema(type_count);
        group.throughput(Throughput::Bytes(schema.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("synthetic_schema", type_count),
            &schema,
            |b, schema| {
                b.iter(|| {
                    for token in Lexer::new(schema, "synthetic.graphql") {
                        black_box(token);
                    }
                })
            },
        );
    }

    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(benches, schema_parse, request_parse, lexer);
criterion_main!(benches);
