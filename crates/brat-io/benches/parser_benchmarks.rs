//! Parser and serializer performance benchmarks.
//!
//! Measures parsing, serialization and re-chunking across document sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use brat_io::{ChunkConfig, Parser, ParserConfig, assemble_chunks};

/// Generate a synthetic document with `sentences` lines of five words each.
///
/// Every word is an entity; each sentence carries one event and one relation.
fn generate_document(sentences: usize) -> (String, String) {
    let mut text = String::new();
    let mut annotations = Vec::new();
    let mut entity = 0;

    for s in 0..sentences {
        if s > 0 {
            text.push('\n');
        }
        let first = entity + 1;
        for w in 0..5 {
            if w > 0 {
                text.push(' ');
            }
            let word = format!("word{}", (s * 5 + w) % 97);
            let start = text.chars().count();
            text.push_str(&word);
            entity += 1;
            annotations.push(format!(
                "T{}\tType{} {} {}\t{}",
                entity,
                w,
                start,
                start + word.len(),
                word
            ));
        }
        annotations.push(format!("E{}\tType0:T{} Theme:T{}", s + 1, first, first + 1));
        annotations.push(format!("R{}\tLink Arg1:T{} Arg2:T{}", s + 1, first + 2, first + 3));
        annotations.push(format!("A{}\tNegation E{}", s + 1, s + 1));
    }

    (text, annotations.join("\n"))
}

/// Benchmark parsing with and without sentence distribution.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for sentences in [10, 100, 1_000].iter() {
        let (text, annotations) = generate_document(*sentences);
        let lines: Vec<&str> = annotations.lines().collect();

        group.throughput(Throughput::Elements(lines.len() as u64));
        group.bench_with_input(BenchmarkId::new("flat", sentences), &lines, |b, lines| {
            let parser = Parser::with_config(ParserConfig::without_sentences());
            b.iter(|| black_box(parser.parse("doc", &text, lines).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("sentences", sentences), &lines, |b, lines| {
            let parser = Parser::new();
            b.iter(|| black_box(parser.parse("doc", &text, lines).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark serialization of a parsed document.
fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for sentences in [10, 100, 1_000].iter() {
        let (text, annotations) = generate_document(*sentences);
        let document = Parser::new().parse_str("doc", &text, &annotations).unwrap();

        group.bench_with_input(BenchmarkId::new("sentences", sentences), &document, |b, document| {
            b.iter(|| black_box(document.to_brat_string()))
        });
    }

    group.finish();
}

/// Benchmark re-chunking with varying chunk sizes.
fn bench_rechunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("rechunk");

    let (text, annotations) = generate_document(1_000);
    let document = Parser::new().parse_str("doc", &text, &annotations).unwrap();
    let sentences = document.sentences().to_vec();

    for size in [5, 50, 500].iter() {
        let config = ChunkConfig::default().with_size(*size);
        group.bench_with_input(BenchmarkId::new("size", size), &config, |b, config| {
            b.iter(|| black_box(assemble_chunks(&sentences, config).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_serialize, bench_rechunk);
criterion_main!(benches);
