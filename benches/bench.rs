//! Criterion benchmarks for invdex.
//!
//! Covers text analysis on its own and full pipeline runs over a generated
//! corpus with different worker counts.

use std::fs;
use std::hint::black_box;
use std::path::PathBuf;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use invdex::analysis::analyzer::{Analyzer, TermAnalyzer};
use invdex::parallel_index::{IndexEngine, PipelineConfig};
use tempfile::TempDir;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "Search", "engine", "full", "text,", "index", "query", "document", "field", "term",
        "phrase", "boolean", "vector", "similarity!", "relevance", "score", "analysis",
        "tokenization", "stemming", "normalization", "clustering", "machine", "learning",
        "algorithm", "data", "structure", "performance", "optimization", "memory", "storage",
        "retrieval", "ranking", "filtering", "42", "--",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100);
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len();
            doc_words.push(words[word_idx]);
        }

        documents.push(doc_words.join(" "));
    }

    documents
}

fn write_corpus(dir: &TempDir, count: usize) -> Vec<PathBuf> {
    generate_test_documents(count)
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let path = dir.path().join(format!("doc{i}.txt"));
            fs::write(&path, text).unwrap();
            path
        })
        .collect()
}

fn bench_text_analysis(c: &mut Criterion) {
    let documents = generate_test_documents(200);
    let total_bytes: usize = documents.iter().map(|d| d.len()).sum();
    let analyzer = TermAnalyzer::new();

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Bytes(total_bytes as u64));
    group.bench_function("term_analyzer", |b| {
        b.iter(|| {
            for doc in &documents {
                let count = analyzer.analyze(black_box(doc)).unwrap().count();
                black_box(count);
            }
        })
    });
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let corpus_dir = TempDir::new().unwrap();
    let documents = write_corpus(&corpus_dir, 500);
    let out_dir = TempDir::new().unwrap();

    let mut group = c.benchmark_group("pipeline");
    group.sample_size(20);
    group.throughput(Throughput::Elements(documents.len() as u64));

    for (map, reduce) in [(1, 1), (4, 2), (8, 8)] {
        let engine = IndexEngine::new(
            PipelineConfig::new(map, reduce).with_output_dir(out_dir.path()),
        )
        .unwrap();

        group.bench_function(format!("m{map}_r{reduce}"), |b| {
            b.iter(|| black_box(engine.run(documents.clone()).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_pipeline);

criterion_main!(benches);
