//! Benchmarks for document building and comparison.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use oas_tools::config::BuildConfig;
use oas_tools::diff::compare_documents;
use oas_tools::model::v3::Document;
use oas_tools::parsers::parse_document_str;
use std::hint::black_box;

/// A document with `count` path items, half of them behind references.
fn generate_document(count: usize) -> String {
    let mut yaml = String::from("openapi: 3.1.0\ninfo:\n  title: Bench\n  version: 1.0.0\npaths:\n");
    for i in 0..count {
        if i % 2 == 0 {
            yaml.push_str(&format!("  /items/{i}:\n    $ref: '#/components/pathItems/item{i}'\n"));
        } else {
            yaml.push_str(&format!(
                "  /items/{i}:\n    get:\n      operationId: get{i}\n      tags: [items]\n    delete:\n      operationId: delete{i}\n"
            ));
        }
    }
    yaml.push_str("components:\n  pathItems:\n");
    for i in (0..count).step_by(2) {
        yaml.push_str(&format!(
            "    item{i}:\n      summary: item {i}\n      get:\n        operationId: get{i}\n"
        ));
    }
    yaml
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_paths");
    for count in [100, 1000] {
        let yaml = generate_document(count);
        let root = parse_document_str(&yaml).unwrap_or_else(|e| panic!("fixture: {e}"));

        for (name, concurrent) in [("parallel", true), ("sequential", false)] {
            let config = BuildConfig::builder().concurrent_collections(concurrent).build();
            group.bench_with_input(BenchmarkId::new(name, count), &root, |b, root| {
                b.iter(|| black_box(Document::build_from_root(root.clone(), &config)));
            });
        }
    }
    group.finish();
}

fn benchmark_compare(c: &mut Criterion) {
    let left_yaml = generate_document(1000);
    let right_yaml = left_yaml.replace("operationId: get500", "operationId: fetch500");
    let build = |yaml: &str| {
        let root = parse_document_str(yaml).unwrap_or_else(|e| panic!("fixture: {e}"));
        Document::build_from_root(root, &BuildConfig::default())
            .unwrap_or_else(|e| panic!("fixture: {e}"))
    };
    let (left, right) = (build(&left_yaml), build(&right_yaml));

    c.bench_function("compare_1000_paths", |b| {
        b.iter(|| black_box(compare_documents(&left, &right)));
    });
}

criterion_group!(benches, benchmark_build, benchmark_compare);
criterion_main!(benches);
