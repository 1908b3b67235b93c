// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use csgevo::io::{self, ExpressionParser, SymbolTable};
use csgevo::{OperationTable, TerminalSet, TreeGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn terminals() -> TerminalSet {
    TerminalSet::from_names((0..16).map(|i| format!("sphere{}", i)))
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let terminals = terminals();
    let operations = OperationTable::standard();
    let generator = TreeGenerator::new(&terminals, &operations);

    for depth in [4usize, 10] {
        group.bench_with_input(BenchmarkId::new("max_depth", depth), &depth, |b, &depth| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| generator.generate(&mut rng, black_box(depth), 0.7).unwrap());
        });
    }

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");
    let terminals = terminals();
    let operations = OperationTable::standard();
    let generator = TreeGenerator::new(&terminals, &operations);
    let parser = ExpressionParser::new(SymbolTable::from_terminals(&terminals));

    let tree = generator
        .generate(&mut StdRng::seed_from_u64(5), 10, 1.0)
        .unwrap();
    let text = tree.to_canonical_string();

    group.bench_function("serialize", |b| {
        b.iter(|| black_box(&tree).to_canonical_string());
    });

    group.bench_function("parse", |b| {
        b.iter(|| parser.parse(black_box(&text)).unwrap());
    });

    group.bench_function("reconstruct_and_dot", |b| {
        b.iter(|| io::export_dot(&parser.parse_tree(black_box(&text)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_round_trip);
criterion_main!(benches);
