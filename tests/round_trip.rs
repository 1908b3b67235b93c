// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Generate, serialize and rebuild trees

use csgevo::ast::ExpressionTree;
use csgevo::io::{self, ExpressionParser, SymbolTable};
use csgevo::{Operation, OperationTable, PrimitiveCatalog, TreeGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;

const FIT: &str = "\
sphere 0 0 0 1
sphere 1 0 0 0.5
plane 0 0 1 -1
cylinder 0 0 1 0 0 0 0.3
torus 0 0 1 0 0 0 0.2 1.0
cone 0 0 1 0 0 0 0.4
ellipsoid 0 0 0 1 2 3 0 0 0
";

fn catalog() -> PrimitiveCatalog {
    io::parse_fit(FIT).expect("fixture parses")
}

fn check_arity(tree: &ExpressionTree) {
    if let ExpressionTree::Internal { op, children } = tree {
        assert_eq!(children.len(), op.arity(), "{} has wrong arity", op);
    }
    for child in tree.children() {
        check_arity(child);
    }
}

#[test]
fn test_terminal_names_follow_catalog_order() {
    let names = catalog().terminals().names().join(",");
    assert_eq!(
        names,
        "sphere0,sphere1,plane2,cylinder3,torus4,cone5,ellipsoid6"
    );
}

#[test]
fn test_generated_trees_respect_bounds() {
    let terminals = catalog().terminals();
    let operations = OperationTable::standard();
    let generator = TreeGenerator::new(&terminals, &operations);
    let mut rng = StdRng::seed_from_u64(2025);

    for max_depth in 0..8 {
        for _ in 0..25 {
            let tree = generator.generate(&mut rng, max_depth, 0.7).unwrap();
            assert!(tree.node_count() >= 1);
            // the depth budget counts operation levels; the final leaf adds one
            assert!(tree.max_depth() <= max_depth + 1);
            check_arity(&tree);
        }
    }
}

#[test]
fn test_round_trip_preserves_preorder() {
    let terminals = catalog().terminals();
    let operations = OperationTable::standard();
    let generator = TreeGenerator::new(&terminals, &operations);
    let parser = ExpressionParser::new(SymbolTable::from_terminals(&terminals));
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let tree = generator.generate(&mut rng, 6, 0.7).unwrap();
        let text = tree.to_canonical_string();

        let symbols = parser.parse(&text).unwrap();
        assert_eq!(symbols, tree.preorder_labels());
        assert_eq!(
            io::count_operations(&symbols),
            tree.node_count() - tree.preorder_labels().iter().filter(|l| terminals.contains(l)).count()
        );

        let rebuilt = parser.reconstruct(&symbols).unwrap();
        assert_eq!(rebuilt.preorder_labels(), tree.preorder_labels());
        assert_eq!(rebuilt.node_count(), tree.node_count());

        let ids: Vec<usize> = rebuilt.preorder().iter().map(|n| n.id).collect();
        let expected: Vec<usize> = (1..=tree.node_count()).collect();
        assert_eq!(ids, expected);
    }
}

#[test]
fn test_negation_only_trees_are_chains() {
    let terminals = catalog().terminals();
    let operations = OperationTable::new([Operation::Negation]);
    let generator = TreeGenerator::new(&terminals, &operations);
    let mut rng = StdRng::seed_from_u64(1);

    let tree = generator.generate(&mut rng, 5, 1.0).unwrap();
    assert_eq!(tree.node_count(), 6);

    let parser = ExpressionParser::new(SymbolTable::from_terminals(&terminals));
    let rebuilt = parser.parse_tree(&tree.to_canonical_string()).unwrap();
    let mut node = &rebuilt;
    while let Some(child) = node.left() {
        assert!(node.right().is_none());
        node = child;
    }
    assert!(node.is_leaf());
}

#[test]
fn test_unknown_operations_leave_no_usable_table() {
    let terminals = catalog().terminals();
    let (operations, skipped) = io::parse_operations("foobar\nxor\n");
    assert!(operations.is_empty());
    assert_eq!(skipped.len(), 2);

    let generator = TreeGenerator::new(&terminals, &operations);
    let mut rng = StdRng::seed_from_u64(0);
    assert!(generator.generate(&mut rng, 3, 0.7).is_err());
}
