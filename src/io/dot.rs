// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Graphviz DOT export for reconstructed trees

use crate::ast::ReconstructedNode;
use std::fmt;

/// Encode a tree as a DOT digraph.
///
/// Nodes are identified by their numeric id so that equal labels stay
/// distinct. Both endpoints are declared again before every edge; repeated
/// identical declarations are harmless to Graphviz. `ordering="out"` keeps
/// left children on the left.
pub fn encode(tree: &ReconstructedNode) -> String {
    Dot(tree).to_string()
}

/// DOT rendering of a reconstructed tree
struct Dot<'a>(&'a ReconstructedNode);

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.0;
        writeln!(f, "digraph CSG {{")?;
        writeln!(f, "    graph [ordering=\"out\"];")?;
        writeln!(f, "    node [fontname=\"Arial\"];")?;

        if tree.is_leaf() {
            write_node(tree, f)?;
        } else {
            write_edges(tree, f)?;
        }

        writeln!(f, "}}")
    }
}

fn write_edges(node: &ReconstructedNode, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for child in node.left().into_iter().chain(node.right()) {
        write_node(node, f)?;
        write_node(child, f)?;
        writeln!(f, "    \"{}\" -> \"{}\";", node.id, child.id)?;
        write_edges(child, f)?;
    }
    Ok(())
}

fn write_node(node: &ReconstructedNode, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "    \"{}\" [label={}];", node.id, quote(&node.label))
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(dot: &str, pattern: &str) -> usize {
        dot.lines().filter(|l| l.contains(pattern)).count()
    }

    #[test]
    fn test_single_leaf() {
        let dot = encode(&ReconstructedNode::leaf(1, "sphere0"));
        assert!(dot.starts_with("digraph CSG {\n"));
        assert!(dot.ends_with("}\n"));
        assert_eq!(count(&dot, "[label="), 1);
        assert_eq!(count(&dot, "->"), 0);
        assert!(dot.contains("\"1\" [label=\"sphere0\"];"));
    }

    #[test]
    fn test_edges_in_preorder() {
        let tree = ReconstructedNode::binary(
            1,
            "union",
            ReconstructedNode::unary(2, "negation", ReconstructedNode::leaf(3, "sphere0")),
            ReconstructedNode::leaf(4, "plane1"),
        );
        let dot = encode(&tree);

        let edges: Vec<&str> = dot
            .lines()
            .filter(|l| l.contains("->"))
            .map(str::trim)
            .collect();
        assert_eq!(
            edges,
            vec!["\"1\" -> \"2\";", "\"2\" -> \"3\";", "\"1\" -> \"4\";"]
        );
        // parent and child declared once per edge
        assert_eq!(count(&dot, "[label="), 6);
        assert!(dot.contains("graph [ordering=\"out\"];"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let dot = encode(&ReconstructedNode::leaf(1, "a\"b"));
        assert!(dot.contains("[label=\"a\\\"b\"]"));
    }

    #[test]
    fn test_encode_matches_display() {
        let tree = ReconstructedNode::unary(1, "negation", ReconstructedNode::leaf(2, "sphere0"));
        let dot = encode(&tree);
        assert_eq!(dot, format!("{}", Dot(&tree)));
        assert_eq!(
            dot,
            "digraph CSG {\n    graph [ordering=\"out\"];\n    node [fontname=\"Arial\"];\n    \"1\" [label=\"negation\"];\n    \"2\" [label=\"sphere0\"];\n    \"1\" -> \"2\";\n}\n"
        );
    }
}
