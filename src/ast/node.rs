// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Expression tree definitions

use super::Operation;
use crate::error::{CsgError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::rc::Rc;

/// Named leaf symbol derived from a primitive
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Terminal {
    name: String,
}

impl Terminal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Terminals of one run, shared by every generated tree
#[derive(Debug, Clone, Default)]
pub struct TerminalSet {
    terminals: Vec<Rc<Terminal>>,
}

impl TerminalSet {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terminals: names
                .into_iter()
                .map(|name| Rc::new(Terminal::new(name)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.terminals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Terminal> {
        self.terminals.iter().map(|t| t.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(Terminal::name).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|t| t.name() == name)
    }

    /// Uniform draw; the returned handle points at the shared terminal
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Rc<Terminal>> {
        self.terminals.choose(rng).cloned()
    }
}

/// Generic-arity expression tree produced by the generator
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionTree {
    Leaf(Rc<Terminal>),
    Internal {
        op: Operation,
        children: Vec<ExpressionTree>,
    },
}

impl ExpressionTree {
    pub fn leaf(terminal: Rc<Terminal>) -> Self {
        Self::Leaf(terminal)
    }

    /// Internal node; fails unless `children.len()` equals the operation arity
    pub fn internal(op: Operation, children: Vec<ExpressionTree>) -> Result<Self> {
        if children.len() != op.arity() {
            return Err(CsgError::ArityMismatch {
                operation: op.name().to_string(),
                expected: op.arity(),
                found: children.len(),
            });
        }
        Ok(Self::Internal { op, children })
    }

    /// Label of this node: terminal name or operation name
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf(terminal) => terminal.name(),
            Self::Internal { op, .. } => op.name(),
        }
    }

    pub fn children(&self) -> &[ExpressionTree] {
        match self {
            Self::Leaf(_) => &[],
            Self::Internal { children, .. } => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Number of nodes, internal and leaves
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(ExpressionTree::node_count)
            .sum::<usize>()
    }

    /// Depth of the deepest branch. A lone leaf has depth 1.
    pub fn max_depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(ExpressionTree::max_depth)
            .max()
            .unwrap_or(0)
    }

    /// Bracketed form `name[child,...]`, leaves as bare names
    pub fn to_canonical_string(&self) -> String {
        let mut out = String::new();
        self.write_canonical(&mut out);
        out
    }

    fn write_canonical(&self, out: &mut String) {
        out.push_str(self.label());
        if let Self::Internal { children, .. } = self {
            out.push('[');
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                child.write_canonical(out);
            }
            out.push(']');
        }
    }

    /// Labels in preorder: node first, then children left to right
    pub fn preorder_labels(&self) -> Vec<&str> {
        let mut labels = Vec::with_capacity(self.node_count());
        self.collect_preorder(&mut labels);
        labels
    }

    fn collect_preorder<'a>(&'a self, labels: &mut Vec<&'a str>) {
        labels.push(self.label());
        for child in self.children() {
            child.collect_preorder(labels);
        }
    }

    /// One node per line, indented one space per level
    pub fn to_indented_string(&self) -> String {
        let mut out = String::new();
        self.write_indented(0, &mut out);
        out
    }

    fn write_indented(&self, indent: usize, out: &mut String) {
        out.push_str(&" ".repeat(indent));
        out.push_str(self.label());
        out.push('\n');
        for child in self.children() {
            child.write_indented(indent + 1, out);
        }
    }
}

impl fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExpressionTree {
        let terminals = TerminalSet::from_names(["sphere0", "plane1"]);
        let sphere = ExpressionTree::leaf(terminals.terminals[0].clone());
        let plane = ExpressionTree::leaf(terminals.terminals[1].clone());
        let negation = ExpressionTree::internal(Operation::Negation, vec![sphere]).unwrap();
        ExpressionTree::internal(Operation::Union, vec![negation, plane]).unwrap()
    }

    #[test]
    fn test_canonical_string() {
        assert_eq!(sample().to_canonical_string(), "union[negation[sphere0],plane1]");
        assert_eq!(sample().to_string(), "union[negation[sphere0],plane1]");
    }

    #[test]
    fn test_counts() {
        let tree = sample();
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.max_depth(), 3);

        let leaf = ExpressionTree::leaf(Rc::new(Terminal::new("cone0")));
        assert_eq!(leaf.node_count(), 1);
        assert_eq!(leaf.max_depth(), 1);
        assert_eq!(leaf.to_canonical_string(), "cone0");
    }

    #[test]
    fn test_preorder_labels() {
        assert_eq!(
            sample().preorder_labels(),
            vec!["union", "negation", "sphere0", "plane1"]
        );
    }

    #[test]
    fn test_arity_is_enforced() {
        let leaf = ExpressionTree::leaf(Rc::new(Terminal::new("sphere0")));
        let result = ExpressionTree::internal(Operation::Union, vec![leaf]);
        assert!(matches!(
            result,
            Err(CsgError::ArityMismatch { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn test_indented_display() {
        assert_eq!(
            sample().to_indented_string(),
            "union\n negation\n  sphere0\n plane1\n"
        );
    }

    #[test]
    fn test_leaves_share_terminals() {
        let terminals = TerminalSet::from_names(["sphere0"]);
        let mut rng = rand::thread_rng();
        let a = terminals.choose(&mut rng).unwrap();
        let b = terminals.choose(&mut rng).unwrap();
        assert!(Rc::ptr_eq(&a, &b));
    }
}
