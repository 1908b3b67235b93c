// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Expression parser using pest
//!
//! Parsing runs in two steps. The lexer splits the text into tokens and keeps
//! only the known primitive and operation names. Because the canonical form
//! writes a node's name before its children and never interleaves sibling
//! subtrees, the kept symbols are exactly the preorder traversal of the tree,
//! which is enough to rebuild it once the arity of each symbol is known.

use crate::ast::{Operation, ReconstructedNode, TerminalSet, MAX_NESTING};
use crate::error::{CsgError, Result};
use pest::Parser;
use pest_derive::Parser;
use std::collections::{HashSet, VecDeque};

#[derive(Parser)]
#[grammar = "io/expression.pest"]
struct ExpressionLexer;

/// Split an expression into raw tokens: identifiers, numbers and
/// single punctuation characters
pub fn tokenize(expression: &str) -> Result<Vec<&str>> {
    let mut pairs = ExpressionLexer::parse(Rule::tokens, expression)
        .map_err(|e| CsgError::Tokenize(e.to_string()))?;

    let tokens = match pairs.next() {
        Some(root) => root
            .into_inner()
            .filter(|pair| pair.as_rule() != Rule::EOI)
            .map(|pair| pair.as_str())
            .collect(),
        None => Vec::new(),
    };

    Ok(tokens)
}

/// Number of symbols naming an operation (internal nodes)
pub fn count_operations<S: AsRef<str>>(symbols: &[S]) -> usize {
    symbols
        .iter()
        .filter(|s| Operation::from_name(<S as AsRef<str>>::as_ref(s)).is_some())
        .count()
}

/// What a symbol stands for during reconstruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Primitive,
    Operation(Operation),
}

/// Known primitive names; the operation names are fixed
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    primitives: HashSet<String>,
}

impl SymbolTable {
    pub fn new<I, S>(primitives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            primitives: primitives.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_terminals(terminals: &TerminalSet) -> Self {
        Self::new(terminals.iter().map(|t| t.name().to_string()))
    }

    /// Primitive names take precedence over operation names
    pub fn classify(&self, symbol: &str) -> Option<SymbolKind> {
        if self.primitives.contains(symbol) {
            Some(SymbolKind::Primitive)
        } else {
            Operation::from_name(symbol).map(SymbolKind::Operation)
        }
    }

    pub fn is_known(&self, symbol: &str) -> bool {
        self.classify(symbol).is_some()
    }
}

/// Parser turning serialized expressions back into binary trees
pub struct ExpressionParser {
    symbols: SymbolTable,
}

impl ExpressionParser {
    pub fn new(symbols: SymbolTable) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Known symbols of `expression` in textual order, which is preorder
    pub fn parse(&self, expression: &str) -> Result<Vec<String>> {
        Ok(tokenize(expression)?
            .into_iter()
            .filter(|token| self.symbols.is_known(token))
            .map(str::to_string)
            .collect())
    }

    /// Rebuild the tree from a preorder symbol sequence.
    ///
    /// Ids start at 1 for every call and follow preorder. Trees nesting
    /// deeper than [`MAX_NESTING`] are rejected.
    pub fn reconstruct<S: AsRef<str>>(&self, symbols: &[S]) -> Result<ReconstructedNode> {
        let mut ctx = Reconstruction {
            queue: symbols.iter().map(<S as AsRef<str>>::as_ref).collect(),
            next_id: 0,
            table: &self.symbols,
        };

        let root = ctx.node(None, 1)?;
        if !ctx.queue.is_empty() {
            return Err(CsgError::TrailingSymbols(ctx.queue.len()));
        }
        Ok(root)
    }

    /// `parse` followed by `reconstruct`
    pub fn parse_tree(&self, expression: &str) -> Result<ReconstructedNode> {
        let symbols = self.parse(expression)?;
        self.reconstruct(&symbols)
    }
}

/// State of a single reconstruction call
struct Reconstruction<'a> {
    queue: VecDeque<&'a str>,
    next_id: usize,
    table: &'a SymbolTable,
}

impl<'a> Reconstruction<'a> {
    /// `parent` is the label and id of the node waiting for this child,
    /// `depth` the 1-based level the new node sits on
    fn node(&mut self, parent: Option<(&str, usize)>, depth: usize) -> Result<ReconstructedNode> {
        if depth > MAX_NESTING {
            return Err(CsgError::NestingTooDeep { limit: MAX_NESTING });
        }

        let label = match (self.queue.pop_front(), parent) {
            (Some(label), _) => label,
            (None, Some((parent, id))) => {
                return Err(CsgError::MalformedExpression {
                    parent: parent.to_string(),
                    id,
                })
            }
            (None, None) => return Err(CsgError::EmptyExpression),
        };

        // id is taken before the children are rebuilt
        self.next_id += 1;
        let id = self.next_id;

        match self.table.classify(label) {
            Some(SymbolKind::Primitive) => Ok(ReconstructedNode::leaf(id, label)),
            Some(SymbolKind::Operation(op)) if op.is_unary() => {
                let child = self.node(Some((label, id)), depth + 1)?;
                Ok(ReconstructedNode::unary(id, label, child))
            }
            Some(SymbolKind::Operation(_)) => {
                let left = self.node(Some((label, id)), depth + 1)?;
                let right = self.node(Some((label, id)), depth + 1)?;
                Ok(ReconstructedNode::binary(id, label, left, right))
            }
            None => Err(CsgError::UnknownSymbol(label.to_string())),
        }
    }
}
