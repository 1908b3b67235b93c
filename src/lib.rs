// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! csgevo
//!
//! Random CSG expression trees for genetic programming. Samples trees over a
//! catalog of fitted primitives and the boolean operations, writes them in a
//! bracketed canonical form, and rebuilds binary trees from that form for
//! Graphviz rendering.

pub mod ast;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gp;
pub mod io;

pub use ast::{
    ExpressionTree, Operation, OperationTable, ReconstructedNode, Terminal, TerminalSet, MAX_NESTING,
};
pub use config::CsgConfig;
pub use error::CsgError;
pub use geometry::{Primitive, PrimitiveCatalog, PrimitiveKind};
pub use gp::{GeneratorConfig, TreeGenerator};
pub use io::{export_dot, ExpressionParser, SymbolTable};

/// Rebuild a tree from its canonical string, given the primitive names
pub fn reconstruct_expression<I, S>(expression: &str, primitives: I) -> error::Result<ReconstructedNode>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ExpressionParser::new(SymbolTable::new(primitives)).parse_tree(expression)
}

/// DOT description of a canonical string, ready for Graphviz
pub fn expression_to_dot<I, S>(expression: &str, primitives: I) -> error::Result<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tree = reconstruct_expression(expression, primitives)?;
    Ok(export_dot(&tree))
}
