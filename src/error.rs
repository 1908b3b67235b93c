// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types shared by the generator, the parser and the file loaders

use thiserror::Error;

/// Failures raised while building catalogs, generating trees or
/// reconstructing them from text.
#[derive(Debug, Error)]
pub enum CsgError {
    /// No terminals were derived from the primitive catalog
    #[error("terminal set is empty: the primitive catalog contains no primitives")]
    EmptyTerminalSet,

    /// No operation survived filtering of the operation file
    #[error("operation table is empty: no known operation was selected")]
    EmptyOperationTable,

    /// Operation probability outside of [0, 1]
    #[error("operation probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    /// Primitive type name not in the catalog
    #[error("line {line}: unknown primitive type '{name}'")]
    UnknownPrimitive { line: usize, name: String },

    /// Primitive parameter that is not a number
    #[error("line {line}: invalid parameter '{value}' for {primitive}")]
    InvalidParameter {
        line: usize,
        primitive: String,
        value: String,
    },

    /// Wrong number of parameters for a primitive type
    #[error("line {line}: {primitive} expects {expected} parameters, found {found}")]
    ParameterCount {
        line: usize,
        primitive: String,
        expected: usize,
        found: usize,
    },

    /// Operation name that is not one of the four known operations.
    /// Loaders report it as a warning and skip the entry.
    #[error("line {line}: unknown operation '{name}'")]
    UnknownOperation { line: usize, name: String },

    /// Internal node built with the wrong number of children
    #[error("operation '{operation}' takes {expected} children, got {found}")]
    ArityMismatch {
        operation: String,
        expected: usize,
        found: usize,
    },

    /// Symbol queue ran out while a child was still expected
    #[error("malformed expression: '{parent}' (node {id}) is missing a child")]
    MalformedExpression { parent: String, id: usize },

    /// Symbol stream ended before any node could be built
    #[error("malformed expression: no known symbol found")]
    EmptyExpression,

    /// Symbols left over after a complete tree was rebuilt
    #[error("malformed expression: {0} symbol(s) left after the root was complete")]
    TrailingSymbols(usize),

    /// Tree deeper than the supported nesting limit
    #[error("expression nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    /// Symbol that is neither a primitive nor an operation reached reconstruction
    #[error("symbol '{0}' is neither a known primitive nor a known operation")]
    UnknownSymbol(String),

    /// Lexer failure
    #[error("failed to tokenize expression: {0}")]
    Tokenize(String),

    /// External renderer exited with a failure status
    #[error("{tool} exited with status {status}")]
    ExternalTool { tool: String, status: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for domain operations
pub type Result<T> = std::result::Result<T, CsgError>;
