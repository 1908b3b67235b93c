// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - parsing, importing, and exporting

mod dot;
mod exporter;
mod importer;
mod parser;

pub use dot::encode as export_dot;
pub use exporter::{save_population, save_primitive_names, save_tree};
pub use importer::{
    parse_fit, parse_operations, parse_primitive_names, read_expression, read_fit,
    read_operations, read_primitive_names,
};
pub use parser::{count_operations, tokenize, ExpressionParser, SymbolKind, SymbolTable};
