// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Expression tree module
//!
//! Defines the generated n-ary expression tree and the strictly binary tree
//! rebuilt by the parser.

mod node;
mod operation;
mod reconstructed;

pub use node::{ExpressionTree, Terminal, TerminalSet};
pub use operation::{Operation, OperationTable};
pub use reconstructed::{NodeShape, ReconstructedNode};

/// Deepest tree, counted in nodes along a root-to-leaf path, that the
/// generator may produce and the parser will rebuild. Tree walks are
/// recursive, so the limit keeps them within the thread stack.
pub const MAX_NESTING: usize = 256;
