// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Binary tree rebuilt from a serialized expression

use serde::Serialize;

/// Node of a reconstructed tree.
///
/// Ids are assigned in preorder starting at 1 and are unique within one tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconstructedNode {
    pub id: usize,
    pub label: String,
    #[serde(flatten)]
    pub shape: NodeShape,
}

/// Child layout of a reconstructed node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeShape {
    Leaf,
    Unary {
        child: Box<ReconstructedNode>,
    },
    Binary {
        left: Box<ReconstructedNode>,
        right: Box<ReconstructedNode>,
    },
}

impl ReconstructedNode {
    pub fn leaf(id: usize, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            shape: NodeShape::Leaf,
        }
    }

    pub fn unary(id: usize, label: impl Into<String>, child: ReconstructedNode) -> Self {
        Self {
            id,
            label: label.into(),
            shape: NodeShape::Unary {
                child: Box::new(child),
            },
        }
    }

    pub fn binary(
        id: usize,
        label: impl Into<String>,
        left: ReconstructedNode,
        right: ReconstructedNode,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            shape: NodeShape::Binary {
                left: Box::new(left),
                right: Box::new(right),
            },
        }
    }

    /// Only child of a unary node, or first child of a binary node
    pub fn left(&self) -> Option<&ReconstructedNode> {
        match &self.shape {
            NodeShape::Leaf => None,
            NodeShape::Unary { child } => Some(child),
            NodeShape::Binary { left, .. } => Some(left),
        }
    }

    pub fn right(&self) -> Option<&ReconstructedNode> {
        match &self.shape {
            NodeShape::Binary { right, .. } => Some(right),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.shape, NodeShape::Leaf)
    }

    pub fn node_count(&self) -> usize {
        1 + self.left().map_or(0, Self::node_count) + self.right().map_or(0, Self::node_count)
    }

    /// Nodes in preorder
    pub fn preorder(&self) -> Vec<&ReconstructedNode> {
        let mut nodes = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            nodes.push(node);
            if let Some(right) = node.right() {
                stack.push(right);
            }
            if let Some(left) = node.left() {
                stack.push(left);
            }
        }
        nodes
    }

    pub fn preorder_labels(&self) -> Vec<&str> {
        self.preorder().into_iter().map(|n| n.label.as_str()).collect()
    }
}
