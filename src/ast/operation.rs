// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Boolean operations usable as internal nodes

use crate::error::CsgError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// CSG combinator with a fixed arity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Union,
    Intersection,
    Subtraction,
    Negation,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Union,
        Operation::Intersection,
        Operation::Subtraction,
        Operation::Negation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Union => "union",
            Operation::Intersection => "intersection",
            Operation::Subtraction => "subtraction",
            Operation::Negation => "negation",
        }
    }

    /// Number of children an internal node with this operation has
    pub fn arity(&self) -> usize {
        match self {
            Operation::Negation => 1,
            Operation::Union | Operation::Intersection | Operation::Subtraction => 2,
        }
    }

    pub fn is_unary(&self) -> bool {
        self.arity() == 1
    }

    /// Exact, case-sensitive lookup
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.name() == name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operations a run is allowed to draw from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationTable {
    operations: Vec<Operation>,
}

impl OperationTable {
    /// Table with all four operations
    pub fn standard() -> Self {
        Self {
            operations: Operation::ALL.to_vec(),
        }
    }

    pub fn new(operations: impl IntoIterator<Item = Operation>) -> Self {
        let mut table = Self::default();
        for op in operations {
            table.insert(op);
        }
        table
    }

    /// Build a table from `(line, name)` entries.
    ///
    /// Unknown names are skipped and handed back as
    /// [`CsgError::UnknownOperation`] values; duplicates are dropped.
    pub fn from_names<'a, I>(entries: I) -> (Self, Vec<CsgError>)
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let mut table = Self::default();
        let mut skipped = Vec::new();

        for (line, name) in entries {
            match Operation::from_name(name) {
                Some(op) => table.insert(op),
                None => skipped.push(CsgError::UnknownOperation {
                    line,
                    name: name.to_string(),
                }),
            }
        }

        (table, skipped)
    }

    fn insert(&mut self, op: Operation) {
        if !self.operations.contains(&op) {
            self.operations.push(op);
        }
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn contains(&self, op: Operation) -> bool {
        self.operations.contains(&op)
    }

    pub fn iter(&self) -> impl Iterator<Item = Operation> + '_ {
        self.operations.iter().copied()
    }

    /// Uniform draw; `None` on an empty table
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Operation> {
        self.operations.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity() {
        assert_eq!(Operation::Negation.arity(), 1);
        assert_eq!(Operation::Union.arity(), 2);
        assert_eq!(Operation::Intersection.arity(), 2);
        assert_eq!(Operation::Subtraction.arity(), 2);
    }

    #[test]
    fn test_from_names_skips_unknown_and_duplicates() {
        let entries = vec![(1, "union"), (2, "foobar"), (3, "union"), (4, "negation")];
        let (table, skipped) = OperationTable::from_names(entries);

        assert_eq!(table.len(), 2);
        assert!(table.contains(Operation::Union));
        assert!(table.contains(Operation::Negation));
        assert!(!table.contains(Operation::Subtraction));

        assert_eq!(skipped.len(), 1);
        assert!(matches!(
            &skipped[0],
            CsgError::UnknownOperation { line: 2, name } if name == "foobar"
        ));
    }

    #[test]
    fn test_only_unknown_names_yield_empty_table() {
        let (table, skipped) = OperationTable::from_names(vec![(1, "foo"), (2, "bar")]);
        assert!(table.is_empty());
        assert_eq!(skipped.len(), 2);
    }
}
