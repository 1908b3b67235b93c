// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Depth-bounded random tree sampling

use crate::ast::{ExpressionTree, OperationTable, TerminalSet, MAX_NESTING};
use crate::error::{CsgError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Depth budget; 0 forces a leaf
    pub max_depth: usize,
    /// Probability of drawing an operation instead of a terminal
    pub operation_probability: f64,
    /// Number of independent trees in a population
    pub population_size: usize,
    /// Seed for reproducible populations
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            operation_probability: 0.7,
            population_size: 10,
            seed: None,
        }
    }
}

/// Random tree generator over read-only catalogs
pub struct TreeGenerator<'a> {
    terminals: &'a TerminalSet,
    operations: &'a OperationTable,
}

impl<'a> TreeGenerator<'a> {
    pub fn new(terminals: &'a TerminalSet, operations: &'a OperationTable) -> Self {
        Self {
            terminals,
            operations,
        }
    }

    /// Check that both catalogs are usable, the probability is in range and
    /// a tree grown with `max_depth` stays within [`MAX_NESTING`]
    pub fn validate(&self, max_depth: usize, operation_probability: f64) -> Result<()> {
        if self.terminals.is_empty() {
            return Err(CsgError::EmptyTerminalSet);
        }
        if self.operations.is_empty() {
            return Err(CsgError::EmptyOperationTable);
        }
        if !(0.0..=1.0).contains(&operation_probability) {
            return Err(CsgError::InvalidProbability(operation_probability));
        }
        // a budget of d yields trees up to d + 1 nodes deep
        if max_depth >= MAX_NESTING {
            return Err(CsgError::NestingTooDeep { limit: MAX_NESTING });
        }
        Ok(())
    }

    /// Generate one random tree.
    ///
    /// A node becomes a leaf when the depth budget is spent or when a uniform
    /// draw in [0, 1) is at least `operation_probability`. Otherwise an
    /// operation is drawn and exactly `arity` children are grown with one
    /// less unit of depth.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        max_depth: usize,
        operation_probability: f64,
    ) -> Result<ExpressionTree> {
        self.validate(max_depth, operation_probability)?;
        self.grow(rng, max_depth, operation_probability)
    }

    fn grow<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        max_depth: usize,
        operation_probability: f64,
    ) -> Result<ExpressionTree> {
        if max_depth == 0 || rng.gen::<f64>() >= operation_probability {
            let terminal = self
                .terminals
                .choose(rng)
                .ok_or(CsgError::EmptyTerminalSet)?;
            return Ok(ExpressionTree::leaf(terminal));
        }

        let op = self
            .operations
            .choose(rng)
            .ok_or(CsgError::EmptyOperationTable)?;
        let children = (0..op.arity())
            .map(|_| self.grow(rng, max_depth - 1, operation_probability))
            .collect::<Result<Vec<_>>>()?;

        ExpressionTree::internal(op, children)
    }

    /// Generate `config.population_size` independent trees
    pub fn population<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        config: &GeneratorConfig,
    ) -> Result<Vec<ExpressionTree>> {
        (0..config.population_size)
            .map(|_| self.generate(rng, config.max_depth, config.operation_probability))
            .collect()
    }
}
