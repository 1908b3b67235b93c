// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Writers for populations and primitive name lists

use crate::ast::{ExpressionTree, TerminalSet};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One canonical string per line
pub fn save_population(population: &[ExpressionTree], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create population file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for tree in population {
        writeln!(writer, "{}", tree.to_canonical_string())?;
    }
    writer.flush()?;
    Ok(())
}

/// Single tree, no trailing newline
pub fn save_tree(tree: &ExpressionTree, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, tree.to_canonical_string())
        .with_context(|| format!("Failed to write tree file: {}", path.display()))
}

/// Terminal names on one line, comma-separated, newline-terminated
pub fn save_primitive_names(terminals: &TerminalSet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let line = format!("{}\n", terminals.names().join(","));
    std::fs::write(path, line)
        .with_context(|| format!("Failed to write primitive names: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operation;
    use tempfile::TempDir;

    #[test]
    fn test_save_primitive_names() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("list_primitives.txt");
        let terminals = TerminalSet::from_names(["sphere0", "sphere1", "plane2"]);

        save_primitive_names(&terminals, &path)?;
        assert_eq!(std::fs::read_to_string(&path)?, "sphere0,sphere1,plane2\n");
        Ok(())
    }

    #[test]
    fn test_save_population_and_tree() -> Result<()> {
        let dir = TempDir::new()?;
        let terminals = TerminalSet::from_names(["sphere0", "plane1"]);
        let mut rng = rand::thread_rng();
        let leaf = ExpressionTree::leaf(terminals.choose(&mut rng).unwrap());
        let tree = ExpressionTree::internal(Operation::Negation, vec![leaf.clone()])?;

        let population_path = dir.path().join("expressions.txt");
        save_population(&[tree.clone(), leaf.clone()], &population_path)?;
        let content = std::fs::read_to_string(&population_path)?;
        assert_eq!(
            content,
            format!("negation[{}]\n{}\n", leaf.label(), leaf.label())
        );

        let tree_path = dir.path().join("tree.txt");
        save_tree(&tree, &tree_path)?;
        assert_eq!(std::fs::read_to_string(&tree_path)?, tree.to_canonical_string());
        Ok(())
    }
}
