// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::ast::{ExpressionTree, ReconstructedNode};
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Print every tree of a population, separated by rules.
    /// `verbose` adds the indented form of each tree.
    pub fn report_population(population: &[ExpressionTree], verbose: bool) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!(
            "{} {}",
            "Population size:".bold(),
            population.len().to_string().cyan()
        );
        println!("{}", "━".repeat(80).bright_black());

        for tree in population {
            println!("{}", tree.to_canonical_string());
            println!(
                "  {} {}  {} {}",
                "Nodes:".bright_black(),
                tree.node_count().to_string().cyan(),
                "Depth:".bright_black(),
                tree.max_depth().to_string().cyan()
            );
            if verbose {
                print!("{}", tree.to_indented_string());
            }
            println!("{}", "-".repeat(80).bright_black());
        }
    }

    /// Summary of a generation run
    pub fn report_generation(trees: usize, terminals: usize, operations: usize, duration: Duration) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{}", "Generation".bold());
        println!("{}", "━".repeat(80).bright_black());
        println!("  {} {}", "Trees:".bright_black(), trees.to_string().cyan());
        println!("  {} {}", "Terminals:".bright_black(), terminals.to_string().cyan());
        println!("  {} {}", "Operations:".bright_black(), operations.to_string().cyan());
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Summary of a reconstructed tree
    pub fn report_reconstruction(file: &str, operations: usize, tree: &ReconstructedNode) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Expression:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());
        println!(
            "  {} {}",
            "Operations (internal nodes):".bright_black(),
            operations.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Nodes:".bright_black(),
            tree.node_count().to_string().cyan()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        eprintln!("{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Format duration for display
    pub fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }
}
