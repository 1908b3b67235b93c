// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! csgevo CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use csgevo::cli::{Reporter, Runner};
use csgevo::{io, CsgConfig, OperationTable, SymbolTable, TreeGenerator};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "csgevo")]
#[command(about = "Random CSG expression trees: generate populations and draw saved expressions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./csgevo.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a population of random trees from fitted primitives
    Generate {
        /// Input file containing a list of primitives with fitted parameters
        #[arg(value_name = "FIT")]
        fit: PathBuf,

        /// File where random trees are saved
        #[arg(long)]
        trees_out: Option<PathBuf>,

        /// File where the list of primitive names is saved
        #[arg(long)]
        primitives_out: Option<PathBuf>,

        /// Max depth for the generated random trees
        #[arg(long)]
        max_depth: Option<usize>,

        /// Number of generated random trees
        #[arg(long)]
        pop_size: Option<usize>,

        /// Probability of drawing an operation at each node
        #[arg(long)]
        probability: Option<f64>,

        /// File listing the operations to use, one per line
        #[arg(long, value_name = "FILE")]
        operations: Option<PathBuf>,

        /// Seed for reproducible populations
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Rebuild a saved expression and render it as a figure
    Reconstruct {
        /// File with the expression on its first line
        expression: PathBuf,

        /// File with the comma-separated primitive names
        primitives: PathBuf,

        /// Output figure (format taken from the extension)
        figure: PathBuf,

        /// Also write the DOT description to this file
        #[arg(long, value_name = "FILE")]
        dot: Option<PathBuf>,

        /// Print the reconstructed tree as JSON
        #[arg(long)]
        json: bool,

        /// Skip running the renderer
        #[arg(long)]
        no_render: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    if let Err(e) = run() {
        Reporter::report_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => {
            let mut config = CsgConfig::from_file(path)?;
            config.apply_env(|key| std::env::var(key).ok())?;
            config
        }
        None => CsgConfig::load()?,
    };

    match cli.command {
        Commands::Generate {
            fit,
            trees_out,
            primitives_out,
            max_depth,
            pop_size,
            probability,
            operations,
            seed,
        } => {
            let mut config = config;
            if let Some(path) = trees_out {
                config.output.trees_out = path;
            }
            if let Some(path) = primitives_out {
                config.output.primitives_out = path;
            }
            if let Some(depth) = max_depth {
                config.generation.max_depth = depth;
            }
            if let Some(size) = pop_size {
                config.generation.population_size = size;
            }
            if let Some(p) = probability {
                config.generation.operation_probability = p;
            }
            if seed.is_some() {
                config.generation.seed = seed;
            }
            generate_command(&fit, operations.as_deref(), &config, cli.verbose)
        }
        Commands::Reconstruct {
            expression,
            primitives,
            figure,
            dot,
            json,
            no_render,
        } => reconstruct_command(
            &expression,
            &primitives,
            &figure,
            dot.as_deref(),
            json,
            no_render,
            &config,
            cli.verbose,
        ),
        Commands::Version => {
            println!("csgevo v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn generate_command(
    fit: &Path,
    operations_file: Option<&Path>,
    config: &CsgConfig,
    verbose: bool,
) -> Result<()> {
    let start = Instant::now();

    let catalog = io::read_fit(fit)?;
    let terminals = catalog.terminals();

    let operations = match operations_file {
        Some(path) => {
            let (table, skipped) = io::read_operations(path)?;
            for entry in &skipped {
                Reporter::report_warning(&format!("{}: {}", path.display(), entry));
            }
            table
        }
        None => OperationTable::standard(),
    };

    if verbose {
        Reporter::report_info(&format!(
            "{} primitives, operations: {}",
            catalog.len(),
            operations
                .iter()
                .map(|op| op.name())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    let settings = &config.generation;
    let generator = TreeGenerator::new(&terminals, &operations);
    generator.validate(settings.max_depth, settings.operation_probability)?;

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let progress = if verbose {
        let pb = ProgressBar::new(settings.population_size as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut population = Vec::with_capacity(settings.population_size);
    for _ in 0..settings.population_size {
        population.push(generator.generate(
            &mut rng,
            settings.max_depth,
            settings.operation_probability,
        )?);
        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    io::save_population(&population, &config.output.trees_out)?;
    io::save_primitive_names(&terminals, &config.output.primitives_out)?;

    if verbose {
        Reporter::report_population(&population, true);
        Reporter::report_generation(
            population.len(),
            terminals.len(),
            operations.len(),
            start.elapsed(),
        );
    }
    Reporter::success(&format!(
        "{} trees -> {}, primitives -> {}",
        population.len(),
        config.output.trees_out.display(),
        config.output.primitives_out.display()
    ));

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn reconstruct_command(
    expression_file: &Path,
    primitives_file: &Path,
    figure: &Path,
    dot_file: Option<&Path>,
    json: bool,
    no_render: bool,
    config: &CsgConfig,
    verbose: bool,
) -> Result<()> {
    let expression = io::read_expression(expression_file)?;
    let primitives = io::read_primitive_names(primitives_file)?;

    let parser = io::ExpressionParser::new(SymbolTable::new(primitives));
    let symbols = parser.parse(&expression)?;
    let operations = io::count_operations(&symbols);
    println!("Number of operations in the tree (internal nodes): {}", operations);

    let tree = parser.reconstruct(&symbols)?;
    if verbose {
        Reporter::report_reconstruction(&expression_file.display().to_string(), operations, &tree);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    }

    let dot_text = io::export_dot(&tree);
    if let Some(path) = dot_file {
        std::fs::write(path, &dot_text)?;
        if verbose {
            Reporter::report_info(&format!("DOT written to: {}", path.display()));
        }
    }

    if no_render {
        return Ok(());
    }

    let runner = Runner::with_executable(&config.render.dot_path, &config.render.format);
    let elapsed = runner.render(&dot_text, figure)?;
    if verbose {
        Reporter::report_info(&format!("Rendered in {}", Reporter::format_duration(elapsed)));
    }
    Reporter::success(&format!("Figure written to {}", figure.display()));

    Ok(())
}
