// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Run configuration system

use crate::gp::GeneratorConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "csgevo.toml";

/// Output file locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Population, one canonical string per line
    pub trees_out: PathBuf,
    /// Comma-separated terminal names
    pub primitives_out: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            trees_out: PathBuf::from("expressions.txt"),
            primitives_out: PathBuf::from("list_primitives.txt"),
        }
    }
}

/// External renderer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Graphviz executable
    pub dot_path: String,
    /// Format used when the output file has no extension
    pub format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dot_path: "dot".to_string(),
            format: "png".to_string(),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsgConfig {
    pub generation: GeneratorConfig,
    pub output: OutputConfig,
    pub render: RenderConfig,
}

impl CsgConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: CsgConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `csgevo.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `CSGEVO_*` overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dot) = lookup("CSGEVO_DOT_PATH") {
            self.render.dot_path = dot;
        }

        if let Some(seed) = lookup("CSGEVO_SEED") {
            self.generation.seed = Some(
                seed.parse()
                    .with_context(|| format!("CSGEVO_SEED is not an integer: {}", seed))?,
            );
        }

        if let Some(depth) = lookup("CSGEVO_MAX_DEPTH") {
            self.generation.max_depth = depth
                .parse()
                .with_context(|| format!("CSGEVO_MAX_DEPTH is not an integer: {}", depth))?;
        }

        if let Some(size) = lookup("CSGEVO_POP_SIZE") {
            self.generation.population_size = size
                .parse()
                .with_context(|| format!("CSGEVO_POP_SIZE is not an integer: {}", size))?;
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}
