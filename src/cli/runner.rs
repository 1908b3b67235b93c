// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Subprocess execution runner for Graphviz

use crate::error::CsgError;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Runner that rasterizes DOT descriptions with an external executable
pub struct Runner {
    executable: String,
    default_format: String,
}

impl Runner {
    pub fn new() -> Self {
        Self::with_executable("dot", "png")
    }

    pub fn with_executable(executable: impl Into<String>, default_format: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            default_format: default_format.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Output format from the file extension, else the configured default
    pub fn format_for(&self, output: &Path) -> String {
        output
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
            .map(str::to_lowercase)
            .unwrap_or_else(|| self.default_format.clone())
    }

    /// Pipe `dot_text` into `<executable> -T<format> -o<output>`.
    ///
    /// A non-zero exit is returned as [`CsgError::ExternalTool`].
    pub fn render(&self, dot_text: &str, output: &Path) -> Result<Duration> {
        let start = Instant::now();
        let format = self.format_for(output);

        let mut child = Command::new(&self.executable)
            .arg(format!("-T{}", format))
            .arg(format!("-o{}", output.display()))
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to execute {}", self.executable))?;

        // stdin is closed when it goes out of scope; a renderer that exits
        // early is judged by its status below
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(dot_text.as_bytes()) {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e)
                        .with_context(|| format!("Failed to write to {}", self.executable));
                }
            }
        }

        let status = child
            .wait()
            .with_context(|| format!("Failed to wait for {}", self.executable))?;

        if !status.success() {
            return Err(CsgError::ExternalTool {
                tool: self.executable.clone(),
                status: status.to_string(),
            }
            .into());
        }

        Ok(start.elapsed())
    }

    /// Check if the renderer is available
    pub fn is_available(&self) -> bool {
        Command::new(&self.executable)
            .arg("-V")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
