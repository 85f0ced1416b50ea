use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

/// A single file modification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Replace (or create) `path` with `content`.
    WriteFile {
        path: String,
        content: String,
        created: bool,
        /// Short description of what changes, shown in previews.
        details: Option<String>,
    },
}

impl Operation {
    pub fn path(&self) -> &str {
        match self {
            Operation::WriteFile { path, .. } => path,
        }
    }

    pub fn execute(&self) -> Result<()> {
        match self {
            Operation::WriteFile { path, content, .. } => {
                fs::write(path, content).with_context(|| format!("Failed to write {}", path))
            }
        }
    }

    pub fn preview(&self) {
        match self {
            Operation::WriteFile {
                path,
                created,
                details,
                ..
            } => {
                let verb = if *created {
                    "create".green()
                } else {
                    "update".yellow()
                };
                match details {
                    Some(details) => println!("  {} {} ({})", verb, path, details),
                    None => println!("  {} {}", verb, path),
                }
            }
        }
    }
}
