use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nsyncrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    #[serde(default = "default_dictionary_file_name")]
    pub dictionary_file_name: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
}

fn default_includes() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_ignore_test_files() -> bool {
    true
}

fn default_locales() -> Vec<String> {
    vec![default_primary_locale()]
}

fn default_primary_locale() -> String {
    "en".to_string()
}

fn default_dictionary_file_name() -> String {
    "i18n.ts".to_string()
}

fn default_source_root() -> String {
    "./".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            ignores: Vec::new(),
            ignore_test_files: default_ignore_test_files(),
            locales: default_locales(),
            primary_locale: default_primary_locale(),
            dictionary_file_name: default_dictionary_file_name(),
            source_root: default_source_root(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns, an empty locale list, or a
    /// primary locale that is not one of `locales`.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths, so
        // `app/[locale]` is valid without escaping.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.locales.is_empty() {
            bail!("'locales' must list at least one locale");
        }
        if !self.locales.contains(&self.primary_locale) {
            bail!(
                "primary locale \"{}\" is not listed in 'locales' ({})",
                self.primary_locale,
                self.locales.join(", ")
            );
        }
        if self.dictionary_file_name.is_empty() || self.dictionary_file_name.contains('/') {
            bail!(
                "'dictionaryFileName' must be a plain file name, got \"{}\"",
                self.dictionary_file_name
            );
        }

        Ok(())
    }

    /// Locales other than the primary one, in configured order.
    pub fn secondary_locales(&self) -> impl Iterator<Item = &str> {
        self.locales
            .iter()
            .map(String::as_str)
            .filter(|locale| *locale != self.primary_locale)
    }
}

/// Pretty JSON of the default configuration, written by `init`.
pub fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&Config::default()).context("Failed to generate default config.")
}

/// Nearest `.i18nsyncrc.json` at or above `start_dir`.
///
/// The search stops at the first directory containing `.git`.
pub fn locate_config(start_dir: &Path) -> Option<PathBuf> {
    let start = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());
    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// A configuration and the file it came from, if any.
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Read and validate a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }
}

pub fn load_config(start_dir: &Path) -> Result<LoadedConfig> {
    let Some(path) = locate_config(start_dir) else {
        tracing::debug!(dir = %start_dir.display(), "No configuration file found");
        return Ok(LoadedConfig {
            config: Config::default(),
            path: None,
        });
    };
    tracing::debug!(path = %path.display(), "Loading configuration");
    Ok(LoadedConfig {
        config: Config::from_file(&path)?,
        path: Some(path),
    })
}
