//! Source file discovery.
//!
//! Walks the configured include roots and sorts what it finds into source
//! files that may use the translation API and existing dictionary files.
//! Excluded directories are pruned during the walk instead of filtered
//! afterwards.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;

/// Extensions of files the source scanner understands.
pub const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

/// Test-only files, excluded when `ignoreTestFiles` is set.
pub fn test_file_patterns() -> Vec<Pattern> {
    SOURCE_EXTENSIONS
        .iter()
        .flat_map(|ext| [format!("**/*.test.{ext}"), format!("**/*.spec.{ext}")])
        .chain(std::iter::once("**/__tests__/**".to_string()))
        .filter_map(|p| Pattern::new(&p).ok())
        .collect()
}

/// Files found under the include roots, sorted and deduplicated.
#[derive(Debug, Default)]
pub struct Discovery {
    pub sources: BTreeSet<String>,
    pub dictionaries: BTreeSet<String>,
    /// Entries the walk could not read.
    pub inaccessible: usize,
}

/// Ignore rules of one run.
///
/// Entries without wildcards are directories relative to the root; the rest
/// are glob patterns matched against the whole path.
struct PathFilter {
    excluded_dirs: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl PathFilter {
    fn new(root: &Path, config: &Config) -> Self {
        let mut filter = PathFilter {
            excluded_dirs: Vec::new(),
            patterns: Vec::new(),
        };
        for ignore in &config.ignores {
            if !has_wildcard(ignore) {
                filter.excluded_dirs.push(root.join(ignore));
                continue;
            }
            match Pattern::new(ignore) {
                Ok(pattern) => filter.patterns.push(pattern),
                Err(e) => tracing::warn!(pattern = %ignore, error = %e, "Invalid ignore pattern"),
            }
        }
        if config.ignore_test_files {
            filter.patterns.extend(test_file_patterns());
        }
        filter
    }

    fn excludes(&self, path: &Path) -> bool {
        if self.excluded_dirs.iter().any(|dir| path.starts_with(dir)) {
            return true;
        }
        let text = path.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&text))
    }
}

fn has_wildcard(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Directories to walk. No includes means the whole root; `app/[locale]`
/// style entries without wildcards are taken literally.
fn include_roots(root: &Path, config: &Config) -> Vec<PathBuf> {
    if config.includes.is_empty() {
        return vec![root.to_path_buf()];
    }

    let mut roots = Vec::new();
    for include in &config.includes {
        let path = root.join(include);
        if !has_wildcard(include) {
            if path.exists() {
                roots.push(path);
            } else {
                tracing::debug!(path = %path.display(), "Include path does not exist");
            }
            continue;
        }
        match glob(&path.to_string_lossy()) {
            Ok(matches) => roots.extend(matches.flatten().filter(|p| p.is_dir())),
            Err(e) => tracing::warn!(pattern = %include, error = %e, "Invalid include pattern"),
        }
    }
    roots
}

enum FileKind {
    Source,
    Dictionary,
}

fn classify(entry: &DirEntry, dictionary_file_name: &str) -> Option<FileKind> {
    if !entry.file_type().is_file() {
        return None;
    }
    if entry.file_name() == dictionary_file_name {
        return Some(FileKind::Dictionary);
    }
    let ext = entry.path().extension()?.to_str()?;
    SOURCE_EXTENSIONS.contains(&ext).then_some(FileKind::Source)
}

/// Walk the include roots under `root`.
pub fn discover(root: &Path, config: &Config) -> Discovery {
    let filter = PathFilter::new(root, config);
    let mut discovery = Discovery::default();

    for include_root in include_roots(root, config) {
        let walker = WalkDir::new(include_root)
            .into_iter()
            .filter_entry(|entry| !filter.excludes(entry.path()));
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    discovery.inaccessible += 1;
                    tracing::warn!(error = %e, "Cannot access path");
                    continue;
                }
            };
            let path = entry.path().to_string_lossy().into_owned();
            match classify(&entry, &config.dictionary_file_name) {
                Some(FileKind::Source) => {
                    discovery.sources.insert(path);
                }
                Some(FileKind::Dictionary) => {
                    discovery.dictionaries.insert(path);
                }
                None => {}
            }
        }
    }

    discovery
}
