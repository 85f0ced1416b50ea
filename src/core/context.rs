use std::{
    cell::OnceCell,
    collections::{BTreeMap, HashSet},
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        data::{Dictionary, TranslationGroup},
        error::{ConsistencyError, DictionaryError, ScanError},
        extract::{TRANSLATION_OBJECT, scan_references, scan_source},
        file_scanner::discover,
        parsers::dictionary::parse_dictionary,
        sync::{MergeOutcome, merge},
        validate::{find_dangling, find_duplicates},
    },
};

/// What one source file contributed to the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScan {
    pub group: TranslationGroup,
    pub references: Vec<String>,
}

/// Results of scanning every source file.
#[derive(Debug, Default)]
pub struct ScanData {
    /// Successful scans of files that use the translation API, sorted by path.
    pub files: Vec<FileScan>,
    /// Files that could not be read or scanned.
    pub errors: Vec<ScanError>,
}

/// Merge result for one directory's dictionary file.
#[derive(Debug)]
pub struct DirectoryMerge {
    /// Path of the dictionary file.
    pub path: String,
    /// True if the dictionary file exists on disk.
    pub exists: bool,
    pub outcome: Result<MergeOutcome, DictionaryError>,
}

/// Orchestrates scanning, validation and merging for one run.
///
/// The core library functions are pure; this context owns every file read.
/// Writes are left to the commands.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--primary-locale en`)
/// 2. `.i18nsyncrc.json` config file
/// 3. Built-in defaults
pub struct SyncContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Candidate source files, sorted.
    pub files: Vec<String>,

    /// Dictionary files found while scanning, sorted.
    pub dictionaries: Vec<String>,

    scans: OnceCell<ScanData>,
}

impl SyncContext {
    /// Create a new `SyncContext` from command line arguments.
    ///
    /// Loads configuration (CLI args > config file > defaults) and discovers
    /// source files. Scanning is deferred to [`SyncContext::scans`].
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let (config, root_dir) = resolve_config(common_args)?;
        Ok(Self::with_config(config, root_dir))
    }

    /// Create a context from an already resolved configuration.
    pub fn with_config(config: Config, root_dir: PathBuf) -> Self {
        let discovery = discover(&root_dir, &config);
        if discovery.inaccessible > 0 {
            tracing::warn!(
                count = discovery.inaccessible,
                "Paths skipped due to access errors"
            );
        }

        let files: Vec<String> = discovery.sources.into_iter().collect();
        let dictionaries: Vec<String> = discovery.dictionaries.into_iter().collect();

        tracing::debug!(
            files = files.len(),
            dictionaries = dictionaries.len(),
            "Discovered files"
        );

        Self {
            config,
            root_dir,
            files,
            dictionaries,
            scans: OnceCell::new(),
        }
    }

    /// Scan every source file (lazy initialization).
    ///
    /// Files are read and scanned in parallel. Files that never mention the
    /// translation object are skipped before parsing.
    pub fn scans(&self) -> &ScanData {
        self.scans.get_or_init(|| {
            let results: Vec<Option<Result<FileScan, ScanError>>> = self
                .files
                .par_iter()
                .map(|file_path| scan_file(file_path))
                .collect();

            let mut data = ScanData::default();
            for result in results.into_iter().flatten() {
                match result {
                    Ok(scan) => data.files.push(scan),
                    Err(err) => {
                        tracing::debug!(file = err.file_path(), error = %err, "Scan failed");
                        data.errors.push(err);
                    }
                }
            }
            data
        })
    }

    /// Groups of every successfully scanned file.
    pub fn groups(&self) -> Vec<TranslationGroup> {
        self.scans()
            .files
            .iter()
            .map(|scan| scan.group.clone())
            .collect()
    }

    /// Duplicate ids and dangling references across all scanned files.
    pub fn consistency_errors(&self) -> Vec<ConsistencyError> {
        let groups = self.groups();
        let references: BTreeMap<String, Vec<String>> = self
            .scans()
            .files
            .iter()
            .filter(|scan| !scan.references.is_empty())
            .map(|scan| (scan.group.filename.clone(), scan.references.clone()))
            .collect();

        let mut errors = find_duplicates(&groups);
        errors.extend(find_dangling(&references, &groups));
        errors
    }

    /// Merge each directory's records into its dictionary.
    ///
    /// Every directory with a scanned file or an existing dictionary gets
    /// exactly one merge over the union of its files' records. Directories
    /// without a dictionary start from an empty template.
    pub fn merge_directories(&self) -> Vec<DirectoryMerge> {
        let mut by_dir: BTreeMap<PathBuf, Vec<&TranslationGroup>> = BTreeMap::new();
        for scan in &self.scans().files {
            let dir = parent_dir(&scan.group.filename);
            by_dir.entry(dir).or_default().push(&scan.group);
        }
        for dictionary in &self.dictionaries {
            by_dir.entry(parent_dir(dictionary)).or_default();
        }

        // Directories with a failed scan would lose that file's entries.
        let failed_dirs: HashSet<PathBuf> = self
            .scans()
            .errors
            .iter()
            .map(|err| parent_dir(err.file_path()))
            .collect();

        let config = &self.config;
        by_dir
            .into_par_iter()
            .filter(|(dir, _)| !failed_dirs.contains(dir))
            .map(|(dir, groups)| merge_directory(config, &dir, &groups))
            .collect()
    }
}

/// Load the configuration for a run and apply CLI overrides.
///
/// Returns the configuration and the source root every path is resolved
/// against: `--source-root` if given, the configured `sourceRoot` otherwise.
pub fn resolve_config(common_args: &CommonArgs) -> Result<(Config, PathBuf)> {
    let start_dir = common_args
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let path = start_dir
        .to_str()
        .with_context(|| anyhow!("Invalid path: {:?}", start_dir))?;

    let loaded = load_config(Path::new(path))?;
    if loaded.path.is_none() {
        tracing::info!("No config file found, using default configuration");
    }

    let mut config = loaded.config;
    if let Some(ref primary_locale) = common_args.primary_locale {
        config.primary_locale = primary_locale.clone();
    }
    if !common_args.locales.is_empty() {
        config.locales = common_args.locales.clone();
    }
    config.validate()?;

    let root_dir = common_args
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.source_root));
    Ok((config, root_dir))
}

fn merge_directory(config: &Config, dir: &Path, groups: &[&TranslationGroup]) -> DirectoryMerge {
    let path = dictionary_path(config, dir);
    let incoming: Vec<_> = groups
        .iter()
        .flat_map(|group| group.records.iter().cloned())
        .collect();

    let (exists, dictionary) = match fs::read_to_string(&path) {
        Ok(text) => (true, parse_dictionary(&path, &text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            (false, Ok(Dictionary::template(&config.locales)))
        }
        Err(e) => (
            true,
            Err(DictionaryError::corrupted(
                &path,
                format!("cannot read dictionary: {}", e),
            )),
        ),
    };

    let outcome = dictionary.and_then(|dictionary| {
        merge(
            &dictionary,
            &config.primary_locale,
            &incoming,
            &path,
            &config.locales,
        )
    });

    DirectoryMerge {
        path,
        exists,
        outcome,
    }
}

/// Path of the dictionary file owned by `dir`.
fn dictionary_path(config: &Config, dir: &Path) -> String {
    dir.join(&config.dictionary_file_name)
        .to_string_lossy()
        .into_owned()
}

fn scan_file(file_path: &str) -> Option<Result<FileScan, ScanError>> {
    let source = match fs::read_to_string(file_path) {
        Ok(source) => source,
        Err(e) => {
            return Some(Err(ScanError::Parse {
                file_path: file_path.to_string(),
                message: format!("Failed to read file: {}", e),
            }));
        }
    };

    if !source.contains(TRANSLATION_OBJECT) {
        return None;
    }

    let scan = scan_source(file_path, &source).and_then(|group| {
        let references = scan_references(file_path, &source)?;
        Ok(FileScan { group, references })
    });
    Some(scan)
}

fn parent_dir(file_path: &str) -> PathBuf {
    Path::new(file_path)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
