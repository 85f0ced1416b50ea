use crate::{core::sync::ChangeSet, issues::Issue};

#[derive(Debug)]
pub enum CommandSummary {
    Sync(WriteSummary),
    Check,
    Import(WriteSummary),
    Init(InitSummary),
}

/// A dictionary file whose merged content differs from what is on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryUpdate {
    pub path: String,
    /// True if the file does not exist yet.
    pub created: bool,
    pub changes: ChangeSet,
    /// Full rendered text of the file.
    pub content: String,
}

#[derive(Debug)]
pub struct WriteSummary {
    pub updates: Vec<DictionaryUpdate>,
    pub is_apply: bool,
    /// Number of files written; 0 in dry-run or when errors blocked writing.
    pub written_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running an i18n-sync command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found by the command, sorted.
    pub issues: Vec<Issue>,
    /// Number of source files that were scanned.
    pub source_files_checked: usize,
    /// Number of existing dictionary files that were read.
    pub dictionary_files_checked: usize,
}
