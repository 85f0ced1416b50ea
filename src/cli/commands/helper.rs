use anyhow::Result;

use super::{CommandResult, CommandSummary, DictionaryUpdate};
use crate::{
    cli::actions::{Action, WriteDictionary},
    core::{
        context::{DirectoryMerge, SyncContext},
        sync::MergeOutcome,
        writer::render_dictionary,
    },
    issues::{Issue, Severity},
};

/// Sort the issues and count them by severity.
pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    source_files_checked: usize,
    dictionary_files_checked: usize,
) -> CommandResult {
    issues.sort();
    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    CommandResult {
        summary,
        error_count,
        warning_count: issues.len() - error_count,
        issues,
        source_files_checked,
        dictionary_files_checked,
    }
}

/// Scan failures plus duplicate ids and dangling references.
pub fn source_issues(ctx: &SyncContext) -> Vec<Issue> {
    let mut issues: Vec<Issue> = ctx.scans().errors.iter().cloned().map(Issue::from).collect();
    issues.extend(ctx.consistency_errors().into_iter().map(Issue::from));
    issues
}

/// A merge that succeeded, with the path of its dictionary.
pub struct MergedDictionary {
    pub path: String,
    pub exists: bool,
    pub outcome: MergeOutcome,
}

impl MergedDictionary {
    pub fn to_update(&self) -> DictionaryUpdate {
        DictionaryUpdate {
            path: self.path.clone(),
            created: !self.exists,
            changes: self.outcome.changes.clone(),
            content: render_dictionary(&self.outcome.dictionary),
        }
    }
}

/// Split merges into successes and issues for the failed ones.
pub fn successful_merges(
    merges: Vec<DirectoryMerge>,
    issues: &mut Vec<Issue>,
) -> Vec<MergedDictionary> {
    merges
        .into_iter()
        .filter_map(|merge| match merge.outcome {
            Ok(outcome) => Some(MergedDictionary {
                path: merge.path,
                exists: merge.exists,
                outcome,
            }),
            Err(err) => {
                issues.push(err.into());
                None
            }
        })
        .collect()
}

/// Write `updates` if `apply` is set and no issue is an error.
///
/// Returns the number of files written.
pub fn apply_updates(updates: &[DictionaryUpdate], apply: bool, issues: &[Issue]) -> Result<usize> {
    if !apply || updates.is_empty() {
        return Ok(0);
    }
    if issues.iter().any(|i| i.severity() == Severity::Error) {
        tracing::debug!(pending = updates.len(), "Errors found, not writing dictionaries");
        return Ok(0);
    }
    Ok(WriteDictionary::run(updates)?.files_modified)
}
