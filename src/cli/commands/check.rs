use anyhow::Result;

use super::{
    super::args::CheckArgs,
    CommandResult, CommandSummary,
    helper::{finish, source_issues, successful_merges},
};
use crate::{
    config::Config,
    core::{SyncContext, data::Dictionary},
    issues::{Issue, MissingTranslationIssue, OutOfSyncIssue, StaleDictionaryIssue},
};

/// Report everything `sync` would change or refuse to change.
///
/// Stale dictionaries are errors. Out-of-sync and untranslated entries of the
/// merged dictionaries are warnings.
pub fn check(args: CheckArgs) -> Result<CommandResult> {
    let ctx = SyncContext::new(&args.common)?;

    let mut issues = source_issues(&ctx);
    for merged in successful_merges(ctx.merge_directories(), &mut issues) {
        issues.extend(translation_warnings(
            &merged.path,
            &merged.outcome.dictionary,
            &ctx.config,
        ));
        if merged.outcome.has_changed {
            issues.push(Issue::StaleDictionary(StaleDictionaryIssue {
                file_path: merged.path,
                missing: !merged.exists,
                changes: merged.outcome.changes,
            }));
        }
    }

    Ok(finish(
        CommandSummary::Check,
        issues,
        ctx.files.len(),
        ctx.dictionaries.len(),
    ))
}

/// Secondary entries that are out of sync or missing, per primary id.
pub fn translation_warnings(path: &str, dictionary: &Dictionary, config: &Config) -> Vec<Issue> {
    let Ok(Some(primary)) = dictionary.block(path, &config.primary_locale) else {
        return Vec::new();
    };
    let secondaries: Vec<_> = config
        .secondary_locales()
        .map(|locale| (locale, dictionary.block(path, locale).ok().flatten()))
        .collect();

    let mut issues = Vec::new();
    for entry in &primary.entries {
        let mut missing_in = Vec::new();
        for (locale, block) in &secondaries {
            match block.and_then(|block| block.get(&entry.id)) {
                None => missing_in.push(locale.to_string()),
                Some(translation) if translation.out_of_sync => {
                    issues.push(Issue::OutOfSync(OutOfSyncIssue {
                        file_path: path.to_string(),
                        id: entry.id.clone(),
                        locale: locale.to_string(),
                    }));
                }
                Some(_) => {}
            }
        }
        if !missing_in.is_empty() {
            issues.push(Issue::MissingTranslation(MissingTranslationIssue {
                file_path: path.to_string(),
                id: entry.id.clone(),
                missing_in,
            }));
        }
    }
    issues
}
