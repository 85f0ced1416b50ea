use anyhow::Result;

use super::{
    super::args::SyncArgs,
    CommandResult, CommandSummary, DictionaryUpdate, WriteSummary,
    helper::{apply_updates, finish, source_issues, successful_merges},
};
use crate::core::SyncContext;

/// Merge every directory's translations into its dictionary.
///
/// Dry-run unless `--apply`; nothing is written while any error remains.
pub fn sync(args: SyncArgs) -> Result<CommandResult> {
    let ctx = SyncContext::new(&args.common)?;

    let mut issues = source_issues(&ctx);
    let updates: Vec<DictionaryUpdate> = successful_merges(ctx.merge_directories(), &mut issues)
        .iter()
        .filter(|merged| merged.outcome.has_changed)
        .map(|merged| merged.to_update())
        .collect();

    let written_count = apply_updates(&updates, args.apply, &issues)?;

    Ok(finish(
        CommandSummary::Sync(WriteSummary {
            updates,
            is_apply: args.apply,
            written_count,
        }),
        issues,
        ctx.files.len(),
        ctx.dictionaries.len(),
    ))
}
