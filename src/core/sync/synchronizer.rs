//! Merge of freshly scanned source records into a dictionary.
//!
//! The primary locale is driven directly by the source: after a merge it
//! holds exactly the incoming records. Secondary locales hold translator
//! work and are only ever pruned, re-keyed or flagged:
//!
//! | primary outcome | secondary entry                         |
//! |-----------------|-----------------------------------------|
//! | removed         | dropped                                 |
//! | renamed         | carried forward under the new id        |
//! | value changed   | value kept, marked out of sync          |
//! | unchanged       | untouched                               |
//! | added           | nothing is added                        |

use std::collections::{HashMap, HashSet};

use super::{
    ChangeSet, MergeOutcome, dictionary_changed,
    rename::{Rename, match_renames},
};
use crate::core::{
    data::{Dictionary, LocaleBlock, TranslationRecord},
    error::DictionaryError,
};

/// Outcome of reconciling the primary locale, applied to every secondary.
struct PrimaryPlan {
    changes: ChangeSet,
    /// Changed ids whose value switched between text and plural.
    reshaped: HashSet<String>,
}

impl PrimaryPlan {
    fn new(existing: &[TranslationRecord], incoming: &[TranslationRecord]) -> Self {
        let existing_by_id: HashMap<&str, &TranslationRecord> =
            existing.iter().map(|r| (r.id.as_str(), r)).collect();
        let incoming_ids: HashSet<&str> = incoming.iter().map(|r| r.id.as_str()).collect();

        let mut changes = ChangeSet::default();
        let mut reshaped = HashSet::new();
        let mut unmatched_incoming = Vec::new();

        for record in incoming {
            match existing_by_id.get(record.id.as_str()) {
                Some(old) if old.value != record.value => {
                    if old.value.is_plural() != record.value.is_plural() {
                        reshaped.insert(record.id.clone());
                    }
                    changes.changed.push(record.id.clone());
                }
                Some(_) => {}
                None => unmatched_incoming.push(record),
            }
        }

        let unmatched_existing: Vec<&TranslationRecord> = existing
            .iter()
            .filter(|r| !incoming_ids.contains(r.id.as_str()))
            .collect();

        changes.renamed = match_renames(&unmatched_existing, &unmatched_incoming);

        let renamed_from: HashSet<&str> =
            changes.renamed.iter().map(|r| r.from.as_str()).collect();
        let renamed_to: HashSet<&str> = changes.renamed.iter().map(|r| r.to.as_str()).collect();

        changes.removed = unmatched_existing
            .iter()
            .filter(|r| !renamed_from.contains(r.id.as_str()))
            .map(|r| r.id.clone())
            .collect();
        changes.added = unmatched_incoming
            .iter()
            .filter(|r| !renamed_to.contains(r.id.as_str()))
            .map(|r| r.id.clone())
            .collect();

        Self { changes, reshaped }
    }

    fn propagate(&self, block: &mut LocaleBlock) {
        let removed: HashSet<&str> = self.changes.removed.iter().map(String::as_str).collect();
        let changed: HashSet<&str> = self.changes.changed.iter().map(String::as_str).collect();
        let renames: HashMap<&str, &str> = self
            .changes
            .renamed
            .iter()
            .map(|Rename { from, to }| (from.as_str(), to.as_str()))
            .collect();

        // A carried-forward entry replaces whatever already sits under its new id.
        let displaced: HashSet<&str> = block
            .entries
            .iter()
            .filter_map(|entry| renames.get(entry.id.as_str()).copied())
            .collect();

        for (from, to) in &renames {
            if block.get(from).is_some() {
                block.move_notes(from, to);
            }
        }

        let entries = std::mem::take(&mut block.entries);
        block.entries = entries
            .into_iter()
            .filter_map(|mut entry| {
                let id = entry.id.as_str();
                if removed.contains(id) || displaced.contains(id) || self.reshaped.contains(id) {
                    return None;
                }
                if let Some(new_id) = renames.get(id) {
                    entry.id = new_id.to_string();
                } else if changed.contains(id) {
                    entry.out_of_sync = true;
                }
                Some(entry)
            })
            .collect();
    }
}

/// Keeps the first record of every id.
fn unique_by_id(filename: &str, records: &[TranslationRecord]) -> Vec<TranslationRecord> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| {
            let first = seen.insert(record.id.as_str());
            if !first {
                tracing::debug!(file = filename, id = %record.id, "Ignoring repeated incoming id");
            }
            first
        })
        .map(|record| TranslationRecord::new(record.id.clone(), record.value.clone()))
        .collect()
}

/// Merge `incoming` primary records into `dictionary`.
///
/// `available_locales` lists every locale the dictionary must hold; the
/// primary locale is handled whether it is listed or not. Locale blocks that
/// are missing are created empty. Locales in the file but not in
/// `available_locales` are left as they are.
///
/// # Errors
///
/// [`DictionaryError::Corrupted`] if the primary or any listed secondary
/// locale does not hold a well-formed object. Nothing is merged in that case.
pub fn merge<S: AsRef<str>>(
    dictionary: &Dictionary,
    primary_locale: &str,
    incoming: &[TranslationRecord],
    filename: &str,
    available_locales: &[S],
) -> Result<MergeOutcome, DictionaryError> {
    let secondary_locales: Vec<&str> = available_locales
        .iter()
        .map(AsRef::as_ref)
        .filter(|locale| *locale != primary_locale)
        .collect();

    let existing = dictionary
        .block(filename, primary_locale)?
        .map(|block| block.entries.clone())
        .unwrap_or_default();
    for locale in &secondary_locales {
        dictionary.block(filename, locale)?;
    }

    let incoming = unique_by_id(filename, incoming);
    let plan = PrimaryPlan::new(&existing, &incoming);

    for Rename { from, to } in &plan.changes.renamed {
        tracing::debug!(file = filename, %from, %to, "Detected rename");
    }
    for id in &plan.reshaped {
        tracing::debug!(file = filename, %id, "Value shape changed, dropping translations");
    }

    let mut merged = dictionary.clone();

    let primary = merged.ensure_block(filename, primary_locale)?;
    for Rename { from, to } in &plan.changes.renamed {
        primary.move_notes(from, to);
    }
    primary.entries = incoming;
    primary.sort();

    for locale in secondary_locales {
        let block = merged.ensure_block(filename, locale)?;
        plan.propagate(block);
        block.sort();
    }

    let has_changed = dictionary_changed(dictionary, &merged);
    tracing::debug!(
        file = filename,
        added = plan.changes.added.len(),
        removed = plan.changes.removed.len(),
        renamed = plan.changes.renamed.len(),
        changed = plan.changes.changed.len(),
        has_changed,
        "Merged dictionary"
    );

    Ok(MergeOutcome {
        dictionary: merged,
        has_changed,
        changes: plan.changes,
    })
}
