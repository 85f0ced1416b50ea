//! Import of externally translated text into a secondary locale.
//!
//! Imported text is authoritative for its locale, so every written entry
//! has its out-of-sync marker cleared.

use std::collections::HashMap;

use super::{ChangeSet, MergeOutcome, dictionary_changed};
use crate::core::{
    data::{Dictionary, TranslationRecord, TranslationValue},
    error::DictionaryError,
};

/// Write `records` into `locale` of `dictionary`.
///
/// Only ids present in the primary locale are written, and only with a
/// value of the same shape (text or plural) as the primary value. Every
/// other record is listed in [`ChangeSet::skipped`]. The target block is
/// created if missing and sorted afterwards.
///
/// # Errors
///
/// - [`DictionaryError::InvalidImport`] when `locale` is the primary locale
/// - [`DictionaryError::Corrupted`] when the primary or target locale does
///   not hold a well-formed object
pub fn import_translations(
    dictionary: &Dictionary,
    primary_locale: &str,
    locale: &str,
    records: &[TranslationRecord],
    filename: &str,
) -> Result<MergeOutcome, DictionaryError> {
    if locale == primary_locale {
        return Err(DictionaryError::InvalidImport {
            file_path: filename.to_string(),
            reason: format!("'{}' is the primary locale", locale),
        });
    }

    let primary: HashMap<&str, &TranslationValue> = dictionary
        .block(filename, primary_locale)?
        .map(|block| {
            block
                .entries
                .iter()
                .map(|entry| (entry.id.as_str(), &entry.value))
                .collect()
        })
        .unwrap_or_default();
    dictionary.block(filename, locale)?;

    let mut imported = dictionary.clone();
    let target = imported.ensure_block(filename, locale)?;
    let mut changes = ChangeSet::default();

    for record in records {
        let accepted = primary
            .get(record.id.as_str())
            .is_some_and(|value| value.is_plural() == record.value.is_plural());
        if !accepted {
            tracing::debug!(file = filename, locale, id = %record.id, "Skipping imported record");
            changes.skipped.push(record.id.clone());
            continue;
        }

        let entry = TranslationRecord::new(record.id.clone(), record.value.clone());
        match target.entries.iter_mut().find(|e| e.id == record.id) {
            Some(existing) if *existing == entry => {}
            Some(existing) => {
                *existing = entry;
                changes.changed.push(record.id.clone());
            }
            None => {
                target.entries.push(entry);
                changes.added.push(record.id.clone());
            }
        }
    }
    target.sort();

    let has_changed = dictionary_changed(dictionary, &imported);
    Ok(MergeOutcome {
        dictionary: imported,
        has_changed,
        changes,
    })
}
