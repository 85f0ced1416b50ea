//! Rename detection between existing and incoming primary entries.
//!
//! An id change is recognized by value equality alone, so it must be
//! unambiguous: a pairing is committed only when the value has exactly one
//! candidate on each side.

use std::collections::HashMap;

use crate::core::data::{TranslationRecord, TranslationValue};

/// An existing id that continues under a new id with the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

fn index_by_value<'a>(
    records: &[&'a TranslationRecord],
) -> HashMap<&'a TranslationValue, Vec<usize>> {
    let mut index: HashMap<&'a TranslationValue, Vec<usize>> = HashMap::new();
    for (i, record) in records.iter().enumerate() {
        index.entry(&record.value).or_default().push(i);
    }
    index
}

/// Pair unmatched existing entries with unmatched incoming entries.
///
/// Both slices must only hold ids that do not appear on the other side.
/// Returned renames follow the order of `incoming`.
pub fn match_renames(
    existing: &[&TranslationRecord],
    incoming: &[&TranslationRecord],
) -> Vec<Rename> {
    let existing_by_value = index_by_value(existing);
    let incoming_by_value = index_by_value(incoming);

    incoming
        .iter()
        .filter_map(|record| {
            let [_] = incoming_by_value.get(&record.value)?.as_slice() else {
                return None;
            };
            let [old] = existing_by_value.get(&record.value)?.as_slice() else {
                return None;
            };
            Some(Rename {
                from: existing[*old].id.clone(),
                to: record.id.clone(),
            })
        })
        .collect()
}
