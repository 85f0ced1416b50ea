//! Duplicate id detection.

use std::collections::{BTreeSet, HashMap};

use crate::core::{
    data::TranslationGroup,
    error::{ConsistencyError, DuplicateIdError},
};

/// Find ids defined more than once across `groups`.
///
/// Every record counts as an occurrence, so the same id defined twice in
/// one file is a duplicate too. Each id is reported once, listing the
/// distinct files it appears in (sorted). Errors come in the order in which
/// each id was first seen to be duplicated.
pub fn find_duplicates(groups: &[TranslationGroup]) -> Vec<ConsistencyError> {
    let mut occurrences: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut duplicated: Vec<&str> = Vec::new();

    for group in groups {
        for record in &group.records {
            let files = occurrences.entry(record.id.as_str()).or_default();
            files.push(group.filename.as_str());
            if files.len() == 2 {
                duplicated.push(record.id.as_str());
            }
        }
    }

    duplicated
        .into_iter()
        .map(|id| {
            let files: BTreeSet<&str> = occurrences[id].iter().copied().collect();
            ConsistencyError::from(DuplicateIdError {
                id: id.to_string(),
                files: files.into_iter().map(String::from).collect(),
            })
        })
        .collect()
}
