//! Dangling reference detection.

use std::collections::{BTreeMap, HashSet};

use crate::core::{
    data::TranslationGroup,
    error::{ConsistencyError, DanglingReferenceError},
};

/// Find referenced ids that no group defines.
///
/// `references` maps each source file to the ids it refers to, in reference
/// order. An id resolves iff some record in `known` has exactly that id.
/// Unresolved ids are reported together, one error per file, files sorted.
pub fn find_dangling(
    references: &BTreeMap<String, Vec<String>>,
    known: &[TranslationGroup],
) -> Vec<ConsistencyError> {
    let known_ids: HashSet<&str> = known
        .iter()
        .flat_map(|group| group.records.iter().map(|r| r.id.as_str()))
        .collect();

    references
        .iter()
        .filter_map(|(file_path, ids)| {
            let missing: Vec<String> = ids
                .iter()
                .filter(|id| !known_ids.contains(id.as_str()))
                .cloned()
                .collect();
            (!missing.is_empty()).then(|| {
                ConsistencyError::from(DanglingReferenceError {
                    file_path: file_path.clone(),
                    ids: missing,
                })
            })
        })
        .collect()
}
