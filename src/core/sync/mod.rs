//! Dictionary synchronization.
//!
//! - `synchronizer`: merges scanned source records into a dictionary
//! - `importer`: writes externally supplied translations into one locale
//! - `rename`: value-based rename matching used by the synchronizer

pub mod importer;
pub mod rename;
pub mod synchronizer;

pub use importer::import_translations;
pub use rename::Rename;
pub use synchronizer::merge;

use crate::core::data::{Dictionary, LocaleValue, RootItem};

/// What a merge or import did, id by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub renamed: Vec<Rename>,
    pub changed: Vec<String>,
    /// Import records that were not written.
    pub skipped: Vec<String>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.renamed.is_empty()
            && self.changed.is_empty()
            && self.skipped.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub dictionary: Dictionary,
    /// True iff the dictionary needs to be written back.
    pub has_changed: bool,
    pub changes: ChangeSet,
}

/// Compares every locale of `after` with the same locale in `before`.
///
/// Entry order is ignored; a locale missing from `before` counts as a change.
pub(crate) fn dictionary_changed(before: &Dictionary, after: &Dictionary) -> bool {
    after.items.iter().any(|item| {
        let RootItem::Locale { locale, value } = item else {
            return false;
        };
        match (before.value(locale), value) {
            (None, _) => true,
            (Some(LocaleValue::Block(old)), LocaleValue::Block(new)) => !old.same_content(new),
            (Some(old), new) => old != new,
        }
    })
}
