//! In-memory form of a dictionary file.
//!
//! A dictionary file exports one object whose keys are locale codes, each
//! mapping to an object of `id -> value`:
//!
//! ```ts
//! import parent from '../i18n';
//!
//! export default {
//!   en: {
//!     ...parent.en,
//!     first: 'First translation',
//!   },
//!   fr: {
//!     ...parent.fr,
//!     // @i18n-out-of-sync
//!     first: 'Première traduction',
//!   },
//! };
//! ```
//!
//! Text around the exported object is kept verbatim. Spread entries are
//! inherited defaults wired in from other dictionaries; they are kept as raw
//! source text and never expanded.

use std::{cmp::Ordering, collections::BTreeMap};

use super::{TranslationGroup, TranslationRecord};
use crate::core::error::DictionaryError;

/// Text of the comment that marks an entry as out of sync with the primary locale.
pub const OUT_OF_SYNC_MARKER: &str = "@i18n-out-of-sync";

/// Ordering used for entries within a locale block.
///
/// Case-insensitive first so `Apple` and `apple` sit together, then byte order
/// so the result is total and stable.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Entries stored for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleBlock {
    /// Raw source of spread entries (e.g. `...parent.en`), in file order.
    pub spreads: Vec<String>,
    pub entries: Vec<TranslationRecord>,
    /// Raw comments written above an entry, keyed by entry id. The
    /// out-of-sync marker is not a note.
    pub notes: BTreeMap<String, Vec<String>>,
}

impl LocaleBlock {
    pub fn new(entries: Vec<TranslationRecord>) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    pub fn get(&self, id: &str) -> Option<&TranslationRecord> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Sort entries and drop notes whose entry is gone.
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| compare_ids(&a.id, &b.id));
        let entries = &self.entries;
        self.notes
            .retain(|id, _| entries.iter().any(|entry| &entry.id == id));
    }

    /// Re-key the notes of `from` to `to`, replacing any notes of `to`.
    pub fn move_notes(&mut self, from: &str, to: &str) {
        let notes = self.notes.remove(from);
        self.notes.remove(to);
        if let Some(notes) = notes {
            self.notes.insert(to.to_string(), notes);
        }
    }

    /// Entries as a group, spreads excluded.
    pub fn to_group(&self, filename: &str) -> TranslationGroup {
        TranslationGroup::new(filename, self.entries.clone())
    }

    /// True if both blocks hold the same spreads and the same entries,
    /// ignoring entry order.
    pub fn same_content(&self, other: &LocaleBlock) -> bool {
        if self.spreads != other.spreads || self.entries.len() != other.entries.len() {
            return false;
        }
        let mut ours: Vec<&TranslationRecord> = self.entries.iter().collect();
        let mut theirs: Vec<&TranslationRecord> = other.entries.iter().collect();
        ours.sort_by(|a, b| compare_ids(&a.id, &b.id));
        theirs.sort_by(|a, b| compare_ids(&a.id, &b.id));
        ours == theirs
    }
}

/// Value held by a locale key at the root of the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleValue {
    Block(LocaleBlock),
    /// Not a well-formed locale object. Kept verbatim; reading or merging
    /// this locale fails with `reason`.
    Invalid { raw: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootItem {
    Locale { locale: String, value: LocaleValue },
    /// Raw source of a spread at the root of the exported object.
    Spread(String),
}

/// A parsed dictionary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    /// Source text before the exported object (imports, `export default `).
    pub prefix: String,
    pub items: Vec<RootItem>,
    /// Source text after the exported object.
    pub suffix: String,
}

impl Dictionary {
    /// The dictionary written for a directory that has none yet.
    pub fn template<S: AsRef<str>>(locales: &[S]) -> Self {
        Self {
            prefix: "export default ".to_string(),
            items: locales
                .iter()
                .map(|locale| RootItem::Locale {
                    locale: locale.as_ref().to_string(),
                    value: LocaleValue::Block(LocaleBlock::default()),
                })
                .collect(),
            suffix: ";\n".to_string(),
        }
    }

    /// Locale codes present at the root, in file order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            RootItem::Locale { locale, .. } => Some(locale.as_str()),
            RootItem::Spread(_) => None,
        })
    }

    pub fn value(&self, locale: &str) -> Option<&LocaleValue> {
        self.items.iter().find_map(|item| match item {
            RootItem::Locale { locale: l, value } if l == locale => Some(value),
            _ => None,
        })
    }

    fn value_mut(&mut self, locale: &str) -> Option<&mut LocaleValue> {
        self.items.iter_mut().find_map(|item| match item {
            RootItem::Locale { locale: l, value } if l == locale => Some(value),
            _ => None,
        })
    }

    /// The block for `locale`, `None` if the locale is absent.
    ///
    /// Fails if the locale key holds anything but a well-formed object.
    pub fn block(
        &self,
        file_path: &str,
        locale: &str,
    ) -> Result<Option<&LocaleBlock>, DictionaryError> {
        match self.value(locale) {
            None => Ok(None),
            Some(LocaleValue::Block(block)) => Ok(Some(block)),
            Some(LocaleValue::Invalid { reason, .. }) => Err(DictionaryError::corrupted(
                file_path,
                format!("locale '{}': {}", locale, reason),
            )),
        }
    }

    /// Mutable block for `locale`, appended empty if the locale is absent.
    pub fn ensure_block(
        &mut self,
        file_path: &str,
        locale: &str,
    ) -> Result<&mut LocaleBlock, DictionaryError> {
        if self.value(locale).is_none() {
            self.items.push(RootItem::Locale {
                locale: locale.to_string(),
                value: LocaleValue::Block(LocaleBlock::default()),
            });
        }
        match self.value_mut(locale) {
            Some(LocaleValue::Block(block)) => Ok(block),
            Some(LocaleValue::Invalid { reason, .. }) => Err(DictionaryError::corrupted(
                file_path,
                format!("locale '{}': {}", locale, reason),
            )),
            None => Err(DictionaryError::corrupted(
                file_path,
                format!("locale '{}' could not be created", locale),
            )),
        }
    }
}
