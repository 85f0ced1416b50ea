//! `import`: write externally translated text into secondary locales.
//!
//! The import file is JSON keyed by dictionary path (relative to the source
//! root), then locale, then id:
//!
//! ```json
//! {
//!   "src/i18n.ts": {
//!     "fr": {
//!       "Save": "Enregistrer",
//!       "files": { "zero": "Aucun fichier", "one": "Un fichier", "other": "{count} fichiers" }
//!     }
//!   }
//! }
//! ```

use std::{collections::BTreeMap, fs};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{
    super::args::ImportArgs,
    CommandResult, CommandSummary, DictionaryUpdate, WriteSummary,
    helper::{apply_updates, finish},
};
use crate::{
    core::{
        context::resolve_config,
        data::{PluralValue, TranslationRecord, TranslationValue},
        parsers::dictionary::parse_dictionary,
        sync::{ChangeSet, import_translations},
        writer::render_dictionary,
    },
    issues::{DictionaryIssue, ImportSkippedIssue, Issue},
};

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ImportValue {
    Text(String),
    Plural {
        zero: String,
        one: String,
        other: String,
    },
}

impl From<ImportValue> for TranslationValue {
    fn from(value: ImportValue) -> Self {
        match value {
            ImportValue::Text(text) => TranslationValue::Text(text),
            ImportValue::Plural { zero, one, other } => {
                TranslationValue::Plural(PluralValue::new(zero, one, other))
            }
        }
    }
}

type ImportFile = BTreeMap<String, BTreeMap<String, BTreeMap<String, ImportValue>>>;

pub fn import(args: ImportArgs) -> Result<CommandResult> {
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read import file: {:?}", args.file))?;
    let import_file: ImportFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse import file: {:?}", args.file))?;

    let (config, root_dir) = resolve_config(&args.common)?;
    let dictionary_count = import_file.len();

    let mut issues: Vec<Issue> = Vec::new();
    let mut updates: Vec<DictionaryUpdate> = Vec::new();

    for (dictionary_path, locales) in import_file {
        let path = root_dir.join(&dictionary_path).to_string_lossy().into_owned();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                issues.push(Issue::Dictionary(DictionaryIssue {
                    file_path: path,
                    error: format!("cannot read dictionary: {}", e),
                }));
                continue;
            }
        };
        let mut dictionary = match parse_dictionary(&path, &text) {
            Ok(dictionary) => dictionary,
            Err(err) => {
                issues.push(err.into());
                continue;
            }
        };

        let mut changes = ChangeSet::default();
        let mut has_changed = false;
        let mut failed = false;
        for (locale, entries) in locales {
            if !config.locales.contains(&locale) {
                issues.push(Issue::Dictionary(DictionaryIssue {
                    file_path: path.clone(),
                    error: format!("locale '{}' is not configured", locale),
                }));
                failed = true;
                continue;
            }

            let records: Vec<TranslationRecord> = entries
                .into_iter()
                .map(|(id, value)| TranslationRecord::new(id, value))
                .collect();
            match import_translations(&dictionary, &config.primary_locale, &locale, &records, &path)
            {
                Ok(outcome) => {
                    issues.extend(outcome.changes.skipped.iter().map(|id| {
                        Issue::ImportSkipped(ImportSkippedIssue {
                            file_path: path.clone(),
                            id: id.clone(),
                            locale: locale.clone(),
                        })
                    }));
                    changes.added.extend(outcome.changes.added);
                    changes.changed.extend(outcome.changes.changed);
                    changes.skipped.extend(outcome.changes.skipped);
                    has_changed |= outcome.has_changed;
                    dictionary = outcome.dictionary;
                }
                Err(err) => {
                    issues.push(err.into());
                    failed = true;
                }
            }
        }

        if has_changed && !failed {
            updates.push(DictionaryUpdate {
                content: render_dictionary(&dictionary),
                path,
                created: false,
                changes,
            });
        }
    }

    let written_count = apply_updates(&updates, args.apply, &issues)?;

    Ok(finish(
        CommandSummary::Import(WriteSummary {
            updates,
            is_apply: args.apply,
            written_count,
        }),
        issues,
        0,
        dictionary_count,
    ))
}
