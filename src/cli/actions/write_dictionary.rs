//! WriteDictionary action.
//!
//! Writes merged dictionaries back to disk. Used by `sync` and `import`.

use super::{operation::Operation, traits::Action};
use crate::{cli::commands::DictionaryUpdate, issues::change_details};

pub struct WriteDictionary;

impl Action<DictionaryUpdate> for WriteDictionary {
    fn to_operations(updates: &[DictionaryUpdate]) -> Vec<Operation> {
        updates
            .iter()
            .map(|update| Operation::WriteFile {
                path: update.path.clone(),
                content: update.content.clone(),
                created: update.created,
                details: change_details(&update.changes),
            })
            .collect()
    }
}
