//! Actions that modify files.
//!
//! Actions convert command results into Operations and execute them.
//!
//! ```text
//! DictionaryUpdate (merge result that differs from disk)
//!     ↓
//! Action (update → Operation conversion)
//!     ↓
//! Operation (low-level file operation)
//!     ↓
//! execute (file modification)
//! ```
//!
//! - [`WriteDictionary`]: write merged dictionaries (sync, import)

mod operation;
mod traits;
mod write_dictionary;

pub use operation::Operation;
pub use traits::{Action, ActionStats};
pub use write_dictionary::WriteDictionary;
