//! Core engine: scanning, validation and dictionary synchronization.
//!
//! ## Module Structure
//!
//! - `data`: translation records and the in-memory dictionary
//! - `parsers`: swc-based parsing of source and dictionary files
//! - `extract`: source scanner and reference scanner
//! - `validate`: duplicate id and dangling reference checks
//! - `sync`: the merge engine and the translation importer
//! - `writer`: deterministic dictionary serialization
//! - `file_scanner`, `context`: file discovery and run orchestration
//!
//! Everything except `file_scanner` and `context` is free of I/O.

pub mod context;
pub mod data;
pub mod error;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod sync;
pub mod validate;
pub mod writer;

pub use context::SyncContext;
pub use data::{PluralValue, TranslationGroup, TranslationRecord, TranslationValue};
pub use error::{ConsistencyError, DictionaryError, ScanError};
