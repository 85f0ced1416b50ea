//! Cross-file consistency checks.
//!
//! Each check is a pure function over scan results and returns every
//! problem it finds, so one report can list all of them.
//!
//! - `duplicates`: ids claimed by more than one source occurrence
//! - `dangling`: referenced ids with no matching translation

pub mod dangling;
pub mod duplicates;

pub use dangling::find_dangling;
pub use duplicates::find_duplicates;
