//! Source-level extraction of translation usages.
//!
//! - `usage`: the shared AST walk that finds `<I18N>`, `<I18N.Ref>`,
//!   `I18N.text()` and `I18N.textById()`
//! - `source_scanner`: translations a file defines
//! - `reference_scanner`: ids a file only refers to

pub mod literals;
pub mod reference_scanner;
pub mod source_scanner;
pub mod usage;

pub use reference_scanner::scan_references;
pub use source_scanner::scan_source;
pub use usage::{TRANSLATION_OBJECT, UsageHandler, scan_usages};
