//! i18n-sync - keeps translation dictionaries in sync with TSX/JSX sources
//!
//! Scans source files for `<I18N>` elements and `I18N.text()` calls, checks
//! ids for duplicates and dangling references, and merges the result into
//! one multi-locale dictionary file per directory without losing translator
//! work: renames are carried forward and stale translations are marked out
//! of sync.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, file writes, reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanning, validation and synchronization engine
//! - `issues`: Issue type definitions and reporting
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;
