//! Core data types shared by scanners, validators and the synchronizer.
//!
//! - `translation`: records, values and groups produced by scans
//! - `dictionary`: the parsed dictionary tree the synchronizer transforms

pub mod dictionary;
pub mod translation;

pub use dictionary::*;
pub use translation::*;
