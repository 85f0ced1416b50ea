//! File parsers for source code and dictionary files.
//!
//! - `jsx`: JSX/TSX source parser (uses swc for AST generation)
//! - `dictionary`: reads the exported locale object of a dictionary file

pub mod dictionary;
pub mod jsx;
