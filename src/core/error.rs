//! Error taxonomy of the core library.
//!
//! - `ScanError`: a source file could not be scanned (syntax error or a
//!   malformed translation usage). Fatal per file, never auto-corrected.
//! - `ConsistencyError`: cross-file problems (duplicate ids, dangling
//!   references). Collected as a batch so one report lists all of them.
//! - `DictionaryError`: a dictionary file does not have the expected
//!   object-of-objects shape. Fatal, a guessed repair could destroy
//!   translator work.

use thiserror::Error;

/// What is wrong with a translation usage in source code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthoringErrorKind {
    #[error("<I18N> must have exactly one child, found {0}")]
    ChildCount(usize),
    #[error("<I18N> child must be static text")]
    NonLiteralChild,
    #[error("`id` attribute of <I18N> must be a string literal")]
    NonLiteralId,
    #[error("I18N.{0}() called without arguments")]
    MissingArgument(&'static str),
    #[error("first argument of I18N.text() must be a string literal or a plural object")]
    InvalidText,
    #[error("plural object must have exactly the keys zero, one and other, each a string literal")]
    MalformedPlural,
    #[error("id argument of I18N.text() must be a string literal")]
    NonLiteralCallId,
    #[error("plural I18N.text() call requires a string literal id as second argument")]
    MissingPluralId,
    #[error("argument of I18N.textById() must be a string literal or an identifier")]
    InvalidReference,
}

/// A malformed translation usage, located in its source file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file_path}:{line}:{col}: {kind}")]
pub struct AuthoringError {
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
    /// The full source line, for report context.
    pub source_line: String,
    pub kind: AuthoringErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("failed to parse {file_path}: {message}")]
    Parse { file_path: String, message: String },
    #[error(transparent)]
    Authoring(#[from] AuthoringError),
}

impl ScanError {
    pub fn file_path(&self) -> &str {
        match self {
            ScanError::Parse { file_path, .. } => file_path,
            ScanError::Authoring(err) => &err.file_path,
        }
    }
}

/// An id claimed by more than one source occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("id '{id}' is defined more than once in: {}", files.join(", "))]
pub struct DuplicateIdError {
    pub id: String,
    /// Sorted, distinct.
    pub files: Vec<String>,
}

/// Reference ids of one file that match no known translation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file_path} references unknown ids: {}", ids.join(", "))]
pub struct DanglingReferenceError {
    pub file_path: String,
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    #[error(transparent)]
    DuplicateId(#[from] DuplicateIdError),
    #[error(transparent)]
    DanglingReference(#[from] DanglingReferenceError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("failed to parse dictionary {file_path}: {message}")]
    Parse { file_path: String, message: String },
    #[error("corrupted dictionary {file_path}: {reason}")]
    Corrupted { file_path: String, reason: String },
    #[error("cannot import into {file_path}: {reason}")]
    InvalidImport { file_path: String, reason: String },
}

impl DictionaryError {
    pub fn corrupted(file_path: impl Into<String>, reason: impl Into<String>) -> Self {
        DictionaryError::Corrupted {
            file_path: file_path.into(),
            reason: reason.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        match self {
            DictionaryError::Parse { file_path, .. }
            | DictionaryError::Corrupted { file_path, .. }
            | DictionaryError::InvalidImport { file_path, .. } => file_path,
        }
    }
}
