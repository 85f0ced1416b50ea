//! Issue types reported by the CLI.
//!
//! Library errors (`ScanError`, `ConsistencyError`, `DictionaryError`) and
//! dictionary findings are converted into one `Issue` enum so the reporter
//! can sort, count and print them uniformly.

use enum_dispatch::enum_dispatch;

use crate::core::{
    error::{AuthoringError, ConsistencyError, DictionaryError, ScanError},
    sync::ChangeSet,
};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Authoring,
    ParseError,
    DuplicateId,
    DanglingReference,
    Dictionary,
    StaleDictionary,
    OutOfSync,
    MissingTranslation,
    ImportSkipped,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Authoring => write!(f, "authoring"),
            Rule::ParseError => write!(f, "parse-error"),
            Rule::DuplicateId => write!(f, "duplicate-id"),
            Rule::DanglingReference => write!(f, "dangling-reference"),
            Rule::Dictionary => write!(f, "dictionary"),
            Rule::StaleDictionary => write!(f, "stale-dictionary"),
            Rule::OutOfSync => write!(f, "out-of-sync"),
            Rule::MissingTranslation => write!(f, "missing-translation"),
            Rule::ImportSkipped => write!(f, "import-skipped"),
        }
    }
}

// ============================================================
// Issue Types - Source Code
// ============================================================

/// Malformed translation usage in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoringIssue {
    pub error: AuthoringError,
}

/// Source or dictionary file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

/// Id defined by more than one usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIdIssue {
    pub id: String,
    /// Sorted, distinct.
    pub files: Vec<String>,
}

/// Ids referenced by a file that no usage defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReferenceIssue {
    pub file_path: String,
    pub ids: Vec<String>,
}

// ============================================================
// Issue Types - Dictionary Files
// ============================================================

/// Dictionary file without the expected shape, or a rejected import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryIssue {
    pub file_path: String,
    pub error: String,
}

/// Dictionary that does not match the source (found by `check`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleDictionaryIssue {
    pub file_path: String,
    /// True if the dictionary file does not exist yet.
    pub missing: bool,
    pub changes: ChangeSet,
}

/// Secondary entry whose text predates the primary text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfSyncIssue {
    pub file_path: String,
    pub id: String,
    pub locale: String,
}

/// Primary id without a translation in some secondary locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    pub file_path: String,
    pub id: String,
    pub missing_in: Vec<String>,
}

/// Import record that was not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSkippedIssue {
    pub file_path: String,
    pub id: String,
    pub locale: String,
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Authoring(AuthoringIssue),
    ParseError(ParseErrorIssue),
    DuplicateId(DuplicateIdIssue),
    DanglingReference(DanglingReferenceIssue),
    Dictionary(DictionaryIssue),
    StaleDictionary(StaleDictionaryIssue),
    OutOfSync(OutOfSyncIssue),
    MissingTranslation(MissingTranslationIssue),
    ImportSkipped(ImportSkippedIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

impl From<ScanError> for Issue {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::Parse { file_path, message } => Issue::ParseError(ParseErrorIssue {
                file_path,
                error: message,
            }),
            ScanError::Authoring(error) => Issue::Authoring(AuthoringIssue { error }),
        }
    }
}

impl From<ConsistencyError> for Issue {
    fn from(err: ConsistencyError) -> Self {
        match err {
            ConsistencyError::DuplicateId(e) => Issue::DuplicateId(DuplicateIdIssue {
                id: e.id,
                files: e.files,
            }),
            ConsistencyError::DanglingReference(e) => {
                Issue::DanglingReference(DanglingReferenceIssue {
                    file_path: e.file_path,
                    ids: e.ids,
                })
            }
        }
    }
}

impl From<DictionaryError> for Issue {
    fn from(err: DictionaryError) -> Self {
        match err {
            DictionaryError::Parse { file_path, message } => Issue::ParseError(ParseErrorIssue {
                file_path,
                error: message,
            }),
            DictionaryError::Corrupted { file_path, reason }
            | DictionaryError::InvalidImport { file_path, reason } => {
                Issue::Dictionary(DictionaryIssue {
                    file_path,
                    error: reason,
                })
            }
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location with the line for context display.
    Source {
        path: &'a str,
        line: usize,
        col: usize,
        source_line: &'a str,
    },
    /// File-level only.
    File { path: &'a str },
}

impl ReportLocation<'_> {
    pub fn path(&self) -> &str {
        match self {
            ReportLocation::Source { path, .. } | ReportLocation::File { path } => path,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            ReportLocation::Source { line, .. } => *line,
            ReportLocation::File { .. } => 0,
        }
    }

    pub fn col(&self) -> usize {
        match self {
            ReportLocation::Source { col, .. } => *col,
            ReportLocation::File { .. } => 0,
        }
    }
}

/// Trait for types that can be reported to CLI.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (id, error, etc.).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for AuthoringIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source {
            path: &self.error.file_path,
            line: self.error.line,
            col: self.error.col,
            source_line: &self.error.source_line,
        }
    }

    fn message(&self) -> String {
        self.error.kind.to_string()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::Authoring
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::ParseError
    }
}

impl Report for DuplicateIdIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: self.files.first().map(String::as_str).unwrap_or_default(),
        }
    }

    fn message(&self) -> String {
        self.id.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::DuplicateId
    }

    fn details(&self) -> Option<String> {
        Some(format!("defined in: {}", self.files.join(", ")))
    }

    fn hint(&self) -> Option<&str> {
        Some("give one of the usages an explicit id")
    }
}

impl Report for DanglingReferenceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.ids.join(", ")
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::DanglingReference
    }

    fn details(&self) -> Option<String> {
        Some("no translation defines these ids".to_string())
    }
}

impl Report for DictionaryIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::Dictionary
    }
}

impl Report for StaleDictionaryIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        if self.missing {
            "dictionary does not exist".to_string()
        } else {
            "dictionary is out of date".to_string()
        }
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::StaleDictionary
    }

    fn details(&self) -> Option<String> {
        change_details(&self.changes)
    }

    fn hint(&self) -> Option<&str> {
        Some("run `i18n-sync sync --apply`")
    }
}

impl Report for OutOfSyncIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.id.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::OutOfSync
    }

    fn details(&self) -> Option<String> {
        Some(format!("translation in {} predates the primary text", self.locale))
    }
}

impl Report for MissingTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.id.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::MissingTranslation
    }

    fn details(&self) -> Option<String> {
        Some(format!("missing in: {}", self.missing_in.join(", ")))
    }
}

impl Report for ImportSkippedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.id.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::ImportSkipped
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "not imported into {}: unknown id or different value shape in the primary locale",
            self.locale
        ))
    }
}

/// Counts of a change set, e.g. `2 added, 1 changed`. `None` if nothing changed.
pub fn change_details(changes: &ChangeSet) -> Option<String> {
    let parts: Vec<String> = [
        ("added", changes.added.len()),
        ("removed", changes.removed.len()),
        ("renamed", changes.renamed.len()),
        ("changed", changes.changed.len()),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(label, count)| format!("{} {}", count, label))
    .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let (a, b) = (self.location(), other.location());
        a.path()
            .cmp(b.path())
            .then_with(|| a.line().cmp(&b.line()))
            .then_with(|| a.col().cmp(&b.col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
            .then_with(|| self.details().cmp(&other.details()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use crate::core::error::{AuthoringErrorKind, DanglingReferenceError, DuplicateIdError};
    use crate::issues::*;

    fn authoring(file: &str, line: usize) -> Issue {
        ScanError::Authoring(AuthoringError {
            file_path: file.to_string(),
            line,
            col: 1,
            source_line: "<I18N>{name}</I18N>".to_string(),
            kind: AuthoringErrorKind::NonLiteralChild,
        })
        .into()
    }

    #[test]
    fn test_scan_errors_convert() {
        let issue = authoring("src/app.tsx", 3);
        assert_eq!(issue.rule(), Rule::Authoring);
        assert_eq!(issue.severity(), Severity::Error);
        assert_eq!(issue.message(), "<I18N> child must be static text");

        let issue: Issue = ScanError::Parse {
            file_path: "src/app.tsx".to_string(),
            message: "Expected '}'".to_string(),
        }
        .into();
        assert_eq!(issue.rule(), Rule::ParseError);
    }

    #[test]
    fn test_consistency_errors_convert() {
        let issue: Issue = ConsistencyError::from(DuplicateIdError {
            id: "badId".to_string(),
            files: vec!["a.tsx".to_string(), "b.tsx".to_string()],
        })
        .into();
        assert_eq!(issue.rule(), Rule::DuplicateId);
        assert_eq!(issue.details().as_deref(), Some("defined in: a.tsx, b.tsx"));

        let issue: Issue = ConsistencyError::from(DanglingReferenceError {
            file_path: "c.tsx".to_string(),
            ids: vec!["my_id".to_string()],
        })
        .into();
        assert_eq!(issue.rule(), Rule::DanglingReference);
        assert_eq!(issue.message(), "my_id");
    }

    #[test]
    fn test_dictionary_errors_convert() {
        let issue: Issue = DictionaryError::corrupted("src/i18n.ts", "locale 'fr': expected an object").into();
        assert_eq!(issue.rule(), Rule::Dictionary);
        assert_eq!(issue.location().path(), "src/i18n.ts");
    }

    #[test]
    fn test_stale_dictionary_details() {
        let issue = StaleDictionaryIssue {
            file_path: "src/i18n.ts".to_string(),
            missing: false,
            changes: ChangeSet {
                added: vec!["a".to_string(), "b".to_string()],
                changed: vec!["c".to_string()],
                ..Default::default()
            },
        };
        assert_eq!(issue.details().as_deref(), Some("2 added, 1 changed"));
        assert_eq!(issue.message(), "dictionary is out of date");
        assert_eq!(change_details(&ChangeSet::default()), None);
    }

    #[test]
    fn test_issue_ordering() {
        let mut issues = vec![
            authoring("src/b.tsx", 1),
            Issue::OutOfSync(OutOfSyncIssue {
                file_path: "src/a/i18n.ts".to_string(),
                id: "x".to_string(),
                locale: "fr".to_string(),
            }),
            authoring("src/a.tsx", 9),
            authoring("src/a.tsx", 2),
        ];
        issues.sort();

        let locations: Vec<(String, usize)> = issues
            .iter()
            .map(|i| (i.location().path().to_string(), i.location().line()))
            .collect();
        assert_eq!(
            locations,
            vec![
                ("src/a.tsx".to_string(), 2),
                ("src/a.tsx".to_string(), 9),
                ("src/a/i18n.ts".to_string(), 0),
                ("src/b.tsx".to_string(), 1),
            ]
        );
    }
}
