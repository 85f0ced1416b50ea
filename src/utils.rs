//! Common utility functions shared across the codebase.

use std::sync::LazyLock;

use regex::Regex;

static NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("valid newline regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid identifier regex")
});

/// Normalizes literal text taken from source code.
///
/// Newlines become spaces, the result is trimmed and whitespace runs
/// collapse to a single space.
///
/// # Examples
///
/// ```
/// use i18n_sync::utils::normalize_text;
///
/// assert_eq!(normalize_text("  Hello\r\n   world  "), "Hello world");
/// assert_eq!(normalize_text("a\tb"), "a b");
/// ```
pub fn normalize_text(text: &str) -> String {
    let single_line = NEWLINE.replace_all(text, " ");
    WHITESPACE_RUN
        .replace_all(single_line.trim(), " ")
        .into_owned()
}

/// Normalizes a referenced id: [`normalize_text`], then `.` becomes `_`.
///
/// ```
/// use i18n_sync::utils::normalize_reference_id;
///
/// assert_eq!(normalize_reference_id(" page.title "), "page_title");
/// ```
pub fn normalize_reference_id(id: &str) -> String {
    normalize_text(id).replace('.', "_")
}

/// Checks if `name` can be written as a bare JavaScript property key.
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}
