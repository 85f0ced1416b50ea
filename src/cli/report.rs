//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format. Kept out of the core so the
//! library can be used without any console output.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use super::{
    actions::{Action, WriteDictionary},
    commands::{CommandResult, CommandSummary, InitSummary, WriteSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer. `issues` must already be sorted.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut renderer = Renderer::new(writer, issues);
    for issue in issues {
        renderer.issue(issue);
    }
    renderer.summary(issues);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(source_files: usize, dictionary_files: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} source {}, {} {} - no issues found",
        source_files,
        plural(source_files, "file", "files"),
        dictionary_files,
        plural(dictionary_files, "dictionary", "dictionaries"),
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

/// Writes issues with a line-number gutter sized for the largest line.
struct Renderer<'w, W: Write> {
    out: &'w mut W,
    gutter: usize,
}

impl<'w, W: Write> Renderer<'w, W> {
    fn new(out: &'w mut W, issues: &[Issue]) -> Self {
        let gutter = issues
            .iter()
            .filter_map(|issue| match issue.location() {
                ReportLocation::Source { line, .. } => Some(line.to_string().len()),
                ReportLocation::File { .. } => None,
            })
            .max()
            .unwrap_or(1);
        Self { out, gutter }
    }

    fn issue(&mut self, issue: &Issue) {
        let severity = issue.report_severity();
        let label = match severity {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };
        let _ = writeln!(
            self.out,
            "{}: \"{}\"  {}",
            label,
            issue.message(),
            issue.report_rule().to_string().dimmed().cyan()
        );

        match issue.location() {
            ReportLocation::Source {
                path,
                line,
                col,
                source_line,
            } => {
                let _ = writeln!(self.out, "  {} {}:{}:{}", "-->".blue(), path, line, col);
                self.snippet(severity, line, col, source_line);
            }
            ReportLocation::File { path } => {
                let _ = writeln!(self.out, "  {} {}", "-->".blue(), path);
            }
        }

        if let Some(details) = issue.details() {
            self.annotation("note:".bold(), &details);
        }
        if let Some(hint) = issue.hint() {
            self.annotation("hint:".bold().cyan(), hint);
        }
        let _ = writeln!(self.out);
    }

    /// The offending source line with a caret under `col` (1-based).
    fn snippet(&mut self, severity: Severity, line: usize, col: usize, source_line: &str) {
        let caret = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };
        let before: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let offset = UnicodeWidthStr::width(before.as_str());
        let width = self.gutter;
        let bar = "|".blue();

        let _ = writeln!(self.out, "{:>width$} {bar}", "");
        let _ = writeln!(self.out, "{:>width$} {bar} {source_line}", line.to_string().blue());
        let _ = writeln!(self.out, "{:>width$} {bar} {:>offset$}{caret}", "", "");
    }

    fn annotation(&mut self, label: ColoredString, text: &str) {
        let width = self.gutter;
        let _ = writeln!(self.out, "{:>width$} {} {label} {text}", "", "=".blue());
    }

    fn summary(&mut self, issues: &[Issue]) {
        let errors = issues
            .iter()
            .filter(|i| i.report_severity() == Severity::Error)
            .count();
        let warnings = issues.len() - errors;
        let _ = writeln!(
            self.out,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            issues.len(),
            errors,
            plural(errors, "error", "errors").red(),
            warnings,
            plural(warnings, "warning", "warnings").yellow()
        );
    }
}

pub fn print(result: &CommandResult) {
    report(&result.issues);

    match &result.summary {
        CommandSummary::Check => {
            if result.issues.is_empty() {
                print_success_to(
                    result.source_files_checked,
                    result.dictionary_files_checked,
                    &mut io::stdout().lock(),
                );
            }
        }
        CommandSummary::Sync(summary) | CommandSummary::Import(summary) => {
            print_write_summary(summary, result);
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_write_summary(summary: &WriteSummary, result: &CommandResult) {
    let total = summary.updates.len();
    if total == 0 {
        if result.issues.is_empty() {
            print_success_to(
                result.source_files_checked,
                result.dictionary_files_checked,
                &mut io::stdout().lock(),
            );
            println!("Dictionaries are up to date.");
        }
        return;
    }

    if !summary.is_apply {
        WriteDictionary::preview(&summary.updates);
        println!(
            "{} {} dictionary file(s).",
            "Would write".yellow().bold(),
            total
        );
        println!("Run with {} to write these files.", "--apply".cyan());
    } else if summary.written_count > 0 {
        println!(
            "{} {} dictionary file(s).",
            "Wrote".green().bold(),
            summary.written_count
        );
    } else {
        println!(
            "{} {} dictionary file(s): fix the errors above first.",
            "Not writing".red().bold(),
            total
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
