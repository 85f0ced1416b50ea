//! Extracts the translations a source file defines.
//!
//! Two authoring patterns define translations:
//!
//! - `<I18N>Literal text</I18N>`, optionally `<I18N id="some-id">`
//! - `I18N.text('Literal text'[, 'some-id'][, config])` or
//!   `I18N.text({ zero, one, other }, 'some-id'[, config])`
//!
//! Anything that cannot be read statically is an authoring error.

use swc_common::Spanned;
use swc_ecma_ast::{CallExpr, Expr, ExprOrSpread, JSXElement, JSXElementChild};

use super::{
    literals::{find_attr, jsx_attr_string, plural_value, string_literal},
    usage::{CallKind, ElementKind, UsageError, UsageHandler, scan_usages},
};
use crate::{
    core::{
        data::{PluralValue, TranslationGroup, TranslationRecord, TranslationValue},
        error::{AuthoringErrorKind, ScanError},
    },
    utils::normalize_text,
};

#[derive(Default)]
struct SourceCollector {
    records: Vec<TranslationRecord>,
}

impl SourceCollector {
    fn element_record(element: &JSXElement) -> Result<TranslationRecord, UsageError> {
        let at = |kind| UsageError::new(element.span.lo, kind);

        // Whitespace-only text containing a newline is layout, not content.
        let children: Vec<&JSXElementChild> = element
            .children
            .iter()
            .filter(|child| match child {
                JSXElementChild::JSXText(text) => {
                    !(text.value.trim().is_empty() && text.value.contains('\n'))
                }
                _ => true,
            })
            .collect();

        let [child] = children.as_slice() else {
            return Err(at(AuthoringErrorKind::ChildCount(children.len())));
        };
        let JSXElementChild::JSXText(text) = child else {
            return Err(UsageError::new(
                child.span().lo,
                AuthoringErrorKind::NonLiteralChild,
            ));
        };
        let value = normalize_text(&text.value);
        if value.is_empty() {
            return Err(at(AuthoringErrorKind::ChildCount(0)));
        }

        let id = match find_attr(&element.opening, "id") {
            None => value.clone(),
            Some(attr) => attr
                .and_then(jsx_attr_string)
                .map(|id| normalize_text(&id))
                .ok_or_else(|| at(AuthoringErrorKind::NonLiteralId))?,
        };

        Ok(TranslationRecord::new(id, value))
    }

    fn call_record(call: &CallExpr) -> Result<TranslationRecord, UsageError> {
        let Some(first) = call.args.first() else {
            return Err(UsageError::new(
                call.span.lo,
                AuthoringErrorKind::MissingArgument("text"),
            ));
        };
        let value = Self::text_argument(first)?;
        let id_arg = call.args.get(1);

        match value {
            TranslationValue::Text(text) => {
                let id = match id_arg {
                    None => text.clone(),
                    Some(arg) => Self::literal_argument(arg)
                        .map(|id| normalize_text(&id))
                        .ok_or_else(|| {
                            UsageError::new(arg.expr.span().lo, AuthoringErrorKind::NonLiteralCallId)
                        })?,
                };
                Ok(TranslationRecord::new(id, text))
            }
            TranslationValue::Plural(plural) => {
                let id = id_arg
                    .and_then(Self::literal_argument)
                    .map(|id| normalize_text(&id))
                    .ok_or_else(|| {
                        UsageError::new(call.span.lo, AuthoringErrorKind::MissingPluralId)
                    })?;
                Ok(TranslationRecord::new(id, plural))
            }
        }
    }

    fn literal_argument(arg: &ExprOrSpread) -> Option<String> {
        match arg.spread {
            Some(_) => None,
            None => string_literal(&arg.expr),
        }
    }

    fn text_argument(arg: &ExprOrSpread) -> Result<TranslationValue, UsageError> {
        let pos = arg.expr.span().lo;
        if arg.spread.is_some() {
            return Err(UsageError::new(pos, AuthoringErrorKind::InvalidText));
        }
        match &*arg.expr {
            Expr::Object(object) => {
                let plural = plural_value(object)
                    .ok_or_else(|| UsageError::new(pos, AuthoringErrorKind::MalformedPlural))?;
                Ok(TranslationValue::Plural(PluralValue::new(
                    normalize_text(&plural.zero),
                    normalize_text(&plural.one),
                    normalize_text(&plural.other),
                )))
            }
            expr => string_literal(expr)
                .map(|text| TranslationValue::Text(normalize_text(&text)))
                .ok_or_else(|| UsageError::new(pos, AuthoringErrorKind::InvalidText)),
        }
    }
}

impl UsageHandler for SourceCollector {
    fn element(&mut self, kind: ElementKind, element: &JSXElement) -> Result<(), UsageError> {
        if kind == ElementKind::Text {
            self.records.push(Self::element_record(element)?);
        }
        Ok(())
    }

    fn call(&mut self, kind: CallKind, call: &CallExpr) -> Result<(), UsageError> {
        if kind == CallKind::Text {
            self.records.push(Self::call_record(call)?);
        }
        Ok(())
    }
}

/// Translations defined by one source file, in source order.
pub fn scan_source(filename: &str, source_text: &str) -> Result<TranslationGroup, ScanError> {
    let collector = scan_usages(filename, source_text, SourceCollector::default())?;
    Ok(TranslationGroup::new(filename, collector.records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AuthoringError;
    use pretty_assertions::assert_eq;

    fn scan(code: &str) -> Vec<TranslationRecord> {
        scan_source("src/page.tsx", code).unwrap().records
    }

    fn authoring_error(code: &str) -> AuthoringError {
        match scan_source("src/page.tsx", code) {
            Err(ScanError::Authoring(err)) => err,
            other => panic!("expected authoring error, got {:?}", other),
        }
    }

    #[test]
    fn test_element_text_is_id_and_value() {
        let records = scan("const a = <I18N>\n    Hello\n    world\n</I18N>;");
        assert_eq!(records, vec![TranslationRecord::new("Hello world", "Hello world")]);
    }

    #[test]
    fn test_element_with_explicit_id() {
        let records = scan(r#"const a = <I18N id="greeting">Hello</I18N>;"#);
        assert_eq!(records, vec![TranslationRecord::new("greeting", "Hello")]);

        let records = scan(r#"const a = <I18N id={'greeting'}>Hello</I18N>;"#);
        assert_eq!(records, vec![TranslationRecord::new("greeting", "Hello")]);
    }

    #[test]
    fn test_element_child_errors() {
        let err = authoring_error("const a = <I18N />;");
        assert_eq!(err.kind, AuthoringErrorKind::ChildCount(0));

        let err = authoring_error("const a = <I18N>Hello <b>you</b></I18N>;");
        assert_eq!(err.kind, AuthoringErrorKind::ChildCount(2));

        let err = authoring_error("const a = <I18N>\n  {name}\n</I18N>;");
        assert_eq!(err.kind, AuthoringErrorKind::NonLiteralChild);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_element_non_literal_id() {
        let err = authoring_error("const a = <I18N id={key}>Hello</I18N>;");
        assert_eq!(err.kind, AuthoringErrorKind::NonLiteralId);

        let err = authoring_error("const a = <I18N id>Hello</I18N>;");
        assert_eq!(err.kind, AuthoringErrorKind::NonLiteralId);
    }

    #[test]
    fn test_ref_element_is_not_a_definition() {
        assert!(scan(r#"const a = <I18N.Ref id="greeting" />;"#).is_empty());
    }

    #[test]
    fn test_text_call_singular() {
        let records = scan(
            r#"
const a = I18N.text('Save');
const b = I18N.text("Cancel  changes", 'cancel');
const c = I18N.text(`Done`, 'done', { name });
"#,
        );
        assert_eq!(
            records,
            vec![
                TranslationRecord::new("Save", "Save"),
                TranslationRecord::new("cancel", "Cancel changes"),
                TranslationRecord::new("done", "Done"),
            ]
        );
    }

    #[test]
    fn test_text_call_plural() {
        let records = scan(
            r#"
const a = I18N.text(
    { zero: 'No files', one: 'One file', other: '{count} files' },
    'files',
    { count },
);
"#,
        );
        assert_eq!(
            records,
            vec![TranslationRecord::new(
                "files",
                PluralValue::new("No files", "One file", "{count} files")
            )]
        );
    }

    #[test]
    fn test_text_call_errors() {
        let err = authoring_error("I18N.text();");
        assert_eq!(err.kind, AuthoringErrorKind::MissingArgument("text"));

        let err = authoring_error("I18N.text(label);");
        assert_eq!(err.kind, AuthoringErrorKind::InvalidText);

        let err = authoring_error("I18N.text(`Hi ${name}`);");
        assert_eq!(err.kind, AuthoringErrorKind::InvalidText);

        let err = authoring_error("I18N.text('Save', id);");
        assert_eq!(err.kind, AuthoringErrorKind::NonLiteralCallId);

        let err = authoring_error("I18N.text({ zero: 'a', one: 'b' }, 'x');");
        assert_eq!(err.kind, AuthoringErrorKind::MalformedPlural);

        let err = authoring_error("I18N.text({ zero: 'a', one: 'b', other: c }, 'x');");
        assert_eq!(err.kind, AuthoringErrorKind::MalformedPlural);

        let err = authoring_error("I18N.text({ zero: 'a', one: 'b', other: 'c' });");
        assert_eq!(err.kind, AuthoringErrorKind::MissingPluralId);
    }

    #[test]
    fn test_text_by_id_is_not_a_definition() {
        assert!(scan("const a = I18N.textById('greeting');").is_empty());
    }

    #[test]
    fn test_first_error_stops_scan() {
        let err = authoring_error("I18N.text('ok');\nI18N.text();\nI18N.text(x);\n");
        assert_eq!(err.line, 2);
    }
}
