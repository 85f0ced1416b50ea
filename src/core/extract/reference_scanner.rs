use std::collections::HashSet;

use swc_common::Spanned;
use swc_ecma_ast::{CallExpr, Expr, JSXElement};

use super::{
    literals::{find_attr, jsx_attr_string, string_literal},
    usage::{CallKind, ElementKind, UsageError, UsageHandler, scan_usages},
};
use crate::{
    core::error::{AuthoringErrorKind, ScanError},
    utils::normalize_reference_id,
};

/// Collects ids used by `<I18N.Ref id="...">` and `I18N.textById(...)`.
#[derive(Default)]
struct ReferenceCollector {
    ids: Vec<String>,
    seen: HashSet<String>,
}

impl ReferenceCollector {
    fn push(&mut self, raw_id: &str) {
        let id = normalize_reference_id(raw_id);
        if self.seen.insert(id.clone()) {
            self.ids.push(id);
        }
    }
}

impl UsageHandler for ReferenceCollector {
    fn element(&mut self, kind: ElementKind, element: &JSXElement) -> Result<(), UsageError> {
        if kind != ElementKind::Ref {
            return Ok(());
        }
        // Only literal ids can be checked statically; anything else is skipped.
        if let Some(id) = find_attr(&element.opening, "id")
            .flatten()
            .and_then(jsx_attr_string)
        {
            self.push(&id);
        }
        Ok(())
    }

    fn call(&mut self, kind: CallKind, call: &CallExpr) -> Result<(), UsageError> {
        if kind != CallKind::TextById {
            return Ok(());
        }
        let Some(first) = call.args.first() else {
            return Err(UsageError::new(
                call.span.lo,
                AuthoringErrorKind::MissingArgument("textById"),
            ));
        };
        if first.spread.is_some() {
            return Err(UsageError::new(
                first.expr.span().lo,
                AuthoringErrorKind::InvalidReference,
            ));
        }
        match &*first.expr {
            Expr::Ident(_) => Ok(()),
            expr => {
                let id = string_literal(expr).ok_or_else(|| {
                    UsageError::new(expr.span().lo, AuthoringErrorKind::InvalidReference)
                })?;
                self.push(&id);
                Ok(())
            }
        }
    }
}

/// Ids a source file refers to without defining them, de-duplicated in
/// first-seen order.
pub fn scan_references(filename: &str, source_text: &str) -> Result<Vec<String>, ScanError> {
    let collector = scan_usages(filename, source_text, ReferenceCollector::default())?;
    Ok(collector.ids)
}
