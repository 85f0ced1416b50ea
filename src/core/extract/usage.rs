//! Single AST traversal shared by the source and reference scanners.
//!
//! The walker recognizes the four translation usage shapes and dispatches
//! them to a [`UsageHandler`]; handlers decide what to collect and what is an
//! authoring error. The first error stops the traversal.

use swc_common::BytePos;
use swc_ecma_ast::{CallExpr, Callee, Expr, JSXElement, JSXElementName, JSXObject, MemberProp};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::{
    error::{AuthoringError, AuthoringErrorKind, ScanError},
    parsers::jsx::{ParsedJSX, parse_jsx_source},
};

/// Name of the translation component and object in source code.
pub const TRANSLATION_OBJECT: &str = "I18N";

/// `<I18N>` vs `<I18N.Ref>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Text,
    Ref,
}

/// `I18N.text(...)` vs `I18N.textById(...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Text,
    TextById,
}

/// An authoring error before it is attached to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError {
    pub pos: BytePos,
    pub kind: AuthoringErrorKind,
}

impl UsageError {
    pub fn new(pos: BytePos, kind: AuthoringErrorKind) -> Self {
        Self { pos, kind }
    }
}

pub trait UsageHandler {
    fn element(&mut self, kind: ElementKind, element: &JSXElement) -> Result<(), UsageError>;

    fn call(&mut self, kind: CallKind, call: &CallExpr) -> Result<(), UsageError>;
}

fn element_kind(name: &JSXElementName) -> Option<ElementKind> {
    match name {
        JSXElementName::Ident(ident) if ident.sym == TRANSLATION_OBJECT => Some(ElementKind::Text),
        JSXElementName::JSXMemberExpr(member) => match &member.obj {
            JSXObject::Ident(obj) if obj.sym == TRANSLATION_OBJECT && member.prop.sym == "Ref" => {
                Some(ElementKind::Ref)
            }
            _ => None,
        },
        _ => None,
    }
}

fn call_kind(callee: &Callee) -> Option<CallKind> {
    let Callee::Expr(expr) = callee else {
        return None;
    };
    let Expr::Member(member) = &**expr else {
        return None;
    };
    let Expr::Ident(obj) = &*member.obj else {
        return None;
    };
    let MemberProp::Ident(method) = &member.prop else {
        return None;
    };
    if obj.sym != TRANSLATION_OBJECT {
        return None;
    }
    match method.sym.as_str() {
        "text" => Some(CallKind::Text),
        "textById" => Some(CallKind::TextById),
        _ => None,
    }
}

struct UsageWalker<'a, H> {
    file_path: &'a str,
    parsed: &'a ParsedJSX,
    handler: H,
    error: Option<AuthoringError>,
}

impl<H> UsageWalker<'_, H> {
    fn fail(&mut self, err: UsageError) {
        let position = self.parsed.position(err.pos);
        self.error = Some(AuthoringError {
            file_path: self.file_path.to_string(),
            line: position.line,
            col: position.col,
            source_line: position.source_line,
            kind: err.kind,
        });
    }
}

impl<H: UsageHandler> Visit for UsageWalker<'_, H> {
    fn visit_jsx_element(&mut self, node: &JSXElement) {
        if self.error.is_some() {
            return;
        }
        if let Some(kind) = element_kind(&node.opening.name)
            && let Err(err) = self.handler.element(kind, node)
        {
            self.fail(err);
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if self.error.is_some() {
            return;
        }
        if let Some(kind) = call_kind(&node.callee)
            && let Err(err) = self.handler.call(kind, node)
        {
            self.fail(err);
            return;
        }
        node.visit_children_with(self);
    }
}

/// Walk an already parsed file, returning the handler with what it collected.
pub fn walk_usages<H: UsageHandler>(
    file_path: &str,
    parsed: &ParsedJSX,
    handler: H,
) -> Result<H, AuthoringError> {
    let mut walker = UsageWalker {
        file_path,
        parsed,
        handler,
        error: None,
    };
    parsed.module.visit_with(&mut walker);
    match walker.error {
        Some(err) => Err(err),
        None => Ok(walker.handler),
    }
}

/// Parse `source_text` and walk it.
pub fn scan_usages<H: UsageHandler>(
    file_path: &str,
    source_text: &str,
    handler: H,
) -> Result<H, ScanError> {
    let parsed =
        parse_jsx_source(source_text.to_string(), file_path).map_err(|message| ScanError::Parse {
            file_path: file_path.to_string(),
            message,
        })?;
    Ok(walk_usages(file_path, &parsed, handler)?)
}
