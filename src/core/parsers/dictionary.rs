//! Dictionary file parser.
//!
//! Turns the exported object of a dictionary file into a [`Dictionary`].
//! Root values that are not well-formed locale objects are kept as
//! [`LocaleValue::Invalid`]; only the locales a caller asks for must be valid.

use swc_common::{Span, Spanned};
use swc_ecma_ast::{
    Decl, Expr, KeyValueProp, Module, ModuleDecl, ModuleItem, ObjectLit, Prop, PropOrSpread,
    SpreadElement,
};

use super::jsx::{ParsedJSX, parse_jsx_source};
use crate::core::{
    data::{
        Dictionary, LocaleBlock, LocaleValue, OUT_OF_SYNC_MARKER, RootItem, TranslationGroup,
        TranslationRecord,
    },
    error::DictionaryError,
    extract::literals::{prop_name, translation_value},
};

/// Parse a whole dictionary file.
pub fn parse_dictionary(file_path: &str, text: &str) -> Result<Dictionary, DictionaryError> {
    let parsed =
        parse_jsx_source(text.to_string(), file_path).map_err(|message| DictionaryError::Parse {
            file_path: file_path.to_string(),
            message,
        })?;

    let object = find_exported_object(&parsed.module).ok_or_else(|| {
        DictionaryError::corrupted(file_path, "no exported object literal found")
    })?;

    let source = parsed.text();
    let prefix = source
        .get(..parsed.offset(object.span.lo))
        .unwrap_or_default()
        .to_string();
    let suffix = source
        .get(parsed.offset(object.span.hi)..)
        .unwrap_or_default()
        .to_string();

    let mut items = Vec::with_capacity(object.props.len());
    for prop in &object.props {
        match prop {
            PropOrSpread::Spread(spread) => {
                items.push(RootItem::Spread(spread_source(&parsed, spread)));
            }
            PropOrSpread::Prop(prop) => {
                let Prop::KeyValue(kv) = &**prop else {
                    return Err(DictionaryError::corrupted(
                        file_path,
                        format!(
                            "line {}: root entries must be `locale: {{ ... }}` pairs",
                            parsed.position(prop.span().lo).line
                        ),
                    ));
                };
                let Some(locale) = prop_name(&kv.key) else {
                    return Err(DictionaryError::corrupted(
                        file_path,
                        format!(
                            "line {}: locale keys must be identifiers or string literals",
                            parsed.position(kv.key.span().lo).line
                        ),
                    ));
                };
                let value = parse_locale_value(&parsed, kv);
                items.push(RootItem::Locale { locale, value });
            }
        }
    }

    Ok(Dictionary {
        prefix,
        items,
        suffix,
    })
}

/// Entries currently stored for `locale`.
///
/// A dictionary without that locale yields an empty group.
pub fn read_locale(
    file_path: &str,
    text: &str,
    locale: &str,
) -> Result<TranslationGroup, DictionaryError> {
    let dictionary = parse_dictionary(file_path, text)?;
    let group = dictionary
        .block(file_path, locale)?
        .map(|block| block.to_group(file_path))
        .unwrap_or_else(|| TranslationGroup::new(file_path, Vec::new()));
    Ok(group)
}

fn find_exported_object(module: &Module) -> Option<&ObjectLit> {
    module.body.iter().find_map(|item| match item {
        ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(export)) => as_object(&export.expr),
        ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => match &export.decl {
            Decl::Var(var) => match var.decls.as_slice() {
                [decl] => decl.init.as_deref().and_then(as_object),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    })
}

/// Unwrap `(...)`, `as const`, `as T` and `satisfies T` around an object literal.
fn as_object(expr: &Expr) -> Option<&ObjectLit> {
    match expr {
        Expr::Object(object) => Some(object),
        Expr::Paren(paren) => as_object(&paren.expr),
        Expr::TsAs(ts_as) => as_object(&ts_as.expr),
        Expr::TsSatisfies(satisfies) => as_object(&satisfies.expr),
        Expr::TsConstAssertion(assertion) => as_object(&assertion.expr),
        _ => None,
    }
}

fn parse_locale_value(parsed: &ParsedJSX, kv: &KeyValueProp) -> LocaleValue {
    let invalid = |reason: String| LocaleValue::Invalid {
        raw: parsed.snippet(kv.value.span()).to_string(),
        reason,
    };
    match &*kv.value {
        Expr::Object(object) => match parse_block(parsed, object) {
            Ok(block) => LocaleValue::Block(block),
            Err(reason) => invalid(reason),
        },
        other => invalid(format!(
            "line {}: expected an object",
            parsed.position(other.span().lo).line
        )),
    }
}

fn parse_block(parsed: &ParsedJSX, object: &ObjectLit) -> Result<LocaleBlock, String> {
    let mut block = LocaleBlock::default();
    for prop in &object.props {
        match prop {
            PropOrSpread::Spread(spread) => block.spreads.push(spread_source(parsed, spread)),
            PropOrSpread::Prop(prop) => {
                let line = parsed.position(prop.span().lo).line;
                let Prop::KeyValue(kv) = &**prop else {
                    return Err(format!("line {}: entries must be `id: value` pairs", line));
                };
                let id = prop_name(&kv.key).ok_or_else(|| {
                    format!(
                        "line {}: keys must be identifiers or string literals",
                        line
                    )
                })?;
                let value = translation_value(&kv.value).ok_or_else(|| {
                    format!(
                        "line {}: value of '{}' must be a string literal or a {{zero, one, other}} object",
                        line, id
                    )
                })?;
                if block.get(&id).is_some() {
                    return Err(format!("line {}: duplicate id '{}'", line, id));
                }
                let (out_of_sync, notes) = leading_comments(parsed, kv.key.span().lo);
                if !notes.is_empty() {
                    block.notes.insert(id.clone(), notes);
                }
                block.entries.push(TranslationRecord {
                    id,
                    value,
                    out_of_sync,
                });
            }
        }
    }
    Ok(block)
}

fn spread_source(parsed: &ParsedJSX, spread: &SpreadElement) -> String {
    let span = Span::new(spread.dot3_token.lo, spread.expr.span().hi);
    parsed.snippet(span).to_string()
}

/// Whether an out-of-sync marker precedes `pos`, and the raw source of every
/// other comment there.
fn leading_comments(parsed: &ParsedJSX, pos: swc_common::BytePos) -> (bool, Vec<String>) {
    let mut marked = false;
    let mut notes = Vec::new();
    for comment in parsed.comments.leading_at(pos) {
        if comment.text.trim() == OUT_OF_SYNC_MARKER {
            marked = true;
        } else {
            notes.push(parsed.snippet(comment.span).to_string());
        }
    }
    (marked, notes)
}
