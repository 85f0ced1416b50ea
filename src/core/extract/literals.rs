//! Helpers that read static values out of swc AST nodes.
//!
//! Every helper returns `None` for anything that is not a compile-time
//! literal; callers decide whether that is an error.

use swc_ecma_ast::{
    Expr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXExpr, JSXOpeningElement, Lit, ObjectLit,
    Prop, PropName, PropOrSpread,
};

use crate::core::data::{PluralValue, TranslationValue};

/// A string literal, or a template literal without substitutions.
pub fn string_literal(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(str::to_string),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => match tpl.quasis.as_slice() {
            [quasi] => quasi
                .cooked
                .as_ref()
                .and_then(|cooked| cooked.as_str())
                .map(str::to_string),
            _ => None,
        },
        _ => None,
    }
}

/// Name of an identifier or string-literal property key.
pub fn prop_name(name: &PropName) -> Option<String> {
    match name {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(str::to_string),
        _ => None,
    }
}

/// An object literal with exactly the keys `zero`, `one` and `other`,
/// each holding a string literal.
pub fn plural_value(object: &ObjectLit) -> Option<PluralValue> {
    let mut pairs = Vec::with_capacity(object.props.len());
    for prop in &object.props {
        let PropOrSpread::Prop(prop) = prop else {
            return None;
        };
        let Prop::KeyValue(kv) = &**prop else {
            return None;
        };
        pairs.push((prop_name(&kv.key)?, string_literal(&kv.value)?));
    }
    PluralValue::from_pairs(pairs)
}

/// A string literal or a plural object.
pub fn translation_value(expr: &Expr) -> Option<TranslationValue> {
    match expr {
        Expr::Object(object) => plural_value(object).map(TranslationValue::Plural),
        other => string_literal(other).map(TranslationValue::Text),
    }
}

/// Value of an `id="..."` or `id={'...'}` attribute.
pub fn jsx_attr_string(value: &JSXAttrValue) -> Option<String> {
    match value {
        JSXAttrValue::Str(s) => s.value.as_str().map(str::to_string),
        JSXAttrValue::JSXExprContainer(container) => match &container.expr {
            JSXExpr::Expr(expr) => string_literal(expr),
            JSXExpr::JSXEmptyExpr(_) => None,
        },
        _ => None,
    }
}

/// Looks up a plain attribute by name.
///
/// `Some(None)` means the attribute is present without a value (`<X id />`).
pub fn find_attr<'a>(
    opening: &'a JSXOpeningElement,
    name: &str,
) -> Option<Option<&'a JSXAttrValue>> {
    opening.attrs.iter().find_map(|attr| match attr {
        JSXAttrOrSpread::JSXAttr(attr) => match &attr.name {
            JSXAttrName::Ident(ident) if &*ident.sym == name => Some(attr.value.as_ref()),
            _ => None,
        },
        JSXAttrOrSpread::SpreadElement(_) => None,
    })
}
