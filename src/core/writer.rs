//! Serialization of a [`Dictionary`] back to source text.
//!
//! Output is deterministic: the same dictionary always renders to the same
//! bytes, so an unchanged merge never produces a diff.

use std::fmt::Write;

use crate::{
    core::data::{
        Dictionary, LocaleBlock, LocaleValue, OUT_OF_SYNC_MARKER, RootItem, TranslationRecord,
        TranslationValue, compare_ids,
    },
    utils::is_identifier,
};

const INDENT: &str = "  ";

/// Render `dictionary` as the full text of its file.
pub fn render_dictionary(dictionary: &Dictionary) -> String {
    let mut out = String::with_capacity(dictionary.prefix.len() + dictionary.suffix.len() + 256);
    out.push_str(&dictionary.prefix);
    render_root(&mut out, &dictionary.items);
    out.push_str(&dictionary.suffix);
    out
}

fn render_root(out: &mut String, items: &[RootItem]) {
    if items.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{\n");
    for item in items {
        match item {
            RootItem::Spread(raw) => {
                let _ = writeln!(out, "{INDENT}{raw},");
            }
            RootItem::Locale { locale, value } => {
                let _ = write!(out, "{INDENT}{}: ", property_key(locale));
                match value {
                    LocaleValue::Block(block) => render_block(out, block),
                    LocaleValue::Invalid { raw, .. } => out.push_str(raw),
                }
                out.push_str(",\n");
            }
        }
    }
    out.push('}');
}

fn render_block(out: &mut String, block: &LocaleBlock) {
    if block.spreads.is_empty() && block.entries.is_empty() {
        out.push_str("{}");
        return;
    }
    let indent = INDENT.repeat(2);
    out.push_str("{\n");
    for spread in &block.spreads {
        let _ = writeln!(out, "{indent}{spread},");
    }

    let mut entries: Vec<&TranslationRecord> = block.entries.iter().collect();
    entries.sort_by(|a, b| compare_ids(&a.id, &b.id));
    for entry in entries {
        for note in block.notes.get(&entry.id).into_iter().flatten() {
            let _ = writeln!(out, "{indent}{note}");
        }
        if entry.out_of_sync {
            let _ = writeln!(out, "{indent}// {OUT_OF_SYNC_MARKER}");
        }
        let _ = write!(out, "{indent}{}: ", property_key(&entry.id));
        render_value(out, &entry.value, &indent);
        out.push_str(",\n");
    }
    let _ = write!(out, "{INDENT}}}");
}

fn render_value(out: &mut String, value: &TranslationValue, indent: &str) {
    match value {
        TranslationValue::Text(text) => out.push_str(&string_literal(text)),
        TranslationValue::Plural(plural) => {
            out.push_str("{\n");
            for (key, form) in plural.forms() {
                let _ = writeln!(out, "{indent}{INDENT}{key}: {},", string_literal(form));
            }
            let _ = write!(out, "{indent}}}");
        }
    }
}

/// A bare key when `name` is a valid identifier, a quoted one otherwise.
fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// Single-quoted JavaScript string literal.
fn string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{
        data::PluralValue,
        parsers::dictionary::{parse_dictionary, read_locale},
    };

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("plain"), "'plain'");
        assert_eq!(string_literal("it's"), r"'it\'s'");
        assert_eq!(string_literal("a\\b"), r"'a\\b'");
        assert_eq!(string_literal("one\ntwo\tthree\r"), r"'one\ntwo\tthree\r'");
        assert_eq!(string_literal("bell\u{7}"), r"'bell\u0007'");
        assert_eq!(string_literal("Première"), "'Première'");
    }

    #[test]
    fn test_property_keys() {
        assert_eq!(property_key("first"), "first");
        assert_eq!(property_key("Hello world"), "'Hello world'");
        assert_eq!(property_key("en-US"), "'en-US'");
    }

    #[test]
    fn test_render_template() {
        assert_eq!(
            render_dictionary(&Dictionary::template(&["en", "fr"])),
            "export default {\n  en: {},\n  fr: {},\n};\n"
        );
        assert_eq!(
            render_dictionary(&Dictionary::template::<&str>(&[])),
            "export default {};\n"
        );
    }

    #[test]
    fn test_render_full_dictionary() {
        let mut dictionary = Dictionary::template(&["en", "fr"]);
        dictionary.prefix = "import base from '../i18n';\n\nexport default ".to_string();
        dictionary.items.insert(0, RootItem::Spread("...base".to_string()));

        let en = dictionary.ensure_block("i18n.ts", "en").unwrap();
        en.spreads.push("...base.en".to_string());
        en.entries = vec![
            TranslationRecord::new("Save changes", "Save changes"),
            TranslationRecord::new("files", PluralValue::new("No files", "One file", "{count} files")),
            TranslationRecord::new("Cancel", "Cancel"),
        ];
        let fr = dictionary.ensure_block("i18n.ts", "fr").unwrap();
        fr.entries = vec![TranslationRecord::new("Cancel", "Annuler").out_of_sync()];

        assert_snapshot!(render_dictionary(&dictionary), @r"
        import base from '../i18n';

        export default {
          ...base,
          en: {
            ...base.en,
            Cancel: 'Cancel',
            files: {
              zero: 'No files',
              one: 'One file',
              other: '{count} files',
            },
            'Save changes': 'Save changes',
          },
          fr: {
            // @i18n-out-of-sync
            Cancel: 'Annuler',
          },
        };
        ");
    }

    #[test]
    fn test_invalid_locale_is_kept_verbatim() {
        let text = "export default {\n  en: {\n    a: 'A',\n  },\n  fr: ['not', 'an', 'object'],\n};\n";
        let dictionary = parse_dictionary("i18n.ts", text).unwrap();
        assert_eq!(render_dictionary(&dictionary), text);
    }

    #[test]
    fn test_rendered_text_reads_back() {
        let mut dictionary = Dictionary::template(&["en"]);
        dictionary.ensure_block("i18n.ts", "en").unwrap().entries = vec![
            TranslationRecord::new("quote", "It's a \\ \"test\"\nsecond line"),
            TranslationRecord::new("a.b", "Dotted"),
        ];
        let text = render_dictionary(&dictionary);
        let group = read_locale("i18n.ts", &text, "en").unwrap();
        assert_eq!(
            group.records,
            vec![
                TranslationRecord::new("a.b", "Dotted"),
                TranslationRecord::new("quote", "It's a \\ \"test\"\nsecond line"),
            ]
        );
    }

    #[test]
    fn test_canonical_text_renders_unchanged() {
        let text = "// Generated translations\nexport default {\n  en: {\n    // @i18n-out-of-sync\n    a: 'A',\n    b: {\n      zero: 'z',\n      one: 'o',\n      other: 'x',\n    },\n  },\n} as const;\n";
        let dictionary = parse_dictionary("i18n.ts", text).unwrap();
        assert_eq!(render_dictionary(&dictionary), text);
    }

    #[test]
    fn test_entry_comments_render_unchanged() {
        let text = "export default {\n  en: {\n    // keep short, shown in a button\n    /* @i18n-out-of-sync */\n    a: 'A',\n    /** plural */\n    b: 'B',\n  },\n};\n";
        let dictionary = parse_dictionary("i18n.ts", text).unwrap();
        assert_eq!(
            render_dictionary(&dictionary),
            text.replace("/* @i18n-out-of-sync */", "// @i18n-out-of-sync")
        );
    }
}
