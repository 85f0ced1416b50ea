use std::fmt;

/// Plural translation value: the three forms selected by a runtime count.
///
/// Always fully populated. Equality covers all three forms, so changing any
/// single form is a change of the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluralValue {
    pub zero: String,
    pub one: String,
    pub other: String,
}

impl PluralValue {
    /// Keys of a plural object, in the order they are written.
    pub const KEYS: [&'static str; 3] = ["zero", "one", "other"];

    pub fn new(zero: impl Into<String>, one: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            zero: zero.into(),
            one: one.into(),
            other: other.into(),
        }
    }

    /// Build from `(key, value)` pairs, requiring exactly `zero`, `one` and `other`.
    ///
    /// Returns `None` on a missing, unknown or repeated key.
    pub fn from_pairs<I>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let (mut zero, mut one, mut other) = (None, None, None);
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "zero" => &mut zero,
                "one" => &mut one,
                "other" => &mut other,
                _ => return None,
            };
            if slot.replace(value).is_some() {
                return None;
            }
        }
        Some(Self {
            zero: zero?,
            one: one?,
            other: other?,
        })
    }

    /// The forms paired with their keys, in `KEYS` order.
    pub fn forms(&self) -> [(&'static str, &str); 3] {
        [
            ("zero", &self.zero),
            ("one", &self.one),
            ("other", &self.other),
        ]
    }
}

/// Value of a translation: a plain string or a plural value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TranslationValue {
    Text(String),
    Plural(PluralValue),
}

impl TranslationValue {
    pub fn text(value: impl Into<String>) -> Self {
        TranslationValue::Text(value.into())
    }

    pub fn is_plural(&self) -> bool {
        matches!(self, TranslationValue::Plural(_))
    }
}

impl From<&str> for TranslationValue {
    fn from(value: &str) -> Self {
        TranslationValue::Text(value.to_string())
    }
}

impl From<String> for TranslationValue {
    fn from(value: String) -> Self {
        TranslationValue::Text(value)
    }
}

impl From<PluralValue> for TranslationValue {
    fn from(value: PluralValue) -> Self {
        TranslationValue::Plural(value)
    }
}

impl fmt::Display for TranslationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationValue::Text(text) => write!(f, "{}", text),
            TranslationValue::Plural(plural) => write!(
                f,
                "{{zero: {}, one: {}, other: {}}}",
                plural.zero, plural.one, plural.other
            ),
        }
    }
}

/// A single translation: id, value and whether it lags behind the primary locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    pub id: String,
    pub value: TranslationValue,
    /// Only meaningful for non-primary locales.
    pub out_of_sync: bool,
}

impl TranslationRecord {
    pub fn new(id: impl Into<String>, value: impl Into<TranslationValue>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            out_of_sync: false,
        }
    }

    pub fn out_of_sync(mut self) -> Self {
        self.out_of_sync = true;
        self
    }
}

/// Records attributed to one file.
///
/// Either what a source file currently requests, or what a dictionary
/// currently stores for one locale. Ids are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationGroup {
    pub filename: String,
    pub records: Vec<TranslationRecord>,
}

impl TranslationGroup {
    pub fn new(filename: impl Into<String>, records: Vec<TranslationRecord>) -> Self {
        Self {
            filename: filename.into(),
            records,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, id: &str) -> Option<&TranslationRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}
