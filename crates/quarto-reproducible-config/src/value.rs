/*
 * value.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Read-only metadata tree consumed by the reproducible-environment notice.
 */

//! Metadata tree types.
//!
//! Document front matter and project configuration both arrive as a
//! [`MetaValue`] tree. Scalars keep their YAML representation so that
//! numbers and booleans survive until they are coerced to text; rich text
//! (already-parsed markdown handed over by the host) is kept as [`Inline`]s
//! and flattened on demand by [`MetaValue::to_plain_text`].

use yaml_rust2::Yaml;

/// A single inline element of rich metadata text.
///
/// This is the subset of the Pandoc inline model that can appear in
/// metadata strings. Anything the host cannot express with these variants
/// should be handed over as a plain [`MetaValue::Scalar`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Str(String),
    Space,
    SoftBreak,
    LineBreak,
    Emph(Vec<Inline>),
    Strong(Vec<Inline>),
    Code(String),
    Span(Vec<Inline>),
    Link(Vec<Inline>),
    /// Raw markup for a specific output format (`format`, `text`).
    ///
    /// Never contributes to plain text.
    RawInline(String, String),
}

/// A metadata map entry. Entries keep their source order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaMapEntry {
    pub key: String,
    pub value: MetaValue,
}

/// A node of the metadata tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    /// Atomic values (String, Integer, Real, Boolean, Null).
    Scalar(Yaml),

    /// Rich text, already parsed by the host.
    Inlines(Vec<Inline>),

    /// Ordered sequence.
    List(Vec<MetaValue>),

    /// Ordered mapping with string keys.
    Map(Vec<MetaMapEntry>),
}

impl Default for MetaValue {
    /// Default is an empty Map, matching the convention for document metadata.
    fn default() -> Self {
        MetaValue::Map(Vec::new())
    }
}

impl MetaValue {
    /// Create a string scalar.
    pub fn string(s: impl Into<String>) -> Self {
        MetaValue::Scalar(Yaml::String(s.into()))
    }

    /// Create a boolean scalar.
    pub fn bool(b: bool) -> Self {
        MetaValue::Scalar(Yaml::Boolean(b))
    }

    /// Create an integer scalar.
    pub fn integer(i: i64) -> Self {
        MetaValue::Scalar(Yaml::Integer(i))
    }

    /// Create a null scalar.
    pub fn null() -> Self {
        MetaValue::Scalar(Yaml::Null)
    }

    /// Create a map from `(key, value)` pairs, preserving their order.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, MetaValue)>) -> Self {
        MetaValue::Map(
            entries
                .into_iter()
                .map(|(key, value)| MetaMapEntry {
                    key: key.into(),
                    value,
                })
                .collect(),
        )
    }

    /// Check if this is a null scalar.
    pub fn is_null(&self) -> bool {
        matches!(self, MetaValue::Scalar(Yaml::Null))
    }

    /// Check if this is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, MetaValue::Map(_))
    }

    /// Get map entries if this is a map.
    pub fn as_map_entries(&self) -> Option<&[MetaMapEntry]> {
        match self {
            MetaValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a key if this is a map.
    ///
    /// Null values are reported as absent: a key bound to `~` in YAML
    /// behaves exactly like a missing key. The first matching entry wins.
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.as_map_entries()?
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.value)
            .filter(|v| !v.is_null())
    }

    /// Get the boolean value if this is a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetaValue::Scalar(Yaml::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    /// Coerce to plain text.
    ///
    /// Rich text is flattened to its literal content, numbers keep the form
    /// they were written in, and compound values concatenate their children.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        write_plain_text(self, &mut out);
        out
    }
}

fn write_plain_text(value: &MetaValue, out: &mut String) {
    match value {
        MetaValue::Scalar(yaml) => match yaml {
            Yaml::String(s) | Yaml::Real(s) => out.push_str(s),
            Yaml::Integer(i) => out.push_str(&i.to_string()),
            Yaml::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
            Yaml::Array(items) => {
                for item in items {
                    write_plain_text(&MetaValue::Scalar(item.clone()), out);
                }
            }
            Yaml::Hash(hash) => {
                for item in hash.values() {
                    write_plain_text(&MetaValue::Scalar(item.clone()), out);
                }
            }
            Yaml::Null | Yaml::Alias(_) | Yaml::BadValue => {}
        },
        MetaValue::Inlines(inlines) => write_inlines(inlines, out),
        MetaValue::List(items) => {
            for item in items {
                write_plain_text(item, out);
            }
        }
        MetaValue::Map(entries) => {
            for entry in entries {
                write_plain_text(&entry.value, out);
            }
        }
    }
}

fn write_inlines(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Str(s) | Inline::Code(s) => out.push_str(s),
            Inline::Space | Inline::SoftBreak | Inline::LineBreak => out.push(' '),
            Inline::Emph(content)
            | Inline::Strong(content)
            | Inline::Span(content)
            | Inline::Link(content) => write_inlines(content, out),
            Inline::RawInline(_, _) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_map() {
        let value = MetaValue::default();
        assert!(value.is_map());
        assert_eq!(value.as_map_entries().unwrap().len(), 0);
    }

    #[test]
    fn test_get_finds_first_entry() {
        let map = MetaValue::map([
            ("tier", MetaValue::string("heavy")),
            ("tier", MetaValue::string("light")),
        ]);
        assert_eq!(map.get("tier").unwrap().to_plain_text(), "heavy");
        assert!(map.get("missing").is_none());
    }

    #[test]
    fn test_get_treats_null_as_absent() {
        let map = MetaValue::map([("tier", MetaValue::null())]);
        assert!(map.get("tier").is_none());
    }

    #[test]
    fn test_get_on_scalar_is_none() {
        assert!(MetaValue::string("x").get("x").is_none());
    }

    #[test]
    fn test_scalar_plain_text() {
        assert_eq!(MetaValue::string("50Gi").to_plain_text(), "50Gi");
        assert_eq!(MetaValue::integer(42).to_plain_text(), "42");
        assert_eq!(MetaValue::bool(false).to_plain_text(), "false");
        assert_eq!(
            MetaValue::Scalar(Yaml::Real("1.50".to_string())).to_plain_text(),
            "1.50"
        );
        assert_eq!(MetaValue::null().to_plain_text(), "");
    }

    #[test]
    fn test_inlines_flatten_and_strip_raw_markup() {
        let value = MetaValue::Inlines(vec![
            Inline::Strong(vec![Inline::Str("GDP".to_string())]),
            Inline::Space,
            Inline::RawInline("html".to_string(), "<script>".to_string()),
            Inline::Emph(vec![Inline::Str("Nowcasting".to_string())]),
            Inline::LineBreak,
            Inline::Code("v2".to_string()),
        ]);
        assert_eq!(value.to_plain_text(), "GDP Nowcasting v2");
    }

    #[test]
    fn test_compound_values_concatenate() {
        let list = MetaValue::List(vec![MetaValue::string("a"), MetaValue::integer(1)]);
        assert_eq!(list.to_plain_text(), "a1");

        let map = MetaValue::map([("x", MetaValue::string("b")), ("y", MetaValue::bool(true))]);
        assert_eq!(map.to_plain_text(), "btrue");
    }
}
