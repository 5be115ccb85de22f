/*
 * convert.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Conversion from YAML text to the metadata tree.
 */

//! Conversion from YAML to [`MetaValue`].
//!
//! Sequences and mappings become [`MetaValue::List`] and [`MetaValue::Map`];
//! everything else stays a [`MetaValue::Scalar`]. Only string keys are kept,
//! since every lookup in this crate is by string.

use crate::error::MetaError;
use crate::value::{MetaMapEntry, MetaValue};
use yaml_rust2::{Yaml, YamlLoader};

/// Convert a parsed YAML value to a metadata tree.
pub fn meta_value_from_yaml(yaml: Yaml) -> MetaValue {
    match yaml {
        Yaml::Array(items) => {
            MetaValue::List(items.into_iter().map(meta_value_from_yaml).collect())
        }
        Yaml::Hash(hash) => MetaValue::Map(
            hash.into_iter()
                .filter_map(|(key, value)| match key {
                    Yaml::String(key) => Some(MetaMapEntry {
                        key,
                        value: meta_value_from_yaml(value),
                    }),
                    _ => None,
                })
                .collect(),
        ),
        other => MetaValue::Scalar(other),
    }
}

fn describe(yaml: &Yaml) -> &'static str {
    match yaml {
        Yaml::Array(_) => "a sequence",
        Yaml::String(_) => "a string",
        Yaml::Integer(_) | Yaml::Real(_) => "a number",
        Yaml::Boolean(_) => "a boolean",
        _ => "a scalar",
    }
}

impl MetaValue {
    /// Parse a YAML document into a metadata tree.
    ///
    /// An empty document (or one containing only `~`) yields an empty map.
    /// Only the first document of a multi-document stream is read.
    pub fn from_yaml_str(text: &str) -> Result<MetaValue, MetaError> {
        let docs = YamlLoader::load_from_str(text)?;
        match docs.into_iter().next() {
            None | Some(Yaml::Null) => Ok(MetaValue::default()),
            Some(yaml @ Yaml::Hash(_)) => Ok(meta_value_from_yaml(yaml)),
            Some(other) => Err(MetaError::NotAMapping {
                found: describe(&other),
            }),
        }
    }

    /// Parse the leading `---` front matter block of a markdown document.
    ///
    /// A document that does not start with `---` has no front matter and
    /// yields an empty map.
    pub fn from_front_matter(source: &str) -> Result<MetaValue, MetaError> {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        let mut lines = source.lines();
        if lines.next().map(str::trim_end) != Some("---") {
            return Ok(MetaValue::default());
        }

        let mut yaml = String::new();
        for line in lines {
            let trimmed = line.trim_end();
            if trimmed == "---" || trimmed == "..." {
                return MetaValue::from_yaml_str(&yaml);
            }
            yaml.push_str(line);
            yaml.push('\n');
        }
        Err(MetaError::UnterminatedFrontMatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_mapping() {
        let meta = MetaValue::from_yaml_str(
            "reproducible:\n  enabled: true\n  tier: heavy\n  storage-size: 50Gi\n",
        )
        .unwrap();

        let block = meta.get("reproducible").unwrap();
        assert_eq!(block.get("enabled").unwrap().as_bool(), Some(true));
        assert_eq!(block.get("tier").unwrap().to_plain_text(), "heavy");
        assert_eq!(block.get("storage-size").unwrap().to_plain_text(), "50Gi");
    }

    #[test]
    fn test_numbers_keep_written_form() {
        let meta = MetaValue::from_yaml_str("a: 1.20\nb: 7\n").unwrap();
        assert_eq!(meta.get("a").unwrap().to_plain_text(), "1.20");
        assert_eq!(meta.get("b").unwrap().to_plain_text(), "7");
    }

    #[test]
    fn test_sequence_becomes_list() {
        let meta = MetaValue::from_yaml_str("items: [a, b]\n").unwrap();
        assert!(matches!(meta.get("items"), Some(MetaValue::List(items)) if items.len() == 2));
    }

    #[test]
    fn test_non_string_keys_dropped() {
        let meta = MetaValue::from_yaml_str("1: one\ntwo: 2\n").unwrap();
        assert_eq!(meta.as_map_entries().unwrap().len(), 1);
        assert!(meta.get("two").is_some());
    }

    #[test]
    fn test_empty_document_is_empty_map() {
        assert_eq!(MetaValue::from_yaml_str("").unwrap(), MetaValue::default());
        assert_eq!(MetaValue::from_yaml_str("~").unwrap(), MetaValue::default());
    }

    #[test]
    fn test_scalar_root_rejected() {
        let err = MetaValue::from_yaml_str("just text").unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"Expected a YAML mapping at the root, found a string");
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        let err = MetaValue::from_yaml_str("a: [unclosed").unwrap_err();
        assert!(matches!(err, MetaError::Yaml(_)));
    }

    #[test]
    fn test_front_matter() {
        let source = "---\ntitle: Chile Case Study\nreproducible:\n  enabled: true\n---\n\n# Body\n";
        let meta = MetaValue::from_front_matter(source).unwrap();
        assert_eq!(meta.get("title").unwrap().to_plain_text(), "Chile Case Study");
        assert!(meta.get("reproducible").is_some());
    }

    #[test]
    fn test_front_matter_absent() {
        let meta = MetaValue::from_front_matter("# Just a heading\n").unwrap();
        assert_eq!(meta, MetaValue::default());
    }

    #[test]
    fn test_front_matter_unterminated() {
        let err = MetaValue::from_front_matter("---\ntitle: x\n").unwrap_err();
        assert!(matches!(err, MetaError::UnterminatedFrontMatter));
    }
}
