/*
 * resolve.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Precedence lookup across metadata layers.
 */

//! Layered field lookup.
//!
//! A [`FieldResolver`] borrows a stack of metadata maps and answers
//! "what is the value of `key`" by asking the highest-priority layer first.
//! Absence at every layer is not an error: callers always supply the
//! built-in default, so every lookup returns a value.
//!
//! ```rust
//! use quarto_reproducible_config::{FieldResolver, MetaValue};
//!
//! let project = MetaValue::map([("tier", MetaValue::string("light"))]);
//! let document = MetaValue::map([("tier", MetaValue::string("heavy"))]);
//!
//! let resolver = FieldResolver::new(vec![&project, &document]);
//! assert_eq!(resolver.text("tier", "medium"), "heavy");
//! assert_eq!(resolver.text("chart", "eostat"), "eostat");
//! ```

use crate::project::ProjectConfig;
use crate::value::MetaValue;

/// Precedence lookup over borrowed metadata layers.
///
/// Layers are ordered by priority: first = lowest priority, last = highest.
/// Construction is zero-copy.
#[derive(Debug, Clone, Default)]
pub struct FieldResolver<'a> {
    layers: Vec<&'a MetaValue>,
}

impl<'a> FieldResolver<'a> {
    /// Create a resolver from layers ordered lowest to highest priority.
    pub fn new(layers: Vec<&'a MetaValue>) -> Self {
        FieldResolver { layers }
    }

    /// The raw value from the highest-priority layer that has `key`.
    pub fn get(&self, key: &str) -> Option<&'a MetaValue> {
        self.layers.iter().rev().copied().find_map(|layer| layer.get(key))
    }

    /// The value of `key` coerced to plain text, if any layer has it.
    pub fn text_opt(&self, key: &str) -> Option<String> {
        self.get(key).map(MetaValue::to_plain_text)
    }

    /// The value of `key` coerced to plain text, or `default`.
    pub fn text(&self, key: &str, default: &str) -> String {
        self.text_opt(key).unwrap_or_else(|| default.to_string())
    }

    /// The value of `key` as a boolean, or `default`.
    ///
    /// Accepts YAML booleans and the texts `true`/`false` in any case.
    /// Anything else is treated as absent.
    pub fn flag(&self, key: &str, default: bool) -> bool {
        let Some(value) = self.get(key) else {
            return default;
        };
        if let Some(b) = value.as_bool() {
            return b;
        }
        let text = value.to_plain_text();
        match text.trim().to_ascii_lowercase().as_str() {
            "true" => true,
            "false" => false,
            _ => {
                tracing::debug!(key, value = %text, default, "Ignoring non-boolean value");
                default
            }
        }
    }
}

/// Three-tier lookup: document metadata, then project `defaults`, then
/// `default`.
pub fn resolve(
    document: &MetaValue,
    project: &ProjectConfig,
    key: &str,
    default: &str,
) -> String {
    FieldResolver::new(vec![&project.defaults, document]).text(key, default)
}
