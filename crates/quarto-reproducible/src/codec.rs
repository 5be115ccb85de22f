/*
 * codec.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Query-parameter value encoding for Onyxia launcher links.
 */

//! Launcher query-parameter encoding.
//!
//! The Onyxia launcher reads each query value as a YAML-ish literal.
//! Numbers and booleans are passed bare; strings are percent-encoded and
//! wrapped in guillemets so the launcher never reinterprets them:
//!
//! | value              | encoded                 |
//! |--------------------|-------------------------|
//! | absent             | `null`                  |
//! | `true`             | `true`                  |
//! | `42`, `"-1.5"`     | `42`, `-1.5`            |
//! | `"20Gi"`           | `«20Gi»`                |
//! | `"a+b c"`          | `«a%2Bb%20c»`           |
//!
//! Encoding is total: every input produces a value.

use once_cell::sync::Lazy;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

/// Everything except the RFC 3986 unreserved set is percent-encoded.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const OPEN: char = '«';
const CLOSE: char = '»';

static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("Invalid numeric pattern"));

/// A value that can be placed in a launcher query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Integer(i)
    }
}

impl From<f64> for ParamValue {
    fn from(f: f64) -> Self {
        ParamValue::Real(f)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

/// Check whether a string is a plain decimal numeral (`-12`, `3.25`).
pub fn is_numeric(s: &str) -> bool {
    NUMERIC.is_match(s)
}

/// Encode a value for a launcher query parameter.
pub fn encode(value: impl Into<ParamValue>) -> String {
    match value.into() {
        ParamValue::Null => "null".to_string(),
        ParamValue::Bool(b) => b.to_string(),
        ParamValue::Integer(i) => i.to_string(),
        // Non-finite floats have no numeral form.
        ParamValue::Real(f) if !f.is_finite() => "null".to_string(),
        ParamValue::Real(f) => f.to_string(),
        ParamValue::Text(s) if is_numeric(&s) => s,
        ParamValue::Text(s) => {
            let mut out = String::with_capacity(s.len() + 4);
            out.push(OPEN);
            out.extend(utf8_percent_encode(&s, QUERY_VALUE));
            out.push(CLOSE);
            out
        }
    }
}

/// Percent-encode without guillemets and without the numeric bypass.
///
/// The launcher treats the `name` parameter as a raw release name, so it
/// must not carry delimiters.
pub fn url_encode_only(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}
