/*
 * naming.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Chapter identifiers and data-snapshot versions.
 */

//! Chapter name and version normalization.

use std::path::Path;

use once_cell::sync::Lazy;
use quarto_reproducible_config::MetaValue;
use regex::Regex;

/// Chapter name used when nothing else identifies the document.
pub const UNKNOWN_CHAPTER: &str = "unknown-chapter";

/// Version used when no data snapshot is configured.
pub const LATEST_VERSION: &str = "latest";

static NON_ALNUM_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid slug pattern"));

/// Derive the chapter identifier for a document.
///
/// Tried in order, first non-empty result wins:
/// 1. `chapter-name` in the `reproducible` block, trimmed
/// 2. the input file name without its extension
/// 3. the document title, slugified
/// 4. [`UNKNOWN_CHAPTER`]
///
/// `document` is the full document metadata (the title lives at its top
/// level); `block` is its `reproducible` sub-map.
pub fn extract_chapter_name(
    document: &MetaValue,
    block: &MetaValue,
    current_file: Option<&str>,
) -> String {
    if let Some(name) = block
        .get("chapter-name")
        .map(|name| name.to_plain_text().trim().to_string())
        .filter(|s| !s.is_empty())
    {
        return name;
    }

    if let Some(stem) = current_file.and_then(file_stem) {
        return stem;
    }

    if let Some(slug) = document
        .get("title")
        .map(|title| slugify(&title.to_plain_text()))
        .filter(|s| !s.is_empty())
    {
        return slug;
    }

    UNKNOWN_CHAPTER.to_string()
}

fn file_stem(path: &str) -> Option<String> {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}

/// Lower-case `text` and collapse every run of non-alphanumerics to `-`.
///
/// Leading and trailing hyphens are stripped; only ASCII letters and
/// digits survive.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_ALNUM_RUN
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Normalize a data-snapshot version for the launcher.
///
/// Every `.` becomes `-`; nothing else is checked. Absent versions become
/// [`LATEST_VERSION`].
pub fn normalize_version(raw: Option<&str>) -> String {
    match raw {
        Some(version) => version.replace('.', "-"),
        None => LATEST_VERSION.to_string(),
    }
}
