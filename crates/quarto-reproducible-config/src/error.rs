/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Errors raised while ingesting metadata.
 */

use thiserror::Error;

/// Errors that can occur while turning YAML text into a metadata tree.
///
/// Lookups on an existing tree never fail; only ingestion does.
#[derive(Debug, Clone, Error)]
pub enum MetaError {
    /// The text is not valid YAML.
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] yaml_rust2::ScanError),

    /// The YAML root is a scalar or a sequence.
    #[error("Expected a YAML mapping at the root, found {found}")]
    NotAMapping {
        /// Short description of what was found instead
        found: &'static str,
    },

    /// Front matter was opened with `---` but never closed.
    #[error("Unterminated front matter block")]
    UnterminatedFrontMatter,
}
