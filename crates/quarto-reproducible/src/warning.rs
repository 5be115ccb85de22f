/*
 * warning.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Non-fatal diagnostics produced while resolving the notice.
 */

use serde::Serialize;
use thiserror::Error;

/// A recoverable problem that was fixed by substituting a safe value.
///
/// Warnings are developer-facing only: the rendered notice shows the
/// substituted value without any visual hint.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReproducibleWarning {
    /// The configured tier is not one of the known tiers.
    #[error("Invalid tier '{value}', using '{fallback}' instead (valid tiers: light, medium, heavy, gpu)")]
    InvalidTier {
        /// The rejected value, as configured
        value: String,
        /// The tier used instead
        fallback: &'static str,
    },
}
