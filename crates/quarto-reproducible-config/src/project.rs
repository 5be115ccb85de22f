/*
 * project.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Project-level configuration for the reproducible-environment notice.
 */

//! Project configuration partitioning.
//!
//! The project configuration lives under [`PROJECT_CONFIG_KEY`] in the
//! project metadata (usually `_quarto.yml`):
//!
//! ```yaml
//! reproducible-config:
//!   onyxia:
//!     base-url: https://datalab.example.org
//!     catalog: capacity
//!   ui:
//!     notice-style: minimal
//!   branding:
//!     primary-color: "#0b5394"
//!   tier-labels:
//!     heavy: "Heavy (shared node)"
//!   defaults:
//!     tier: light
//! ```
//!
//! Each sub-namespace is always present after partitioning; a missing one
//! is an empty map so that later lookups never have to special-case it.

use crate::error::MetaError;
use crate::value::MetaValue;

/// Top-level project metadata key holding the configuration.
pub const PROJECT_CONFIG_KEY: &str = "reproducible-config";

/// Project configuration split into its named sub-namespaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectConfig {
    /// Launcher location (`base-url`, `catalog`, `chart`, `auto-launch`).
    pub onyxia: MetaValue,
    /// Notice text and layout.
    pub ui: MetaValue,
    /// Colors.
    pub branding: MetaValue,
    /// Tier name → display label.
    pub tier_labels: MetaValue,
    /// Defaults for any document-level field.
    pub defaults: MetaValue,
}

impl ProjectConfig {
    /// Partition the value stored under [`PROJECT_CONFIG_KEY`].
    ///
    /// `project_meta` is the whole project metadata tree; a missing
    /// configuration block yields an all-empty configuration.
    pub fn from_meta(project_meta: &MetaValue) -> Self {
        match project_meta.get(PROJECT_CONFIG_KEY) {
            Some(config) => get_config(config),
            None => Self::default(),
        }
    }

    /// Parse project YAML and partition it.
    pub fn from_yaml_str(text: &str) -> Result<Self, MetaError> {
        Ok(Self::from_meta(&MetaValue::from_yaml_str(text)?))
    }
}

/// Partition a configuration block into its five sub-namespaces.
///
/// Non-map namespaces are ignored, as if they were absent.
pub fn get_config(config: &MetaValue) -> ProjectConfig {
    let section = |name: &str| match config.get(name) {
        Some(value) if value.is_map() => value.clone(),
        Some(_) => {
            tracing::debug!(section = name, "Ignoring non-map configuration section");
            MetaValue::default()
        }
        None => MetaValue::default(),
    };

    ProjectConfig {
        onyxia: section("onyxia"),
        ui: section("ui"),
        branding: section("branding"),
        tier_labels: section("tier-labels"),
        defaults: section("defaults"),
    }
}
