/*
 * transform.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Per-document entry point for the reproducible-environment notice.
 */

//! Per-document orchestration.
//!
//! [`ReproducibleTransform::apply`] is called once per rendered document:
//!
//! 1. skip unless the output format supports the notice
//! 2. skip unless `reproducible.enabled` is explicitly `true`
//! 3. resolve every field (validating the tier once)
//! 4. build the launcher URL
//! 5. render the notice
//!
//! Skipping is silent: no warnings, no output. The enabled path cannot
//! fail; invalid values are replaced and reported as warnings.
//!
//! # Example
//!
//! ```rust
//! use quarto_reproducible::{Outcome, OutputFormat, RenderInput, ReproducibleTransform};
//! use quarto_reproducible_config::{MetaValue, ProjectConfig};
//!
//! let document = MetaValue::from_yaml_str("reproducible:\n  enabled: true\n").unwrap();
//! let project = ProjectConfig::default();
//! let input = RenderInput::new(&document, &project, OutputFormat::Html)
//!     .with_current_file("basic.qmd");
//!
//! match ReproducibleTransform::new().apply(&input) {
//!     Outcome::Rendered(notice) => assert!(notice.url.contains("tier=«medium»")),
//!     Outcome::Skipped(reason) => panic!("unexpected skip: {reason:?}"),
//! }
//! ```

use quarto_reproducible_config::{MetaValue, ProjectConfig};
use serde::Serialize;

use crate::format::OutputFormat;
use crate::notice::render_notice;
use crate::resolved::{DOCUMENT_BLOCK_KEY, ResolvedConfig};
use crate::url::build_url;
use crate::warning::ReproducibleWarning;

/// Borrowed inputs for one document.
#[derive(Debug, Clone)]
pub struct RenderInput<'a> {
    /// Full document metadata (front matter)
    pub document: &'a MetaValue,
    /// Partitioned project configuration
    pub project: &'a ProjectConfig,
    /// Path of the document being rendered, if known
    pub current_file: Option<&'a str>,
    /// Output format the host is rendering to
    pub format: OutputFormat,
}

impl<'a> RenderInput<'a> {
    pub fn new(document: &'a MetaValue, project: &'a ProjectConfig, format: OutputFormat) -> Self {
        Self {
            document,
            project,
            current_file: None,
            format,
        }
    }

    pub fn with_current_file(mut self, path: &'a str) -> Self {
        self.current_file = Some(path);
        self
    }
}

/// Why a document got no notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The output format cannot carry the notice
    UnsupportedFormat,
    /// `reproducible.enabled` is missing or not `true`
    NotEnabled,
}

/// The notice and its launcher link, ready for injection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedNotice {
    pub url: String,
    pub html: String,
    pub warnings: Vec<ReproducibleWarning>,
}

/// Result of applying the transform to one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "kebab-case")]
pub enum Outcome {
    Skipped(SkipReason),
    Rendered(RenderedNotice),
}

impl Outcome {
    /// The rendered notice, if any.
    pub fn rendered(&self) -> Option<&RenderedNotice> {
        match self {
            Outcome::Rendered(notice) => Some(notice),
            Outcome::Skipped(_) => None,
        }
    }

    /// Warnings collected while rendering (empty when skipped).
    pub fn warnings(&self) -> &[ReproducibleWarning] {
        match self {
            Outcome::Rendered(notice) => &notice.warnings,
            Outcome::Skipped(_) => &[],
        }
    }
}

/// Stateless notice generator.
///
/// Holds no state between documents; one instance can serve any number of
/// documents, concurrently or not.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReproducibleTransform;

impl ReproducibleTransform {
    /// Create a new transform.
    pub fn new() -> Self {
        Self
    }

    /// Human-readable name for this transform.
    pub fn name(&self) -> &str {
        "reproducible-notice"
    }

    /// Produce the launcher URL and notice for one document.
    pub fn apply(&self, input: &RenderInput<'_>) -> Outcome {
        if !input.format.supports_notice() {
            tracing::debug!(format = %input.format, "Skipping reproducible notice: unsupported format");
            return Outcome::Skipped(SkipReason::UnsupportedFormat);
        }

        if !is_enabled(input.document) {
            tracing::debug!("Skipping reproducible notice: not enabled");
            return Outcome::Skipped(SkipReason::NotEnabled);
        }

        let (config, warnings) =
            ResolvedConfig::resolve(input.document, input.project, input.current_file);
        for warning in &warnings {
            tracing::warn!(file = ?input.current_file, "{warning}");
        }

        let url = build_url(&config);
        let html = render_notice(&url, &config);
        tracing::debug!(
            chapter = %config.chapter_name,
            tier = %config.tier,
            style = config.notice_style.as_str(),
            "Rendered reproducible notice"
        );

        Outcome::Rendered(RenderedNotice {
            url,
            html,
            warnings,
        })
    }
}

/// `reproducible.enabled` must be present and the boolean `true`.
fn is_enabled(document: &MetaValue) -> bool {
    document
        .get(DOCUMENT_BLOCK_KEY)
        .and_then(|block| block.get("enabled"))
        .and_then(MetaValue::as_bool)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> MetaValue {
        MetaValue::from_yaml_str(text).unwrap()
    }

    #[test]
    fn test_name() {
        assert_eq!(ReproducibleTransform::new().name(), "reproducible-notice");
    }

    #[test]
    fn test_is_enabled() {
        assert!(is_enabled(&yaml("reproducible:\n  enabled: true\n")));
        assert!(!is_enabled(&yaml("reproducible:\n  enabled: false\n")));
        assert!(!is_enabled(&yaml("reproducible:\n  tier: heavy\n")));
        assert!(!is_enabled(&yaml("reproducible:\n  enabled: \"true\"\n")));
        assert!(!is_enabled(&yaml("reproducible: true\n")));
        assert!(!is_enabled(&yaml("title: x\n")));
    }

    #[test]
    fn test_format_checked_before_enabled() {
        let document = yaml("reproducible:\n  enabled: false\n");
        let project = ProjectConfig::default();
        let input = RenderInput::new(&document, &project, OutputFormat::Pdf);
        assert_eq!(
            ReproducibleTransform::new().apply(&input),
            Outcome::Skipped(SkipReason::UnsupportedFormat)
        );
    }

    #[test]
    fn test_skipped_has_no_warnings() {
        let document = yaml("reproducible:\n  enabled: false\n  tier: bogus\n");
        let project = ProjectConfig::default();
        let input = RenderInput::new(&document, &project, OutputFormat::Html);
        let outcome = ReproducibleTransform::new().apply(&input);
        assert_eq!(outcome, Outcome::Skipped(SkipReason::NotEnabled));
        assert!(outcome.warnings().is_empty());
        assert!(outcome.rendered().is_none());
    }

    #[test]
    fn test_rendered_carries_url_in_html() {
        let document = yaml("reproducible:\n  enabled: true\n");
        let project = ProjectConfig::default();
        let input =
            RenderInput::new(&document, &project, OutputFormat::Html).with_current_file("a.qmd");
        let outcome = ReproducibleTransform::new().apply(&input);
        let notice = outcome.rendered().unwrap();
        assert!(notice.html.contains(&notice.url.replace('&', "&amp;")));
    }
}
