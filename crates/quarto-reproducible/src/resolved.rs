/*
 * resolved.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Per-document resolved configuration.
 */

//! Resolved configuration.
//!
//! [`ResolvedConfig::resolve`] walks every configurable field through its
//! precedence chain once and validates the tier once. The result is handed
//! to both the URL builder and the notice renderer so the two can never
//! disagree.
//!
//! Precedence chains (first present wins):
//!
//! | fields                                      | chain                                  |
//! |---------------------------------------------|----------------------------------------|
//! | tier, image-flavor, data-snapshot, ...      | document → `defaults` → built-in       |
//! | button-text, notice-title, notice-style, ...| document → `defaults` → `ui` → built-in |
//! | primary-color, text-color, background-color | document → `defaults` → `branding` → built-in |
//! | base-url, catalog, chart, auto-launch       | document → `defaults` → `onyxia` → built-in |

use quarto_reproducible_config::{FieldResolver, MetaValue, ProjectConfig, resolve};
use serde::Serialize;

use crate::naming::{extract_chapter_name, normalize_version};
use crate::notice::NoticeStyle;
use crate::tier::{Tier, validate_tier};
use crate::warning::ReproducibleWarning;

/// Document metadata key holding the per-document block.
pub const DOCUMENT_BLOCK_KEY: &str = "reproducible";

/// Built-in defaults.
pub mod defaults {
    pub const BASE_URL: &str = "https://datalab.officialstatistics.org";
    pub const CATALOG: &str = "capacity";
    pub const CHART: &str = "eostat";
    pub const AUTO_LAUNCH: bool = true;
    pub const TIER: &str = "medium";
    pub const IMAGE_FLAVOR: &str = "base";
    pub const DATA_SNAPSHOT: &str = "latest";
    pub const STORAGE_SIZE: &str = "20Gi";
    pub const ESTIMATED_RUNTIME: &str = "Unknown";
    pub const BUTTON_TEXT: &str = "Launch Environment";
    pub const NOTICE_TITLE: &str = "Reproducible Environment Available";
    pub const NOTICE_STYLE: &str = "full";
    pub const SESSION_DURATION: &str = "2h";
    pub const SHOW_RUNTIME: bool = true;
    pub const PRIMARY_COLOR: &str = "rgb(255, 86, 44)";
    pub const TEXT_COLOR: &str = "rgb(44, 50, 63)";
    pub const BACKGROUND_COLOR: &str = "#fafafa";
}

/// Final value of every configurable field for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub tier: Tier,
    pub tier_label: String,
    pub image_flavor: String,
    pub data_snapshot: String,
    /// `data_snapshot` with every `.` replaced by `-`
    pub version: String,
    pub storage_size: String,
    pub chapter_name: String,
    pub button_text: String,
    pub notice_title: String,
    pub notice_style: NoticeStyle,
    pub session_duration: String,
    pub show_runtime: bool,
    pub primary_color: String,
    pub text_color: String,
    pub background_color: String,
    pub onyxia_base_url: String,
    pub catalog: String,
    pub chart: String,
    pub auto_launch: bool,
    pub estimated_runtime: String,
}

impl ResolvedConfig {
    /// Resolve every field for one document.
    ///
    /// `document` is the full document metadata; its `reproducible` block
    /// is the highest-priority layer. The tier is validated here and only
    /// here; an invalid tier yields a warning and [`Tier::Medium`].
    pub fn resolve(
        document: &MetaValue,
        project: &ProjectConfig,
        current_file: Option<&str>,
    ) -> (ResolvedConfig, Vec<ReproducibleWarning>) {
        let empty = MetaValue::default();
        let block = document.get(DOCUMENT_BLOCK_KEY).unwrap_or(&empty);

        let field = |key: &str, default: &str| resolve(block, project, key, default);
        let ui = FieldResolver::new(vec![&project.ui, &project.defaults, block]);
        let branding = FieldResolver::new(vec![&project.branding, &project.defaults, block]);
        let onyxia = FieldResolver::new(vec![&project.onyxia, &project.defaults, block]);

        let mut warnings = Vec::new();
        let (tier, warning) = validate_tier(&field("tier", defaults::TIER));
        warnings.extend(warning);

        let data_snapshot = field("data-snapshot", defaults::DATA_SNAPSHOT);
        let version = normalize_version(Some(&data_snapshot));

        let resolved = ResolvedConfig {
            tier,
            tier_label: tier_label(block, project, tier),
            image_flavor: field("image-flavor", defaults::IMAGE_FLAVOR),
            data_snapshot,
            version,
            storage_size: field("storage-size", defaults::STORAGE_SIZE),
            chapter_name: extract_chapter_name(document, block, current_file),
            button_text: ui.text("button-text", defaults::BUTTON_TEXT),
            notice_title: ui.text("notice-title", defaults::NOTICE_TITLE),
            notice_style: NoticeStyle::parse_or_default(
                &ui.text("notice-style", defaults::NOTICE_STYLE),
            ),
            session_duration: ui.text("session-duration", defaults::SESSION_DURATION),
            show_runtime: ui.flag("show-runtime", defaults::SHOW_RUNTIME),
            primary_color: branding.text("primary-color", defaults::PRIMARY_COLOR),
            text_color: branding.text("text-color", defaults::TEXT_COLOR),
            background_color: branding.text("background-color", defaults::BACKGROUND_COLOR),
            onyxia_base_url: onyxia.text("base-url", defaults::BASE_URL),
            catalog: onyxia.text("catalog", defaults::CATALOG),
            chart: onyxia.text("chart", defaults::CHART),
            auto_launch: onyxia.flag("auto-launch", defaults::AUTO_LAUNCH),
            estimated_runtime: field("estimated-runtime", defaults::ESTIMATED_RUNTIME),
        };

        (resolved, warnings)
    }
}

/// Display label for a tier: document `tier-labels`, then project
/// `tier-labels`, then the built-in table.
fn tier_label(block: &MetaValue, project: &ProjectConfig, tier: Tier) -> String {
    let empty = MetaValue::default();
    let document_labels = block.get("tier-labels").unwrap_or(&empty);
    FieldResolver::new(vec![&project.tier_labels, document_labels])
        .text(tier.as_str(), tier.default_label())
}
