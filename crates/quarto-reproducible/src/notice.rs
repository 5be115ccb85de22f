/*
 * notice.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * HTML notice shown above a reproducible document.
 */

//! Notice rendering.
//!
//! The notice is a self-contained HTML fragment with inline styles, so it
//! renders the same under any theme. Three variants exist:
//!
//! - `full`: bordered box with a bold title, the launch button, and the
//!   metadata line
//! - `minimal`: the same box without the title
//! - `button-only`: just the launch button

use std::fmt::Write;

use serde::Serialize;

use crate::resolved::ResolvedConfig;

/// Separator between items of the metadata line.
const META_SEPARATOR: &str = " • ";

/// Notice layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoticeStyle {
    /// Title, button, and metadata line (default)
    #[default]
    Full,
    /// Button and metadata line
    Minimal,
    /// Button only
    ButtonOnly,
}

impl NoticeStyle {
    /// Parse from string value. Unrecognized values select [`NoticeStyle::Full`].
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "minimal" => Self::Minimal,
            "button-only" => Self::ButtonOnly,
            _ => Self::Full,
        }
    }

    /// Convert to string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Minimal => "minimal",
            Self::ButtonOnly => "button-only",
        }
    }
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Join the tier label, optional runtime estimate, and session duration.
pub fn metadata_line(config: &ResolvedConfig) -> String {
    let mut items = vec![config.tier_label.clone()];
    if config.show_runtime {
        items.push(format!("Est. runtime: {}", config.estimated_runtime));
    }
    items.push(format!("Auto-expires: {}", config.session_duration));
    items.join(META_SEPARATOR)
}

fn write_button(out: &mut String, url: &str, config: &ResolvedConfig) {
    let _ = write!(
        out,
        "<a href=\"{}\" class=\"reproducible-button\" target=\"_blank\" rel=\"noopener noreferrer\" \
         style=\"display: inline-block; padding: 0.5em 1.2em; background-color: {}; color: #ffffff; \
         border-radius: 4px; text-decoration: none; font-weight: 600;\">{}</a>",
        escape_html(url),
        escape_html(&config.primary_color),
        escape_html(&config.button_text),
    );
}

/// Render the notice for a launcher URL.
pub fn render_notice(url: &str, config: &ResolvedConfig) -> String {
    let mut out = String::new();

    if config.notice_style == NoticeStyle::ButtonOnly {
        write_button(&mut out, url, config);
        return out;
    }

    let _ = writeln!(
        out,
        "<div class=\"reproducible-notice reproducible-notice-{}\" \
         style=\"border-left: 4px solid {}; background-color: {}; color: {}; \
         padding: 1em 1.25em; margin: 1em 0; border-radius: 4px;\">",
        config.notice_style.as_str(),
        escape_html(&config.primary_color),
        escape_html(&config.background_color),
        escape_html(&config.text_color),
    );

    if config.notice_style == NoticeStyle::Full {
        let _ = writeln!(
            out,
            "<div class=\"reproducible-notice-title\" style=\"font-weight: bold; margin-bottom: 0.5em;\">{}</div>",
            escape_html(&config.notice_title),
        );
    }

    out.push_str(
        "<div class=\"reproducible-notice-body\" style=\"display: flex; flex-wrap: wrap; align-items: center; gap: 1em;\">\n",
    );
    write_button(&mut out, url, config);
    let _ = write!(
        out,
        "\n<span class=\"reproducible-notice-meta\" style=\"font-size: 0.9em;\">{}</span>\n</div>\n</div>",
        escape_html(&metadata_line(config)),
    );

    out
}
