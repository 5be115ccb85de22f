/*
 * format.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Host output formats.
 */

/// Output format the host is rendering to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Html,
    Revealjs,
    Pdf,
    Docx,
    Epub,
    Typst,
    Gfm,
    CommonMark,
    /// Any other format, by name (lower-cased)
    Custom(String),
}

impl OutputFormat {
    /// Parse a format name, case-insensitively. Unknown names become
    /// [`OutputFormat::Custom`].
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "html" => Self::Html,
            "revealjs" => Self::Revealjs,
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "epub" => Self::Epub,
            "typst" => Self::Typst,
            "gfm" => Self::Gfm,
            "commonmark" => Self::CommonMark,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Get the format name as a string
    pub fn as_str(&self) -> &str {
        match self {
            Self::Html => "html",
            Self::Revealjs => "revealjs",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Epub => "epub",
            Self::Typst => "typst",
            Self::Gfm => "gfm",
            Self::CommonMark => "commonmark",
            Self::Custom(name) => name,
        }
    }

    /// Whether the notice can be injected into this format.
    ///
    /// Only plain HTML documents get a notice; slides and every non-HTML
    /// format are skipped.
    pub fn supports_notice(&self) -> bool {
        matches!(self, Self::Html)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
