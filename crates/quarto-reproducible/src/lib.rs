//! Reproducible-environment notices for Quarto documents.
//!
//! For every document that opts in with
//!
//! ```yaml
//! reproducible:
//!   enabled: true
//! ```
//!
//! this crate produces a deep link into an Onyxia launcher that pre-fills
//! the session (tier, image, data snapshot, storage) and an inline-styled
//! HTML notice carrying that link.
//!
//! # Architecture
//!
//! - [`codec`]: query-parameter value encoding (guillemet convention)
//! - [`naming`]: chapter identifiers and version normalization
//! - [`tier`]: resource tier validation
//! - [`resolved`]: precedence resolution of every field
//! - [`url`]: launcher URL assembly
//! - [`notice`]: HTML notice rendering
//! - [`transform`]: per-document orchestration
//!
//! Metadata access lives in the `quarto-reproducible-config` crate.

pub mod codec;
pub mod format;
pub mod naming;
pub mod notice;
pub mod resolved;
pub mod tier;
pub mod transform;
pub mod url;
pub mod warning;

pub use codec::{ParamValue, encode, url_encode_only};
pub use format::OutputFormat;
pub use naming::{extract_chapter_name, normalize_version};
pub use notice::{NoticeStyle, render_notice};
pub use resolved::ResolvedConfig;
pub use tier::{Tier, validate_tier};
pub use transform::{Outcome, RenderInput, RenderedNotice, ReproducibleTransform, SkipReason};
pub use url::build_url;
pub use warning::ReproducibleWarning;
