//! Metadata access for the Quarto reproducible-environment notice.
//!
//! This crate owns everything the notice engine reads:
//!
//! - [`MetaValue`]: the read-only metadata tree (document front matter or
//!   project configuration)
//! - [`ProjectConfig`]: project configuration split into its sub-namespaces
//! - [`FieldResolver`]: precedence lookup across metadata layers
//!
//! Nothing here mutates its inputs. Every lookup is total: absent keys,
//! null values, and missing sections all resolve to a caller-supplied
//! default rather than an error.

mod convert;
mod error;
mod project;
mod resolve;
mod value;

pub use convert::meta_value_from_yaml;
pub use error::MetaError;
pub use project::{PROJECT_CONFIG_KEY, ProjectConfig, get_config};
pub use resolve::{FieldResolver, resolve};
pub use value::{Inline, MetaMapEntry, MetaValue};
