/*
 * url.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Onyxia launcher deep links.
 */

//! Launcher URL construction.
//!
//! The produced link has the shape
//!
//! ```text
//! <base>/launcher/<catalog>/<chart>?autoLaunch=true&name=eostat-<chapter>
//!     &tier=«…»&imageFlavor=«…»&chapter.name=«…»&chapter.version=«…»
//!     &chapter.storageSize=«…»
//! ```
//!
//! The parameter set and order are part of the launcher contract.

use crate::codec::{encode, url_encode_only};
use crate::resolved::ResolvedConfig;

/// Prefix of the launched release name.
pub const RELEASE_NAME_PREFIX: &str = "eostat-";

/// `<base>/launcher/<catalog>/<chart>`, without a trailing slash on `base`.
pub fn launcher_url(config: &ResolvedConfig) -> String {
    format!(
        "{}/launcher/{}/{}",
        config.onyxia_base_url.trim_end_matches('/'),
        config.catalog,
        config.chart
    )
}

/// Ordered `(key, encoded value)` query parameters.
pub fn query_params(config: &ResolvedConfig) -> Vec<(&'static str, String)> {
    vec![
        ("autoLaunch", encode(config.auto_launch)),
        (
            "name",
            url_encode_only(&format!("{RELEASE_NAME_PREFIX}{}", config.chapter_name)),
        ),
        ("tier", encode(config.tier.as_str())),
        ("imageFlavor", encode(config.image_flavor.as_str())),
        ("chapter.name", encode(config.chapter_name.as_str())),
        ("chapter.version", encode(config.version.as_str())),
        ("chapter.storageSize", encode(config.storage_size.as_str())),
    ]
}

/// Build the full launcher URL.
pub fn build_url(config: &ResolvedConfig) -> String {
    let query = query_params(config)
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", launcher_url(config), query)
}
