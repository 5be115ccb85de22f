/*
 * properties.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Property tests for value encoding and tier validation.
 */

use percent_encoding::percent_decode_str;
use proptest::prelude::*;
use quarto_reproducible::codec::is_numeric;
use quarto_reproducible::{
    OutputFormat, ParamValue, RenderInput, ReproducibleTransform, Tier, encode,
};
use quarto_reproducible_config::{MetaValue, ProjectConfig};

fn decode(encoded: &str) -> String {
    let inner = encoded
        .strip_prefix('«')
        .and_then(|s| s.strip_suffix('»'))
        .expect("string values are wrapped in guillemets");
    percent_decode_str(inner)
        .decode_utf8()
        .expect("encoded text is valid UTF-8")
        .into_owned()
}

fn tier_param(url: &str) -> &str {
    url.split('&')
        .find_map(|param| param.strip_prefix("tier="))
        .expect("url has a tier parameter")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every input has an encoding.
    #[test]
    fn test_encode_is_total(
        value in prop_oneof![
            Just(ParamValue::Null),
            any::<bool>().prop_map(ParamValue::Bool),
            any::<i64>().prop_map(ParamValue::Integer),
            any::<f64>().prop_map(ParamValue::Real),
            ".*".prop_map(ParamValue::Text),
        ]
    ) {
        prop_assert!(!encode(value).is_empty());
    }

    /// Non-numeric strings decode back to themselves.
    #[test]
    fn test_encode_round_trips_text(s in "\\PC*") {
        prop_assume!(!is_numeric(&s));
        let encoded = encode(s.as_str());
        prop_assert_eq!(decode(&encoded), s);
    }

    /// Encoded text only uses unreserved characters between the delimiters.
    #[test]
    fn test_encoded_text_is_url_safe(s in ".*") {
        prop_assume!(!is_numeric(&s));
        let encoded = encode(s.as_str());
        let inner = &encoded['«'.len_utf8()..encoded.len() - '»'.len_utf8()];
        prop_assert!(inner.chars().all(|c| c.is_ascii_alphanumeric() || "-._~%".contains(c)));
    }

    /// Numeric strings pass through untouched.
    #[test]
    fn test_numeric_strings_bare(n in any::<i32>(), frac in proptest::option::of(0u32..10_000)) {
        let s = match frac {
            Some(f) => format!("{n}.{f}"),
            None => n.to_string(),
        };
        prop_assert_eq!(encode(s.as_str()), s);
    }

    /// Whatever tier is configured, the link carries a known tier.
    #[test]
    fn test_tier_is_always_valid(tier in ".*") {
        let document = MetaValue::map([(
            "reproducible",
            MetaValue::map([
                ("enabled", MetaValue::bool(true)),
                ("tier", MetaValue::string(tier)),
            ]),
        )]);
        let project = ProjectConfig::default();
        let input = RenderInput::new(&document, &project, OutputFormat::Html);
        let outcome = ReproducibleTransform::new().apply(&input);
        let url = &outcome.rendered().expect("enabled documents render").url;

        let decoded = decode(tier_param(url));
        prop_assert!(Tier::ALL.iter().any(|t| t.as_str() == decoded));
        prop_assert!(outcome.warnings().len() <= 1);
    }
}
