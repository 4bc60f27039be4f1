// Host-side tests for the web front-end constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn observer_thresholds_are_fractions() {
    assert!(VIEW_THRESHOLD > 0.0 && VIEW_THRESHOLD <= 1.0);
    assert!(BAND_THRESHOLD > 0.0 && BAND_THRESHOLD <= 1.0);
}

#[test]
fn root_margins_have_four_components() {
    for margin in [VIEW_ROOT_MARGIN, BAND_ROOT_MARGIN] {
        assert_eq!(margin.split_whitespace().count(), 4, "{margin}");
    }
}

#[test]
fn selectors_match_dataset_keys() {
    // dataset keys are the camelCase form of the attribute names
    let camel = |attr: &str| {
        let mut out = String::new();
        let mut upper = false;
        for c in attr.trim_start_matches("data-").chars() {
            if c == '-' {
                upper = true;
            } else if upper {
                out.push(c.to_ascii_uppercase());
                upper = false;
            } else {
                out.push(c);
            }
        }
        out
    };
    assert!(MORPH_CANVAS_SELECTOR.contains("data-morph-layout"));
    assert!(MORPH_CANVAS_SELECTOR.contains("data-morph-symbol"));
    assert_eq!(camel("data-morph-layout"), DATA_LAYOUT);
    assert_eq!(camel("data-morph-symbol"), DATA_SYMBOL);
    assert_eq!(camel("data-ring-field"), DATA_RING);
    assert!(RING_CANVAS_SELECTOR.contains("data-ring-field"));
}

#[test]
fn color_token_is_a_custom_property() {
    assert!(COLOR_TOKEN.starts_with("--"));
}
