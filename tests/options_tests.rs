// Host-side tests for mount option parsing, intent combination and style tokens.

#![allow(dead_code)]
mod options {
    include!("../src/options.rs");
}
mod style {
    include!("../src/style.rs");
}

use morph_core::{FieldConfig, Layout, Rgb, RingSettings, Symbol};
use options::*;
use style::*;

#[test]
fn layout_attribute_wins_over_symbol() {
    let o = MountOptions::resolve(Some("vetrina"), Some("gear"), None, None, None);
    assert_eq!(o.layout, Layout::Showcase);
    assert_eq!(o.config, FieldConfig::showcase());
}

#[test]
fn symbol_attribute_selects_symbol_preset() {
    let o = MountOptions::resolve(None, Some("chip"), None, None, None);
    assert_eq!(o.layout, Layout::Symbol(Symbol::Chip));
    assert_eq!(o.config.seed, FieldConfig::symbols().seed);
    assert!(!o.center_band);
}

#[test]
fn unknown_names_fall_back() {
    let o = MountOptions::resolve(Some("hexagon"), None, None, None, None);
    assert_eq!(o.layout, FALLBACK_LAYOUT);
    let o = MountOptions::resolve(None, None, None, None, None);
    assert_eq!(o.layout, FALLBACK_LAYOUT);
}

#[test]
fn seed_headline_and_band_attributes_apply() {
    let o = MountOptions::resolve(Some("conversione"), None, Some(" 42 "), Some("HELLO"), Some(""));
    assert_eq!(o.layout, Layout::Conversion);
    assert_eq!(o.config.seed, 42);
    assert_eq!(o.config.headline, "HELLO");
    assert!(o.center_band);

    let o = MountOptions::resolve(Some("conversion"), None, Some("nope"), Some("  "), Some("false"));
    assert_eq!(o.config.seed, FieldConfig::conversion().seed);
    assert_eq!(o.config.headline, FieldConfig::conversion().headline);
    assert!(!o.center_band);
}

#[test]
fn ring_presets_resolve_by_name() {
    assert_eq!(ring_settings(None), RingSettings::hero());
    assert_eq!(ring_settings(Some("")), RingSettings::hero());
    assert_eq!(ring_settings(Some("maintenance")), RingSettings::maintenance());
    assert_eq!(ring_settings(Some("Backdrop")), RingSettings::backdrop());
    assert_eq!(ring_settings(Some("spiral")), RingSettings::hero());
}

#[test]
fn hover_or_band_engages() {
    let mut i = HostIntent::default();
    assert!(!i.want());
    i.enter();
    assert!(i.want());
    i.set_in_band(true);
    i.leave();
    assert!(i.want());
    i.set_in_band(false);
    assert!(!i.want());
}

#[test]
fn tap_toggles_and_clears_override() {
    let mut i = HostIntent::default();
    i.tap();
    assert!(i.want());
    i.tap();
    assert!(!i.want());

    i.force(Some(true));
    assert!(i.want());
    i.tap();
    assert_eq!(i.forced, None);
    assert!(!i.want());
}

#[test]
fn tap_turns_off_a_canvas_held_by_the_band() {
    let mut i = HostIntent::default();
    i.set_in_band(true);
    assert!(i.want());
    i.tap();
    assert!(!i.want());
    i.tap();
    assert!(i.want());
    i.tap();
    assert!(!i.want());

    // leaving the band lifts the mute for the next pass
    i.set_in_band(false);
    assert!(!i.want());
    i.set_in_band(true);
    assert!(i.want());
}

#[test]
fn only_host_sized_canvases_pin_their_style() {
    let o = MountOptions::resolve(Some("gear"), None, None, None, None);
    assert_eq!(o.sizing, Sizing::Stylesheet);
    assert!(!o.sizing.pins_style());
    assert!(Sizing::Host.pins_style());
}

#[test]
fn forced_intent_overrides_observers() {
    let mut i = HostIntent::default();
    i.enter();
    i.force(Some(false));
    assert!(!i.want());
    i.force(None);
    assert!(i.want());
}

#[test]
fn color_token_parsing_falls_back_to_default_ink() {
    assert_eq!(parse_color_token(" 12, 34, 56 "), Rgb::new(12, 34, 56));
    assert_eq!(parse_color_token("200 100 0"), Rgb::new(200, 100, 0));
    assert_eq!(parse_color_token(""), Rgb::default());
    assert_eq!(parse_color_token("blue"), Rgb::default());
}
