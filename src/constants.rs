/// DOM hooks and observer tuning for the web front-end.
///
/// Page markup opts canvases in through data attributes; everything the
/// adapter looks up by name lives here.

// Auto-mount selectors
pub const MORPH_CANVAS_SELECTOR: &str = "canvas[data-morph-layout], canvas[data-morph-symbol]";
pub const RING_CANVAS_SELECTOR: &str = "canvas[data-ring-field]";

// Dataset keys (camelCase, as exposed by `HTMLElement.dataset`)
pub const DATA_LAYOUT: &str = "morphLayout";
pub const DATA_SYMBOL: &str = "morphSymbol";
pub const DATA_SEED: &str = "morphSeed";
pub const DATA_HEADLINE: &str = "morphHeadline";
pub const DATA_BAND: &str = "morphBand";
pub const DATA_RING: &str = "ringField";

/// Closest ancestor that receives hover/click intent and scopes the color token.
pub const HOST_SELECTOR: &str = "[data-morph-host]";
/// Closest ancestor the ring field measures and tracks the pointer on.
pub const RING_HOST_SELECTOR: &str = "[data-ring-host]";

// Theme
pub const COLOR_TOKEN: &str = "--ffp-rgb";

// Media queries
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const HOVER_QUERY: &str = "(hover:hover)";

// Visibility observer: start slightly before the canvas scrolls into view
pub const VIEW_ROOT_MARGIN: &str = "240px 0px 240px 0px";
pub const VIEW_THRESHOLD: f64 = 0.01;

// Center-band observer: engage when a canvas crosses the middle fifth of the viewport
pub const BAND_ROOT_MARGIN: &str = "-40% 0px -40% 0px";
pub const BAND_THRESHOLD: f64 = 0.01;

// Glyph rasterization
pub const GLYPH_FONT_FAMILY: &str = "\"Google Sans Flex\", sans-serif";
pub const GLYPH_FONT_WEIGHT: u32 = 700;
