// Engine-wide tuning shared by every preset. Per-preset values live in `config.rs`.

// Device pixel ratio cap applied to the canvas backing store
pub const MAX_DEVICE_PIXEL_RATIO: f32 = 1.35;

// Seed offsets for the independent random streams of one instance
pub const SEED_OFFSET_IDLE: u32 = 0;
pub const SEED_OFFSET_ASSIGNMENT: u32 = 77;
pub const SEED_OFFSET_SPARKS: u32 = 333;
pub const SEED_OFFSET_BORDER: u32 = 555;
pub const SEED_OFFSET_TARGETS: u32 = 999;

// Two-stage reveal: border formation runs ahead of the silhouette lock-in
pub const BORDER_EASE_GAIN: f32 = 1.55;
pub const LINES_EASE_EXPONENT: f32 = 1.65;

// Idle particle generation
pub const IDLE_ALPHA_MIN: f32 = 0.10;
pub const IDLE_ALPHA_SPAN: f32 = 0.80;
pub const IDLE_FREQ_MIN: f32 = 0.55;
pub const IDLE_FREQ_SPAN: f32 = 1.10;

// Per-frame ripple modulation (radians per second)
pub const RIPPLE_SPEED: f32 = 0.85;
pub const RIPPLE_ALPHA_BASE: f32 = 0.62;
pub const RIPPLE_ALPHA_SPAN: f32 = 0.38;

// Alpha multipliers by assignment
pub const MORPH_ALPHA_BASE: f32 = 0.92;
pub const MORPH_ALPHA_GAIN: f32 = 0.22;
pub const BORDER_ALPHA_DROP: f32 = 0.34;

// Size ripple base
pub const SIZE_RIPPLE_BASE: f32 = 0.85;
pub const SIZE_MORPH_BASE: f32 = 0.95;

// Sampling step derived from canvas size: clamp((w + h) / divisor, min, max)
pub const SAMPLE_STEP_DIVISOR: f32 = 175.0;
pub const SAMPLE_STEP_MIN: f32 = 6.0;
pub const SAMPLE_STEP_MAX: f32 = 10.0;

// Lower bounds on sample counts
pub const MIN_LINE_SEGMENTS: usize = 2;
pub const MIN_CIRCLE_SEGMENTS: usize = 18;

// Glyph sampling
pub const GLYPH_ALPHA_CUT: u8 = 110;
pub const GLYPH_JITTER: f32 = 0.35;
pub const GLYPH_FILL_RATIO: f32 = 0.92;
pub const GLYPH_START_FONT_RATIO: f32 = 0.66;
pub const GLYPH_MIN_FONT_PX: f32 = 10.0;
/// Word drawn by the conversion layout when no headline is configured.
pub const DEFAULT_HEADLINE: &str = "CONTACT";

// Border field
pub const BORDER_BAND_RATIO: f32 = 0.05;
pub const BORDER_BAND_MIN: f32 = 8.0;
pub const BORDER_DRIFT: f32 = 0.04;
pub const BORDER_OSC_MIN: f32 = 0.6;
pub const BORDER_OSC_SPAN: f32 = 1.2;

// Sparks
pub const SPARK_MORPH_THRESHOLD: f32 = 0.20;
pub const SPARK_CANDIDATE_TRIES: usize = 8;
pub const SPARK_EDGE_OFFSET: f32 = 12.0;
pub const SPARK_ACCEL: f32 = 0.20;
pub const SPARK_DAMPING: f32 = 0.986;
pub const SPARK_VELOCITY_SCALE: f32 = 3.4;
pub const SPARK_ARRIVAL_RADIUS: f32 = 14.0;
pub const SPARK_RADIUS: f32 = 0.45;
pub const SPARK_ALPHA_BASE: f32 = 0.28;
pub const SPARK_ALPHA_GAIN: f32 = 0.20;

// Scrolling content inside scene layouts: seconds per full content height
pub const SCROLL_LOOP_SEC: f32 = 22.0;

// A symbol transition counts as settled past this progress
pub const SYMBOL_SETTLED: f32 = 0.999;
