//! Per-preset tuning for a particle field.

use crate::constants::DEFAULT_HEADLINE;
use crate::targets::Layout;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub seed: u32,
    /// Canvas area (px²) per particle.
    pub area_per_particle: f32,
    pub min_particles: usize,
    pub max_particles: usize,
    /// Share of particles assigned to the silhouette.
    pub morph_fraction: f32,
    pub enter_rate: f32,
    pub leave_rate: f32,
    pub symbol_rate: f32,
    /// Idle oscillation amplitude in px.
    pub idle_amplitude: f32,
    pub size_ripple: f32,
    pub size_morph_gain: f32,
    pub border_pad_ratio: f32,
    pub border_pad_min: f32,
    pub spark_count: usize,
    pub spark_interval_ms: f64,
    pub spark_jitter_ms: f64,
    pub headline: String,
}

impl FieldConfig {
    pub fn showcase() -> Self {
        Self {
            seed: 3301,
            area_per_particle: 390.0,
            min_particles: 820,
            max_particles: 1650,
            morph_fraction: 0.40,
            enter_rate: 0.013,
            leave_rate: 0.012,
            symbol_rate: 0.10,
            idle_amplitude: 11.5,
            size_ripple: 0.30,
            size_morph_gain: 0.12,
            border_pad_ratio: 0.04,
            border_pad_min: 8.0,
            spark_count: 26,
            spark_interval_ms: 1100.0,
            spark_jitter_ms: 1700.0,
            headline: DEFAULT_HEADLINE.to_string(),
        }
    }

    pub fn conversion() -> Self {
        Self {
            seed: 3701,
            morph_fraction: 0.55,
            enter_rate: 0.016,
            leave_rate: 0.015,
            spark_count: 22,
            spark_interval_ms: 900.0,
            spark_jitter_ms: 1400.0,
            ..Self::showcase()
        }
    }

    pub fn symbols() -> Self {
        Self {
            seed: 4201,
            area_per_particle: 420.0,
            min_particles: 900,
            max_particles: 1700,
            morph_fraction: 0.58,
            enter_rate: 0.016,
            leave_rate: 0.015,
            symbol_rate: 0.10,
            idle_amplitude: 10.8,
            size_ripple: 0.28,
            size_morph_gain: 0.10,
            border_pad_ratio: 0.06,
            border_pad_min: 10.0,
            spark_count: 0,
            spark_interval_ms: 900.0,
            spark_jitter_ms: 1400.0,
            headline: DEFAULT_HEADLINE.to_string(),
        }
    }

    pub fn for_layout(layout: Layout) -> Self {
        match layout {
            Layout::Showcase => Self::showcase(),
            Layout::Conversion => Self::conversion(),
            Layout::Symbol(_) => Self::symbols(),
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = headline.into();
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::symbols()
    }
}
