//! Procedural particle morphing.
//!
//! A field of idle particles that, on demand, gathers a subset of itself into
//! a vector silhouette while the rest drift along a padded border. Everything
//! here is platform free: drawing goes through [`Surface`] and text
//! rasterization through [`GlyphRaster`].

pub mod border;
pub mod config;
pub mod constants;
pub mod ease;
pub mod error;
pub mod geom;
pub mod glyph;
pub mod icons;
pub mod instance;
pub mod particles;
pub mod resample;
pub mod rings;
pub mod rng;
pub mod scheduler;
pub mod shapes;
pub mod sparks;
pub mod surface;
pub mod targets;

pub use config::FieldConfig;
pub use error::MorphError;
pub use geom::{CanvasSize, Point, Rect};
pub use glyph::{AlphaMask, BlockFont, GlyphRaster};
pub use icons::Symbol;
pub use instance::{InstanceState, MorphInstance};
pub use particles::{pick_n, Particle};
pub use resample::resample_to_count;
pub use rings::{RingField, RingSettings};
pub use rng::{Mulberry32, Stream};
pub use scheduler::Scheduler;
pub use surface::{RecordingSurface, Rgb, Surface};
pub use targets::{build_targets, Layout, PointMeta, TargetSet};
