//! Concentric breathing rings, the ambient backdrop behind hero sections.

use crate::ease::clamp01;
use crate::geom::{CanvasSize, Point};
use crate::rng::Mulberry32;
use crate::surface::{clamp_device_pixel_ratio, Rgb, Surface};
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Share of the angular spacing used as per-particle angle jitter.
const ANGLE_JITTER: f32 = 0.20;

/// Reduced ring counts for narrow hosts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompactRings {
    pub max_width: f32,
    pub per_ring: usize,
    pub inner_rings: usize,
    pub outer_rings: usize,
}

/// Central zone kept mostly clear so overlaid text stays readable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SafeZone {
    /// Radius as a share of the smaller canvas side.
    pub radius_ratio: f32,
    /// Fade band width as a share of the smaller canvas side.
    pub fade_ratio: f32,
    /// Alpha multiplier inside the zone.
    pub floor: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repel {
    pub radius: f32,
    pub strength: f32,
    /// Alpha multiplier at the edge of the radius, rising to 1 at the pointer.
    pub alpha_floor: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RingSettings {
    pub seed: u32,
    pub per_ring: usize,
    pub inner_rings: usize,
    pub outer_rings: usize,
    pub ring_jitter: f32,
    pub particle_size: f32,
    pub min_alpha: f32,
    pub max_alpha: f32,
    pub base_radius_ratio: f32,
    pub inner_span_ratio: f32,
    pub outer_span_ratio: f32,
    pub period_ms: f64,
    pub breath_period_ms: f64,
    pub breath_amp_ratio: f32,
    pub center_y_ratio: f32,
    /// Extra alpha toward the top of the canvas: `× (1 + boost · yN)`.
    pub alpha_top_boost: f32,
    pub compact: Option<CompactRings>,
    pub safe_zone: Option<SafeZone>,
    pub repel: Option<Repel>,
}

impl RingSettings {
    /// Full-screen welcome rings with a text-safe center.
    pub fn hero() -> Self {
        Self {
            seed: 200,
            per_ring: 46,
            inner_rings: 20,
            outer_rings: 70,
            ring_jitter: 0.22,
            particle_size: 2.0,
            min_alpha: 0.10,
            max_alpha: 1.00,
            base_radius_ratio: 0.42,
            inner_span_ratio: 0.18,
            outer_span_ratio: 0.75,
            period_ms: 6000.0,
            breath_period_ms: 5400.0,
            breath_amp_ratio: 0.070,
            center_y_ratio: 0.5,
            alpha_top_boost: 0.0,
            compact: Some(CompactRings {
                max_width: 780.0,
                per_ring: 24,
                inner_rings: 8,
                outer_rings: 28,
            }),
            safe_zone: Some(SafeZone {
                radius_ratio: 0.24,
                fade_ratio: 0.36,
                floor: 0.18,
            }),
            repel: Some(Repel {
                radius: 260.0,
                strength: 24.0,
                alpha_floor: 1.0,
            }),
        }
    }

    /// Faint rings anchored high on the page, behind section content.
    pub fn backdrop() -> Self {
        Self {
            seed: 200,
            per_ring: 36,
            inner_rings: 10,
            outer_rings: 38,
            ring_jitter: 0.22,
            particle_size: 1.75,
            min_alpha: 0.10,
            max_alpha: 0.46,
            base_radius_ratio: 0.44,
            inner_span_ratio: 0.14,
            outer_span_ratio: 0.60,
            period_ms: 6200.0,
            breath_period_ms: 5600.0,
            breath_amp_ratio: 0.060,
            center_y_ratio: 0.26,
            alpha_top_boost: 0.70,
            compact: None,
            safe_zone: None,
            repel: None,
        }
    }

    pub fn maintenance() -> Self {
        Self {
            seed: 160,
            per_ring: 42,
            inner_rings: 14,
            outer_rings: 50,
            ring_jitter: 0.24,
            particle_size: 1.9,
            min_alpha: 0.12,
            max_alpha: 0.90,
            base_radius_ratio: 0.48,
            inner_span_ratio: 0.16,
            outer_span_ratio: 0.70,
            period_ms: 6200.0,
            breath_period_ms: 5200.0,
            breath_amp_ratio: 0.065,
            center_y_ratio: 0.42,
            alpha_top_boost: 0.80,
            compact: None,
            safe_zone: None,
            repel: Some(Repel {
                radius: 220.0,
                strength: 60.0,
                alpha_floor: 0.85,
            }),
        }
    }

    /// Preset by name: `hero`, `backdrop` or `maintenance`.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "hero" | "welcome" => Some(Self::hero()),
            "backdrop" | "ambient" => Some(Self::backdrop()),
            "maintenance" => Some(Self::maintenance()),
            _ => None,
        }
    }

    fn is_compact(&self, size: CanvasSize) -> Option<CompactRings> {
        self.compact.filter(|c| size.width <= c.max_width)
    }
}

impl Default for RingSettings {
    fn default() -> Self {
        Self::hero()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingPoint {
    /// Unit direction from the ring center.
    pub dir: Vec2,
    pub radius: f32,
    pub alpha0: f32,
    pub phase: f32,
}

pub fn build_rings(settings: &RingSettings, size: CanvasSize) -> Vec<RingPoint> {
    let mut rng = Mulberry32::new(settings.seed);
    let (per_ring, inner, outer) = match settings.is_compact(size) {
        Some(c) => (c.per_ring, c.inner_rings, c.outer_rings),
        None => (settings.per_ring, settings.inner_rings, settings.outer_rings),
    };
    if per_ring == 0 {
        return Vec::new();
    }

    let max_dim = size.max_side();
    let base_r = max_dim * settings.base_radius_ratio;
    let inner_r = (base_r - max_dim * settings.inner_span_ratio).max(0.0);
    let outer_r = base_r + max_dim * settings.outer_span_ratio;
    let total = inner + outer;
    let spacing = if total > 1 {
        (outer_r - inner_r) / (total - 1) as f32
    } else {
        0.0
    };
    let angular = TAU / per_ring as f32;

    let mut points = Vec::with_capacity(total * per_ring);
    for ring in 0..total {
        let ring_r = inner_r + ring as f32 * spacing;
        let offset = rng.next_f32() * TAU;
        for k in 0..per_ring {
            let jitter = rng.signed() * angular * ANGLE_JITTER;
            let angle = k as f32 * angular + offset + jitter;
            let radius = ring_r + rng.signed() * spacing * settings.ring_jitter;
            let alpha0 = settings.min_alpha + (settings.max_alpha - settings.min_alpha) * rng.next_f32();
            let phase = rng.next_f32() * TAU;
            points.push(RingPoint {
                dir: Vec2::new(angle.cos(), angle.sin()),
                radius,
                alpha0,
                phase,
            });
        }
    }
    points
}

/// Fraction of a period elapsed at `elapsed_ms`, in `[0, 1)`.
fn cycle(elapsed_ms: f64, period_ms: f64) -> f32 {
    if period_ms <= 0.0 {
        return 0.0;
    }
    (elapsed_ms / period_ms).rem_euclid(1.0) as f32
}

pub struct RingField {
    settings: RingSettings,
    size: CanvasSize,
    points: Vec<RingPoint>,
    pointer: Option<Point>,
    paused: bool,
    reduced_motion: bool,
    start_ms: Option<f64>,
}

impl RingField {
    pub fn new(settings: RingSettings, size: CanvasSize) -> Self {
        let points = build_rings(&settings, size);
        Self {
            settings,
            size,
            points,
            pointer: None,
            paused: false,
            reduced_motion: false,
            start_ms: None,
        }
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn settings(&self) -> &RingSettings {
        &self.settings
    }

    pub fn points(&self) -> &[RingPoint] {
        &self.points
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn on_resize<S: Surface + ?Sized>(&mut self, surface: &mut S, css_width: f32, css_height: f32, dpr: f32) {
        let size = CanvasSize::new(css_width, css_height);
        surface.set_backing_size(size, clamp_device_pixel_ratio(dpr));
        self.resize(size);
    }

    pub fn resize(&mut self, size: CanvasSize) {
        self.size = size;
        self.points = build_rings(&self.settings, size);
    }

    /// Pointer position in canvas coordinates, or `None` when it left the host.
    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused && !paused {
            self.start_ms = None;
        }
        self.paused = paused;
    }

    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, now_ms: f64, color: Rgb) -> bool {
        if self.paused {
            return false;
        }
        if self.reduced_motion {
            self.render(surface, now_ms, color, true);
            return false;
        }
        self.start_ms.get_or_insert(now_ms);
        self.render(surface, now_ms, color, false);
        true
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, now_ms: f64, color: Rgb, force_still: bool) {
        surface.clear(self.size);
        surface.set_fill(color);

        let s = &self.settings;
        let elapsed = match (force_still, self.start_ms) {
            (false, Some(start)) => now_ms - start,
            _ => 0.0,
        };
        let tick_r = cycle(elapsed, s.period_ms);
        let tick_b = cycle(elapsed, s.breath_period_ms);
        let breath_s = ((tick_b * TAU - FRAC_PI_2).sin() + 1.0) / 2.0;

        let (w, h) = (self.size.width, self.size.height);
        let center = Vec2::new(w * 0.5, h * s.center_y_ratio);
        let breath = (breath_s - 0.5) * self.size.max_side() * s.breath_amp_ratio;
        let compact = s.is_compact(self.size).is_some();
        let pointer = if force_still { None } else { self.pointer };

        for p in &self.points {
            let ripple = 0.5 + 0.5 * (tick_r * TAU + p.phase).sin();
            let mut pos = center + p.dir * (p.radius + breath);
            let top = clamp01(1.0 - pos.y / h);
            let mut alpha = clamp01(p.alpha0 * (0.55 + 0.65 * ripple) * (1.0 + top * s.alpha_top_boost));

            if let Some(zone) = s.safe_zone {
                alpha *= safe_zone_factor(zone, pos.distance(center), self.size.min_side());
            }
            if compact {
                alpha *= compact_edge_factor(pos, center, self.size);
            }
            if let (Some(repel), Some(ptr)) = (s.repel, pointer) {
                let d = pos - ptr;
                let dist = match d.length() {
                    l if l > 0.0 => l,
                    _ => 1.0,
                };
                if dist < repel.radius {
                    let k = 1.0 - dist / repel.radius;
                    pos += d / dist * (repel.strength * k);
                    alpha *= repel.alpha_floor + (1.0 - repel.alpha_floor) * k;
                }
            }

            let size = s.particle_size * (0.90 + 0.25 * ripple);
            surface.fill_circle(pos, size, alpha);
        }
    }
}

fn safe_zone_factor(zone: SafeZone, dist: f32, min_side: f32) -> f32 {
    let safe = min_side * zone.radius_ratio;
    let fade = min_side * zone.fade_ratio;
    if dist <= safe {
        zone.floor
    } else if fade > 0.0 && dist < safe + fade {
        zone.floor + (dist - safe) / fade * (1.0 - zone.floor)
    } else {
        1.0
    }
}

/// Narrow hosts clear a vertical lane in the middle and fade top and bottom.
fn compact_edge_factor(pos: Point, center: Point, size: CanvasSize) -> f32 {
    let mut f = 1.0;
    let edge = (pos.x - center.x).abs() / (size.width * 0.5).max(1.0);
    if edge < 0.34 {
        f *= 0.02;
    } else if edge < 0.62 {
        f *= 0.02 + (edge - 0.34) / (0.62 - 0.34) * 0.98;
    }
    let y = pos.y / size.height.max(1.0);
    if y < 0.18 {
        f *= (y / 0.18).max(0.0);
    } else if y > 0.84 {
        f *= ((1.0 - y) / 0.16).max(0.0);
    }
    f
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    #[test]
    fn ring_count_follows_preset_and_compact_mode() {
        let s = RingSettings::hero();
        assert_eq!(build_rings(&s, CanvasSize::new(1280.0, 720.0)).len(), 46 * 90);
        assert_eq!(build_rings(&s, CanvasSize::new(390.0, 800.0)).len(), 24 * 36);
        let m = RingSettings::maintenance();
        assert_eq!(build_rings(&m, CanvasSize::new(390.0, 800.0)).len(), 42 * 64);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let s = RingSettings::backdrop();
        let size = CanvasSize::new(900.0, 600.0);
        assert_eq!(build_rings(&s, size), build_rings(&s, size));
    }

    #[test]
    fn safe_zone_dims_center() {
        let zone = RingSettings::hero().safe_zone.unwrap();
        assert_eq!(safe_zone_factor(zone, 0.0, 1000.0), 0.18);
        assert_eq!(safe_zone_factor(zone, 10_000.0, 1000.0), 1.0);
        let mid = safe_zone_factor(zone, 240.0 + 180.0, 1000.0);
        assert!(mid > 0.18 && mid < 1.0);
    }

    #[test]
    fn pointer_pushes_nearby_particles_away() {
        let size = CanvasSize::new(1200.0, 800.0);
        let mut field = RingField::new(RingSettings::maintenance(), size);
        let mut still = RecordingSurface::default();
        field.render(&mut still, 0.0, Rgb::default(), false);

        let anchor = still.circles[0].center;
        field.set_pointer(Some(anchor + Vec2::new(5.0, 0.0)));
        let mut pushed = RecordingSurface::default();
        field.render(&mut pushed, 0.0, Rgb::default(), false);
        assert!(pushed.circles[0].center.x < anchor.x);
    }

    #[test]
    fn alpha_stays_in_unit_range() {
        let mut field = RingField::new(RingSettings::hero(), CanvasSize::new(600.0, 900.0));
        let mut surface = RecordingSurface::default();
        field.frame(&mut surface, 0.0, Rgb::default());
        field.frame(&mut surface, 1234.0, Rgb::default());
        assert!(!surface.circles.is_empty());
        assert!(surface.circles.iter().all(|c| (0.0..=1.0).contains(&c.alpha)));
    }

    #[test]
    fn paused_field_skips_frames() {
        let mut field = RingField::new(RingSettings::backdrop(), CanvasSize::new(800.0, 600.0));
        let mut surface = RecordingSurface::default();
        field.set_paused(true);
        assert!(!field.frame(&mut surface, 10.0, Rgb::default()));
        assert_eq!(surface.clears, 0);
    }
}
