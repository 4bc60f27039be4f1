//! Idle point cloud.

use crate::config::FieldConfig;
use crate::constants::*;
use crate::geom::{CanvasSize, Point};
use crate::rng::Mulberry32;
use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub base: Point,
    pub alpha0: f32,
    pub phase: f32,
    pub freq: Vec2,
    pub jitter: Vec2,
}

impl Particle {
    /// Idle position at `t` seconds with oscillation amplitude `amp`.
    #[inline]
    pub fn idle_position(&self, t: f32, amp: f32) -> Point {
        if amp == 0.0 {
            return self.base;
        }
        self.base
            + Vec2::new(
                (t * self.freq.x + self.jitter.x).sin(),
                (t * self.freq.y + self.jitter.y).cos(),
            ) * amp
    }
}

/// Particle count for a canvas: area over density, clamped to the preset range.
pub fn pick_n(config: &FieldConfig, size: CanvasSize) -> usize {
    let n = (size.area() / config.area_per_particle).floor() as usize;
    n.clamp(config.min_particles, config.max_particles)
}

pub fn build_idle(n: usize, size: CanvasSize, seed: u32) -> Vec<Particle> {
    let mut rng = Mulberry32::new(seed);
    (0..n)
        .map(|_| {
            let base = Vec2::new(rng.next_f32() * size.width, rng.next_f32() * size.height);
            let alpha0 = IDLE_ALPHA_MIN + IDLE_ALPHA_SPAN * rng.next_f32();
            let phase = rng.next_f32() * TAU;
            let freq = Vec2::new(
                IDLE_FREQ_MIN + rng.next_f32() * IDLE_FREQ_SPAN,
                IDLE_FREQ_MIN + rng.next_f32() * IDLE_FREQ_SPAN,
            );
            let jitter = Vec2::new(rng.next_f32() * TAU, rng.next_f32() * TAU);
            Particle {
                base,
                alpha0,
                phase,
                freq,
                jitter,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_n_clamps_both_ends() {
        let cfg = FieldConfig::symbols();
        assert_eq!(pick_n(&cfg, CanvasSize::new(10.0, 10.0)), cfg.min_particles);
        assert_eq!(pick_n(&cfg, CanvasSize::new(4000.0, 4000.0)), cfg.max_particles);
        assert_eq!(pick_n(&cfg, CanvasSize::new(800.0, 600.0)), 1142);
    }

    #[test]
    fn idle_points_fill_the_canvas() {
        let size = CanvasSize::new(300.0, 200.0);
        let pts = build_idle(400, size, 7);
        for p in &pts {
            assert!(p.base.x >= 0.0 && p.base.x < 300.0);
            assert!(p.base.y >= 0.0 && p.base.y < 200.0);
            assert!(p.alpha0 >= IDLE_ALPHA_MIN && p.alpha0 <= IDLE_ALPHA_MIN + IDLE_ALPHA_SPAN);
        }
    }

    #[test]
    fn zero_amplitude_is_base() {
        let p = build_idle(1, CanvasSize::new(50.0, 50.0), 3)[0];
        assert_eq!(p.idle_position(12.5, 0.0), p.base);
    }
}
