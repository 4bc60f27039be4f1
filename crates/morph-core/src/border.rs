//! Ambient wandering along a padded rectangle for unassigned particles.

use crate::constants::*;
use crate::ease::lerp;
use crate::geom::{Point, Rect};
use crate::rng::Mulberry32;
use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    fn from_index(i: usize) -> Self {
        match i {
            0 => Side::Top,
            1 => Side::Right,
            2 => Side::Bottom,
            _ => Side::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderMeta {
    pub side: Side,
    /// Position along the edge in `[0, 1)`.
    pub t: f32,
    /// Inward offset from the edge.
    pub normal_offset: f32,
    pub osc_speed: f32,
    pub phase: f32,
}

pub fn build_border_meta(n: usize, rect: Rect, seed: u32) -> Vec<BorderMeta> {
    let mut rng = Mulberry32::new(seed);
    let band = (rect.w.min(rect.h) * BORDER_BAND_RATIO).max(BORDER_BAND_MIN);
    (0..n)
        .map(|_| BorderMeta {
            side: Side::from_index(rng.index(4)),
            t: rng.next_f32(),
            normal_offset: rng.next_f32() * band,
            osc_speed: BORDER_OSC_MIN + rng.next_f32() * BORDER_OSC_SPAN,
            phase: rng.next_f32() * TAU,
        })
        .collect()
}

/// Position of a border particle at `time` seconds.
pub fn border_point(rect: Rect, m: &BorderMeta, time: f32) -> Point {
    let drift = (time * m.osc_speed + m.phase).sin() * BORDER_DRIFT;
    let tt = (m.t + drift + 1.0).rem_euclid(1.0);
    match m.side {
        Side::Top => Vec2::new(lerp(rect.x, rect.right(), tt), rect.y + m.normal_offset),
        Side::Bottom => Vec2::new(lerp(rect.x, rect.right(), tt), rect.bottom() - m.normal_offset),
        Side::Right => Vec2::new(rect.right() - m.normal_offset, lerp(rect.y, rect.bottom(), tt)),
        Side::Left => Vec2::new(rect.x + m.normal_offset, lerp(rect.y, rect.bottom(), tt)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_stay_inside_the_band() {
        let rect = Rect::new(20.0, 20.0, 600.0, 400.0);
        let band = (400.0 * BORDER_BAND_RATIO).max(BORDER_BAND_MIN);
        let meta = build_border_meta(500, rect, 555);
        for (i, m) in meta.iter().enumerate() {
            let p = border_point(rect, m, i as f32 * 0.37);
            assert!(rect.contains(p), "{p:?}");
            let edge = (p.x - rect.x)
                .min(rect.right() - p.x)
                .min(p.y - rect.y)
                .min(rect.bottom() - p.y);
            assert!(edge <= band + 1e-3);
        }
    }

    #[test]
    fn every_side_is_used() {
        let meta = build_border_meta(200, Rect::new(0.0, 0.0, 100.0, 100.0), 1);
        for side in [Side::Top, Side::Right, Side::Bottom, Side::Left] {
            assert!(meta.iter().any(|m| m.side == side));
        }
    }

    #[test]
    fn same_seed_same_meta() {
        let r = Rect::new(0.0, 0.0, 300.0, 200.0);
        assert_eq!(build_border_meta(64, r, 9), build_border_meta(64, r, 9));
    }
}
