//! Outline samplers for geometric primitives.
//!
//! Each sampler appends points spaced roughly `step` apart to `out`. They are
//! pure: the same inputs always append the same points.

use crate::constants::{MIN_CIRCLE_SEGMENTS, MIN_LINE_SEGMENTS};
use crate::geom::{Point, Rect};
use glam::Vec2;
use std::f32::consts::{PI, TAU};

pub fn sample_line(out: &mut Vec<Point>, a: Point, b: Point, step: f32) {
    let d = b - a;
    let n = ((d.length() / step.max(f32::EPSILON)).floor() as usize).max(MIN_LINE_SEGMENTS);
    out.reserve(n + 1);
    for i in 0..=n {
        out.push(a + d * (i as f32 / n as f32));
    }
}

/// Samples a chain of segments through `pts`.
pub fn sample_polyline(out: &mut Vec<Point>, pts: &[Point], step: f32) {
    for w in pts.windows(2) {
        sample_line(out, w[0], w[1], step);
    }
}

pub fn sample_rect(out: &mut Vec<Point>, r: Rect, step: f32) {
    let tl = Vec2::new(r.x, r.y);
    let tr = Vec2::new(r.right(), r.y);
    let br = Vec2::new(r.right(), r.bottom());
    let bl = Vec2::new(r.x, r.bottom());
    sample_polyline(out, &[tl, tr, br, bl, tl], step);
}

pub fn sample_circle(out: &mut Vec<Point>, center: Point, r: f32, step: f32) {
    let circumference = (TAU * r).max(1.0);
    let n = ((circumference / step.max(3.0)).floor() as usize).max(MIN_CIRCLE_SEGMENTS);
    sample_arc(out, center, Vec2::splat(r), 0.0, TAU, n);
}

/// Elliptical arc from `a0` to `a1` (radians) with exactly `segments + 1` points.
pub fn sample_arc(out: &mut Vec<Point>, center: Point, radii: Vec2, a0: f32, a1: f32, segments: usize) {
    let segments = segments.max(1);
    let span = a1 - a0;
    out.reserve(segments + 1);
    for i in 0..=segments {
        let a = a0 + span * (i as f32 / segments as f32);
        out.push(center + Vec2::new(a.cos(), a.sin()) * radii);
    }
}

/// Two short strokes from `tip`, splayed by `spread` radians around the reverse of `dir`.
pub fn sample_arrow_head(out: &mut Vec<Point>, tip: Point, dir: f32, len: f32, spread: f32, step: f32) {
    for a in [dir + spread, dir - spread] {
        sample_line(out, tip, tip + Vec2::new(a.cos(), a.sin()) * len, step);
    }
}

/// Shaft from `a` to `b` plus a two-stroke head at `b`.
pub fn sample_arrow(out: &mut Vec<Point>, a: Point, b: Point, step: f32) {
    sample_line(out, a, b, step);
    let d = b - a;
    let head = (step * 3.2).max(12.0);
    sample_arrow_head(out, b, d.y.atan2(d.x), head, PI * 0.82, step);
}
