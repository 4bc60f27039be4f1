//! Composite icons built from the primitive samplers with hand-tuned
//! fractional coordinates relative to a bounding box.

use crate::error::MorphError;
use crate::geom::{Point, Rect};
use crate::shapes::*;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Call,
    Arch,
    Draft,
    Check,
    Content,
    Launch,
    Chart,
    Steps,
    Podium,
    Funnel,
    Bag,
    Workflow,
    Gear,
    Chip,
    Loop,
    Flow,
    Pentagon,
}

impl Symbol {
    pub const ALL: [Symbol; 17] = [
        Symbol::Call,
        Symbol::Arch,
        Symbol::Draft,
        Symbol::Check,
        Symbol::Content,
        Symbol::Launch,
        Symbol::Chart,
        Symbol::Steps,
        Symbol::Podium,
        Symbol::Funnel,
        Symbol::Bag,
        Symbol::Workflow,
        Symbol::Gear,
        Symbol::Chip,
        Symbol::Loop,
        Symbol::Flow,
        Symbol::Pentagon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Symbol::Call => "call",
            Symbol::Arch => "arch",
            Symbol::Draft => "draft",
            Symbol::Check => "check",
            Symbol::Content => "content",
            Symbol::Launch => "launch",
            Symbol::Chart => "chart",
            Symbol::Steps => "steps",
            Symbol::Podium => "podium",
            Symbol::Funnel => "funnel",
            Symbol::Bag => "bag",
            Symbol::Workflow => "workflow",
            Symbol::Gear => "gear",
            Symbol::Chip => "chip",
            Symbol::Loop => "loop",
            Symbol::Flow => "flow",
            Symbol::Pentagon => "pentagon",
        }
    }

    /// Fraction of the canvas the icon's bounding box occupies.
    pub fn scale(self) -> f32 {
        match self {
            Symbol::Podium => 0.96,
            Symbol::Funnel | Symbol::Gear => 0.78,
            Symbol::Workflow => 0.70,
            Symbol::Chip => 0.74,
            Symbol::Loop => 0.76,
            _ => 0.62,
        }
    }

    /// Vertical shift of the box as a fraction of canvas height.
    pub fn y_shift(self) -> f32 {
        match self {
            Symbol::Podium => -0.105,
            _ => 0.0,
        }
    }

    pub fn sample(self, out: &mut Vec<Point>, b: Rect, step: f32) {
        match self {
            Symbol::Call => phone(out, b, step),
            Symbol::Arch => wireframe(out, b, step),
            Symbol::Draft => presentation(out, b, step),
            Symbol::Check => check(out, b, step),
            Symbol::Content => content(out, b, step),
            Symbol::Launch => rocket(out, b, step),
            Symbol::Chart => bars(out, b, step),
            Symbol::Steps => steps(out, b, step),
            Symbol::Podium => podium(out, b, step),
            Symbol::Funnel => funnel(out, b, step),
            Symbol::Bag => bag(out, b, step),
            Symbol::Workflow => workflow(out, b, step),
            Symbol::Gear => gear(out, b, step),
            Symbol::Chip => chip(out, b, step),
            Symbol::Loop => cycle(out, b, step),
            Symbol::Flow => flow(out, b, step),
            Symbol::Pentagon => pentagon(out, b, step),
        }
    }
}

impl FromStr for Symbol {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Symbol::ALL
            .into_iter()
            .find(|sym| sym.name() == key)
            .ok_or_else(|| MorphError::UnknownSymbol(s.to_string()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
fn sub(b: Rect, fx: f32, fy: f32, fw: f32, fh: f32) -> Rect {
    Rect::new(b.x + b.w * fx, b.y + b.h * fy, b.w * fw, b.h * fh)
}

#[inline]
fn seg(out: &mut Vec<Point>, b: Rect, x1: f32, y1: f32, x2: f32, y2: f32, step: f32) {
    sample_line(out, b.at(x1, y1), b.at(x2, y2), step);
}

fn check(out: &mut Vec<Point>, b: Rect, step: f32) {
    seg(out, b, 0.10, 0.55, 0.42, 0.82, step);
    seg(out, b, 0.40, 0.82, 0.88, 0.20, step);
}

fn bars(out: &mut Vec<Point>, b: Rect, step: f32) {
    let bw = b.w * 0.16;
    let gap = b.w * 0.08;
    let base = b.y + b.h * 0.90;
    for (i, frac) in [0.28, 0.52, 0.78, 0.44].into_iter().enumerate() {
        let bh = b.h * frac;
        let bx = b.x + i as f32 * (bw + gap);
        sample_rect(out, Rect::new(bx, base - bh, bw, bh), step);
    }
}

fn phone(out: &mut Vec<Point>, b: Rect, step: f32) {
    sample_rect(out, sub(b, 0.18, 0.14, 0.64, 0.72), step);
    seg(out, b, 0.36, 0.22, 0.64, 0.22, step);
    sample_rect(out, sub(b, 0.44, 0.74, 0.12, 0.08), step);
}

fn wireframe(out: &mut Vec<Point>, b: Rect, step: f32) {
    sample_rect(out, b, step);
    seg(out, b, 0.0, 0.18, 1.0, 0.18, step);
    sample_rect(out, sub(b, 0.08, 0.28, 0.84, 0.26), step);
    seg(out, b, 0.08, 0.62, 0.78, 0.62, step);
    seg(out, b, 0.08, 0.72, 0.62, 0.72, step);
    sample_rect(out, sub(b, 0.08, 0.80, 0.38, 0.12), step);
    sample_rect(out, sub(b, 0.54, 0.80, 0.38, 0.12), step);
}

fn steps(out: &mut Vec<Point>, b: Rect, step: f32) {
    const OUTLINE: [(f32, f32); 10] = [
        (0.10, 0.70),
        (0.10, 0.46),
        (0.40, 0.46),
        (0.40, 0.26),
        (0.64, 0.26),
        (0.64, 0.70),
        (0.90, 0.70),
        (0.90, 0.84),
        (0.10, 0.84),
        (0.10, 0.70),
    ];
    let pts: Vec<Point> = OUTLINE.iter().map(|&(fx, fy)| b.at(fx, fy)).collect();
    sample_polyline(out, &pts, step);
}

fn podium(out: &mut Vec<Point>, b: Rect, step: f32) {
    sample_rect(out, sub(b, 0.18, 0.60, 0.20, 0.22), step);
    sample_rect(out, sub(b, 0.40, 0.48, 0.20, 0.34), step);
    sample_rect(out, sub(b, 0.62, 0.64, 0.20, 0.18), step);
}

fn funnel(out: &mut Vec<Point>, b: Rect, step: f32) {
    let top_l = b.at(0.12, 0.26);
    let top_r = b.at(0.88, 0.26);
    let bot = b.at(0.50, 0.82);
    sample_polyline(out, &[top_l, top_r, bot, top_l], step);
    for t in [0.22, 0.40, 0.58, 0.72] {
        sample_line(out, top_l.lerp(bot, t), top_r.lerp(bot, t), step * 1.1);
    }
}

fn bag(out: &mut Vec<Point>, b: Rect, step: f32) {
    sample_rect(out, sub(b, 0.27, 0.42, 0.46, 0.40), step);
    // handle sits 10px below the body's top edge
    let center = Vec2::new(b.x + b.w * 0.50, b.y + b.h * 0.42 + 10.0);
    sample_arc(out, center, Vec2::new(b.w * 0.14, -b.h * 0.22), PI, 0.0, 28);
}

fn workflow(out: &mut Vec<Point>, b: Rect, step: f32) {
    let bw = b.w * 0.62;
    let bh = b.h * 0.16;
    let bx = b.x + (b.w - bw) / 2.0;
    let rows = [b.y + b.h * 0.18, b.y + b.h * 0.42, b.y + b.h * 0.66];
    for y in rows {
        sample_rect(out, Rect::new(bx, y, bw, bh), step * 1.05);
    }
    let cx = b.x + b.w * 0.50;
    for pair in rows.windows(2) {
        let y1 = pair[0] + bh + b.h * 0.02;
        let y2 = pair[1] - b.h * 0.02;
        sample_line(out, Vec2::new(cx, y1), Vec2::new(cx, y2), step);
        let tip = Vec2::new(cx, y2);
        for dx in [-0.04, 0.04] {
            sample_line(out, tip, Vec2::new(cx + b.w * dx, y2 - b.h * 0.05), step * 1.15);
        }
    }
}

fn gear(out: &mut Vec<Point>, b: Rect, step: f32) {
    let c = b.at(0.50, 0.52);
    let r_outer = b.w.min(b.h) * 0.32;
    let r_inner = r_outer * 0.58;

    sample_circle(out, c, r_inner, step);

    // left half of the gear rim
    let a_start = PI * 0.62;
    let a_end = PI * 1.38;
    sample_arc(out, c, Vec2::splat(r_outer), a_start, a_end, 28);

    let teeth = 5;
    let tooth_len = r_outer * 0.18;
    for i in 0..teeth {
        let a = a_start + (a_end - a_start) * ((i as f32 + 0.5) / teeth as f32);
        let dir = Vec2::new(a.cos(), a.sin());
        sample_line(out, c + dir * r_outer * 0.92, c + dir * (r_outer + tooth_len), step * 1.05);
    }

    // circuit traces to the right
    let node_r = r_outer * 0.07;
    let x0 = c.x + r_inner;
    let x2 = c.x + r_outer * 1.55;
    for y in [c.y - r_outer * 0.26, c.y, c.y + r_outer * 0.26] {
        sample_line(out, Vec2::new(x0, y), Vec2::new(x2, y), step);
        sample_circle(out, Vec2::new(x2, y), node_r, step * 1.2);
    }
    let branch = Vec2::new(c.x + r_outer * 1.10, c.y - r_outer * 0.22);
    sample_line(out, Vec2::new(branch.x, c.y), branch, step);
    sample_circle(out, branch, node_r, step * 1.2);
}

fn chip(out: &mut Vec<Point>, b: Rect, step: f32) {
    let c = b.at(0.50, 0.54);
    let body = Rect::new(c.x - b.w * 0.29, c.y - b.h * 0.23, b.w * 0.58, b.h * 0.46);
    sample_rect(out, body, step);

    let inner = Rect::new(
        c.x - body.w * 0.31,
        c.y - body.h * 0.29,
        body.w * 0.62,
        body.h * 0.58,
    );
    sample_rect(out, inner, step * 1.05);

    let pins = 4;
    let pin_len = b.w.min(b.h) * 0.08;
    for i in 0..pins {
        let t = (i as f32 + 0.5) / pins as f32;
        let px = body.x + body.w * t;
        sample_line(out, Vec2::new(px, body.y), Vec2::new(px, body.y - pin_len), step * 1.15);
        sample_line(
            out,
            Vec2::new(px, body.bottom()),
            Vec2::new(px, body.bottom() + pin_len),
            step * 1.15,
        );
    }
    for i in 0..pins {
        let t = (i as f32 + 0.5) / pins as f32;
        let py = body.y + body.h * t;
        sample_line(out, Vec2::new(body.x, py), Vec2::new(body.x - pin_len, py), step * 1.15);
        sample_line(
            out,
            Vec2::new(body.right(), py),
            Vec2::new(body.right() + pin_len, py),
            step * 1.15,
        );
    }

    for (dy, end) in [(-0.15, 0.82), (0.0, 0.82), (0.15, 0.62)] {
        let y = c.y + inner.h * dy;
        sample_line(
            out,
            Vec2::new(inner.x + inner.w * 0.18, y),
            Vec2::new(inner.x + inner.w * end, y),
            step * 1.2,
        );
    }
}

/// Four clockwise arcs with arrow heads around a circle.
fn cycle(out: &mut Vec<Point>, b: Rect, step: f32) {
    let c = b.at(0.50, 0.54);
    let r = b.w.min(b.h) * 0.33;
    let gap = PI * 0.18;
    let quarter = TAU / 4.0;
    for i in 0..4 {
        let a0 = -FRAC_PI_2 + i as f32 * quarter + gap * 0.5;
        let a1 = a0 + quarter - gap;
        let segments = (((a1 - a0).abs() * r / step.max(4.0)).floor() as usize).max(18);
        sample_arc(out, c, Vec2::splat(r), a0, a1, segments);

        let tip = c + Vec2::new(a1.cos(), a1.sin()) * r;
        sample_arrow_head(out, tip, a1 + FRAC_PI_2, r * 0.18, PI * 0.78, step * 1.05);
    }
}

fn flow(out: &mut Vec<Point>, b: Rect, step: f32) {
    let c = b.at(0.50, 0.54);
    let r = b.w.min(b.h) * 0.26;
    sample_circle(out, c, r, step);

    let tip = c + Vec2::new(r * 0.70, -r * 0.70);
    let s = step * 1.25;
    sample_line(out, tip, tip - Vec2::new(b.w * 0.06, 0.0), s);
    sample_line(out, tip, tip - Vec2::new(b.w * 0.03, b.h * 0.05), s);
    sample_line(out, tip, tip - Vec2::new(b.w * 0.03, -b.h * 0.05), s);
}

fn pentagon(out: &mut Vec<Point>, b: Rect, step: f32) {
    let c = b.at(0.50, 0.54);
    let r = b.w.min(b.h) * 0.22;
    let verts: Vec<Point> = (0..5)
        .map(|i| {
            let a = -FRAC_PI_2 + i as f32 * (TAU / 5.0);
            c + Vec2::new(a.cos(), a.sin()) * r
        })
        .collect();
    for i in 0..5 {
        sample_line(out, verts[i], verts[(i + 1) % 5], step);
    }
    for i in 0..5 {
        sample_line(out, verts[i], verts[(i + 2) % 5], step * 1.05);
    }
}

fn presentation(out: &mut Vec<Point>, b: Rect, step: f32) {
    sample_rect(out, sub(b, 0.12, 0.18, 0.76, 0.46), step);
    seg(out, b, 0.50, 0.64, 0.50, 0.80, step);
    seg(out, b, 0.22, 0.86, 0.78, 0.86, step);
    seg(out, b, 0.78, 0.86, 0.70, 0.78, step);
    seg(out, b, 0.78, 0.86, 0.70, 0.94, step);
}

fn content(out: &mut Vec<Point>, b: Rect, step: f32) {
    sample_rect(out, sub(b, 0.10, 0.16, 0.80, 0.50), step);
    seg(out, b, 0.14, 0.74, 0.86, 0.74, step);
    seg(out, b, 0.14, 0.84, 0.66, 0.84, step);
    let chart = [(0.18, 0.52), (0.36, 0.36), (0.48, 0.46), (0.58, 0.34), (0.76, 0.52)];
    let pts: Vec<Point> = chart.iter().map(|&(fx, fy)| b.at(fx, fy)).collect();
    sample_polyline(out, &pts, step);
}

fn rocket(out: &mut Vec<Point>, b: Rect, step: f32) {
    sample_rect(out, sub(b, 0.40, 0.18, 0.20, 0.52), step);
    seg(out, b, 0.40, 0.36, 0.28, 0.48, step);
    seg(out, b, 0.60, 0.36, 0.72, 0.48, step);
    seg(out, b, 0.50, 0.70, 0.44, 0.86, step);
    seg(out, b, 0.50, 0.70, 0.56, 0.86, step);
}
