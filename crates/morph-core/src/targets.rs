//! Compose sampled shapes into the target set for one layout or symbol.

use crate::constants::*;
use crate::error::MorphError;
use crate::geom::{CanvasSize, Point, Rect};
use crate::glyph::{sample_text, GlyphRaster};
use crate::icons::Symbol;
use crate::resample::{resample_tagged, resample_to_count};
use crate::rng::Mulberry32;
use crate::shapes::*;
use glam::Vec2;
use std::fmt;
use std::str::FromStr;

/// What the assigned particles assemble into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Browser-window mock whose content scrolls in a loop.
    Showcase,
    /// Wireframe page, arrow, and a headline word.
    Conversion,
    Symbol(Symbol),
}

impl Layout {
    pub fn name(&self) -> &'static str {
        match self {
            Layout::Showcase => "showcase",
            Layout::Conversion => "conversion",
            Layout::Symbol(s) => s.name(),
        }
    }
}

impl FromStr for Layout {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "showcase" | "vetrina" => Ok(Layout::Showcase),
            "conversion" | "conversione" => Ok(Layout::Conversion),
            _ => s.parse().map(Layout::Symbol),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointMeta {
    #[default]
    Fixed,
    /// Loops vertically inside the content rect; `ry` is the offset from its top.
    Scroll { ry: f32 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TargetSet {
    pub targets: Vec<Point>,
    pub meta: Vec<PointMeta>,
    pub content_rect: Option<Rect>,
}

impl TargetSet {
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Target for `slot`, with scrollable points wrapped at `scroll_offset`.
    pub fn position(&self, slot: usize, scroll_offset: f32) -> Option<Point> {
        let p = *self.targets.get(slot)?;
        match (self.meta.get(slot), self.content_rect) {
            (Some(PointMeta::Scroll { ry }), Some(cr)) if cr.h > 0.0 => {
                let wrapped = (ry + scroll_offset).rem_euclid(cr.h);
                Some(Vec2::new(p.x, cr.y + wrapped))
            }
            _ => Some(p),
        }
    }
}

/// Sampling step for a canvas: `clamp((w + h) / 175, 6, 10)`.
pub fn sample_step(size: CanvasSize) -> f32 {
    ((size.width + size.height) / SAMPLE_STEP_DIVISOR).clamp(SAMPLE_STEP_MIN, SAMPLE_STEP_MAX)
}

/// Builds exactly `count` targets for `layout`.
pub fn build_targets(
    layout: Layout,
    count: usize,
    size: CanvasSize,
    seed: u32,
    headline: &str,
    glyphs: &dyn GlyphRaster,
) -> TargetSet {
    let mut rng = Mulberry32::new(seed);
    let step = sample_step(size);
    match layout {
        Layout::Showcase => showcase(count, size, step, &mut rng),
        Layout::Conversion => conversion(count, size, step, headline, glyphs, &mut rng),
        Layout::Symbol(sym) => symbol(sym, count, size, step, &mut rng),
    }
}

fn showcase(count: usize, size: CanvasSize, step: f32, rng: &mut Mulberry32) -> TargetSet {
    let (w, h) = (size.width, size.height);
    let frame = size.rect().centered(0.62, 0.52);
    let bar_h = frame.h * 0.17;

    let mut pts = Vec::new();
    let mut meta = Vec::new();
    let mut push = |list: Vec<Point>, tag: &dyn Fn(Point) -> PointMeta| {
        for p in list {
            meta.push(tag(p));
            pts.push(p);
        }
    };

    let fixed = |_: Point| PointMeta::Fixed;
    let mut chrome = Vec::new();
    sample_rect(&mut chrome, frame, step);
    sample_line(
        &mut chrome,
        Vec2::new(frame.x, frame.y + bar_h),
        Vec2::new(frame.right(), frame.y + bar_h),
        step,
    );
    push(chrome, &fixed);

    let pad_x = frame.w * 0.08;
    let top = frame.y + bar_h + frame.h * 0.06;
    let content = Rect::new(
        frame.x + pad_x,
        top,
        frame.w - pad_x * 2.0,
        frame.bottom() - top - frame.h * 0.06,
    );
    let scroll = |p: Point| PointMeta::Scroll { ry: p.y - content.y };
    let c = |fx: f32, fy: f32, fw: f32, fh: f32| {
        Rect::new(
            content.x + content.w * fx,
            content.y + content.h * fy,
            content.w * fw,
            content.h * fh,
        )
    };
    let text_line = |fy: f32, len: f32| {
        (
            content.at(0.0, fy),
            Vec2::new(content.x + content.w * len, content.y + content.h * fy),
        )
    };

    let mut body = Vec::new();
    sample_rect(&mut body, c(0.0, 0.02, 1.0, 0.24), step);
    for (fy, len) in [(0.31, 0.88), (0.38, 0.68)] {
        let (a, b) = text_line(fy, len);
        sample_line(&mut body, a, b, step);
    }
    for i in 0..4 {
        sample_rect(&mut body, c(0.02 + i as f32 * 0.245, 0.46, 0.20, 0.08), step);
    }
    sample_rect(&mut body, c(0.0, 0.58, 0.48, 0.18), step);
    sample_rect(&mut body, c(0.52, 0.58, 0.48, 0.18), step);
    for (fy, len) in [(0.82, 0.78), (0.90, 0.62)] {
        let (a, b) = text_line(fy, len);
        sample_line(&mut body, a, b, step);
    }
    push(body, &scroll);

    log::debug!("showcase {}x{}: {} raw points for {}", w, h, pts.len(), count);
    let (targets, meta) = resample_tagged(&pts, &meta, count, rng, 1.0);
    TargetSet {
        targets,
        meta,
        content_rect: Some(content),
    }
}

fn conversion(
    count: usize,
    size: CanvasSize,
    step: f32,
    headline: &str,
    glyphs: &dyn GlyphRaster,
    rng: &mut Mulberry32,
) -> TargetSet {
    let (w, h) = (size.width, size.height);
    let page = Rect::new(w * 0.19, h * 0.10, w * 0.62, h * 0.38);
    let bar_h = page.h * 0.18;

    let mut web = Vec::new();
    sample_rect(&mut web, page, step);
    sample_line(
        &mut web,
        Vec2::new(page.x, page.y + bar_h),
        Vec2::new(page.right(), page.y + bar_h),
        step,
    );
    for (fy, len) in [(0.22, 0.86), (0.34, 0.70)] {
        let y = page.y + bar_h + page.h * fy;
        sample_line(
            &mut web,
            Vec2::new(page.x + page.w * 0.10, y),
            Vec2::new(page.x + page.w * len, y),
            step,
        );
    }
    sample_rect(
        &mut web,
        Rect::new(
            page.x + page.w * 0.28,
            page.y + bar_h + page.h * 0.58,
            page.w * 0.44,
            page.h * 0.18,
        ),
        step,
    );

    let mut arrow = Vec::new();
    sample_arrow(
        &mut arrow,
        Vec2::new(page.x + page.w * 0.50, page.bottom() + h * 0.03),
        Vec2::new(w * 0.50, h * 0.68),
        step,
    );

    let headline = if headline.trim().is_empty() { DEFAULT_HEADLINE } else { headline };
    let text = sample_text(headline, Rect::new(w * 0.14, h * 0.72, w * 0.72, h * 0.22), glyphs, rng);

    let n_text = (count as f32 * 0.56).floor() as usize;
    let n_arrow = (count as f32 * 0.14).floor() as usize;
    let n_web = count.saturating_sub(n_text + n_arrow);

    let mut targets = resample_to_count(&web, n_web, rng, 1.0);
    targets.extend(resample_to_count(&arrow, n_arrow, rng, 0.8));
    targets.extend(resample_to_count(&text, n_text, rng, 0.6));
    TargetSet {
        meta: vec![PointMeta::Fixed; targets.len()],
        targets,
        content_rect: None,
    }
}

fn symbol(sym: Symbol, count: usize, size: CanvasSize, step: f32, rng: &mut Mulberry32) -> TargetSet {
    let (w, h) = (size.width, size.height);
    let s = sym.scale();
    let bw = w * s;
    let bh = h * s;
    let b = Rect::new((w - bw) / 2.0, (h - bh) / 2.0 + h * sym.y_shift(), bw, bh);

    let mut pts = Vec::new();
    sym.sample(&mut pts, b, step);
    let mut targets = resample_to_count(&pts, count, rng, 0.9);
    // row-major order keeps slot-to-slot travel short between symbols
    targets.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));
    TargetSet {
        meta: vec![PointMeta::Fixed; targets.len()],
        targets,
        content_rect: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::BlockFont;

    #[test]
    fn layout_names_and_aliases_parse() {
        assert_eq!("vetrina".parse::<Layout>().unwrap(), Layout::Showcase);
        assert_eq!("Conversion".parse::<Layout>().unwrap(), Layout::Conversion);
        assert_eq!("chip".parse::<Layout>().unwrap(), Layout::Symbol(Symbol::Chip));
        assert!("nope".parse::<Layout>().is_err());
    }

    #[test]
    fn step_is_clamped() {
        assert_eq!(sample_step(CanvasSize::new(100.0, 100.0)), 6.0);
        assert_eq!(sample_step(CanvasSize::new(4000.0, 3000.0)), 10.0);
    }

    #[test]
    fn scroll_position_wraps_inside_content() {
        let set = TargetSet {
            targets: vec![Vec2::new(5.0, 110.0)],
            meta: vec![PointMeta::Scroll { ry: 10.0 }],
            content_rect: Some(Rect::new(0.0, 100.0, 50.0, 40.0)),
        };
        assert_eq!(set.position(0, 0.0).unwrap(), Vec2::new(5.0, 110.0));
        assert_eq!(set.position(0, -15.0).unwrap(), Vec2::new(5.0, 135.0));
        assert_eq!(set.position(0, 35.0).unwrap(), Vec2::new(5.0, 105.0));
        assert!(set.position(1, 0.0).is_none());
    }

    #[test]
    fn showcase_tags_content_as_scrollable() {
        let set = build_targets(Layout::Showcase, 500, CanvasSize::new(800.0, 600.0), 1, "", &BlockFont);
        assert_eq!(set.len(), 500);
        assert_eq!(set.meta.len(), 500);
        let cr = set.content_rect.unwrap();
        let scrolling = set
            .meta
            .iter()
            .filter(|m| matches!(m, PointMeta::Scroll { .. }))
            .count();
        assert!(scrolling > 0 && scrolling < 500);
        for (p, m) in set.targets.iter().zip(&set.meta) {
            if let PointMeta::Scroll { ry } = m {
                assert!((p.y - cr.y - ry).abs() < 1.5);
            }
        }
    }

    #[test]
    fn blank_headline_draws_the_default_word() {
        let size = CanvasSize::new(800.0, 600.0);
        let blank = build_targets(Layout::Conversion, 600, size, 9, "  ", &BlockFont);
        let word = build_targets(Layout::Conversion, 600, size, 9, DEFAULT_HEADLINE, &BlockFont);
        assert_eq!(blank.targets, word.targets);
    }

    #[test]
    fn conversion_budget_is_exact() {
        let set = build_targets(
            Layout::Conversion,
            777,
            CanvasSize::new(900.0, 700.0),
            5,
            "CONTACT",
            &BlockFont,
        );
        assert_eq!(set.len(), 777);
        assert!(set.content_rect.is_none());
    }

    #[test]
    fn symbol_targets_are_row_sorted() {
        let set = build_targets(
            Layout::Symbol(Symbol::Funnel),
            300,
            CanvasSize::new(640.0, 480.0),
            42,
            "",
            &BlockFont,
        );
        for w in set.targets.windows(2) {
            assert!(w[0].y < w[1].y || (w[0].y == w[1].y && w[0].x <= w[1].x));
        }
    }
}
