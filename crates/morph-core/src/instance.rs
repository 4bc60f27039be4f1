//! One particle field bound to one canvas.
//!
//! All per-canvas state lives in [`MorphInstance`]. Geometry is rebuilt from
//! the seed family on every resize; the intent and progress scalars in
//! [`InstanceState`] survive rebuilds.

use crate::border::{border_point, build_border_meta, BorderMeta};
use crate::config::FieldConfig;
use crate::constants::*;
use crate::ease::{clamp01, ease_in_out, smooth_toward};
use crate::geom::{CanvasSize, Point, Rect};
use crate::glyph::{BlockFont, GlyphRaster};
use crate::particles::{build_idle, pick_n, Particle};
use crate::rng::{Mulberry32, Stream};
use crate::sparks::SparkPool;
use crate::surface::{clamp_device_pixel_ratio, Rgb, Surface};
use crate::targets::{build_targets, Layout, TargetSet};

#[derive(Clone, Debug, PartialEq)]
pub struct InstanceState {
    /// External intent: hover or in-view.
    pub want: bool,
    pub morph: f32,
    pub symbol_t: f32,
    pub layout: Layout,
    pub paused: bool,
}

impl InstanceState {
    fn new(layout: Layout) -> Self {
        Self {
            want: false,
            morph: 0.0,
            symbol_t: 1.0,
            layout,
            paused: false,
        }
    }
}

pub struct MorphInstance {
    config: FieldConfig,
    glyphs: Box<dyn GlyphRaster>,
    reduced_motion: bool,
    size: CanvasSize,
    particles: Vec<Particle>,
    /// Per particle: slot in the target set, or `None` for border particles.
    assignment: Vec<Option<u32>>,
    morph_count: usize,
    target_set: TargetSet,
    targets_from: Vec<Point>,
    border_rect: Rect,
    border: Vec<BorderMeta>,
    sparks: SparkPool,
    rng: Mulberry32,
    state: InstanceState,
    start_ms: Option<f64>,
    /// Content scroll applied by the last rendered frame.
    scroll: f32,
}

impl MorphInstance {
    pub fn new(config: FieldConfig, layout: Layout, size: CanvasSize) -> Self {
        let rng = Mulberry32::new(config.seed);
        let mut inst = Self {
            config,
            glyphs: Box::new(BlockFont),
            reduced_motion: false,
            size,
            particles: Vec::new(),
            assignment: Vec::new(),
            morph_count: 0,
            target_set: TargetSet::default(),
            targets_from: Vec::new(),
            border_rect: size.rect(),
            border: Vec::new(),
            sparks: SparkPool::default(),
            rng,
            state: InstanceState::new(layout),
            start_ms: None,
            scroll: 0.0,
        };
        inst.rebuild();
        inst
    }

    /// Instance with the preset matching `layout`.
    pub fn for_layout(layout: Layout, size: CanvasSize) -> Self {
        Self::new(FieldConfig::for_layout(layout), layout, size)
    }

    pub fn with_glyphs(mut self, glyphs: Box<dyn GlyphRaster>) -> Self {
        self.glyphs = glyphs;
        self.rebuild();
        self
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    // ---------------- accessors ----------------

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn state(&self) -> &InstanceState {
        &self.state
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn morph_count(&self) -> usize {
        self.morph_count
    }

    pub fn assignment(&self) -> &[Option<u32>] {
        &self.assignment
    }

    pub fn targets(&self) -> &TargetSet {
        &self.target_set
    }

    pub fn targets_from(&self) -> &[Point] {
        &self.targets_from
    }

    pub fn targets_to(&self) -> &[Point] {
        &self.target_set.targets
    }

    pub fn border_rect(&self) -> Rect {
        self.border_rect
    }

    pub fn sparks(&self) -> &SparkPool {
        &self.sparks
    }

    // ---------------- lifecycle ----------------

    /// Resize the backing store at a capped device pixel ratio and rebuild.
    pub fn on_resize<S: Surface + ?Sized>(&mut self, surface: &mut S, css_width: f32, css_height: f32, dpr: f32) {
        let size = CanvasSize::new(css_width, css_height);
        surface.set_backing_size(size, clamp_device_pixel_ratio(dpr));
        self.resize(size);
    }

    pub fn resize(&mut self, size: CanvasSize) {
        self.size = size;
        self.rebuild();
    }

    /// Regenerates particles, assignment, targets, border field and sparks together.
    fn rebuild(&mut self) {
        let seed = self.config.seed;
        let n = pick_n(&self.config, self.size);
        self.particles = build_idle(n, self.size, seed.wrapping_add(Stream::Idle.offset()));

        let mut order: Vec<usize> = (0..n).collect();
        Mulberry32::for_stream(seed, Stream::Assignment).shuffle(&mut order);
        self.morph_count = ((n as f32 * self.config.morph_fraction).floor() as usize).min(n);
        self.assignment = vec![None; n];
        for (slot, &i) in order[..self.morph_count].iter().enumerate() {
            self.assignment[i] = Some(slot as u32);
        }

        self.target_set = self.build_for(self.state.layout);
        self.targets_from = self.target_set.targets.clone();
        self.state.symbol_t = 1.0;

        let pad = (self.size.min_side() * self.config.border_pad_ratio).max(self.config.border_pad_min);
        self.border_rect = self.size.rect().inset(pad);
        self.border = build_border_meta(
            n,
            self.border_rect,
            seed.wrapping_add(Stream::Border.offset()),
        );

        self.sparks = SparkPool::new(
            self.config.spark_count,
            self.size,
            seed.wrapping_add(Stream::Sparks.offset()),
        );
        self.rng = Mulberry32::new(seed);

        log::debug!(
            "[morph] rebuild {}x{} n={} morph={} layout={}",
            self.size.width,
            self.size.height,
            n,
            self.morph_count,
            self.state.layout
        );
    }

    fn build_for(&self, layout: Layout) -> TargetSet {
        build_targets(
            layout,
            self.morph_count,
            self.size,
            self.config.seed.wrapping_add(Stream::Targets.offset()),
            &self.config.headline,
            &*self.glyphs,
        )
    }

    // ---------------- intent ----------------

    pub fn set_hover(&mut self, on: bool) {
        self.state.want = on;
    }

    pub fn on_hover_intent(&mut self, on: bool) {
        self.set_hover(on);
    }

    /// Tap devices flip the intent on click.
    pub fn toggle_hover(&mut self) {
        self.state.want = !self.state.want;
    }

    /// Switch silhouettes by name. Unknown names keep the current target set.
    pub fn set_symbol(&mut self, name: &str) {
        match name.parse::<Layout>() {
            Ok(layout) => self.set_layout(layout),
            Err(e) => log::warn!("[morph] {e}; keeping {}", self.state.layout),
        }
    }

    /// Crossfade from the current, possibly mid-blend, targets to `layout`.
    pub fn set_layout(&mut self, layout: Layout) {
        if layout == self.state.layout && self.state.symbol_t >= SYMBOL_SETTLED {
            return;
        }
        let current = self.blended_targets();
        let next = self.build_for(layout);

        self.state.layout = layout;
        self.targets_from = if current.len() == next.len() {
            current
        } else {
            next.targets.clone()
        };
        self.target_set = next;
        self.state.symbol_t = 0.0;

        if self.reduced_motion {
            self.state.symbol_t = 1.0;
            self.targets_from = self.target_set.targets.clone();
        }
    }

    /// Target positions as drawn by the last frame, scroll included.
    pub fn blended_targets(&self) -> Vec<Point> {
        let e = ease_in_out(clamp01(self.state.symbol_t));
        let to: Vec<Point> = (0..self.target_set.len())
            .filter_map(|slot| self.target_set.position(slot, self.scroll))
            .collect();
        if e >= 1.0 || self.targets_from.len() != to.len() {
            return to;
        }
        self.targets_from
            .iter()
            .zip(&to)
            .map(|(a, b)| a.lerp(*b, e))
            .collect()
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.state.paused == paused {
            return;
        }
        self.state.paused = paused;
        if !paused {
            // re-anchor the clock on the next frame
            self.start_ms = None;
        }
    }

    pub fn on_visibility_change(&mut self, visible: bool) {
        self.set_paused(!visible);
    }

    // ---------------- per frame ----------------

    /// One smoothing step of `morph` and `symbol_t` toward their goals.
    pub fn step_smoothing(&mut self) {
        let goal = if self.state.want { 1.0 } else { 0.0 };
        let rate = if self.state.want {
            self.config.enter_rate
        } else {
            self.config.leave_rate
        };
        self.state.morph = smooth_toward(self.state.morph, goal, rate);
        self.state.symbol_t = smooth_toward(self.state.symbol_t, 1.0, self.config.symbol_rate);
    }

    /// Advances and paints one frame. Returns false when paused.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, now_ms: f64, color: Rgb) -> bool {
        if self.state.paused {
            return false;
        }
        if self.reduced_motion {
            self.render_static(surface, now_ms, color);
            return false;
        }
        self.start_ms.get_or_insert(now_ms);
        self.step_smoothing();
        self.render(surface, now_ms, color, false);
        true
    }

    /// Single still frame reflecting the current intent.
    pub fn render_static<S: Surface + ?Sized>(&mut self, surface: &mut S, now_ms: f64, color: Rgb) {
        self.state.morph = if self.state.want { 1.0 } else { 0.0 };
        self.state.symbol_t = 1.0;
        self.render(surface, now_ms, color, true);
    }

    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, now_ms: f64, color: Rgb, force_still: bool) {
        surface.clear(self.size);
        surface.set_fill(color);

        let t = match self.start_ms {
            Some(start) => ((now_ms - start) / 1000.0) as f32,
            None => 0.0,
        };
        let morph = self.state.morph;
        let border_e = ease_in_out(clamp01(morph * BORDER_EASE_GAIN));
        let lines_e = ease_in_out(morph.powf(LINES_EASE_EXPONENT));
        let sym_e = ease_in_out(clamp01(self.state.symbol_t));
        let amp = if force_still { 0.0 } else { self.config.idle_amplitude };

        let scroll = match self.target_set.content_rect {
            Some(cr) if !force_still && cr.h > 0.0 => {
                let px_per_sec = cr.h / SCROLL_LOOP_SEC;
                -((t * px_per_sec) % cr.h)
            }
            _ => 0.0,
        };
        self.scroll = scroll;

        for (i, p) in self.particles.iter().enumerate() {
            let idle = p.idle_position(t, amp);
            let slot = self.assignment[i].map(|s| s as usize);

            let pos = match slot.and_then(|s| Some((s, self.target_set.position(s, scroll)?))) {
                Some((s, to)) => {
                    let from = self.targets_from.get(s).copied().unwrap_or(to);
                    idle.lerp(from.lerp(to, sym_e), lines_e)
                }
                None if slot.is_some() => idle,
                None => idle.lerp(border_point(self.border_rect, &self.border[i], t), border_e),
            };

            let ripple = if force_still {
                0.5
            } else {
                0.5 + 0.5 * (t * RIPPLE_SPEED + p.phase).sin()
            };
            let base_alpha = p.alpha0 * (RIPPLE_ALPHA_BASE + RIPPLE_ALPHA_SPAN * ripple);
            let alpha_mul = if slot.is_some() {
                MORPH_ALPHA_BASE + MORPH_ALPHA_GAIN * lines_e
            } else {
                1.0 - BORDER_ALPHA_DROP * border_e
            };
            let size_base = if force_still {
                1.0
            } else {
                SIZE_RIPPLE_BASE + self.config.size_ripple * ripple
            };
            let size_mul = if slot.is_some() {
                SIZE_MORPH_BASE + self.config.size_morph_gain * lines_e
            } else {
                1.0
            };
            surface.fill_circle(pos, size_base * size_mul, clamp01(base_alpha * alpha_mul));
        }

        if !force_still && self.state.want {
            self.sparks.try_spawn(
                now_ms,
                morph,
                self.size,
                self.target_set.len(),
                &self.config,
                &mut self.rng,
            );
            self.sparks.update(&self.target_set.targets, lines_e, surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::Symbol;
    use crate::surface::RecordingSurface;

    fn gear_instance() -> MorphInstance {
        MorphInstance::for_layout(Layout::Symbol(Symbol::Gear), CanvasSize::new(640.0, 480.0))
    }

    #[test]
    fn assignment_covers_exactly_the_morph_budget() {
        let inst = gear_instance();
        let assigned: Vec<u32> = inst.assignment().iter().flatten().copied().collect();
        assert_eq!(assigned.len(), inst.morph_count());
        let mut sorted = assigned.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..inst.morph_count() as u32).collect::<Vec<_>>());
        assert_eq!(inst.targets().len(), inst.morph_count());
    }

    #[test]
    fn paused_frame_does_not_advance() {
        let mut inst = gear_instance();
        let mut surface = RecordingSurface::default();
        inst.set_hover(true);
        inst.set_paused(true);
        assert!(!inst.frame(&mut surface, 16.0, Rgb::default()));
        assert_eq!(inst.state().morph, 0.0);
        assert_eq!(surface.clears, 0);
        inst.on_visibility_change(true);
        assert!(inst.frame(&mut surface, 32.0, Rgb::default()));
        assert!(inst.state().morph > 0.0);
    }

    #[test]
    fn resume_restarts_the_idle_clock() {
        let mut inst = gear_instance();
        let mut surface = RecordingSurface::default();
        assert!(inst.frame(&mut surface, 1_000.0, Rgb::default()));
        inst.set_paused(true);
        inst.set_paused(false);

        let mut after = RecordingSurface::default();
        assert!(inst.frame(&mut after, 60_000.0, Rgb::default()));
        let amp = inst.config().idle_amplitude;
        assert_eq!(after.circles.len(), inst.particle_count());
        for (c, p) in after.circles.iter().zip(inst.particles()) {
            assert_eq!(c.center, p.idle_position(0.0, amp));
        }
        let drifted = inst
            .particles()
            .iter()
            .zip(&after.circles)
            .any(|(p, c)| c.center != p.idle_position(59.0, amp));
        assert!(drifted);
    }

    #[test]
    fn blend_snapshot_keeps_the_scroll_offset() {
        let mut inst = MorphInstance::for_layout(Layout::Showcase, CanvasSize::new(800.0, 600.0));
        let mut surface = RecordingSurface::default();
        inst.frame(&mut surface, 0.0, Rgb::default());
        inst.frame(&mut surface, 5_000.0, Rgb::default());
        assert!(inst.scroll < 0.0);

        let snapshot = inst.blended_targets();
        assert_eq!(snapshot.len(), inst.targets().len());
        for (slot, p) in snapshot.iter().enumerate() {
            assert_eq!(Some(*p), inst.target_set.position(slot, inst.scroll));
        }
        assert_ne!(&snapshot[..], inst.targets_to());

        inst.set_symbol("gear");
        assert_eq!(inst.targets_from(), &snapshot[..]);
    }

    #[test]
    fn same_layout_when_settled_is_ignored() {
        let mut inst = gear_instance();
        inst.set_symbol("gear");
        assert_eq!(inst.state().symbol_t, 1.0);
    }

    #[test]
    fn reduced_motion_snaps_symbol_changes() {
        let mut inst = gear_instance().with_reduced_motion(true);
        inst.set_symbol("chip");
        assert_eq!(inst.state().symbol_t, 1.0);
        assert_eq!(inst.targets_from(), inst.targets_to());
    }

    #[test]
    fn on_resize_caps_pixel_ratio() {
        let mut inst = gear_instance();
        let mut surface = RecordingSurface::default();
        inst.on_resize(&mut surface, 400.0, 300.0, 3.0);
        assert_eq!(surface.backing, Some((540, 405)));
        inst.on_resize(&mut surface, 0.0, 0.0, 0.5);
        assert_eq!(surface.backing, Some((1, 1)));
        assert_eq!(inst.size(), CanvasSize::new(1.0, 1.0));
    }
}
