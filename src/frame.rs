use crate::dom;
use crate::surface::CanvasSurface;
use morph_core::{CanvasSize, MorphInstance, Point, Rgb, RingField, Scheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What a mounted canvas animates.
pub enum Scene {
    Morph(MorphInstance),
    Rings(RingField),
}

impl Scene {
    fn frame(&mut self, surface: &mut CanvasSurface, now_ms: f64, color: Rgb) -> bool {
        match self {
            Scene::Morph(m) => m.frame(surface, now_ms, color),
            Scene::Rings(r) => r.frame(surface, now_ms, color),
        }
    }

    fn set_paused(&mut self, paused: bool) {
        match self {
            Scene::Morph(m) => m.set_paused(paused),
            Scene::Rings(r) => r.set_paused(paused),
        }
    }

    fn on_resize(&mut self, surface: &mut CanvasSurface, w: f32, h: f32, dpr: f32) {
        match self {
            Scene::Morph(m) => m.on_resize(surface, w, h, dpr),
            Scene::Rings(r) => r.on_resize(surface, w, h, dpr),
        }
    }

    fn render_static(&mut self, surface: &mut CanvasSurface, now_ms: f64, color: Rgb) {
        match self {
            Scene::Morph(m) => m.render_static(surface, now_ms, color),
            Scene::Rings(r) => r.render(surface, now_ms, color, true),
        }
    }
}

/// DOM hooks owned by one mount, released when the canvas is detached.
#[derive(Default)]
pub struct Bindings {
    pub resize: Option<web::ResizeObserver>,
    pub views: Vec<web::IntersectionObserver>,
    pub symbol: Option<web::MutationObserver>,
    pub listeners: Vec<dom::Listener>,
}

impl Bindings {
    fn release(&mut self) {
        if let Some(ro) = self.resize.take() {
            ro.disconnect();
        }
        for io in self.views.drain(..) {
            io.disconnect();
        }
        if let Some(mo) = self.symbol.take() {
            mo.disconnect();
        }
        for l in self.listeners.drain(..) {
            l.remove();
        }
    }
}

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    /// Element measured on resize.
    pub measure: web::Element,
    /// Element whose computed style carries the color token.
    pub color_scope: web::Element,
    pub surface: CanvasSurface,
    pub scene: Scene,
    pub scheduler: Scheduler,
    pub bindings: Bindings,
}

impl FrameContext {
    /// One animation frame. Returns true while the loop should keep going.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if self.detach_if_disconnected() {
            return false;
        }
        if !self.scheduler.begin_frame() {
            self.scene.set_paused(true);
            return false;
        }
        self.scene.set_paused(false);
        let color = dom::read_color(&self.color_scope);
        self.scene.frame(&mut self.surface, now_ms, color);
        true
    }

    /// Re-measures the host and rebuilds the scene at the current pixel ratio.
    pub fn resize(&mut self) {
        let (w, h) = dom::css_size(&self.measure);
        if let Err(e) = CanvasSize::checked(w, h) {
            log::debug!("[frame] {e}: {w}x{h}, clamping to 1px");
        }
        self.scene
            .on_resize(&mut self.surface, w, h, dom::device_pixel_ratio());
        self.redraw_still();
    }

    /// Reduced-motion hosts never run the loop; repaint one still frame instead.
    pub fn redraw_still(&mut self) {
        if self.scheduler.reduced_motion() {
            let color = dom::read_color(&self.color_scope);
            self.scene
                .render_static(&mut self.surface, instant::now(), color);
        }
    }

    pub fn morph_mut(&mut self) -> Option<&mut MorphInstance> {
        match &mut self.scene {
            Scene::Morph(m) => Some(m),
            Scene::Rings(_) => None,
        }
    }

    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        if let Scene::Rings(r) = &mut self.scene {
            r.set_pointer(pointer);
        }
    }

    /// Tears the mount down once its canvas has left the document.
    /// Returns true if the mount is (now) detached.
    pub fn detach_if_disconnected(&mut self) -> bool {
        if self.scheduler.is_halted() {
            return true;
        }
        if self.canvas.is_connected() {
            return false;
        }
        self.scheduler.halt();
        self.scene.set_paused(true);
        self.bindings.release();
        log::info!("[frame] canvas detached; loop halted");
        true
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// requestAnimationFrame loop gated by the context's [`Scheduler`].
#[derive(Clone)]
pub struct FrameLoop {
    pub ctx: Rc<RefCell<FrameContext>>,
    tick: Tick,
}

impl FrameLoop {
    pub fn new(ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let ctx_tick = ctx.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            let keep = ctx_tick.borrow_mut().frame(now);
            if keep {
                request(&tick_clone);
            }
        }) as Box<dyn FnMut(f64)>));
        Self { ctx, tick }
    }

    /// Schedules a frame unless the loop is already running or gated off.
    pub fn wake(&self) {
        let go = self.ctx.borrow_mut().scheduler.request_frame();
        if go {
            request(&self.tick);
        }
    }

    pub fn detach_if_disconnected(&self) -> bool {
        self.ctx.borrow_mut().detach_if_disconnected()
    }

    pub fn set_intersecting(&self, intersecting: bool) {
        if self.detach_if_disconnected() {
            return;
        }
        let go = self.ctx.borrow_mut().scheduler.set_intersecting(intersecting);
        if go {
            request(&self.tick);
        }
    }

    pub fn set_document_active(&self, active: bool) {
        if self.detach_if_disconnected() {
            return;
        }
        let go = self.ctx.borrow_mut().scheduler.set_document_active(active);
        if go {
            request(&self.tick);
        }
    }
}

fn request(tick: &Tick) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
