#![cfg(target_arch = "wasm32")]
//! Browser front-end: mounts particle canvases and drives them from the DOM.
//!
//! Canvases opt in with `data-morph-layout` / `data-morph-symbol` or
//! `data-ring-field` and are mounted on start. Pages that build canvases
//! later call [`mount`] or [`mount_rings`] and keep the returned handle.

use crate::constants::*;
use crate::frame::{Bindings, FrameContext, FrameLoop, Scene};
use crate::options::{ring_settings, HostIntent, MountOptions, Sizing};
use crate::surface::CanvasSurface;
use morph_core::{CanvasSize, MorphInstance, RingField, Scheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod glyphs;
mod options;
mod style;
mod surface;

/// Marks a canvas that already has a running instance.
const MOUNTED_ATTR: &str = "data-morph-mounted";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("morph-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Headline layouts rasterize the web font; measure only once it has loaded.
    match document.fonts().ready() {
        Ok(ready) => {
            if let Err(e) = JsFuture::from(ready).await {
                log::warn!("[init] fonts.ready rejected: {:?}", e);
            }
        }
        Err(e) => log::warn!("[init] fonts.ready unavailable: {:?}", e),
    }

    let mut morphs = 0;
    for el in dom::query_all(&document, MORPH_CANVAS_SELECTOR) {
        let Some(canvas) = claim_canvas(el) else {
            continue;
        };
        let opts = {
            let get = |key: &str| dom::dataset_get(&canvas, key);
            MountOptions::resolve(
                get(DATA_LAYOUT).as_deref(),
                get(DATA_SYMBOL).as_deref(),
                get(DATA_SEED).as_deref(),
                get(DATA_HEADLINE).as_deref(),
                get(DATA_BAND).as_deref(),
            )
        };
        match mount_morph(&document, canvas, opts) {
            Ok(_) => morphs += 1,
            Err(e) => log::error!("[mount] morph canvas: {e:?}"),
        }
    }

    let mut rings = 0;
    for el in dom::query_all(&document, RING_CANVAS_SELECTOR) {
        let Some(canvas) = claim_canvas(el) else {
            continue;
        };
        let preset = dom::dataset_get(&canvas, DATA_RING);
        match mount_ring_field(&document, canvas, preset.as_deref()) {
            Ok(_) => rings += 1,
            Err(e) => log::error!("[mount] ring canvas: {e:?}"),
        }
    }

    log::info!("[init] mounted {morphs} morph canvas(es), {rings} ring field(s)");
    Ok(())
}

/// Returns the canvas if it is not mounted yet, and marks it mounted.
fn claim_canvas(el: web::Element) -> Option<web::HtmlCanvasElement> {
    if el.has_attribute(MOUNTED_ATTR) {
        return None;
    }
    let canvas = el.dyn_into::<web::HtmlCanvasElement>().ok()?;
    _ = canvas.set_attribute(MOUNTED_ATTR, "");
    Some(canvas)
}

struct MountState {
    frame_loop: FrameLoop,
    intent: Rc<RefCell<HostIntent>>,
}

impl MountState {
    fn with_morph<R>(&self, f: impl FnOnce(&mut MorphInstance) -> R) -> Option<R> {
        let mut ctx = self.frame_loop.ctx.borrow_mut();
        let out = ctx.morph_mut().map(f);
        ctx.redraw_still();
        out
    }

    fn apply_intent(&self) {
        let want = self.intent.borrow().want();
        self.with_morph(|m| m.on_hover_intent(want));
        self.frame_loop.wake();
    }
}

/// Page-side control of one mounted morph canvas.
#[wasm_bindgen]
pub struct MorphHandle {
    state: Rc<MountState>,
}

#[wasm_bindgen]
impl MorphHandle {
    /// Forces the morph on or off, overriding hover and center-band intent.
    pub fn set_hover(&self, on: bool) {
        self.state.intent.borrow_mut().force(Some(on));
        self.state.apply_intent();
    }

    /// Hands intent back to hover and center-band observation.
    pub fn release_hover(&self) {
        self.state.intent.borrow_mut().force(None);
        self.state.apply_intent();
    }

    pub fn toggle_hover(&self) {
        self.state.intent.borrow_mut().tap();
        self.state.apply_intent();
    }

    /// Crossfades to a layout or symbol by name; unknown names are ignored.
    pub fn set_symbol(&self, name: &str) {
        self.state.with_morph(|m| m.set_symbol(name));
    }

    pub fn set_paused(&self, paused: bool) {
        self.state.frame_loop.set_intersecting(!paused);
    }

    pub fn want(&self) -> bool {
        self.state.with_morph(|m| m.state().want).unwrap_or(false)
    }

    pub fn layout(&self) -> String {
        self.state
            .with_morph(|m| m.state().layout.to_string())
            .unwrap_or_default()
    }
}

/// Mounts a morph canvas. Returns `undefined` when the canvas cannot draw.
#[wasm_bindgen]
pub fn mount(canvas: web::HtmlCanvasElement, layout: &str) -> Option<MorphHandle> {
    let document = dom::window_document()?;
    if canvas.has_attribute(MOUNTED_ATTR) {
        log::warn!("[mount] canvas already mounted");
        return None;
    }
    _ = canvas.set_attribute(MOUNTED_ATTR, "");
    let opts = MountOptions::resolve(Some(layout), None, None, None, None);
    mount_morph(&document, canvas, opts)
        .map_err(|e| log::error!("[mount] {e:?}"))
        .ok()
}

fn mount_morph(
    document: &web::Document,
    canvas: web::HtmlCanvasElement,
    opts: MountOptions,
) -> anyhow::Result<MorphHandle> {
    let reduced = dom::media_matches(REDUCED_MOTION_QUERY);
    let el: web::Element = canvas.clone().into();
    let host = dom::closest_or_self(&el, HOST_SELECTOR);
    let surface = CanvasSurface::new(&canvas, opts.sizing)?;

    let (w, h) = dom::css_size(&el);
    let mut instance =
        MorphInstance::new(opts.config, opts.layout, CanvasSize::new(w, h)).with_reduced_motion(reduced);
    match glyphs::CanvasGlyphs::new(document) {
        Ok(g) => instance = instance.with_glyphs(Box::new(g)),
        Err(e) => log::warn!("[mount] canvas glyphs unavailable ({e}); using block font"),
    }
    log::info!(
        "[mount] {} n={} reduced_motion={}",
        opts.layout,
        instance.particle_count(),
        reduced
    );

    let ctx = Rc::new(RefCell::new(FrameContext {
        canvas: canvas.clone(),
        measure: el.clone(),
        color_scope: host.clone(),
        surface,
        scene: Scene::Morph(instance),
        scheduler: Scheduler::new(reduced),
        bindings: Bindings::default(),
    }));
    let frame_loop = FrameLoop::new(ctx.clone());
    ctx.borrow_mut().resize();

    let state = Rc::new(MountState {
        frame_loop: frame_loop.clone(),
        intent: Rc::new(RefCell::new(HostIntent::default())),
    });

    let mut bindings = Bindings {
        resize: events::observe_resize(&el, &frame_loop)
            .map_err(|e| log::error!("[mount] ResizeObserver: {e:?}"))
            .ok(),
        ..Bindings::default()
    };
    match events::observe_viewport(&el, &frame_loop) {
        Ok(io) => bindings.views.push(io),
        Err(e) => log::error!("[mount] IntersectionObserver: {e:?}"),
    }
    bindings
        .listeners
        .push(events::wire_visibility_change(document, &frame_loop));

    let hover_state = state.clone();
    bindings.listeners.extend(events::wire_hover_intent(
        &host,
        state.intent.clone(),
        dom::media_matches(HOVER_QUERY),
        move |_| hover_state.apply_intent(),
    ));

    if opts.center_band {
        let band_state = state.clone();
        match events::observe_band(&el, move |hit| {
            band_state.intent.borrow_mut().set_in_band(hit);
            band_state.apply_intent();
        }) {
            Ok(io) => bindings.views.push(io),
            Err(e) => log::error!("[mount] center-band observer: {e:?}"),
        }
    }

    if dom::dataset_get(&canvas, DATA_SYMBOL).is_some() {
        let symbol_state = state.clone();
        match events::observe_symbol_attribute(&canvas, move |name| {
            symbol_state.with_morph(|m| m.set_symbol(&name));
        }) {
            Ok(mo) => bindings.symbol = Some(mo),
            Err(e) => log::error!("[mount] MutationObserver: {e:?}"),
        }
    }

    ctx.borrow_mut().bindings = bindings;
    frame_loop.wake();
    Ok(MorphHandle { state })
}

/// Page-side control of one mounted ring field.
#[wasm_bindgen]
pub struct RingHandle {
    frame_loop: FrameLoop,
}

#[wasm_bindgen]
impl RingHandle {
    pub fn set_paused(&self, paused: bool) {
        self.frame_loop.set_intersecting(!paused);
    }
}

/// Mounts a ring field (`hero`, `backdrop` or `maintenance`).
#[wasm_bindgen]
pub fn mount_rings(canvas: web::HtmlCanvasElement, preset: &str) -> Option<RingHandle> {
    let document = dom::window_document()?;
    if canvas.has_attribute(MOUNTED_ATTR) {
        log::warn!("[mount] canvas already mounted");
        return None;
    }
    _ = canvas.set_attribute(MOUNTED_ATTR, "");
    mount_ring_field(&document, canvas, Some(preset))
        .map_err(|e| log::error!("[mount] {e:?}"))
        .ok()
}

fn mount_ring_field(
    document: &web::Document,
    canvas: web::HtmlCanvasElement,
    preset: Option<&str>,
) -> anyhow::Result<RingHandle> {
    let reduced = dom::media_matches(REDUCED_MOTION_QUERY);
    let el: web::Element = canvas.clone().into();
    let host = dom::closest_or_self(&el, RING_HOST_SELECTOR);
    let surface = CanvasSurface::new(&canvas, Sizing::Host)?;

    let settings = ring_settings(preset);
    let repels = settings.repel.is_some();
    let (w, h) = dom::css_size(&host);
    let field = RingField::new(settings, CanvasSize::new(w, h)).with_reduced_motion(reduced);

    let ctx = Rc::new(RefCell::new(FrameContext {
        canvas: canvas.clone(),
        measure: host.clone(),
        color_scope: host.clone(),
        surface,
        scene: Scene::Rings(field),
        scheduler: Scheduler::new(reduced),
        bindings: Bindings::default(),
    }));
    let frame_loop = FrameLoop::new(ctx.clone());
    ctx.borrow_mut().resize();

    let mut bindings = Bindings {
        resize: events::observe_resize(&host, &frame_loop)
            .map_err(|e| log::error!("[mount] ResizeObserver: {e:?}"))
            .ok(),
        ..Bindings::default()
    };
    match events::observe_viewport(&el, &frame_loop) {
        Ok(io) => bindings.views.push(io),
        Err(e) => log::error!("[mount] IntersectionObserver: {e:?}"),
    }
    bindings
        .listeners
        .push(events::wire_visibility_change(document, &frame_loop));
    if repels && !reduced {
        bindings
            .listeners
            .extend(events::wire_ring_pointer(&host, &frame_loop));
    }

    ctx.borrow_mut().bindings = bindings;
    frame_loop.wake();
    Ok(RingHandle { frame_loop })
}
