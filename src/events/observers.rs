use crate::constants::{BAND_ROOT_MARGIN, BAND_THRESHOLD, DATA_SYMBOL, VIEW_ROOT_MARGIN, VIEW_THRESHOLD};
use crate::dom;
use crate::frame::FrameLoop;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn to_anyhow(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Latest `isIntersecting` in a batch of observer entries.
fn last_intersecting(entries: &js_sys::Array) -> Option<bool> {
    entries
        .iter()
        .last()
        .and_then(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
        .map(|e| e.is_intersecting())
}

fn intersection_observer(
    target: &web::Element,
    root_margin: &str,
    threshold: f64,
    mut on_change: impl FnMut(bool) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let closure = Closure::wrap(Box::new(move |entries: js_sys::Array, _obs: JsValue| {
        if let Some(hit) = last_intersecting(&entries) {
            on_change(hit);
        }
    }) as Box<dyn FnMut(js_sys::Array, JsValue)>);
    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    init.set_threshold(&JsValue::from_f64(threshold));
    let callback: js_sys::Function = closure.into_js_value().unchecked_into();
    let io = web::IntersectionObserver::new_with_options(&callback, &init).map_err(to_anyhow)?;
    io.observe(target);
    Ok(io)
}

/// Rebuilds the scene whenever the measured element changes size.
pub fn observe_resize(target: &web::Element, frame_loop: &FrameLoop) -> anyhow::Result<web::ResizeObserver> {
    let fl = frame_loop.clone();
    let closure = Closure::wrap(Box::new(move |_entries: js_sys::Array, _obs: JsValue| {
        if fl.detach_if_disconnected() {
            return;
        }
        fl.ctx.borrow_mut().resize();
        fl.wake();
    }) as Box<dyn FnMut(js_sys::Array, JsValue)>);
    let callback: js_sys::Function = closure.into_js_value().unchecked_into();
    let ro = web::ResizeObserver::new(&callback).map_err(to_anyhow)?;
    ro.observe(target);
    Ok(ro)
}

/// Runs the loop only while the canvas is near the viewport.
pub fn observe_viewport(canvas: &web::Element, frame_loop: &FrameLoop) -> anyhow::Result<web::IntersectionObserver> {
    let fl = frame_loop.clone();
    intersection_observer(canvas, VIEW_ROOT_MARGIN, VIEW_THRESHOLD, move |hit| {
        fl.set_intersecting(hit);
    })
}

/// Reports whether the canvas crosses the central band of the viewport.
pub fn observe_band(
    canvas: &web::Element,
    on_change: impl FnMut(bool) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    intersection_observer(canvas, BAND_ROOT_MARGIN, BAND_THRESHOLD, on_change)
}

/// Switches the silhouette when page glue rewrites `data-morph-symbol`.
pub fn observe_symbol_attribute(
    canvas: &web::HtmlElement,
    mut on_symbol: impl FnMut(String) + 'static,
) -> anyhow::Result<web::MutationObserver> {
    let el = canvas.clone();
    let mut last = dom::dataset_get(canvas, DATA_SYMBOL);
    let closure = Closure::wrap(Box::new(move |_records: js_sys::Array, _obs: JsValue| {
        let current = dom::dataset_get(&el, DATA_SYMBOL);
        if current == last {
            return;
        }
        last = current.clone();
        if let Some(name) = current {
            on_symbol(name);
        }
    }) as Box<dyn FnMut(js_sys::Array, JsValue)>);
    let callback: js_sys::Function = closure.into_js_value().unchecked_into();
    let mo = web::MutationObserver::new(&callback).map_err(to_anyhow)?;
    let init = web::MutationObserverInit::new();
    init.set_attributes(true);
    mo.observe_with_options(canvas, &init).map_err(to_anyhow)?;
    Ok(mo)
}

/// Pauses every loop in the page while the tab is hidden.
pub fn wire_visibility_change(document: &web::Document, frame_loop: &FrameLoop) -> dom::Listener {
    let fl = frame_loop.clone();
    let doc = document.clone();
    dom::add_listener(document, "visibilitychange", move |_| {
        fl.set_document_active(doc.visibility_state() == web::VisibilityState::Visible);
    })
}
