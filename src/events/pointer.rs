use crate::dom;
use crate::frame::FrameLoop;
use crate::options::HostIntent;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Routes hover (or tap, on devices without hover) on `host` into the intent.
///
/// `apply` receives the combined `want` after every change.
pub fn wire_hover_intent(
    host: &web::Element,
    intent: Rc<RefCell<HostIntent>>,
    prefers_hover: bool,
    apply: impl Fn(bool) + 'static,
) -> Vec<dom::Listener> {
    let apply = Rc::new(apply);
    if prefers_hover {
        let (i, a) = (intent.clone(), apply.clone());
        let enter = dom::add_listener(host, "mouseenter", move |_| {
            i.borrow_mut().enter();
            let want = i.borrow().want();
            a(want);
        });
        let leave = dom::add_listener(host, "mouseleave", move |_| {
            intent.borrow_mut().leave();
            let want = intent.borrow().want();
            apply(want);
        });
        vec![enter, leave]
    } else {
        let click = dom::add_listener(host, "click", move |_| {
            intent.borrow_mut().tap();
            let want = intent.borrow().want();
            apply(want);
        });
        vec![click]
    }
}

/// Pointer position relative to `canvas`, in CSS pixels.
fn canvas_point(ev: &web::Event, canvas: &web::Element) -> Option<Vec2> {
    let ev = ev.dyn_ref::<web::MouseEvent>()?;
    let rect = canvas.get_bounding_client_rect();
    Some(Vec2::new(
        (ev.client_x() as f64 - rect.left()) as f32,
        (ev.client_y() as f64 - rect.top()) as f32,
    ))
}

/// Feeds pointer position on `host` to a ring field for repulsion.
pub fn wire_ring_pointer(host: &web::Element, frame_loop: &FrameLoop) -> Vec<dom::Listener> {
    let canvas: web::Element = frame_loop.ctx.borrow().canvas.clone().into();
    let mut listeners = Vec::new();
    for event in ["pointermove", "pointerdown"] {
        let (fl, canvas) = (frame_loop.clone(), canvas.clone());
        listeners.push(dom::add_listener(host, event, move |ev| {
            let p = canvas_point(&ev, &canvas);
            fl.ctx.borrow_mut().set_pointer(p);
        }));
    }
    for event in ["pointerleave", "pointercancel", "pointerup"] {
        let fl = frame_loop.clone();
        listeners.push(dom::add_listener(host, event, move |_| {
            fl.ctx.borrow_mut().set_pointer(None);
        }));
    }
    listeners
}
