use crate::constants::COLOR_TOKEN;
use crate::style::parse_color_token;
use morph_core::Rgb;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn media_matches(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn device_pixel_ratio() -> f32 {
    web::window().map(|w| w.device_pixel_ratio() as f32).unwrap_or(1.0)
}

/// CSS box size of an element.
pub fn css_size(el: &web::Element) -> (f32, f32) {
    let rect = el.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}

/// Nearest ancestor (or self) matching `selector`, else the element itself.
pub fn closest_or_self(el: &web::Element, selector: &str) -> web::Element {
    el.closest(selector).ok().flatten().unwrap_or_else(|| el.clone())
}

/// Particle color from the computed color token on `scope`.
pub fn read_color(scope: &web::Element) -> Rgb {
    let raw = web::window()
        .and_then(|w| w.get_computed_style(scope).ok().flatten())
        .and_then(|s| s.get_property_value(COLOR_TOKEN).ok())
        .unwrap_or_default();
    parse_color_token(&raw)
}

pub fn dataset_get(el: &web::HtmlElement, key: &str) -> Option<String> {
    el.dataset().get(key)
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::error!("[dom] bad selector `{selector}`");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Attaches a passive listener for the lifetime of the page.
/// A registered DOM listener. The callback is owned by the JS side and is
/// collected once [`Listener::remove`] drops the last reference to it.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: js_sys::Function,
}

impl Listener {
    pub fn remove(&self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, &self.callback)
        {
            log::warn!("[dom] removeEventListener({}) failed: {e:?}", self.event);
        }
    }
}

pub fn add_listener(
    target: &web::EventTarget,
    event: &'static str,
    mut handler: impl FnMut(web::Event) + 'static,
) -> Listener {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>);
    let callback: js_sys::Function = closure.into_js_value().unchecked_into();
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) =
        target.add_event_listener_with_callback_and_add_event_listener_options(event, &callback, &opts)
    {
        log::error!("[dom] addEventListener({event}) failed: {e:?}");
    }
    Listener {
        target: target.clone(),
        event,
        callback,
    }
}
