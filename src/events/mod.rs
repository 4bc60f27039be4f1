mod observers;
mod pointer;

pub use observers::{observe_band, observe_resize, observe_symbol_attribute, observe_viewport, wire_visibility_change};
pub use pointer::{wire_hover_intent, wire_ring_pointer};
