use morph_core::Rgb;

/// Parses the computed value of the color token (`"r,g,b"` or `"r g b"`).
///
/// An unset token yields the default ink; a malformed one is logged and
/// also falls back, so a theming mistake never blanks the canvas.
pub fn parse_color_token(raw: &str) -> Rgb {
    let raw = raw.trim();
    if raw.is_empty() {
        return Rgb::default();
    }
    match raw.parse::<Rgb>() {
        Ok(rgb) => rgb,
        Err(e) => {
            log::warn!("[style] {e}; using default");
            Rgb::default()
        }
    }
}
