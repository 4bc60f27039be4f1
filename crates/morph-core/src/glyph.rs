//! Text-to-points sampling.
//!
//! Text is rasterized into an alpha mask by a [`GlyphRaster`] implementation
//! (the browser front-end uses an offscreen canvas; [`BlockFont`] is a
//! built-in 5x7 bitmap font used headless and as a fallback), then sampled
//! sparsely on a grid with a small positional jitter.

use crate::constants::*;
use crate::geom::{Point, Rect};
use crate::rng::Mulberry32;
use glam::Vec2;

/// Single-channel coverage bitmap, row-major.
#[derive(Clone, Debug, Default)]
pub struct AlphaMask {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl AlphaMask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[(y * self.width + x) as usize]
    }

    fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let (w, h) = (self.width as i64, self.height as i64);
        for y in y0.max(0)..y1.min(h) {
            for x in x0.max(0)..x1.min(w) {
                self.data[(y * w + x) as usize] = 255;
            }
        }
    }
}

pub trait GlyphRaster {
    /// Advance width of `text` at `font_px`.
    fn measure(&self, text: &str, font_px: f32) -> f32;

    /// Render `text` at `font_px`, centered in a `width` x `height` mask.
    fn rasterize(&self, text: &str, font_px: f32, width: u32, height: u32) -> AlphaMask;
}

/// Emits one jittered point per grid cell whose alpha exceeds the cut.
///
/// The font size starts at 66% of the box height and shrinks in 2px steps
/// until the measured width fits 92% of the box width.
pub fn sample_text(text: &str, b: Rect, raster: &dyn GlyphRaster, rng: &mut Mulberry32) -> Vec<Point> {
    let width = b.w.floor().max(1.0) as u32;
    let height = b.h.floor().max(1.0) as u32;

    let mut font_px = (b.h * GLYPH_START_FONT_RATIO).floor();
    while font_px > GLYPH_MIN_FONT_PX {
        if raster.measure(text, font_px) <= width as f32 * GLYPH_FILL_RATIO {
            break;
        }
        font_px -= 2.0;
    }

    let mask = raster.rasterize(text, font_px, width, height);
    let grid = (width.min(height) / 44).clamp(3, 6);

    let mut out = Vec::new();
    for py in (0..height).step_by(grid as usize) {
        for px in (0..width).step_by(grid as usize) {
            if mask.alpha(px, py) > GLYPH_ALPHA_CUT {
                out.push(Vec2::new(
                    b.x + px as f32 + rng.signed() * GLYPH_JITTER,
                    b.y + py as f32 + rng.signed() * GLYPH_JITTER,
                ));
            }
        }
    }
    out
}

/// 5x7 block font covering A-Z, 0-9 and a little punctuation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockFont;

const COLS: usize = 5;
const ROWS: usize = 7;
// Cell pitch in font units: 5 columns + 1 spacing across, 7 rows + 1 leading down.
const ADVANCE: f32 = 6.0;
const EM: f32 = 8.0;

impl BlockFont {
    fn glyph(c: char) -> [u8; ROWS] {
        match c.to_ascii_uppercase() {
            'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
            'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
            'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
            'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
            'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
            'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
            'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
            'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
            'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
            'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
            'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
            'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
            'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
            'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
            'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
            'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
            'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
            'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
            'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
            'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
            'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
            'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
            'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
            'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
            'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
            'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
            '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
            '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
            '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
            '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
            '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
            '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
            '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
            '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
            '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
            '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
            '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
            '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
            '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
            '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
            _ => [0; ROWS],
        }
    }
}

impl GlyphRaster for BlockFont {
    fn measure(&self, text: &str, font_px: f32) -> f32 {
        let n = text.chars().count() as f32;
        if n == 0.0 {
            return 0.0;
        }
        let cell = font_px / EM;
        (n * ADVANCE - 1.0) * cell
    }

    fn rasterize(&self, text: &str, font_px: f32, width: u32, height: u32) -> AlphaMask {
        let mut mask = AlphaMask::new(width, height);
        let cell = font_px / EM;
        if cell <= 0.0 {
            return mask;
        }
        let origin_x = (width as f32 - self.measure(text, font_px)) / 2.0;
        let origin_y = (height as f32 - ROWS as f32 * cell) / 2.0;

        for (i, c) in text.chars().enumerate() {
            let gx = origin_x + i as f32 * ADVANCE * cell;
            for (row, bits) in Self::glyph(c).iter().enumerate() {
                for col in 0..COLS {
                    if bits & (1 << (COLS - 1 - col)) == 0 {
                        continue;
                    }
                    let x0 = gx + col as f32 * cell;
                    let y0 = origin_y + row as f32 * cell;
                    mask.fill_rect(
                        x0.floor() as i64,
                        y0.floor() as i64,
                        (x0 + cell).ceil() as i64,
                        (y0 + cell).ceil() as i64,
                    );
                }
            }
        }
        mask
    }
}
