use crate::constants::{GLYPH_FONT_FAMILY, GLYPH_FONT_WEIGHT};
use morph_core::{AlphaMask, BlockFont, GlyphRaster};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rasterizes headline text on a detached canvas with the page's web font.
///
/// Any canvas failure falls back to the built-in block font so the layout
/// still gets a legible word.
pub struct CanvasGlyphs {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasGlyphs {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("offscreen 2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    fn set_font(&self, font_px: f32) {
        self.ctx
            .set_font(&format!("{} {}px {}", GLYPH_FONT_WEIGHT, font_px, GLYPH_FONT_FAMILY));
    }

    fn try_rasterize(&self, text: &str, font_px: f32, width: u32, height: u32) -> anyhow::Result<AlphaMask> {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let (w, h) = (width as f64, height as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_fill_style_str("#000");
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.set_font(font_px);
        self.ctx
            .fill_text(text, w / 2.0, h / 2.0)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let image = self
            .ctx
            .get_image_data(0.0, 0.0, w, h)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let rgba = image.data();
        let mut mask = AlphaMask::new(width, height);
        for (dst, px) in mask.data.iter_mut().zip(rgba.chunks_exact(4)) {
            *dst = px[3];
        }
        Ok(mask)
    }
}

impl GlyphRaster for CanvasGlyphs {
    fn measure(&self, text: &str, font_px: f32) -> f32 {
        self.set_font(font_px);
        match self.ctx.measure_text(text) {
            Ok(m) => m.width() as f32,
            Err(_) => BlockFont.measure(text, font_px),
        }
    }

    fn rasterize(&self, text: &str, font_px: f32, width: u32, height: u32) -> AlphaMask {
        self.try_rasterize(text, font_px, width, height)
            .unwrap_or_else(|e| {
                log::warn!("[glyphs] canvas raster failed ({e}); using block font");
                BlockFont.rasterize(text, font_px, width, height)
            })
    }
}
