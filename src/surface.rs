use crate::options::Sizing;
use morph_core::{CanvasSize, Point, Rgb, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D backend for the engine's [`Surface`] contract.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    sizing: Sizing,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement, sizing: Sizing) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            sizing,
        })
    }
}

impl Surface for CanvasSurface {
    fn set_backing_size(&mut self, size: CanvasSize, dpr: f32) {
        let dpr = dpr as f64;
        let (w, h) = (size.width as f64, size.height as f64);
        self.canvas.set_width((w * dpr).floor() as u32);
        self.canvas.set_height((h * dpr).floor() as u32);
        // A canvas sized by the stylesheet must keep following its container.
        if self.sizing.pins_style() {
            let style = self.canvas.style();
            _ = style.set_property("width", &format!("{w}px"));
            _ = style.set_property("height", &format!("{h}px"));
        }
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    fn clear(&mut self, size: CanvasSize) {
        self.ctx.set_global_alpha(1.0);
        self.ctx
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn set_fill(&mut self, color: Rgb) {
        self.ctx.set_fill_style_str(&color.css());
    }

    fn fill_circle(&mut self, center: Point, radius: f32, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }
}
