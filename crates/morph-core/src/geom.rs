//! Canvas-space geometry shared by the samplers and the renderer.

use crate::error::MorphError;
use glam::Vec2;

/// A point in canvas-local CSS pixels.
pub type Point = Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Shrink by `pad` on every side.
    pub fn inset(&self, pad: f32) -> Self {
        Self::new(self.x + pad, self.y + pad, self.w - pad * 2.0, self.h - pad * 2.0)
    }

    /// A sub-rect of size `w_ratio * w` by `h_ratio * h`, centered.
    pub fn centered(&self, w_ratio: f32, h_ratio: f32) -> Self {
        let w = self.w * w_ratio;
        let h = self.h * h_ratio;
        Self::new(self.x + (self.w - w) / 2.0, self.y + (self.h - h) / 2.0, w, h)
    }

    /// Point at fractional coordinates inside the rect.
    #[inline]
    pub fn at(&self, fx: f32, fy: f32) -> Point {
        Vec2::new(self.x + self.w * fx, self.y + self.h * fy)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Host size in CSS pixels; both sides are at least one pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        let clamp = |v: f32| if v.is_finite() { v.floor().max(1.0) } else { 1.0 };
        Self {
            width: clamp(width),
            height: clamp(height),
        }
    }

    /// Like [`CanvasSize::new`] but rejects hosts that measure below one pixel.
    pub fn checked(width: f32, height: f32) -> Result<Self, MorphError> {
        if width >= 1.0 && height >= 1.0 {
            Ok(Self::new(width, height))
        } else {
            Err(MorphError::EmptyCanvas)
        }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn max_side(&self) -> f32 {
        self.width.max(self.height)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
