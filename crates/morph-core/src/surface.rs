//! Drawing contract between the engine and a 2D backend.

use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::error::MorphError;
use crate::geom::{CanvasSize, Point};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::new(10, 20, 120)
    }
}

/// Parses `"r,g,b"` or `"r g b"`.
impl FromStr for Rgb {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        let bad = || MorphError::InvalidColor(s.to_string());
        if parts.len() != 3 {
            return Err(bad());
        }
        let mut ch = [0u8; 3];
        for (slot, p) in ch.iter_mut().zip(parts) {
            *slot = p.parse().map_err(|_| bad())?;
        }
        Ok(Self::new(ch[0], ch[1], ch[2]))
    }
}

/// Device pixel ratio clamped to `[1, MAX_DEVICE_PIXEL_RATIO]`; non-finite input maps to 1.
pub fn clamp_device_pixel_ratio(dpr: f32) -> f32 {
    if dpr.is_finite() {
        dpr.clamp(1.0, MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    }
}

pub trait Surface {
    /// Size the backing store to `size * dpr` device pixels and map drawing to CSS pixels.
    fn set_backing_size(&mut self, size: CanvasSize, dpr: f32);
    fn clear(&mut self, size: CanvasSize);
    fn set_fill(&mut self, color: Rgb);
    fn fill_circle(&mut self, center: Point, radius: f32, alpha: f32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
    pub alpha: f32,
}

/// Headless surface that records the last frame's draw calls.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub backing: Option<(u32, u32)>,
    pub fill: Option<Rgb>,
    pub circles: Vec<Circle>,
    pub clears: usize,
}

impl Surface for RecordingSurface {
    fn set_backing_size(&mut self, size: CanvasSize, dpr: f32) {
        self.backing = Some((
            (size.width * dpr).floor() as u32,
            (size.height * dpr).floor() as u32,
        ));
    }

    fn clear(&mut self, _size: CanvasSize) {
        self.circles.clear();
        self.clears += 1;
    }

    fn set_fill(&mut self, color: Rgb) {
        self.fill = Some(color);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, alpha: f32) {
        self.circles.push(Circle {
            center,
            radius,
            alpha,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_and_space_tokens() {
        assert_eq!("10,20,120".parse::<Rgb>().unwrap(), Rgb::new(10, 20, 120));
        assert_eq!(" 1 2  3 ".parse::<Rgb>().unwrap(), Rgb::new(1, 2, 3));
        assert_eq!("4, 5, 6".parse::<Rgb>().unwrap(), Rgb::new(4, 5, 6));
    }

    #[test]
    fn rejects_bad_tokens() {
        assert!("".parse::<Rgb>().is_err());
        assert!("1,2".parse::<Rgb>().is_err());
        assert!("1,2,300".parse::<Rgb>().is_err());
    }

    #[test]
    fn pixel_ratio_is_capped() {
        assert_eq!(clamp_device_pixel_ratio(0.5), 1.0);
        assert_eq!(clamp_device_pixel_ratio(f32::NAN), 1.0);
        assert_eq!(clamp_device_pixel_ratio(3.0), MAX_DEVICE_PIXEL_RATIO);
        assert_eq!(clamp_device_pixel_ratio(1.2), 1.2);
    }

    #[test]
    fn css_format() {
        assert_eq!(Rgb::default().css(), "rgb(10,20,120)");
    }
}
