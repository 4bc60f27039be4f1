//! Scalar helpers for blending and smoothing.

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Cubic ease-in-out on `[0, 1]`.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// One exponential smoothing step: `value += (target - value) * rate`, clamped to `[0, 1]`.
///
/// With `rate` in `[0, 1]` the result lies between `value` and `target`, so
/// there is no overshoot.
#[inline]
pub fn smooth_toward(value: f32, target: f32, rate: f32) -> f32 {
    clamp01(value + (target - value) * rate.clamp(0.0, 1.0))
}
