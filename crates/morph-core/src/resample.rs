//! Fit a point list to an exact count.

use crate::geom::Point;
use crate::rng::Mulberry32;
use glam::Vec2;

/// Source indices picked when decimating `len` points down to `n` (`len >= n`).
///
/// Evenly spaced over the source order, so the selection is non-decreasing.
pub fn decimation_indices(len: usize, n: usize) -> impl Iterator<Item = usize> {
    (0..n).map(move |i| {
        if n <= 1 {
            0
        } else {
            ((i as f64 / (n - 1) as f64) * (len - 1) as f64).floor() as usize
        }
    })
}

/// Returns exactly `n` points.
///
/// Oversupplied input is decimated by index, keeping the outline's order.
/// Undersupplied input keeps every source point, then pads with jittered
/// copies of random source points.
pub fn resample_to_count(points: &[Point], n: usize, rng: &mut Mulberry32, jitter: f32) -> Vec<Point> {
    if n == 0 {
        return Vec::new();
    }
    if points.is_empty() {
        return (0..n)
            .map(|_| Vec2::new(rng.next_f32(), rng.next_f32()))
            .collect();
    }
    if points.len() >= n {
        return decimation_indices(points.len(), n).map(|i| points[i]).collect();
    }
    let mut out = Vec::with_capacity(n);
    out.extend_from_slice(points);
    while out.len() < n {
        let p = points[rng.index(points.len())];
        out.push(p + Vec2::new(rng.signed() * jitter, rng.signed() * jitter));
    }
    out
}

/// Like [`resample_to_count`] but carries a parallel tag per point.
///
/// Padded copies inherit the tag of the point they were copied from.
pub fn resample_tagged<T: Clone>(
    points: &[Point],
    tags: &[T],
    n: usize,
    rng: &mut Mulberry32,
    jitter: f32,
) -> (Vec<Point>, Vec<T>) {
    debug_assert_eq!(points.len(), tags.len());
    if n == 0 || points.is_empty() || tags.len() != points.len() {
        return (Vec::new(), Vec::new());
    }
    if points.len() >= n {
        return decimation_indices(points.len(), n)
            .map(|i| (points[i], tags[i].clone()))
            .unzip();
    }
    let mut pts = points.to_vec();
    let mut out_tags = tags.to_vec();
    while pts.len() < n {
        let i = rng.index(points.len());
        pts.push(points[i] + Vec2::new(rng.signed() * jitter, rng.signed() * jitter));
        out_tags.push(tags[i].clone());
    }
    (pts, out_tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Vec<Point> {
        (0..n).map(|i| Vec2::new(i as f32, 0.0)).collect()
    }

    #[test]
    fn single_point_request_takes_first() {
        let mut rng = Mulberry32::new(1);
        let out = resample_to_count(&line(10), 1, &mut rng, 1.0);
        assert_eq!(out, vec![Vec2::ZERO]);
    }

    #[test]
    fn decimation_keeps_endpoints() {
        let mut rng = Mulberry32::new(1);
        let out = resample_to_count(&line(100), 10, &mut rng, 1.0);
        assert_eq!(out[0].x, 0.0);
        assert_eq!(out[9].x, 99.0);
    }

    #[test]
    fn padding_keeps_sources_first() {
        let src = line(5);
        let mut rng = Mulberry32::new(3);
        let out = resample_to_count(&src, 12, &mut rng, 0.5);
        assert_eq!(&out[..5], &src[..]);
        for p in &out[5..] {
            assert!(p.y.abs() <= 0.5);
        }
    }

    #[test]
    fn tagged_padding_inherits_tags() {
        let src = line(4);
        let tags = vec![0u8, 1, 2, 3];
        let mut rng = Mulberry32::new(11);
        let (pts, out_tags) = resample_tagged(&src, &tags, 20, &mut rng, 0.0);
        assert_eq!(pts.len(), 20);
        for (p, t) in pts.iter().zip(&out_tags) {
            assert_eq!(p.x as u8, *t);
        }
    }
}
