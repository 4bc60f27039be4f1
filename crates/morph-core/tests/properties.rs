// Engine-wide properties: determinism, exact resampling, bounded smoothing.

use glam::Vec2;
use morph_core::resample::decimation_indices;
use morph_core::*;

fn outline(len: usize) -> Vec<Point> {
    (0..len).map(|i| Vec2::new(i as f32, (i * 7 % 13) as f32)).collect()
}

#[test]
fn generators_with_equal_seeds_agree() {
    let mut a = Mulberry32::new(20240);
    let mut b = Mulberry32::new(20240);
    for _ in 0..1000 {
        assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
    }
}

#[test]
fn streams_from_one_seed_are_independent() {
    let mut idle = Mulberry32::for_stream(4201, Stream::Idle);
    let mut border = Mulberry32::for_stream(4201, Stream::Border);
    let a: Vec<f64> = (0..16).map(|_| idle.next_f64()).collect();
    let b: Vec<f64> = (0..16).map(|_| border.next_f64()).collect();
    assert_ne!(a, b);
}

#[test]
fn draws_stay_in_unit_interval() {
    let mut rng = Mulberry32::new(7);
    for _ in 0..10_000 {
        let x = rng.next_f64();
        assert!((0.0..1.0).contains(&x));
        let y = rng.next_f32();
        assert!((0.0..1.0).contains(&y));
    }
}

#[test]
fn resample_returns_exact_count() {
    for len in [1usize, 2, 37, 200] {
        let pts = outline(len);
        for n in [0, 1, len / 2, len, len * 3] {
            let mut rng = Mulberry32::new(11);
            assert_eq!(resample_to_count(&pts, n, &mut rng, 0.8).len(), n, "len={len} n={n}");
        }
    }
}

#[test]
fn resample_of_empty_source_fills_uniformly() {
    let mut rng = Mulberry32::new(3);
    let pts = resample_to_count(&[], 25, &mut rng, 1.0);
    assert_eq!(pts.len(), 25);
}

#[test]
fn decimation_keeps_source_order() {
    let pts = outline(500);
    for n in [1usize, 2, 3, 99, 250, 500] {
        let idx: Vec<usize> = decimation_indices(pts.len(), n).collect();
        assert!(idx.windows(2).all(|w| w[0] <= w[1]));
        assert!(idx.iter().all(|&i| i < pts.len()));

        let mut rng = Mulberry32::new(1);
        let out = resample_to_count(&pts, n, &mut rng, 0.5);
        let expected: Vec<Point> = idx.iter().map(|&i| pts[i]).collect();
        assert_eq!(out, expected);
    }
}

#[test]
fn padding_keeps_every_source_point_first() {
    let pts = outline(10);
    let mut rng = Mulberry32::new(5);
    let out = resample_to_count(&pts, 30, &mut rng, 0.5);
    assert_eq!(&out[..10], &pts[..]);
}

#[test]
fn smoothing_stays_bounded_and_converges() {
    let size = CanvasSize::new(640.0, 480.0);
    let mut inst = MorphInstance::for_layout(Layout::Symbol(Symbol::Check), size);
    let mut coin = Mulberry32::new(99);
    let symbols = ["gear", "chip", "funnel", "podium"];

    for step in 0..600 {
        if coin.next_f32() < 0.1 {
            inst.toggle_hover();
        }
        if step % 37 == 0 {
            inst.set_symbol(symbols[step / 37 % symbols.len()]);
        }
        inst.step_smoothing();
        let s = inst.state();
        assert!((0.0..=1.0).contains(&s.morph), "morph {} at {step}", s.morph);
        assert!((0.0..=1.0).contains(&s.symbol_t), "symbol_t {} at {step}", s.symbol_t);
    }

    inst.set_hover(true);
    for _ in 0..1200 {
        inst.step_smoothing();
    }
    assert!(inst.state().morph > 1.0 - 1e-3);
    assert!(inst.state().symbol_t > 1.0 - 1e-3);

    inst.set_hover(false);
    for _ in 0..1200 {
        inst.step_smoothing();
    }
    assert!(inst.state().morph < 1e-3);
}

#[test]
fn rebuild_with_same_seed_and_size_is_identical() {
    for layout in [Layout::Showcase, Layout::Conversion, Layout::Symbol(Symbol::Launch)] {
        let size = CanvasSize::new(960.0, 540.0);
        let a = MorphInstance::for_layout(layout, size);
        let mut b = MorphInstance::for_layout(layout, size);
        b.resize(size);

        assert_eq!(a.assignment(), b.assignment());
        assert_eq!(a.targets(), b.targets());
        assert_eq!(a.particles(), b.particles());
    }
}

#[test]
fn assignment_indexes_current_targets_after_resize() {
    let mut inst = MorphInstance::for_layout(Layout::Conversion, CanvasSize::new(1200.0, 800.0));
    for (w, h) in [(320.0, 240.0), (0.0, 0.0), (1920.0, 1080.0)] {
        inst.resize(CanvasSize::new(w, h));
        assert_eq!(inst.assignment().len(), inst.particle_count());
        let m = inst.targets().len() as u32;
        assert!(inst.assignment().iter().flatten().all(|&s| s < m));
    }
}

#[test]
fn progress_survives_resize() {
    let mut inst = MorphInstance::for_layout(Layout::Showcase, CanvasSize::new(800.0, 600.0));
    inst.set_hover(true);
    for _ in 0..40 {
        inst.step_smoothing();
    }
    let morph = inst.state().morph;
    inst.resize(CanvasSize::new(500.0, 400.0));
    assert_eq!(inst.state().morph, morph);
    assert!(inst.state().want);
    assert_eq!(inst.targets_from(), inst.targets_to());
}
