// End-to-end behavior of a single instance against a recording surface.

use morph_core::*;

fn thousand_particles() -> FieldConfig {
    FieldConfig {
        min_particles: 1000,
        max_particles: 1000,
        ..FieldConfig::symbols()
    }
}

#[test]
fn still_idle_frame_draws_every_particle_at_its_base() {
    let size = CanvasSize::new(700.0, 600.0);
    let mut inst = MorphInstance::new(thousand_particles(), Layout::Symbol(Symbol::Gear), size);
    assert_eq!(inst.particle_count(), 1000);

    let mut surface = RecordingSurface::default();
    inst.render(&mut surface, 12_345.0, Rgb::default(), true);

    assert_eq!(surface.circles.len(), 1000);
    for (c, p) in surface.circles.iter().zip(inst.particles()) {
        assert_eq!(c.center, p.base);
    }
    assert_eq!(surface.fill, Some(Rgb::default()));
}

#[test]
fn hover_drives_morph_past_ninety_nine_percent() {
    let config = FieldConfig {
        enter_rate: 0.015,
        ..FieldConfig::symbols()
    };
    let mut inst = MorphInstance::new(config, Layout::Symbol(Symbol::Check), CanvasSize::new(800.0, 600.0));
    inst.set_hover(true);
    for _ in 0..500 {
        inst.step_smoothing();
    }
    assert!(inst.state().morph > 0.99, "morph = {}", inst.state().morph);
}

#[test]
fn second_symbol_change_snapshots_the_blend_in_flight() {
    let mut inst = MorphInstance::for_layout(Layout::Symbol(Symbol::Check), CanvasSize::new(800.0, 600.0));
    inst.set_hover(true);

    inst.set_symbol("gear");
    assert_eq!(inst.state().symbol_t, 0.0);
    let gear = inst.targets_to().to_vec();
    for _ in 0..3 {
        inst.step_smoothing();
    }
    let t = inst.state().symbol_t;
    assert!(t > 0.0 && t < 1.0);
    let in_flight = inst.blended_targets();

    inst.set_symbol("chip");
    assert_eq!(inst.targets_from(), &in_flight[..]);
    assert_ne!(inst.targets_from(), &gear[..]);
    assert_eq!(inst.state().layout, Layout::Symbol(Symbol::Chip));
    assert_eq!(inst.state().symbol_t, 0.0);
}

#[test]
fn unknown_symbol_keeps_last_targets() {
    let mut inst = MorphInstance::for_layout(Layout::Symbol(Symbol::Funnel), CanvasSize::new(640.0, 480.0));
    let before = inst.targets().clone();
    inst.set_symbol("not-a-symbol");
    assert_eq!(inst.targets(), &before);
    assert_eq!(inst.state().layout, Layout::Symbol(Symbol::Funnel));
}

#[test]
fn particle_count_shrinks_with_area_within_clamp() {
    let config = FieldConfig::symbols();
    let big = pick_n(&config, CanvasSize::new(800.0, 600.0));
    let small = pick_n(&config, CanvasSize::new(400.0, 300.0));
    assert!(small <= big);
    for n in [big, small] {
        assert!((config.min_particles..=config.max_particles).contains(&n));
    }

    let mut inst = MorphInstance::new(config, Layout::Symbol(Symbol::Bag), CanvasSize::new(800.0, 600.0));
    assert_eq!(inst.particle_count(), big);
    let mut surface = RecordingSurface::default();
    inst.on_resize(&mut surface, 400.0, 300.0, 2.0);
    assert_eq!(inst.particle_count(), small);
    assert_eq!(inst.assignment().len(), small);
}

#[test]
fn formed_static_frame_places_assigned_particles_on_targets() {
    let mut inst = MorphInstance::for_layout(Layout::Symbol(Symbol::Pentagon), CanvasSize::new(720.0, 520.0))
        .with_reduced_motion(true);
    inst.set_hover(true);
    let mut surface = RecordingSurface::default();
    assert!(!inst.frame(&mut surface, 500.0, Rgb::new(1, 2, 3)));
    assert_eq!(inst.state().morph, 1.0);

    for (i, slot) in inst.assignment().iter().enumerate() {
        if let Some(slot) = slot {
            let target = inst.targets_to()[*slot as usize];
            assert!(surface.circles[i].center.distance(target) < 1e-3);
        } else {
            assert!(inst.border_rect().inset(-40.0).contains(surface.circles[i].center));
        }
    }
}

#[test]
fn engaged_layout_launches_sparks() {
    let mut inst = MorphInstance::for_layout(Layout::Conversion, CanvasSize::new(1024.0, 640.0));
    inst.set_hover(true);
    let mut surface = RecordingSurface::default();
    let particles = inst.particle_count();

    let mut saw_spark = false;
    for frame in 0..240 {
        assert!(inst.frame(&mut surface, frame as f64 * 16.0, Rgb::default()));
        saw_spark |= inst.sparks().active_count() > 0;
    }
    assert!(saw_spark);
    assert!(surface.circles.len() >= particles);
}

#[test]
fn idle_instance_draws_no_sparks() {
    let mut inst = MorphInstance::for_layout(Layout::Showcase, CanvasSize::new(1024.0, 640.0));
    let mut surface = RecordingSurface::default();
    for frame in 0..60 {
        inst.frame(&mut surface, frame as f64 * 16.0, Rgb::default());
    }
    assert_eq!(inst.sparks().active_count(), 0);
    assert_eq!(surface.circles.len(), inst.particle_count());
}

#[test]
fn switching_to_conversion_keeps_the_headline_silhouette() {
    let size = CanvasSize::new(800.0, 600.0);
    for start in [Layout::Showcase, Layout::Symbol(Symbol::Gear)] {
        let mut inst = MorphInstance::for_layout(start, size);
        inst.set_symbol("conversion");
        let targets = inst.targets_to();
        assert_eq!(targets.len(), inst.morph_count());
        let stray = targets.iter().filter(|p| p.x < 1.0 && p.y < 1.0).count();
        assert_eq!(stray, 0, "start={start:?} targets={} stray={stray}", targets.len());
    }
}
