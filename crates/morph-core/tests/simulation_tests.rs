use glam::Vec3;
use morph_core::config::MorphConfig;
use morph_core::gesture::{GestureEvent, GestureSnapshot, GestureState, HandLandmarks, LANDMARK_COUNT, INDEX_TIP, MIDDLE_TIP, THUMB_TIP, WRIST};
use morph_core::morph::particle_color;
use morph_core::palette::PaletteKind;
use morph_core::shapes::ShapeKind;
use morph_core::simulation::{DirtyFlags, Simulation};

fn small_sim(count: usize) -> Simulation {
    let config = MorphConfig {
        particle_count: count,
        ..MorphConfig::default()
    };
    Simulation::new(config, 1234)
}

fn pinch_hand(distance: f32) -> HandLandmarks {
    let mut points = [Vec3::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
    points[WRIST] = Vec3::new(0.5, 0.8, 0.0);
    points[MIDDLE_TIP] = Vec3::new(0.5, 0.5, 0.0);
    points[INDEX_TIP] = Vec3::new(0.6, 0.5, 0.0);
    points[THUMB_TIP] = Vec3::new(0.6 + distance, 0.5, 0.0);
    HandLandmarks { points }
}

#[test]
fn test_starts_settled_on_sphere() {
    let sim = small_sim(500);
    assert_eq!(sim.shape(), ShapeKind::Sphere);
    assert_eq!(sim.shape_index(), 0);
    assert_eq!(sim.particles.position, sim.particles.target);
    for p in &sim.particles.target {
        let r = p.length();
        assert!((10.0 - 1e-3..=12.0 + 1e-3).contains(&r), "initial radius {}", r);
    }
}

#[test]
fn test_initial_colors_at_time_zero() {
    let sim = small_sim(16);
    let palette = PaletteKind::CoolTones.palette();
    for i in 0..16 {
        assert_eq!(sim.particles.color[i], particle_color(i, 16, 0.0, &palette, 1.5));
    }
}

#[test]
fn test_buffers_have_three_floats_per_particle() {
    let mut sim = small_sim(37);
    sim.advance_shape();
    sim.step(0.5);
    assert_eq!(sim.particles.position_floats().len(), 3 * 37);
    assert_eq!(sim.particles.target_floats().len(), 3 * 37);
    assert_eq!(sim.particles.color_floats().len(), 3 * 37);
}

#[test]
fn test_advance_resamples_targets() {
    let mut sim = small_sim(300);
    let before = sim.particles.target.clone();
    assert_eq!(sim.advance_shape(), ShapeKind::Pyramid);
    assert_ne!(sim.particles.target, before);
    for p in &sim.particles.target {
        let half = 10.0 * (1.0 - (p.y + 5.0) / 15.0);
        assert!(p.x.abs() <= half + 1e-3 && p.z.abs() <= half + 1e-3, "not in pyramid: {:?}", p);
    }
    // positions only move on the next frame
    assert_ne!(sim.particles.position, sim.particles.target);
}

#[test]
fn test_full_cycle_returns_to_start() {
    let mut sim = small_sim(8);
    for _ in 0..ShapeKind::COUNT {
        sim.advance_shape();
    }
    assert_eq!(sim.shape_index(), 0);
    assert_eq!(sim.shape(), ShapeKind::Sphere);
}

#[test]
fn test_pinch_switches_shape_once() {
    let mut sim = small_sim(50);
    assert_eq!(sim.handle_detection(Some(&pinch_hand(0.05))), None);
    assert_eq!(sim.handle_detection(Some(&pinch_hand(0.02))), Some(GestureEvent::AdvanceShape));
    assert_eq!(sim.shape(), ShapeKind::Pyramid);
    assert_eq!(sim.handle_detection(Some(&pinch_hand(0.05))), None);
    assert_eq!(sim.handle_detection(Some(&pinch_hand(0.09))), None);
    assert_eq!(sim.shape(), ShapeKind::Pyramid);
    assert!(!sim.gesture().is_pinching);
}

#[test]
fn test_snapshot_applies_every_missed_advance() {
    let mut sim = small_sim(20);
    let snapshot = GestureSnapshot {
        state: GestureState::default(),
        tracker_id: 1,
        advance_total: 3,
    };
    sim.apply_snapshot(&snapshot);
    assert_eq!(sim.shape(), ShapeKind::Saturn);
    // the same snapshot again changes nothing
    sim.apply_snapshot(&snapshot);
    assert_eq!(sim.shape(), ShapeKind::Saturn);
}

#[test]
fn test_new_tracker_id_restarts_advance_count() {
    let mut sim = small_sim(20);
    let first = GestureSnapshot {
        state: GestureState::default(),
        tracker_id: 7,
        advance_total: 3,
    };
    sim.apply_snapshot(&first);
    assert_eq!(sim.shape_index(), 3);

    // a fresh tracker counts from zero again
    let second = GestureSnapshot { tracker_id: 8, advance_total: 1, ..first };
    sim.apply_snapshot(&second);
    assert_eq!(sim.shape_index(), 4);
    sim.apply_snapshot(&GestureSnapshot { advance_total: 2, ..second });
    assert_eq!(sim.shape_index(), 5);
}

#[test]
fn test_step_marks_dirty() {
    let mut sim = small_sim(4);
    sim.take_dirty();
    assert_eq!(sim.take_dirty(), DirtyFlags::default());
    sim.step(0.0);
    assert_eq!(sim.take_dirty(), DirtyFlags { position: true, color: true });
    assert_eq!(sim.take_dirty(), DirtyFlags::default());
}

#[test]
fn test_palette_change_applies_next_frame() {
    let mut sim = small_sim(10);
    sim.step(1.0);
    let cool = sim.particles.color.clone();

    sim.set_palette(PaletteKind::WarmFire);
    assert_eq!(sim.particles.color, cool, "no recolor until the next frame");
    sim.step(1.0);
    let fire = PaletteKind::WarmFire.palette();
    for i in 0..10 {
        assert_eq!(sim.particles.color[i], particle_color(i, 10, 1.0, &fire, 1.5));
    }
}

#[test]
fn test_unknown_palette_keeps_current() {
    let mut sim = small_sim(2);
    sim.set_palette(PaletteKind::GoldSolar);
    assert!(sim.set_palette_by_name("plaid").is_err());
    assert_eq!(sim.palette_kind(), PaletteKind::GoldSolar);
    assert_eq!(sim.set_palette_by_name("forest_deep"), Ok(PaletteKind::ForestDeep));
    assert_eq!(sim.palette().accent, "#99ff00");
}

#[test]
fn test_rotation_survives_shape_and_palette_changes() {
    let mut sim = small_sim(4);
    for frame in 0..10 {
        sim.step(frame as f64);
    }
    let yaw = sim.rotation().y;
    assert!((yaw - 0.03).abs() < 1e-5);
    sim.advance_shape();
    sim.set_palette(PaletteKind::BubblegumPop);
    assert_eq!(sim.rotation().y, yaw);
}

#[test]
fn test_expansion_follows_hand_presence() {
    let mut sim = small_sim(4);
    assert_eq!(sim.expansion(), 1.0);
    sim.handle_detection(Some(&pinch_hand(0.3)));
    // spread 0.3 -> raw 0.9, smoothed 0.2 * 0.9 + 0.8 = 0.98
    assert!((sim.expansion() - (0.98 * 0.5 + 0.5)).abs() < 1e-5);
    sim.handle_detection(None);
    assert_eq!(sim.expansion(), 1.0);
}

#[test]
fn test_reinitialize_is_deterministic() {
    let mut a = small_sim(40);
    let mut b = small_sim(40);
    a.advance_shape();
    b.advance_shape();
    a.reinitialize(9);
    b.reinitialize(9);
    assert_eq!(a.particles.position, b.particles.position);
    assert_eq!(a.particles.position, a.particles.target);
}
