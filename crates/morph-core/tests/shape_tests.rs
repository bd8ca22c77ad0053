use std::collections::HashSet;

use glam::Vec3;
use morph_core::shapes::primitives::*;
use morph_core::shapes::surfaces::*;
use morph_core::shapes::{sample, ShapeKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_all_shapes_finite() {
    let mut rng = rng(1);
    for kind in ShapeKind::ALL {
        for _ in 0..2000 {
            let p = sample(kind, &mut rng);
            assert!(p.is_finite(), "shape {:?} produced non-finite point {:?}", kind, p);
        }
    }
}

#[test]
fn test_sphere_radius_in_shell() {
    let mut rng = rng(2);
    for _ in 0..1000 {
        let r = shape_sphere(&mut rng).length();
        assert!((10.0 - 1e-3..=12.0 + 1e-3).contains(&r), "sphere radius {} outside [10, 12]", r);
    }
}

#[test]
fn test_saturn_ring_and_core_split() {
    let mut rng = rng(3);
    let samples = 10_000;
    let mut ring = 0;
    for _ in 0..samples {
        let p = shape_saturn(&mut rng);
        let r = p.length();
        if (r - 6.0).abs() < 1e-3 {
            continue;
        }
        let planar = (p.x * p.x + p.z * p.z).sqrt();
        assert!(p.y.abs() <= 0.5, "ring point too thick: {:?}", p);
        assert!((12.0 - 1e-3..=18.0 + 1e-3).contains(&planar), "ring radius {} out of range", planar);
        ring += 1;
    }
    let fraction = ring as f32 / samples as f32;
    assert!((0.67..0.73).contains(&fraction), "ring fraction {} not near 0.7", fraction);
}

#[test]
fn test_torus_knot_bounded() {
    let mut rng = rng(4);
    for _ in 0..1000 {
        let p = shape_torus_knot(&mut rng);
        let planar = (p.x * p.x + p.y * p.y).sqrt();
        assert!(planar <= (10.0 + 3.5) * 0.8 + 1e-3, "knot too wide: {:?}", p);
        assert!(planar >= (10.0 - 3.5) * 0.8 - 1e-3, "knot too narrow: {:?}", p);
        assert!(p.z.abs() <= 3.5 * 0.8 + 1e-3);
    }
}

#[test]
fn test_klein_bottle_bounded() {
    let mut rng = rng(5);
    // |x|, |y|, |z| <= R * (sqrt2 + 2) * scale
    let limit = 15.0 * (std::f32::consts::SQRT_2 + 2.0) * 0.6;
    for _ in 0..2000 {
        let p = shape_klein_bottle(&mut rng);
        assert!(p.abs().max_element() <= limit, "klein point {:?} beyond {}", p, limit);
    }
}

#[test]
fn test_dini_never_takes_log_of_nonpositive() {
    let mut rng = rng(6);
    let mut spheres = 0;
    for _ in 0..5000 {
        let p = shape_dini(&mut rng);
        assert!(p.is_finite(), "dini produced {:?}", p);
        let r = p.length();
        if (10.0..=12.0).contains(&r) {
            spheres += 1;
        }
    }
    // v > PI - margin covers roughly half the domain
    assert!(spheres > 2000, "expected many fallback samples, got {}", spheres);
}

#[test]
fn test_eight_figure_noise_shared_across_axes() {
    let mut rng = rng(7);
    for _ in 0..500 {
        let p = shape_eight_figure(&mut rng);
        // curve spans x in [-10, 10], y in [-5, 5], z in [0, 10]; noise adds at most 1
        assert!(p.x.abs() <= 11.0 && p.y.abs() <= 6.0 && p.z >= -1.0 && p.z <= 11.0, "{:?}", p);
    }
}

#[test]
fn test_cochleoid_height_follows_angle() {
    let mut rng = rng(8);
    for _ in 0..1000 {
        let p = shape_cochleoid(&mut rng);
        assert!(p.is_finite());
        assert!(p.z >= 0.0 && p.z < std::f32::consts::PI * 5.0 + 1e-3);
    }
}

#[test]
fn test_minimal_surfaces_finite() {
    let mut rng = rng(9);
    for _ in 0..2000 {
        for p in [
            shape_henneberg(&mut rng),
            shape_enneper(&mut rng),
            shape_catalan(&mut rng),
            shape_trevilley(&mut rng),
            shape_roman(&mut rng),
        ] {
            assert!(p.is_finite(), "minimal surface produced {:?}", p);
        }
    }
}

#[test]
fn test_catalan_depth_not_double_scaled() {
    let mut rng = rng(10);
    for _ in 0..1000 {
        let p = shape_catalan(&mut rng);
        assert!(p.z.abs() <= 2.0 + 1e-4, "catalan z {} exceeds 4 * 0.5", p.z);
    }
}

#[test]
fn test_trevilley_z_is_scaled_parameter() {
    let mut rng = rng(11);
    for _ in 0..1000 {
        let p = shape_trevilley(&mut rng);
        assert!(p.z >= -10.0 && p.z < 10.0);
        let radius = (p.x * p.x + p.y * p.y).sqrt();
        let expected = (p.z / 2.0).exp() * 2.0;
        assert!((radius - expected).abs() <= expected * 1e-3 + 1e-4);
    }
}

#[test]
fn test_catalog_cycle_wraps_exactly() {
    let mut kind = ShapeKind::Sphere;
    for _ in 0..ShapeKind::COUNT {
        kind = kind.next();
    }
    assert_eq!(kind, ShapeKind::Sphere);
    assert_eq!(ShapeKind::from_index(ShapeKind::COUNT + 3), ShapeKind::Saturn);
}

#[test]
fn test_display_names_unique() {
    let names: HashSet<&str> = ShapeKind::ALL.iter().map(|k| k.display_name()).collect();
    assert_eq!(names.len(), ShapeKind::COUNT);
    assert_eq!(ShapeKind::Sphere.display_name(), "FIREWORK (SPHERE)");
    assert_eq!(ShapeKind::Roman.display_name(), "ROMAN SURFACE");
}

#[test]
fn test_same_seed_same_samples() {
    let a: Vec<Vec3> = {
        let mut rng = rng(42);
        (0..50).map(|_| ShapeKind::Heart.sample(&mut rng)).collect()
    };
    let b: Vec<Vec3> = {
        let mut rng = rng(42);
        (0..50).map(|_| ShapeKind::Heart.sample(&mut rng)).collect()
    };
    assert_eq!(a, b);
}
