//! Closed-form and rejection-sampled solids.
//!
//! Every generator draws its own uniform parameters from `rng` and returns a
//! point in world units (the camera sits at z = 25).

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// Attempts before the pyramid sampler gives up on rejection.
pub const PYRAMID_MAX_ATTEMPTS: u32 = 64;

/// Uniform direction on the unit sphere.
fn unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

/// Thick spherical shell with radius in `[10, 12)`.
pub fn shape_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let r = 10.0 + rng.gen::<f32>() * 2.0;
    unit_sphere(rng) * r
}

/// Solid square pyramid, base 20x20 at y = -5, apex at y = 10.
///
/// Candidates are drawn in the bounding box and rejected outside the
/// pyramid. After [`PYRAMID_MAX_ATTEMPTS`] rejections the last candidate is
/// returned as is.
pub fn shape_pyramid<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let h = 15.0_f32;
    let s = 10.0_f32;

    let mut candidate = Vec3::ZERO;
    for _ in 0..PYRAMID_MAX_ATTEMPTS {
        let x = (rng.gen::<f32>() - 0.5) * s;
        let z = (rng.gen::<f32>() - 0.5) * s;
        let y = rng.gen::<f32>() * h;
        candidate = Vec3::new(x * 2.0, y - 5.0, z * 2.0);

        let half_width = s * (1.0 - y / h) * 0.5;
        if x.abs() < half_width && z.abs() < half_width {
            return candidate;
        }
    }
    candidate
}

/// Heart curve in the XY plane with depth jitter in `[-2.5, 2.5)`.
pub fn shape_heart<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let t = rng.gen::<f32>() * TAU * 10.0;
    let scale = 0.8_f32;
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    Vec3::new(x * scale, y * scale, (rng.gen::<f32>() - 0.5) * 5.0)
}

/// Ring of radius `[12, 18)` (about 70% of calls) around a radius 6 core.
pub fn shape_saturn<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let is_ring = rng.gen::<f32>() > 0.3;
    if is_ring {
        let angle = rng.gen::<f32>() * TAU;
        let r = 12.0 + rng.gen::<f32>() * 6.0;
        Vec3::new(angle.cos() * r, rng.gen::<f32>() - 0.5, angle.sin() * r)
    } else {
        unit_sphere(rng) * 6.0
    }
}

/// (3, 2) torus knot with a slightly fuzzy tube.
pub fn shape_torus_knot<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u = rng.gen::<f32>() * TAU;
    let p = 3.0_f32;
    let q = 2.0_f32;
    let big_r = 10.0_f32;
    let r = 3.0 + rng.gen::<f32>() * 0.5;
    let scale = 0.8_f32;
    let ring = big_r + r * (q * u).cos();
    Vec3::new(
        ring * (p * u).cos(),
        ring * (p * u).sin(),
        r * (q * u).sin(),
    ) * scale
}

/// Torus with major radius 10 and minor radius 4.
pub fn shape_torus<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u = rng.gen::<f32>() * TAU;
    let v = rng.gen::<f32>() * TAU;
    let big_r = 10.0_f32;
    let small_r = 4.0_f32;
    Vec3::new(
        (big_r + small_r * v.cos()) * u.cos(),
        (big_r + small_r * v.cos()) * u.sin(),
        small_r * v.sin(),
    )
}

/// Möbius strip, radius 10, half-width parameter in `[-2.5, 2.5)`.
pub fn shape_mobius<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u = rng.gen::<f32>() * TAU;
    let v = (rng.gen::<f32>() - 0.5) * 5.0;
    let big_r = 10.0_f32;
    let half = u / 2.0;
    Vec3::new(
        big_r * (u.cos() + v * half.cos() * u.cos()),
        big_r * (u.sin() + v * half.cos() * u.sin()),
        big_r * v * half.sin(),
    )
}
