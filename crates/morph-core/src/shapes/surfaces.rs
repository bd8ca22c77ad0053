//! Parametric and minimal surfaces.
//!
//! Formulas, domains and noise amplitudes are fixed: they define each
//! surface's silhouette on screen.

use std::f32::consts::{PI, SQRT_2, TAU};

use glam::Vec3;
use rand::Rng;

use super::primitives::shape_sphere;

/// Distance from the Dini parametrisation poles inside which a sphere sample
/// is substituted.
pub const DINI_POLE_MARGIN: f32 = 0.01;

/// Figure-eight Klein bottle immersion, two branches split at `u = PI`.
pub fn shape_klein_bottle<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let v = rng.gen::<f32>() * TAU;
    let u = rng.gen::<f32>() * TAU;
    let big_r = 15.0_f32;
    let scale = 0.6_f32;

    let (su, cu) = u.sin_cos();
    let (sv, cv) = v.sin_cos();
    let (sh, ch) = (u / 2.0).sin_cos();

    let p = if u < PI {
        let radial = ch * (SQRT_2 + cv) + sh * sv * cv;
        Vec3::new(
            cu * radial,
            su * radial,
            -sh * (SQRT_2 + cv) + ch * sv * cv,
        )
    } else {
        Vec3::new(
            cu * SQRT_2 + su * cv * ch - sh * sv * su,
            su * SQRT_2 - cu * cv * ch - sh * sv * cu,
            -sh * cv * ch - ch * sv * su,
        )
    };
    p * big_r * scale
}

/// Dini's twisted pseudosphere.
///
/// `ln(tan(v / 2))` diverges at `v = 0` and `v = PI` and is undefined past
/// `PI`, so any `v` outside `[margin, PI - margin]` yields a sphere sample.
pub fn shape_dini<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u = rng.gen::<f32>() * PI * 4.0;
    let v = rng.gen::<f32>() * TAU;
    let a = 1.0_f32;
    let b = 0.2_f32;
    let scale = 6.0_f32;

    if v < DINI_POLE_MARGIN || v > PI - DINI_POLE_MARGIN {
        return shape_sphere(rng);
    }

    let x = a * u.cos() * v.sin() * scale;
    let y = a * u.sin() * v.sin() * scale;
    let z = a * (v.cos() + (v / 2.0).tan().ln()) + b * u;
    Vec3::new(x, y, (z - 2.0) * 1.5)
}

/// Lemniscate-like space curve with a shared jitter on all axes.
pub fn shape_eight_figure<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u = rng.gen::<f32>() * TAU;
    let r = 10.0_f32;
    let (s, c) = u.sin_cos();
    let noise = (rng.gen::<f32>() - 0.5) * 2.0;
    Vec3::new(r * c, r * s * c, r * s * s) + Vec3::splat(noise)
}

/// Cochleoid spiral stretched along z into a shell.
pub fn shape_cochleoid<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u = rng.gen::<f32>() * PI * 10.0;
    // sin(u) / u -> 1 as u -> 0
    let sinc = if u.abs() < f32::EPSILON { 1.0 } else { u.sin() / u };
    let r = sinc * 10.0;
    let v = (rng.gen::<f32>() - 0.5) * 4.0;
    Vec3::new(r * u.cos() + v, r * u.sin() + v, u * 0.5)
}

/// Henneberg minimal surface over `u, v` in `[-5, 5)`.
pub fn shape_henneberg<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u = (rng.gen::<f32>() - 0.5) * 10.0;
    let v = (rng.gen::<f32>() - 0.5) * 10.0;
    let scale = 1.5_f32;
    Vec3::new(
        2.0 * u.sinh() * v.cosh() - 2.0 * u,
        2.0 * u.sinh() * v.sin(),
        2.0 * u.cosh() * v.cos(),
    ) * scale
}

/// Enneper minimal surface over `u, v` in `[-7.5, 7.5)`.
pub fn shape_enneper<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u = (rng.gen::<f32>() - 0.5) * 15.0;
    let v = (rng.gen::<f32>() - 0.5) * 15.0;
    let scale = 0.5_f32;
    Vec3::new(
        u - u * u * u / 3.0 + u * v * v,
        v - v * v * v / 3.0 + v * u * u,
        u * u - v * v,
    ) * scale
}

/// Catalan minimal surface over `u, v` in `[-10, 10)`.
pub fn shape_catalan<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u = (rng.gen::<f32>() - 0.5) * 20.0;
    let v = (rng.gen::<f32>() - 0.5) * 20.0;
    let scale = 0.5_f32;
    Vec3::new(
        (u - u.sin() * v.cosh()) * scale,
        (1.0 - u.cos() * v.cosh()) * scale,
        4.0 * v.sin() * scale,
    )
}

/// Exponential horn: `(e^u cos v, e^u sin v, u)`.
pub fn shape_trevilley<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u = (rng.gen::<f32>() - 0.5) * 10.0;
    let v = (rng.gen::<f32>() - 0.5) * 10.0;
    let scale = 2.0_f32;
    let t = u.exp();
    let (s, c) = v.sin_cos();
    Vec3::new(t * c, t * s, u) * scale
}

/// Steiner's Roman surface with a shared jitter on all axes.
pub fn shape_roman<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u = rng.gen::<f32>() * TAU;
    let v = rng.gen::<f32>() * TAU;
    let r = 10.0_f32;
    let (su, cu) = u.sin_cos();
    let (sv, cv) = v.sin_cos();
    let noise = (rng.gen::<f32>() - 0.5) * 1.5;
    Vec3::new(
        r * su * su * sv * cv,
        r * sv * sv * su * cu,
        r * cu * cv,
    ) + Vec3::splat(noise)
}
