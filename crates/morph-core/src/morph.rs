//! Per-frame morph and color update.
//!
//! Each frame every particle closes a fixed fraction of its distance to the
//! (possibly scaled) target, gets a small x-axis shimmer, and has its color
//! recomputed from scratch from the active palette and the clock.
//!
//! `time` is seconds since an arbitrary epoch as `f64`; periodic terms are
//! evaluated in `f64` and narrowed afterwards so wall-clock epochs keep
//! sub-frame precision.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use glam::{EulerRot, Mat4, Vec3};

use crate::config::MorphConfig;
use crate::gesture::GestureState;
use crate::math::{hsl_to_rgb, wrap01};
use crate::palette::Palette;
use crate::particle::ParticleSet;

pub const JITTER_AMPLITUDE: f32 = 0.01;
const JITTER_TIME_RATE: f64 = 2.0;
const JITTER_PHASE_STEP: f64 = 0.1;

const YAW_GAIN: f32 = 2.0;
const PITCH_GAIN: f32 = 1.5;

/// Shape scale for this frame. Pinned to 1.0 while no hand is tracked.
pub fn expansion_factor(gesture: &GestureState) -> f32 {
    if gesture.hand_detected {
        gesture.smoothed_expansion * 0.5 + 0.5
    } else {
        1.0
    }
}

/// First-order approach of `position` toward `target * expansion`.
#[inline]
pub fn morph_step(position: Vec3, target: Vec3, expansion: f32, morph_speed: f32) -> Vec3 {
    position + (target * expansion - position) * morph_speed
}

/// Cosmetic x-axis shimmer for particle `index`.
#[inline]
pub fn jitter(time: f64, index: usize) -> f32 {
    (time * JITTER_TIME_RATE + index as f64 * JITTER_PHASE_STEP).sin() as f32 * JITTER_AMPLITUDE
}

/// Palette hue for particle `index` of `count` at `time`, in `[0, 1)`.
pub fn particle_hue(index: usize, count: usize, time: f64, palette: &Palette) -> f32 {
    let raw = (index as f64 / count as f64 + time * palette.speed as f64).rem_euclid(1.0) as f32;
    wrap01(raw * palette.range + palette.start_hue)
}

/// Boosted RGB for particle `index`. Pure in its arguments.
pub fn particle_color(index: usize, count: usize, time: f64, palette: &Palette, color_boost: f32) -> Vec3 {
    let hue = particle_hue(index, count, time, palette);
    Vec3::from(hsl_to_rgb(hue, 1.0, palette.lightness)) * color_boost
}

/// Advance positions and recompute colors for every particle.
pub fn update_particles(
    particles: &mut ParticleSet,
    gesture: &GestureState,
    palette: &Palette,
    config: &MorphConfig,
    time: f64,
) {
    let expansion = expansion_factor(gesture);
    let morph_speed = config.morph_speed;
    let color_boost = config.color_boost;
    let count = particles.count;

    let ParticleSet { position, target, color, .. } = particles;

    let update = |i: usize, pos: &mut Vec3, tgt: &Vec3, col: &mut Vec3| {
        *pos = morph_step(*pos, *tgt, expansion, morph_speed);
        pos.x += jitter(time, i);
        *col = particle_color(i, count, time, palette, color_boost);
    };

    #[cfg(feature = "parallel")]
    {
        position
            .par_iter_mut()
            .zip(target.par_iter())
            .zip(color.par_iter_mut())
            .enumerate()
            .for_each(|(i, ((pos, tgt), col))| update(i, pos, tgt, col));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (i, ((pos, tgt), col)) in position
            .iter_mut()
            .zip(target.iter())
            .zip(color.iter_mut())
            .enumerate()
        {
            update(i, pos, tgt, col);
        }
    }
}

/// Persistent point-cloud orientation (Euler angles, radians, XYZ order).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    /// Pitch, driven by the pointer's y
    pub x: f32,
    /// Yaw, driven by the pointer's x or the idle spin
    pub y: f32,
}

impl Rotation {
    /// Accumulate one frame of rotation.
    pub fn step(&mut self, gesture: &GestureState, config: &MorphConfig) {
        if gesture.hand_detected {
            let pointer = gesture.smoothed_position;
            self.y += pointer.x * config.rotation_sensitivity * YAW_GAIN;
            self.x += pointer.y * config.rotation_sensitivity * PITCH_GAIN;
        } else {
            self.y += config.idle_spin;
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}
