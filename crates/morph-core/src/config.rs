use glam::{Mat4, Vec3};

/// Tunables for the morph/color update loop and the gesture tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphConfig {
    pub particle_count: usize,
    /// Point sprite size handed to the renderer.
    pub particle_size: f32,
    /// Fraction of the remaining distance closed per frame.
    pub morph_speed: f32,
    /// Color multiplier, may push channels above 1.0 for additive glow.
    pub color_boost: f32,
    pub rotation_sensitivity: f32,
    /// Exponential smoothing weight given to each new raw sample.
    pub smoothing_factor: f32,
    /// Thumb-to-index distance below which a pinch engages.
    pub pinch_threshold: f32,
    /// Width of the dead zone above `pinch_threshold` before a pinch releases.
    pub pinch_release_margin: f32,
    /// Yaw added per frame while no hand is tracked.
    pub idle_spin: f32,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            particle_count: 20_000,
            particle_size: 0.4,
            morph_speed: 0.1,
            color_boost: 1.5,
            rotation_sensitivity: 0.035,
            smoothing_factor: 0.2,
            pinch_threshold: 0.04,
            pinch_release_margin: 0.04,
            idle_spin: 0.003,
        }
    }
}

impl MorphConfig {
    /// Distance at or above which an active pinch is released.
    pub fn pinch_release(&self) -> f32 {
        self.pinch_threshold + self.pinch_release_margin
    }
}

/// Camera and scene setup for the presentation side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub camera_z: f32,
    /// Exponential fog density (black fog).
    pub fog_density: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_z: 25.0,
            fog_density: 0.015,
        }
    }
}

impl ViewConfig {
    /// Perspective projection for a viewport of the given aspect ratio.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }

    /// Camera sits on +Z looking at the origin.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(Vec3::new(0.0, 0.0, self.camera_z), Vec3::ZERO, Vec3::Y)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }
}

/// Parameters forwarded to the webcam and the hand-landmark detector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureConfig {
    pub width: u32,
    pub height: u32,
    pub max_hands: u32,
    pub model_complexity: u32,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            max_hands: 1,
            model_complexity: 1,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}
