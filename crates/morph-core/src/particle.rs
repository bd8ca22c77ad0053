use glam::Vec3;

/// SoA particle storage. All columns hold exactly `count` entries for the
/// lifetime of the set.
pub struct ParticleSet {
    pub count: usize,
    /// Current rendered location
    pub position: Vec<Vec3>,
    /// Destination on the active shape, rewritten on every shape switch
    pub target: Vec<Vec3>,
    /// RGB intensity, may exceed 1.0 after the color boost
    pub color: Vec<Vec3>,
}

impl ParticleSet {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            position: vec![Vec3::ZERO; count],
            target: vec![Vec3::ZERO; count],
            color: vec![Vec3::ZERO; count],
        }
    }

    /// Overwrite every target with a fresh sample from `sampler`.
    pub fn retarget(&mut self, mut sampler: impl FnMut(usize) -> Vec3) {
        for (i, target) in self.target.iter_mut().enumerate() {
            *target = sampler(i);
        }
    }

    /// Flat `[x, y, z, x, y, z, ...]` view of the positions (`3 * count` floats).
    pub fn position_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.position)
    }

    pub fn target_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.target)
    }

    pub fn color_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.color)
    }
}
