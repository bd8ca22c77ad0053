use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::MorphConfig;
use crate::gesture::{GestureEvent, GestureSnapshot, GestureState, GestureTracker, HandLandmarks};
use crate::morph::{particle_color, update_particles, Rotation};
use crate::palette::{Palette, PaletteKind, UnknownPalette};
use crate::particle::ParticleSet;
use crate::shapes::ShapeKind;

/// Which particle buffers changed since the renderer last uploaded them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyFlags {
    pub position: bool,
    pub color: bool,
}

/// Everything the frame update and the detection callback share.
///
/// Built once at startup. Detection results go through
/// [`Simulation::handle_detection`] (same thread) or
/// [`Simulation::apply_snapshot`] (results produced elsewhere); the render
/// side calls [`Simulation::step`] once per frame.
pub struct Simulation {
    pub particles: ParticleSet,
    pub config: MorphConfig,
    tracker: GestureTracker,
    gesture: GestureState,
    // (tracker id, advances already applied from it)
    advances_seen: (u64, u64),
    palette_kind: PaletteKind,
    palette: Palette,
    shape: ShapeKind,
    rotation: Rotation,
    dirty: DirtyFlags,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: MorphConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let palette_kind = PaletteKind::default();
        let palette = palette_kind.palette();
        let shape = ShapeKind::Sphere;
        let count = config.particle_count;

        // Start settled on the first shape, colored as at time zero
        let mut particles = ParticleSet::new(count);
        for i in 0..count {
            let p = shape.sample(&mut rng);
            particles.position[i] = p;
            particles.target[i] = p;
            particles.color[i] = particle_color(i, count, 0.0, &palette, config.color_boost);
        }

        Self {
            particles,
            tracker: GestureTracker::new(&config),
            config,
            gesture: GestureState::default(),
            advances_seen: (0, 0),
            palette_kind,
            palette,
            shape,
            rotation: Rotation::default(),
            dirty: DirtyFlags { position: true, color: true },
            rng,
        }
    }

    /// Run one frame: morph, shimmer, recolor, rotate.
    pub fn step(&mut self, time: f64) {
        update_particles(&mut self.particles, &self.gesture, &self.palette, &self.config, time);
        self.rotation.step(&self.gesture, &self.config);
        self.dirty = DirtyFlags { position: true, color: true };
    }

    /// Feed one detector result through the local tracker. Returns the event
    /// it produced, already applied.
    pub fn handle_detection(&mut self, hand: Option<&HandLandmarks>) -> Option<GestureEvent> {
        let event = self.tracker.update(hand);
        let snapshot = self.tracker.snapshot();
        self.apply_snapshot(&snapshot);
        event
    }

    /// Adopt gesture output produced by a tracker running elsewhere. Every
    /// advance counted since the last applied snapshot switches one shape.
    /// A snapshot from a different tracker than the last one starts counting
    /// from zero, so a restarted detector keeps switching shapes.
    ///
    /// Use either this or [`Simulation::handle_detection`] for a given
    /// simulation, not both: they count advances independently.
    pub fn apply_snapshot(&mut self, snapshot: &GestureSnapshot) {
        self.gesture = snapshot.state;
        let (tracker_id, seen) = &mut self.advances_seen;
        if *tracker_id != snapshot.tracker_id {
            *tracker_id = snapshot.tracker_id;
            *seen = 0;
        }
        let pending = snapshot.advance_total.saturating_sub(*seen);
        *seen = (*seen).max(snapshot.advance_total);
        for _ in 0..pending {
            self.advance_shape();
        }
    }

    /// Move to the next shape in the catalog and resample every target.
    pub fn advance_shape(&mut self) -> ShapeKind {
        self.set_shape(self.shape.next());
        self.shape
    }

    /// Jump to `shape` and resample every target.
    pub fn set_shape(&mut self, shape: ShapeKind) {
        self.shape = shape;
        let rng = &mut self.rng;
        self.particles.retarget(|_| shape.sample(&mut *rng));
    }

    pub fn set_palette(&mut self, kind: PaletteKind) {
        self.palette_kind = kind;
        self.palette = kind.palette();
    }

    pub fn set_palette_by_name(&mut self, name: &str) -> Result<PaletteKind, UnknownPalette> {
        let kind = name.parse::<PaletteKind>()?;
        self.set_palette(kind);
        Ok(kind)
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn shape_index(&self) -> usize {
        self.shape.index()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_kind(&self) -> PaletteKind {
        self.palette_kind
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// Current expansion applied to targets.
    pub fn expansion(&self) -> f32 {
        crate::morph::expansion_factor(&self.gesture)
    }

    /// Return and clear the dirty flags.
    pub fn take_dirty(&mut self) -> DirtyFlags {
        std::mem::take(&mut self.dirty)
    }

    /// Reseed and put every particle back onto a fresh sample of the
    /// current shape, at rest.
    pub fn reinitialize(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        let shape = self.shape;
        for i in 0..self.particles.count {
            let p = shape.sample(&mut self.rng);
            self.particles.position[i] = p;
            self.particles.target[i] = p;
        }
        self.dirty.position = true;
    }
}
