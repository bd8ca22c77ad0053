//! Hand landmarks in, smoothed pointer/expansion and pinch events out.
//!
//! One detection result is consumed per call. Only the first tracked hand is
//! used. Landmarks are in the detector's normalised image space: x to the
//! right and y downward in `[0, 1]`, z ignored.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::{Vec2, Vec3};

use crate::config::MorphConfig;
use crate::math::{smooth, smooth_vec2};

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Skeleton edges for the debug hand overlay.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (MIDDLE_MCP, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (RING_MCP, PINKY_MCP), (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP),
    (PINKY_DIP, PINKY_TIP),
];

/// Raw wrist-to-middle-tip distance is multiplied by this before clamping.
pub const EXPANSION_GAIN: f32 = 3.0;
pub const EXPANSION_MIN: f32 = 0.5;
pub const EXPANSION_MAX: f32 = 2.0;

/// One detected hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks {
    pub points: [Vec3; LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Build from `[x0, y0, z0, x1, y1, z1, ...]`. Points past the 21st are
    /// ignored.
    pub fn from_flat(values: &[f32]) -> Result<Self, LandmarkError> {
        if values.len() < LANDMARK_COUNT * 3 {
            return Err(LandmarkError::TooFew { found: values.len() / 3 });
        }
        let mut points = [Vec3::ZERO; LANDMARK_COUNT];
        for (index, (point, xyz)) in points.iter_mut().zip(values.chunks_exact(3)).enumerate() {
            *point = Vec3::new(xyz[0], xyz[1], xyz[2]);
            if !point.is_finite() {
                return Err(LandmarkError::NonFinite { index });
            }
        }
        Ok(Self { points })
    }

    /// True when every coordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.is_finite())
    }

    /// Image-plane position of landmark `index`.
    pub fn planar(&self, index: usize) -> Vec2 {
        self.points[index].truncate()
    }

    /// Thumb tip to index tip, z ignored.
    pub fn pinch_distance(&self) -> f32 {
        self.planar(THUMB_TIP).distance(self.planar(INDEX_TIP))
    }

    /// Wrist to middle tip, z ignored.
    pub fn spread_distance(&self) -> f32 {
        self.planar(WRIST).distance(self.planar(MIDDLE_TIP))
    }

    /// Index tip mapped to `[-1, 1]` with y pointing up.
    pub fn pointer(&self) -> Vec2 {
        let tip = self.planar(INDEX_TIP);
        Vec2::new((tip.x - 0.5) * 2.0, -(tip.y - 0.5) * 2.0)
    }
}

/// Hand openness mapped into the clamped expansion range.
pub fn raw_expansion(spread_distance: f32) -> f32 {
    (spread_distance * EXPANSION_GAIN).clamp(EXPANSION_MIN, EXPANSION_MAX)
}

/// A flat landmark slice that cannot describe one hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandmarkError {
    /// Fewer than [`LANDMARK_COUNT`] points.
    TooFew { found: usize },
    /// Landmark `index` has a NaN or infinite coordinate.
    NonFinite { index: usize },
}

impl fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandmarkError::TooFew { found } => {
                write!(f, "expected {} hand landmarks, got {}", LANDMARK_COUNT, found)
            }
            LandmarkError::NonFinite { index } => {
                write!(f, "hand landmark {} is not a finite point", index)
            }
        }
    }
}

impl std::error::Error for LandmarkError {}

/// Discrete output of the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureEvent {
    /// A pinch just engaged; move to the next shape.
    AdvanceShape,
}

/// Two-threshold pinch latch.
///
/// Engages below `engage`, releases at or above `release`, and holds its
/// state for distances in between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PinchLatch {
    pinching: bool,
}

impl PinchLatch {
    pub fn is_pinching(&self) -> bool {
        self.pinching
    }

    /// Feed one distance sample. Returns true only on the not-pinching to
    /// pinching edge.
    pub fn update(&mut self, distance: f32, engage: f32, release: f32) -> bool {
        if distance < engage && !self.pinching {
            self.pinching = true;
            true
        } else {
            if distance >= release {
                self.pinching = false;
            }
            false
        }
    }
}

/// Smoothed gesture signals read by the frame update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    pub hand_detected: bool,
    pub smoothed_position: Vec2,
    /// Always within `[EXPANSION_MIN, EXPANSION_MAX]`.
    pub smoothed_expansion: f32,
    pub is_pinching: bool,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            hand_detected: false,
            smoothed_position: Vec2::ZERO,
            smoothed_expansion: 1.0,
            is_pinching: false,
        }
    }
}

/// Immutable copy of the tracker output, safe to hand across threads.
///
/// `advance_total` counts every pinch edge since the tracker identified by
/// `tracker_id` was created, so a reader that skips intermediate snapshots
/// still sees every advance. A new `tracker_id` restarts the count.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSnapshot {
    pub state: GestureState,
    pub tracker_id: u64,
    pub advance_total: u64,
}

// Zero is left for hand-built snapshots.
static NEXT_TRACKER_ID: AtomicU64 = AtomicU64::new(1);

pub struct GestureTracker {
    id: u64,
    smoothing_factor: f32,
    pinch_engage: f32,
    pinch_release: f32,
    latch: PinchLatch,
    state: GestureState,
    advance_total: u64,
}

impl GestureTracker {
    pub fn new(config: &MorphConfig) -> Self {
        Self {
            id: NEXT_TRACKER_ID.fetch_add(1, Ordering::Relaxed),
            smoothing_factor: config.smoothing_factor,
            pinch_engage: config.pinch_threshold,
            pinch_release: config.pinch_release(),
            latch: PinchLatch::default(),
            state: GestureState::default(),
            advance_total: 0,
        }
    }

    /// Process-unique id, carried in every snapshot.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn snapshot(&self) -> GestureSnapshot {
        GestureSnapshot {
            state: self.state,
            tracker_id: self.id,
            advance_total: self.advance_total,
        }
    }

    /// Consume one detection result. `None` means no hand this frame: the
    /// smoothed values are left untouched so the cloud does not snap. A hand
    /// with non-finite coordinates is treated the same way.
    pub fn update(&mut self, hand: Option<&HandLandmarks>) -> Option<GestureEvent> {
        let Some(hand) = hand.filter(|h| h.is_finite()) else {
            self.state.hand_detected = false;
            return None;
        };

        let alpha = self.smoothing_factor;
        self.state.hand_detected = true;
        self.state.smoothed_position = smooth_vec2(self.state.smoothed_position, hand.pointer(), alpha);

        let advanced = self
            .latch
            .update(hand.pinch_distance(), self.pinch_engage, self.pinch_release);
        self.state.is_pinching = self.latch.is_pinching();

        let expansion = raw_expansion(hand.spread_distance());
        self.state.smoothed_expansion = smooth(self.state.smoothed_expansion, expansion, alpha);

        if advanced {
            self.advance_total += 1;
            Some(GestureEvent::AdvanceShape)
        } else {
            None
        }
    }
}
