//! Detection on its own thread.
//!
//! A [`LandmarkSource`] is driven by a tracker thread that publishes
//! [`GestureSnapshot`]s into a single-slot [`GestureSlot`]. The render side
//! drains the latest snapshot once per frame. Older snapshots are simply
//! overwritten; the cumulative advance counter in each snapshot keeps shape
//! switches from being lost, and its tracker id lets a restarted tracker
//! count from zero again.

use std::sync::{Arc, Mutex, MutexGuard};
#[cfg(not(target_arch = "wasm32"))]
use std::thread::{self, JoinHandle};

use crate::config::MorphConfig;
use crate::gesture::{GestureSnapshot, GestureTracker, HandLandmarks};
use crate::simulation::Simulation;

/// One result from the hand-landmark detector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Detection {
    Hand(HandLandmarks),
    NoHand,
}

impl Detection {
    pub fn hand(&self) -> Option<&HandLandmarks> {
        match self {
            Detection::Hand(hand) => Some(hand),
            Detection::NoHand => None,
        }
    }
}

/// Anything that can deliver detector results, blocking as needed.
pub trait LandmarkSource: Send + 'static {
    /// Next result, or `None` once the source is exhausted.
    fn next_detection(&mut self) -> Option<Detection>;
}

impl<I> LandmarkSource for I
where
    I: Iterator<Item = Detection> + Send + 'static,
{
    fn next_detection(&mut self) -> Option<Detection> {
        self.next()
    }
}

/// Latest-wins mailbox between the tracker and the render loop.
#[derive(Clone, Default)]
pub struct GestureSlot {
    inner: Arc<Mutex<Option<GestureSnapshot>>>,
}

impl GestureSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<GestureSnapshot>> {
        // A panicking writer leaves a plain Copy value behind; keep using it
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace whatever is pending with `snapshot`.
    pub fn publish(&self, snapshot: GestureSnapshot) {
        *self.lock() = Some(snapshot);
    }

    /// Remove and return the pending snapshot, if any.
    pub fn take(&self) -> Option<GestureSnapshot> {
        self.lock().take()
    }

    /// Apply the pending snapshot to `sim`. Returns false when nothing new
    /// was published since the last call.
    pub fn drain_into(&self, sim: &mut Simulation) -> bool {
        match self.take() {
            Some(snapshot) => {
                sim.apply_snapshot(&snapshot);
                true
            }
            None => false,
        }
    }
}

/// Run `source` through a fresh tracker until it is exhausted, publishing
/// after every detection.
pub fn run_tracker<S: LandmarkSource>(mut source: S, config: &MorphConfig, slot: &GestureSlot) {
    let mut tracker = GestureTracker::new(config);
    while let Some(detection) = source.next_detection() {
        tracker.update(detection.hand());
        slot.publish(tracker.snapshot());
    }
}

/// Spawn a tracker thread for `source` and return the slot it publishes to.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_tracker<S: LandmarkSource>(source: S, config: MorphConfig) -> (GestureSlot, JoinHandle<()>) {
    let slot = GestureSlot::new();
    let writer = slot.clone();
    let handle = thread::spawn(move || run_tracker(source, &config, &writer));
    (slot, handle)
}
