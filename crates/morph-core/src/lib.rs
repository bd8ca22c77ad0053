//! Particle morphing driven by hand-gesture input.
//!
//! A fixed-size point cloud eases toward procedurally sampled target shapes
//! every frame, colored by a time-varying palette. Hand landmarks coming from
//! an external detector are smoothed into a rotation pointer and a scale
//! factor, and a hysteresis pinch detector cycles through the shape catalog.
pub mod config;
pub mod gesture;
pub mod math;
pub mod morph;
pub mod palette;
pub mod particle;
pub mod shapes;
pub mod simulation;
pub mod worker;
