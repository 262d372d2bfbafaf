//! Simulation engine for SURVIVOR.
//!
//! Owns the hecs ECS world, runs the per-tick system pipeline while in
//! the Combat phase, and produces `WorldSnapshot`s for the frontend.

pub mod economy;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SessionEngine, SimConfig};
pub use survivor_core as core;
