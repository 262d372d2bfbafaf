//! Systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — entity state lives in components,
//! session state in the engine.

pub mod collision;
pub mod fire_control;
pub mod projectiles;
pub mod snapshot;
pub mod steering;
pub mod wave_spawner;
