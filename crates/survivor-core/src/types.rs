//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in arena space (logical units).
/// The arena is an 800x600 rectangle with the origin at the top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in arena units per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
///
/// All cooldowns (fire intervals, contact attacks) are gated on
/// `elapsed_ms`, never on wall clock, so the simulation is fully
/// deterministic and replayable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulated time in milliseconds.
    pub elapsed_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Angle toward another position in radians (atan2 convention).
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Speed magnitude (units per tick).
    pub fn speed(&self) -> f64 {
        DVec2::new(self.x, self.y).length()
    }
}

impl SimTime {
    /// Current simulated time in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms += crate::constants::MS_PER_TICK;
    }
}
