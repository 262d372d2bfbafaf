//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and drained at the next tick boundary. Commands
//! that are invalid for the current phase are ignored (no-ops), never
//! errors.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKey;

/// The abstracted input intent, latched between updates and consumed
/// each Combat tick. Raw keyboard/mouse capture is the frontend's
/// concern; the simulation only ever sees this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Aim point in arena coordinates.
    pub aim_x: f64,
    pub aim_y: f64,
    /// Whether the fire control is held down.
    pub firing: bool,
}

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new session (from Menu or GameOver). Resets the economy,
    /// actor, and wave index.
    StartSession,
    /// Replace the latched input intent.
    SetInput { input: InputState },

    // --- Shop commands (valid only in the Shop phase) ---
    /// Buy and equip a weapon from the catalog.
    BuyWeapon { key: WeaponKey },
    /// Buy a permanent max-health upgrade.
    BuyHealthUpgrade,
    /// Close the shop and start the next wave.
    AdvanceWave,
}
