//! Events emitted by the simulation for UI and audio feedback.
//!
//! Events are fire-and-forget: the simulation never depends on their
//! delivery. They are drained into each snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKey;

/// Feedback events for the frontend notification/audio system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new session has started.
    SessionStarted,
    /// A wave's roster has been spawned.
    WaveStarted { wave: u32 },
    /// All enemies of the wave are dead; the shop is open.
    WaveCleared { wave: u32 },
    /// An enemy died and the kill reward was credited.
    EnemyKilled { enemy_id: u32, reward: u32 },
    /// A weapon was bought and equipped.
    WeaponPurchased { key: WeaponKey },
    /// Max health was upgraded.
    HealthUpgraded,
    /// A purchase was rejected for lack of coins.
    InsufficientFunds,
    /// The actor died; the session is over.
    GameOver { wave: u32, kills: u32 },
}
