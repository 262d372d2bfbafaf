//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level session state).
///
/// `Menu -> Combat <-> Shop`, with `Combat -> GameOver` terminal until
/// a new session is started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Combat,
    Shop,
    GameOver,
}

/// Enemy kind — a presentation hint for rendering.
///
/// Stats are driven entirely by the wave index; the kind does not
/// affect them. Only Normal and Fast are currently produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Normal,
    Fast,
    Tank,
}

/// Catalog key for purchasable weapons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponKey {
    Pistol,
    Shotgun,
    Rifle,
    Laser,
}

impl WeaponKey {
    /// All keys in stable catalog order (cheapest first).
    pub const ALL: [WeaponKey; 4] = [
        WeaponKey::Pistol,
        WeaponKey::Shotgun,
        WeaponKey::Rifle,
        WeaponKey::Laser,
    ];
}
