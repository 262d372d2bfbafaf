//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;
use crate::weapons::Weapon;

/// Hit points. Invariant: `0 <= current <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }
}

/// Marks the single player-controlled entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Actor;

/// Marks an entity as a hostile pursuer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks an entity as a live projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Actor combat state: movement, mitigation, and the equipped weapon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorCombat {
    /// Movement speed per active input axis (units per tick).
    pub speed: f64,
    /// Flat damage reduction applied to contact damage.
    pub armor: i32,
    /// Equipped weapon (a copy of a catalog entry).
    pub weapon: Weapon,
    /// Simulated time of the last shot, `None` if never fired.
    pub last_shot_ms: Option<f64>,
}

/// Enemy identity and combat profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyProfile {
    /// Unique within the wave, ascending in spawn order. Collision
    /// resolution enumerates enemies by this id for determinism.
    pub enemy_id: u32,
    pub kind: EnemyKind,
    /// Pursuit speed (units per tick).
    pub speed: f64,
    /// Damage dealt on contact, before armor mitigation.
    pub contact_damage: i32,
    /// Simulated time of the last contact attack, `None` if never attacked.
    pub last_attack_ms: Option<f64>,
}

/// Projectile identity and ballistic state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileBody {
    /// Ascending in fire order across the session. Collision resolution
    /// lets the lowest id claim a contested hit.
    pub projectile_id: u32,
    pub damage: i32,
    /// Maximum travel distance before despawn.
    pub max_range: f64,
    /// Distance traveled so far.
    pub traveled: f64,
}
