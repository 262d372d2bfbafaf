//! World snapshot — the complete visible state exposed to the frontend
//! after each tick.
//!
//! Snapshots are read-only views: renderers and UI never mutate the
//! world directly, they only submit commands for the next tick.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, GamePhase};
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};
use crate::weapons::Weapon;

/// Complete world state built after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub actor: ActorView,
    /// Live enemies, ascending by `enemy_id`.
    pub enemies: Vec<EnemyView>,
    /// Live projectiles, ascending by `projectile_id`.
    pub projectiles: Vec<ProjectileView>,
    pub economy: EconomyView,
    /// Events emitted since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// The player-controlled actor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActorView {
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub speed: f64,
    pub armor: i32,
    pub weapon: Weapon,
}

/// A live enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub enemy_id: u32,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub kind: EnemyKind,
}

/// A live projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub projectile_id: u32,
    pub position: Position,
    pub velocity: Velocity,
}

/// Currency and progression counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EconomyView {
    pub coins: u32,
    pub wave: u32,
    pub kills: u32,
    pub wave_remaining: u32,
}
