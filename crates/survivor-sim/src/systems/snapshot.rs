//! Snapshot system: queries the ECS world and builds a complete
//! WorldSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use survivor_core::components::{Actor, ActorCombat, Enemy, EnemyProfile, Health, Projectile, ProjectileBody};
use survivor_core::enums::GamePhase;
use survivor_core::events::GameEvent;
use survivor_core::state::{ActorView, EconomyView, EnemyView, ProjectileView, WorldSnapshot};
use survivor_core::types::{Position, SimTime, Velocity};

use crate::economy::Economy;

/// Build a complete WorldSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    economy: &Economy,
    events: Vec<GameEvent>,
) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        phase,
        actor: build_actor(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        economy: EconomyView {
            coins: economy.coins,
            wave: economy.wave,
            kills: economy.kills,
            wave_remaining: economy.wave_remaining,
        },
        events,
    }
}

fn build_actor(world: &World) -> ActorView {
    world
        .query::<(&Actor, &Position, &Health, &ActorCombat)>()
        .iter()
        .next()
        .map(|(_, (_, pos, health, combat))| ActorView {
            position: *pos,
            health: health.current,
            max_health: health.max,
            speed: combat.speed,
            armor: combat.armor,
            weapon: combat.weapon.clone(),
        })
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Health, &EnemyProfile)>()
        .iter()
        .map(|(_, (_, pos, health, profile))| EnemyView {
            enemy_id: profile.enemy_id,
            position: *pos,
            health: health.current,
            max_health: health.max,
            kind: profile.kind,
        })
        .collect();

    enemies.sort_by_key(|e| e.enemy_id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity, &ProjectileBody)>()
        .iter()
        .map(|(_, (_, pos, vel, body))| ProjectileView {
            projectile_id: body.projectile_id,
            position: *pos,
            velocity: *vel,
        })
        .collect();

    projectiles.sort_by_key(|p| p.projectile_id);
    projectiles
}
