//! Collision resolution — projectile-enemy hits and enemy-actor contact.
//!
//! Projectile hits are resolved in two phases: candidate records are
//! captured from a consistent start-of-resolution view of positions and
//! health, then damage and despawns are applied as a batch. Projectiles
//! claim hits in ascending projectile id; each consumes at most one
//! enemy — the first still-alive one in ascending enemy id within the
//! hit radius.

use hecs::{Entity, World};
use log::debug;

use survivor_core::components::{Actor, ActorCombat, Enemy, EnemyProfile, Health, Projectile, ProjectileBody};
use survivor_core::constants::{
    CONTACT_COOLDOWN_MS, CONTACT_RADIUS, MIN_CONTACT_DAMAGE, PROJECTILE_HIT_RADIUS,
};
use survivor_core::events::GameEvent;
use survivor_core::types::Position;

use crate::economy::Economy;

struct EnemyRec {
    entity: Entity,
    enemy_id: u32,
    position: Position,
    health: i32,
}

struct ProjectileRec {
    entity: Entity,
    projectile_id: u32,
    position: Position,
    damage: i32,
}

/// Resolve projectile-enemy hits for one tick.
///
/// On a hit the projectile is consumed and the enemy loses the
/// projectile's damage. A kill despawns the enemy, bumps the kill
/// counter, decrements the wave-remaining counter, and credits the
/// wave-scaled reward. A projectile whose only candidates died earlier
/// in the same tick is left in flight, not consumed.
pub fn resolve_projectile_hits(
    world: &mut World,
    economy: &mut Economy,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut enemies: Vec<EnemyRec> = {
        let mut query = world.query::<(&Enemy, &Position, &Health, &EnemyProfile)>();
        query
            .iter()
            .map(|(entity, (_, pos, health, profile))| EnemyRec {
                entity,
                enemy_id: profile.enemy_id,
                position: *pos,
                health: health.current,
            })
            .collect()
    };
    enemies.sort_by_key(|e| e.enemy_id);

    let mut projectiles: Vec<ProjectileRec> = {
        let mut query = world.query::<(&Projectile, &Position, &ProjectileBody)>();
        query
            .iter()
            .map(|(entity, (_, pos, body))| ProjectileRec {
                entity,
                projectile_id: body.projectile_id,
                position: *pos,
                damage: body.damage,
            })
            .collect()
    };
    projectiles.sort_by_key(|p| p.projectile_id);

    despawn_buffer.clear();
    for projectile in &projectiles {
        let hit = enemies.iter_mut().find(|enemy| {
            enemy.health > 0
                && enemy.position.distance_to(&projectile.position) < PROJECTILE_HIT_RADIUS
        });
        let Some(enemy) = hit else {
            continue;
        };

        // Consumed on impact, one enemy per projectile.
        despawn_buffer.push(projectile.entity);
        enemy.health -= projectile.damage;

        if enemy.health <= 0 {
            despawn_buffer.push(enemy.entity);
            economy.kills += 1;
            economy.wave_remaining = economy.wave_remaining.saturating_sub(1);
            let reward = economy.kill_reward();
            economy.coins += reward;
            debug!("enemy {} killed, +{reward} coins", enemy.enemy_id);
            events.push(GameEvent::EnemyKilled {
                enemy_id: enemy.enemy_id,
                reward,
            });
        }
    }

    // Apply phase: write surviving health back, then despawn consumed
    // projectiles and dead enemies.
    for enemy in &enemies {
        if enemy.health > 0 {
            if let Ok(mut health) = world.get::<&mut Health>(enemy.entity) {
                health.current = enemy.health;
            }
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Apply contact damage from every enemy within reach of the actor.
///
/// Each enemy attacks at most once per `CONTACT_COOLDOWN_MS`. Damage is
/// reduced by the actor's armor but floored at `MIN_CONTACT_DAMAGE`, so
/// chip damage always gets through. Actor health clamps at 0.
pub fn resolve_contact_damage(world: &mut World, now_ms: f64) {
    let actor = {
        let mut query = world.query::<(&Actor, &Position, &ActorCombat)>();
        query
            .iter()
            .next()
            .map(|(entity, (_, pos, combat))| (entity, *pos, combat.armor))
    };
    let Some((actor_entity, actor_pos, armor)) = actor else {
        return;
    };

    let mut total_damage = 0;
    for (_entity, (_enemy, pos, profile)) in
        world.query_mut::<(&Enemy, &Position, &mut EnemyProfile)>()
    {
        if pos.distance_to(&actor_pos) >= CONTACT_RADIUS {
            continue;
        }
        let ready = profile
            .last_attack_ms
            .map_or(true, |last| now_ms - last >= CONTACT_COOLDOWN_MS);
        if !ready {
            continue;
        }

        total_damage += (profile.contact_damage - armor).max(MIN_CONTACT_DAMAGE);
        profile.last_attack_ms = Some(now_ms);
    }

    if total_damage > 0 {
        if let Ok(mut health) = world.get::<&mut Health>(actor_entity) {
            health.current = (health.current - total_damage).max(0);
        }
    }
}
