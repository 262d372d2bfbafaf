//! Wave generation — procedurally populates the enemy roster for a wave.

use hecs::World;
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use survivor_core::components::{Enemy, EnemyProfile, Health};
use survivor_core::constants::*;
use survivor_core::enums::EnemyKind;
use survivor_core::types::Position;

/// Enemy count for wave `n`: `min(5 + 2n, 20)`.
pub fn enemy_count(wave: u32) -> u32 {
    (WAVE_BASE_ENEMIES + WAVE_ENEMIES_PER_WAVE * wave).min(WAVE_MAX_ENEMIES)
}

/// Enemy stats for wave `n`: (max health, speed, contact damage).
pub fn enemy_stats(wave: u32) -> (i32, f64, i32) {
    (
        ENEMY_BASE_HEALTH + ENEMY_HEALTH_PER_WAVE * wave as i32,
        ENEMY_BASE_SPEED + ENEMY_SPEED_PER_WAVE * wave as f64,
        ENEMY_BASE_DAMAGE + ENEMY_DAMAGE_PER_WAVE * wave as i32,
    )
}

/// Spawn the full roster for wave `n` on a ring around the actor spawn
/// point: random angle in [0, 2pi), random radius in [400, 600). Enemy
/// ids are fresh per wave, ascending in spawn order. Returns the roster
/// size.
///
/// Wave indices start at 1; the state machine never supplies 0.
pub fn spawn_wave(world: &mut World, rng: &mut ChaCha8Rng, wave: u32) -> u32 {
    debug_assert!(wave >= 1, "wave indices start at 1");

    let count = enemy_count(wave);
    let (max_health, speed, contact_damage) = enemy_stats(wave);

    for enemy_id in 0..count {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let radius = rng.gen_range(SPAWN_RING_MIN_RADIUS..SPAWN_RING_MAX_RADIUS);
        let kind = if rng.gen_bool(FAST_ENEMY_PROBABILITY) {
            EnemyKind::Fast
        } else {
            EnemyKind::Normal
        };

        let position = Position::new(
            ACTOR_SPAWN_X + angle.cos() * radius,
            ACTOR_SPAWN_Y + angle.sin() * radius,
        );

        world.spawn((
            Enemy,
            position,
            Health::full(max_health),
            EnemyProfile {
                enemy_id,
                kind,
                speed,
                contact_damage,
                last_attack_ms: None,
            },
        ));
    }

    debug!("wave {wave}: spawned {count} enemies");
    count
}
