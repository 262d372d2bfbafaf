//! Entity spawn factories for setting up a session world.

use hecs::{Entity, World};

use survivor_core::components::{Actor, ActorCombat, Health};
use survivor_core::constants::{
    ACTOR_SPAWN_X, ACTOR_SPAWN_Y, ACTOR_SPEED, ACTOR_START_ARMOR, ACTOR_START_HEALTH,
};
use survivor_core::types::Position;
use survivor_core::weapons::Weapon;

/// Spawn the actor at the arena center with default stats and the free
/// starting weapon.
pub fn spawn_actor(world: &mut World) -> Entity {
    world.spawn((
        Actor,
        Position::new(ACTOR_SPAWN_X, ACTOR_SPAWN_Y),
        Health::full(ACTOR_START_HEALTH),
        ActorCombat {
            speed: ACTOR_SPEED,
            armor: ACTOR_START_ARMOR,
            weapon: Weapon::default(),
            last_shot_ms: None,
        },
    ))
}

/// Despawn every entity. Used when starting a fresh session so leftover
/// enemies and projectiles from a previous run never carry over.
pub fn clear_world(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    despawn_buffer.extend(world.iter().map(|entity_ref| entity_ref.entity()));
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
