//! Projectile kinematics — advance positions and cull spent projectiles.

use hecs::{Entity, World};

use survivor_core::components::{Projectile, ProjectileBody};
use survivor_core::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use survivor_core::types::{Position, Velocity};

/// Advance every projectile by its velocity and accumulate traveled
/// distance. Projectiles are removed exactly when their traveled
/// distance reaches `max_range` or their position leaves the arena —
/// never earlier. Uses a pre-allocated buffer to avoid per-tick
/// allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_projectile, pos, vel, body)) in
        world.query_mut::<(&Projectile, &mut Position, &Velocity, &mut ProjectileBody)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;
        body.traveled += vel.speed();

        let in_bounds =
            pos.x > 0.0 && pos.x < ARENA_WIDTH && pos.y > 0.0 && pos.y < ARENA_HEIGHT;
        if body.traveled >= body.max_range || !in_bounds {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
