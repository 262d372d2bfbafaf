//! Steering systems — actor movement from input and enemy pursuit.

use hecs::World;

use survivor_core::commands::InputState;
use survivor_core::components::{Actor, ActorCombat, Enemy, EnemyProfile};
use survivor_core::constants::{ACTOR_MARGIN, ARENA_HEIGHT, ARENA_WIDTH, PURSUIT_MIN_DISTANCE};
use survivor_core::types::Position;

/// Move the actor along the active input axes and clamp to the arena.
///
/// Each axis contributes its full `speed` independently, so holding two
/// axes yields a displacement of roughly `speed * sqrt(2)`. Diagonal
/// movement is intentionally not normalized.
pub fn move_actor(world: &mut World, input: &InputState) {
    for (_entity, (_actor, pos, combat)) in
        world.query_mut::<(&Actor, &mut Position, &ActorCombat)>()
    {
        if input.up {
            pos.y -= combat.speed;
        }
        if input.down {
            pos.y += combat.speed;
        }
        if input.left {
            pos.x -= combat.speed;
        }
        if input.right {
            pos.x += combat.speed;
        }

        pos.x = pos.x.clamp(ACTOR_MARGIN, ARENA_WIDTH - ACTOR_MARGIN);
        pos.y = pos.y.clamp(ACTOR_MARGIN, ARENA_HEIGHT - ACTOR_MARGIN);
    }
}

/// Move every enemy straight toward the actor's current position.
///
/// Pure pursuit: normalized direction times the enemy's own speed, no
/// pathfinding and no separation — enemies may overlap. Enemies within
/// `PURSUIT_MIN_DISTANCE` of the actor hold position.
pub fn pursue_actor(world: &mut World) {
    let Some(actor_pos) = actor_position(world) else {
        return;
    };

    for (_entity, (_enemy, pos, profile)) in
        world.query_mut::<(&Enemy, &mut Position, &EnemyProfile)>()
    {
        let to_actor = actor_pos.as_dvec2() - pos.as_dvec2();
        let distance = to_actor.length();
        if distance > PURSUIT_MIN_DISTANCE {
            let step = to_actor / distance * profile.speed;
            pos.x += step.x;
            pos.y += step.y;
        }
    }
}

/// Current actor position, if an actor exists.
pub(crate) fn actor_position(world: &World) -> Option<Position> {
    world
        .query::<(&Actor, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}
