//! Fire control — gated projectile spawning toward the aim point.

use glam::DVec2;
use hecs::World;

use survivor_core::commands::InputState;
use survivor_core::components::{Actor, ActorCombat, Projectile, ProjectileBody};
use survivor_core::types::{Position, Velocity};

/// Attempt to fire the equipped weapon.
///
/// A shot happens only while the firing signal is asserted and at least
/// `fire_interval_ms` of simulated time has passed since the last shot.
/// The projectile spawns at the actor's position with velocity along the
/// angle to the aim point.
pub fn run(world: &mut World, input: &InputState, now_ms: f64, next_projectile_id: &mut u32) {
    if !input.firing {
        return;
    }

    let mut spawn = None;
    for (_entity, (_actor, pos, combat)) in
        world.query_mut::<(&Actor, &Position, &mut ActorCombat)>()
    {
        let ready = combat
            .last_shot_ms
            .map_or(true, |last| now_ms - last >= combat.weapon.fire_interval_ms);
        if !ready {
            continue;
        }

        let aim = Position::new(input.aim_x, input.aim_y);
        let direction = DVec2::from_angle(pos.angle_to(&aim));
        let velocity = Velocity::new(
            direction.x * combat.weapon.projectile_speed,
            direction.y * combat.weapon.projectile_speed,
        );
        let body = ProjectileBody {
            projectile_id: *next_projectile_id,
            damage: combat.weapon.damage,
            max_range: combat.weapon.range,
            traveled: 0.0,
        };

        spawn = Some((*pos, velocity, body));
        combat.last_shot_ms = Some(now_ms);
    }

    if let Some((position, velocity, body)) = spawn {
        *next_projectile_id += 1;
        world.spawn((Projectile, position, velocity, body));
    }
}
