//! Currency accounting and shop purchase logic.

use hecs::World;
use log::debug;

use survivor_core::components::{Actor, ActorCombat, Health};
use survivor_core::constants::{
    HEALTH_UPGRADE_AMOUNT, HEALTH_UPGRADE_COST, KILL_REWARD_BASE, KILL_REWARD_PER_WAVE,
    STARTING_COINS,
};
use survivor_core::enums::WeaponKey;
use survivor_core::events::GameEvent;
use survivor_core::weapons::Weapon;

/// Currency balance and progression counters for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Economy {
    pub coins: u32,
    /// Current wave index, starts at 1 and only increases.
    pub wave: u32,
    pub kills: u32,
    /// Enemies still alive in the current wave. Maintained in lockstep
    /// with the live enemy set; collision resolution decrements it on
    /// every kill.
    pub wave_remaining: u32,
}

impl Default for Economy {
    fn default() -> Self {
        Self {
            coins: STARTING_COINS,
            wave: 1,
            kills: 0,
            wave_remaining: 0,
        }
    }
}

impl Economy {
    /// Coins credited per kill at the current wave: `10 + 2n`.
    pub fn kill_reward(&self) -> u32 {
        KILL_REWARD_BASE + KILL_REWARD_PER_WAVE * self.wave
    }
}

/// Buy and equip a weapon; a no-op with feedback when coins fall short.
/// Equipping is a pure substitution, and re-buying an already equipped
/// weapon is allowed.
pub fn buy_weapon(
    world: &mut World,
    economy: &mut Economy,
    events: &mut Vec<GameEvent>,
    key: WeaponKey,
) {
    let weapon = Weapon::get(key);
    if economy.coins < weapon.price {
        events.push(GameEvent::InsufficientFunds);
        return;
    }

    economy.coins -= weapon.price;
    debug!("purchased {key:?} for {} coins", weapon.price);
    for (_entity, (_actor, combat)) in world.query_mut::<(&Actor, &mut ActorCombat)>() {
        combat.weapon = weapon.clone();
    }
    events.push(GameEvent::WeaponPurchased { key });
}

/// Buy a permanent max-health upgrade; heals by the same amount, capped
/// at the new maximum. Upgrades stack without limit.
pub fn buy_health_upgrade(world: &mut World, economy: &mut Economy, events: &mut Vec<GameEvent>) {
    if economy.coins < HEALTH_UPGRADE_COST {
        events.push(GameEvent::InsufficientFunds);
        return;
    }

    economy.coins -= HEALTH_UPGRADE_COST;
    for (_entity, (_actor, health)) in world.query_mut::<(&Actor, &mut Health)>() {
        health.max += HEALTH_UPGRADE_AMOUNT;
        health.current = (health.current + HEALTH_UPGRADE_AMOUNT).min(health.max);
    }
    events.push(GameEvent::HealthUpgraded);
}
