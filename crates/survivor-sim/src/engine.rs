//! Session engine — the core of the game.
//!
//! `SessionEngine` owns the hecs ECS world, processes player commands,
//! runs the per-tick system pipeline, and produces `WorldSnapshot`s.
//! Completely headless (no rendering dependency), enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::World;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use survivor_core::commands::{InputState, PlayerCommand};
use survivor_core::components::{Actor, Enemy, Health};
use survivor_core::enums::GamePhase;
use survivor_core::events::GameEvent;
use survivor_core::state::WorldSnapshot;
use survivor_core::types::SimTime;

use crate::economy::{self, Economy};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same wave rosters.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The session engine. Owns the ECS world and all session state.
pub struct SessionEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    /// Latched input intent, consumed each Combat tick.
    input: InputState,
    economy: Economy,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    next_projectile_id: u32,
}

impl SessionEngine {
    /// Create a new session engine with the given config. The session
    /// starts in the Menu phase; nothing ticks until `StartSession`.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            input: InputState::default(),
            economy: Economy::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            next_projectile_id: 0,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. Outside the Combat phase only commands are processed;
    /// no system runs and time stands still.
    pub fn tick(&mut self) -> WorldSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Combat {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.economy, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the economy.
    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Despawn every live enemy and credit them as kills (for tests
    /// exercising the wave-completion transition).
    #[cfg(test)]
    pub fn kill_all_enemies(&mut self) {
        self.despawn_buffer.clear();
        {
            let mut query = self.world.query::<&Enemy>();
            self.despawn_buffer.extend(query.iter().map(|(entity, _)| entity));
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
        self.economy.kills += self.economy.wave_remaining;
        self.economy.wave_remaining = 0;
    }

    /// Apply direct damage to the actor (for tests).
    #[cfg(test)]
    pub fn damage_actor(&mut self, amount: i32) {
        for (_entity, (_actor, health)) in self.world.query_mut::<(&Actor, &mut Health)>() {
            health.current = (health.current - amount).max(0);
        }
    }

    /// Get a mutable reference to the economy (for tests).
    #[cfg(test)]
    pub fn economy_mut(&mut self) -> &mut Economy {
        &mut self.economy
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands that are invalid for the
    /// current phase are ignored.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                if matches!(self.phase, GamePhase::Menu | GamePhase::GameOver) {
                    self.start_session();
                }
            }
            PlayerCommand::SetInput { input } => {
                // Latched regardless of phase; only consumed in Combat.
                self.input = input;
            }
            PlayerCommand::BuyWeapon { key } => {
                if self.phase == GamePhase::Shop {
                    economy::buy_weapon(&mut self.world, &mut self.economy, &mut self.events, key);
                }
            }
            PlayerCommand::BuyHealthUpgrade => {
                if self.phase == GamePhase::Shop {
                    economy::buy_health_upgrade(&mut self.world, &mut self.economy, &mut self.events);
                }
            }
            PlayerCommand::AdvanceWave => {
                if self.phase == GamePhase::Shop {
                    self.advance_wave();
                }
            }
        }
    }

    /// Reset all session state and enter Combat at wave 1. This is the
    /// only point where actor health resets — never between waves.
    fn start_session(&mut self) {
        world_setup::clear_world(&mut self.world, &mut self.despawn_buffer);
        world_setup::spawn_actor(&mut self.world);
        self.economy = Economy::default();
        self.time = SimTime::default();
        self.input = InputState::default();
        self.next_projectile_id = 0;

        self.economy.wave_remaining =
            systems::wave_spawner::spawn_wave(&mut self.world, &mut self.rng, self.economy.wave);
        self.phase = GamePhase::Combat;

        info!("session started");
        self.events.push(GameEvent::SessionStarted);
        self.events.push(GameEvent::WaveStarted {
            wave: self.economy.wave,
        });
    }

    /// Close the shop, bump the wave index, and spawn the next roster.
    fn advance_wave(&mut self) {
        self.economy.wave += 1;
        self.economy.wave_remaining =
            systems::wave_spawner::spawn_wave(&mut self.world, &mut self.rng, self.economy.wave);
        self.phase = GamePhase::Combat;

        debug!("advancing to wave {}", self.economy.wave);
        self.events.push(GameEvent::WaveStarted {
            wave: self.economy.wave,
        });
    }

    /// Run all systems in pipeline order for one Combat tick.
    fn run_systems(&mut self) {
        let now_ms = self.time.now_ms();

        // 1. Actor steering (reads latched input, clamps to the arena)
        systems::steering::move_actor(&mut self.world, &self.input);
        // 2. Fire control (spawns projectiles toward the aim point)
        systems::fire_control::run(
            &mut self.world,
            &self.input,
            now_ms,
            &mut self.next_projectile_id,
        );
        // 3. Projectile advance + range/bounds cull
        systems::projectiles::run(&mut self.world, &mut self.despawn_buffer);
        // 4. Enemy pursuit
        systems::steering::pursue_actor(&mut self.world);
        // 5. Enemy-actor contact damage
        systems::collision::resolve_contact_damage(&mut self.world, now_ms);
        // 6. Projectile-enemy hits (two-phase, deterministic order)
        systems::collision::resolve_projectile_hits(
            &mut self.world,
            &mut self.economy,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 7. Phase transitions
        self.check_game_over();
        if self.phase == GamePhase::Combat {
            self.check_wave_complete();
        }
    }

    /// Combat -> GameOver when the actor's health reaches 0.
    fn check_game_over(&mut self) {
        let dead = {
            let mut query = self.world.query::<(&Actor, &Health)>();
            query
                .iter()
                .next()
                .is_some_and(|(_, (_, health))| health.current <= 0)
        };
        if dead {
            self.phase = GamePhase::GameOver;
            info!(
                "game over at wave {} with {} kills",
                self.economy.wave, self.economy.kills
            );
            self.events.push(GameEvent::GameOver {
                wave: self.economy.wave,
                kills: self.economy.kills,
            });
        }
    }

    /// Combat -> Shop when the wave is cleared. Both the live enemy set
    /// and the remaining counter must agree; they are maintained in
    /// lockstep, so a mismatch is a bookkeeping bug.
    fn check_wave_complete(&mut self) {
        let live_enemies = {
            let mut query = self.world.query::<&Enemy>();
            query.iter().count() as u32
        };
        debug_assert_eq!(live_enemies, self.economy.wave_remaining);

        if live_enemies == 0 && self.economy.wave_remaining == 0 {
            self.phase = GamePhase::Shop;
            debug!("wave {} cleared, opening shop", self.economy.wave);
            self.events.push(GameEvent::WaveCleared {
                wave: self.economy.wave,
            });
        }
    }
}
