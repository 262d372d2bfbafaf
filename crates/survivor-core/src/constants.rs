//! Simulation constants and tuning parameters.
//!
//! All distances are in arena units, all speeds in units per tick,
//! all durations in simulated milliseconds.

/// Simulation tick rate (Hz). One tick per rendered frame.
pub const TICK_RATE: u32 = 60;

/// Simulated milliseconds per tick.
pub const MS_PER_TICK: f64 = 1000.0 / TICK_RATE as f64;

// --- Arena ---

/// Arena width in logical units.
pub const ARENA_WIDTH: f64 = 800.0;

/// Arena height in logical units.
pub const ARENA_HEIGHT: f64 = 600.0;

/// Margin the actor cannot cross (keeps the sprite fully on screen).
pub const ACTOR_MARGIN: f64 = 25.0;

// --- Actor defaults ---

/// Actor spawn position (arena center).
pub const ACTOR_SPAWN_X: f64 = 400.0;
pub const ACTOR_SPAWN_Y: f64 = 300.0;

/// Starting (and default maximum) actor health.
pub const ACTOR_START_HEALTH: i32 = 100;

/// Actor movement speed (units per tick, per active axis).
pub const ACTOR_SPEED: f64 = 3.0;

/// Starting flat damage reduction.
pub const ACTOR_START_ARMOR: i32 = 0;

// --- Collision proxies ---

/// Projectile-enemy hit radius.
pub const PROJECTILE_HIT_RADIUS: f64 = 20.0;

/// Enemy-actor contact radius.
pub const CONTACT_RADIUS: f64 = 30.0;

/// Minimum milliseconds between contact attacks from one enemy.
pub const CONTACT_COOLDOWN_MS: f64 = 1000.0;

/// Floor on contact damage after armor mitigation (chip damage).
pub const MIN_CONTACT_DAMAGE: i32 = 1;

// --- Enemy steering ---

/// Enemies closer to the actor than this do not move (prevents jitter).
pub const PURSUIT_MIN_DISTANCE: f64 = 1.0;

// --- Wave scaling ---

/// Enemy count for wave n is `WAVE_BASE_ENEMIES + WAVE_ENEMIES_PER_WAVE * n`,
/// capped at `WAVE_MAX_ENEMIES`.
pub const WAVE_BASE_ENEMIES: u32 = 5;
pub const WAVE_ENEMIES_PER_WAVE: u32 = 2;
pub const WAVE_MAX_ENEMIES: u32 = 20;

/// Enemy health for wave n is `ENEMY_BASE_HEALTH + ENEMY_HEALTH_PER_WAVE * n`.
pub const ENEMY_BASE_HEALTH: i32 = 20;
pub const ENEMY_HEALTH_PER_WAVE: i32 = 5;

/// Enemy speed for wave n is `ENEMY_BASE_SPEED + ENEMY_SPEED_PER_WAVE * n`.
pub const ENEMY_BASE_SPEED: f64 = 0.5;
pub const ENEMY_SPEED_PER_WAVE: f64 = 0.1;

/// Enemy contact damage for wave n is `ENEMY_BASE_DAMAGE + ENEMY_DAMAGE_PER_WAVE * n`.
pub const ENEMY_BASE_DAMAGE: i32 = 10;
pub const ENEMY_DAMAGE_PER_WAVE: i32 = 2;

/// Probability that a spawned enemy is the Fast kind.
pub const FAST_ENEMY_PROBABILITY: f64 = 0.3;

/// Enemies spawn on a ring around the actor spawn point,
/// at a radius in `[SPAWN_RING_MIN_RADIUS, SPAWN_RING_MAX_RADIUS)`.
pub const SPAWN_RING_MIN_RADIUS: f64 = 400.0;
pub const SPAWN_RING_MAX_RADIUS: f64 = 600.0;

// --- Economy ---

/// Currency balance at session start.
pub const STARTING_COINS: u32 = 100;

/// Kill reward for wave n is `KILL_REWARD_BASE + KILL_REWARD_PER_WAVE * n`.
pub const KILL_REWARD_BASE: u32 = 10;
pub const KILL_REWARD_PER_WAVE: u32 = 2;

/// Cost of one health upgrade.
pub const HEALTH_UPGRADE_COST: u32 = 50;

/// Max-health (and healing) granted by one health upgrade.
pub const HEALTH_UPGRADE_AMOUNT: i32 = 25;
