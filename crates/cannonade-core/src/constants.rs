//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 15;

// --- Field ---

/// Default field width (pixels).
pub const FIELD_WIDTH: f64 = 800.0;

/// Default field height (pixels).
pub const FIELD_HEIGHT: f64 = 600.0;

/// Downward acceleration added to projectile velocity each tick.
pub const GRAVITY: f64 = 2.0;

/// Velocity retained (and negated) on the axis perpendicular to a wall.
pub const REFLECT_ORTHOGONAL: f64 = 0.8;

/// Velocity retained on the axis parallel to a wall.
pub const REFLECT_PARALLEL: f64 = 0.9;

// --- Projectiles ---

/// Time step used when advancing fired shells.
pub const SHELL_TIME_STEP: f64 = 1.0;

/// Squared speed below which a projectile resting near the floor is spent.
pub const SPENT_SPEED_SQ: f64 = 4.0;

/// Standard shell radius.
pub const STANDARD_SHELL_RADIUS: f64 = 20.0;

/// Light shell radius and muzzle velocity multiplier.
pub const LIGHT_SHELL_RADIUS: f64 = 10.0;
pub const LIGHT_SHELL_SPEED_FACTOR: f64 = 1.5;

/// Heavy shell radius and muzzle velocity multiplier.
pub const HEAVY_SHELL_RADIUS: f64 = 30.0;
pub const HEAVY_SHELL_SPEED_FACTOR: f64 = 0.75;

// --- Cannons ---

/// Distance the cannon keeps from the side walls.
pub const CANNON_MARGIN: f64 = 30.0;

/// Height of the cannon's pivot above the bottom of the field.
pub const CANNON_ELEVATION: f64 = 25.0;

/// Power right after firing.
pub const CANNON_MIN_POWER: f64 = 10.0;

/// Power at which charging saturates.
pub const CANNON_MAX_POWER: f64 = 100.0;

/// Power gained by the player's cannon per tick while charging.
pub const CHARGE_INCREMENT: f64 = 2.0;

/// Horizontal step per arrow key press.
pub const PLAYER_STEP: f64 = 40.0;

/// Cannon body (rectangle) size.
pub const CANNON_BODY_WIDTH: f64 = 60.0;
pub const CANNON_BODY_HEIGHT: f64 = 20.0;

/// Wheel offset from the pivot and wheel radius.
pub const CANNON_WHEEL_OFFSET_X: f64 = 20.0;
pub const CANNON_WHEEL_OFFSET_Y: f64 = 18.0;
pub const CANNON_WHEEL_RADIUS: f64 = 7.0;

/// Half width of the barrel quadrilateral.
pub const CANNON_BARREL_HALF_WIDTH: f64 = 5.0;

// --- AI gunner ---

/// Horizontal step toward the tracked target per tick.
pub const AI_STEP: f64 = 2.0;

/// Per-tick probability of starting a charge while idle.
pub const AI_ACTIVATE_CHANCE: f64 = 0.3;

/// Inclusive range of the randomized per-tick charge increment.
pub const AI_GAIN_MIN: u32 = 1;
pub const AI_GAIN_MAX: u32 = 3;

// --- Targets ---

/// Base spawn radius of ordinary targets, before difficulty shrinking.
pub const TARGET_BASE_RADIUS: i64 = 30;

/// Base spawn radius of large targets.
pub const LARGE_TARGET_BASE_RADIUS: i64 = 100;

/// Smallest radius any target can spawn with.
pub const MIN_TARGET_RADIUS: i64 = 1;

/// Component bound of the drift velocity: slow and fast drifters.
pub const DRIFT_SPEED: i64 = 2;
pub const FAST_DRIFT_SPEED: i64 = 10;

/// Orbit phase advance per tick (degrees).
pub const ORBIT_STEP_DEG: f64 = 5.0;

/// Inset from the walls for orbiting target spawn centers.
pub const ORBIT_SPAWN_MARGIN: i64 = 50;

/// Per-tick probability that a bomb dropper releases a bomb.
pub const BOMB_DROP_CHANCE: f64 = 0.04;

/// Bomb radius, initial downward speed, and integration step.
pub const BOMB_RADIUS: f64 = 10.0;
pub const BOMB_SPEED: f64 = 5.0;
pub const BOMB_TIME_STEP: f64 = 0.5;
pub const BOMB_GRAVITY: f64 = 0.0;

// --- Waves ---

/// Targets of each kind per wave (the wave composition multiplier).
pub const TARGETS_PER_WAVE: u32 = 3;

// --- Display ---

/// Top-left corner of the score table and its line spacing.
pub const SCORE_TEXT_X: f64 = 10.0;
pub const SCORE_TEXT_Y: f64 = 10.0;
pub const SCORE_LINE_SPACING: f64 = 30.0;
