//! Chaos Survival - a keyboard-driven arcade survival game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawning, game state)
//! - `presentation`: Seam between the core and a host UI (render, cues, screens, input)
//! - `session`: Start/pause/resume/restart lifecycle and the per-frame driver
//! - `term`: Terminal frontend built on crossterm
//! - `settings`: Host preferences loaded from a JSON config file

pub mod hud;
pub mod presentation;
pub mod scores;
pub mod session;
pub mod settings;
pub mod sim;
pub mod term;

pub use presentation::{Cue, NullPresentation, Presentation, Screen};
pub use scores::ScoreBoard;
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (nominal 60 Hz)
    pub const TICK_MS: u64 = 16;

    /// Playfield dimensions (simulation units)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_ACCELERATION: f32 = 0.5;
    pub const PLAYER_FRICTION: f32 = 0.8;
    pub const PLAYER_BASE_SPEED: f32 = 5.0;
    pub const MAX_HEALTH: i32 = 100;
    pub const MAX_SHIELD: i32 = 100;

    /// Bullets
    pub const BULLET_SIZE: f32 = 10.0;
    pub const PLAYER_BULLET_SPEED: f32 = 6.0;
    pub const ENEMY_BULLET_SPEED: f32 = 4.0;
    /// Minimum gap between player shots while the key is held
    pub const SHOT_COOLDOWN_MS: u64 = 300;
    /// Damage a player bullet deals to an enemy
    pub const BULLET_DAMAGE: i32 = 20;

    /// Enemies
    pub const ENEMY_SIZE: f32 = 50.0;
    pub const ENEMY_FIRE_INTERVAL_MS: u64 = 2000;
    pub const ENEMY_BASE_HEALTH: i32 = 30;
    pub const ENEMY_HEALTH_PER_WAVE: i32 = 5;
    pub const ENEMY_SPEED_PER_WAVE: f32 = 0.2;
    /// Damage the player takes from enemy contact or an enemy bullet
    pub const CONTACT_DAMAGE: i32 = 10;
    pub const KILL_SCORE: u64 = 10;

    /// Difficulty escalation
    pub const WAVE_DURATION_MS: u64 = 30_000;
    pub const BASE_SPAWN_INTERVAL_MS: u64 = 2000;
    pub const MIN_SPAWN_INTERVAL_MS: u64 = 500;
    pub const SPAWN_INTERVAL_STEP_MS: u64 = 100;

    /// Power-ups
    pub const POWER_UP_SPAWN_INTERVAL_MS: u64 = 10_000;
    pub const POWER_UP_SIZE: f32 = 30.0;
    pub const POWER_UP_DURATION_MS: u64 = 7000;
    pub const HEAL_AMOUNT: i32 = 20;
    pub const ACCELERATION_BONUS: f32 = 0.2;
    pub const BULLET_SPEED_BONUS: f32 = 2.0;

    /// Dash
    pub const DASH_COOLDOWN_MS: u64 = 2000;
    pub const DASH_DURATION_MS: u64 = 300;
}
