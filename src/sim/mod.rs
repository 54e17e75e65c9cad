//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::Aabb;
pub use state::{
    Bullet, Enemy, GameEvent, GamePhase, GameState, Player, PowerUp, PowerUpKind,
};
pub use tick::{TickInput, tick};
pub use wave::{current_wave, enemy_spawn_interval_ms};
