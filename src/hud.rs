//! HUD snapshot helpers
//!
//! Pure reads over `GameState`, shared by any renderer. Nothing here
//! mutates simulation state.

use crate::sim::wave::current_wave;
use crate::sim::{GameState, PowerUp};

/// Static control hint shown at the bottom of the playfield.
pub const CONTROLS_HINT: &str = "WASD: Move  |  SPACE: Shoot  |  Q: Shield  |  E: Dash";

/// Per-frame HUD values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub health: i32,
    pub shield_health: i32,
    pub score: u64,
    pub wave: u32,
    pub elapsed_secs: u64,
    pub shield_active: bool,
    pub dash_ready: bool,
}

impl Hud {
    pub fn capture(state: &GameState) -> Self {
        Self {
            health: state.player.health,
            shield_health: state.player.shield_health,
            score: state.player.score,
            wave: current_wave(state.elapsed_ms),
            elapsed_secs: state.elapsed_ms / 1000,
            shield_active: state.player.shield_active,
            dash_ready: state.player.dash_cooldown_ms == 0,
        }
    }
}

/// Whole seconds left before a power-up expires, rounded up.
pub fn power_up_secs_left(power_up: &PowerUp, now_ms: u64) -> u64 {
    let age = now_ms.saturating_sub(power_up.spawned_at_ms);
    power_up.duration_ms.saturating_sub(age).div_ceil(1000)
}

/// Banner shown when the run ends.
pub fn game_over_banner(name: &str, elapsed_secs: u64) -> String {
    format!("{name} Survived {elapsed_secs}s!")
}
