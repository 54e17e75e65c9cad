//! Difficulty controller
//!
//! The wave number is a pure function of elapsed session time; spawn
//! cadence and enemy stats scale off it. There is no upper cap — the game
//! is meant to become unwinnable eventually.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Wave for a given elapsed time: one new wave every 30 seconds,
/// starting at 1.
pub fn current_wave(elapsed_ms: u64) -> u32 {
    (elapsed_ms / WAVE_DURATION_MS) as u32 + 1
}

/// Enemy spawn cadence for a wave, floored at 500 ms.
pub fn enemy_spawn_interval_ms(wave: u32) -> u64 {
    BASE_SPAWN_INTERVAL_MS
        .saturating_sub(wave as u64 * SPAWN_INTERVAL_STEP_MS)
        .max(MIN_SPAWN_INTERVAL_MS)
}

pub fn enemy_health(wave: u32) -> i32 {
    ENEMY_BASE_HEALTH + wave as i32 * ENEMY_HEALTH_PER_WAVE
}

/// Descent speed: a uniform roll in [1, 3) plus the wave bonus.
pub fn enemy_speed(wave: u32, rng: &mut Pcg32) -> f32 {
    rng.random_range(1.0..3.0) + wave as f32 * ENEMY_SPEED_PER_WAVE
}
