//! Enemy and power-up spawners
//!
//! Both spawners run as due-timestamp triggers checked at the top of each
//! tick: when a trigger is due it appends to its collection and re-arms
//! itself. Removal happens only in the simulation step. Because elapsed
//! time freezes while paused, pausing suspends both triggers for free.

use glam::{Vec2, vec2};
use rand::Rng;

use super::state::{Enemy, GameState, PowerUp, PowerUpKind};
use super::wave;
use crate::consts::*;

/// Re-derive the enemy spawn cadence and fire any due triggers.
/// `wave` is this tick's wave number.
pub fn run_triggers(state: &mut GameState, wave: u32) {
    let interval = wave::enemy_spawn_interval_ms(wave);
    if interval != state.enemy_spawn_interval_ms {
        // Cadence changed: re-arm from now at the new rate. Missed spawns
        // are not replayed.
        state.enemy_spawn_interval_ms = interval;
        state.next_enemy_spawn_ms = state.elapsed_ms + interval;
        log::debug!("wave {wave}: enemy spawn cadence now {interval} ms");
    }

    if state.elapsed_ms >= state.next_enemy_spawn_ms {
        spawn_enemy(state, wave);
        state.next_enemy_spawn_ms = state.elapsed_ms + state.enemy_spawn_interval_ms;
    }

    if state.elapsed_ms >= state.next_power_up_spawn_ms {
        spawn_power_up(state);
        state.next_power_up_spawn_ms = state.elapsed_ms + POWER_UP_SPAWN_INTERVAL_MS;
    }
}

/// Append one enemy just above the visible area.
pub fn spawn_enemy(state: &mut GameState, wave: u32) {
    let x = state.rng.random_range(0.0..state.arena.x - ENEMY_SIZE);
    let speed = wave::enemy_speed(wave, &mut state.rng);
    state.enemies.push(Enemy {
        pos: vec2(x, -ENEMY_SIZE),
        size: Vec2::splat(ENEMY_SIZE),
        speed,
        health: wave::enemy_health(wave),
        last_shot_ms: state.elapsed_ms,
    });
}

/// Append one power-up somewhere inside the playfield.
pub fn spawn_power_up(state: &mut GameState) {
    let kind = PowerUpKind::ALL[state.rng.random_range(0..PowerUpKind::ALL.len())];
    let x = state.rng.random_range(0.0..state.arena.x - POWER_UP_SIZE);
    let y = state.rng.random_range(0.0..state.arena.y - POWER_UP_SIZE);
    state.power_ups.push(PowerUp {
        pos: vec2(x, y),
        size: Vec2::splat(POWER_UP_SIZE),
        kind,
        spawned_at_ms: state.elapsed_ms,
        duration_ms: POWER_UP_DURATION_MS,
    });
}
