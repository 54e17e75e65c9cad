//! Game state and core simulation types
//!
//! Plain data records plus the `GameState` world object. Everything the
//! simulation touches lives here; all of it is mutated only by the tick.

use glam::{Vec2, vec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Created but not started
    Idle,
    /// Active gameplay
    Running,
    /// Suspended; state frozen, spawn triggers included
    Paused,
    /// Run ended; terminal until the next start
    GameOver,
}

/// Things that happened during a tick which the host may want to react to
/// (sound cues, overlays, logging). Drained by the session each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ShotFired,
    /// The player took damage (enemy contact or enemy bullet).
    PlayerHit,
    /// An enemy was destroyed by player fire (score awarded).
    EnemyDestroyed,
    /// The shield went from inactive to active.
    ShieldRaised,
    PowerUpCollected(PowerUpKind),
    GameOver,
}

/// Power-up varieties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Health,
    Shield,
    Speed,
    Bullet,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Health,
        PowerUpKind::Shield,
        PowerUpKind::Speed,
        PowerUpKind::Bullet,
    ];

    /// Label shown next to the pickup while it waits on the field.
    pub fn label(&self) -> &'static str {
        match self {
            PowerUpKind::Health => "HEALTH",
            PowerUpKind::Shield => "SHIELD",
            PowerUpKind::Speed => "SPEED",
            PowerUpKind::Bullet => "BULLET",
        }
    }
}

/// A projectile. Player bullets travel up, enemy bullets travel down;
/// ownership is implied by the collection holding them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Bullet {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A descending enemy
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Descent speed, fixed at spawn from the wave plus a random roll.
    pub speed: f32,
    pub health: i32,
    /// Per-enemy fire timer, set to the spawn time.
    pub last_shot_ms: u64,
}

impl Enemy {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A time-limited collectible
#[derive(Debug, Clone, PartialEq)]
pub struct PowerUp {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PowerUpKind,
    pub spawned_at_ms: u64,
    pub duration_ms: u64,
}

impl PowerUp {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// The player sprite. Exactly one per session; fully reset at start.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Per-tick velocity gain while a direction key is held. Raised
    /// permanently by the Speed power-up.
    pub acceleration: f32,
    pub friction: f32,
    pub base_speed: f32,
    /// Primary health pool, always within [0, 100].
    pub health: i32,
    /// Shield charge, always within [0, 100]. Absorbs damage while the
    /// shield is active; only the Shield power-up restores it.
    pub shield_health: i32,
    /// Monotonically non-decreasing.
    pub score: u64,
    pub bullets: Vec<Bullet>,
    pub shield_active: bool,
    pub dash_cooldown_ms: u64,
    /// When set, velocity is forced to zero once this timestamp passes.
    pub dash_stop_at_ms: Option<u64>,
    /// None until the first shot of the run.
    pub last_shot_ms: Option<u64>,
}

impl Player {
    pub fn new(arena: Vec2) -> Self {
        Self {
            name: "Player".to_string(),
            pos: vec2(arena.x / 2.0 - PLAYER_SIZE / 2.0, arena.y - 100.0),
            vel: Vec2::ZERO,
            size: Vec2::splat(PLAYER_SIZE),
            acceleration: PLAYER_ACCELERATION,
            friction: PLAYER_FRICTION,
            base_speed: PLAYER_BASE_SPEED,
            health: MAX_HEALTH,
            shield_health: MAX_SHIELD,
            score: 0,
            bullets: Vec::new(),
            shield_active: false,
            dash_cooldown_ms: 0,
            dash_stop_at_ms: None,
            last_shot_ms: None,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Route damage to the shield while it is active, otherwise to health.
    /// Both pools clamp at zero.
    pub fn apply_damage(&mut self, amount: i32) {
        if self.shield_active {
            self.shield_health = (self.shield_health - amount).max(0);
        } else {
            self.health = (self.health - amount).max(0);
        }
    }

    /// Restore health, capped at the maximum.
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(MAX_HEALTH);
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, for reproducibility.
    pub seed: u64,
    /// All spawner randomness flows through this.
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Simulation time; advances only while Running.
    pub elapsed_ms: u64,
    pub arena: Vec2,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<Bullet>,
    pub power_ups: Vec<PowerUp>,
    /// Current enemy spawn cadence, re-derived from the wave each tick.
    pub enemy_spawn_interval_ms: u64,
    pub next_enemy_spawn_ms: u64,
    pub next_power_up_spawn_ms: u64,
    /// Pending events, drained by the session each frame.
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// A fully reset world in the Idle phase, spawn triggers armed.
    pub fn new(seed: u64) -> Self {
        let arena = vec2(ARENA_WIDTH, ARENA_HEIGHT);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            elapsed_ms: 0,
            arena,
            player: Player::new(arena),
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            power_ups: Vec::new(),
            enemy_spawn_interval_ms: BASE_SPAWN_INTERVAL_MS,
            next_enemy_spawn_ms: BASE_SPAWN_INTERVAL_MS,
            next_power_up_spawn_ms: POWER_UP_SPAWN_INTERVAL_MS,
            events: Vec::new(),
        }
    }

    /// Restart both spawn triggers a full interval out from now. Used on
    /// resume: a pause never banks a partially elapsed interval.
    pub fn rearm_spawn_timers(&mut self) {
        self.next_enemy_spawn_ms = self.elapsed_ms + self.enemy_spawn_interval_ms;
        self.next_power_up_spawn_ms = self.elapsed_ms + POWER_UP_SPAWN_INTERVAL_MS;
    }
}
