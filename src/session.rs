//! Session controller
//!
//! Owns the world, the presentation collaborator, and the scoreboard, and
//! drives the Idle → Running → Paused ⇄ Running → GameOver lifecycle. The
//! host calls `frame` once per display refresh; the return value says
//! whether the loop should keep re-arming itself.

use crate::presentation::{Cue, Presentation, Screen};
use crate::scores::ScoreBoard;
use crate::sim::wave::current_wave;
use crate::sim::{GameEvent, GamePhase, GameState, tick};

pub struct Session<P: Presentation> {
    presentation: P,
    state: GameState,
    scores: ScoreBoard,
    base_seed: u64,
    runs: u64,
}

impl<P: Presentation> Session<P> {
    pub fn new(presentation: P, seed: u64) -> Self {
        Self {
            presentation,
            state: GameState::new(seed),
            scores: ScoreBoard::new(),
            base_seed: seed,
            runs: 0,
        }
    }

    /// Reset the world and begin running.
    pub fn start_game(&mut self) {
        // Distinct but reproducible seed for each run of the session.
        let seed = self
            .base_seed
            .wrapping_add(self.runs.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.runs += 1;

        let mut state = GameState::new(seed);
        if let Some(name) = self.presentation.player_name() {
            state.player.name = name;
        }
        state.phase = GamePhase::Running;
        self.state = state;

        self.presentation.hide_screen(Screen::Pause);
        self.presentation.hide_screen(Screen::GameOver);
        log::info!("session started (run {}, seed {seed:#x})", self.runs);
    }

    /// Suspend or resume the running game. No effect in other phases.
    pub fn toggle_pause(&mut self) {
        match self.state.phase {
            GamePhase::Running => {
                self.state.phase = GamePhase::Paused;
                self.presentation.show_screen(Screen::Pause);
            }
            GamePhase::Paused => {
                self.state.phase = GamePhase::Running;
                // Resume waits a full spawn interval, not the remainder.
                self.state.rearm_spawn_timers();
                self.presentation.hide_screen(Screen::Pause);
            }
            _ => {}
        }
    }

    /// Full-reload equivalent: the scoreboard goes too.
    pub fn restart_game(&mut self) {
        self.scores = ScoreBoard::new();
        self.start_game();
    }

    /// Hide the game-over overlay and start a fresh run, keeping the
    /// scoreboard.
    pub fn play_again(&mut self) {
        self.presentation.hide_screen(Screen::GameOver);
        self.start_game();
    }

    /// One tick + render. Returns whether the host should keep scheduling
    /// frames: false while idle, paused, or after game over.
    pub fn frame(&mut self) -> bool {
        if self.state.phase != GamePhase::Running {
            return false;
        }

        let input = self.presentation.read_input();
        tick(&mut self.state, &input);

        let mut ended = false;
        for event in self.state.events.drain(..) {
            match event {
                GameEvent::ShotFired => self.presentation.play_cue(Cue::Shoot),
                GameEvent::PlayerHit => self.presentation.play_cue(Cue::Hit),
                GameEvent::ShieldRaised => self.presentation.play_cue(Cue::ShieldToggle),
                GameEvent::GameOver => {
                    ended = true;
                    self.presentation.play_cue(Cue::GameOver);
                }
                GameEvent::EnemyDestroyed | GameEvent::PowerUpCollected(_) => {}
            }
        }

        self.presentation.render_frame(&self.state);

        if ended {
            let player = &self.state.player;
            let wave = current_wave(self.state.elapsed_ms);
            match self.scores.record(
                player.name.clone(),
                player.score,
                wave,
                self.state.elapsed_ms,
            ) {
                Some(rank) => log::info!(
                    "run over: score {}, wave {wave}, rank {rank}",
                    player.score
                ),
                None => log::info!("run over: score {}, wave {wave}", player.score),
            }
            self.presentation.show_screen(Screen::GameOver);
        }

        self.state.phase == GamePhase::Running
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// The host side of the seam, e.g. to feed input events.
    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }
}
