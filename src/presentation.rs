//! Seam between the simulation core and a host UI
//!
//! The core never talks to a screen, speaker, or keyboard directly; it
//! calls this trait. Every method is infallible from the core's point of
//! view — a host that cannot show an overlay or play a sound simply does
//! nothing.

use crate::sim::{GameState, TickInput};

/// One-shot sound effects the core may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Shoot,
    Hit,
    /// Shield transitioned from inactive to active.
    ShieldToggle,
    GameOver,
}

/// Overlay screens the host can show or hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Pause,
    GameOver,
}

pub trait Presentation {
    /// Draw the current snapshot. Must not mutate simulation state.
    fn render_frame(&mut self, state: &GameState);
    /// Fire-and-forget sound effect; best-effort.
    fn play_cue(&mut self, cue: Cue);
    fn show_screen(&mut self, screen: Screen);
    fn hide_screen(&mut self, screen: Screen);
    /// Current pressed-key state for the simulated controls.
    fn read_input(&mut self) -> TickInput;
    /// Optional display name; the session falls back to "Player".
    fn player_name(&self) -> Option<String> {
        None
    }
}

/// A presentation that renders nowhere and reports a fixed input state.
/// Useful for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullPresentation {
    /// Input reported to the session each frame.
    pub input: TickInput,
}

impl Presentation for NullPresentation {
    fn render_frame(&mut self, _state: &GameState) {}
    fn play_cue(&mut self, _cue: Cue) {}
    fn show_screen(&mut self, _screen: Screen) {}
    fn hide_screen(&mut self, _screen: Screen) {}
    fn read_input(&mut self) -> TickInput {
        self.input
    }
}
