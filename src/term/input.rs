//! Held-key tracking for terminals
//!
//! Terminals speaking the kitty keyboard protocol report press, repeat,
//! and release events; classic terminals only report presses, with the OS
//! key-repeat showing up as repeated presses. A key counts as held while
//! its last event is within a short window, which expires faster than the
//! OS repeat interval, so held keys stay live on both kinds of terminal.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::TickInput;

/// Frames a key stays "held" after its last press/repeat event.
const HOLD_WINDOW: u64 = 4;

/// One-shot commands outside the simulated key set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    TogglePause,
    Restart,
    PlayAgain,
    Quit,
}

#[derive(Debug, Default)]
pub struct InputTracker {
    /// Each tracked key → the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once per frame before sampling input.
    pub fn advance_frame(&mut self) {
        self.frame += 1;
    }

    /// Feed one terminal event. Returns a host action for one-shot keys.
    pub fn note(&mut self, event: &Event) -> Option<HostAction> {
        let Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) = event
        else {
            return None;
        };

        match kind {
            KeyEventKind::Press => {
                self.key_frame.insert(*code, self.frame);
                match code {
                    KeyCode::Esc => Some(HostAction::Quit),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(HostAction::Quit)
                    }
                    KeyCode::Char('p') | KeyCode::Char('P') => Some(HostAction::TogglePause),
                    KeyCode::Char('r') | KeyCode::Char('R') => Some(HostAction::Restart),
                    KeyCode::Enter => Some(HostAction::PlayAgain),
                    _ => None,
                }
            }
            // Repeat refreshes the timestamp so the key stays held.
            KeyEventKind::Repeat => {
                self.key_frame.insert(*code, self.frame);
                None
            }
            // Release removes it immediately (enhanced-keyboard path).
            KeyEventKind::Release => {
                self.key_frame.remove(code);
                None
            }
        }
    }

    fn held(&self, code: KeyCode) -> bool {
        self.key_frame
            .get(&code)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn held_char(&self, ch: char) -> bool {
        self.held(KeyCode::Char(ch)) || self.held(KeyCode::Char(ch.to_ascii_uppercase()))
    }

    /// Pressed-key state for the simulated controls: A/D/W/S move (arrows
    /// too), Space shoots, Q shields, E dashes.
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.held_char('a') || self.held(KeyCode::Left),
            right: self.held_char('d') || self.held(KeyCode::Right),
            up: self.held_char('w') || self.held(KeyCode::Up),
            down: self.held_char('s') || self.held(KeyCode::Down),
            shoot: self.held(KeyCode::Char(' ')),
            shield: self.held_char('q'),
            dash: self.held_char('e'),
        }
    }
}
