//! Terminal frontend
//!
//! Implements the presentation seam with crossterm: a scaled playfield
//! renderer, overlay screens, bell cues, and a held-key input tracker.

mod display;
mod input;

pub use display::TermPresentation;
pub use input::{HostAction, InputTracker};
