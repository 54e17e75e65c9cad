//! Terminal rendering — all terminal I/O lives here
//!
//! Translates `GameState` into crossterm commands; no game logic. The
//! playfield is scaled from simulation coordinates to the current terminal
//! size every frame: row 0 carries the HUD, the last row the control hint,
//! everything in between is the arena.

use std::io::{self, Write};

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
    terminal,
};
use glam::Vec2;

use super::input::InputTracker;
use crate::hud::{self, CONTROLS_HINT, Hud};
use crate::presentation::{Cue, Presentation, Screen};
use crate::sim::{GameState, TickInput};

const C_PLAYER: Color = Color::Blue;
const C_SHIELD: Color = Color::Cyan;
const C_PLAYER_BULLET: Color = Color::Red;
const C_ENEMY: Color = Color::Green;
const C_ENEMY_BULLET: Color = Color::DarkYellow;
const C_POWER_UP: Color = Color::Yellow;
const C_HUD: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_OVERLAY: Color = Color::White;

/// Crossterm-backed presentation host.
pub struct TermPresentation<W: Write> {
    out: W,
    pub tracker: InputTracker,
    player_name: String,
    sound: bool,
    show_hints: bool,
    /// HUD values from the last rendered frame, for the game-over overlay.
    last_hud: Option<Hud>,
}

impl<W: Write> TermPresentation<W> {
    pub fn new(out: W, player_name: String, sound: bool, show_hints: bool) -> Self {
        Self {
            out,
            tracker: InputTracker::new(),
            player_name,
            sound,
            show_hints,
            last_hud: None,
        }
    }

    fn draw(&mut self, state: &GameState) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        if cols < 20 || rows < 10 {
            return Ok(()); // too small to bother
        }
        let sx = cols as f32 / state.arena.x;
        let sy = (rows.saturating_sub(2)) as f32 / state.arena.y;

        let snapshot = Hud::capture(state);
        self.last_hud = Some(snapshot);

        let out = &mut self.out;
        out.queue(terminal::Clear(terminal::ClearType::All))?;

        // HUD row
        out.queue(cursor::MoveTo(0, 0))?;
        out.queue(style::SetForegroundColor(C_HUD))?;
        out.queue(Print(format!(
            "Health: {:>3}  Score: {:>5}  Wave: {:>2}  Time: {:>4}s",
            snapshot.health, snapshot.score, snapshot.wave, snapshot.elapsed_secs
        )))?;
        let shield_text = format!("Shield: {:>3}%", snapshot.shield_health);
        out.queue(cursor::MoveTo(
            cols.saturating_sub(shield_text.len() as u16),
            0,
        ))?;
        let shield_color = if snapshot.shield_active {
            C_SHIELD
        } else {
            C_HUD
        };
        out.queue(style::SetForegroundColor(shield_color))?;
        out.queue(Print(shield_text))?;

        // Power-ups, each with its label and countdown
        for power_up in &state.power_ups {
            let rect = scaled_rect(power_up.pos, power_up.size, sx, sy);
            fill_rect(out, rect, '▒', C_POWER_UP, cols, rows)?;
            let (x, y, w, h) = rect;
            let label = power_up.kind.label();
            let secs = hud::power_up_secs_left(power_up, state.elapsed_ms);
            print_clipped(
                out,
                x + w / 2 - label.len() as i32 / 2,
                y - 1,
                label,
                C_POWER_UP,
                cols,
                rows,
            )?;
            print_clipped(
                out,
                x + w / 2,
                y + h,
                &format!("{secs}s"),
                C_POWER_UP,
                cols,
                rows,
            )?;
        }

        // Projectiles and enemies
        for bullet in &state.player.bullets {
            let rect = scaled_rect(bullet.pos, bullet.size, sx, sy);
            fill_rect(out, rect, '•', C_PLAYER_BULLET, cols, rows)?;
        }
        for enemy in &state.enemies {
            let rect = scaled_rect(enemy.pos, enemy.size, sx, sy);
            fill_rect(out, rect, '▓', C_ENEMY, cols, rows)?;
        }
        for bullet in &state.enemy_bullets {
            let rect = scaled_rect(bullet.pos, bullet.size, sx, sy);
            fill_rect(out, rect, '▪', C_ENEMY_BULLET, cols, rows)?;
        }

        // Player, ringed while the shield is up
        let player_rect = scaled_rect(state.player.pos, state.player.size, sx, sy);
        fill_rect(out, player_rect, '█', C_PLAYER, cols, rows)?;
        if state.player.shield_active {
            outline_rect(out, player_rect, '·', C_SHIELD, cols, rows)?;
        }

        if self.show_hints {
            print_centered(out, rows.saturating_sub(1), CONTROLS_HINT, C_HINT, cols)?;
        }

        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
        out.flush()
    }

    fn draw_overlay(&mut self, lines: &[String]) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let top = (rows / 2).saturating_sub(lines.len() as u16 / 2);
        let out = &mut self.out;
        out.queue(style::SetForegroundColor(C_OVERLAY))?;
        for (i, line) in lines.iter().enumerate() {
            let col = (cols / 2).saturating_sub(line.chars().count() as u16 / 2);
            out.queue(cursor::MoveTo(col, top + i as u16))?;
            out.queue(Print(line))?;
        }
        out.queue(style::ResetColor)?;
        out.flush()
    }
}

impl<W: Write> Presentation for TermPresentation<W> {
    fn render_frame(&mut self, state: &GameState) {
        // A failed draw (resized or closed terminal) is not the sim's problem.
        let _ = self.draw(state);
    }

    fn play_cue(&mut self, cue: Cue) {
        if !self.sound {
            return;
        }
        // One bell for impacts; anything fancier needs a real mixer.
        if matches!(cue, Cue::Hit | Cue::GameOver) {
            let _ = self.out.write_all(b"\x07");
            let _ = self.out.flush();
        }
    }

    fn show_screen(&mut self, screen: Screen) {
        let lines = match screen {
            Screen::Pause => vec![
                "PAUSED".to_string(),
                String::new(),
                "P: Resume   R: Restart   ESC: Quit".to_string(),
            ],
            Screen::GameOver => {
                let (score, secs) = self
                    .last_hud
                    .map(|h| (h.score, h.elapsed_secs))
                    .unwrap_or((0, 0));
                vec![
                    hud::game_over_banner(&self.player_name, secs),
                    format!("Final score: {score}"),
                    String::new(),
                    "ENTER: Play Again   R: Restart   ESC: Quit".to_string(),
                ]
            }
        };
        let _ = self.draw_overlay(&lines);
    }

    fn hide_screen(&mut self, _screen: Screen) {
        // The next rendered frame clears the whole screen anyway.
    }

    fn read_input(&mut self) -> TickInput {
        self.tracker.tick_input()
    }

    fn player_name(&self) -> Option<String> {
        Some(self.player_name.clone())
    }
}

/// Cell rectangle for a simulation-space box. Row 0 is the HUD, so the
/// playfield starts one row down.
fn scaled_rect(pos: Vec2, size: Vec2, sx: f32, sy: f32) -> (i32, i32, i32, i32) {
    let x = (pos.x * sx).round() as i32;
    let y = (pos.y * sy).round() as i32 + 1;
    let w = ((size.x * sx).round() as i32).max(1);
    let h = ((size.y * sy).round() as i32).max(1);
    (x, y, w, h)
}

fn fill_rect<W: Write>(
    out: &mut W,
    rect: (i32, i32, i32, i32),
    ch: char,
    color: Color,
    cols: u16,
    rows: u16,
) -> io::Result<()> {
    let (x, y, w, h) = rect;
    let max_row = rows.saturating_sub(1) as i32; // last row is the hint line
    out.queue(style::SetForegroundColor(color))?;
    for row in y.max(1)..(y + h).min(max_row) {
        for col in x.max(0)..(x + w).min(cols as i32) {
            out.queue(cursor::MoveTo(col as u16, row as u16))?;
            out.queue(Print(ch))?;
        }
    }
    Ok(())
}

fn outline_rect<W: Write>(
    out: &mut W,
    rect: (i32, i32, i32, i32),
    ch: char,
    color: Color,
    cols: u16,
    rows: u16,
) -> io::Result<()> {
    let (x, y, w, h) = (rect.0 - 1, rect.1 - 1, rect.2 + 2, rect.3 + 2);
    let max_row = rows.saturating_sub(1) as i32;
    out.queue(style::SetForegroundColor(color))?;
    for row in y.max(1)..(y + h).min(max_row) {
        for col in x.max(0)..(x + w).min(cols as i32) {
            if row == y || row == y + h - 1 || col == x || col == x + w - 1 {
                out.queue(cursor::MoveTo(col as u16, row as u16))?;
                out.queue(Print(ch))?;
            }
        }
    }
    Ok(())
}

fn print_clipped<W: Write>(
    out: &mut W,
    col: i32,
    row: i32,
    text: &str,
    color: Color,
    cols: u16,
    rows: u16,
) -> io::Result<()> {
    let max_row = rows.saturating_sub(1) as i32;
    if row < 1 || row >= max_row || col < 0 || col >= cols as i32 {
        return Ok(());
    }
    out.queue(cursor::MoveTo(col as u16, row as u16))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn print_centered<W: Write>(
    out: &mut W,
    row: u16,
    text: &str,
    color: Color,
    cols: u16,
) -> io::Result<()> {
    let col = (cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}
