//! Chaos Survival entry point
//!
//! Sets up the terminal, the input thread, and the fixed-cadence frame
//! loop, and wires host actions into the session controller.

use std::io::{BufWriter, stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal,
};

use chaos_survival::Session;
use chaos_survival::Settings;
use chaos_survival::consts::TICK_MS;
use chaos_survival::sim::GamePhase;
use chaos_survival::term::{HostAction, TermPresentation};

const FRAME: Duration = Duration::from_millis(TICK_MS);

fn main() -> std::io::Result<()> {
    env_logger::init();
    let settings = Settings::load();

    terminal::enable_raw_mode()?;
    stdout().execute(terminal::EnterAlternateScreen)?;
    stdout().execute(cursor::Hide)?;
    // Ask for key-release events; kitty-protocol terminals support this,
    // everything else falls back to the hold-window tracker.
    let keyboard_enhanced = stdout()
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads on a dedicated thread; the frame loop never waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&rx, &settings);

    // Always restore the terminal, even on error.
    if keyboard_enhanced {
        let _ = stdout().execute(PopKeyboardEnhancementFlags);
    }
    let _ = stdout().execute(cursor::Show);
    let _ = stdout().execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    result
}

fn run(rx: &mpsc::Receiver<Event>, settings: &Settings) -> std::io::Result<()> {
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let presentation = TermPresentation::new(
        BufWriter::new(stdout()),
        settings.player_name.clone(),
        settings.sound,
        settings.show_hints,
    );
    let mut session = Session::new(presentation, seed);
    session.start_game();

    loop {
        let frame_start = Instant::now();

        session.presentation_mut().tracker.advance_frame();
        while let Ok(ev) = rx.try_recv() {
            match session.presentation_mut().tracker.note(&ev) {
                Some(HostAction::Quit) => return Ok(()),
                Some(HostAction::TogglePause) => session.toggle_pause(),
                Some(HostAction::Restart) => session.restart_game(),
                Some(HostAction::PlayAgain) => {
                    if session.state().phase == GamePhase::GameOver {
                        session.play_again();
                    }
                }
                None => {}
            }
        }

        // Ticks and renders only while running; paused and game-over
        // frames just keep polling for host actions.
        session.frame();

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}
