//! Terminal runner (default binary).
//!
//! Steps the game once per frame at a fixed 60 FPS. Keys read between two
//! frames are folded into that frame's input; rendering goes through the
//! framebuffer renderer in `frametris-term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use frametris::core::GameState;
use frametris::input::FrameInputCollector;
use frametris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use frametris::types::FRAME_MS;
use frametris::{EventLog, RunConfig};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    let mut log: EventLog = match &config.log_path {
        Some(path) => EventLog::open(path)?,
        None => EventLog::disabled(),
    };
    let mut game = GameState::new(config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &mut log, &config);

    // Always try to restore terminal state before reporting anything.
    let restored = term.exit();
    log.flush();
    if let Some(err) = log.take_failure() {
        eprintln!("event log disabled: {:#}", err);
    }
    result?;
    restored?;

    println!(
        "Final score: {} (level {}, {} lines)",
        game.score(),
        game.level(),
        game.lines()
    );
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    log: &mut EventLog,
    config: &RunConfig,
) -> Result<()> {
    let view = GameView::default();
    let mut input =
        FrameInputCollector::new().with_key_release_timeout_ms(config.key_release_timeout_ms);
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(u64::from(FRAME_MS));
    let mut deadline = Instant::now() + frame;

    loop {
        // Input until the frame deadline.
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    input.handle_key_event(key);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        deadline += frame;
        if deadline < now {
            // Fell behind (suspended terminal, slow draw): don't try to catch up.
            deadline = now + frame;
        }

        let frame_input = input.take_frame_at(now);
        if frame_input.quit {
            return Ok(());
        }

        let report = game.step(&frame_input);
        log.record_step(&report, game);

        let (w, h) = term.size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        if !report.cleared_rows.is_empty() && config.clear_pause_ms > 0 {
            std::thread::sleep(Duration::from_millis(u64::from(config.clear_pause_ms)));
            input.reset();
            deadline = Instant::now() + frame;
        }
    }
}
