//! Terminal Tetris runner (default binary).
//!
//! Hosts one [`Engine`] in a crossterm terminal: key presses become game
//! commands, the engine's scheduler decides when gravity and redraws happen,
//! and every rendered frame is pushed through the half-block renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use canvas_tetris::engine::{Config, Engine};
use canvas_tetris::input::{handle_key_event, should_quit};
use canvas_tetris::logging;
use canvas_tetris::term::{FrameBuffer, TerminalRenderer, Viewport};

/// Milliseconds since the host started
struct Clock(Instant);

impl Clock {
    fn now_ms(&self) -> u64 {
        self.0.elapsed().as_millis() as u64
    }
}

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut term = TerminalRenderer::new(Viewport::new(w, h));
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let clock = Clock(Instant::now());
    let mut engine = Engine::from_config(config, clock.now_ms());
    let mut fb = FrameBuffer::new(
        config.surface_width.min(u16::MAX as u32) as u16,
        config.surface_height.min(u16::MAX as u32) as u16,
    );
    info!(
        seed = ?engine.state().seed(),
        width = fb.width(),
        height = fb.height(),
        "game started"
    );

    loop {
        let now = clock.now_ms();
        let timeout = engine
            .next_due_ms()
            .map(|due| due.saturating_sub(now))
            .unwrap_or(config.redraw_ms);

        if event::poll(Duration::from_millis(timeout))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = handle_key_event(key) {
                        engine.key(action, clock.now_ms());
                    }
                }
                Event::Resize(w, h) => term.set_viewport(Viewport::new(w, h)),
                _ => {}
            }
        }

        let report = engine.advance(clock.now_ms(), Some(&mut fb));
        if report.rendered {
            term.draw_swap(&mut fb)?;
        }
    }

    engine.stop();
    info!(episode = engine.state().episode_id(), "game closed");
    Ok(())
}
