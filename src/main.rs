//! Terminal pairs runner (default binary).
//!
//! Fixed-timestep loop: render, poll input until the next frame, then advance
//! the session clock and any pending rollback.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info, trace};

use tui_pairs::core::{GameSnapshot, GameState};
use tui_pairs::input::{handle_key_event, should_quit, Command, Cursor};
use tui_pairs::term::{
    fingerprint, CuePlayer, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport,
};
use tui_pairs::types::{GameAction, GameEvent};
use tui_pairs::{logging, Config, FrameClock};

/// Redraw at least this often even when nothing changed.
const REFRESH_MS: u64 = 250;

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;
    info!(seed = config.seed, muted = config.muted, "starting tui-pairs");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!(error = %e, "runner failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut game = GameState::new(config.seed);
    let mut cursor = Cursor::new();
    let mut cues = CuePlayer::stdout(config.muted);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(REFRESH_MS);

    let started = Instant::now();
    let mut frames = FrameClock::new(started);

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint(&snap, Some(cursor.card()), viewport)) {
            view.render_into(&snap, Some(cursor.card()), viewport, &mut fb);
            term.present(&mut fb)?;
        }

        // Input with timeout until next tick.
        if event::poll(frames.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(
                            episode_id = game.episode_id(),
                            phase = game.phase().as_str(),
                            moves = game.moves(),
                            "quit"
                        );
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(Command::Move(dir)) => cursor.step(dir),
                        Some(Command::Flip) => {
                            frames.settle(&mut game, Instant::now());
                            game.apply_action(GameAction::Select(cursor.card()));
                        }
                        Some(Command::Restart) => {
                            frames.settle(&mut game, Instant::now());
                            game.apply_action(GameAction::Restart);
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick with the real elapsed time so the 1s delays stay wall-clock.
        frames.tick_if_due(&mut game, Instant::now());

        for event in game.drain_events() {
            match event {
                GameEvent::Cue(cue) => cues.play(cue),
                other => trace!(event = ?other, "game event"),
            }
        }
    }
}
