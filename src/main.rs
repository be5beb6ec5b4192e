//! Game runner - the CONTROLLER.
//!
//! A single-threaded cooperative loop: poll key events with a timeout
//! bounded by the 16ms tick, apply each action to the model as it arrives,
//! advance a millisecond accumulator and fire one gravity drop whenever it
//! exceeds the level-dependent fall interval, then render a frame. After
//! game over the loop keeps drawing the overlay and only quit is honored.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use term_tetris::core::{fall_interval_ms, GameModel};
use term_tetris::input::{handle_key_event, should_quit};
use term_tetris::term::{FrameBuffer, GameView, TerminalRenderer};
use term_tetris::types::TICK_MS;

fn main() -> Result<()> {
    // Optional numeric seed as the first argument, for deterministic replays.
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(seed_from_clock);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn seed_from_clock() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut model = GameModel::new(seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut fall_accum_ms: u32 = 0;

    loop {
        // Render the current model snapshot (read-only pass).
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        fb.resize(w, h);
        view.render_into(&model, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next tick; each event applies
        // synchronously and immediately.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        // Post-game-over the model ignores these itself.
                        model.apply(action);
                    }
                }
            }
        }

        // Gravity tick. The interval is recomputed every iteration from the
        // current level, so clears speed the game up immediately.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();

            if !model.game_over() {
                fall_accum_ms = fall_accum_ms.saturating_add(elapsed.as_millis() as u32);
                if fall_accum_ms > fall_interval_ms(model.level()) {
                    fall_accum_ms = 0;
                    model.soft_drop();
                }
            }
        }
    }
}
