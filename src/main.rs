//! Terminal runner (default binary).
//!
//! Polls crossterm input on a fixed 16ms tick, feeds commands and elapsed
//! time through a [`Session`], and redraws from a snapshot.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::cli::{RunConfig, USAGE};
use blockfall::core::{GameSnapshot, GameState, HighScores, Session, SessionInput};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{BellSink, BoardView, Frame, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(run_config) = RunConfig::from_env().apply_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };
    let config = run_config.game_config()?;

    let high_scores = Rc::new(RefCell::new(HighScores::default()));
    let mut session = Session::new(GameState::new(config));
    session.add_sink(Box::new(BellSink::stdout()));
    session.add_sink(Box::new(Rc::clone(&high_scores)));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    let state = session.into_state();
    println!(
        "score {}  lines {}  level {}",
        state.score(),
        state.lines(),
        state.level()
    );
    for (rank, entry) in high_scores.borrow().entries().iter().enumerate() {
        println!(
            "#{} {} ({} lines, level {})",
            rank + 1,
            entry.score,
            entry.lines,
            entry.level
        );
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    session.start();

    let view = BoardView::default();
    let mut snapshot = GameSnapshot::default();
    let mut frame = Frame::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.state().snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut frame);
        term.draw_swap(&mut frame)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        session.dispatch(SessionInput::Command(command));
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            session.dispatch(SessionInput::Tick(elapsed.as_millis() as u32));
        }
    }
}
