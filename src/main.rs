//! Terminal Frogger runner (default binary).
//!
//! Keyboard input is read on a background thread into a one-slot mailbox.
//! The main thread runs the world at a fixed tick rate and redraws at a fixed
//! frame rate until the player dies or quits.

mod config;
mod fault;

use std::fs::OpenOptions;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use fault::{install_panic_hook, panic_text};
use tui_frogger::core::Game;
use tui_frogger::input::{InputPoller, KeyMailbox};
use tui_frogger::term::{FrameClock, GameView, TerminalRenderer, TickPacer, Viewport};
use tui_frogger::types::Ending;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config)?;
    install_panic_hook();
    info!(?config, "starting");

    let mut game = Game::from_default_level(config.seed).context("loading built-in level")?;
    let mailbox = Arc::new(KeyMailbox::new());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut poller = match InputPoller::spawn(Arc::clone(&mailbox)) {
        Ok(poller) => poller,
        Err(err) => {
            let _ = term.exit();
            return Err(err).context("starting input thread");
        }
    };

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        run(&mut game, &mailbox, &mut term, &config)
    }))
    .unwrap_or_else(|payload| Err(anyhow!("game loop panicked: {}", panic_text(&*payload))));

    if let Err(err) = &outcome {
        error!(error = ?err, "game loop fault");
    }

    // Same cleanup for deaths, quits and faults.
    let view = GameView::new();
    let _ = term.draw_final(&view.compose_final(&game, viewport()));
    poller.stop();

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(report) = fault::take_report() {
        eprintln!("{report}");
    }

    let ending = outcome?;
    info!(
        quit = ending.death().is_none(),
        death = ?ending.death(),
        ticks = game.ticks(),
        "finished"
    );
    Ok(())
}

fn run(
    game: &mut Game,
    mailbox: &KeyMailbox,
    term: &mut TerminalRenderer,
    config: &Config,
) -> Result<Ending> {
    let view = GameView::new();
    let mut frames = FrameClock::new(config.fps);
    let pacer = TickPacer::new(config.tps);
    let start = Instant::now();
    let mut tick: u64 = 0;

    loop {
        if let Some(ending) = game.tick(mailbox.take()) {
            debug!(
                frames = frames.rendered(),
                fps = frames.measured_fps(start.elapsed()),
                "loop finished"
            );
            return Ok(ending);
        }

        if frames.should_render(start.elapsed()) {
            term.draw(&view.compose(game, viewport()))?;
        }

        tick += 1;
        if let Some(delay) = pacer.delay(tick, start.elapsed()) {
            thread::sleep(delay);
        }
    }
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn init_tracing(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
