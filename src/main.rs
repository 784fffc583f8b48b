#![warn(clippy::all, clippy::pedantic)]

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use puzzle_attack::app::App;
use puzzle_attack::config::{Config, SessionConfig};
use puzzle_attack::matching::find_swap_hint;

// Ticks allowed for one move to settle back to Idle
const MAX_TICKS_PER_MOVE: u32 = 100_000;

fn main() -> Result<()> {
    // Load configuration before logging so the log path can come from it
    let loaded = Config::force_reload();
    let config = Config::current();

    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.session.log_path)
        .with_context(|| {
            format!(
                "Failed to create log file {}",
                config.session.log_path.display()
            )
        })?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    info!("Starting Puzzle Attack");

    match loaded {
        Ok(()) => info!("Configuration loaded successfully"),
        // Continue with default configuration
        Err(e) => error!("Failed to load configuration: {e}"),
    }

    let mut app = App::new(&config);
    let moves = run_session(&mut app, &config.session);

    let round = app.round();
    info!(
        "Session over after {moves} moves: score {}, {} blocks cleared in {:.2}s simulated",
        app.score(),
        round.total_cleared,
        app.elapsed_seconds()
    );
    println!(
        "moves: {moves}  score: {}  cleared: {}",
        app.score(),
        round.total_cleared
    );

    Ok(())
}

/// Play until `max_moves` swaps were made or no swap would produce a match.
fn run_session(app: &mut App, session: &SessionConfig) -> u32 {
    let defaults = SessionConfig::default();
    let frame_seconds = if session.frame_seconds > 0.0 {
        session.frame_seconds
    } else {
        warn!(
            "Ignoring non-positive frame_seconds {}, using {}",
            session.frame_seconds, defaults.frame_seconds
        );
        defaults.frame_seconds
    };

    let mut moves = 0;
    while moves < session.max_moves {
        let Some(target) = find_swap_hint(app.board()) else {
            info!("No productive swap left");
            break;
        };

        let cursor = app.cursor();
        app.move_cursor(target.x - cursor.x, target.y - cursor.y);
        app.request_swap();

        let mut ticks = 0;
        loop {
            app.update(frame_seconds);
            ticks += 1;
            if app.is_idle() {
                break;
            }
            if ticks >= MAX_TICKS_PER_MOVE {
                warn!("Move {moves} did not settle after {ticks} ticks");
                break;
            }
        }

        moves += 1;
        debug!(
            "Move {moves} at ({}, {}) settled in {ticks} ticks, score {}",
            target.x,
            target.y,
            app.score()
        );
    }

    moves
}
