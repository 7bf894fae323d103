//! Interactive console frontend for the domino engine.
//!
//! The engine owns every rule; this binary only reads commands, renders the
//! field, and reports the final result.

use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;
use domino_core::{GameError, GamePhase, GameState, PlayerMove};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod ui;

/// Play dominoes against the computer
#[derive(Parser)]
#[command(name = "domino")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never interleave with the field
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut game = match cli.seed {
        Some(seed) => GameState::with_seed(seed)?,
        None => GameState::new()?,
    };
    debug!(seed = game.seed(), "game created");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        ui::print_field(&game);

        match game.phase {
            GamePhase::Finished(outcome) => {
                println!(
                    "\nStatus: The game is over. {}",
                    ui::outcome_message(outcome)
                );
                break;
            }
            GamePhase::PlayerTurn => {
                println!("\nStatus: It's your turn to make a move. Enter your command.");
                player_turn(&mut game, &mut lines)?;
            }
            GamePhase::ComputerTurn => {
                println!("\nStatus: Computer is about to make a move. Press Enter to continue...");
                let _ = lines.next().transpose()?;
                let events = game.play_computer_turn()?;
                debug!(?events, "computer moved");
            }
        }
    }

    Ok(())
}

/// Read commands until one is accepted, re-prompting on rejected input.
/// Neither rejection consumes the turn.
fn player_turn(
    game: &mut GameState,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    loop {
        let line = match lines.next() {
            Some(line) => line?,
            None => anyhow::bail!("stdin closed mid-game"),
        };

        let mv = match PlayerMove::parse(&line, game.player_hand.len()) {
            Ok(mv) => mv,
            Err(GameError::InvalidInput) => {
                println!("Invalid input. Please try again.");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        match game.apply_player_move(mv) {
            Ok(events) => {
                debug!(?events, "player moved");
                return Ok(());
            }
            Err(GameError::IllegalMove) => {
                println!("Illegal move. Please try again.");
            }
            Err(e) => return Err(e.into()),
        }
    }
}
