//! Field rendering for the console frontend.

use domino_core::{GameState, Outcome, Tile};

/// Chain length at which the display collapses to its ends
const TRUNCATE_AT: usize = 7;

/// Tiles shown on each side of the ellipsis
const TRUNCATE_WINDOW: usize = 3;

/// Print the game field: stock and hand counts, the chain, and the player's
/// numbered tiles.
pub fn print_field(game: &GameState) {
    println!("{}", "=".repeat(70));
    println!("Stock size: {}", game.stock.len());
    println!("Computer pieces: {}\n", game.computer_hand.len());
    println!("{}", render_chain(game.chain.tiles()));
    println!("\nYour pieces:");
    for (i, tile) in game.player_hand.tiles().iter().enumerate() {
        println!("{}:{}", i + 1, tile);
    }
}

/// The chain on one line, collapsed to the first and last three tiles with
/// an ellipsis once it reaches seven.
fn render_chain(tiles: &[Tile]) -> String {
    let joined = |tiles: &[Tile]| tiles.iter().map(|t| t.to_string()).collect::<String>();
    if tiles.len() < TRUNCATE_AT {
        joined(tiles)
    } else {
        format!(
            "{}...{}",
            joined(&tiles[..TRUNCATE_WINDOW]),
            joined(&tiles[tiles.len() - TRUNCATE_WINDOW..])
        )
    }
}

/// Final status line for a finished game
pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWon => "You won!",
        Outcome::ComputerWon => "The computer won!",
        Outcome::Draw => "It's a draw!",
    }
}
