//! Core game state machine.
//!
//! This module contains the main `GameState` struct, the turn state machine,
//! and terminal-condition detection.

use crate::bot;
use crate::chain::Chain;
use crate::hand::Hand;
use crate::moves::{End, PlayerMove};
use crate::tile::{Stock, Tile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Redeal attempts allowed while looking for an opening double
const MAX_SETUP_ATTEMPTS: u32 = 100;

/// Whose turn it is, or how the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player's command
    PlayerTurn,
    /// The computer moves next
    ComputerTurn,
    /// Terminal; no further moves are accepted
    Finished(Outcome),
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The player emptied their hand first
    PlayerWon,
    /// The computer emptied its hand first
    ComputerWon,
    /// The chain locked into a closed loop with tiles left in both hands
    Draw,
}

/// The two sides of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

/// Errors that can occur when applying moves
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    /// Malformed or out-of-range command; re-prompt, the turn is kept
    #[error("invalid input")]
    InvalidInput,

    /// The chosen tile fits neither face of the requested end; re-prompt,
    /// the turn is kept
    #[error("illegal move")]
    IllegalMove,

    /// A draw was attempted with no tiles remaining
    #[error("the stock is empty")]
    EmptyStock,

    /// The acting side does not own the current phase
    #[error("not your turn")]
    NotYourTurn,

    /// The game has already reached a terminal state
    #[error("game is over")]
    GameOver,

    /// Re-shuffles exhausted without either hand holding a double
    #[error("no opening double after {0} deals")]
    NoOpeningDouble(u32),
}

/// Events that occur as a result of moves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tile left a hand and joined the chain, in its placed orientation
    TilePlaced { side: Side, tile: Tile, end: End },

    /// A tile moved from the stock into a hand
    TileDrawn { side: Side },

    /// The side could not change its hand and yielded the turn
    TurnPassed { side: Side },

    /// A terminal state was reached
    GameOver { outcome: Outcome },
}

/// The complete game state.
///
/// Owns every tile container for the lifetime of one game. Exactly one
/// logical actor mutates it per turn, so the engine is single-threaded by
/// construction and needs no locking.
#[derive(Debug)]
pub struct GameState {
    /// The face-down draw pool
    pub stock: Stock,
    /// The human player's tiles
    pub player_hand: Hand,
    /// The computer's tiles
    pub computer_hand: Hand,
    /// The placed layout
    pub chain: Chain,
    /// Current phase of the turn state machine
    pub phase: GamePhase,
    /// Turn number (the opening tile counts as turn 1)
    pub turn_number: u32,
    /// Seed this game was created from (for deterministic replays)
    rng_seed: u64,
    /// All randomness (shuffles and draws) flows through this
    rng: StdRng,
}

impl GameState {
    /// Create a new game seeded from entropy
    pub fn new() -> Result<Self, GameError> {
        let seed = rand::thread_rng().gen();
        Self::with_seed(seed)
    }

    /// Create a new game from a fixed seed.
    ///
    /// Identical seeds replay identical games against identical commands.
    pub fn with_seed(seed: u64) -> Result<Self, GameError> {
        let mut rng = StdRng::seed_from_u64(seed);

        // Re-shuffle and re-deal until a hand holds a double. A bounded loop
        // rather than recursion; exhausting the bound is an error.
        for _ in 0..MAX_SETUP_ATTEMPTS {
            let mut stock = Stock::standard();
            stock.shuffle(&mut rng);
            let (mut player_hand, mut computer_hand) = Hand::deal(&mut stock, &mut rng)?;

            let opener = match (player_hand.highest_double(), computer_hand.highest_double()) {
                (Some(p), Some(c)) => {
                    // each double exists once, so the values can never tie
                    if player_hand.tiles()[p].left > computer_hand.tiles()[c].left {
                        Some((Side::Player, p))
                    } else {
                        Some((Side::Computer, c))
                    }
                }
                (Some(p), None) => Some((Side::Player, p)),
                (None, Some(c)) => Some((Side::Computer, c)),
                (None, None) => None,
            };

            if let Some((side, index)) = opener {
                // The holder plays the double as the whole first turn; the
                // other side moves next.
                let (opening, phase) = match side {
                    Side::Player => (player_hand.remove(index), GamePhase::ComputerTurn),
                    Side::Computer => (computer_hand.remove(index), GamePhase::PlayerTurn),
                };
                return Ok(Self {
                    stock,
                    player_hand,
                    computer_hand,
                    chain: Chain::open_with(opening),
                    phase,
                    turn_number: 1,
                    rng_seed: seed,
                    rng,
                });
            }
        }

        Err(GameError::NoOpeningDouble(MAX_SETUP_ATTEMPTS))
    }

    /// The seed this game was created from
    pub fn seed(&self) -> u64 {
        self.rng_seed
    }

    /// Check if the game has reached a terminal state
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Finished(_))
    }

    /// Get the outcome if the game is finished
    pub fn outcome(&self) -> Option<Outcome> {
        if let GamePhase::Finished(outcome) = self.phase {
            Some(outcome)
        } else {
            None
        }
    }

    /// Apply a parsed player command.
    ///
    /// `InvalidInput` and `IllegalMove` leave every container untouched and
    /// the phase at `PlayerTurn`, so the caller re-prompts without the turn
    /// being consumed. A successful move yields to the computer unless it
    /// ends the game.
    pub fn apply_player_move(&mut self, mv: PlayerMove) -> Result<Vec<GameEvent>, GameError> {
        match self.phase {
            GamePhase::PlayerTurn => {}
            GamePhase::ComputerTurn => return Err(GameError::NotYourTurn),
            GamePhase::Finished(_) => return Err(GameError::GameOver),
        }

        let mut events = Vec::new();
        match mv {
            PlayerMove::Draw => {
                // An empty stock turns the draw into a pass that still
                // yields the turn.
                if self.stock.is_empty() {
                    events.push(GameEvent::TurnPassed { side: Side::Player });
                } else {
                    let tile = self.stock.draw(&mut self.rng)?;
                    self.player_hand.add(tile);
                    events.push(GameEvent::TileDrawn { side: Side::Player });
                }
            }
            PlayerMove::Place { index, end } => {
                let tile = self.player_hand.get(index).ok_or(GameError::InvalidInput)?;
                // The chain validates before mutating, so a rejected tile
                // never leaves the hand.
                let oriented = self.chain.attach(tile, end)?;
                self.player_hand.remove(index);
                events.push(GameEvent::TilePlaced {
                    side: Side::Player,
                    tile: oriented,
                    end,
                });
            }
        }

        self.finish_turn(Side::Player, &mut events);
        Ok(events)
    }

    /// Run the computer's whole turn: rank the hand, place the best fitting
    /// tile (right end first), otherwise draw or pass, then yield.
    pub fn play_computer_turn(&mut self) -> Result<Vec<GameEvent>, GameError> {
        match self.phase {
            GamePhase::ComputerTurn => {}
            GamePhase::PlayerTurn => return Err(GameError::NotYourTurn),
            GamePhase::Finished(_) => return Err(GameError::GameOver),
        }

        let mut events = Vec::new();
        match bot::choose_placement(&self.computer_hand, &self.chain) {
            Some(placement) => {
                let tile = self.computer_hand.tiles()[placement.index];
                let oriented = self.chain.attach(tile, placement.end)?;
                self.computer_hand.remove(placement.index);
                events.push(GameEvent::TilePlaced {
                    side: Side::Computer,
                    tile: oriented,
                    end: placement.end,
                });
            }
            // Nothing fits: draw when possible. The drawn tile waits for the
            // next turn even when it would fit immediately.
            None if !self.stock.is_empty() => {
                let tile = self.stock.draw(&mut self.rng)?;
                self.computer_hand.add(tile);
                events.push(GameEvent::TileDrawn {
                    side: Side::Computer,
                });
            }
            // Empty stock and nothing fits: stalemate-skip
            None => {
                events.push(GameEvent::TurnPassed {
                    side: Side::Computer,
                });
            }
        }

        self.finish_turn(Side::Computer, &mut events);
        Ok(events)
    }

    /// Advance the phase after an applied move and run the terminal checks.
    ///
    /// Win checks outrank the closed-loop draw: an emptied hand decides the
    /// game even if the final placement also locks the chain.
    fn finish_turn(&mut self, side: Side, events: &mut Vec<GameEvent>) {
        self.turn_number += 1;

        let outcome = if self.player_hand.is_empty() {
            Some(Outcome::PlayerWon)
        } else if self.computer_hand.is_empty() {
            Some(Outcome::ComputerWon)
        } else if self.chain.is_closed_loop() {
            Some(Outcome::Draw)
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                self.phase = GamePhase::Finished(outcome);
                events.push(GameEvent::GameOver { outcome });
            }
            None => {
                self.phase = match side {
                    Side::Player => GamePhase::ComputerTurn,
                    Side::Computer => GamePhase::PlayerTurn,
                };
            }
        }
    }
}
