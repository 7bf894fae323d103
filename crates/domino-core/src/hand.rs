//! Hand management for both sides of the table.

use crate::game::GameError;
use crate::tile::{Stock, Tile, MAX_PIP};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tiles dealt to each side at game start
pub const HAND_SIZE: usize = 7;

/// One side's held, unplaced tiles.
///
/// Order is significant: it is the display order and the reference order for
/// 1-based move indexing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    /// Create an empty hand
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal both starting hands, drawing alternately so the stock shrinks by
    /// exactly two tiles per round.
    pub fn deal<R: Rng>(stock: &mut Stock, rng: &mut R) -> Result<(Hand, Hand), GameError> {
        let mut first = Hand::new();
        let mut second = Hand::new();
        for _ in 0..HAND_SIZE {
            first.add(stock.draw(rng)?);
            second.add(stock.draw(rng)?);
        }
        Ok((first, second))
    }

    /// Index of the highest double in the hand, scanning `(6,6)` down to
    /// `(0,0)`; `None` when the hand holds no double.
    pub fn highest_double(&self) -> Option<usize> {
        for value in (0..=MAX_PIP).rev() {
            if let Some(index) = self
                .tiles
                .iter()
                .position(|t| t.is_double() && t.left == value)
            {
                return Some(index);
            }
        }
        None
    }

    /// Remove and return the tile at `index`.
    ///
    /// Index validity is guaranteed upstream by move parsing.
    pub fn remove(&mut self, index: usize) -> Tile {
        self.tiles.remove(index)
    }

    /// Append a drawn tile at the end of the hand
    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// The tile at `index`, if any
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    /// Number of held tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the hand has been emptied (the winning condition)
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The held tiles in display order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
