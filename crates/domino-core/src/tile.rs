//! Domino tile primitive and the draw pool.
//!
//! This module provides the foundational pieces of the game:
//! - `Tile`: a pip pair; the unit every container holds exactly once
//! - `Stock`: the face-down pool of undealt tiles, supporting shuffle and draw

use crate::game::GameError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest pip value on a tile face
pub const MAX_PIP: u8 = 6;

/// Number of tiles in a double-six set
pub const SET_SIZE: usize = 28;

/// A single domino tile.
///
/// As a piece of the set the pair is unordered, but the stored order is the
/// tile's current orientation: `left` faces the left neighbor once placed in
/// the chain. Orientation changes go through [`Tile::flipped`], which returns
/// a new value rather than reversing in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Pip value on the left face
    pub left: u8,
    /// Pip value on the right face
    pub right: u8,
}

impl Tile {
    /// Create a new tile
    pub const fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    /// Whether both faces show the same value
    pub const fn is_double(&self) -> bool {
        self.left == self.right
    }

    /// Whether either face shows `value`
    pub const fn has(&self, value: u8) -> bool {
        self.left == value || self.right == value
    }

    /// The same tile with its faces swapped
    pub const fn flipped(&self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// How many faces show `value` (a double contributes 2 to its own value)
    pub fn pip_count(&self, value: u8) -> u32 {
        u32::from(self.left == value) + u32::from(self.right == value)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}

/// The face-down pool of undealt tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    tiles: Vec<Tile>,
}

impl Stock {
    /// Create the full double-six set: every pair `(a, b)` with
    /// `0 <= a <= b <= 6`, each exactly once, in canonical ascending order.
    ///
    /// Returns a fresh collection per call; nothing is shared between games.
    pub fn standard() -> Self {
        let mut tiles = Vec::with_capacity(SET_SIZE);
        for a in 0..=MAX_PIP {
            for b in a..=MAX_PIP {
                tiles.push(Tile::new(a, b));
            }
        }
        Self { tiles }
    }

    /// Shuffle the pool
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.tiles.shuffle(rng);
    }

    /// Remove and return one tile chosen uniformly at random.
    ///
    /// An empty pool is the documented "no tile available" condition, not a
    /// program error; callers check [`Stock::len`] first during normal play.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Result<Tile, GameError> {
        self.tiles.shuffle(rng);
        self.tiles.pop().ok_or(GameError::EmptyStock)
    }

    /// Number of tiles remaining
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the pool is exhausted
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The remaining tiles, in current (shuffled) order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_standard_set_covers_all_pairs() {
        let stock = Stock::standard();
        assert_eq!(stock.len(), SET_SIZE);

        let unique: HashSet<_> = stock.tiles().iter().collect();
        assert_eq!(unique.len(), SET_SIZE);

        for a in 0..=MAX_PIP {
            for b in a..=MAX_PIP {
                assert!(
                    stock.tiles().contains(&Tile::new(a, b)),
                    "set should contain [{}, {}]",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_standard_set_canonical_order() {
        let stock = Stock::standard();
        assert_eq!(stock.tiles()[0], Tile::new(0, 0));
        assert_eq!(stock.tiles()[SET_SIZE - 1], Tile::new(6, 6));
        for tile in stock.tiles() {
            assert!(tile.left <= tile.right);
        }
    }

    #[test]
    fn test_shuffle_is_reproducible() {
        let mut a = Stock::standard();
        let mut b = Stock::standard();
        a.shuffle(&mut StdRng::seed_from_u64(7));
        b.shuffle(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_removes_one_tile() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut stock = Stock::standard();
        let tile = stock.draw(&mut rng).unwrap();
        assert_eq!(stock.len(), SET_SIZE - 1);
        assert!(!stock.tiles().contains(&tile));
    }

    #[test]
    fn test_draw_from_empty_stock_errors() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut stock = Stock::standard();
        for _ in 0..SET_SIZE {
            stock.draw(&mut rng).unwrap();
        }
        assert!(stock.is_empty());
        assert!(matches!(stock.draw(&mut rng), Err(GameError::EmptyStock)));
    }

    #[test]
    fn test_flipped_swaps_faces() {
        let tile = Tile::new(2, 5);
        assert_eq!(tile.flipped(), Tile::new(5, 2));
        assert_eq!(tile.flipped().flipped(), tile);
    }

    #[test]
    fn test_pip_count_doubles_count_twice() {
        assert_eq!(Tile::new(4, 4).pip_count(4), 2);
        assert_eq!(Tile::new(4, 2).pip_count(4), 1);
        assert_eq!(Tile::new(1, 2).pip_count(4), 0);
    }

    #[test]
    fn test_display_matches_field_format() {
        assert_eq!(Tile::new(6, 3).to_string(), "[6, 3]");
    }
}
