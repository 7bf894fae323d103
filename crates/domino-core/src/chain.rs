//! The chain of placed tiles (the "snake").

use crate::game::GameError;
use crate::moves::{orient, End};
use crate::tile::Tile;
use serde::{Deserialize, Serialize};

/// Open-end pip occurrences that lock the layout when both ends match
const CLOSED_LOOP_COUNT: u32 = 8;

/// The ordered layout of placed tiles.
///
/// Every tile is stored in its placed orientation, so the touching faces of
/// adjacent tiles always carry equal values. A chain is created around the
/// opening double and only ever grows by one tile at either extremity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    tiles: Vec<Tile>,
}

impl Chain {
    /// Seed the chain with the opening tile
    pub fn open_with(tile: Tile) -> Self {
        Self { tiles: vec![tile] }
    }

    /// The exposed pip values at the left and right extremities.
    ///
    /// The chain is seeded at construction and never shrinks, so both ends
    /// always exist.
    pub fn open_ends(&self) -> (u8, u8) {
        (self.tiles[0].left, self.tiles[self.tiles.len() - 1].right)
    }

    /// Attach `tile` at `end`, flipping it when only the far face matches.
    ///
    /// Returns the tile as oriented and placed. `IllegalMove` leaves the
    /// chain untouched.
    pub fn attach(&mut self, tile: Tile, end: End) -> Result<Tile, GameError> {
        match end {
            End::Left => self.prepend(tile),
            End::Right => self.append(tile),
        }
    }

    /// Attach a tile before the first one; its right face must carry the
    /// left open value after orientation.
    pub fn prepend(&mut self, tile: Tile) -> Result<Tile, GameError> {
        let (left, _) = self.open_ends();
        let oriented = orient(tile, End::Left, left).ok_or(GameError::IllegalMove)?;
        self.tiles.insert(0, oriented);
        Ok(oriented)
    }

    /// Attach a tile after the last one; its left face must carry the right
    /// open value after orientation.
    pub fn append(&mut self, tile: Tile) -> Result<Tile, GameError> {
        let (_, right) = self.open_ends();
        let oriented = orient(tile, End::Right, right).ok_or(GameError::IllegalMove)?;
        self.tiles.push(oriented);
        Ok(oriented)
    }

    /// Whether the layout is locked: both open ends show the same value and
    /// that value occurs exactly eight times across the chain (a double
    /// counts twice), so no tile that could ever attach remains anywhere.
    pub fn is_closed_loop(&self) -> bool {
        let (left, right) = self.open_ends();
        if left != right {
            return false;
        }
        let occurrences: u32 = self.tiles.iter().map(|t| t.pip_count(left)).sum();
        occurrences == CLOSED_LOOP_COUNT
    }

    /// Number of placed tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// The placed tiles in layout order, each in its placed orientation
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
