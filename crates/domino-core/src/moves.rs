//! Moves, command parsing, and placement legality.
//!
//! This module defines the player's command vocabulary and the two pure
//! checks every placement goes through: whether a tile can touch an open end
//! at all, and how it must be oriented to do so.

use crate::game::GameError;
use crate::tile::Tile;
use serde::{Deserialize, Serialize};

/// Which extremity of the chain a tile attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum End {
    Left,
    Right,
}

/// Whether `tile` can legally touch an end showing `end_value`.
///
/// This single predicate underlies both the player's and the computer's
/// legality checks; it inspects nothing but the tile's two faces.
pub const fn can_place(tile: Tile, end_value: u8) -> bool {
    tile.has(end_value)
}

/// Orient `tile` so the face touching `end` equals `end_value`.
///
/// Pure: returns a new tile, flipped when only the far face matches, and
/// `None` when the tile does not carry the value at all. Re-applying with
/// the same target leaves the tile unchanged, and the pip pair is always
/// preserved.
pub fn orient(tile: Tile, end: End, end_value: u8) -> Option<Tile> {
    if !can_place(tile, end_value) {
        return None;
    }
    let fits = match end {
        // Prepending: the tile's right face touches the chain's left end
        End::Left => tile.right == end_value,
        // Appending: the tile's left face touches the chain's right end
        End::Right => tile.left == end_value,
    };
    Some(if fits { tile } else { tile.flipped() })
}

/// A command the player can issue on their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerMove {
    /// Take one tile from the stock (a pass when the stock is empty)
    Draw,
    /// Place the hand tile at `index` (0-based) against `end`
    Place { index: usize, end: End },
}

impl PlayerMove {
    /// Parse a player command line.
    ///
    /// The convention is a signed 1-based hand index: negative attaches to
    /// the left end, positive to the right end, and `0` draws from the stock
    /// instead of placing. Malformed integers and magnitudes outside
    /// `[1, hand_len]` are rejected; rejection never consumes the turn.
    pub fn parse(line: &str, hand_len: usize) -> Result<Self, GameError> {
        let choice: i32 = line.trim().parse().map_err(|_| GameError::InvalidInput)?;
        if choice == 0 {
            return Ok(PlayerMove::Draw);
        }
        let magnitude = choice.unsigned_abs() as usize;
        if magnitude > hand_len {
            return Err(GameError::InvalidInput);
        }
        let end = if choice < 0 { End::Left } else { End::Right };
        Ok(PlayerMove::Place {
            index: magnitude - 1,
            end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_place_checks_both_faces() {
        let tile = Tile::new(2, 5);
        assert!(can_place(tile, 2));
        assert!(can_place(tile, 5));
        assert!(!can_place(tile, 6));
    }

    #[test]
    fn test_orient_keeps_matching_side() {
        // Right face already touches the left end
        assert_eq!(orient(Tile::new(4, 3), End::Left, 3), Some(Tile::new(4, 3)));
        // Left face already touches the right end
        assert_eq!(
            orient(Tile::new(3, 4), End::Right, 3),
            Some(Tile::new(3, 4))
        );
    }

    #[test]
    fn test_orient_flips_when_needed() {
        assert_eq!(orient(Tile::new(3, 4), End::Left, 3), Some(Tile::new(4, 3)));
        assert_eq!(
            orient(Tile::new(4, 3), End::Right, 3),
            Some(Tile::new(3, 4))
        );
    }

    #[test]
    fn test_orient_rejects_foreign_value() {
        assert_eq!(orient(Tile::new(1, 2), End::Right, 6), None);
    }

    #[test]
    fn test_orient_is_idempotent_and_preserves_pips() {
        for end in [End::Left, End::Right] {
            let tile = Tile::new(2, 6);
            let once = orient(tile, end, 6).unwrap();
            let twice = orient(once, end, 6).unwrap();
            assert_eq!(once, twice);

            let mut before = [tile.left, tile.right];
            let mut after = [once.left, once.right];
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_parse_zero_is_draw() {
        assert_eq!(PlayerMove::parse("0", 5), Ok(PlayerMove::Draw));
    }

    #[test]
    fn test_parse_signed_indices() {
        assert_eq!(
            PlayerMove::parse("3", 5),
            Ok(PlayerMove::Place {
                index: 2,
                end: End::Right
            })
        );
        assert_eq!(
            PlayerMove::parse("-1", 5),
            Ok(PlayerMove::Place {
                index: 0,
                end: End::Left
            })
        );
        assert_eq!(
            PlayerMove::parse(" 5 ", 5),
            Ok(PlayerMove::Place {
                index: 4,
                end: End::Right
            })
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            PlayerMove::parse("9", 5),
            Err(GameError::InvalidInput)
        ));
        assert!(matches!(
            PlayerMove::parse("-6", 5),
            Err(GameError::InvalidInput)
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for line in ["", "abc", "1.5", "two", "--2"] {
            assert!(matches!(
                PlayerMove::parse(line, 5),
                Err(GameError::InvalidInput)
            ));
        }
    }
}
