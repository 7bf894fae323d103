//! The computer opponent's move selection.
//!
//! The heuristic prefers discarding tiles whose pip values are most abundant
//! across the computer's own hand and the chain: clearing common values
//! keeps options open and lowers the risk of being blocked later.

use crate::chain::Chain;
use crate::hand::Hand;
use crate::moves::{can_place, End};
use crate::tile::MAX_PIP;

/// A placement chosen by the heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// 0-based index into the computer's hand
    pub index: usize,
    /// Which chain end to attach to
    pub end: End,
}

/// Occurrences of each pip value across the hand and the whole chain
pub fn value_frequency(hand: &Hand, chain: &Chain) -> [u32; MAX_PIP as usize + 1] {
    let mut frequency = [0u32; MAX_PIP as usize + 1];
    for tile in hand.tiles().iter().chain(chain.tiles()) {
        frequency[tile.left as usize] += 1;
        frequency[tile.right as usize] += 1;
    }
    frequency
}

/// Rank the hand as `(index, score)` pairs, best first.
///
/// A tile's score is the summed frequency of its two pip values. Ties keep
/// ascending hand order, so the ranking is fully deterministic regardless of
/// how the hand was assembled.
pub fn rank_hand(hand: &Hand, chain: &Chain) -> Vec<(usize, u32)> {
    let frequency = value_frequency(hand, chain);
    let mut ranked: Vec<(usize, u32)> = hand
        .tiles()
        .iter()
        .enumerate()
        .map(|(index, tile)| {
            (
                index,
                frequency[tile.left as usize] + frequency[tile.right as usize],
            )
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}

/// Choose the computer's placement, or `None` when nothing attaches.
///
/// Walks the ranked hand and takes the first tile that fits, trying the
/// right end before the left. Drawing on `None` is the caller's decision;
/// a freshly drawn tile is never re-attempted within the same turn.
pub fn choose_placement(hand: &Hand, chain: &Chain) -> Option<Placement> {
    let (left, right) = chain.open_ends();
    for (index, _score) in rank_hand(hand, chain) {
        let tile = hand.tiles()[index];
        if can_place(tile, right) {
            return Some(Placement {
                index,
                end: End::Right,
            });
        }
        if can_place(tile, left) {
            return Some(Placement {
                index,
                end: End::Left,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;
    use pretty_assertions::assert_eq;

    fn hand_of(tiles: &[Tile]) -> Hand {
        let mut hand = Hand::new();
        for tile in tiles {
            hand.add(*tile);
        }
        hand
    }

    #[test]
    fn test_value_frequency_spans_hand_and_chain() {
        let hand = hand_of(&[Tile::new(1, 2), Tile::new(2, 2)]);
        let mut chain = Chain::open_with(Tile::new(2, 2));
        chain.append(Tile::new(2, 6)).unwrap();

        let frequency = value_frequency(&hand, &chain);
        assert_eq!(frequency[2], 6); // one in [1,2], two in [2,2], two on the opening double, one in [2,6]
        assert_eq!(frequency[1], 1);
        assert_eq!(frequency[6], 1);
        assert_eq!(frequency[0], 0);
    }

    #[test]
    fn test_rank_hand_breaks_ties_by_hand_order() {
        // Mirror-image tiles score identically; the earlier one must rank first
        let hand = hand_of(&[Tile::new(0, 1), Tile::new(1, 0)]);
        let chain = Chain::open_with(Tile::new(5, 5));

        let ranked = rank_hand(&hand, &chain);
        assert_eq!(ranked, vec![(0, 4), (1, 4)]);
    }

    #[test]
    fn test_abundant_values_rank_first() {
        // Hand rich in 2s against a chain rich in 2s: [2,3] outscores [1,4]
        let hand = hand_of(&[Tile::new(1, 4), Tile::new(2, 3)]);
        let mut chain = Chain::open_with(Tile::new(2, 2));
        chain.append(Tile::new(2, 5)).unwrap();

        let ranked = rank_hand(&hand, &chain);
        assert_eq!(ranked[0].0, 1);
    }

    #[test]
    fn test_prefers_right_end_over_left() {
        // [3,5] fits both ends of a (3,5)-ended chain; the right end wins
        let hand = hand_of(&[Tile::new(3, 5)]);
        let mut chain = Chain::open_with(Tile::new(3, 3));
        chain.append(Tile::new(3, 5)).unwrap();

        assert_eq!(
            choose_placement(&hand, &chain),
            Some(Placement {
                index: 0,
                end: End::Right
            })
        );
    }

    #[test]
    fn test_best_scoring_playable_tile_wins() {
        // Chain ends (3, 4), heavy in 2s: [2,3] ranks above [1,2] and is the
        // first ranked tile that attaches anywhere (left end, value 3).
        let hand = hand_of(&[Tile::new(1, 2), Tile::new(2, 3)]);
        let mut chain = Chain::open_with(Tile::new(2, 2));
        chain.prepend(Tile::new(3, 2)).unwrap();
        chain.append(Tile::new(2, 4)).unwrap();
        assert_eq!(chain.open_ends(), (3, 4));

        assert_eq!(
            choose_placement(&hand, &chain),
            Some(Placement {
                index: 1,
                end: End::Left
            })
        );
    }

    #[test]
    fn test_no_playable_tile_yields_none() {
        let hand = hand_of(&[Tile::new(0, 0), Tile::new(1, 1)]);
        let chain = Chain::open_with(Tile::new(6, 6));
        assert_eq!(choose_placement(&hand, &chain), None);
    }
}
