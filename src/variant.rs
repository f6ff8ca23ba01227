//! Per-game variant configuration.

use crate::card::{Rank, Suit};
use crate::hand::Hand;

/// Configuration for one game variant.
///
/// A variant is a zero-sized marker type that supplies the three things the
/// generic deck engine does not know: which ranks are in play and in what
/// order, how many cards a hand takes, and which hand type a deal produces.
/// The deck logic itself is identical across variants.
pub trait Variant {
    /// Ranks in play, listed in ascending power order.
    ///
    /// The power of a rank is its position in this slice, so the slice must
    /// contain each rank at most once.
    const RANKS: &'static [Rank];

    /// Number of cards dealt into a hand.
    const HAND_SIZE: usize;

    /// The hand type produced by [`Deck::deal`](crate::Deck::deal).
    type Hand: Hand;

    /// Returns the power of a rank under this variant's order, or `None` if
    /// the rank is outside the variant's universe.
    #[must_use]
    fn power(rank: Rank) -> Option<usize> {
        Self::RANKS.iter().position(|&r| r == rank)
    }

    /// Total number of cards in a full deck for this variant.
    #[must_use]
    fn total_cards() -> usize {
        Self::RANKS.len() * Suit::ALL.len()
    }
}
