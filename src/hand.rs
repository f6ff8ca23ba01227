//! The base hand behavior shared by all game variants.

use core::slice;

use crate::card::{Card, Rank, Suit};

/// Behavior common to every dealt hand.
///
/// A hand owns its cards outright once [`Deck::deal`](crate::Deck::deal) has
/// moved them out of the deck; it keeps no relationship to the deck it came
/// from. Variant hand types add their game-specific queries on top.
pub trait Hand {
    /// Builds a hand from already-drawn cards, in draw order.
    fn from_cards(cards: Vec<Card>) -> Self
    where
        Self: Sized;

    /// Returns the cards in the hand, in draw order.
    fn cards(&self) -> &[Card];

    /// Returns the number of cards in the hand.
    fn size(&self) -> usize {
        self.cards().len()
    }

    /// Returns whether the hand has no cards.
    fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    /// Returns whether the hand holds the given card.
    fn contains(&self, card: Card) -> bool {
        self.cards().contains(&card)
    }

    /// Iterates over the cards in the hand.
    fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards().iter()
    }
}

/// Whether `cards` holds both the king and the queen of at least one of the
/// candidate suits. Belote's belote and SixtySix's twenty/forty differ only
/// in which suits are candidates.
pub(crate) fn holds_royal_pair(cards: &[Card], candidates: &[Suit]) -> bool {
    candidates.iter().any(|&suit| {
        cards.contains(&Card::new(Rank::King, suit))
            && cards.contains(&Card::new(Rank::Queen, suit))
    })
}
