//! The generic deck engine.

use core::marker::PhantomData;
use core::slice;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Suit};
use crate::hand::Hand;
use crate::variant::Variant;

/// An ordered deck of cards for the game variant `V`.
///
/// A full deck is the cross product of the variant's ranks and the four
/// suits. Cards only ever leave a deck, via draws or [`deal`](Self::deal);
/// once the deck is empty, draws return `None` and deals produce empty hands.
///
/// # Example
///
/// ```
/// use talon::{Deck, SixtySix};
///
/// let mut deck = Deck::<SixtySix>::new();
/// assert_eq!(deck.size(), 24);
/// let top = deck.draw_top_card();
/// assert!(top.is_some());
/// assert_eq!(deck.size(), 23);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck<V: Variant> {
    cards: Vec<Card>,
    _variant: PhantomData<V>,
}

impl<V: Variant> Deck<V> {
    /// Creates a full deck in generator order: ranks ascending by power,
    /// suits in declaration order within each rank.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(V::total_cards());
        for &rank in V::RANKS {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self::from_cards(cards)
    }

    /// Creates a deck from an explicit card sequence, front first.
    ///
    /// Meant for stacking decks in tests. The cards are not checked against
    /// the variant's universe and duplicates are not rejected.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            _variant: PhantomData,
        }
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    pub fn draw_top_card(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Removes and returns the bottom card, or `None` if the deck is empty.
    pub fn draw_bottom_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns the bottom card without removing it.
    #[must_use]
    pub fn bottom_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Shuffles the deck in place using the given random source.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.cards.shuffle(rng);
    }

    /// Sorts the deck in place: suit first (declaration order, descending),
    /// then rank power descending within each suit.
    ///
    /// This deliberately groups by suit rather than applying a global rank
    /// order; a sorted deck reads hearts block first, diamonds block last.
    /// Cards outside the variant's universe sort as the lowest power.
    pub fn sort(&mut self) {
        self.cards.sort_by(|a, b| {
            let a_key = (a.suit, V::power(a.rank).unwrap_or(0));
            let b_key = (b.suit, V::power(b.rank).unwrap_or(0));
            b_key.cmp(&a_key)
        });
    }

    /// Deals a hand from the top of the deck.
    ///
    /// Draws up to [`Variant::HAND_SIZE`] cards, fewer if the deck runs out,
    /// and moves them into a new hand of the variant's hand type. Dealing
    /// from an empty deck produces an empty hand.
    pub fn deal(&mut self) -> V::Hand {
        let count = V::HAND_SIZE.min(self.cards.len());
        V::Hand::from_cards(self.cards.drain(..count).collect())
    }

    /// Iterates over the remaining cards, front first.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<V: Variant> Default for Deck<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> IntoIterator for Deck<V> {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a, V: Variant> IntoIterator for &'a Deck<V> {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
