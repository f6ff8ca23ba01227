//! The SixtySix variant: 24-card deck and the marriage announces.

use crate::card::{Card, Rank, Suit};
use crate::hand::{self, Hand};
use crate::variant::Variant;

/// Variant configuration for SixtySix.
///
/// Six ranks from 9 up to ace, ordered like Belote's top six (10 above the
/// king, below the ace).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SixtySix;

impl Variant for SixtySix {
    const RANKS: &'static [Rank] = &[
        Rank::Nine,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ten,
        Rank::Ace,
    ];
    const HAND_SIZE: usize = 6;
    type Hand = SixtySixHand;
}

/// A SixtySix player's hand, with the marriage queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SixtySixHand {
    cards: Vec<Card>,
}

impl SixtySixHand {
    /// Returns whether the hand holds a twenty: the king and queen of some
    /// suit other than the trump suit.
    #[must_use]
    pub fn has_twenty(&self, trump: Suit) -> bool {
        let candidates: Vec<Suit> = Suit::ALL.into_iter().filter(|&s| s != trump).collect();
        hand::holds_royal_pair(&self.cards, &candidates)
    }

    /// Returns whether the hand holds a forty: the king and queen of the
    /// trump suit.
    #[must_use]
    pub fn has_forty(&self, trump: Suit) -> bool {
        hand::holds_royal_pair(&self.cards, &[trump])
    }
}

impl Hand for SixtySixHand {
    fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }
}
