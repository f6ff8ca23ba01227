//! The Belote variant: 32-card deck and the announce combinations.

use crate::card::{Card, Rank, Suit};
use crate::hand::{self, Hand};
use crate::variant::Variant;

/// Variant configuration for Belote.
///
/// Eight ranks from 7 up to ace, with the Belote quirk that 10 outranks the
/// king but not the ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Belote;

impl Variant for Belote {
    const RANKS: &'static [Rank] = &[
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ten,
        Rank::Ace,
    ];
    const HAND_SIZE: usize = 8;
    type Hand = BeloteHand;
}

/// A Belote player's hand, with the announce queries.
///
/// All queries are pure; none raise. A query over an empty or undersized
/// hand simply evaluates to `false` (or `None` for
/// [`highest_of_suit`](Self::highest_of_suit)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeloteHand {
    cards: Vec<Card>,
}

impl BeloteHand {
    const CARRE_COUNT: usize = 4;

    /// Returns the strongest card of the given suit under Belote's rank
    /// order, or `None` if the hand holds no card of that suit.
    #[must_use]
    pub fn highest_of_suit(&self, suit: Suit) -> Option<Card> {
        self.cards
            .iter()
            .filter(|card| card.suit == suit)
            .max_by_key(|card| Belote::power(card.rank))
            .copied()
    }

    /// Returns whether the hand holds both the king and the queen of some
    /// suit (the belote announce).
    #[must_use]
    pub fn has_belote(&self) -> bool {
        hand::holds_royal_pair(&self.cards, &Suit::ALL)
    }

    /// Returns whether the hand holds a tierce: three cards of one suit with
    /// consecutive rank powers.
    #[must_use]
    pub fn has_tierce(&self) -> bool {
        self.has_run_of(3)
    }

    /// Returns whether the hand holds a quarte: four cards of one suit with
    /// consecutive rank powers.
    #[must_use]
    pub fn has_quarte(&self) -> bool {
        self.has_run_of(4)
    }

    /// Returns whether the hand holds a quint: five cards of one suit with
    /// consecutive rank powers.
    #[must_use]
    pub fn has_quint(&self) -> bool {
        self.has_run_of(5)
    }

    /// Returns whether the hand holds a jack of every suit.
    #[must_use]
    pub fn has_carre_of_jacks(&self) -> bool {
        self.has_carre_of(Rank::Jack)
    }

    /// Returns whether the hand holds a nine of every suit.
    #[must_use]
    pub fn has_carre_of_nines(&self) -> bool {
        self.has_carre_of(Rank::Nine)
    }

    /// Returns whether the hand holds an ace of every suit.
    #[must_use]
    pub fn has_carre_of_aces(&self) -> bool {
        self.has_carre_of(Rank::Ace)
    }

    /// Run detection: group by suit, sort each group by rank power, and
    /// slide a window of the required length looking for powers that step
    /// by exactly 1.
    fn has_run_of(&self, length: usize) -> bool {
        Suit::ALL.iter().any(|&suit| {
            let mut powers: Vec<usize> = self
                .cards
                .iter()
                .filter(|card| card.suit == suit)
                .filter_map(|card| Belote::power(card.rank))
                .collect();
            powers.sort_unstable();
            powers
                .windows(length)
                .any(|window| window.windows(2).all(|pair| pair[1] - pair[0] == 1))
        })
    }

    fn has_carre_of(&self, rank: Rank) -> bool {
        self.cards.iter().filter(|card| card.rank == rank).count() == Self::CARRE_COUNT
    }
}

impl Hand for BeloteHand {
    fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }
}
