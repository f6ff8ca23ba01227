//! The War variant: full 52-card deck, half-deck hands.

use rand::Rng;

use crate::card::{Card, Rank};
use crate::hand::Hand;
use crate::variant::Variant;

/// Variant configuration for War.
///
/// Plays the full thirteen-rank universe and splits the deck into two
/// 26-card hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct War;

impl Variant for War {
    const RANKS: &'static [Rank] = &Rank::ALL;
    const HAND_SIZE: usize = 26;
    type Hand = WarHand;
}

/// A War player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarHand {
    cards: Vec<Card>,
}

impl WarHand {
    /// Largest hand size at which remaining cards may be played face up.
    pub const FACE_UP_THRESHOLD: usize = 3;

    /// Removes and returns a uniformly random card from the hand.
    ///
    /// Returns `None` if the hand is empty.
    pub fn play_card<R>(&mut self, rng: &mut R) -> Option<Card>
    where
        R: Rng + ?Sized,
    {
        if self.cards.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.cards.len());
        Some(self.cards.remove(index))
    }

    /// Returns whether the endgame rule applies: with
    /// [`FACE_UP_THRESHOLD`](Self::FACE_UP_THRESHOLD) or fewer cards left,
    /// players may look at each other's remaining cards.
    #[must_use]
    pub fn allows_face_up(&self) -> bool {
        self.cards.len() <= Self::FACE_UP_THRESHOLD
    }
}

impl Hand for WarHand {
    fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }
}
