//! Error types for card parsing.
//!
//! Deck and hand operations never fail: an empty draw is `None` and a short
//! deal produces a short hand. Parsing card text is the one fallible surface.

use thiserror::Error;

/// Errors that can occur when parsing a card, rank, or suit from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The rank is not one of 2-10, jack, queen, king, or ace.
    #[error("unrecognized rank")]
    InvalidRank,
    /// The suit is not diamonds, spades, clubs, or hearts.
    #[error("unrecognized suit")]
    InvalidSuit,
    /// The card text is not of the form `<rank> of <suit>`.
    #[error("expected `<rank> of <suit>`")]
    InvalidFormat,
}
