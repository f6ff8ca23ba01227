//! A card deck and hand engine for War, Belote, and SixtySix.
//!
//! The crate provides a generic [`Deck`] parameterized by a per-game
//! [`Variant`] (rank universe, rank order, hand size, hand type), and a
//! specialized hand type per game with the game's rule queries: random play
//! for [`War`], announces (belote, runs, carrés) for [`Belote`], marriages
//! for [`SixtySix`].
//!
//! Randomness is always injected, so shuffles and plays are seedable.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use talon::{Belote, Deck, Hand};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut deck = Deck::<Belote>::new();
//! deck.shuffle(&mut rng);
//!
//! let hand = deck.deal();
//! assert_eq!(hand.size(), 8);
//! assert_eq!(deck.size(), 24);
//! if hand.has_belote() {
//!     println!("king and queen of one suit");
//! }
//! ```

pub mod belote;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod sixty_six;
pub mod variant;
pub mod war;

// Re-export main types
pub use belote::{Belote, BeloteHand};
pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::ParseCardError;
pub use hand::Hand;
pub use sixty_six::{SixtySix, SixtySixHand};
pub use variant::Variant;
pub use war::{War, WarHand};
