//! Variant hand rule tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use talon::{
    BeloteHand, Card, Hand, ParseCardError, Rank, SixtySixHand, Suit, WarHand,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn belote_hand(cards: &[Card]) -> BeloteHand {
    BeloteHand::from_cards(cards.to_vec())
}

fn sixty_six_hand(cards: &[Card]) -> SixtySixHand {
    SixtySixHand::from_cards(cards.to_vec())
}

#[test]
fn belote_needs_king_and_queen_of_one_suit() {
    let hand = belote_hand(&[
        card(Rank::King, Suit::Spades),
        card(Rank::Queen, Suit::Spades),
        card(Rank::Seven, Suit::Hearts),
    ]);
    assert!(hand.has_belote());

    let split_suits = belote_hand(&[
        card(Rank::King, Suit::Spades),
        card(Rank::Queen, Suit::Hearts),
    ]);
    assert!(!split_suits.has_belote());

    assert!(!belote_hand(&[]).has_belote());
}

#[test]
fn tierce_is_three_consecutive_powers_in_one_suit() {
    let hand = belote_hand(&[
        card(Rank::Seven, Suit::Spades),
        card(Rank::Eight, Suit::Spades),
        card(Rank::Nine, Suit::Spades),
    ]);
    assert!(hand.has_tierce());
    assert!(!hand.has_quarte());
    assert!(!hand.has_quint());

    // 9 and jack are adjacent under the Belote order, draw order irrelevant.
    let top_of_order = belote_hand(&[
        card(Rank::Jack, Suit::Hearts),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Queen, Suit::Hearts),
    ]);
    assert!(top_of_order.has_tierce());

    // King then ace skips the 10.
    let gapped = belote_hand(&[
        card(Rank::Queen, Suit::Clubs),
        card(Rank::King, Suit::Clubs),
        card(Rank::Ace, Suit::Clubs),
    ]);
    assert!(!gapped.has_tierce());

    // Consecutive ranks across two suits are not a run.
    let mixed = belote_hand(&[
        card(Rank::Seven, Suit::Spades),
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
    ]);
    assert!(!mixed.has_tierce());
}

#[test]
fn longer_runs_imply_shorter_ones() {
    let hand = belote_hand(&[
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Jack, Suit::Diamonds),
        card(Rank::Queen, Suit::Diamonds),
        card(Rank::Ace, Suit::Hearts),
    ]);
    assert!(hand.has_quint());
    assert!(hand.has_quarte());
    assert!(hand.has_tierce());
}

#[test]
fn carre_needs_all_four_suits_of_the_rank() {
    let jacks = belote_hand(&[
        card(Rank::Jack, Suit::Diamonds),
        card(Rank::Jack, Suit::Spades),
        card(Rank::Jack, Suit::Clubs),
        card(Rank::Jack, Suit::Hearts),
    ]);
    assert!(jacks.has_carre_of_jacks());
    assert!(!jacks.has_carre_of_nines());
    assert!(!jacks.has_carre_of_aces());

    let three_jacks = belote_hand(&[
        card(Rank::Jack, Suit::Diamonds),
        card(Rank::Jack, Suit::Spades),
        card(Rank::Jack, Suit::Clubs),
    ]);
    assert!(!three_jacks.has_carre_of_jacks());

    let nines = belote_hand(&[
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Nine, Suit::Hearts),
    ]);
    assert!(nines.has_carre_of_nines());
}

#[test]
fn highest_of_suit_follows_the_belote_order() {
    let hand = belote_hand(&[
        card(Rank::King, Suit::Spades),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
    ]);

    // 10 outranks the king under the Belote order.
    assert_eq!(
        hand.highest_of_suit(Suit::Spades),
        Some(card(Rank::Ten, Suit::Spades))
    );
    assert_eq!(
        hand.highest_of_suit(Suit::Hearts),
        Some(card(Rank::Ace, Suit::Hearts))
    );
    assert_eq!(hand.highest_of_suit(Suit::Clubs), None);
}

#[test]
fn twenty_and_forty_split_on_the_trump_suit() {
    let hand = sixty_six_hand(&[
        card(Rank::King, Suit::Diamonds),
        card(Rank::Queen, Suit::Diamonds),
        card(Rank::Nine, Suit::Clubs),
    ]);

    assert!(hand.has_twenty(Suit::Hearts));
    assert!(!hand.has_forty(Suit::Hearts));

    assert!(hand.has_forty(Suit::Diamonds));
    assert!(!hand.has_twenty(Suit::Diamonds));
}

#[test]
fn marriages_need_both_royals() {
    let king_only = sixty_six_hand(&[
        card(Rank::King, Suit::Diamonds),
        card(Rank::Queen, Suit::Spades),
    ]);
    assert!(!king_only.has_twenty(Suit::Hearts));
    assert!(!king_only.has_forty(Suit::Diamonds));
    assert!(!sixty_six_hand(&[]).has_twenty(Suit::Hearts));
}

#[test]
fn face_up_threshold_is_three_cards() {
    let mut cards = vec![
        card(Rank::Two, Suit::Clubs),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Ace, Suit::Diamonds),
    ];

    let hand = WarHand::from_cards(cards.clone());
    assert_eq!(hand.size(), 4);
    assert!(!hand.allows_face_up());

    for len in (0..=3).rev() {
        cards.truncate(len);
        assert!(WarHand::from_cards(cards.clone()).allows_face_up());
    }
}

#[test]
fn play_card_removes_one_random_member() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let cards = vec![
        card(Rank::Two, Suit::Clubs),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Ten, Suit::Spades),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Ace, Suit::Spades),
    ];
    let mut hand = WarHand::from_cards(cards.clone());

    let mut played = HashSet::new();
    while let Some(card) = hand.play_card(&mut rng) {
        assert!(cards.contains(&card));
        assert!(played.insert(card)); // each card comes out once
    }

    assert_eq!(played.len(), cards.len());
    assert!(hand.is_empty());
    assert_eq!(hand.play_card(&mut rng), None);
}

#[test]
fn cards_display_and_parse() {
    let queen = card(Rank::Queen, Suit::Spades);
    assert_eq!(queen.to_string(), "Queen of Spades");
    assert_eq!("Queen of Spades".parse::<Card>(), Ok(queen));
    assert_eq!("queen of spades".parse::<Card>(), Ok(queen));

    assert_eq!(
        card(Rank::Ten, Suit::Hearts).to_string(),
        "10 of Hearts"
    );
    assert_eq!(
        "10 of hearts".parse::<Card>(),
        Ok(card(Rank::Ten, Suit::Hearts))
    );

    assert_eq!(
        "Joker of Hearts".parse::<Card>(),
        Err(ParseCardError::InvalidRank)
    );
    assert_eq!(
        "Ace of Moons".parse::<Card>(),
        Err(ParseCardError::InvalidSuit)
    );
    assert_eq!(
        "AceHearts".parse::<Card>(),
        Err(ParseCardError::InvalidFormat)
    );
}
