//! Deck construction and dealing.
//!
//! A standard 52-card deck, optionally shuffled, split into two equal
//! halves by alternate dealing (the way you would deal a real game).
//! The unshuffled ordering is fixed and documented so tests can rely
//! on it: suits in [`Suit::ALL`] order, ranks ascending within each
//! suit.

use super::card::{Card, Suit, ACE, RANK_MIN};
use super::rng::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Build the full 52-card deck in fixed order.
#[must_use]
pub fn standard() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in RANK_MIN..=ACE {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// Build the full deck and shuffle it.
#[must_use]
pub fn shuffled(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = standard();
    rng.shuffle(&mut deck);
    deck
}

/// Deal a deck into two hands by alternating cards.
///
/// Even-indexed cards go to player 1, odd-indexed to player 2.
#[must_use]
pub fn deal(deck: Vec<Card>) -> (Vec<Card>, Vec<Card>) {
    let mut hand1 = Vec::with_capacity(deck.len() / 2 + 1);
    let mut hand2 = Vec::with_capacity(deck.len() / 2);

    for (i, card) in deck.into_iter().enumerate() {
        if i % 2 == 0 {
            hand1.push(card);
        } else {
            hand2.push(card);
        }
    }

    (hand1, hand2)
}
