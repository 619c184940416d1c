//! Playing cards: ranks, suits, and rank-only value semantics.
//!
//! ## Value Semantics
//!
//! War only cares about rank. Two cards of the same rank are *equal*
//! regardless of suit, and the total ordering is by rank alone. Suit
//! exists solely so the suit-up house rule can detect same-suit
//! comparisons. Equality, ordering, and hashing are therefore all
//! implemented over rank only.
//!
//! ## Display Format
//!
//! Cards render as a rank glyph followed by a suit letter, matching
//! the game's transcript format: `5h`, `10c`, `Jd`, `Qh`, `Ks`, `Ac`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Lowest rank in a standard deck.
pub const RANK_MIN: u8 = 2;
/// Jack.
pub const JACK: u8 = 11;
/// Queen.
pub const QUEEN: u8 = 12;
/// King.
pub const KING: u8 = 13;
/// Ace (high).
pub const ACE: u8 = 14;

/// The four suits of a standard deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits, in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Single-letter suit code used in transcripts.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

/// A single playing card.
///
/// Immutable and `Copy`. Compares by rank only:
///
/// ```
/// use rust_war::core::{Card, Suit, ACE, KING};
///
/// let ace = Card::new(ACE, Suit::Hearts);
/// let king = Card::new(KING, Suit::Spades);
///
/// assert!(king < ace);
/// assert_eq!(ace, Card::new(ACE, Suit::Clubs)); // suit is irrelevant to value
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Create a card. `rank` must be in `2..=14` (14 = Ace).
    #[must_use]
    pub fn new(rank: u8, suit: Suit) -> Self {
        assert!(
            (RANK_MIN..=ACE).contains(&rank),
            "rank {rank} outside 2..=14"
        );
        Self { rank, suit }
    }

    /// Card rank, 2..=14.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Card suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

// Hash must agree with Eq: rank only.
impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rank {
            JACK => write!(f, "J")?,
            QUEEN => write!(f, "Q")?,
            KING => write!(f, "K")?,
            ACE => write!(f, "A")?,
            n => write!(f, "{n}")?,
        }
        write!(f, "{}", self.suit.letter())
    }
}
