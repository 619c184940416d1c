//! Player identification and pile management.
//!
//! ## PlayerId
//!
//! War is strictly two-player, so the identifier is a closed enum
//! rather than a numeric index. `opponent()` gives the other seat.
//!
//! ## Player
//!
//! Each player owns two piles:
//! - **hand**: a double-ended sequence; the back is the "top" (normal
//!   draw end). Suit-up mini-rounds draw from the front instead.
//! - **discard**: face-down cards accumulated in play order, picked
//!   back up when the hand runs dry.
//!
//! Both piles use `im::Vector` for cheap O(1) clones, so game states
//! can be snapshotted freely.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 0-based index for array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Both seats, player 1 first.
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// A player's name and card piles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vector<Card>,
    discard: Vector<Card>,
}

impl Player {
    /// Create a player with an empty hand and discard pile.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vector::new(),
            discard: Vector::new(),
        }
    }

    /// Create a player holding the given cards, first card at the
    /// bottom of the hand.
    #[must_use]
    pub fn with_cards(name: impl Into<String>, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut player = Self::new(name);
        player.hand.extend(cards);
        player
    }

    /// Player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Does this player have any cards left, in either pile?
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty() || !self.discard.is_empty()
    }

    /// Current hand size.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Current discard pile size.
    #[must_use]
    pub fn discard_size(&self) -> usize {
        self.discard.len()
    }

    /// Total cards owned across both piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hand.len() + self.discard.len()
    }

    /// Draw a card from the hand, refilling from the discard pile if
    /// the hand is empty.
    ///
    /// Returns `None` only when the player has no cards anywhere -
    /// the elimination signal, checked on every draw because a
    /// mid-escalation draw can legitimately exhaust a player.
    ///
    /// Draws from the top (back) by default; `from_bottom` draws from
    /// the front instead (suit-up mini-rounds).
    pub fn draw(&mut self, from_bottom: bool) -> Option<Card> {
        if self.hand.is_empty() {
            if self.discard.is_empty() {
                return None;
            }
            self.refill_hand_from_discard();
        }

        if from_bottom {
            self.hand.pop_front()
        } else {
            self.hand.pop_back()
        }
    }

    /// Append cards to the discard pile in the given order.
    pub fn add_to_discard(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard.extend(cards);
    }

    /// Move the entire discard pile into the hand, reversed.
    ///
    /// The most recently discarded card ends up at the bottom of the
    /// hand, so cards discarded earliest in a round become drawable
    /// soonest after the refill.
    fn refill_hand_from_discard(&mut self) {
        while let Some(card) = self.discard.pop_back() {
            self.hand.push_back(card);
        }
    }

    /// Put cards into the hand, first card at the bottom.
    pub(crate) fn stack_hand(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Suit;

    #[test]
    fn test_draw_from_top_and_bottom() {
        let mut player = Player::with_cards(
            "Test",
            [Card::new(5, Suit::Hearts), Card::new(10, Suit::Clubs)],
        );

        // Top of hand is the last card added.
        let top = player.draw(false).unwrap();
        assert_eq!(top.to_string(), "10c");
        assert_eq!(player.hand_size(), 1);

        let bottom = player.draw(true).unwrap();
        assert_eq!(bottom.to_string(), "5h");
        assert_eq!(player.hand_size(), 0);
    }

    #[test]
    fn test_draw_refills_from_discard() {
        let mut player = Player::new("Test");
        player.add_to_discard([Card::new(5, Suit::Hearts), Card::new(10, Suit::Clubs)]);

        let card = player.draw(false);
        assert!(card.is_some());
        assert_eq!(player.discard_size(), 0);
        assert_eq!(player.hand_size(), 1);
    }

    #[test]
    fn test_refill_reverses_order() {
        // Discard [A, B, C] with C discarded last. After refill, the
        // earliest-discarded card (A) must be drawable soonest.
        let a = Card::new(2, Suit::Hearts);
        let b = Card::new(3, Suit::Hearts);
        let c = Card::new(4, Suit::Hearts);

        let mut player = Player::new("Test");
        player.add_to_discard([a, b, c]);

        assert_eq!(player.draw(false), Some(a));
        assert_eq!(player.draw(false), Some(b));
        assert_eq!(player.draw(false), Some(c));
    }

    #[test]
    fn test_draw_with_no_cards_is_elimination() {
        let mut player = Player::new("Test");
        assert!(!player.has_cards());
        assert_eq!(player.draw(false), None);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
    }
}
