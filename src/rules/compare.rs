//! Card comparison and rule-trigger detection.
//!
//! The comparator is the single place where the house rules hook into
//! card values. Outcomes form a closed enum so every dispatch site
//! matches exhaustively - there is no representable "no matching
//! case" for valid ranks.

use crate::core::card::{Card, KING, QUEEN};

/// Outcome of comparing two face-up cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// Equal rank - war.
    Tie,
    /// Player 1's card ranks higher.
    Player1Wins,
    /// Player 2's card ranks higher.
    Player2Wins,
    /// Same suit with suit-up active - mini-round escalation.
    SuitUp,
    /// King vs Queen with battle-with-advantage active.
    BattleAdvantage,
}

/// Compare two cards under the active rule flags.
///
/// Precedence, first match wins:
/// 1. equal rank -> [`Comparison::Tie`]
/// 2. battle-advantage active and the pair is King/Queen ->
///    [`Comparison::BattleAdvantage`]
/// 3. suit-up active and same suit -> [`Comparison::SuitUp`]
/// 4. higher rank wins
///
/// Battle-advantage outranks suit-up: a same-suit King vs Queen still
/// triggers the battle.
#[must_use]
pub fn compare(
    card1: Card,
    card2: Card,
    suit_up_active: bool,
    battle_advantage_active: bool,
) -> Comparison {
    if card1.rank() == card2.rank() {
        Comparison::Tie
    } else if battle_advantage_active && is_king_vs_queen(card1, card2) {
        Comparison::BattleAdvantage
    } else if suit_up_active && card1.suit() == card2.suit() {
        Comparison::SuitUp
    } else if card1.rank() > card2.rank() {
        Comparison::Player1Wins
    } else {
        Comparison::Player2Wins
    }
}

/// One card is the King and the other the Queen, in either order.
#[must_use]
pub fn is_king_vs_queen(card1: Card, card2: Card) -> bool {
    matches!(
        (card1.rank(), card2.rank()),
        (KING, QUEEN) | (QUEEN, KING)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Suit, ACE};

    #[test]
    fn test_basic_comparisons() {
        let ace = Card::new(ACE, Suit::Hearts);
        let king = Card::new(KING, Suit::Spades);

        assert_eq!(compare(ace, king, false, false), Comparison::Player1Wins);
        assert_eq!(compare(king, ace, false, false), Comparison::Player2Wins);
        assert_eq!(
            compare(ace, Card::new(ACE, Suit::Clubs), false, false),
            Comparison::Tie
        );
    }

    #[test]
    fn test_suit_up_trigger() {
        let five_hearts = Card::new(5, Suit::Hearts);
        let ten_hearts = Card::new(10, Suit::Hearts);
        let king_spades = Card::new(KING, Suit::Spades);

        // Same suit, unequal rank, rule active.
        assert_eq!(
            compare(five_hearts, ten_hearts, true, false),
            Comparison::SuitUp
        );
        // Different suits: normal comparison.
        assert_eq!(
            compare(five_hearts, king_spades, true, false),
            Comparison::Player2Wins
        );
        // Rule inactive: normal comparison.
        assert_eq!(
            compare(five_hearts, ten_hearts, false, false),
            Comparison::Player2Wins
        );
    }

    #[test]
    fn test_battle_advantage_trigger() {
        let king = Card::new(KING, Suit::Spades);
        let queen = Card::new(QUEEN, Suit::Hearts);
        let ace = Card::new(ACE, Suit::Clubs);

        // Both orders trigger.
        assert_eq!(compare(king, queen, false, true), Comparison::BattleAdvantage);
        assert_eq!(compare(queen, king, false, true), Comparison::BattleAdvantage);

        // Only King vs Queen triggers.
        assert_eq!(compare(king, ace, false, true), Comparison::Player2Wins);

        // Rule inactive: King simply beats Queen.
        assert_eq!(compare(king, queen, false, false), Comparison::Player1Wins);
    }

    #[test]
    fn test_battle_advantage_checked_before_suit_up() {
        let king = Card::new(KING, Suit::Hearts);
        let queen = Card::new(QUEEN, Suit::Hearts);

        // Same suit AND King/Queen with both rules on: battle wins.
        assert_eq!(compare(king, queen, true, true), Comparison::BattleAdvantage);
        // With battle off, suit-up catches the same pair.
        assert_eq!(compare(king, queen, true, false), Comparison::SuitUp);
    }
}
