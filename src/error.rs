//! Error taxonomy.
//!
//! Only two things can go wrong, and neither is retried:
//! - a logic defect surfacing as a broken invariant (fatal), or
//! - the round counter hitting its ceiling, which means the game is
//!   suspected of looping forever (fatal, reported).
//!
//! A player running out of cards is *not* an error - it is a normal
//! terminal outcome, carried as a value through round resolution.

use thiserror::Error;

use crate::core::card::Card;

/// Fatal conditions that abort a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A logic defect: card conservation broke, or a comparison
    /// produced an outcome that should be unreachable in context.
    #[error("invariant violated: {reason}")]
    InvariantViolation { reason: String },

    /// The round counter (or escalation count within one round)
    /// reached the ceiling. Almost certainly an infinite loop caused
    /// by pathological discard-refill ordering.
    #[error("round ceiling of {ceiling} exceeded; infinite loop suspected")]
    RoundCeilingExceeded { ceiling: u32 },
}

impl GameError {
    /// Conservation failure: the piles no longer sum to the dealt
    /// deck.
    #[must_use]
    pub fn conservation(expected: usize, found: usize) -> Self {
        GameError::InvariantViolation {
            reason: format!("card count changed during round: expected {expected}, found {found}"),
        }
    }

    /// A comparison outcome that cannot legally occur where it was
    /// observed.
    #[must_use]
    pub fn unreachable_comparison(context: &str, card1: Card, card2: Card) -> Self {
        GameError::InvariantViolation {
            reason: format!("unreachable comparison outcome in {context}: {card1} vs. {card2}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::conservation(52, 51);
        assert!(err.to_string().contains("expected 52, found 51"));

        let err = GameError::RoundCeilingExceeded { ceiling: 10_000 };
        assert!(err.to_string().contains("infinite loop suspected"));
    }
}
