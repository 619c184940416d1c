//! Structured round-by-round event stream.
//!
//! The engine emits one record per resolved comparison, plus round
//! and game markers. A logging collaborator (transcript writer, UI)
//! consumes these; everything is serde-serializable so the stream can
//! be persisted as-is. The engine also mirrors each record through
//! `tracing` for ambient observability.

use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::player::PlayerId;

/// Which escalation a comparison triggered, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Escalation {
    /// Tie - each side commits 4 more cards.
    War,
    /// Same suit under the suit-up rule - 2-card reversed mini-round.
    SuitUp,
    /// King vs Queen under battle-with-advantage.
    BattleAdvantage,
}

/// Snapshot of one resolved comparison.
///
/// Pile sizes are captured *after* the deal, before any transfer, so
/// a transcript line like the original's
/// `P1: H:20 | D:3 | [Kc, 5h]*` can be reconstructed exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// Remaining hand sizes, player 1 first.
    pub hand_sizes: [usize; 2],
    /// Remaining discard sizes, player 1 first.
    pub discard_sizes: [usize; 2],
    /// Every card each player has laid face-up this round, in play
    /// order (including earlier escalation stages).
    pub played: [Vec<Card>; 2],
    /// Winner of this comparison, if it produced one.
    pub winner: Option<PlayerId>,
    /// Escalation this comparison triggered, if it didn't produce a
    /// winner.
    pub escalation: Option<Escalation>,
}

/// One entry in the game's event stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A new top-level round began.
    RoundStarted { round: u32 },
    /// A comparison resolved (possibly into an escalation).
    Compared(ComparisonRecord),
    /// A battle-with-advantage sub-protocol finished.
    BattleResolved {
        winner: PlayerId,
        cards_claimed: usize,
    },
    /// The game ended. `winner: None` is a draw.
    GameOver {
        winner: Option<PlayerId>,
        rounds: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Card, Suit, KING};

    #[test]
    fn test_events_serialize() {
        let record = ComparisonRecord {
            hand_sizes: [20, 22],
            discard_sizes: [5, 3],
            played: [vec![Card::new(KING, Suit::Clubs)], vec![Card::new(5, Suit::Hearts)]],
            winner: Some(PlayerId::One),
            escalation: None,
        };

        let json = serde_json::to_string(&RoundEvent::Compared(record.clone())).unwrap();
        let back: RoundEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RoundEvent::Compared(record));
    }
}
