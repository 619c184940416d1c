//! Round-resolution rules: card comparison, the escalation state
//! machine, and the battle-with-advantage sub-protocol.
//!
//! The orchestrator in [`crate::game`] drives these; nothing here
//! loops over rounds or touches the round counter.

pub mod battle;
pub mod compare;
pub mod round;

pub use battle::{battle_with_advantage, BattleWinner};
pub use compare::{compare, is_king_vs_queen, Comparison};
pub use round::{resolve_round, RoundContext, RoundResolution};
