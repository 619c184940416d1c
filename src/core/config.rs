//! Game configuration.
//!
//! Rule flags are fixed for a game's lifetime and threaded explicitly
//! through every engine entry point - the engine never reads ambient
//! global state.

use serde::{Deserialize, Serialize};

/// Hard ceiling on the round counter and on escalation iterations
/// within a single round.
///
/// War can enter genuine infinite loops when discard-refill ordering
/// causes both players to perpetually re-draw the same sequence, so
/// the engine reports a suspected infinite loop instead of running
/// unbounded.
pub const ROUND_CEILING: u32 = 10_000;

/// Immutable configuration for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Enable the suit-up house rule: same-suit (unequal-rank)
    /// comparisons trigger a 2-card reversed-order mini-round.
    pub suit_up: bool,

    /// Enable the battle-with-advantage house rule: King vs Queen
    /// triggers a bespoke up-to-3-extra-card sub-protocol.
    pub battle_advantage: bool,

    /// Shuffle the deck at setup. `false` gives the fixed deck
    /// ordering for deterministic testing.
    pub shuffle: bool,

    /// Seed for the shuffle RNG. `None` draws a seed from entropy.
    pub seed: Option<u64>,

    /// Whether the mutual-exhaustion fallback comparison may still
    /// trigger battle-with-advantage. Suit-up is always disabled in
    /// the fallback; this rule's behavior there is a deliberate knob.
    ///
    /// With neither side able to play a second card, a triggered
    /// battle resolves to the King side - which is also who the plain
    /// rank comparison would pick. Both settings yield the same
    /// winner; only the resolution path differs.
    pub exhaustion_battle_advantage: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            suit_up: false,
            battle_advantage: false,
            shuffle: true,
            seed: None,
            exhaustion_battle_advantage: false,
        }
    }
}
