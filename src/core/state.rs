//! Complete game state: both players, the round counter, rule flags,
//! and the shuffle RNG.
//!
//! A `GameState` is exclusively owned by the single call stack playing
//! a game; nothing here crosses thread boundaries. Cloning is cheap
//! (`im` piles), so snapshots for inspection or replay cost O(1).

use super::config::GameConfig;
use super::deck;
use super::player::{Player, PlayerId};
use super::rng::GameRng;

/// Full state of one game of War.
#[derive(Clone, Debug)]
pub struct GameState {
    players: [Player; 2],
    /// Current round number, starting at 1. Mutated only by the
    /// orchestrator between rounds.
    pub round_number: u32,
    config: GameConfig,
    rng: GameRng,
}

impl GameState {
    /// Create a state with empty piles. Call [`setup`](Self::setup) to
    /// deal the deck.
    #[must_use]
    pub fn new(config: GameConfig, name1: impl Into<String>, name2: impl Into<String>) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self {
            players: [Player::new(name1), Player::new(name2)],
            round_number: 1,
            config,
            rng,
        }
    }

    /// Build the 52-card deck (shuffled per config) and deal half to
    /// each player.
    pub fn setup(&mut self) {
        let deck = if self.config.shuffle {
            deck::shuffled(&mut self.rng)
        } else {
            deck::standard()
        };
        let (hand1, hand2) = deck::deal(deck);

        self.players[0].stack_hand(hand1);
        self.players[1].stack_hand(hand2);
    }

    /// This game's immutable configuration.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Shared access to a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Mutable access to a player.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Mutable access to both players at once (player 1 first).
    pub fn players_mut(&mut self) -> (&mut Player, &mut Player) {
        let [p1, p2] = &mut self.players;
        (p1, p2)
    }

    /// Total cards across all four piles.
    ///
    /// Conservation invariant: always 52 once the deck is dealt - no
    /// card is ever created, duplicated, or lost.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.players.iter().map(Player::total_cards).sum()
    }

    /// True when neither player holds a single card.
    #[must_use]
    pub fn both_exhausted(&self) -> bool {
        !self.players[0].has_cards() && !self.players[1].has_cards()
    }

    /// A player with no cards anywhere has lost. Player 1 is checked
    /// first.
    #[must_use]
    pub fn winner_by_elimination(&self) -> Option<PlayerId> {
        if !self.players[0].has_cards() {
            Some(PlayerId::Two)
        } else if !self.players[1].has_cards() {
            Some(PlayerId::One)
        } else {
            None
        }
    }

    /// Advance the round counter.
    pub fn increment_round(&mut self) {
        self.round_number += 1;
    }

    /// Replace a player's piles wholesale. Test scaffolding for
    /// engineered scenarios.
    #[doc(hidden)]
    pub fn set_player(&mut self, id: PlayerId, player: Player) {
        self.players[id.index()] = player;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_deals_26_each() {
        let mut state = GameState::new(GameConfig::default(), "Player 1", "Player 2");
        state.setup();

        assert_eq!(state.player(PlayerId::One).total_cards(), 26);
        assert_eq!(state.player(PlayerId::Two).total_cards(), 26);
        assert_eq!(state.total_cards(), deck::DECK_SIZE);
    }

    #[test]
    fn test_elimination_detection() {
        let mut state = GameState::new(GameConfig::default(), "Player 1", "Player 2");

        // Neither player has cards yet; player 1 is checked first.
        assert_eq!(state.winner_by_elimination(), Some(PlayerId::Two));

        state.setup();
        assert_eq!(state.winner_by_elimination(), None);
    }
}
