//! Game orchestration: drives rounds to completion.
//!
//! The orchestrator owns the [`GameState`] and the event stream,
//! loops [`WarGame::play_one_round`] until a winner or draw, and
//! increments the round counter between rounds. It enforces the round
//! ceiling so a pathological game reports a suspected infinite loop
//! instead of running forever.

use tracing::info;

use crate::core::config::{GameConfig, ROUND_CEILING};
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::GameError;
use crate::events::RoundEvent;
use crate::rules::round::{resolve_round, RoundContext, RoundResolution};

/// Result of one top-level round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// No winner yet; play another round.
    Continuing,
    /// A player won the game this round.
    PlayerWins(PlayerId),
    /// Both players exhausted simultaneously with equal last cards.
    Draw,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if p == player)
    }
}

/// A full game of War.
#[derive(Clone, Debug)]
pub struct WarGame {
    state: GameState,
    events: Vec<RoundEvent>,
}

/// Builder for a [`WarGame`].
#[derive(Clone, Debug)]
pub struct WarGameBuilder {
    name1: String,
    name2: String,
    config: GameConfig,
}

impl Default for WarGameBuilder {
    fn default() -> Self {
        Self {
            name1: "Player 1".to_string(),
            name2: "Player 2".to_string(),
            config: GameConfig::default(),
        }
    }
}

impl WarGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_names(mut self, name1: impl Into<String>, name2: impl Into<String>) -> Self {
        self.name1 = name1.into();
        self.name2 = name2.into();
        self
    }

    /// Enable the suit-up house rule.
    pub fn suit_up(mut self, active: bool) -> Self {
        self.config.suit_up = active;
        self
    }

    /// Enable the battle-with-advantage house rule.
    pub fn battle_advantage(mut self, active: bool) -> Self {
        self.config.battle_advantage = active;
        self
    }

    /// Shuffle the deck at setup (`false` for the fixed ordering).
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.config.shuffle = shuffle;
        self
    }

    /// Fix the shuffle seed for a reproducible game.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Allow the mutual-exhaustion fallback to trigger
    /// battle-with-advantage.
    pub fn exhaustion_battle_advantage(mut self, active: bool) -> Self {
        self.config.exhaustion_battle_advantage = active;
        self
    }

    /// Build the game with the deck already dealt.
    #[must_use]
    pub fn build(self) -> WarGame {
        let mut game = WarGame::new(self.config, self.name1, self.name2);
        game.setup();
        game
    }
}

impl WarGame {
    /// Create a game with empty piles; call [`setup`](Self::setup)
    /// before playing (or use [`WarGame::builder`], which does both).
    #[must_use]
    pub fn new(config: GameConfig, name1: impl Into<String>, name2: impl Into<String>) -> Self {
        Self {
            state: GameState::new(config, name1, name2),
            events: Vec::new(),
        }
    }

    /// Start building a game.
    #[must_use]
    pub fn builder() -> WarGameBuilder {
        WarGameBuilder::new()
    }

    /// Deal the deck per the game's configuration.
    pub fn setup(&mut self) {
        self.state.setup();
    }

    /// The complete game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access, for engineered test scenarios.
    #[doc(hidden)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Event stream accumulated so far.
    #[must_use]
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Current round number (starts at 1).
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.state.round_number
    }

    /// The winner by elimination, if the game is already over.
    #[must_use]
    pub fn is_game_over(&self) -> Option<PlayerId> {
        self.state.winner_by_elimination()
    }

    /// Play one top-level round, including all its escalations.
    ///
    /// Does not advance the round counter; [`play`](Self::play) does
    /// that between rounds. Errors if the counter has already reached
    /// the ceiling.
    pub fn play_one_round(&mut self) -> Result<RoundOutcome, GameError> {
        if self.state.round_number >= ROUND_CEILING {
            return Err(GameError::RoundCeilingExceeded {
                ceiling: ROUND_CEILING,
            });
        }

        info!("---- Round {} ----", self.state.round_number);
        self.events.push(RoundEvent::RoundStarted {
            round: self.state.round_number,
        });

        // Fresh accumulator per top-level round; escalations within
        // the round share it.
        let mut ctx = RoundContext::new();
        let resolution = resolve_round(&mut self.state, &mut ctx, &mut self.events)?;

        Ok(match resolution {
            RoundResolution::Continuing => {
                // A player can come out of a round with nothing left
                // even though the round itself resolved normally.
                match self.state.winner_by_elimination() {
                    Some(winner) => RoundOutcome::PlayerWins(winner),
                    None => RoundOutcome::Continuing,
                }
            }
            RoundResolution::GameWinner(winner) => RoundOutcome::PlayerWins(winner),
            RoundResolution::Draw => RoundOutcome::Draw,
        })
    }

    /// Play rounds until the game ends.
    pub fn play(&mut self) -> Result<GameResult, GameError> {
        loop {
            match self.play_one_round()? {
                RoundOutcome::Continuing => self.state.increment_round(),
                RoundOutcome::PlayerWins(winner) => {
                    let rounds = self.state.round_number;
                    info!(
                        "{} ({}) Wins in {rounds} rounds!",
                        winner,
                        self.state.player(winner).name()
                    );
                    self.events.push(RoundEvent::GameOver {
                        winner: Some(winner),
                        rounds,
                    });
                    return Ok(GameResult::Winner(winner));
                }
                RoundOutcome::Draw => {
                    info!("Draw!");
                    self.events.push(RoundEvent::GameOver {
                        winner: None,
                        rounds: self.state.round_number,
                    });
                    return Ok(GameResult::Draw);
                }
            }
        }
    }
}
