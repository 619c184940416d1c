//! # rust-war
//!
//! A two-player simulation of the card game War, with three
//! escalation variants: standard tie-war, "suit-up", and "battle with
//! advantage".
//!
//! ## Design Principles
//!
//! 1. **Explicit escalation loop**: tie chains are resolved by an
//!    iterative state machine, not call-stack recursion, and are
//!    bounded by the same ceiling that bounds the game.
//!
//! 2. **Configuration over ambient state**: an immutable
//!    [`GameConfig`] is threaded through every entry point; nothing
//!    reads globals.
//!
//! 3. **Closed outcome types**: comparisons resolve into a tagged
//!    enum matched exhaustively at every dispatch site, so "no
//!    matching case" is unrepresentable.
//!
//! 4. **Deterministic by seed**: a seeded ChaCha8 shuffle (or the
//!    fixed deck ordering) makes every game replayable.
//!
//! ## Modules
//!
//! - `core`: cards, deck building, player piles, RNG, configuration,
//!   state
//! - `rules`: the comparator, the round-resolution engine, and the
//!   battle-with-advantage sub-protocol
//! - `game`: the orchestrator driving rounds to completion
//! - `events`: the structured round-by-round event stream
//! - `error`: the (small) error taxonomy
//!
//! ## Example
//!
//! ```
//! use rust_war::{GameResult, WarGame};
//!
//! let mut game = WarGame::builder()
//!     .player_names("Alice", "Bob")
//!     .suit_up(true)
//!     .seed(42)
//!     .build();
//!
//! match game.play() {
//!     Ok(GameResult::Winner(player)) => {
//!         println!("{player} wins in {} rounds", game.round_number());
//!     }
//!     Ok(GameResult::Draw) => println!("Draw!"),
//!     Err(err) => eprintln!("game aborted: {err}"),
//! }
//! ```

pub mod core;
pub mod error;
pub mod events;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Card, GameConfig, GameRng, GameRngState, GameState, Player, PlayerId, Suit, ACE, JACK, KING,
    QUEEN, ROUND_CEILING,
};

pub use crate::rules::{
    battle_with_advantage, compare, resolve_round, BattleWinner, Comparison, RoundContext,
    RoundResolution,
};

pub use crate::error::GameError;

pub use crate::events::{ComparisonRecord, Escalation, RoundEvent};

pub use crate::game::{GameResult, RoundOutcome, WarGame, WarGameBuilder};
