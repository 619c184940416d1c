//! Core types: cards, deck building, player piles, state, RNG,
//! configuration.
//!
//! Everything here is a plain owned value; the rules engine in
//! [`crate::rules`] drives these types without any shared mutable
//! state.

pub mod card;
pub mod config;
pub mod deck;
pub mod player;
pub mod rng;
pub mod state;

pub use card::{Card, Suit, ACE, JACK, KING, QUEEN, RANK_MIN};
pub use config::{GameConfig, ROUND_CEILING};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
