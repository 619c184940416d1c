//! Round resolution: the escalation state machine.
//!
//! One logical "turn" of War covers the initial comparison plus any
//! chain of escalations it sets off (ordinary war, suit-up, battle
//! with advantage). The whole chain shares a single [`RoundContext`]
//! accumulator, so the eventual winner claims every card laid face-up
//! since the round started.
//!
//! Escalation is driven by an explicit loop over a deal plan
//! `(deal_count, reversed)` rather than call-stack recursion: tie
//! chains are unbounded in principle, and the loop form lets the same
//! ceiling that bounds the game bound a single round too.

use smallvec::SmallVec;
use tracing::info;

use crate::core::card::{Card, KING};
use crate::core::config::{GameConfig, ROUND_CEILING};
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::GameError;
use crate::events::{ComparisonRecord, Escalation, RoundEvent};

use super::battle::{battle_with_advantage, BattleWinner};
use super::compare::{compare, Comparison};

/// Face-up cards accumulated during one top-level round.
///
/// Lives exactly as long as the round: created fresh when a top-level
/// round begins, never cleared mid-escalation. Nested escalations
/// append to the same accumulator.
#[derive(Clone, Debug, Default)]
pub struct RoundContext {
    played: [SmallVec<[Card; 8]>; 2],
}

impl RoundContext {
    /// Empty accumulator for a new round.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a card laid face-up by `player`.
    pub fn push(&mut self, player: PlayerId, card: Card) {
        self.played[player.index()].push(card);
    }

    /// Cards `player` has laid this round, in play order.
    #[must_use]
    pub fn played(&self, player: PlayerId) -> &[Card] {
        &self.played[player.index()]
    }

    /// The most recently played pair, if both players have played.
    #[must_use]
    pub fn last_pair(&self) -> Option<(Card, Card)> {
        Some((
            *self.played[0].last()?,
            *self.played[1].last()?,
        ))
    }

    /// Total cards laid this round by both players.
    #[must_use]
    pub fn total_played(&self) -> usize {
        self.played[0].len() + self.played[1].len()
    }

    /// Drain the accumulator in claim order: the winner's own cards
    /// first, then the loser's, each in play order.
    fn drain_claim(&mut self, winner: PlayerId) -> impl Iterator<Item = Card> {
        let own = std::mem::take(&mut self.played[winner.index()]);
        let other = std::mem::take(&mut self.played[winner.opponent().index()]);
        own.into_iter().chain(other)
    }
}

/// How one invocation of the engine left the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundResolution {
    /// Cards were claimed; play continues.
    Continuing,
    /// A player ran out of cards mid-round (or won the
    /// mutual-exhaustion fallback); the game is over and the winner
    /// has claimed the table.
    GameWinner(PlayerId),
    /// Both players exhausted with equal last cards. Each side's
    /// played cards return to their own discard pile.
    Draw,
}

/// Resolve one top-level round, including every escalation it spawns.
///
/// `ctx` must be fresh for a top-level round. Emits one
/// [`RoundEvent`] per comparison.
pub fn resolve_round(
    state: &mut GameState,
    ctx: &mut RoundContext,
    events: &mut Vec<RoundEvent>,
) -> Result<RoundResolution, GameError> {
    let config = state.config();
    let cards_at_entry = state.total_cards() + ctx.total_played();

    let mut deal_count = 1usize;
    let mut reversed = false;
    let mut escalations = 0u32;

    loop {
        escalations += 1;
        if escalations > ROUND_CEILING {
            return Err(GameError::RoundCeilingExceeded {
                ceiling: ROUND_CEILING,
            });
        }

        // Deal phase. Exhaustion is re-checked before every pair of
        // draws, not just at round boundaries: a mid-escalation draw
        // can legitimately exhaust a player.
        for _ in 0..deal_count {
            if state.both_exhausted() {
                let resolution = resolve_mutual_exhaustion(ctx, &config)?;
                settle_table(state, ctx, resolution, cards_at_entry)?;
                return Ok(resolution);
            }

            match state.player_mut(PlayerId::One).draw(reversed) {
                Some(card) => ctx.push(PlayerId::One, card),
                None => {
                    claim_round(state, ctx, PlayerId::Two, cards_at_entry)?;
                    return Ok(RoundResolution::GameWinner(PlayerId::Two));
                }
            }
            match state.player_mut(PlayerId::Two).draw(reversed) {
                Some(card) => ctx.push(PlayerId::Two, card),
                None => {
                    claim_round(state, ctx, PlayerId::One, cards_at_entry)?;
                    return Ok(RoundResolution::GameWinner(PlayerId::One));
                }
            }
        }

        let (card1, card2) = ctx
            .last_pair()
            .ok_or_else(|| GameError::InvariantViolation {
                reason: "deal phase completed with an empty accumulator".to_string(),
            })?;

        // A standard war deal (4 cards) never re-triggers house
        // rules; they apply to the initial comparison and to suit-up's
        // own 2-card mini-rounds.
        let house_rules_live = deal_count != 4;
        let outcome = compare(
            card1,
            card2,
            config.suit_up && house_rules_live,
            config.battle_advantage && house_rules_live,
        );

        record_comparison(state, ctx, outcome, events);

        match outcome {
            Comparison::Player1Wins => {
                claim_round(state, ctx, PlayerId::One, cards_at_entry)?;
                return Ok(RoundResolution::Continuing);
            }
            Comparison::Player2Wins => {
                claim_round(state, ctx, PlayerId::Two, cards_at_entry)?;
                return Ok(RoundResolution::Continuing);
            }
            Comparison::Tie => {
                info!("War!");
                deal_count = 4;
                reversed = false;
            }
            Comparison::SuitUp => {
                info!("Suit Up!");
                deal_count = 2;
                reversed = true;
            }
            Comparison::BattleAdvantage => {
                return resolve_battle(state, ctx, events, card1, cards_at_entry);
            }
        }
    }
}

/// Hand the accumulated table cards back out after a terminal
/// resolution: a game winner claims everything; a draw returns each
/// player's own played cards to their own discard pile.
fn settle_table(
    state: &mut GameState,
    ctx: &mut RoundContext,
    resolution: RoundResolution,
    cards_at_entry: usize,
) -> Result<(), GameError> {
    match resolution {
        RoundResolution::GameWinner(winner) => claim_round(state, ctx, winner, cards_at_entry),
        RoundResolution::Draw | RoundResolution::Continuing => {
            for player in PlayerId::BOTH {
                let own = std::mem::take(&mut ctx.played[player.index()]);
                state.player_mut(player).add_to_discard(own);
            }

            let found = state.total_cards();
            if found != cards_at_entry {
                return Err(GameError::conservation(cards_at_entry, found));
            }
            Ok(())
        }
    }
}

/// Both players are completely out of cards mid-round: resolve on the
/// last cards each played, or declare a draw if nothing was played.
///
/// Suit-up is always disabled here. Battle-with-advantage follows
/// `config.exhaustion_battle_advantage`; if it does trigger, neither
/// side can produce a second card, so the King side wins outright.
fn resolve_mutual_exhaustion(
    ctx: &RoundContext,
    config: &GameConfig,
) -> Result<RoundResolution, GameError> {
    let Some((card1, card2)) = ctx.last_pair() else {
        return Ok(RoundResolution::Draw);
    };

    match compare(card1, card2, false, config.exhaustion_battle_advantage) {
        Comparison::Tie => Ok(RoundResolution::Draw),
        Comparison::Player1Wins => Ok(RoundResolution::GameWinner(PlayerId::One)),
        Comparison::Player2Wins => Ok(RoundResolution::GameWinner(PlayerId::Two)),
        Comparison::BattleAdvantage => {
            let king_side = if card1.rank() == KING {
                PlayerId::One
            } else {
                PlayerId::Two
            };
            Ok(RoundResolution::GameWinner(king_side))
        }
        // Unreachable with suit-up disabled; reaching it is a defect.
        Comparison::SuitUp => Err(GameError::unreachable_comparison(
            "mutual-exhaustion fallback",
            card1,
            card2,
        )),
    }
}

/// Run the King/Queen sub-protocol and settle the round on its result.
fn resolve_battle(
    state: &mut GameState,
    ctx: &mut RoundContext,
    events: &mut Vec<RoundEvent>,
    card1: Card,
    cards_at_entry: usize,
) -> Result<RoundResolution, GameError> {
    let queen_side = if card1.rank() == KING {
        PlayerId::Two
    } else {
        PlayerId::One
    };
    let king_side = queen_side.opponent();

    let (queen_card, king_card) = match ctx.last_pair() {
        Some((c1, c2)) if queen_side == PlayerId::One => (c1, c2),
        Some((c1, c2)) => (c2, c1),
        None => {
            return Err(GameError::InvariantViolation {
                reason: "battle triggered with an empty accumulator".to_string(),
            })
        }
    };

    let (player1, player2) = state.players_mut();
    let (battle_winner, cards) = if queen_side == PlayerId::One {
        battle_with_advantage(queen_card, king_card, player1, player2)
    } else {
        battle_with_advantage(queen_card, king_card, player2, player1)
    };

    // The first two entries are the King/Queen pair already in the
    // accumulator; every later draw joins it. Index 2 is the Queen
    // side's second card, anything after that came from the King side.
    for (i, card) in cards.iter().enumerate().skip(2) {
        let owner = if i == 2 { queen_side } else { king_side };
        ctx.push(owner, *card);
    }

    let winner = match battle_winner {
        BattleWinner::QueenSide => queen_side,
        BattleWinner::KingSide => king_side,
    };

    events.push(RoundEvent::BattleResolved {
        winner,
        cards_claimed: ctx.total_played(),
    });

    claim_round(state, ctx, winner, cards_at_entry)?;
    Ok(RoundResolution::Continuing)
}

/// Move the entire accumulated round to the winner's discard pile and
/// verify conservation.
fn claim_round(
    state: &mut GameState,
    ctx: &mut RoundContext,
    winner: PlayerId,
    cards_at_entry: usize,
) -> Result<(), GameError> {
    let cards = ctx.drain_claim(winner);
    state.player_mut(winner).add_to_discard(cards);

    let found = state.total_cards();
    if found != cards_at_entry {
        return Err(GameError::conservation(cards_at_entry, found));
    }
    Ok(())
}

/// Emit the structured record for one resolved comparison, mirrored
/// through `tracing` in the transcript format.
fn record_comparison(
    state: &GameState,
    ctx: &RoundContext,
    outcome: Comparison,
    events: &mut Vec<RoundEvent>,
) {
    let winner = match outcome {
        Comparison::Player1Wins => Some(PlayerId::One),
        Comparison::Player2Wins => Some(PlayerId::Two),
        _ => None,
    };
    let escalation = match outcome {
        Comparison::Tie => Some(Escalation::War),
        Comparison::SuitUp => Some(Escalation::SuitUp),
        Comparison::BattleAdvantage => Some(Escalation::BattleAdvantage),
        _ => None,
    };

    let p1 = state.player(PlayerId::One);
    let p2 = state.player(PlayerId::Two);

    info!(
        "P1: H:{:<2} | D:{:<2} | {}{}",
        p1.hand_size(),
        p1.discard_size(),
        format_cards(ctx.played(PlayerId::One)),
        if winner == Some(PlayerId::One) { "*" } else { " " },
    );
    info!(
        "P2: H:{:<2} | D:{:<2} | {}{}",
        p2.hand_size(),
        p2.discard_size(),
        format_cards(ctx.played(PlayerId::Two)),
        if winner == Some(PlayerId::Two) { "*" } else { " " },
    );

    events.push(RoundEvent::Compared(ComparisonRecord {
        hand_sizes: [p1.hand_size(), p2.hand_size()],
        discard_sizes: [p1.discard_size(), p2.discard_size()],
        played: [
            ctx.played(PlayerId::One).to_vec(),
            ctx.played(PlayerId::Two).to_vec(),
        ],
        winner,
        escalation,
    }));
}

fn format_cards(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(Card::to_string).collect();
    format!("[{}]", inner.join(", "))
}
