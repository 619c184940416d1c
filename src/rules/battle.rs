//! The battle-with-advantage sub-protocol.
//!
//! Triggered by a King vs Queen comparison. The King side has the
//! advantage: if its second card loses, it gets one more chance with
//! a third card. Comparisons here are by rank only - no suit-up and
//! no nested battles.

use smallvec::SmallVec;
use tracing::info;

use crate::core::card::Card;
use crate::core::player::Player;

/// Which side of the battle won.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleWinner {
    /// The player who laid the Queen.
    QueenSide,
    /// The player who laid the King.
    KingSide,
}

/// Resolve a battle with advantage.
///
/// `queen_card` and `king_card` are the already-played cards that
/// triggered the battle. The returned card list starts with those two
/// and appends each card drawn during the protocol, in draw order, so
/// its length is the number of cards the winner claims (2 to 5).
///
/// A side that cannot produce a required card forfeits on the spot:
/// - Queen side out before its second card: King side wins, 2 cards.
/// - King side out before its second card: Queen side wins, 3 cards.
/// - King side out before its tie-break card: Queen side wins, 4.
pub fn battle_with_advantage(
    queen_card: Card,
    king_card: Card,
    queen_player: &mut Player,
    king_player: &mut Player,
) -> (BattleWinner, SmallVec<[Card; 5]>) {
    let mut all_cards: SmallVec<[Card; 5]> = SmallVec::new();
    all_cards.push(queen_card);
    all_cards.push(king_card);

    info!("Battle with Advantage!");

    let Some(queen_second) = queen_player.draw(false) else {
        return (BattleWinner::KingSide, all_cards);
    };
    all_cards.push(queen_second);

    let Some(king_second) = king_player.draw(false) else {
        return (BattleWinner::QueenSide, all_cards);
    };
    all_cards.push(king_second);

    info!(
        "Queen's second card: {queen_second}, King's second card: {king_second}"
    );

    if king_second.rank() > queen_second.rank() {
        info!("King's card is higher - King wins all 4 cards!");
        return (BattleWinner::KingSide, all_cards);
    }

    // King's second card lost; the advantage is one more draw.
    let Some(king_third) = king_player.draw(false) else {
        return (BattleWinner::QueenSide, all_cards);
    };
    all_cards.push(king_third);

    info!("King's third card: {king_third}");

    if king_third.rank() > queen_second.rank() {
        info!("King's third card is higher - King wins all 5 cards!");
        (BattleWinner::KingSide, all_cards)
    } else {
        info!("King's third card is still lower - Queen wins all 5 cards!");
        (BattleWinner::QueenSide, all_cards)
    }
}
