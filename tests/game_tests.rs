//! Full-game integration tests: setup, round loops, termination, and
//! ceiling behavior.

use rust_war::core::{Card, Player, Suit, ACE, ROUND_CEILING};
use rust_war::{GameError, GameResult, PlayerId, RoundEvent, RoundOutcome, WarGame};

#[test]
fn test_setup_splits_deck_evenly() {
    let game = WarGame::builder().seed(7).build();

    assert_eq!(game.state().player(PlayerId::One).total_cards(), 26);
    assert_eq!(game.state().player(PlayerId::Two).total_cards(), 26);
    assert_eq!(game.state().total_cards(), 52);
}

#[test]
fn test_same_seed_same_game() {
    let mut game1 = WarGame::builder().seed(42).build();
    let mut game2 = WarGame::builder().seed(42).build();

    let result1 = game1.play();
    let result2 = game2.play();

    assert_eq!(result1, result2);
    assert_eq!(game1.round_number(), game2.round_number());
    assert_eq!(game1.events(), game2.events());
}

#[test]
fn test_unshuffled_deck_is_deterministic() {
    let mut game1 = WarGame::builder().shuffle(false).build();
    let mut game2 = WarGame::builder().shuffle(false).build();

    let outcome1 = game1.play_one_round().unwrap();
    let outcome2 = game2.play_one_round().unwrap();

    assert_eq!(outcome1, outcome2);
    assert_eq!(game1.events(), game2.events());
}

#[test]
fn test_conservation_holds_every_round() {
    let mut game = WarGame::builder().seed(1).build();

    loop {
        match game.play_one_round().unwrap() {
            RoundOutcome::Continuing => {
                assert_eq!(game.state().total_cards(), 52);
                game.state_mut().increment_round();
            }
            _ => break,
        }
        if game.round_number() >= ROUND_CEILING {
            break;
        }
    }
}

#[test]
fn test_eliminated_player_loses_the_game() {
    let mut game = WarGame::builder().build();
    game.state_mut()
        .set_player(PlayerId::One, Player::with_cards("Player 1", [Card::new(2, Suit::Hearts)]));
    game.state_mut()
        .set_player(PlayerId::Two, Player::with_cards("Player 2", [Card::new(ACE, Suit::Clubs)]));

    let result = game.play().unwrap();
    assert_eq!(result, GameResult::Winner(PlayerId::Two));
    assert!(result.is_winner(PlayerId::Two));
    assert_eq!(game.is_game_over(), Some(PlayerId::Two));
}

#[test]
fn test_equal_final_cards_is_a_draw() {
    let mut game = WarGame::builder().build();
    game.state_mut()
        .set_player(PlayerId::One, Player::with_cards("Player 1", [Card::new(9, Suit::Hearts)]));
    game.state_mut()
        .set_player(PlayerId::Two, Player::with_cards("Player 2", [Card::new(9, Suit::Clubs)]));

    let result = game.play().unwrap();
    assert_eq!(result, GameResult::Draw);

    assert!(game
        .events()
        .iter()
        .any(|e| matches!(e, RoundEvent::GameOver { winner: None, .. })));
}

#[test]
fn test_round_ceiling_aborts_the_game() {
    let mut game = WarGame::builder().seed(42).build();
    game.state_mut().round_number = ROUND_CEILING;

    let err = game.play().unwrap_err();
    assert!(matches!(err, GameError::RoundCeilingExceeded { .. }));
}

#[test]
fn test_game_over_event_carries_round_count() {
    let mut game = WarGame::builder().seed(3).build();

    if let Ok(GameResult::Winner(winner)) = game.play() {
        let rounds = game.round_number();
        assert!(game.events().iter().any(|e| matches!(
            e,
            RoundEvent::GameOver { winner: Some(w), rounds: r } if *w == winner && *r == rounds
        )));
    }
}

#[test]
fn test_house_rule_games_run_to_termination() {
    for seed in [5u64, 17, 99] {
        let mut game = WarGame::builder()
            .suit_up(true)
            .battle_advantage(true)
            .seed(seed)
            .build();

        // Either a clean result or a reported suspected loop; never a
        // hang, never a broken invariant.
        match game.play() {
            Ok(_) => {}
            Err(GameError::RoundCeilingExceeded { .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
        assert_eq!(game.state().total_cards(), 52);
    }
}
