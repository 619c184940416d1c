//! Cross-seed properties: card conservation and bounded termination
//! hold for every shuffle and every rule combination.

use proptest::prelude::*;
use rust_war::{GameError, RoundOutcome, WarGame, ROUND_CEILING};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn conservation_holds_for_any_seed(
        seed in any::<u64>(),
        suit_up in any::<bool>(),
        battle_advantage in any::<bool>(),
    ) {
        let mut game = WarGame::builder()
            .suit_up(suit_up)
            .battle_advantage(battle_advantage)
            .seed(seed)
            .build();

        // Play up to 200 rounds, checking conservation after each.
        for _ in 0..200 {
            match game.play_one_round() {
                Ok(RoundOutcome::Continuing) => {
                    prop_assert_eq!(game.state().total_cards(), 52);
                    game.state_mut().increment_round();
                }
                Ok(_) => break,
                Err(GameError::RoundCeilingExceeded { .. }) => break,
                Err(other) => return Err(TestCaseError::fail(format!("invariant broke: {other}"))),
            }
        }
        prop_assert_eq!(game.state().total_cards(), 52);
    }

    #[test]
    fn games_never_run_past_the_ceiling(seed in any::<u64>()) {
        let mut game = WarGame::builder().seed(seed).build();

        match game.play() {
            Ok(_) => prop_assert!(game.round_number() < ROUND_CEILING),
            Err(GameError::RoundCeilingExceeded { .. }) => {
                prop_assert_eq!(game.round_number(), ROUND_CEILING);
            }
            Err(other) => return Err(TestCaseError::fail(format!("invariant broke: {other}"))),
        }
    }

    #[test]
    fn identical_seeds_replay_identically(seed in any::<u64>()) {
        let mut game1 = WarGame::builder().suit_up(true).seed(seed).build();
        let mut game2 = WarGame::builder().suit_up(true).seed(seed).build();

        let result1 = game1.play();
        let result2 = game2.play();

        prop_assert_eq!(result1, result2);
        prop_assert_eq!(game1.events(), game2.events());
    }
}
