//! Engine invariants that must hold whatever the controllers decide
//!
//! Card conservation across whole games, turn resource resets, split pile
//! accounting, the end conditions and debt repayment.

mod common;

use common::{empty_hand, give, zero_game, P1, P2};
use dominion_sim::{
    game::{
        BigMoneyController, GainDestination, Game, GameEndReason, GameOptions, Phase,
        PlayerController, RandomController,
    },
    loader::Board,
    zones::Zone,
    Result,
};

const MIXED_KINGDOM: &[&str] = &[
    "Marauder",
    "Bandit Camp",
    "Trader",
    "Camel Train",
    "Throne Room",
    "Witch",
    "Acting Troupe",
    "Watchtower",
    "Remodel",
    "Cargo Ship",
];

/// Step a game phase by phase, checking the card total after every step
fn assert_conserved(mut game: Game) -> Result<()> {
    let total = game.state.total_cards();
    let mut steps = 0;
    while !game.is_game_over() {
        game.play_turn()?;
        steps += 1;
        assert_eq!(
            game.state.total_cards(),
            total,
            "card total changed at step {steps} (round {}, {:?})",
            game.state.turn.turn_number,
            game.state.phase()
        );
    }
    Ok(())
}

#[test]
fn test_cards_conserved_random_games() -> Result<()> {
    for seed in [1u64, 2, 3] {
        let controllers: Vec<Box<dyn PlayerController>> = vec![
            Box::new(RandomController::with_seed(seed)),
            Box::new(RandomController::with_seed(seed + 100)),
            Box::new(BigMoneyController::new()),
        ];
        let board = Board::with_kingdom(MIXED_KINGDOM);
        let game = Game::new(controllers, &board, &GameOptions::default().with_seed(seed))?;
        assert_conserved(game)?;
    }
    Ok(())
}

#[test]
fn test_cards_conserved_with_landscapes_and_shelters() -> Result<()> {
    let board = Board {
        events: vec!["Invest".to_string(), "Seize the Day".to_string()],
        projects: vec!["Sewers".to_string(), "Road Network".to_string()],
        ways: vec!["Way of the Seal".to_string()],
        landmarks: vec!["Wall".to_string()],
        ..Board::with_kingdom(&["Patrician", "Farmland", "Skulk", "Highwayman", "Bandit Camp"])
    };
    let controllers: Vec<Box<dyn PlayerController>> = vec![
        Box::new(RandomController::with_seed(5)),
        Box::new(RandomController::with_seed(6)),
    ];
    let options = GameOptions::default().with_seed(5).with_shelters(true);
    assert_conserved(Game::new(controllers, &board, &options)?)
}

#[test]
fn test_resources_reset_after_cleanup() -> Result<()> {
    let mut game = zero_game(2, &["Village", "Market", "Festival"])?;
    {
        let p = game.state.player_mut(P1)?;
        p.villagers = 0;
        p.coins = 4;
        p.potions = 1;
        p.buys = 3;
    }
    game.state.turn.phase = Phase::Cleanup;
    game.play_turn()?;

    let p = game.state.player(P1)?;
    assert_eq!(p.actions, 1);
    assert_eq!(p.buys, 1);
    assert_eq!(p.coins, 0);
    assert_eq!(p.potions, 0);
    assert_eq!(p.zones.hand.len(), 5);
    assert!(p.zones.in_play.is_empty());
    assert_eq!(game.state.active_player(), P2);
    assert_eq!(game.state.phase(), Phase::Start);
    Ok(())
}

#[test]
fn test_whole_turn_ends_with_fresh_hand() -> Result<()> {
    let mut game = zero_game(2, &["Smithy", "Village", "Market"])?;
    for _ in 0..5 {
        game.play_turn()?;
    }
    let p = game.state.player(P1)?;
    assert_eq!(p.turns_taken, 1);
    assert_eq!(p.zones.hand.len(), 5);
    assert_eq!(p.zones.total_cards(), 11, "the opening buy lands in the discard pile");
    assert_eq!(game.state.active_player(), P2);
    Ok(())
}

#[test]
fn test_split_pile_counts_once_when_both_halves_empty() -> Result<()> {
    let mut game = zero_game(2, &["Patrician", "Smithy", "Village"])?;
    assert!(game.state.supply.contains("Emporium"));

    game.state.supply.set_count("Patrician", 0)?;
    assert_eq!(game.state.supply.empty_piles(), 0);

    game.state.supply.set_count("Emporium", 0)?;
    game.state.supply.set_count("Smithy", 0)?;
    assert_eq!(game.state.supply.empty_piles(), 2);
    assert!(!game.is_game_over());

    game.state.supply.set_count("Village", 0)?;
    assert!(game.is_game_over());
    assert_eq!(
        game.state.metrics.as_ref().map(|m| m.end_reason),
        Some(GameEndReason::PilesEmpty(3))
    );
    Ok(())
}

#[test]
fn test_province_end_is_idempotent() -> Result<()> {
    let mut game = zero_game(2, &["Village"])?;
    assert!(!game.is_game_over());

    game.state.supply.set_count("Province", 0)?;
    assert!(game.is_game_over());
    let first = game.state.metrics.clone();

    // Later changes do not rewrite the captured scores
    give(&mut game, P1, "Province", Zone::Hand)?;
    assert!(game.is_game_over());
    assert_eq!(game.state.metrics, first);
    assert_eq!(
        first.map(|m| m.end_reason),
        Some(GameEndReason::ProvincesGone)
    );

    let turn = game.state.turn.clone();
    game.play_turn()?;
    assert_eq!(game.state.turn, turn, "no phase runs once the game is over");
    Ok(())
}

#[test]
fn test_turn_limit_ends_game() -> Result<()> {
    let controllers: Vec<Box<dyn PlayerController>> = vec![
        Box::new(RandomController::with_seed(1)),
        Box::new(RandomController::with_seed(2)),
    ];
    let options = GameOptions::default().with_seed(1).with_max_turns(3);
    let mut game = Game::new(controllers, &Board::with_kingdom(&["Chapel"]), &options)?;
    let result = game.run_game()?;
    assert_eq!(result.metrics.end_reason, GameEndReason::TurnLimit);
    assert_eq!(result.metrics.rounds, 4);
    assert_eq!(result.metrics.turns_taken, vec![3, 3]);
    Ok(())
}

#[test]
fn test_debt_blocks_buying() -> Result<()> {
    let mut game = zero_game(2, &["Engineer", "Village"])?;
    empty_hand(&mut game, P1)?;
    let discard_before = game.state.player(P1)?.zones.discard.len();
    let supply_before = game.state.supply.total_cards();
    {
        let p = game.state.player_mut(P1)?;
        p.debt = 5;
        p.coins = 3;
        p.buys = 1;
    }
    game.state.turn.phase = Phase::Buy;
    game.play_turn()?;

    let p = game.state.player(P1)?;
    assert_eq!(p.debt, 2);
    assert_eq!(p.coins, 0);
    assert_eq!(p.zones.discard.len(), discard_before);
    assert_eq!(game.state.supply.total_cards(), supply_before);
    assert_eq!(game.state.phase(), Phase::Cleanup);
    Ok(())
}

#[test]
fn test_debt_paid_before_buying() -> Result<()> {
    let mut game = zero_game(2, &["Village", "Smithy"])?;
    {
        let p = game.state.player_mut(P1)?;
        p.debt = 2;
        p.coins = 5;
        p.buys = 1;
    }
    game.state.turn.phase = Phase::Buy;
    game.play_turn()?;

    // $3 left after repaying: the first-option controller takes Silver
    let p = game.state.player(P1)?;
    assert_eq!(p.debt, 0);
    assert_eq!(game.state.count_in_zone(P1, Zone::Discard, "Silver"), 1);
    Ok(())
}

#[test]
fn test_engineer_buy_takes_debt() -> Result<()> {
    let mut game = zero_game(2, &["Engineer", "Village"])?;
    game.buy_card(P1, "Engineer")?;
    let p = game.state.player(P1)?;
    assert_eq!(p.debt, 4);
    assert_eq!(game.state.count_in_zone(P1, Zone::Discard, "Engineer"), 1);
    Ok(())
}

#[test]
fn test_buy_phase_gain_counters() -> Result<()> {
    let mut game = zero_game(2, &["Village"])?;
    game.state.turn.phase = Phase::Action;
    game.gain_from_supply(P1, "Silver", GainDestination::Discard)?;
    let flags = &game.state.player(P1)?.flags;
    assert_eq!(flags.cards_gained, 1);
    assert_eq!(flags.cards_gained_in_buy_phase, 0);

    game.state.turn.phase = Phase::Buy;
    game.state.player_mut(P1)?.coins = 2;
    game.buy_card(P1, "Estate")?;
    // Only the active player's gains count towards the buy phase
    game.gain_from_supply(P2, "Estate", GainDestination::Discard)?;

    let flags = &game.state.player(P1)?.flags;
    assert_eq!(flags.cards_gained, 2);
    assert_eq!(flags.cards_gained_in_buy_phase, 1);
    assert!(flags.gained_victory_in_buy_phase);
    let other = &game.state.player(P2)?.flags;
    assert_eq!(other.cards_gained_in_buy_phase, 0);
    assert!(!other.gained_victory_in_buy_phase);
    Ok(())
}
