//! Attack pipeline: Guard Dog, Shield and Moat
//!
//! Shield blocks without asking. Moat asks the target's controller. Lingering
//! attacks only wear off for the players they reached.

mod common;

use common::{game_with, give, play, run_phase, zero_game, P1, P2};
use dominion_sim::{
    core::{CardId, PlayerId},
    game::{BuyChoice, Game, GameStateView, Phase, PlayerController},
    zones::Zone,
    Result,
};
use std::cell::Cell;
use std::rc::Rc;

/// Counts how often it was asked about Moat and answers with `reveal`
struct MoatCounter {
    asked: Rc<Cell<u32>>,
    reveal: bool,
}

impl PlayerController for MoatCounter {
    fn name(&self) -> &str {
        "Moat Counter"
    }

    fn choose_action(&mut self, _view: &GameStateView, _actions: &[CardId]) -> Option<CardId> {
        None
    }

    fn choose_treasure(&mut self, _view: &GameStateView, _treasures: &[CardId]) -> Option<CardId> {
        None
    }

    fn choose_buy(&mut self, _view: &GameStateView, _options: &[BuyChoice]) -> Option<BuyChoice> {
        None
    }

    fn should_reveal_moat(&mut self, _view: &GameStateView, _attacker: PlayerId) -> bool {
        self.asked.set(self.asked.get() + 1);
        self.reveal
    }
}

fn moat_game(reveal: bool) -> Result<(Game, Rc<Cell<u32>>)> {
    let asked = Rc::new(Cell::new(0));
    let controllers: Vec<Box<dyn PlayerController>> = vec![
        Box::new(common::PassiveController),
        Box::new(MoatCounter {
            asked: Rc::clone(&asked),
            reveal,
        }),
    ];
    Ok((game_with(controllers, &["Militia", "Moat", "Shield", "Witch"])?, asked))
}

#[test]
fn test_shield_blocks_without_asking_moat() -> Result<()> {
    let (mut game, asked) = moat_game(true)?;
    give(&mut game, P2, "Shield", Zone::Hand)?;
    give(&mut game, P2, "Moat", Zone::Hand)?;

    play(&mut game, P1, "Militia")?;
    assert_eq!(asked.get(), 0);
    assert_eq!(game.state.player(P2)?.hand().len(), 7);
    Ok(())
}

#[test]
fn test_moat_revealed_blocks() -> Result<()> {
    let (mut game, asked) = moat_game(true)?;
    give(&mut game, P2, "Moat", Zone::Hand)?;

    play(&mut game, P1, "Witch")?;
    assert_eq!(asked.get(), 1);
    assert_eq!(game.state.count_in_zone(P2, Zone::Discard, "Curse"), 0);
    assert_eq!(game.state.supply.count("Curse"), 10);
    Ok(())
}

#[test]
fn test_moat_kept_hidden_lets_attack_through() -> Result<()> {
    let (mut game, asked) = moat_game(false)?;
    give(&mut game, P2, "Moat", Zone::Hand)?;

    play(&mut game, P1, "Militia")?;
    assert_eq!(asked.get(), 1);
    assert_eq!(game.state.player(P2)?.hand().len(), 3);
    assert_eq!(game.state.player(P2)?.zones.discard.len(), 3);
    Ok(())
}

#[test]
fn test_attack_hits_every_opponent() -> Result<()> {
    let mut game = zero_game(4, &["Witch"])?;
    play(&mut game, P1, "Witch")?;
    for idx in 1..4 {
        let target = PlayerId::new(idx);
        assert_eq!(game.state.count_in_zone(target, Zone::Discard, "Curse"), 1);
    }
    assert_eq!(game.state.count_in_zone(P1, Zone::Discard, "Curse"), 0);
    assert_eq!(game.state.supply.count("Curse"), 27);
    Ok(())
}

#[test]
fn test_guard_dog_played_before_attack() -> Result<()> {
    let mut game = zero_game(2, &["Militia", "Guard Dog"])?;
    let dog = give(&mut game, P2, "Guard Dog", Zone::Hand)?;

    play(&mut game, P1, "Militia")?;
    let p2 = game.state.player(P2)?;
    assert!(p2.zones.in_play.contains(dog));
    // Five cards plus two drawn by the dog, then discarded down to three
    assert_eq!(p2.hand().len(), 3);
    assert_eq!(p2.zones.discard.len(), 4);
    Ok(())
}

#[test]
fn test_torturer_target_discards_by_default() -> Result<()> {
    let mut game = zero_game(2, &["Torturer"])?;
    play(&mut game, P1, "Torturer")?;
    assert_eq!(game.state.player(P2)?.hand().len(), 3);
    assert_eq!(game.state.player(P1)?.hand().len(), 8);
    Ok(())
}

#[test]
fn test_blocked_highwayman_leaves_other_highwaymen_in_force() -> Result<()> {
    let p3 = PlayerId::new(2);
    let mut game = zero_game(3, &["Highwayman", "Shield"])?;
    let shield = give(&mut game, P2, "Shield", Zone::Hand)?;

    let first = play(&mut game, P1, "Highwayman")?;
    assert_eq!(game.state.player(P2)?.highwaymen, 0);
    assert_eq!(game.state.player(p3)?.highwaymen, 1);

    game.discard_card(P2, shield)?;
    let second = play(&mut game, p3, "Highwayman")?;
    assert_eq!(game.state.player(P1)?.highwaymen, 1);
    assert_eq!(game.state.player(P2)?.highwaymen, 1);
    game.move_card(P1, first, Zone::Duration)?;
    game.move_card(p3, second, Zone::Duration)?;

    // P1's Highwayman never reached P2, so P3's still holds there
    run_phase(&mut game, P1, Phase::Start)?;
    assert_eq!(game.state.player(P2)?.highwaymen, 1);
    assert_eq!(game.state.player(p3)?.highwaymen, 0);
    assert_eq!(game.state.player(P1)?.highwaymen, 1);

    run_phase(&mut game, p3, Phase::Start)?;
    assert_eq!(game.state.player(P1)?.highwaymen, 0);
    assert_eq!(game.state.player(P2)?.highwaymen, 0);
    Ok(())
}

#[test]
fn test_throne_room_highwayman_lifts_both_plays() -> Result<()> {
    let mut game = zero_game(2, &["Highwayman", "Throne Room"])?;
    let highwayman = give(&mut game, P1, "Highwayman", Zone::Hand)?;
    play(&mut game, P1, "Throne Room")?;
    assert_eq!(game.state.player(P2)?.highwaymen, 2);

    game.move_card(P1, highwayman, Zone::Duration)?;
    run_phase(&mut game, P1, Phase::Start)?;
    assert_eq!(game.state.player(P2)?.highwaymen, 0);
    Ok(())
}
