//! Ordering of the gain pipeline
//!
//! A gained card lands first, then its own on-gain effect runs, then the
//! reactions (Watchtower, Royal Seal) and watchers see it.

mod common;

use common::{game_with, give, zero_game, P1, P2};
use dominion_sim::{
    core::CardId,
    game::{
        BuyChoice, GainDestination, Game, GameStateView, PlayerController, TopdeckSource,
        WatchtowerChoice,
    },
    zones::Zone,
    Result,
};
use std::cell::RefCell;
use std::rc::Rc;

/// What the player's discard pile held each time Watchtower was offered
type Sightings = Rc<RefCell<Vec<(&'static str, Vec<&'static str>)>>>;

/// Passive controller that records Watchtower prompts and optionally topdecks
struct WatchtowerWitness {
    seen: Sightings,
    reaction: WatchtowerChoice,
}

impl PlayerController for WatchtowerWitness {
    fn name(&self) -> &str {
        "Witness"
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

    fn choose_watchtower_reaction(&mut self, view: &GameStateView, card: CardId) -> WatchtowerChoice {
        let discard = view
            .state()
            .player(view.player_id())
            .map(|p| {
                p.zones
                    .discard
                    .cards
                    .iter()
                    .filter_map(|&id| view.card_name(id))
                    .collect()
            })
            .unwrap_or_default();
        self.seen
            .borrow_mut()
            .push((view.card_name(card).unwrap_or("?"), discard));
        self.reaction
    }

    fn should_topdeck_gain(&mut self, _view: &GameStateView, _card: CardId, _source: TopdeckSource) -> bool {
        true
    }
}

fn witness_game(reaction: WatchtowerChoice, kingdom: &[&str]) -> Result<(Game, Sightings)> {
    let seen: Sightings = Rc::default();
    let controllers: Vec<Box<dyn PlayerController>> = vec![
        Box::new(WatchtowerWitness {
            seen: Rc::clone(&seen),
            reaction,
        }),
        Box::new(common::PassiveController),
    ];
    Ok((game_with(controllers, kingdom)?, seen))
}

#[test]
fn test_on_gain_resolves_before_reactions() -> Result<()> {
    let (mut game, seen) = witness_game(WatchtowerChoice::Ignore, &["Duchess", "Watchtower"])?;
    give(&mut game, P1, "Watchtower", Zone::Hand)?;
    let discard_before = game.state.player(P1)?.zones.discard.len();

    game.gain_from_supply(P1, "Duchy", GainDestination::Discard)?;

    let seen = seen.borrow();
    // The Duchess is gained inside the Duchy's on-gain, so it is offered first
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].0, "Duchess");
    assert_eq!(seen[1].0, "Duchy");
    for (_, discard) in seen.iter() {
        assert!(discard.contains(&"Duchy"));
        assert!(discard.contains(&"Duchess"));
    }
    assert_eq!(game.state.player(P1)?.zones.discard.len(), discard_before + 2);
    Ok(())
}

#[test]
fn test_watchtower_topdecks_gain() -> Result<()> {
    let (mut game, _seen) = witness_game(WatchtowerChoice::Topdeck, &["Watchtower"])?;
    give(&mut game, P1, "Watchtower", Zone::Hand)?;
    let silver = game
        .gain_from_supply(P1, "Silver", GainDestination::Discard)?
        .expect("Silver pile is full");
    assert_eq!(game.state.player(P1)?.zones.deck.peek_top(), Some(silver));
    Ok(())
}

#[test]
fn test_watchtower_trash_skips_later_reactions() -> Result<()> {
    let (mut game, _seen) = witness_game(WatchtowerChoice::Trash, &["Watchtower", "Royal Seal"])?;
    give(&mut game, P1, "Watchtower", Zone::Hand)?;
    give(&mut game, P1, "Royal Seal", Zone::InPlay)?;
    let copper = game
        .gain_from_supply(P1, "Copper", GainDestination::Discard)?
        .expect("Copper pile is full");
    // Royal Seal would topdeck it, but the card is already gone
    assert!(game.state.trash.contains(&copper));
    assert_ne!(game.state.player(P1)?.zones.deck.peek_top(), Some(copper));
    Ok(())
}

#[test]
fn test_trade_route_token_moves_on_first_gain() -> Result<()> {
    let mut game = zero_game(2, &["Trade Route"])?;
    assert_eq!(game.state.trade_route_mat, 0);
    game.gain_from_supply(P1, "Estate", GainDestination::Discard)?;
    game.gain_from_supply(P2, "Estate", GainDestination::Discard)?;
    assert_eq!(game.state.trade_route_mat, 1);
    assert!(!game.state.trade_route_tokens.contains(&"Estate"));
    Ok(())
}

#[test]
fn test_exiled_copy_is_reclaimed_instead() -> Result<()> {
    let mut game = zero_game(2, &["Camel Train"])?;
    let exiled = game
        .exile_from_supply(P1, "Gold")?
        .expect("Gold pile is full");
    let gold_left = game.state.supply.count("Gold");
    let total = game.state.total_cards();

    let gained = game.gain_from_supply(P1, "Gold", GainDestination::Discard)?;
    assert_eq!(gained, Some(exiled));
    assert_eq!(game.state.supply.count("Gold"), gold_left);
    assert!(game.state.player(P1)?.zones.exile.is_empty());
    assert!(game.state.player(P1)?.zones.discard.contains(exiled));
    assert_eq!(game.state.total_cards(), total);
    Ok(())
}

#[test]
fn test_trader_exchanges_curse_for_silver() -> Result<()> {
    let mut game = zero_game(2, &["Trader", "Witch"])?;
    give(&mut game, P2, "Trader", Zone::Hand)?;
    let total = game.state.total_cards();

    let gained = game
        .give_curse_to_player(P2, false)?
        .expect("Curse pile is full");
    assert_eq!(game.state.card_name(gained), "Silver");
    assert_eq!(game.state.supply.count("Curse"), 10);
    assert_eq!(game.state.count_in_zone(P2, Zone::Discard, "Curse"), 0);
    assert_eq!(game.state.total_cards(), total);
    Ok(())
}

#[test]
fn test_groundskeeper_scores_victory_gains() -> Result<()> {
    let mut game = zero_game(2, &["Groundskeeper"])?;
    give(&mut game, P1, "Groundskeeper", Zone::InPlay)?;
    give(&mut game, P1, "Groundskeeper", Zone::InPlay)?;
    game.gain_from_supply(P1, "Estate", GainDestination::Discard)?;
    game.gain_from_supply(P1, "Silver", GainDestination::Discard)?;
    assert_eq!(game.state.player(P1)?.vp_tokens, 2);
    Ok(())
}
