//! Shared setup for the integration tests

#![allow(dead_code)]

use dominion_sim::{
    cards::registry,
    core::{CardId, PlayerId},
    game::{BuyChoice, Game, GameOptions, GameStateView, Phase, PlayerController, ZeroController},
    loader::Board,
    zones::Zone,
    Result,
};

pub const P1: PlayerId = PlayerId::new(0);
pub const P2: PlayerId = PlayerId::new(1);

/// Plays nothing and buys nothing; every other decision uses the defaults
pub struct PassiveController;

impl PlayerController for PassiveController {
    fn name(&self) -> &str {
        "Passive"
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
}

/// Game between first-option controllers
pub fn zero_game(players: usize, kingdom: &[&str]) -> Result<Game> {
    let controllers = (0..players)
        .map(|_| Box::new(ZeroController::new()) as Box<dyn PlayerController>)
        .collect();
    game_with(controllers, kingdom)
}

pub fn game_with(controllers: Vec<Box<dyn PlayerController>>, kingdom: &[&str]) -> Result<Game> {
    Game::new(
        controllers,
        &Board::with_kingdom(kingdom),
        &GameOptions::default().with_seed(7),
    )
}

/// Create a fresh copy of `name` directly in one of the player's zones
///
/// Bypasses the supply, so totals taken before this call no longer balance.
pub fn give(game: &mut Game, player: PlayerId, name: &str, zone: Zone) -> Result<CardId> {
    let card = game.mint_card(registry::card_def(name)?, player);
    game.state.player_mut(player)?.zones.get_zone_mut(zone).add(card);
    Ok(card)
}

/// Discard the current hand
pub fn empty_hand(game: &mut Game, player: PlayerId) -> Result<()> {
    let hand = game.state.player(player)?.hand().to_vec();
    for card in hand {
        game.discard_card(player, card)?;
    }
    Ok(())
}

/// Put a card into play and resolve it as if played from hand
pub fn play(game: &mut Game, player: PlayerId, name: &str) -> Result<CardId> {
    let card = give(game, player, name, Zone::InPlay)?;
    game.play_card(player, card)?;
    Ok(card)
}

pub fn hand_names(game: &Game, player: PlayerId) -> Result<Vec<&'static str>> {
    Ok(game
        .state
        .player(player)?
        .hand()
        .iter()
        .map(|&card| game.state.card_name(card))
        .collect())
}

/// Run a single phase of `player`'s turn
pub fn run_phase(game: &mut Game, player: PlayerId, phase: Phase) -> Result<()> {
    game.state.turn.active_player = player;
    game.state.turn.phase = phase;
    game.play_turn()
}

pub fn discard_names(game: &Game, player: PlayerId) -> Result<Vec<&'static str>> {
    Ok(game
        .state
        .player(player)?
        .zones
        .discard
        .cards
        .iter()
        .map(|&card| game.state.card_name(card))
        .collect())
}
