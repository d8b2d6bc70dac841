//! Prosperity
//!
//! Royal Seal, Hoard, Talisman and Goons only carry stats here; their
//! "while this is in play" triggers are resolved by the gain and buy
//! pipelines, which look for them by name. Quarry's discount lives in
//! `GameState::get_card_cost`.

use crate::cards::CardDef;
use crate::core::CardType::*;
use crate::core::{CardId, CardStats, Cost, PlayerId};
use crate::game::Game;
use crate::Result;

// Watchtower: draw until you have 6 cards in hand.
// When you gain a card, you may reveal this from your hand to trash that card or put it onto your deck.
fn watchtower(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let in_hand = game.state.player(player)?.hand().len() as u32;
    if in_hand < 6 {
        game.draw_cards(player, 6 - in_hand)?;
    }
    Ok(())
}

// Goons: +1 Buy +$2. Each other player discards down to 3 cards in hand.
// While this is in play, when you buy a card, +1 VP.
fn goons(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.attack_each_opponent(player, |game, target| game.discard_down_to(target, 3, "Goons"))
}

// Trade Route: +1 Buy. +$1 per token on the Trade Route mat. Trash a card from your hand.
fn trade_route(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let mat = game.state.trade_route_mat;
    game.state.player_mut(player)?.coins += mat;
    game.trash_from_hand(player, 1, 1, "Trade Route", |_| true)?;
    Ok(())
}

// Monument: +$2 +1 VP.
fn monument(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.state.player_mut(player)?.vp_tokens += 1;
    Ok(())
}

// King's Court: you may play an Action card from your hand three times.
fn kings_court(game: &mut Game, player: PlayerId, card: CardId) -> Result<()> {
    game.play_multiplied(player, card, 3, "King's Court")
}

pub const CARDS: &[CardDef] = &[
    CardDef {
        name: "Watchtower",
        cost: Cost::coins(3),
        types: &[Action, Reaction],
        play_effect: Some(watchtower),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Royal Seal",
        cost: Cost::coins(5),
        stats: CardStats::coins(2),
        types: &[Treasure],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Hoard",
        cost: Cost::coins(6),
        stats: CardStats::coins(2),
        types: &[Treasure],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Talisman",
        cost: Cost::coins(4),
        stats: CardStats::coins(1),
        types: &[Treasure],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Goons",
        cost: Cost::coins(6),
        stats: CardStats::new(0, 0, 1, 2),
        types: &[Action, Attack],
        play_effect: Some(goons),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Trade Route",
        cost: Cost::coins(3),
        stats: CardStats::new(0, 0, 1, 0),
        types: &[Action],
        play_effect: Some(trade_route),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Quarry",
        cost: Cost::coins(4),
        stats: CardStats::coins(1),
        types: &[Treasure],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Monument",
        cost: Cost::coins(4),
        stats: CardStats::coins(2),
        types: &[Action],
        play_effect: Some(monument),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "King's Court",
        cost: Cost::coins(7),
        types: &[Action],
        play_effect: Some(kings_court),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Worker's Village",
        cost: Cost::coins(4),
        stats: CardStats::new(1, 2, 1, 0),
        types: &[Action],
        ..CardDef::EMPTY
    },
];
