//! Seaside: Duration cards
//!
//! Each Duration card marks itself when played so cleanup keeps it out;
//! `on_duration` then runs once per recorded play at the start of the next
//! turn.

use crate::cards::CardDef;
use crate::core::CardType::*;
use crate::core::{CardId, CardStats, Cost, PlayerId};
use crate::game::Game;
use crate::Result;

fn mark(game: &mut Game, _player: PlayerId, card: CardId) -> Result<()> {
    game.mark_duration(card)
}

// Caravan: +1 Card +1 Action. At the start of your next turn, +1 Card.
fn caravan_next_turn(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.draw_cards(player, 1)?;
    Ok(())
}

// Fishing Village: +2 Actions +$1. At the start of your next turn, +1 Action +$1.
fn fishing_village_next_turn(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let p = game.state.player_mut(player)?;
    p.actions += 1;
    p.coins += 1;
    Ok(())
}

// Merchant Ship: +$2 now and at the start of your next turn.
fn merchant_ship_next_turn(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.state.player_mut(player)?.coins += 2;
    Ok(())
}

// Wharf: +2 Cards +1 Buy now and at the start of your next turn.
fn wharf_next_turn(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.draw_cards(player, 2)?;
    game.state.player_mut(player)?.buys += 1;
    Ok(())
}

pub const CARDS: &[CardDef] = &[
    CardDef {
        name: "Caravan",
        cost: Cost::coins(4),
        stats: CardStats::new(1, 1, 0, 0),
        types: &[Action, Duration],
        play_effect: Some(mark),
        on_duration: Some(caravan_next_turn),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Fishing Village",
        cost: Cost::coins(3),
        stats: CardStats::new(0, 2, 0, 1),
        types: &[Action, Duration],
        play_effect: Some(mark),
        on_duration: Some(fishing_village_next_turn),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Merchant Ship",
        cost: Cost::coins(5),
        stats: CardStats::coins(2),
        types: &[Action, Duration],
        play_effect: Some(mark),
        on_duration: Some(merchant_ship_next_turn),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Wharf",
        cost: Cost::coins(5),
        stats: CardStats::new(2, 0, 1, 0),
        types: &[Action, Duration],
        play_effect: Some(mark),
        on_duration: Some(wharf_next_turn),
        ..CardDef::EMPTY
    },
];
