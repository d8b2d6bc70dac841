//! Basic supply: Treasures, Victory cards and Curses present in every game

use crate::cards::{victory_pile, CardDef};
use crate::core::CardType::*;
use crate::core::{CardId, CardStats, Cost, PlayerId};
use crate::game::{Confirm, Game, GainDestination};
use crate::Result;

fn potion(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.state.player_mut(player)?.potions += 1;
    Ok(())
}

// Duchess: when you gain a Duchy, you may gain a Duchess
fn duchy_gained(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    if game.state.kingdom.contains(&"Duchess")
        && game.state.supply.count("Duchess") > 0
        && game.ask_confirm(player, Confirm::GainDuchess)?
    {
        game.gain_from_supply(player, "Duchess", GainDestination::Discard)?;
    }
    Ok(())
}

pub const CARDS: &[CardDef] = &[
    CardDef {
        name: "Copper",
        stats: CardStats::coins(1),
        types: &[Treasure],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Silver",
        cost: Cost::coins(3),
        stats: CardStats::coins(2),
        types: &[Treasure],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Gold",
        cost: Cost::coins(6),
        stats: CardStats::coins(3),
        types: &[Treasure],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Potion",
        cost: Cost::coins(4),
        types: &[Treasure],
        play_effect: Some(potion),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Estate",
        cost: Cost::coins(2),
        stats: CardStats::vp(1),
        types: &[Victory],
        starting_supply: victory_pile,
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Duchy",
        cost: Cost::coins(5),
        stats: CardStats::vp(3),
        types: &[Victory],
        on_gain: Some(duchy_gained),
        starting_supply: victory_pile,
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Province",
        cost: Cost::coins(8),
        stats: CardStats::vp(6),
        types: &[Victory],
        starting_supply: victory_pile,
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Curse",
        stats: CardStats::vp(-1),
        types: &[Curse],
        ..CardDef::EMPTY
    },
];
