//! Guilds

use crate::cards::CardDef;
use crate::core::CardType::*;
use crate::core::{CardId, CardStats, Cost, PlayerId};
use crate::game::Game;
use crate::Result;

// Candlestick Maker: +1 Action +1 Buy +1 Coffers.
fn candlestick_maker(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.state.player_mut(player)?.coffers += 1;
    Ok(())
}

pub const CARDS: &[CardDef] = &[CardDef {
    name: "Candlestick Maker",
    cost: Cost::coins(2),
    stats: CardStats::new(0, 1, 1, 0),
    types: &[Action],
    play_effect: Some(candlestick_maker),
    ..CardDef::EMPTY
}];
