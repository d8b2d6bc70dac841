//! Adventures

use crate::cards::CardDef;
use crate::core::CardType::*;
use crate::core::{CardId, Cost, PlayerId};
use crate::game::Game;
use crate::Result;

fn hireling(game: &mut Game, _player: PlayerId, card: CardId) -> Result<()> {
    game.mark_duration(card)
}

// Hireling: at the start of each of your turns for the rest of the game, +1 Card.
// (This stays in play.)
fn hireling_each_turn(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.draw_cards(player, 1)?;
    Ok(())
}

pub const CARDS: &[CardDef] = &[CardDef {
    name: "Hireling",
    cost: Cost::coins(6),
    types: &[Action, Duration],
    persistent: true,
    play_effect: Some(hireling),
    on_duration: Some(hireling_each_turn),
    ..CardDef::EMPTY
}];
