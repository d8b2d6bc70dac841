//! Alchemy

use crate::cards::CardDef;
use crate::core::CardType::*;
use crate::core::{CardId, CardStats, Cost, PlayerId};
use crate::game::Game;
use crate::Result;

// Familiar: +1 Card +1 Action. Each other player gains a Curse.
fn familiar(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.attack_each_opponent(player, |game, target| {
        game.give_curse_to_player(target, false)?;
        Ok(())
    })
}

pub const CARDS: &[CardDef] = &[CardDef {
    name: "Familiar",
    cost: Cost::with_potion(3),
    stats: CardStats::new(1, 1, 0, 0),
    types: &[Action, Attack],
    play_effect: Some(familiar),
    ..CardDef::EMPTY
}];
