//! Plunder

use crate::cards::CardDef;
use crate::core::CardType::*;
use crate::core::{CardId, CardStats, Cost, PlayerId};
use crate::game::Game;
use crate::Result;

// Flagship: +$2. The next time you play a non-Command Action card, replay it.
fn flagship(game: &mut Game, player: PlayerId, card: CardId) -> Result<()> {
    game.state.player_mut(player)?.pending_flagships.push(card);
    Ok(())
}

// Insignia: $2. This turn, when you gain a card, you may put it onto your deck.
fn insignia(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.state.player_mut(player)?.flags.insignias_played += 1;
    Ok(())
}

pub const CARDS: &[CardDef] = &[
    CardDef {
        name: "Flagship",
        cost: Cost::coins(4),
        stats: CardStats::coins(2),
        types: &[Action, Duration, Command],
        play_effect: Some(flagship),
        ..CardDef::EMPTY
    },
    // Shield: $1 +1 Buy. When another player plays an Attack, you may first
    // reveal this from your hand to be unaffected.
    CardDef {
        name: "Shield",
        cost: Cost::coins(5),
        stats: CardStats::new(0, 0, 1, 1),
        types: &[Treasure, Reaction],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Insignia",
        cost: Cost::coins(5),
        stats: CardStats::coins(2),
        types: &[Treasure],
        play_effect: Some(insignia),
        ..CardDef::EMPTY
    },
];
