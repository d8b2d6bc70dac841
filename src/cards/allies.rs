//! Allies
//!
//! Ally landscapes are accepted on a board but have no effect: the Favors
//! economy they run on is not simulated.

use crate::cards::{CardDef, LandscapeDef, LandscapeKind};
use crate::core::CardType::*;
use crate::core::{CardId, CardStats, Cost, PlayerId};
use crate::game::Game;
use crate::Result;

// Trickster: each other player gains a Curse. Once this turn, when you discard
// a Treasure from play, you may set it aside. Put it in your hand at end of turn.
fn trickster(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.attack_each_opponent(player, |game, target| {
        game.give_curse_to_player(target, false)?;
        Ok(())
    })?;
    game.state.player_mut(player)?.flags.trickster_uses += 1;
    Ok(())
}

pub const CARDS: &[CardDef] = &[
    // Cauldron: $2 +1 Buy. The third time you gain an Action this turn, each other player gains a Curse.
    CardDef {
        name: "Cauldron",
        cost: Cost::coins(5),
        stats: CardStats::new(0, 0, 1, 2),
        types: &[Treasure, Attack],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Trickster",
        cost: Cost::coins(5),
        types: &[Action, Attack],
        play_effect: Some(trickster),
        ..CardDef::EMPTY
    },
];

const fn ally(name: &'static str) -> LandscapeDef {
    LandscapeDef {
        name,
        kind: LandscapeKind::Ally,
        ..LandscapeDef::EMPTY
    }
}

pub const ALLIES: &[LandscapeDef] = &[
    ally("Architects' Guild"),
    ally("Band of Nomads"),
    ally("Cave Dwellers"),
    ally("Coastal Haven"),
    ally("Market Towns"),
    ally("Plateau Shepherds"),
    ally("Trappers' Lodge"),
];
