//! Dark Ages: Looters, Ruins, Spoils and Shelters
//!
//! All five Ruins share the "Ruins" pile; gaining from it picks a kind at
//! random (see `Game::gain_from_supply`). Spoils is a non-supply pile that
//! played copies return to.

use crate::cards::CardDef;
use crate::core::CardType::*;
use crate::core::{CardId, CardStats, Cost, PlayerId};
use crate::game::{Confirm, Game, GainDestination};
use crate::Result;

// Marauder: gain a Spoils. Each other player gains a Ruins.
fn marauder(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.gain_from_supply(player, "Spoils", GainDestination::Discard)?;
    game.attack_each_opponent(player, |game, target| {
        game.gain_from_supply(target, "Ruins", GainDestination::Discard)?;
        Ok(())
    })
}

// Bandit Camp: +1 Card +2 Actions. Gain a Spoils.
fn bandit_camp(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.gain_from_supply(player, "Spoils", GainDestination::Discard)?;
    Ok(())
}

// Spoils: $3. When you play this, return it to the Spoils pile.
fn spoils(game: &mut Game, player: PlayerId, card: CardId) -> Result<()> {
    game.state.player_mut(player)?.zones.remove_anywhere(card);
    game.state.cards.remove(card);
    game.state.supply.return_card("Spoils")
}

// Survivors: look at the top 2 cards of your deck. Discard them or put them back in any order.
fn survivors(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let mut revealed = Vec::new();
    for _ in 0..2 {
        if let Some(card) = game.reveal_top(player)? {
            revealed.push(card);
        }
    }
    if revealed.is_empty() {
        return Ok(());
    }
    if game.ask_confirm(player, Confirm::DiscardRevealed)? {
        for card in revealed {
            game.discard_card(player, card)?;
        }
    } else {
        for card in revealed.into_iter().rev() {
            game.topdeck_card(player, card)?;
        }
    }
    Ok(())
}

// Overgrown Estate: 0 VP. When you trash this, +1 Card.
fn overgrown_estate_trashed(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.draw_cards(player, 1)?;
    Ok(())
}

pub const CARDS: &[CardDef] = &[
    CardDef {
        name: "Marauder",
        cost: Cost::coins(4),
        types: &[Action, Attack],
        play_effect: Some(marauder),
        extra_piles: &["Ruins", "Spoils"],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Bandit Camp",
        cost: Cost::coins(5),
        stats: CardStats::new(1, 2, 0, 0),
        types: &[Action],
        play_effect: Some(bandit_camp),
        extra_piles: &["Spoils"],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Spoils",
        stats: CardStats::coins(3),
        types: &[Treasure],
        play_effect: Some(spoils),
        ..CardDef::EMPTY
    },
    // Hovel: when you buy a Victory card, you may trash this from your hand.
    CardDef {
        name: "Hovel",
        cost: Cost::coins(1),
        types: &[Reaction, Shelter],
        ..CardDef::EMPTY
    },
    // Necropolis: +2 Actions.
    CardDef {
        name: "Necropolis",
        cost: Cost::coins(1),
        stats: CardStats::new(0, 2, 0, 0),
        types: &[Action, Shelter],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Overgrown Estate",
        cost: Cost::coins(1),
        types: &[Victory, Shelter],
        on_trash: Some(overgrown_estate_trashed),
        ..CardDef::EMPTY
    },
];

/// The Ruins kinds, all drawn from the shared "Ruins" pile
pub const RUINS: &[CardDef] = &[
    // Abandoned Mine: +$1.
    CardDef {
        name: "Abandoned Mine",
        stats: CardStats::coins(1),
        types: &[Action, Ruins],
        pile: Some("Ruins"),
        ..CardDef::EMPTY
    },
    // Ruined Library: +1 Card.
    CardDef {
        name: "Ruined Library",
        stats: CardStats::new(1, 0, 0, 0),
        types: &[Action, Ruins],
        pile: Some("Ruins"),
        ..CardDef::EMPTY
    },
    // Ruined Market: +1 Buy.
    CardDef {
        name: "Ruined Market",
        stats: CardStats::new(0, 0, 1, 0),
        types: &[Action, Ruins],
        pile: Some("Ruins"),
        ..CardDef::EMPTY
    },
    // Ruined Village: +1 Action.
    CardDef {
        name: "Ruined Village",
        stats: CardStats::new(0, 1, 0, 0),
        types: &[Action, Ruins],
        pile: Some("Ruins"),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Survivors",
        types: &[Action, Ruins],
        pile: Some("Ruins"),
        play_effect: Some(survivors),
        ..CardDef::EMPTY
    },
];
