//! Renaissance: Villagers, Cargo Ship and Projects

use crate::cards::{CardDef, LandscapeDef, LandscapeKind};
use crate::core::CardType::*;
use crate::core::{CardId, CardStats, Cost, PlayerId};
use crate::game::{CardPick, Game, Prompt};
use crate::Result;

// Lackeys: +2 Cards. When you gain this, +2 Villagers.
fn lackeys_gained(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.state.player_mut(player)?.villagers += 2;
    Ok(())
}

// Cargo Ship: +$2. Once this turn, when you gain a card, you may set it aside
// face up (on this). At the start of your next turn, put it into your hand.
fn cargo_ship(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.state.player_mut(player)?.flags.cargo_ship_uses += 1;
    Ok(())
}

// Acting Troupe: +4 Villagers. Trash this.
fn acting_troupe(game: &mut Game, player: PlayerId, card: CardId) -> Result<()> {
    game.state.player_mut(player)?.villagers += 4;
    game.trash_card(player, card)
}

pub const CARDS: &[CardDef] = &[
    CardDef {
        name: "Lackeys",
        cost: Cost::coins(2),
        stats: CardStats::new(2, 0, 0, 0),
        types: &[Action],
        on_gain: Some(lackeys_gained),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Cargo Ship",
        cost: Cost::coins(3),
        stats: CardStats::coins(2),
        types: &[Action, Duration],
        play_effect: Some(cargo_ship),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Acting Troupe",
        cost: Cost::coins(3),
        types: &[Action],
        play_effect: Some(acting_troupe),
        ..CardDef::EMPTY
    },
];

// Academy: when you gain an Action card, +1 Villager.
fn academy(game: &mut Game, player: PlayerId, card: CardId) -> Result<()> {
    if game.state.card_def(card)?.is_action() {
        game.state.player_mut(player)?.villagers += 1;
    }
    Ok(())
}

// Guildhall: when you gain a Treasure, +1 Coffers.
fn guildhall(game: &mut Game, player: PlayerId, card: CardId) -> Result<()> {
    if game.state.card_def(card)?.is_treasure() {
        game.state.player_mut(player)?.coffers += 1;
    }
    Ok(())
}

// Fair: at the start of your turn, +1 Buy.
fn fair(game: &mut Game, player: PlayerId) -> Result<()> {
    game.state.player_mut(player)?.buys += 1;
    Ok(())
}

// Cathedral: at the start of your turn, trash a card from your hand.
fn cathedral(game: &mut Game, player: PlayerId) -> Result<()> {
    game.trash_from_hand(player, 1, 1, "Cathedral", |_| true)?;
    Ok(())
}

// City Gate: at the start of your turn, +1 Card, then put a card from your hand onto your deck.
fn city_gate(game: &mut Game, player: PlayerId) -> Result<()> {
    game.draw_cards(player, 1)?;
    let hand = game.state.player(player)?.hand().to_vec();
    if let Some(card) = game.ask_card(player, CardPick::Topdeck, &hand, Prompt::required("City Gate"))? {
        game.topdeck_card(player, card)?;
    }
    Ok(())
}

// Sewers: when you trash a card other than with this, you may trash a card from your hand.
fn sewers(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    if game.state.player(player)?.flags.sewers_resolving {
        return Ok(());
    }
    game.state.player_mut(player)?.flags.sewers_resolving = true;
    let trashed = game.trash_from_hand(player, 0, 1, "Sewers", |_| true);
    game.state.player_mut(player)?.flags.sewers_resolving = false;
    trashed.map(|_| ())
}

// Road Network: when another player gains a Victory card, +1 Card.
fn road_network(game: &mut Game, owner: PlayerId, _gainer: PlayerId, card: CardId) -> Result<()> {
    if game.state.card_def(card)?.is_victory() {
        game.draw_cards(owner, 1)?;
    }
    Ok(())
}

pub const PROJECTS: &[LandscapeDef] = &[
    LandscapeDef {
        name: "Academy",
        kind: LandscapeKind::Project,
        cost: Cost::coins(5),
        on_gain: Some(academy),
        ..LandscapeDef::EMPTY
    },
    LandscapeDef {
        name: "Guildhall",
        kind: LandscapeKind::Project,
        cost: Cost::coins(5),
        on_gain: Some(guildhall),
        ..LandscapeDef::EMPTY
    },
    LandscapeDef {
        name: "Fair",
        kind: LandscapeKind::Project,
        cost: Cost::coins(4),
        on_turn_start: Some(fair),
        ..LandscapeDef::EMPTY
    },
    LandscapeDef {
        name: "Cathedral",
        kind: LandscapeKind::Project,
        cost: Cost::coins(3),
        on_turn_start: Some(cathedral),
        ..LandscapeDef::EMPTY
    },
    LandscapeDef {
        name: "City Gate",
        kind: LandscapeKind::Project,
        cost: Cost::coins(3),
        on_turn_start: Some(city_gate),
        ..LandscapeDef::EMPTY
    },
    LandscapeDef {
        name: "Sewers",
        kind: LandscapeKind::Project,
        cost: Cost::coins(3),
        on_trash: Some(sewers),
        ..LandscapeDef::EMPTY
    },
    LandscapeDef {
        name: "Road Network",
        kind: LandscapeKind::Project,
        cost: Cost::coins(5),
        on_opponent_gain: Some(road_network),
        ..LandscapeDef::EMPTY
    },
];
