//! Empires: split piles, debt and Landmarks

use crate::cards::{split_half, CardDef, LandscapeDef, LandscapeKind, SplitPileInfo};
use crate::core::CardType::*;
use crate::core::{CardId, CardStats, Cost, PlayerId};
use crate::game::{Confirm, Game, GainDestination, GameState, Prompt};
use crate::zones::Zone;
use crate::Result;
use rustc_hash::FxHashMap;

// Patrician: +1 Card +1 Action. Reveal the top card of your deck. If it costs $5 or more, put it into your hand.
fn patrician(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let Some(top) = game.reveal_top(player)? else {
        return Ok(());
    };
    let cost = game.state.get_card_cost(player, game.state.card_def(top)?);
    if cost.coins >= 5 {
        game.move_card(player, top, Zone::Hand)
    } else {
        game.topdeck_card(player, top)
    }
}

// Emporium: +1 Card +1 Action +$1. When you gain this, if you have at least 5 Action cards in play, +2 VP.
fn emporium_gained(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let actions = game.state.cards_in_zone(player, Zone::InPlay, |d| d.is_action()).len();
    if actions >= 5 {
        game.state.player_mut(player)?.vp_tokens += 2;
    }
    Ok(())
}

/// Offer to move a named card from the discard pile into hand
fn take_from_discard(game: &mut Game, player: PlayerId, name: &'static str) -> Result<()> {
    let Some(card) = game.state.find_in_zone(player, Zone::Discard, name) else {
        return Ok(());
    };
    if game.ask_confirm(player, Confirm::TakeFromDiscard(name))? {
        game.move_card(player, card, Zone::Hand)?;
    }
    Ok(())
}

// Settlers: +1 Card +1 Action. Look through your discard pile. You may reveal a Copper from it and put it into your hand.
fn settlers(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    take_from_discard(game, player, "Copper")
}

// Bustling Village: +1 Card +3 Actions. Look through your discard pile. You may reveal a Settlers from it and put it into your hand.
fn bustling_village(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    take_from_discard(game, player, "Settlers")
}

// Engineer: gain a card costing up to $4. You may trash this. If you do, gain a card costing up to $4.
fn engineer(game: &mut Game, player: PlayerId, card: CardId) -> Result<()> {
    let gain = |game: &mut Game| {
        game.gain_card_costing_up_to(
            player,
            Cost::coins(4),
            GainDestination::Discard,
            Prompt::required("Engineer"),
            |_| true,
        )
    };
    gain(game)?;
    let in_play = game.state.player(player)?.zones.in_play.contains(card);
    if in_play && game.ask_confirm(player, Confirm::TrashEngineer)? {
        game.trash_card(player, card)?;
        gain(game)?;
    }
    Ok(())
}

pub const CARDS: &[CardDef] = &[
    CardDef {
        name: "Patrician",
        cost: Cost::coins(2),
        stats: CardStats::new(1, 1, 0, 0),
        types: &[Action],
        split: Some(SplitPileInfo {
            partner: "Emporium",
            is_bottom_half: false,
        }),
        play_effect: Some(patrician),
        starting_supply: split_half,
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Emporium",
        cost: Cost::coins(5),
        stats: CardStats::new(1, 1, 0, 1),
        types: &[Action],
        split: Some(SplitPileInfo {
            partner: "Patrician",
            is_bottom_half: true,
        }),
        on_gain: Some(emporium_gained),
        starting_supply: split_half,
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Settlers",
        cost: Cost::coins(2),
        stats: CardStats::new(1, 1, 0, 0),
        types: &[Action],
        split: Some(SplitPileInfo {
            partner: "Bustling Village",
            is_bottom_half: false,
        }),
        play_effect: Some(settlers),
        starting_supply: split_half,
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Bustling Village",
        cost: Cost::coins(5),
        stats: CardStats::new(1, 3, 0, 0),
        types: &[Action],
        split: Some(SplitPileInfo {
            partner: "Settlers",
            is_bottom_half: true,
        }),
        play_effect: Some(bustling_village),
        starting_supply: split_half,
        ..CardDef::EMPTY
    },
    // Groundskeeper: +1 Card +1 Action. While this is in play, when you gain a Victory card, +1 VP.
    CardDef {
        name: "Groundskeeper",
        cost: Cost::coins(5),
        stats: CardStats::new(1, 1, 0, 0),
        types: &[Action],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Engineer",
        cost: Cost::debt(4),
        types: &[Action],
        play_effect: Some(engineer),
        ..CardDef::EMPTY
    },
];

// Wall: when scoring, -1 VP per card you have after the first 15.
fn wall(state: &GameState, player: PlayerId) -> i32 {
    let owned = state.owned_defs(player).len() as i32;
    -(owned - 15).max(0)
}

// Fountain: when scoring, 15 VP if you have at least 10 Coppers.
fn fountain(state: &GameState, player: PlayerId) -> i32 {
    let coppers = state
        .owned_defs(player)
        .iter()
        .filter(|def| def.name == "Copper")
        .count();
    if coppers >= 10 {
        15
    } else {
        0
    }
}

// Orchard: when scoring, 4 VP per differently named Action card you have 3 or more copies of.
fn orchard(state: &GameState, player: PlayerId) -> i32 {
    let mut copies: FxHashMap<&'static str, u32> = FxHashMap::default();
    for def in state.owned_defs(player).into_iter().filter(|def| def.is_action()) {
        *copies.entry(def.name).or_insert(0) += 1;
    }
    4 * copies.values().filter(|&&n| n >= 3).count() as i32
}

// Bandit Fort: when scoring, -2 VP for each Silver and each Gold you have.
fn bandit_fort(state: &GameState, player: PlayerId) -> i32 {
    let treasures = state
        .owned_defs(player)
        .iter()
        .filter(|def| matches!(def.name, "Silver" | "Gold"))
        .count() as i32;
    -2 * treasures
}

pub const LANDMARKS: &[LandscapeDef] = &[
    LandscapeDef {
        name: "Wall",
        kind: LandscapeKind::Landmark,
        score: Some(wall),
        ..LandscapeDef::EMPTY
    },
    LandscapeDef {
        name: "Fountain",
        kind: LandscapeKind::Landmark,
        score: Some(fountain),
        ..LandscapeDef::EMPTY
    },
    LandscapeDef {
        name: "Orchard",
        kind: LandscapeKind::Landmark,
        score: Some(orchard),
        ..LandscapeDef::EMPTY
    },
    LandscapeDef {
        name: "Bandit Fort",
        kind: LandscapeKind::Landmark,
        score: Some(bandit_fort),
        ..LandscapeDef::EMPTY
    },
];
