//! Intrigue

use crate::cards::CardDef;
use crate::core::CardType::*;
use crate::core::{CardId, CardStats, Cost, PlayerId};
use crate::game::{CardPick, Game, GainDestination, Prompt, StewardOption, TorturerOption};
use crate::Result;

// Courtyard: +3 Cards. Put a card from your hand onto your deck.
fn courtyard(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let hand = game.state.player(player)?.hand().to_vec();
    if let Some(card) = game.ask_card(player, CardPick::Topdeck, &hand, Prompt::required("Courtyard"))? {
        game.topdeck_card(player, card)?;
    }
    Ok(())
}

// Steward: choose one: +2 Cards; or +$2; or trash 2 cards from your hand.
fn steward(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    match game.ask_steward(player)? {
        StewardOption::Cards => {
            game.draw_cards(player, 2)?;
        }
        StewardOption::Coins => game.state.player_mut(player)?.coins += 2,
        StewardOption::Trash => {
            game.trash_from_hand(player, 2, 2, "Steward", |_| true)?;
        }
    }
    Ok(())
}

// Bridge: +1 Buy +$1. This turn, cards (everywhere) cost $1 less.
fn bridge(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.state.player_mut(player)?.flags.cost_reduction += 1;
    Ok(())
}

// Ironworks: gain a card costing up to $4. If it is an Action, +1 Action;
// a Treasure, +$1; a Victory card, +1 Card.
fn ironworks(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let Some(gained) = game.gain_card_costing_up_to(
        player,
        Cost::coins(4),
        GainDestination::Discard,
        Prompt::required("Ironworks"),
        |_| true,
    )?
    else {
        return Ok(());
    };
    let def = game.state.card_def(gained)?;
    let p = game.state.player_mut(player)?;
    if def.is_action() {
        p.actions += 1;
    }
    if def.is_treasure() {
        p.coins += 1;
    }
    if def.is_victory() {
        game.draw_cards(player, 1)?;
    }
    Ok(())
}

// Upgrade: +1 Card +1 Action. Trash a card from your hand. Gain a card costing exactly $1 more than it.
fn upgrade(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let hand = game.state.player(player)?.hand().to_vec();
    let Some(card) = game.ask_card(player, CardPick::Trash, &hand, Prompt::required("Upgrade"))? else {
        return Ok(());
    };
    let target = game
        .state
        .get_card_cost(player, game.state.card_def(card)?)
        .plus_coins(1);
    game.trash_card(player, card)?;
    game.gain_card_costing_exactly(
        player,
        target,
        GainDestination::Discard,
        Prompt::required("Upgrade"),
        |_| true,
    )?;
    Ok(())
}

// Torturer: +3 Cards. Each other player either discards 2 cards or gains a Curse to their hand.
fn torturer(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.attack_each_opponent(player, |game, target| {
        match game.ask_torturer(target)? {
            TorturerOption::Discard => {
                game.discard_from_hand(target, 2, 2, "Torturer")?;
            }
            TorturerOption::TakeCurse => {
                game.give_curse_to_player(target, true)?;
            }
        }
        Ok(())
    })
}

pub const CARDS: &[CardDef] = &[
    CardDef {
        name: "Courtyard",
        cost: Cost::coins(2),
        stats: CardStats::new(3, 0, 0, 0),
        types: &[Action],
        play_effect: Some(courtyard),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Steward",
        cost: Cost::coins(3),
        types: &[Action],
        play_effect: Some(steward),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Bridge",
        cost: Cost::coins(4),
        stats: CardStats::new(0, 0, 1, 1),
        types: &[Action],
        play_effect: Some(bridge),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Ironworks",
        cost: Cost::coins(4),
        types: &[Action],
        play_effect: Some(ironworks),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Upgrade",
        cost: Cost::coins(5),
        stats: CardStats::new(1, 1, 0, 0),
        types: &[Action],
        play_effect: Some(upgrade),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Torturer",
        cost: Cost::coins(5),
        stats: CardStats::new(3, 0, 0, 0),
        types: &[Action, Attack],
        play_effect: Some(torturer),
        ..CardDef::EMPTY
    },
];
