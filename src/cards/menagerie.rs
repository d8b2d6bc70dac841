//! Menagerie: Exile, Events and Ways

use crate::cards::{CardDef, LandscapeDef, LandscapeKind};
use crate::core::CardType::*;
use crate::core::{CardId, Cost, PlayerId};
use crate::game::{CardPick, Game, GameState, Prompt};
use crate::zones::Zone;
use crate::Result;

/// Ask for a supply card matching `filter` and move a copy of it to Exile
fn exile_choice(
    game: &mut Game,
    player: PlayerId,
    source: &'static str,
    fits: impl Fn(&Cost) -> bool,
    filter: impl Fn(&CardDef) -> bool,
) -> Result<Option<&'static str>> {
    let options = game.gain_options(player, fits, filter);
    let Some(name) = game.ask_gain(player, &options, Prompt::required(source))? else {
        return Ok(None);
    };
    Ok(game.exile_from_supply(player, name)?.map(|_| name))
}

// Camel Train: Exile a non-Victory card from the Supply. When you gain this, Exile a Gold from the Supply.
fn camel_train(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    exile_choice(game, player, "Camel Train", |_| true, |def| !def.is_victory())?;
    Ok(())
}

fn camel_train_gained(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.exile_from_supply(player, "Gold")?;
    Ok(())
}

// Highwayman: at the start of your next turn, discard this from play and +3 Cards.
// Until then, the first Treasure each other player plays each turn does nothing.
fn highwayman(game: &mut Game, player: PlayerId, card: CardId) -> Result<()> {
    game.mark_duration(card)?;
    game.attack_each_opponent(player, |game, target| {
        game.state.player_mut(target)?.highwaymen += 1;
        game.state.cards.get_mut(card)?.attack_hits.push(target);
        Ok(())
    })
}

/// Lifts one play's worth of the attack, only from players it reached
fn highwayman_next_turn(game: &mut Game, player: PlayerId, card: CardId) -> Result<()> {
    game.draw_cards(player, 3)?;
    for other in game.state.others(player) {
        let hits = &mut game.state.cards.get_mut(card)?.attack_hits;
        let Some(pos) = hits.iter().position(|&hit| hit == other) else {
            continue;
        };
        hits.remove(pos);
        let p = game.state.player_mut(other)?;
        p.highwaymen = p.highwaymen.saturating_sub(1);
    }
    Ok(())
}

pub const CARDS: &[CardDef] = &[
    CardDef {
        name: "Camel Train",
        cost: Cost::coins(3),
        types: &[Action],
        play_effect: Some(camel_train),
        on_gain: Some(camel_train_gained),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Highwayman",
        cost: Cost::coins(5),
        types: &[Action, Duration, Attack],
        play_effect: Some(highwayman),
        on_duration: Some(highwayman_next_turn),
        ..CardDef::EMPTY
    },
];

// Delay: you may set aside an Action card from your hand. At the start of your next turn, take it back.
fn delay(game: &mut Game, player: PlayerId) -> Result<()> {
    let actions = game.state.cards_in_zone(player, Zone::Hand, |d| d.is_action());
    if let Some(card) = game.ask_card(player, CardPick::Play, &actions, Prompt::optional("Delay"))? {
        game.move_card(player, card, Zone::Delayed)?;
    }
    Ok(())
}

// Seize the Day: once per game, take an extra turn after this one.
fn seize_the_day(game: &mut Game, player: PlayerId) -> Result<()> {
    let p = game.state.player_mut(player)?;
    p.seize_the_day_used = true;
    p.extra_turn = true;
    Ok(())
}

fn seize_the_day_available(state: &GameState, player: PlayerId) -> bool {
    state.player(player).is_ok_and(|p| !p.seize_the_day_used)
}

// Invest: Exile an Action card costing up to $4 from the Supply. While it's in
// Exile, when another player gains or Invests in a copy of it, +2 Cards.
fn invest(game: &mut Game, player: PlayerId) -> Result<()> {
    let limit = Cost::coins(4);
    let Some(name) = exile_choice(game, player, "Invest", |c| c.fits_within(&limit), |d| d.is_action())? else {
        return Ok(());
    };
    game.state.player_mut(player)?.invested.push(name);
    for other in game.state.others(player) {
        let investments = game
            .state
            .player(other)?
            .invested
            .iter()
            .filter(|&&invested| invested == name)
            .count() as u32;
        if investments > 0 {
            game.draw_cards(other, 2 * investments)?;
        }
    }
    Ok(())
}

pub const EVENTS: &[LandscapeDef] = &[
    LandscapeDef {
        name: "Delay",
        kind: LandscapeKind::Event,
        on_buy: Some(delay),
        ..LandscapeDef::EMPTY
    },
    LandscapeDef {
        name: "Seize the Day",
        kind: LandscapeKind::Event,
        cost: Cost::coins(4),
        on_buy: Some(seize_the_day),
        may_be_bought: Some(seize_the_day_available),
        ..LandscapeDef::EMPTY
    },
    LandscapeDef {
        name: "Invest",
        kind: LandscapeKind::Event,
        cost: Cost::coins(4),
        on_buy: Some(invest),
        ..LandscapeDef::EMPTY
    },
];

// Way of the Ox: +2 Actions.
fn way_of_the_ox(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.state.player_mut(player)?.actions += 2;
    Ok(())
}

// Way of the Pig: +1 Card +1 Action.
fn way_of_the_pig(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.state.player_mut(player)?.actions += 1;
    game.draw_cards(player, 1)?;
    Ok(())
}

// Way of the Sheep: +$2.
fn way_of_the_sheep(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.state.player_mut(player)?.coins += 2;
    Ok(())
}

// Way of the Seal: +$1. This turn, when you gain a card, put it onto your deck.
fn way_of_the_seal(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let p = game.state.player_mut(player)?;
    p.coins += 1;
    p.flags.topdeck_gains = true;
    Ok(())
}

// Way of the Mole: +1 Action. Discard your hand. +3 Cards.
fn way_of_the_mole(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.state.player_mut(player)?.actions += 1;
    let hand = game.state.player(player)?.hand().to_vec();
    for card in hand {
        game.discard_card(player, card)?;
    }
    game.draw_cards(player, 3)?;
    Ok(())
}

pub const WAYS: &[LandscapeDef] = &[
    LandscapeDef {
        name: "Way of the Ox",
        kind: LandscapeKind::Way,
        way_effect: Some(way_of_the_ox),
        ..LandscapeDef::EMPTY
    },
    LandscapeDef {
        name: "Way of the Pig",
        kind: LandscapeKind::Way,
        way_effect: Some(way_of_the_pig),
        ..LandscapeDef::EMPTY
    },
    LandscapeDef {
        name: "Way of the Sheep",
        kind: LandscapeKind::Way,
        way_effect: Some(way_of_the_sheep),
        ..LandscapeDef::EMPTY
    },
    LandscapeDef {
        name: "Way of the Seal",
        kind: LandscapeKind::Way,
        way_effect: Some(way_of_the_seal),
        ..LandscapeDef::EMPTY
    },
    LandscapeDef {
        name: "Way of the Mole",
        kind: LandscapeKind::Way,
        way_effect: Some(way_of_the_mole),
        ..LandscapeDef::EMPTY
    },
];
