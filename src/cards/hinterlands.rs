//! Hinterlands
//!
//! Trader, Fool's Gold and Guard Dog react from the hand; those reactions
//! are wired into the gain and attack pipelines. Haggler is a buy watcher.

use crate::cards::{victory_pile, CardDef};
use crate::core::CardType::*;
use crate::core::{CardId, CardStats, Cost, PlayerId};
use crate::game::{CardPick, Game, GainDestination, Prompt, TopCardFate};
use crate::Result;

// Trader: trash a card from your hand. Gain a Silver per $1 it costs.
// When you would gain a card, you may reveal this from your hand to gain a Silver instead.
fn trader(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let hand = game.state.player(player)?.hand().to_vec();
    let Some(card) = game.ask_card(player, CardPick::Trash, &hand, Prompt::required("Trader"))? else {
        return Ok(());
    };
    let silvers = game.state.get_card_cost(player, game.state.card_def(card)?).coins;
    game.trash_card(player, card)?;
    for _ in 0..silvers {
        if game.gain_from_supply(player, "Silver", GainDestination::Discard)?.is_none() {
            break;
        }
    }
    Ok(())
}

// Duchess: +$2. Each player (including you) looks at the top card of their
// deck and discards it or puts it back.
fn duchess(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    for target in game.state.everyone_from(player) {
        let Some(top) = game.reveal_top(target)? else {
            continue;
        };
        match game.ask_top_card_fate(target, top, &[TopCardFate::Keep, TopCardFate::Discard])? {
            TopCardFate::Discard => game.discard_card(target, top)?,
            _ => game.topdeck_card(target, top)?,
        }
    }
    Ok(())
}

// Fool's Gold: worth $1 if it's the first time you played a Fool's Gold this turn, otherwise $4.
fn fools_gold(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let p = game.state.player_mut(player)?;
    p.flags.fools_gold_played += 1;
    if p.flags.fools_gold_played > 1 {
        p.coins += 3;
    }
    Ok(())
}

// Scheme: +1 Card +1 Action. At the start of Clean-up this turn, you may
// choose an Action card you have in play. If you discard it from play this
// turn, put it onto your deck.
fn scheme(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.state.player_mut(player)?.flags.schemes_played += 1;
    Ok(())
}

// Farmland: 2 VP. When you buy this, trash a card from your hand and gain a
// card other than a Farmland costing exactly $2 more than it.
fn farmland_bought(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let hand = game.state.player(player)?.hand().to_vec();
    let Some(card) = game.ask_card(player, CardPick::Trash, &hand, Prompt::required("Farmland"))? else {
        return Ok(());
    };
    let target = game
        .state
        .get_card_cost(player, game.state.card_def(card)?)
        .plus_coins(2);
    game.trash_card(player, card)?;
    game.gain_card_costing_exactly(
        player,
        target,
        GainDestination::Discard,
        Prompt::required("Farmland"),
        |def| def.name != "Farmland",
    )?;
    Ok(())
}

// Guard Dog: +2 Cards. If you have 5 or fewer cards in hand, +2 Cards.
// When another player plays an Attack, you may first play this from your hand.
fn guard_dog(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    if game.state.player(player)?.hand().len() <= 5 {
        game.draw_cards(player, 2)?;
    }
    Ok(())
}

pub const CARDS: &[CardDef] = &[
    CardDef {
        name: "Trader",
        cost: Cost::coins(4),
        types: &[Action, Reaction],
        play_effect: Some(trader),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Haggler",
        cost: Cost::coins(5),
        stats: CardStats::coins(2),
        types: &[Action],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Duchess",
        cost: Cost::coins(2),
        stats: CardStats::coins(2),
        types: &[Action],
        play_effect: Some(duchess),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Fool's Gold",
        cost: Cost::coins(2),
        stats: CardStats::coins(1),
        types: &[Treasure, Reaction],
        play_effect: Some(fools_gold),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Scheme",
        cost: Cost::coins(3),
        stats: CardStats::new(1, 1, 0, 0),
        types: &[Action],
        play_effect: Some(scheme),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Farmland",
        cost: Cost::coins(6),
        stats: CardStats::vp(2),
        types: &[Victory],
        on_buy: Some(farmland_bought),
        starting_supply: victory_pile,
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Guard Dog",
        cost: Cost::coins(3),
        stats: CardStats::new(2, 0, 0, 0),
        types: &[Action, Reaction],
        play_effect: Some(guard_dog),
        ..CardDef::EMPTY
    },
];
