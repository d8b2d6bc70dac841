//! Dominion base set (second edition)

use crate::cards::{victory_pile, CardDef};
use crate::core::CardType::*;
use crate::core::{CardId, CardStats, Cost, PlayerId};
use crate::game::{CardPick, Confirm, Game, GainDestination, GameState, Prompt, TopCardFate};
use crate::zones::Zone;
use crate::Result;

// Cellar: +1 Action. Discard any number of cards, then draw that many.
fn cellar(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let hand_size = game.state.player(player)?.hand().len() as u32;
    let discarded = game.discard_from_hand(player, 0, hand_size, "Cellar")?;
    game.draw_cards(player, discarded.len() as u32)?;
    Ok(())
}

// Chapel: trash up to 4 cards from your hand.
fn chapel(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.trash_from_hand(player, 0, 4, "Chapel", |_| true)?;
    Ok(())
}

// Harbinger: +1 Card +1 Action. You may put a card from your discard pile onto your deck.
fn harbinger(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let discard = game.state.player(player)?.zones.discard.cards.clone();
    if let Some(card) =
        game.ask_card(player, CardPick::Topdeck, &discard, Prompt::optional("Harbinger"))?
    {
        game.topdeck_card(player, card)?;
    }
    Ok(())
}

// Merchant: +1 Card +1 Action. The first time you play a Silver this turn, +$1.
fn merchant(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.state.player_mut(player)?.flags.merchants_played += 1;
    Ok(())
}

// Vassal: +$2. Discard the top card of your deck. If it's an Action, you may play it.
fn vassal(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let Some(top) = game.pop_deck(player)? else {
        return Ok(());
    };
    game.state.player_mut(player)?.zones.discard.add(top);
    if game.state.card_def(top)?.is_action() && game.ask_confirm(player, Confirm::PlayDiscarded(top))? {
        game.move_card(player, top, Zone::InPlay)?;
        game.play_card(player, top)?;
    }
    Ok(())
}

// Workshop: gain a card costing up to $4.
fn workshop(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.gain_card_costing_up_to(
        player,
        Cost::coins(4),
        GainDestination::Discard,
        Prompt::required("Workshop"),
        |_| true,
    )?;
    Ok(())
}

// Bureaucrat: gain a Silver onto your deck. Each other player puts a Victory card from hand onto their deck.
fn bureaucrat(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.gain_from_supply(player, "Silver", GainDestination::DeckTop)?;
    game.attack_each_opponent(player, |game, target| {
        let victory = game.state.cards_in_zone(target, Zone::Hand, |d| d.is_victory());
        if let Some(card) =
            game.ask_card(target, CardPick::Topdeck, &victory, Prompt::required("Bureaucrat"))?
        {
            game.topdeck_card(target, card)?;
        }
        Ok(())
    })
}

// Gardens: worth 1 VP per 10 cards you have (round down).
fn gardens(state: &GameState, player: PlayerId) -> i32 {
    state
        .player(player)
        .map_or(0, |p| (p.zones.total_cards() / 10) as i32)
}

// Militia: +$2. Each other player discards down to 3 cards in hand.
fn militia(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.attack_each_opponent(player, |game, target| game.discard_down_to(target, 3, "Militia"))
}

// Moneylender: you may trash a Copper from your hand for +$3.
fn moneylender(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    if let Some(copper) = game.state.find_in_zone(player, Zone::Hand, "Copper") {
        if game.ask_confirm(player, Confirm::TrashCopper)? {
            game.trash_card(player, copper)?;
            game.state.player_mut(player)?.coins += 3;
        }
    }
    Ok(())
}

// Poacher: +1 Card +1 Action +$1. Discard a card per empty Supply pile.
fn poacher(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let empty = game.state.supply.empty_piles() as u32;
    if empty > 0 {
        game.discard_from_hand(player, empty, empty, "Poacher")?;
    }
    Ok(())
}

// Remodel: trash a card from your hand. Gain a card costing up to $2 more than it.
fn remodel(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.remodel(player, 2, "Remodel", false, GainDestination::Discard)?;
    Ok(())
}

// Throne Room: you may play an Action card from your hand twice.
fn throne_room(game: &mut Game, player: PlayerId, card: CardId) -> Result<()> {
    game.play_multiplied(player, card, 2, "Throne Room")
}

// Bandit: gain a Gold. Each other player reveals the top 2 cards of their deck,
// trashes a revealed Treasure other than Copper, and discards the rest.
fn bandit(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.gain_from_supply(player, "Gold", GainDestination::Discard)?;
    game.attack_each_opponent(player, |game, target| {
        for _ in 0..2 {
            game.reveal_top(target)?;
        }
        let treasures = game
            .state
            .cards_in_zone(target, Zone::SetAside, |d| d.is_treasure() && d.name != "Copper");
        if let Some(card) =
            game.ask_card(target, CardPick::Trash, &treasures, Prompt::required("Bandit"))?
        {
            game.trash_card(target, card)?;
        }
        game.discard_set_aside(target)
    })
}

// Council Room: +4 Cards +1 Buy. Each other player draws a card.
fn council_room(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    for other in game.state.others(player) {
        game.draw_cards(other, 1)?;
    }
    Ok(())
}

// Library: draw until you have 7 cards in hand, skipping any Action cards you choose to.
fn library(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    while game.state.player(player)?.hand().len() < 7 {
        let Some(card) = game.reveal_top(player)? else {
            break;
        };
        let skip = game.state.card_def(card)?.is_action()
            && game.ask_confirm(player, Confirm::SkipLibraryAction(card))?;
        if !skip {
            game.move_card(player, card, Zone::Hand)?;
        }
    }
    game.discard_set_aside(player)
}

// Mine: you may trash a Treasure from your hand. Gain a Treasure to your hand costing up to $3 more.
fn mine(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let treasures = game.state.cards_in_zone(player, Zone::Hand, |d| d.is_treasure());
    let Some(card) = game.ask_card(player, CardPick::Trash, &treasures, Prompt::optional("Mine"))? else {
        return Ok(());
    };
    let limit = game
        .state
        .get_card_cost(player, game.state.card_def(card)?)
        .plus_coins(3);
    game.trash_card(player, card)?;
    game.gain_card_costing_up_to(
        player,
        limit,
        GainDestination::Hand,
        Prompt::required("Mine"),
        |d| d.is_treasure(),
    )?;
    Ok(())
}

// Sentry: +1 Card +1 Action. Look at the top 2 cards of your deck. Trash and/or
// discard any number of them. Put the rest back on top.
fn sentry(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let mut revealed = Vec::new();
    for _ in 0..2 {
        if let Some(card) = game.reveal_top(player)? {
            revealed.push(card);
        }
    }
    let mut kept = Vec::new();
    for card in revealed {
        let fates = [TopCardFate::Keep, TopCardFate::Discard, TopCardFate::Trash];
        match game.ask_top_card_fate(player, card, &fates)? {
            TopCardFate::Keep => kept.push(card),
            TopCardFate::Discard => game.discard_card(player, card)?,
            TopCardFate::Trash => game.trash_card(player, card)?,
        }
    }
    // The first card looked at goes back on top
    for card in kept.into_iter().rev() {
        game.topdeck_card(player, card)?;
    }
    Ok(())
}

// Witch: +2 Cards. Each other player gains a Curse.
fn witch(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.attack_each_opponent(player, |game, target| {
        game.give_curse_to_player(target, false)?;
        Ok(())
    })
}

// Artisan: gain a card to your hand costing up to $5. Put a card from your hand onto your deck.
fn artisan(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.gain_card_costing_up_to(
        player,
        Cost::coins(5),
        GainDestination::Hand,
        Prompt::required("Artisan"),
        |_| true,
    )?;
    let hand = game.state.player(player)?.hand().to_vec();
    if let Some(card) = game.ask_card(player, CardPick::Topdeck, &hand, Prompt::required("Artisan"))? {
        game.topdeck_card(player, card)?;
    }
    Ok(())
}

pub const CARDS: &[CardDef] = &[
    CardDef {
        name: "Cellar",
        cost: Cost::coins(2),
        stats: CardStats::new(0, 1, 0, 0),
        types: &[Action],
        play_effect: Some(cellar),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Chapel",
        cost: Cost::coins(2),
        types: &[Action],
        play_effect: Some(chapel),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Moat",
        cost: Cost::coins(2),
        stats: CardStats::new(2, 0, 0, 0),
        types: &[Action, Reaction],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Harbinger",
        cost: Cost::coins(3),
        stats: CardStats::new(1, 1, 0, 0),
        types: &[Action],
        play_effect: Some(harbinger),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Merchant",
        cost: Cost::coins(3),
        stats: CardStats::new(1, 1, 0, 0),
        types: &[Action],
        play_effect: Some(merchant),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Vassal",
        cost: Cost::coins(3),
        stats: CardStats::coins(2),
        types: &[Action],
        play_effect: Some(vassal),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Village",
        cost: Cost::coins(3),
        stats: CardStats::new(1, 2, 0, 0),
        types: &[Action],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Workshop",
        cost: Cost::coins(3),
        types: &[Action],
        play_effect: Some(workshop),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Bureaucrat",
        cost: Cost::coins(4),
        types: &[Action, Attack],
        play_effect: Some(bureaucrat),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Gardens",
        cost: Cost::coins(4),
        types: &[Victory],
        victory_points: Some(gardens),
        starting_supply: victory_pile,
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Militia",
        cost: Cost::coins(4),
        stats: CardStats::coins(2),
        types: &[Action, Attack],
        play_effect: Some(militia),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Moneylender",
        cost: Cost::coins(4),
        types: &[Action],
        play_effect: Some(moneylender),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Poacher",
        cost: Cost::coins(4),
        stats: CardStats::new(1, 1, 0, 1),
        types: &[Action],
        play_effect: Some(poacher),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Remodel",
        cost: Cost::coins(4),
        types: &[Action],
        play_effect: Some(remodel),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Smithy",
        cost: Cost::coins(4),
        stats: CardStats::new(3, 0, 0, 0),
        types: &[Action],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Throne Room",
        cost: Cost::coins(4),
        types: &[Action],
        play_effect: Some(throne_room),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Bandit",
        cost: Cost::coins(5),
        types: &[Action, Attack],
        play_effect: Some(bandit),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Council Room",
        cost: Cost::coins(5),
        stats: CardStats::new(4, 0, 1, 0),
        types: &[Action],
        play_effect: Some(council_room),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Festival",
        cost: Cost::coins(5),
        stats: CardStats::new(0, 2, 1, 2),
        types: &[Action],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Laboratory",
        cost: Cost::coins(5),
        stats: CardStats::new(2, 1, 0, 0),
        types: &[Action],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Library",
        cost: Cost::coins(5),
        types: &[Action],
        play_effect: Some(library),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Market",
        cost: Cost::coins(5),
        stats: CardStats::new(1, 1, 1, 1),
        types: &[Action],
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Mine",
        cost: Cost::coins(5),
        types: &[Action],
        play_effect: Some(mine),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Sentry",
        cost: Cost::coins(5),
        stats: CardStats::new(1, 1, 0, 0),
        types: &[Action],
        play_effect: Some(sentry),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Witch",
        cost: Cost::coins(5),
        stats: CardStats::new(2, 0, 0, 0),
        types: &[Action, Attack],
        play_effect: Some(witch),
        ..CardDef::EMPTY
    },
    CardDef {
        name: "Artisan",
        cost: Cost::coins(6),
        types: &[Action],
        play_effect: Some(artisan),
        ..CardDef::EMPTY
    },
];
