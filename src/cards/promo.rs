//! Promo cards

use crate::cards::CardDef;
use crate::core::CardType::*;
use crate::core::{CardId, CardStats, Cost, PlayerId};
use crate::game::{CardPick, Game, GainDestination, GovernorOption, Prompt};
use crate::Result;

/// Optionally trash a card from hand and gain one costing exactly `plus` more
fn trash_and_upgrade(game: &mut Game, player: PlayerId, plus: u32) -> Result<()> {
    let hand = game.state.player(player)?.hand().to_vec();
    let Some(card) = game.ask_card(player, CardPick::Trash, &hand, Prompt::optional("Governor"))? else {
        return Ok(());
    };
    let target = game
        .state
        .get_card_cost(player, game.state.card_def(card)?)
        .plus_coins(plus);
    game.trash_card(player, card)?;
    game.gain_card_costing_exactly(
        player,
        target,
        GainDestination::Discard,
        Prompt::required("Governor"),
        |_| true,
    )?;
    Ok(())
}

// Governor: +1 Action. Choose one; you get the version in parentheses: each
// player gets +1 (+3) Cards; or each player gains a Silver (Gold); or each
// player may trash a card from their hand and gain a card costing exactly $1 ($2) more.
fn governor(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    let option = game.ask_governor(player)?;
    for target in game.state.everyone_from(player) {
        let is_player = target == player;
        match option {
            GovernorOption::Cards => {
                game.draw_cards(target, if is_player { 3 } else { 1 })?;
            }
            GovernorOption::Treasure => {
                let treasure = if is_player { "Gold" } else { "Silver" };
                game.gain_from_supply(target, treasure, GainDestination::Discard)?;
            }
            GovernorOption::Remodel => trash_and_upgrade(game, target, if is_player { 2 } else { 1 })?,
        }
    }
    Ok(())
}

pub const CARDS: &[CardDef] = &[
    CardDef {
        name: "Governor",
        cost: Cost::coins(5),
        stats: CardStats::new(0, 1, 0, 0),
        types: &[Action],
        play_effect: Some(governor),
        ..CardDef::EMPTY
    },
    // Walled Village: +1 Card +2 Actions. At the start of Clean-up, if you have
    // this and no more than one other Action card in play, you may put this onto your deck.
    CardDef {
        name: "Walled Village",
        cost: Cost::coins(4),
        stats: CardStats::new(1, 2, 0, 0),
        types: &[Action],
        ..CardDef::EMPTY
    },
];
