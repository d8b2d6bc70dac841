//! Big Money heuristic controller
//!
//! Buys the most valuable money it can afford and greens on a schedule
//! driven by the Province pile. Optionally supports one kingdom card (the
//! classic "Big Money + Smithy") bought up to a fixed number of copies.
//!
//! Decisions use simple evaluation functions over the visible state rather
//! than simulation, so a game between two of these is cheap and
//! deterministic, which makes it the benchmark and tournament baseline.

use crate::cards::{registry, CardDef};
use crate::core::{CardId, CardType};
use crate::game::controller::{BuyChoice, GameStateView, PlayerController, Prompt};
use crate::Result;

pub struct BigMoneyController {
    name: String,
    /// Kingdom card to mix in, with the number of copies wanted
    support: Option<(&'static str, usize)>,
}

impl Default for BigMoneyController {
    fn default() -> Self {
        Self::new()
    }
}

impl BigMoneyController {
    pub fn new() -> Self {
        BigMoneyController {
            name: "Big Money".to_string(),
            support: None,
        }
    }

    /// Big Money plus up to `copies` of one kingdom card
    pub fn with_support(card: &str, copies: usize) -> Result<Self> {
        let def = registry::card_def(card)?;
        Ok(BigMoneyController {
            name: format!("Big Money + {}", def.name),
            support: Some((def.name, copies)),
        })
    }

    /// Desired buys in order for the given coins, before availability checks
    fn wishlist(&self, view: &GameStateView) -> Vec<&'static str> {
        let coins = view.coins();
        let provinces_left = view.supply_count("Province");
        let golds = view.count_owned("Gold");
        let mut wants = Vec::new();

        if coins >= 8 && (golds > 0 || view.total_owned() > 15) {
            wants.push("Province");
        }
        if coins >= 5 && provinces_left <= 4 {
            wants.push("Duchy");
        }
        if coins >= 6 {
            wants.push("Gold");
        }
        if let Some((support, copies)) = self.support {
            let fits = view.cost_of(support).is_some_and(|cost| cost.coins <= coins);
            if fits && view.count_owned(support) < copies {
                wants.push(support);
            }
        }
        if coins >= 2 && provinces_left <= 2 {
            wants.push("Estate");
        }
        if coins >= 3 {
            wants.push("Silver");
        }
        wants
    }
}

/// Lower is more disposable
fn keep_value(def: &CardDef) -> i32 {
    if def.is_type(CardType::Curse) {
        -10
    } else if def.is_victory() && !def.is_action() && !def.is_treasure() {
        -5 + def.stats.vp
    } else if def.is_type(CardType::Ruins) {
        -3
    } else {
        def.cost.sort_key() as i32
    }
}

fn least_valuable(view: &GameStateView, options: &[CardId]) -> Option<CardId> {
    options
        .iter()
        .copied()
        .min_by_key(|&id| view.card_def(id).map_or(0, keep_value))
}

impl PlayerController for BigMoneyController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(&mut self, view: &GameStateView, actions: &[CardId]) -> Option<CardId> {
        // Non-terminal Actions first so the terminal still has an action to use
        actions
            .iter()
            .copied()
            .max_by_key(|&id| view.card_def(id).map_or(0, |def| def.stats.actions))
    }

    fn choose_treasure(&mut self, _view: &GameStateView, treasures: &[CardId]) -> Option<CardId> {
        treasures.first().copied()
    }

    fn choose_buy(&mut self, view: &GameStateView, options: &[BuyChoice]) -> Option<BuyChoice> {
        self.wishlist(view)
            .into_iter()
            .map(BuyChoice::Card)
            .find(|choice| options.contains(choice))
    }

    fn choose_card_to_trash(
        &mut self,
        view: &GameStateView,
        options: &[CardId],
        prompt: &Prompt,
    ) -> Option<CardId> {
        let worst = least_valuable(view, options)?;
        let junk = view
            .card_name(worst)
            .is_some_and(|name| matches!(name, "Curse" | "Estate" | "Copper" | "Hovel" | "Overgrown Estate"));
        if prompt.optional && !junk {
            None
        } else {
            Some(worst)
        }
    }

    fn choose_card_to_discard(
        &mut self,
        view: &GameStateView,
        options: &[CardId],
        prompt: &Prompt,
    ) -> Option<CardId> {
        let worst = least_valuable(view, options)?;
        let dead = view
            .card_def(worst)
            .is_some_and(|def| !def.is_action() && !def.is_treasure());
        if prompt.optional && !dead {
            None
        } else {
            Some(worst)
        }
    }

    fn choose_card_to_gain(
        &mut self,
        _view: &GameStateView,
        options: &[&'static str],
        _prompt: &Prompt,
    ) -> Option<&'static str> {
        options
            .iter()
            .copied()
            .find(|&name| name != "Curse")
            .or_else(|| options.first().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::game::GameState;

    fn state_with_coins(coins: u32) -> GameState {
        let mut state = GameState::new(&["A".to_string(), "B".to_string()]);
        state.supply.add_pile("Province", 8, true);
        state.players[0].coins = coins;
        state
    }

    #[test]
    fn test_buys_gold_at_six() {
        let state = state_with_coins(6);
        let view = GameStateView::new(&state, PlayerId::new(0));
        let mut controller = BigMoneyController::new();
        let options = [
            BuyChoice::Card("Gold"),
            BuyChoice::Card("Duchy"),
            BuyChoice::Card("Silver"),
        ];
        assert_eq!(controller.choose_buy(&view, &options), Some(BuyChoice::Card("Gold")));
    }

    #[test]
    fn test_greens_late() {
        let mut state = state_with_coins(5);
        state.supply.set_count("Province", 3).unwrap();
        let view = GameStateView::new(&state, PlayerId::new(0));
        let mut controller = BigMoneyController::new();
        let options = [BuyChoice::Card("Duchy"), BuyChoice::Card("Silver")];
        assert_eq!(controller.choose_buy(&view, &options), Some(BuyChoice::Card("Duchy")));
    }

    #[test]
    fn test_support_card() {
        let state = state_with_coins(4);
        let view = GameStateView::new(&state, PlayerId::new(0));
        let mut controller = BigMoneyController::with_support("Smithy", 1).unwrap();
        assert_eq!(controller.name(), "Big Money + Smithy");
        let options = [BuyChoice::Card("Smithy"), BuyChoice::Card("Silver")];
        assert_eq!(controller.choose_buy(&view, &options), Some(BuyChoice::Card("Smithy")));
        assert!(BigMoneyController::with_support("Nonexistent", 1).is_err());
    }

    #[test]
    fn test_nothing_below_three() {
        let state = state_with_coins(2);
        let view = GameStateView::new(&state, PlayerId::new(0));
        let mut controller = BigMoneyController::new();
        assert_eq!(controller.choose_buy(&view, &[BuyChoice::Card("Copper")]), None);
    }
}
