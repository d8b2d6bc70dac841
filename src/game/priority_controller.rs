//! Priority-list strategy loaded from JSON
//!
//! A strategy file lists what to buy, in priority order, with optional
//! conditions, plus the order to play Actions and the cards worth trashing:
//!
//! ```json
//! {
//!   "name": "Smithy BM",
//!   "buy": [
//!     { "card": "Province" },
//!     { "card": "Duchy", "provinces_left_at_most": 4 },
//!     { "card": "Smithy", "max_owned": 1 },
//!     { "card": "Gold" },
//!     { "card": "Silver" }
//!   ],
//!   "play": ["Village", "Smithy"],
//!   "trash": ["Curse", "Estate"]
//! }
//! ```
//!
//! Every name is resolved through the card registry when the file is
//! loaded, so a typo fails at load time instead of silently never matching.

use crate::cards::registry;
use crate::core::CardId;
use crate::game::controller::{BuyChoice, GameStateView, PlayerController, Prompt};
use crate::{DominionError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One line of the buy list as written in the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyRule {
    pub card: String,
    /// Stop buying once this many copies are owned
    #[serde(default)]
    pub max_owned: Option<usize>,
    /// Only buy while the Province pile has at most this many cards
    #[serde(default)]
    pub provinces_left_at_most: Option<u32>,
}

/// Strategy file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityStrategy {
    pub name: String,
    pub buy: Vec<BuyRule>,
    #[serde(default)]
    pub play: Vec<String>,
    #[serde(default)]
    pub trash: Vec<String>,
}

#[derive(Debug, Clone)]
struct Rule {
    name: &'static str,
    max_owned: Option<usize>,
    provinces_left_at_most: Option<u32>,
}

/// Controller driven by a [`PriorityStrategy`]
#[derive(Debug, Clone)]
pub struct PriorityController {
    name: String,
    buy: Vec<Rule>,
    play: Vec<&'static str>,
    trash: Vec<&'static str>,
}

/// Registry name for a card, Event or Project
fn resolve(name: &str) -> Result<&'static str> {
    registry::card_def(name)
        .map(|def| def.name)
        .or_else(|_| registry::landscape_def(name).map(|def| def.name))
}

fn resolve_all(names: &[String]) -> Result<Vec<&'static str>> {
    names.iter().map(|name| registry::card_def(name).map(|def| def.name)).collect()
}

impl PriorityController {
    pub fn new(strategy: &PriorityStrategy) -> Result<Self> {
        let buy = strategy
            .buy
            .iter()
            .map(|rule| {
                Ok(Rule {
                    name: resolve(&rule.card)?,
                    max_owned: rule.max_owned,
                    provinces_left_at_most: rule.provinces_left_at_most,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(PriorityController {
            name: strategy.name.clone(),
            buy,
            play: resolve_all(&strategy.play)?,
            trash: resolve_all(&strategy.trash)?,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let strategy: PriorityStrategy =
            serde_json::from_str(json).map_err(|e| DominionError::SerializationError(e.to_string()))?;
        Self::new(&strategy)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn rule_applies(rule: &Rule, view: &GameStateView) -> bool {
        rule.max_owned.map_or(true, |max| view.count_owned(rule.name) < max)
            && rule
                .provinces_left_at_most
                .map_or(true, |max| view.supply_count("Province") <= max)
    }

    /// First option whose name appears earliest in `priority`
    fn by_priority(view: &GameStateView, options: &[CardId], priority: &[&'static str]) -> Option<CardId> {
        priority.iter().find_map(|&name| {
            options
                .iter()
                .copied()
                .find(|&id| view.card_name(id) == Some(name))
        })
    }
}

impl PlayerController for PriorityController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(&mut self, view: &GameStateView, actions: &[CardId]) -> Option<CardId> {
        Self::by_priority(view, actions, &self.play).or_else(|| {
            actions
                .iter()
                .copied()
                .max_by_key(|&id| view.card_def(id).map_or(0, |def| def.stats.actions))
        })
    }

    fn choose_treasure(&mut self, _view: &GameStateView, treasures: &[CardId]) -> Option<CardId> {
        treasures.first().copied()
    }

    fn choose_buy(&mut self, view: &GameStateView, options: &[BuyChoice]) -> Option<BuyChoice> {
        self.buy
            .iter()
            .filter(|rule| Self::rule_applies(rule, view))
            .find_map(|rule| options.iter().copied().find(|choice| choice.name() == rule.name))
    }

    fn choose_card_to_trash(
        &mut self,
        view: &GameStateView,
        options: &[CardId],
        prompt: &Prompt,
    ) -> Option<CardId> {
        Self::by_priority(view, options, &self.trash).or_else(|| {
            if prompt.optional {
                None
            } else {
                options.first().copied()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::game::GameState;

    const SMITHY_BM: &str = r#"{
        "name": "Smithy BM",
        "buy": [
            { "card": "Province" },
            { "card": "Duchy", "provinces_left_at_most": 4 },
            { "card": "smithy", "max_owned": 1 },
            { "card": "Gold" },
            { "card": "Silver" }
        ],
        "trash": ["Curse"]
    }"#;

    #[test]
    fn test_parse_and_resolve_names() {
        let controller = PriorityController::from_json(SMITHY_BM).unwrap();
        assert_eq!(controller.name(), "Smithy BM");
        assert_eq!(controller.buy[2].name, "Smithy");
        assert!(controller.play.is_empty());
    }

    #[test]
    fn test_unknown_card_rejected() {
        let json = r#"{ "name": "x", "buy": [{ "card": "Dragon" }] }"#;
        assert!(matches!(
            PriorityController::from_json(json),
            Err(DominionError::UnknownCard(_))
        ));
        assert!(matches!(
            PriorityController::from_json("not json"),
            Err(DominionError::SerializationError(_))
        ));
    }

    #[test]
    fn test_buy_rules() {
        let mut state = GameState::new(&["A".to_string(), "B".to_string()]);
        state.supply.add_pile("Province", 8, true);
        let view = GameStateView::new(&state, PlayerId::new(0));
        let mut controller = PriorityController::from_json(SMITHY_BM).unwrap();

        let options = [
            BuyChoice::Card("Gold"),
            BuyChoice::Card("Duchy"),
            BuyChoice::Card("Smithy"),
            BuyChoice::Card("Silver"),
        ];
        // Duchy is gated on the Province pile, so Smithy comes first
        assert_eq!(controller.choose_buy(&view, &options), Some(BuyChoice::Card("Smithy")));
        assert_eq!(
            controller.choose_buy(&view, &[BuyChoice::Card("Copper")]),
            None
        );
    }
}
