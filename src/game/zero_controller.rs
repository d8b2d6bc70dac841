//! Zero controller for testing and automation
//!
//! This controller always chooses the first available option. Buy options
//! come most expensive first, so it plays every Action and Treasure it can
//! and buys the priciest card it can afford. Long-tail decisions use the
//! trait defaults.

use crate::core::CardId;
use crate::game::controller::{BuyChoice, GameStateView, PlayerController};

/// A controller that always chooses the first available option (index 0)
///
/// This is useful for:
/// - Automated testing
/// - Benchmarking the game engine
/// - Ensuring games can complete deterministically
#[derive(Debug, Default)]
pub struct ZeroController;

impl ZeroController {
    pub fn new() -> Self {
        ZeroController
    }
}

impl PlayerController for ZeroController {
    fn name(&self) -> &str {
        "Zero"
    }

    fn choose_action(&mut self, _view: &GameStateView, actions: &[CardId]) -> Option<CardId> {
        actions.first().copied()
    }

    fn choose_treasure(&mut self, _view: &GameStateView, treasures: &[CardId]) -> Option<CardId> {
        treasures.first().copied()
    }

    fn choose_buy(&mut self, _view: &GameStateView, options: &[BuyChoice]) -> Option<BuyChoice> {
        options.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::game::GameState;

    #[test]
    fn test_zero_controller_picks_first() {
        let state = GameState::new(&["Zero".to_string(), "Zero".to_string()]);
        let view = GameStateView::new(&state, PlayerId::new(0));
        let mut controller = ZeroController::new();

        let cards = [CardId::new(4), CardId::new(2)];
        assert_eq!(controller.choose_action(&view, &cards), Some(CardId::new(4)));
        assert_eq!(controller.choose_treasure(&view, &[]), None);
        assert_eq!(
            controller.choose_buy(&view, &[BuyChoice::Card("Gold"), BuyChoice::Card("Silver")]),
            Some(BuyChoice::Card("Gold"))
        );
    }
}
