//! Random AI controller for testing and baseline gameplay
//!
//! Makes random choices from the available options. Serves as a baseline
//! for more sophisticated strategies and as a fuzzer for card effects.

use crate::core::CardId;
use crate::game::controller::{BuyChoice, GameStateView, PlayerController, Prompt};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// A controller that makes random choices
///
/// Owns its own seeded RNG so its choices never disturb the game's shuffles.
pub struct RandomController {
    rng: ChaCha12Rng,
}

impl RandomController {
    /// Create a random controller with a seeded RNG (for deterministic testing)
    pub fn with_seed(seed: u64) -> Self {
        RandomController {
            rng: ChaCha12Rng::seed_from_u64(seed),
        }
    }

    /// Pick an option, or None with the same probability as any single option
    fn pick_or_stop<T: Copy>(&mut self, options: &[T]) -> Option<T> {
        let index = self.rng.gen_range(0..=options.len());
        options.get(index).copied()
    }

    fn pick<T: Copy>(&mut self, options: &[T]) -> Option<T> {
        if options.is_empty() {
            None
        } else {
            Some(options[self.rng.gen_range(0..options.len())])
        }
    }
}

impl PlayerController for RandomController {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_action(&mut self, _view: &GameStateView, actions: &[CardId]) -> Option<CardId> {
        self.pick_or_stop(actions)
    }

    fn choose_treasure(&mut self, _view: &GameStateView, treasures: &[CardId]) -> Option<CardId> {
        // Always play Treasures; stopping early only throws coins away
        self.pick(treasures)
    }

    fn choose_buy(&mut self, _view: &GameStateView, options: &[BuyChoice]) -> Option<BuyChoice> {
        self.pick_or_stop(options)
    }

    fn choose_card_to_trash(
        &mut self,
        _view: &GameStateView,
        options: &[CardId],
        prompt: &Prompt,
    ) -> Option<CardId> {
        if prompt.optional {
            self.pick_or_stop(options)
        } else {
            self.pick(options)
        }
    }

    fn choose_card_to_gain(
        &mut self,
        _view: &GameStateView,
        options: &[&'static str],
        _prompt: &Prompt,
    ) -> Option<&'static str> {
        self.pick(options)
    }

    fn should_use_villager(&mut self, _view: &GameStateView) -> bool {
        self.rng.gen_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::game::GameState;

    #[test]
    fn test_same_seed_same_choices() {
        let state = GameState::new(&["A".to_string(), "B".to_string()]);
        let view = GameStateView::new(&state, PlayerId::new(0));
        let options: Vec<CardId> = (0..6).map(CardId::new).collect();

        let mut a = RandomController::with_seed(99);
        let mut b = RandomController::with_seed(99);
        let picks_a: Vec<_> = (0..20).map(|_| a.choose_action(&view, &options)).collect();
        let picks_b: Vec<_> = (0..20).map(|_| b.choose_action(&view, &options)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_choices_are_offered() {
        let state = GameState::new(&["A".to_string(), "B".to_string()]);
        let view = GameStateView::new(&state, PlayerId::new(0));
        let options = [CardId::new(3), CardId::new(8)];
        let mut controller = RandomController::with_seed(1);

        for _ in 0..50 {
            let pick = controller.choose_treasure(&view, &options);
            assert!(pick.is_some_and(|c| options.contains(&c)));
        }
        assert_eq!(controller.choose_treasure(&view, &[]), None);
    }
}
