//! Validating wrapper around controller decisions
//!
//! The engine never trusts a controller's answer. Every decision goes
//! through one of the `ask_*` methods here, which checks the answer against
//! the offered candidates: an answer that was not offered falls back to the
//! first candidate for a required choice, or to skipping for an optional
//! one, and out-of-range counts are clamped. Fallbacks are logged so a buggy
//! strategy shows up in the logs instead of crashing a batch of games.

use crate::core::{CardId, PlayerId};
use crate::game::controller::{
    BuyChoice, Confirm, GovernorOption, Prompt, StewardOption, TopCardFate, TopdeckSource,
    TorturerOption, WatchtowerChoice,
};
use crate::game::Game;
use crate::Result;
use std::fmt::Debug;

/// Outcome of validating a single pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guarded<T> {
    pub value: Option<T>,
    /// The controller's answer was replaced
    pub fell_back: bool,
}

/// Validate `picked` against `options`
pub fn guard_pick<T: Copy + PartialEq>(picked: Option<T>, options: &[T], optional: bool) -> Guarded<T> {
    let fallback = if optional { None } else { options.first().copied() };
    match picked {
        Some(choice) if options.contains(&choice) => Guarded {
            value: Some(choice),
            fell_back: false,
        },
        Some(_) => Guarded {
            value: fallback,
            fell_back: true,
        },
        None if fallback.is_some() => Guarded {
            value: fallback,
            fell_back: true,
        },
        None => Guarded {
            value: None,
            fell_back: false,
        },
    }
}

/// Clamp a requested count to `max`; the flag reports whether clamping happened
pub fn guard_count(requested: u32, max: u32) -> (u32, bool) {
    if requested > max {
        (max, true)
    } else {
        (requested, false)
    }
}

/// Which single-card pick to ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPick {
    Trash,
    Discard,
    Topdeck,
    Play,
}

impl Game {
    fn settle<T: Copy + PartialEq + Debug>(
        &self,
        player: PlayerId,
        what: &str,
        picked: Option<T>,
        options: &[T],
        optional: bool,
    ) -> Option<T> {
        let guarded = guard_pick(picked, options, optional);
        if guarded.fell_back {
            self.state.logger.fallback(
                self.controller_name(player),
                &format!("{what} {picked:?} replaced by {:?}", guarded.value),
            );
        }
        guarded.value
    }

    fn log_choice(&self, player: PlayerId, message: &str) {
        self.state
            .logger
            .controller_choice(self.state.player_name(player), message);
    }

    /// Action to play, or None to end the action phase
    pub fn ask_action(&mut self, player: PlayerId, options: &[CardId]) -> Result<Option<CardId>> {
        if options.is_empty() {
            return Ok(None);
        }
        let picked = self.decide(player, |c, view| c.choose_action(view, options))?;
        let choice = self.settle(player, "action", picked, options, true);
        if let Some(card) = choice {
            self.log_choice(player, &format!("to play {}", self.state.card_name(card)));
        }
        Ok(choice)
    }

    /// Treasure to play, or None to end the treasure phase
    pub fn ask_treasure(&mut self, player: PlayerId, options: &[CardId]) -> Result<Option<CardId>> {
        if options.is_empty() {
            return Ok(None);
        }
        let picked = self.decide(player, |c, view| c.choose_treasure(view, options))?;
        Ok(self.settle(player, "treasure", picked, options, true))
    }

    pub fn ask_buy(&mut self, player: PlayerId, options: &[BuyChoice]) -> Result<Option<BuyChoice>> {
        if options.is_empty() {
            return Ok(None);
        }
        let picked = self.decide(player, |c, view| c.choose_buy(view, options))?;
        let choice = self.settle(player, "buy", picked, options, true);
        if let Some(buy) = choice {
            self.log_choice(player, &format!("to buy {}", buy.name()));
        }
        Ok(choice)
    }

    /// Single card pick from `options` (a required pick always answers when options exist)
    pub fn ask_card(
        &mut self,
        player: PlayerId,
        pick: CardPick,
        options: &[CardId],
        prompt: Prompt,
    ) -> Result<Option<CardId>> {
        if options.is_empty() {
            return Ok(None);
        }
        let picked = self.decide(player, |c, view| match pick {
            CardPick::Trash => c.choose_card_to_trash(view, options, &prompt),
            CardPick::Discard => c.choose_card_to_discard(view, options, &prompt),
            CardPick::Topdeck => c.choose_card_to_topdeck(view, options, &prompt),
            CardPick::Play => c.choose_card_to_play(view, options, &prompt),
        })?;
        let choice = self.settle(player, prompt.source, picked, options, prompt.optional);
        if let Some(card) = choice {
            self.log_choice(
                player,
                &format!("{} for {}", self.state.card_name(card), prompt.source),
            );
        }
        Ok(choice)
    }

    /// Supply card to gain, by name
    pub fn ask_gain(
        &mut self,
        player: PlayerId,
        options: &[&'static str],
        prompt: Prompt,
    ) -> Result<Option<&'static str>> {
        if options.is_empty() {
            return Ok(None);
        }
        let picked = self.decide(player, |c, view| c.choose_card_to_gain(view, options, &prompt))?;
        let choice = self.settle(player, prompt.source, picked, options, prompt.optional);
        if let Some(name) = choice {
            self.log_choice(player, &format!("to gain {name} with {}", prompt.source));
        }
        Ok(choice)
    }

    pub fn ask_top_card_fate(
        &mut self,
        player: PlayerId,
        card: CardId,
        allowed: &[TopCardFate],
    ) -> Result<TopCardFate> {
        let picked = self.decide(player, |c, view| c.choose_top_card_fate(view, card, allowed))?;
        Ok(self
            .settle(player, "top card fate", Some(picked), allowed, false)
            .unwrap_or(TopCardFate::Keep))
    }

    pub fn ask_confirm(&mut self, player: PlayerId, question: Confirm) -> Result<bool> {
        let answer = self.decide(player, |c, view| c.confirm(view, question))?;
        self.log_choice(player, &format!("{answer} to {question:?}"));
        Ok(answer)
    }

    pub fn ask_watchtower(&mut self, player: PlayerId, card: CardId) -> Result<WatchtowerChoice> {
        self.decide(player, |c, view| c.choose_watchtower_reaction(view, card))
    }

    pub fn ask_moat(&mut self, target: PlayerId, attacker: PlayerId) -> Result<bool> {
        self.decide(target, |c, view| c.should_reveal_moat(view, attacker))
    }

    pub fn ask_guard_dog(&mut self, target: PlayerId, attacker: PlayerId) -> Result<bool> {
        self.decide(target, |c, view| c.should_play_guard_dog(view, attacker))
    }

    pub fn ask_trader(&mut self, player: PlayerId, card: CardId) -> Result<bool> {
        self.decide(player, |c, view| c.should_reveal_trader(view, card))
    }

    pub fn ask_topdeck_gain(
        &mut self,
        player: PlayerId,
        card: CardId,
        source: TopdeckSource,
    ) -> Result<bool> {
        self.decide(player, |c, view| c.should_topdeck_gain(view, card, source))
    }

    pub fn ask_governor(&mut self, player: PlayerId) -> Result<GovernorOption> {
        self.decide(player, |c, view| c.choose_governor_option(view))
    }

    pub fn ask_steward(&mut self, player: PlayerId) -> Result<StewardOption> {
        self.decide(player, |c, view| c.choose_steward_option(view))
    }

    pub fn ask_torturer(&mut self, player: PlayerId) -> Result<TorturerOption> {
        self.decide(player, |c, view| c.choose_torturer_option(view))
    }

    /// Way to use instead of the card's own effect, if any
    pub fn ask_way(
        &mut self,
        player: PlayerId,
        card: CardId,
        ways: &[&'static str],
    ) -> Result<Option<&'static str>> {
        if ways.is_empty() {
            return Ok(None);
        }
        let picked = self.decide(player, |c, view| c.choose_way(view, card, ways))?;
        Ok(self.settle(player, "way", picked, ways, true))
    }

    pub fn ask_trickster(&mut self, player: PlayerId, treasures: &[CardId]) -> Result<Option<CardId>> {
        if treasures.is_empty() {
            return Ok(None);
        }
        let picked = self.decide(player, |c, view| c.choose_trickster_set_aside(view, treasures))?;
        Ok(self.settle(player, "Trickster", picked, treasures, true))
    }

    /// Coffers to spend, clamped to what the player has
    pub fn ask_coffers(&mut self, player: PlayerId) -> Result<u32> {
        let available = self.state.player(player)?.coffers;
        if available == 0 {
            return Ok(0);
        }
        let requested = self.decide(player, |c, view| c.coffers_to_spend(view, available))?;
        let (spend, clamped) = guard_count(requested, available);
        if clamped {
            self.state.logger.fallback(
                self.controller_name(player),
                &format!("asked for {requested} Coffers, has {available}"),
            );
        }
        Ok(spend)
    }

    pub fn ask_villager(&mut self, player: PlayerId) -> Result<bool> {
        self.decide(player, |c, view| c.should_use_villager(view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pick_passes_through() {
        let options = [CardId::new(1), CardId::new(2)];
        let guarded = guard_pick(Some(CardId::new(2)), &options, false);
        assert_eq!(guarded.value, Some(CardId::new(2)));
        assert!(!guarded.fell_back);
    }

    #[test]
    fn test_invalid_required_pick_takes_first() {
        let options = [CardId::new(1), CardId::new(2)];
        let guarded = guard_pick(Some(CardId::new(9)), &options, false);
        assert_eq!(guarded.value, Some(CardId::new(1)));
        assert!(guarded.fell_back);

        let declined = guard_pick(None, &options, false);
        assert_eq!(declined.value, Some(CardId::new(1)));
        assert!(declined.fell_back);
    }

    #[test]
    fn test_invalid_optional_pick_skips() {
        let options = ["Silver", "Gold"];
        let guarded = guard_pick(Some("Province"), &options, true);
        assert_eq!(guarded.value, None);
        assert!(guarded.fell_back);

        let skipped = guard_pick(None, &options, true);
        assert_eq!(skipped.value, None);
        assert!(!skipped.fell_back);
    }

    #[test]
    fn test_guard_count() {
        assert_eq!(guard_count(3, 5), (3, false));
        assert_eq!(guard_count(8, 5), (5, true));
    }
}
