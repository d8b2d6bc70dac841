//! Shared building blocks for card effects
//!
//! Most kingdom cards are a few of these strung together: attack every
//! opponent, gain a card costing up to some amount, trash or discard from
//! hand, play an Action several times.

use crate::cards::CardDef;
use crate::core::{CardId, Cost, PlayerId};
use crate::game::choice_guard::CardPick;
use crate::game::controller::Prompt;
use crate::game::{Game, GainDestination};
use crate::zones::Zone;
use crate::Result;
use rand::seq::SliceRandom;

impl Game {
    /// Run `attack` against each opponent in turn order, through the attack pipeline
    pub fn attack_each_opponent(
        &mut self,
        attacker: PlayerId,
        mut attack: impl FnMut(&mut Game, PlayerId) -> Result<()>,
    ) -> Result<()> {
        for target in self.state.others(attacker) {
            self.attack_player(attacker, target, |game, target| attack(game, target))?;
        }
        Ok(())
    }

    /// Supply cards the player could gain whose cost passes `fits`, most expensive first
    pub fn gain_options(
        &self,
        player: PlayerId,
        fits: impl Fn(&Cost) -> bool,
        filter: impl Fn(&CardDef) -> bool,
    ) -> Vec<&'static str> {
        let mut options: Vec<(&'static str, u32)> = self
            .state
            .supply
            .piles()
            .iter()
            .filter(|pile| pile.in_supply && pile.count > 0)
            .filter_map(|pile| crate::cards::registry::card_def(pile.name).ok())
            .filter(|def| def.is_accessible(&self.state) && filter(def))
            .filter_map(|def| {
                let cost = self.state.get_card_cost(player, def);
                fits(&cost).then_some((def.name, cost.sort_key()))
            })
            .collect();
        options.sort_by(|a, b| b.1.cmp(&a.1));
        options.into_iter().map(|(name, _)| name).collect()
    }

    pub fn gain_card_costing_up_to(
        &mut self,
        player: PlayerId,
        limit: Cost,
        dest: GainDestination,
        prompt: Prompt,
        filter: impl Fn(&CardDef) -> bool,
    ) -> Result<Option<CardId>> {
        let options = self.gain_options(player, |cost| cost.fits_within(&limit), filter);
        match self.ask_gain(player, &options, prompt)? {
            Some(name) => self.gain_from_supply(player, name, dest),
            None => Ok(None),
        }
    }

    pub fn gain_card_costing_exactly(
        &mut self,
        player: PlayerId,
        cost: Cost,
        dest: GainDestination,
        prompt: Prompt,
        filter: impl Fn(&CardDef) -> bool,
    ) -> Result<Option<CardId>> {
        let options = self.gain_options(player, |c| c.is_exactly(&cost), filter);
        match self.ask_gain(player, &options, prompt)? {
            Some(name) => self.gain_from_supply(player, name, dest),
            None => Ok(None),
        }
    }

    /// Trash between `min` and `max` cards from hand that pass `filter`
    pub fn trash_from_hand(
        &mut self,
        player: PlayerId,
        min: u32,
        max: u32,
        source: &'static str,
        filter: impl Fn(&CardDef) -> bool,
    ) -> Result<Vec<CardId>> {
        let mut trashed = Vec::new();
        while (trashed.len() as u32) < max {
            let options = self.state.cards_in_zone(player, Zone::Hand, &filter);
            let prompt = Prompt {
                source,
                optional: trashed.len() as u32 >= min,
            };
            let Some(card) = self.ask_card(player, CardPick::Trash, &options, prompt)? else {
                break;
            };
            self.trash_card(player, card)?;
            trashed.push(card);
        }
        Ok(trashed)
    }

    /// Discard between `min` and `max` cards from hand
    pub fn discard_from_hand(
        &mut self,
        player: PlayerId,
        min: u32,
        max: u32,
        source: &'static str,
    ) -> Result<Vec<CardId>> {
        let mut discarded = Vec::new();
        while (discarded.len() as u32) < max {
            let options = self.state.player(player)?.hand().to_vec();
            let prompt = Prompt {
                source,
                optional: discarded.len() as u32 >= min,
            };
            let Some(card) = self.ask_card(player, CardPick::Discard, &options, prompt)? else {
                break;
            };
            self.discard_card(player, card)?;
            discarded.push(card);
        }
        Ok(discarded)
    }

    /// Discard until the hand holds `size` cards (Militia, Goons)
    pub fn discard_down_to(&mut self, player: PlayerId, size: usize, source: &'static str) -> Result<()> {
        let excess = self.state.player(player)?.hand().len().saturating_sub(size) as u32;
        if excess > 0 {
            self.discard_from_hand(player, excess, excess, source)?;
        }
        Ok(())
    }

    /// Trash a card from hand and gain one costing up to `plus` more
    ///
    /// Returns whether a card was trashed.
    pub fn remodel(
        &mut self,
        player: PlayerId,
        plus: u32,
        source: &'static str,
        optional: bool,
        dest: GainDestination,
    ) -> Result<bool> {
        let hand = self.state.player(player)?.hand().to_vec();
        let prompt = Prompt { source, optional };
        let Some(card) = self.ask_card(player, CardPick::Trash, &hand, prompt)? else {
            return Ok(false);
        };
        let limit = self
            .state
            .get_card_cost(player, self.state.card_def(card)?)
            .plus_coins(plus);
        self.trash_card(player, card)?;
        self.gain_card_costing_up_to(player, limit, dest, Prompt::required(source), |_| true)?;
        Ok(true)
    }

    /// Record one more play of a Duration card so it stays out at cleanup
    pub fn mark_duration(&mut self, card: CardId) -> Result<()> {
        self.state.cards.get_mut(card)?.duration_plays += 1;
        Ok(())
    }

    /// Throne Room / King's Court: play an Action from hand `times` times
    pub fn play_multiplied(
        &mut self,
        player: PlayerId,
        multiplier: CardId,
        times: u32,
        source: &'static str,
    ) -> Result<()> {
        let options = self.state.cards_in_zone(player, Zone::Hand, |d| d.is_action());
        let Some(card) = self.ask_card(player, CardPick::Play, &options, Prompt::optional(source))? else {
            return Ok(());
        };
        self.move_card(player, card, Zone::InPlay)?;
        for _ in 0..times {
            log_if_verbose!(
                self.state,
                "{} plays {} via {source}",
                self.state.player_name(player),
                self.state.card_name(card)
            );
            self.play_card(player, card)?;
        }
        if self.state.card(card)?.duration_plays > 0 {
            self.state.cards.get_mut(multiplier)?.holds_duration = true;
        }
        Ok(())
    }

    /// Move a copy from the supply into the player's Exile (not a gain)
    pub fn exile_from_supply(&mut self, player: PlayerId, name: &str) -> Result<Option<CardId>> {
        let def = crate::cards::registry::card_def(name)?;
        if self.state.supply.count(def.pile_name()) == 0 {
            return Ok(None);
        }
        self.state.supply.take(def.pile_name())?;
        let card = self.mint_card(def, player);
        self.state.player_mut(player)?.zones.exile.add(card);
        log_if_verbose!(
            self.state,
            "{} exiles {}",
            self.state.player_name(player),
            def.name
        );
        Ok(Some(card))
    }

    /// Draw the next Hex (reshuffling its discard when needed) and apply it
    pub fn receive_hex(&mut self, player: PlayerId) -> Result<()> {
        if self.state.hex_deck.is_empty() {
            let mut hexes = std::mem::take(&mut self.state.hex_discard);
            hexes.shuffle(&mut self.state.rng);
            self.state.hex_deck = hexes;
        }
        let Some(hex) = self.state.hex_deck.pop() else {
            return Ok(());
        };
        log_if_verbose!(
            self.state,
            "{} receives {}",
            self.state.player_name(player),
            hex.name()
        );
        hex.apply(self, player)?;
        self.state.hex_discard.push(hex);
        Ok(())
    }

    /// Move every set-aside card to the discard pile
    pub fn discard_set_aside(&mut self, player: PlayerId) -> Result<()> {
        let cards = self.state.player_mut(player)?.zones.set_aside.take_all();
        for card in cards {
            self.state.player_mut(player)?.zones.discard.add(card);
        }
        Ok(())
    }
}
