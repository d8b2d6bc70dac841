//! Game loop implementation
//!
//! Drives the phase state machine (start, action, treasure, buy, cleanup)
//! one phase per `play_turn` call, checks the end conditions and produces
//! the final result.

use crate::cards::{registry, LandscapeKind};
use crate::core::{CardId, Cost, PlayerId, TurnFlags};
use crate::game::controller::{BuyChoice, Confirm, Prompt};
use crate::game::{Game, GainDestination, Phase, DEFAULT_MAX_TURNS};
use crate::zones::Zone;
use crate::{DominionError, Result};
use serde::{Deserialize, Serialize};

/// Verbosity level for game output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only game outcome
    Minimal = 1,
    /// Normal - turns, plays, buys and gains (default)
    #[default]
    Normal = 2,
    /// Verbose - draws, shuffles, reactions and controller choices
    Verbose = 3,
}

/// Per-game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Start with Hovel, Necropolis and Overgrown Estate instead of 3 Estates
    pub use_shelters: bool,
    /// Seed for the game's RNG (shuffles, Ruins, Hexes)
    pub seed: u64,
    /// Rounds after which the game ends regardless of the supply
    pub max_turns: u32,
    pub verbosity: VerbosityLevel,
    /// Capture log lines in memory instead of printing them
    pub capture_logs: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            use_shelters: false,
            seed: 0,
            max_turns: DEFAULT_MAX_TURNS,
            verbosity: VerbosityLevel::Silent,
            capture_logs: false,
        }
    }
}

impl GameOptions {
    pub fn with_shelters(mut self, use_shelters: bool) -> Self {
        self.use_shelters = use_shelters;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_captured_logs(mut self) -> Self {
        self.capture_logs = true;
        self
    }
}

/// Reason the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEndReason {
    /// The Province pile ran out
    ProvincesGone,
    /// Three or more supply piles are empty (the count is recorded)
    PilesEmpty(usize),
    /// Game reached maximum turn limit
    TurnLimit,
}

/// Final scores and bookkeeping, captured once when the game ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMetrics {
    pub player_names: Vec<String>,
    pub final_vp: Vec<i32>,
    pub turns_taken: Vec<u32>,
    /// Round number when the game ended
    pub rounds: u32,
    pub end_reason: GameEndReason,
}

impl GameMetrics {
    /// Highest VP wins, then fewest turns taken; anything else is a draw
    pub fn winner(&self) -> Option<PlayerId> {
        let best_vp = *self.final_vp.iter().max()?;
        let leaders: Vec<usize> = (0..self.final_vp.len())
            .filter(|&idx| self.final_vp[idx] == best_vp)
            .collect();
        let fewest_turns = leaders.iter().map(|&idx| self.turns_taken[idx]).min()?;
        let mut winners = leaders
            .into_iter()
            .filter(|&idx| self.turns_taken[idx] == fewest_turns);
        match (winners.next(), winners.next()) {
            (Some(idx), None) => Some(PlayerId::new(idx)),
            _ => None,
        }
    }
}

/// Result of running a game to completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Winner of the game (None for a draw)
    pub winner: Option<PlayerId>,
    pub metrics: GameMetrics,
}

impl Game {
    /// Run the game until an end condition holds
    pub fn run_game(&mut self) -> Result<GameResult> {
        while !self.is_game_over() {
            self.play_turn()?;
        }
        let metrics = self
            .state
            .metrics
            .clone()
            .ok_or_else(|| DominionError::InvalidAction("game ended without metrics".to_string()))?;
        let winner = metrics.winner();
        match winner {
            Some(player) => self.state.logger.minimal(&format!(
                "{} wins after {} rounds ({:?})",
                self.state.player_name(player),
                metrics.rounds,
                metrics.end_reason
            )),
            None => self.state.logger.minimal(&format!(
                "Draw after {} rounds ({:?})",
                metrics.rounds, metrics.end_reason
            )),
        }
        self.notify_game_end(winner);
        Ok(GameResult { winner, metrics })
    }

    /// Advance exactly one phase of the active player's turn
    ///
    /// Does nothing once the game is over.
    pub fn play_turn(&mut self) -> Result<()> {
        if self.is_game_over() {
            return Ok(());
        }
        let player = self.state.active_player();
        match self.state.phase() {
            Phase::Start => self.start_phase(player),
            Phase::Action => self.action_phase(player),
            Phase::Treasure => self.treasure_phase(player),
            Phase::Buy => self.buy_phase(player),
            Phase::Cleanup => self.cleanup_phase(player),
        }
    }

    /// Whether an end condition holds
    ///
    /// The first time this returns true the final metrics are captured; later
    /// calls return true without recomputing them.
    pub fn is_game_over(&mut self) -> bool {
        if self.state.metrics.is_some() {
            return true;
        }
        let supply = &self.state.supply;
        let empty_piles = supply.empty_piles();
        let reason = if supply.contains("Province") && supply.count("Province") == 0 {
            GameEndReason::ProvincesGone
        } else if empty_piles >= 3 {
            GameEndReason::PilesEmpty(empty_piles)
        } else if self.state.turn.turn_number > self.state.max_turns {
            GameEndReason::TurnLimit
        } else {
            return false;
        };

        let players: Vec<PlayerId> = self.state.player_ids().collect();
        let metrics = GameMetrics {
            player_names: players
                .iter()
                .map(|&p| self.state.player_name(p).to_string())
                .collect(),
            final_vp: players.iter().map(|&p| self.state.victory_points(p)).collect(),
            turns_taken: self.state.players.iter().map(|p| p.turns_taken).collect(),
            rounds: self.state.turn.turn_number,
            end_reason: reason,
        };
        log_if_verbose!(
            self.state,
            "Game over ({reason:?}); scores {:?}",
            metrics.final_vp
        );
        self.state.metrics = Some(metrics);
        true
    }

    fn start_phase(&mut self, player: PlayerId) -> Result<()> {
        let p = self.state.player_mut(player)?;
        p.turns_taken += 1;
        p.flags = TurnFlags::default();
        log_if_verbose!(
            self.state,
            "--- Turn {} - {} ---",
            self.state.turn.turn_number,
            self.state.player_name(player)
        );

        let p = self.state.player_mut(player)?;
        let delayed = p.zones.delayed.take_all();
        p.zones.hand.cards.extend(delayed);

        let projects = p.projects.clone();
        for name in projects {
            if let Some(on_turn_start) = registry::landscape_def(name)?.on_turn_start {
                on_turn_start(self, player)?;
            }
        }

        let p = self.state.player_mut(player)?;
        let cargo = p.zones.cargo_ship.take_all();
        p.zones.hand.cards.extend(cargo);

        let durations = self.state.player(player)?.zones.duration.cards.clone();
        for card in durations {
            let (def, plays) = {
                let c = self.state.card(card)?;
                (c.def, c.duration_plays)
            };
            if let Some(on_duration) = def.on_duration {
                for _ in 0..plays {
                    on_duration(self, player, card)?;
                }
            }
            let p = self.state.player(player)?;
            if p.zones.duration.contains(card)
                && !def.persistent
                && !p.pending_flagships.contains(&card)
            {
                self.discard_card(player, card)?;
            }
        }
        let multipliers = self.state.player_mut(player)?.zones.multiplied_durations.take_all();
        for card in multipliers {
            self.state.player_mut(player)?.zones.discard.add(card);
            self.state.cards.get_mut(card)?.reset_play_state();
        }

        self.state.turn.advance_phase();
        Ok(())
    }

    fn action_phase(&mut self, player: PlayerId) -> Result<()> {
        let ways: Vec<&'static str> = self
            .state
            .landscapes_of(LandscapeKind::Way)
            .map(|way| way.name)
            .collect();
        loop {
            let options = self.state.cards_in_zone(player, Zone::Hand, |d| d.is_action());
            if options.is_empty() {
                break;
            }
            let p = self.state.player(player)?;
            if p.actions == 0 {
                if p.villagers == 0 || !self.ask_villager(player)? {
                    break;
                }
                let p = self.state.player_mut(player)?;
                p.villagers -= 1;
                p.actions += 1;
            }
            let Some(card) = self.ask_action(player, &options)? else {
                break;
            };

            self.move_card(player, card, Zone::InPlay)?;
            let p = self.state.player_mut(player)?;
            p.actions -= 1;
            p.flags.actions_played += 1;
            log_if_verbose!(
                self.state,
                "{} plays {}",
                self.state.player_name(player),
                self.state.card_name(card)
            );

            match self.ask_way(player, card, &ways)? {
                Some(way) => {
                    log_if_verbose!(self.state, "  using {way}");
                    if let Some(effect) = registry::landscape_def(way)?.way_effect {
                        effect(self, player, card)?;
                    }
                }
                None => self.play_action(player, card)?,
            }
        }
        self.state.turn.advance_phase();
        Ok(())
    }

    fn treasure_phase(&mut self, player: PlayerId) -> Result<()> {
        loop {
            let options = self.state.cards_in_zone(player, Zone::Hand, |d| d.is_treasure());
            let Some(card) = self.ask_treasure(player, &options)? else {
                break;
            };
            self.move_card(player, card, Zone::InPlay)?;
            let p = self.state.player_mut(player)?;
            let first = p.flags.treasures_played == 0;
            p.flags.treasures_played += 1;
            if first && p.highwaymen > 0 {
                log_if_verbose!(
                    self.state,
                    "{} plays {} (does nothing: Highwayman)",
                    self.state.player_name(player),
                    self.state.card_name(card)
                );
                continue;
            }
            log_if_verbose!(
                self.state,
                "{} plays {}",
                self.state.player_name(player),
                self.state.card_name(card)
            );
            self.play_card(player, card)?;
        }
        self.state.turn.advance_phase();
        Ok(())
    }

    /// Everything the player may buy right now, supply cards most expensive first
    pub fn buy_options(&self, player: PlayerId) -> Result<Vec<BuyChoice>> {
        let p = self.state.player(player)?;
        let affordable = |cost: &Cost| cost.coins <= p.coins && cost.potions <= p.potions;

        let mut cards: Vec<(&'static str, u32)> = self
            .state
            .supply
            .piles()
            .iter()
            .filter(|pile| pile.in_supply && pile.count > 0 && pile.name != "Ruins")
            .filter_map(|pile| registry::card_def(pile.name).ok())
            .filter(|def| def.can_be_bought(&self.state, player))
            .filter(|def| !(p.deluded && def.is_action()))
            .filter_map(|def| {
                let cost = self.state.get_card_cost(player, def);
                affordable(&cost).then_some((def.name, cost.sort_key()))
            })
            .collect();
        cards.sort_by(|a, b| b.1.cmp(&a.1));

        let mut options: Vec<BuyChoice> = cards.into_iter().map(|(name, _)| BuyChoice::Card(name)).collect();
        options.extend(
            self.state
                .landscapes_of(LandscapeKind::Event)
                .filter(|event| affordable(&event.cost))
                .filter(|event| event.may_be_bought.map_or(true, |gate| gate(&self.state, player)))
                .map(|event| BuyChoice::Event(event.name)),
        );
        options.extend(
            self.state
                .landscapes_of(LandscapeKind::Project)
                .filter(|project| !p.owns_project(project.name) && affordable(&project.cost))
                .map(|project| BuyChoice::Project(project.name)),
        );
        Ok(options)
    }

    fn buy_phase(&mut self, player: PlayerId) -> Result<()> {
        let spend = self.ask_coffers(player)?;
        if spend > 0 {
            let p = self.state.player_mut(player)?;
            p.coffers -= spend;
            p.coins += spend;
        }

        loop {
            let p = self.state.player_mut(player)?;
            let paid = p.debt.min(p.coins);
            p.debt -= paid;
            p.coins -= paid;
            let blocked = p.debt > 0 || p.buys == 0;
            if paid > 0 {
                log_if_verbose!(
                    self.state,
                    "{} pays off {paid} debt",
                    self.state.player_name(player)
                );
            }
            if blocked {
                break;
            }

            let options = self.buy_options(player)?;
            let Some(choice) = self.ask_buy(player, &options)? else {
                break;
            };
            match choice {
                BuyChoice::Card(name) => self.buy_card(player, name)?,
                BuyChoice::Event(name) => self.buy_event(player, name)?,
                BuyChoice::Project(name) => self.buy_project(player, name)?,
            }
        }
        self.state.turn.advance_phase();
        Ok(())
    }

    /// Buy a supply card: pay, take it, fire on-buy, gain it, then watchers
    pub fn buy_card(&mut self, player: PlayerId, name: &str) -> Result<()> {
        let def = registry::card_def(name)?;
        let cost = self.state.get_card_cost(player, def);
        let p = self.state.player_mut(player)?;
        p.coins = p.coins.saturating_sub(cost.coins);
        p.potions = p.potions.saturating_sub(cost.potions);
        p.debt += cost.debt;
        p.buys = p.buys.saturating_sub(1);
        log_if_verbose!(
            self.state,
            "{} buys {}",
            self.state.player_name(player),
            def.name
        );

        self.state.supply.take(def.pile_name())?;
        let card = self.mint_card(def, player);
        if let Some(on_buy) = def.on_buy {
            on_buy(self, player, card)?;
        }
        self.gain_card(player, card, GainDestination::Discard)?;
        self.watch_purchase(player, def.name, cost)
    }

    /// "When you buy" triggers of cards in play and in hand
    fn watch_purchase(&mut self, player: PlayerId, name: &'static str, cost: Cost) -> Result<()> {
        let def = registry::card_def(name)?;

        if def.is_victory() {
            for _ in 0..self.state.count_in_play(player, "Hoard") {
                self.gain_from_supply(player, "Gold", GainDestination::Discard)?;
            }
        }

        if !def.is_victory() && cost.fits_within(&Cost::coins(4)) {
            for _ in 0..self.state.count_in_play(player, "Talisman") {
                self.gain_from_supply(player, name, GainDestination::Discard)?;
            }
        }

        for _ in 0..self.state.count_in_play(player, "Haggler") {
            let options = self.gain_options(
                player,
                |c| c.fits_within(&cost) && *c != cost,
                |d| !d.is_victory(),
            );
            if let Some(choice) = self.ask_gain(player, &options, Prompt::required("Haggler"))? {
                self.gain_from_supply(player, choice, GainDestination::Discard)?;
            }
        }

        let goons = self.state.count_in_play(player, "Goons") as i32;
        self.state.player_mut(player)?.vp_tokens += goons;

        if def.is_victory() {
            if let Some(hovel) = self.state.find_in_zone(player, Zone::Hand, "Hovel") {
                if self.ask_confirm(player, Confirm::TrashHovel)? {
                    self.trash_card(player, hovel)?;
                }
            }
        }
        Ok(())
    }

    pub fn buy_event(&mut self, player: PlayerId, name: &str) -> Result<()> {
        let event = registry::landscape_def(name)?;
        let p = self.state.player_mut(player)?;
        p.coins = p.coins.saturating_sub(event.cost.coins);
        p.debt += event.cost.debt;
        p.buys = p.buys.saturating_sub(1);
        log_if_verbose!(
            self.state,
            "{} buys event {}",
            self.state.player_name(player),
            event.name
        );
        if let Some(on_buy) = event.on_buy {
            on_buy(self, player)?;
        }
        Ok(())
    }

    pub fn buy_project(&mut self, player: PlayerId, name: &str) -> Result<()> {
        let project = registry::landscape_def(name)?;
        let p = self.state.player_mut(player)?;
        p.coins = p.coins.saturating_sub(project.cost.coins);
        p.buys = p.buys.saturating_sub(1);
        p.projects.push(project.name);
        log_if_verbose!(
            self.state,
            "{} buys project {}",
            self.state.player_name(player),
            project.name
        );
        if let Some(on_buy) = project.on_buy {
            on_buy(self, player)?;
        }
        Ok(())
    }

    /// Action cards in play that Scheme would put back, best first
    fn scheme_picks(&self, player: PlayerId, count: u32) -> Result<Vec<CardId>> {
        let mut candidates: Vec<(CardId, (u32, u32, u32))> = self
            .state
            .player(player)?
            .in_play()
            .iter()
            .filter_map(|&id| self.state.card(id).ok())
            .filter(|c| c.is_action() && c.duration_plays == 0 && !c.holds_duration)
            .map(|c| {
                let cost = self.state.get_card_cost(player, c.def).sort_key();
                (c.id, (cost, c.def.stats.cards, c.def.stats.actions))
            })
            .collect();
        candidates.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(candidates
            .into_iter()
            .take(count as usize)
            .map(|(id, _)| id)
            .collect())
    }

    fn cleanup_phase(&mut self, player: PlayerId) -> Result<()> {
        log_if_verbose!(
            self.state,
            "{} ends turn with {} VP",
            self.state.player_name(player),
            self.state.victory_points(player)
        );

        let schemes = self.state.player(player)?.flags.schemes_played;
        let mut to_deck = self.scheme_picks(player, schemes)?;

        let actions_in_play = self
            .state
            .cards_in_zone(player, Zone::InPlay, |d| d.is_action())
            .len();
        if actions_in_play <= 2 {
            for village in self
                .state
                .cards_in_zone(player, Zone::InPlay, |d| d.name == "Walled Village")
            {
                if !to_deck.contains(&village) && self.ask_confirm(player, Confirm::WalledVillage)? {
                    to_deck.push(village);
                    self.state.player_mut(player)?.flags.walled_villages_topdecked += 1;
                }
            }
        }
        let walled = self.state.player(player)?.flags.walled_villages_topdecked;
        if walled > 0 {
            log_if_verbose!(
                self.state,
                "{} puts {walled} Walled Village(s) back on the deck",
                self.state.player_name(player)
            );
        }

        let mut tricked = Vec::new();
        for _ in 0..self.state.player(player)?.flags.trickster_uses {
            let treasures: Vec<CardId> = self
                .state
                .cards_in_zone(player, Zone::InPlay, |d| d.is_treasure())
                .into_iter()
                .filter(|id| !tricked.contains(id))
                .collect();
            match self.ask_trickster(player, &treasures)? {
                Some(card) => {
                    self.move_card(player, card, Zone::SetAside)?;
                    tricked.push(card);
                }
                None => break,
            }
        }

        let in_play = self.state.player(player)?.in_play().to_vec();
        let mut topdecks = Vec::new();
        for card in in_play {
            let c = self.state.card(card)?;
            let pending_flagship = self.state.player(player)?.pending_flagships.contains(&card);
            if to_deck.contains(&card) {
                topdecks.push(card);
            } else if c.duration_plays > 0 || pending_flagship {
                self.move_card(player, card, Zone::Duration)?;
            } else if c.holds_duration {
                self.move_card(player, card, Zone::MultipliedDurations)?;
            } else {
                self.discard_card(player, card)?;
            }
        }
        for card in topdecks {
            self.topdeck_card(player, card)?;
        }

        let hand = self.state.player(player)?.hand().to_vec();
        for card in hand {
            self.discard_card(player, card)?;
        }
        self.draw_cards(player, 5)?;
        for card in tricked {
            self.move_card(player, card, Zone::Hand)?;
        }

        let p = self.state.player_mut(player)?;
        p.reset_turn_resources();
        p.flags = TurnFlags::default();
        p.envious = false;
        p.deluded = false;

        if p.extra_turn {
            p.extra_turn = false;
            log_if_verbose!(
                self.state,
                "{} takes an extra turn",
                self.state.player_name(player)
            );
            self.state.turn.phase = Phase::Start;
        } else {
            let next = PlayerId::new((player.index() + 1) % self.state.num_players());
            self.state.turn.pass_turn(next);
        }
        Ok(())
    }
}
