//! The rules engine
//!
//! `Game` pairs the pure-data [`GameState`] with one controller per seat and
//! owns every rule that moves cards: setup, drawing, the gain/trash/attack
//! pipelines and card play. Card hooks receive `&mut Game` and call back into
//! these primitives directly, so effects resolve immediately and in order.

use crate::cards::{registry, CardDef, Hex, LandscapeKind};
use crate::core::{Card, CardId, CardType, PlayerId};
use crate::game::controller::{Confirm, GameStateView, PlayerController, TopdeckSource, WatchtowerChoice};
use crate::game::{GameOptions, GameState, Phase};
use crate::loader::Board;
use crate::zones::Zone;
use crate::{DominionError, Result};
use rand::seq::SliceRandom;

/// Where a gained card lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GainDestination {
    Discard,
    DeckTop,
    Hand,
}

impl GainDestination {
    fn zone(self) -> Zone {
        match self {
            GainDestination::Discard => Zone::Discard,
            GainDestination::DeckTop => Zone::Deck,
            GainDestination::Hand => Zone::Hand,
        }
    }
}

/// A game in progress: state plus the controllers making its decisions
pub struct Game {
    pub state: GameState,
    controllers: Vec<Box<dyn PlayerController>>,
}

fn province_pile(players: usize) -> u32 {
    match players {
        2 => 8,
        3 | 4 => 12,
        5 => 15,
        _ => 18,
    }
}

impl Game {
    /// Set up a game: players, supply, landscapes and starting decks
    ///
    /// Seat order follows `controllers`. Every kingdom and landscape name is
    /// resolved through the card registry; an unknown name is an error.
    pub fn new(
        controllers: Vec<Box<dyn PlayerController>>,
        board: &Board,
        options: &GameOptions,
    ) -> Result<Game> {
        let players = controllers.len();
        if !(2..=6).contains(&players) {
            return Err(DominionError::InvalidAction(format!(
                "Dominion needs 2-6 players, got {players}"
            )));
        }
        if board.kingdom.is_empty() {
            return Err(DominionError::InvalidBoard("no kingdom cards".to_string()));
        }

        let mut names: Vec<String> = controllers.iter().map(|c| c.name().to_string()).collect();
        let duplicated = (1..names.len()).any(|i| names[..i].contains(&names[i]));
        if duplicated {
            for (idx, name) in names.iter_mut().enumerate() {
                *name = format!("{name} ({})", PlayerId::new(idx));
            }
        }

        let mut state = GameState::new(&names);
        state.seed_rng(options.seed);
        state.max_turns = options.max_turns;
        state.logger.set_verbosity(options.verbosity);
        if options.capture_logs {
            state.logger.enable_capture();
        }

        for name in &board.kingdom {
            let def = registry::card_def(name)?;
            if !state.kingdom.contains(&def.name) {
                state.kingdom.push(def.name);
            }
        }

        let landscape_lists = [
            (LandscapeKind::Event, &board.events),
            (LandscapeKind::Project, &board.projects),
            (LandscapeKind::Way, &board.ways),
            (LandscapeKind::Landmark, &board.landmarks),
            (LandscapeKind::Ally, &board.allies),
        ];
        for (kind, names) in landscape_lists {
            for name in names {
                let def = registry::landscape_def(name)?;
                if def.kind != kind {
                    return Err(DominionError::InvalidBoard(format!(
                        "{} is a {:?}, not a {kind:?}",
                        def.name, def.kind
                    )));
                }
                if !state.landscapes.iter().any(|l| l.name == def.name) {
                    state.landscapes.push(def);
                }
            }
        }

        let mut game = Game { state, controllers };
        game.setup_supply()?;
        game.deal_starting_decks(options.use_shelters)?;
        Ok(game)
    }

    fn setup_supply(&mut self) -> Result<()> {
        let players = self.state.num_players();
        let victory = crate::cards::victory_pile(players);
        let supply = &mut self.state.supply;
        supply.add_pile("Copper", 60 - 7 * players as u32, true);
        supply.add_pile("Silver", 40, true);
        supply.add_pile("Gold", 30, true);
        supply.add_pile("Estate", victory, true);
        supply.add_pile("Duchy", victory, true);
        supply.add_pile("Province", province_pile(players), true);
        supply.add_pile("Curse", 10 * (players as u32 - 1), true);

        let kingdom: Vec<&'static CardDef> = self
            .state
            .kingdom
            .iter()
            .map(|name| registry::card_def(name))
            .collect::<Result<_>>()?;

        let mut needs_potion = false;
        for def in &kingdom {
            let count = (def.starting_supply)(players);
            match def.split {
                Some(split) if !self.state.supply.contains(def.name) => {
                    let (top, bottom) = if split.is_bottom_half {
                        (split.partner, def.name)
                    } else {
                        (def.name, split.partner)
                    };
                    self.state.supply.add_split_pile(top, bottom, count);
                    needs_potion |= registry::card_def(split.partner)?.cost.potions > 0;
                }
                Some(_) => {}
                None => self.state.supply.add_pile(def.name, count, true),
            }
            needs_potion |= def.cost.potions > 0;

            for extra in def.extra_piles {
                match *extra {
                    "Ruins" => self.state.supply.add_pile("Ruins", 10 * (players as u32 - 1), true),
                    "Spoils" => self.state.supply.add_pile("Spoils", 15, false),
                    "Hexes" if self.state.hex_deck.is_empty() => {
                        self.state.hex_deck = Hex::ALL.to_vec();
                        self.state.hex_deck.shuffle(&mut self.state.rng);
                    }
                    _ => {}
                }
            }
        }
        if needs_potion {
            self.state.supply.add_pile("Potion", 16, true);
        }

        if self.state.kingdom.contains(&"Trade Route") {
            let victory_piles: Vec<&'static str> = self
                .state
                .supply
                .piles()
                .iter()
                .filter(|pile| pile.in_supply)
                .filter(|pile| registry::card_def(pile.name).is_ok_and(|def| def.is_victory()))
                .map(|pile| pile.name)
                .collect();
            self.state.trade_route_tokens = victory_piles;
        }
        Ok(())
    }

    fn deal_starting_decks(&mut self, use_shelters: bool) -> Result<()> {
        let copper = registry::card_def("Copper")?;
        let green: Vec<&'static CardDef> = if use_shelters {
            ["Hovel", "Necropolis", "Overgrown Estate"]
                .iter()
                .map(|name| registry::card_def(name))
                .collect::<Result<_>>()?
        } else {
            vec![registry::card_def("Estate")?; 3]
        };

        for player in self.state.player_ids().collect::<Vec<_>>() {
            for def in std::iter::repeat(copper).take(7).chain(green.iter().copied()) {
                let card = self.mint_card(def, player);
                self.state.player_mut(player)?.zones.deck.add(card);
            }
            self.state.shuffle_deck(player);
            self.draw_cards(player, 5)?;
        }
        log_if_verbose!(
            self.state,
            "Kingdom: {}",
            self.state.kingdom.join(", ")
        );
        Ok(())
    }

    /// Run a controller decision with a read-only view of the state
    pub(crate) fn decide<R>(
        &mut self,
        player: PlayerId,
        f: impl FnOnce(&mut dyn PlayerController, &GameStateView<'_>) -> R,
    ) -> Result<R> {
        let controller = self
            .controllers
            .get_mut(player.index())
            .ok_or_else(|| DominionError::InvalidAction(format!("no controller for {player}")))?;
        let view = GameStateView::new(&self.state, player);
        Ok(f(controller.as_mut(), &view))
    }

    pub fn controller_name(&self, player: PlayerId) -> &str {
        self.controllers
            .get(player.index())
            .map_or("?", |c| c.name())
    }

    pub(crate) fn notify_game_end(&mut self, winner: Option<PlayerId>) {
        for (idx, controller) in self.controllers.iter_mut().enumerate() {
            let player = PlayerId::new(idx);
            let view = GameStateView::new(&self.state, player);
            controller.on_game_end(&view, winner == Some(player));
        }
    }

    /// Create a new card instance owned by `owner` (not yet in any zone)
    pub fn mint_card(&mut self, def: &'static CardDef, owner: PlayerId) -> CardId {
        let id = self.state.cards.next_id();
        self.state.cards.insert(id, Card::new(id, def, owner));
        id
    }

    /// Move one of the player's cards into `to` (top of the deck for `Zone::Deck`)
    pub fn move_card(&mut self, player: PlayerId, card: CardId, to: Zone) -> Result<()> {
        let zones = &mut self.state.player_mut(player)?.zones;
        zones.remove_anywhere(card);
        zones.get_zone_mut(to).add(card);
        Ok(())
    }

    pub fn topdeck_card(&mut self, player: PlayerId, card: CardId) -> Result<()> {
        self.move_card(player, card, Zone::Deck)
    }

    /// Move a card to its owner's discard pile
    pub fn discard_card(&mut self, player: PlayerId, card: CardId) -> Result<()> {
        self.move_card(player, card, Zone::Discard)?;
        self.state.cards.get_mut(card)?.reset_play_state();
        Ok(())
    }

    /// Take the top card of the deck, reshuffling the discard pile if needed
    pub fn pop_deck(&mut self, player: PlayerId) -> Result<Option<CardId>> {
        let p = self.state.player_mut(player)?;
        if p.zones.deck.is_empty() && !p.zones.discard.is_empty() {
            let discard = p.zones.discard.take_all();
            p.zones.deck.cards.extend(discard);
            self.state.shuffle_deck(player);
            trace_if_verbose!(self.state, "{} shuffles", self.state.player_name(player));
        }
        Ok(self.state.player_mut(player)?.zones.deck.draw_top())
    }

    /// Draw up to `count` cards; returns how many were actually drawn
    pub fn draw_cards(&mut self, player: PlayerId, count: u32) -> Result<u32> {
        let mut drawn = 0;
        for _ in 0..count {
            let Some(card) = self.pop_deck(player)? else {
                break;
            };
            self.state.player_mut(player)?.zones.hand.add(card);
            trace_if_verbose!(
                self.state,
                "{} draws {}",
                self.state.player_name(player),
                self.state.card_name(card)
            );
            drawn += 1;
        }
        Ok(drawn)
    }

    /// Reveal the top card of the deck into the set-aside zone
    pub fn reveal_top(&mut self, player: PlayerId) -> Result<Option<CardId>> {
        let card = self.pop_deck(player)?;
        if let Some(card) = card {
            self.state.player_mut(player)?.zones.set_aside.add(card);
            trace_if_verbose!(
                self.state,
                "{} reveals {}",
                self.state.player_name(player),
                self.state.card_name(card)
            );
        }
        Ok(card)
    }

    fn holds(&self, player: PlayerId, card: CardId) -> bool {
        self.state
            .player(player)
            .is_ok_and(|p| p.zones.locate(card).is_some())
    }

    /// Gain a card from its supply pile
    ///
    /// Returns `None` without side effects when the pile is empty. Gaining
    /// "Ruins" takes a random Ruins kind.
    pub fn gain_from_supply(
        &mut self,
        player: PlayerId,
        name: &str,
        dest: GainDestination,
    ) -> Result<Option<CardId>> {
        let def = if name == "Ruins" {
            match registry::ruins_kinds().choose(&mut self.state.rng) {
                Some(def) => def,
                None => return Ok(None),
            }
        } else {
            registry::card_def(name)?
        };
        let pile = def.pile_name();
        if self.state.supply.count(pile) == 0 {
            return Ok(None);
        }
        self.state.supply.take(pile)?;
        let card = self.mint_card(def, player);
        self.gain_card(player, card, dest).map(Some)
    }

    /// The gain pipeline
    ///
    /// `card` is a freshly minted instance whose pile has already been
    /// decremented. Returns the id of the card the player actually ended up
    /// gaining, which differs from `card` after an Exile reclaim or a Trader
    /// exchange.
    pub fn gain_card(
        &mut self,
        player: PlayerId,
        card: CardId,
        dest: GainDestination,
    ) -> Result<CardId> {
        let mut card = card;
        let mut def = self.state.card_def(card)?;

        // Reclaim a copy from Exile instead; the new copy goes back to its pile
        if let Some(exiled) = self.state.find_in_zone(player, Zone::Exile, def.name) {
            self.state.supply.return_card(def.pile_name())?;
            self.state.cards.remove(card);
            self.move_card(player, exiled, dest.zone())?;
            let invested = &mut self.state.player_mut(player)?.invested;
            if let Some(pos) = invested.iter().position(|&name| name == def.name) {
                invested.remove(pos);
            }
            log_if_verbose!(
                self.state,
                "{} takes {} back from Exile",
                self.state.player_name(player),
                def.name
            );
            return Ok(exiled);
        }

        if def.name != "Silver"
            && self.state.supply.count("Silver") > 0
            && self.state.find_in_zone(player, Zone::Hand, "Trader").is_some()
            && self.ask_trader(player, card)?
        {
            self.state.supply.return_card(def.pile_name())?;
            self.state.cards.remove(card);
            self.state.supply.take("Silver")?;
            def = registry::card_def("Silver")?;
            card = self.mint_card(def, player);
            log_if_verbose!(
                self.state,
                "{} reveals Trader and gains a Silver instead",
                self.state.player_name(player)
            );
        }

        let mut dest = dest;
        let flags = &self.state.player(player)?.flags;
        if flags.topdeck_gains {
            dest = GainDestination::DeckTop;
        } else if dest == GainDestination::Discard
            && flags.insignias_played > 0
            && self.ask_topdeck_gain(player, card, TopdeckSource::Insignia)?
        {
            dest = GainDestination::DeckTop;
        }

        self.state.cards.get_mut(card)?.owner = player;
        self.state
            .player_mut(player)?
            .zones
            .get_zone_mut(dest.zone())
            .add(card);
        log_if_verbose!(
            self.state,
            "{} gains {}",
            self.state.player_name(player),
            def.name
        );
        if let Some(on_gain) = def.on_gain {
            on_gain(self, player, card)?;
        }

        self.after_gain(player, card, def)?;

        let is_buy_phase = self.state.active_player() == player && self.state.phase() == Phase::Buy;
        let flags = &mut self.state.player_mut(player)?.flags;
        flags.cards_gained += 1;
        if is_buy_phase {
            flags.cards_gained_in_buy_phase += 1;
            if def.is_victory() {
                flags.gained_victory_in_buy_phase = true;
            }
        }
        Ok(card)
    }

    /// Reactions and triggers that follow a gain, in their fixed order
    fn after_gain(&mut self, player: PlayerId, card: CardId, def: &'static CardDef) -> Result<()> {
        if let Some(pos) = self
            .state
            .trade_route_tokens
            .iter()
            .position(|&pile| pile == def.pile_name())
        {
            self.state.trade_route_tokens.remove(pos);
            self.state.trade_route_mat += 1;
        }

        if self.state.find_in_zone(player, Zone::Hand, "Watchtower").is_some()
            && self.holds(player, card)
        {
            match self.ask_watchtower(player, card)? {
                WatchtowerChoice::Trash => self.trash_card(player, card)?,
                WatchtowerChoice::Topdeck => self.topdeck_card(player, card)?,
                WatchtowerChoice::Ignore => {}
            }
        }

        if self.state.count_in_play(player, "Royal Seal") > 0
            && self.holds(player, card)
            && self.state.player(player)?.zones.deck.peek_top() != Some(card)
            && self.ask_topdeck_gain(player, card, TopdeckSource::RoyalSeal)?
        {
            self.topdeck_card(player, card)?;
        }

        let projects = self.state.player(player)?.projects.clone();
        for name in projects {
            if let Some(on_gain) = registry::landscape_def(name)?.on_gain {
                on_gain(self, player, card)?;
            }
        }

        if def.is_victory() {
            let groundskeepers = self.state.count_in_play(player, "Groundskeeper") as i32;
            self.state.player_mut(player)?.vp_tokens += groundskeepers;
        }

        for other in self.state.others(player) {
            let investments = self
                .state
                .player(other)?
                .invested
                .iter()
                .filter(|&&name| name == def.name)
                .count() as u32;
            if investments > 0 {
                self.draw_cards(other, 2 * investments)?;
            }
        }

        if def.name == "Province" {
            for other in self.state.others(player) {
                while let Some(fools_gold) = self.state.find_in_zone(other, Zone::Hand, "Fool's Gold") {
                    if !self.ask_confirm(other, Confirm::FoolsGoldTrade)? {
                        break;
                    }
                    self.trash_card(other, fools_gold)?;
                    self.gain_from_supply(other, "Gold", GainDestination::DeckTop)?;
                }
            }
        }

        if def.is_action() {
            let flags = &mut self.state.player_mut(player)?.flags;
            flags.actions_gained += 1;
            if flags.actions_gained == 3 && self.state.count_in_play(player, "Cauldron") > 0 {
                log_if_verbose!(self.state, "Cauldron triggers");
                self.attack_each_opponent(player, |game, target| {
                    game.give_curse_to_player(target, false).map(|_| ())
                })?;
            }
        }

        if self.state.player(player)?.flags.cargo_ship_uses > 0
            && self.holds(player, card)
            && self.ask_confirm(player, Confirm::CargoShip(card))?
        {
            let ship = self
                .state
                .cards_in_zone(player, Zone::InPlay, |d| d.name == "Cargo Ship")
                .into_iter()
                .find(|&id| self.state.card(id).is_ok_and(|c| c.duration_plays == 0));
            if let Some(ship) = ship {
                self.move_card(player, card, Zone::CargoShip)?;
                self.state.cards.get_mut(ship)?.duration_plays += 1;
                self.state.player_mut(player)?.flags.cargo_ship_uses -= 1;
            }
        }

        for other in self.state.others(player) {
            let projects = self.state.player(other)?.projects.clone();
            for name in projects {
                if let Some(hook) = registry::landscape_def(name)?.on_opponent_gain {
                    hook(self, other, player, card)?;
                }
            }
        }
        Ok(())
    }

    /// The trash pipeline
    ///
    /// Trashing a card that is already in the trash does nothing.
    pub fn trash_card(&mut self, player: PlayerId, card: CardId) -> Result<()> {
        if self.state.trash.contains(&card) {
            return Ok(());
        }
        let def = self.state.card_def(card)?;
        self.state.player_mut(player)?.zones.remove_anywhere(card);
        self.state.cards.get_mut(card)?.reset_play_state();
        self.state.trash.push(card);
        log_if_verbose!(
            self.state,
            "{} trashes {}",
            self.state.player_name(player),
            def.name
        );

        if let Some(on_trash) = def.on_trash {
            on_trash(self, player, card)?;
        }
        let projects = self.state.player(player)?.projects.clone();
        for name in projects {
            if let Some(on_trash) = registry::landscape_def(name)?.on_trash {
                on_trash(self, player, card)?;
            }
        }
        Ok(())
    }

    /// The attack pipeline
    ///
    /// Offers Guard Dog, then checks Shield (always blocks) and Moat (asks).
    /// Returns whether the attack went through.
    pub fn attack_player<F>(&mut self, attacker: PlayerId, target: PlayerId, attack: F) -> Result<bool>
    where
        F: FnOnce(&mut Game, PlayerId) -> Result<()>,
    {
        while let Some(dog) = self.state.find_in_zone(target, Zone::Hand, "Guard Dog") {
            if !self.ask_guard_dog(target, attacker)? {
                break;
            }
            log_if_verbose!(
                self.state,
                "{} plays Guard Dog in response",
                self.state.player_name(target)
            );
            self.move_card(target, dog, Zone::InPlay)?;
            self.play_card(target, dog)?;
        }

        if self.state.find_in_zone(target, Zone::Hand, "Shield").is_some() {
            log_if_verbose!(
                self.state,
                "{} reveals Shield and is unaffected",
                self.state.player_name(target)
            );
            return Ok(false);
        }
        if self.state.find_in_zone(target, Zone::Hand, "Moat").is_some()
            && self.ask_moat(target, attacker)?
        {
            log_if_verbose!(
                self.state,
                "{} reveals Moat and is unaffected",
                self.state.player_name(target)
            );
            return Ok(false);
        }

        attack(self, target)?;
        Ok(true)
    }

    pub fn give_curse_to_player(&mut self, player: PlayerId, to_hand: bool) -> Result<Option<CardId>> {
        let dest = if to_hand {
            GainDestination::Hand
        } else {
            GainDestination::Discard
        };
        self.gain_from_supply(player, "Curse", dest)
    }

    /// Coins a Treasure produces right now
    fn treasure_value(&mut self, player: PlayerId, def: &CardDef) -> Result<u32> {
        let p = self.state.player_mut(player)?;
        let mut value = def.stats.coins;
        if p.envious && matches!(def.name, "Silver" | "Gold") {
            value = 1;
        }
        if def.name == "Silver" && !p.flags.silver_played {
            p.flags.silver_played = true;
            value += p.flags.merchants_played;
        }
        Ok(value)
    }

    /// Resolve a card that is already in play
    ///
    /// Baseline stats first, then draws, then the card's own effect.
    pub fn play_card(&mut self, player: PlayerId, card: CardId) -> Result<()> {
        let def = self.state.card_def(card)?;
        let coins = if def.is_treasure() {
            self.treasure_value(player, def)?
        } else {
            def.stats.coins
        };
        let p = self.state.player_mut(player)?;
        p.actions += def.stats.actions;
        p.buys += def.stats.buys;
        p.coins += coins;
        if def.stats.cards > 0 {
            self.draw_cards(player, def.stats.cards)?;
        }
        if let Some(effect) = def.play_effect {
            effect(self, player, card)?;
        }
        Ok(())
    }

    /// Play an Action from the action phase, honouring pending Flagships
    pub fn play_action(&mut self, player: PlayerId, card: CardId) -> Result<()> {
        self.play_card(player, card)?;
        if self.state.card_def(card)?.is_type(CardType::Command) {
            return Ok(());
        }
        let flagships = std::mem::take(&mut self.state.player_mut(player)?.pending_flagships);
        for flagship in flagships {
            log_if_verbose!(
                self.state,
                "Flagship replays {}",
                self.state.card_name(card)
            );
            self.play_card(player, card)?;
            if self.state.player(player)?.zones.duration.contains(flagship) {
                self.move_card(player, flagship, Zone::InPlay)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::zero_controller::ZeroController;

    fn new_game(players: usize, kingdom: &[&str]) -> Game {
        let controllers: Vec<Box<dyn PlayerController>> = (0..players)
            .map(|_| Box::new(ZeroController::new()) as Box<dyn PlayerController>)
            .collect();
        Game::new(controllers, &Board::with_kingdom(kingdom), &GameOptions::default().with_seed(7)).unwrap()
    }

    #[test]
    fn test_setup_counts() {
        let game = new_game(2, &["Smithy", "Gardens"]);
        let supply = &game.state.supply;
        assert_eq!(supply.count("Copper"), 46);
        assert_eq!(supply.count("Province"), 8);
        assert_eq!(supply.count("Curse"), 10);
        assert_eq!(supply.count("Gardens"), 8);
        assert_eq!(supply.count("Smithy"), 10);
        assert!(!supply.contains("Potion"));

        let p1 = game.state.player(PlayerId::new(0)).unwrap();
        assert_eq!(p1.zones.hand.len(), 5);
        assert_eq!(p1.zones.deck.len(), 5);
    }

    #[test]
    fn test_province_pile_by_player_count() {
        assert_eq!(new_game(4, &["Village"]).state.supply.count("Province"), 12);
        assert_eq!(new_game(5, &["Village"]).state.supply.count("Province"), 15);
        assert_eq!(new_game(6, &["Village"]).state.supply.count("Province"), 18);
    }

    #[test]
    fn test_rejects_bad_setup() {
        let one: Vec<Box<dyn PlayerController>> = vec![Box::new(ZeroController::new())];
        assert!(Game::new(one, &Board::with_kingdom(&["Village"]), &GameOptions::default()).is_err());

        let two = || -> Vec<Box<dyn PlayerController>> {
            vec![Box::new(ZeroController::new()), Box::new(ZeroController::new())]
        };
        assert!(matches!(
            Game::new(two(), &Board::with_kingdom::<&str>(&[]), &GameOptions::default()),
            Err(DominionError::InvalidBoard(_))
        ));
        assert!(matches!(
            Game::new(two(), &Board::with_kingdom(&["Not A Card"]), &GameOptions::default()),
            Err(DominionError::UnknownCard(_))
        ));
    }

    #[test]
    fn test_extra_piles() {
        let game = new_game(3, &["Marauder", "Familiar", "Trade Route"]);
        let supply = &game.state.supply;
        assert_eq!(supply.count("Ruins"), 20);
        assert_eq!(supply.count("Spoils"), 15);
        assert_eq!(supply.count("Potion"), 16);
        assert!(game.state.trade_route_tokens.contains(&"Province"));
        assert!(game.state.trade_route_tokens.contains(&"Estate"));
    }

    #[test]
    fn test_draw_reshuffles_discard() {
        let mut game = new_game(2, &["Village"]);
        let p1 = PlayerId::new(0);
        let hand = game.state.player(p1).unwrap().hand().to_vec();
        for card in hand {
            game.discard_card(p1, card).unwrap();
        }
        assert_eq!(game.draw_cards(p1, 10).unwrap(), 10);
        assert_eq!(game.draw_cards(p1, 1).unwrap(), 0);
        assert_eq!(game.state.player(p1).unwrap().zones.hand.len(), 10);
    }

    #[test]
    fn test_gain_and_trash_conserve_cards() {
        let mut game = new_game(2, &["Village"]);
        let total = game.state.total_cards();
        let p1 = PlayerId::new(0);

        let silver = game
            .gain_from_supply(p1, "Silver", GainDestination::Discard)
            .unwrap()
            .unwrap();
        assert_eq!(game.state.total_cards(), total);
        assert!(game.state.player(p1).unwrap().zones.discard.contains(silver));

        game.trash_card(p1, silver).unwrap();
        game.trash_card(p1, silver).unwrap();
        assert_eq!(game.state.trash.len(), 1);
        assert_eq!(game.state.total_cards(), total);
    }

    #[test]
    fn test_gain_from_empty_pile() {
        let mut game = new_game(2, &["Village"]);
        game.state.supply.set_count("Gold", 0).unwrap();
        let gained = game
            .gain_from_supply(PlayerId::new(0), "Gold", GainDestination::Discard)
            .unwrap();
        assert!(gained.is_none());
    }
}
