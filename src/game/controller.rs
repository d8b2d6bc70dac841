//! Player controller trait and game state view
//!
//! This module defines the interface between the game engine and player
//! controllers (AI strategies). The engine calls the controller whenever a
//! decision is needed, and the controller inspects a read-only view of the
//! game state to make its choice.
//!
//! Only `choose_action`, `choose_treasure` and `choose_buy` are required.
//! The long tail of card-specific decisions has default answers so a simple
//! strategy never has to know about every card. Whatever a controller
//! returns is validated by the engine (see `choice_guard`).

use crate::cards::CardDef;
use crate::core::{CardId, Cost, PlayerId};
use crate::game::{GameState, Phase};
use crate::zones::Zone;

/// One purchasable option in the buy phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuyChoice {
    Card(&'static str),
    Event(&'static str),
    Project(&'static str),
}

impl BuyChoice {
    pub fn name(&self) -> &'static str {
        match self {
            BuyChoice::Card(name) | BuyChoice::Event(name) | BuyChoice::Project(name) => name,
        }
    }
}

/// Context for a single-card pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    /// Name of the card or effect asking
    pub source: &'static str,
    /// Whether declining (returning None) is legal
    pub optional: bool,
}

impl Prompt {
    pub fn required(source: &'static str) -> Self {
        Prompt {
            source,
            optional: false,
        }
    }

    pub fn optional(source: &'static str) -> Self {
        Prompt {
            source,
            optional: true,
        }
    }
}

/// What to do with a revealed top card (Sentry, Duchess)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopCardFate {
    Keep,
    Discard,
    Trash,
}

/// Watchtower response to a gain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchtowerChoice {
    Trash,
    Topdeck,
    Ignore,
}

/// Why a gain may be put on the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopdeckSource {
    RoyalSeal,
    Insignia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GovernorOption {
    /// Each player +1 Card, you +3
    Cards,
    /// Each player gains a Silver, you a Gold
    Treasure,
    /// Each player may trash a card and gain one costing exactly $1 more, you $2
    Remodel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StewardOption {
    Cards,
    Coins,
    Trash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorturerOption {
    Discard,
    TakeCurse,
}

/// Yes/no questions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    /// Gain a Duchess after gaining a Duchy
    GainDuchess,
    /// Trash Fool's Gold to gain a Gold onto your deck
    FoolsGoldTrade,
    /// Set a just-gained card aside on Cargo Ship
    CargoShip(CardId),
    /// Put Walled Village onto your deck at cleanup
    WalledVillage,
    /// Trash Hovel after buying a Victory card
    TrashHovel,
    /// Play the action Vassal discarded
    PlayDiscarded(CardId),
    /// Trash a Copper for Moneylender
    TrashCopper,
    /// Trash Engineer for a second gain
    TrashEngineer,
    /// Set aside an Action drawn by Library
    SkipLibraryAction(CardId),
    /// Put a card from the discard pile into hand (Settlers, Bustling Village)
    TakeFromDiscard(&'static str),
    /// Discard the revealed cards instead of putting them back (Survivors)
    DiscardRevealed,
}

/// Read-only view of game state for controllers
pub struct GameStateView<'a> {
    game: &'a GameState,
    player_id: PlayerId,
}

impl<'a> GameStateView<'a> {
    /// Create a new view of the game state from a player's perspective
    pub fn new(game: &'a GameState, player_id: PlayerId) -> Self {
        GameStateView { game, player_id }
    }

    /// Get the player ID this view is for
    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    /// Full state access for strategies that need more than the helpers
    pub fn state(&self) -> &'a GameState {
        self.game
    }

    pub fn turn_number(&self) -> u32 {
        self.game.turn.turn_number
    }

    pub fn phase(&self) -> Phase {
        self.game.turn.phase
    }

    pub fn num_players(&self) -> usize {
        self.game.num_players()
    }

    /// Get cards in this player's hand
    pub fn hand(&self) -> &'a [CardId] {
        self.game
            .players
            .get(self.player_id.index())
            .map(|p| p.zones.hand.cards.as_slice())
            .unwrap_or(&[])
    }

    pub fn in_play(&self) -> &'a [CardId] {
        self.game
            .players
            .get(self.player_id.index())
            .map(|p| p.zones.in_play.cards.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_card_in_zone(&self, card_id: CardId, zone: Zone) -> bool {
        self.game
            .players
            .get(self.player_id.index())
            .is_some_and(|p| p.zones.get_zone(zone).contains(card_id))
    }

    /// Get a card's name
    pub fn card_name(&self, card_id: CardId) -> Option<&'static str> {
        self.game.cards.get(card_id).ok().map(|c| c.def.name)
    }

    pub fn card_def(&self, card_id: CardId) -> Option<&'static CardDef> {
        self.game.cards.get(card_id).ok().map(|c| c.def)
    }

    /// Cost of a card for this player, after modifiers
    pub fn card_cost(&self, card_id: CardId) -> Cost {
        self.card_def(card_id)
            .map(|def| self.game.get_card_cost(self.player_id, def))
            .unwrap_or_default()
    }

    /// Cost of a supply card by name, after modifiers
    pub fn cost_of(&self, name: &str) -> Option<Cost> {
        crate::cards::registry::card_def(name)
            .ok()
            .map(|def| self.game.get_card_cost(self.player_id, def))
    }

    pub fn supply_count(&self, name: &str) -> u32 {
        self.game.supply.count(name)
    }

    pub fn coins(&self) -> u32 {
        self.player().map_or(0, |p| p.coins)
    }

    pub fn actions(&self) -> u32 {
        self.player().map_or(0, |p| p.actions)
    }

    pub fn buys(&self) -> u32 {
        self.player().map_or(0, |p| p.buys)
    }

    pub fn coffers(&self) -> u32 {
        self.player().map_or(0, |p| p.coffers)
    }

    /// Copies of `name` this player owns across all zones
    pub fn count_owned(&self, name: &str) -> usize {
        self.game
            .owned_defs(self.player_id)
            .iter()
            .filter(|def| def.name == name)
            .count()
    }

    pub fn total_owned(&self) -> usize {
        self.player().map_or(0, |p| p.zones.total_cards())
    }

    pub fn victory_points(&self, player: PlayerId) -> i32 {
        self.game.victory_points(player)
    }

    fn player(&self) -> Option<&'a crate::core::PlayerState> {
        self.game.players.get(self.player_id.index())
    }
}

fn default_pick<T: Copy>(options: &[T], prompt: &Prompt) -> Option<T> {
    if prompt.optional {
        None
    } else {
        options.first().copied()
    }
}

/// Player controller trait
///
/// Implement this trait to create AI players. The game engine will call
/// these methods when decisions need to be made.
pub trait PlayerController {
    /// Display name used in logs and reports
    fn name(&self) -> &str;

    /// Choose an Action card to play, or None to end the action phase
    fn choose_action(&mut self, view: &GameStateView, actions: &[CardId]) -> Option<CardId>;

    /// Choose a Treasure to play, or None to end the treasure phase
    fn choose_treasure(&mut self, view: &GameStateView, treasures: &[CardId]) -> Option<CardId>;

    /// Choose something to buy, or None to end the buy phase
    fn choose_buy(&mut self, view: &GameStateView, options: &[BuyChoice]) -> Option<BuyChoice>;

    fn choose_card_to_trash(
        &mut self,
        _view: &GameStateView,
        options: &[CardId],
        prompt: &Prompt,
    ) -> Option<CardId> {
        default_pick(options, prompt)
    }

    fn choose_card_to_discard(
        &mut self,
        _view: &GameStateView,
        options: &[CardId],
        prompt: &Prompt,
    ) -> Option<CardId> {
        default_pick(options, prompt)
    }

    fn choose_card_to_topdeck(
        &mut self,
        _view: &GameStateView,
        options: &[CardId],
        prompt: &Prompt,
    ) -> Option<CardId> {
        default_pick(options, prompt)
    }

    /// Pick a card for Throne Room style effects
    fn choose_card_to_play(
        &mut self,
        _view: &GameStateView,
        options: &[CardId],
        _prompt: &Prompt,
    ) -> Option<CardId> {
        options.first().copied()
    }

    /// Pick a supply card to gain; options are ordered most expensive first
    fn choose_card_to_gain(
        &mut self,
        _view: &GameStateView,
        options: &[&'static str],
        _prompt: &Prompt,
    ) -> Option<&'static str> {
        options.first().copied()
    }

    fn choose_top_card_fate(
        &mut self,
        _view: &GameStateView,
        _card: CardId,
        allowed: &[TopCardFate],
    ) -> TopCardFate {
        allowed.first().copied().unwrap_or(TopCardFate::Keep)
    }

    fn confirm(&mut self, _view: &GameStateView, _question: Confirm) -> bool {
        true
    }

    fn choose_watchtower_reaction(
        &mut self,
        view: &GameStateView,
        card: CardId,
    ) -> WatchtowerChoice {
        match view.card_name(card) {
            Some("Curse") | Some("Copper") => WatchtowerChoice::Trash,
            _ => WatchtowerChoice::Ignore,
        }
    }

    fn should_reveal_moat(&mut self, _view: &GameStateView, _attacker: PlayerId) -> bool {
        true
    }

    fn should_play_guard_dog(&mut self, _view: &GameStateView, _attacker: PlayerId) -> bool {
        true
    }

    /// Exchange a card being gained for a Silver
    fn should_reveal_trader(&mut self, view: &GameStateView, card: CardId) -> bool {
        matches!(view.card_name(card), Some("Curse"))
    }

    fn should_topdeck_gain(
        &mut self,
        _view: &GameStateView,
        _card: CardId,
        _source: TopdeckSource,
    ) -> bool {
        false
    }

    fn choose_governor_option(&mut self, _view: &GameStateView) -> GovernorOption {
        GovernorOption::Cards
    }

    fn choose_steward_option(&mut self, _view: &GameStateView) -> StewardOption {
        StewardOption::Cards
    }

    fn choose_torturer_option(&mut self, _view: &GameStateView) -> TorturerOption {
        TorturerOption::Discard
    }

    /// Play an Action using a Way instead of its own effect
    fn choose_way(
        &mut self,
        _view: &GameStateView,
        _card: CardId,
        _ways: &[&'static str],
    ) -> Option<&'static str> {
        None
    }

    /// Set aside a Treasure from play with Trickster (None to stop)
    fn choose_trickster_set_aside(
        &mut self,
        _view: &GameStateView,
        _treasures: &[CardId],
    ) -> Option<CardId> {
        None
    }

    /// Coffers to cash in at the start of the buy phase
    fn coffers_to_spend(&mut self, _view: &GameStateView, _available: u32) -> u32 {
        0
    }

    /// Spend a Villager for +1 Action when out of actions
    fn should_use_villager(&mut self, _view: &GameStateView) -> bool {
        true
    }

    /// Called when the game ends (for cleanup/logging)
    fn on_game_end(&mut self, _view: &GameStateView, _won: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pick_respects_optional() {
        let options = [CardId::new(3), CardId::new(4)];
        assert_eq!(default_pick(&options, &Prompt::required("Chapel")), Some(CardId::new(3)));
        assert_eq!(default_pick(&options, &Prompt::optional("Chapel")), None);
        assert_eq!(default_pick::<CardId>(&[], &Prompt::required("Chapel")), None);
    }

    #[test]
    fn test_buy_choice_name() {
        assert_eq!(BuyChoice::Card("Gold").name(), "Gold");
        assert_eq!(BuyChoice::Event("Delay").name(), "Delay");
        assert_eq!(BuyChoice::Project("Fair").name(), "Fair");
    }
}
