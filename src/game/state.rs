//! Main game state structure

use crate::cards::{CardDef, Hex, LandscapeDef, LandscapeKind};
use crate::core::{Card, CardId, CardType, Cost, EntityStore, PlayerId, PlayerState};
use crate::game::{GameLogger, GameMetrics, Phase, Supply, TurnStructure};
use crate::zones::Zone;
use crate::{DominionError, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use smallvec::SmallVec;

/// Default hard cap on rounds before the game is declared over
pub const DEFAULT_MAX_TURNS: u32 = 100;

/// Complete game state
///
/// Pure data: every rule that mutates it lives on [`crate::game::Game`],
/// which pairs this state with the player controllers.
#[derive(Debug, Clone)]
pub struct GameState {
    /// All card instances currently in the game (supply piles are counts, not instances)
    pub cards: EntityStore<Card>,

    /// All players, in turn order
    pub players: Vec<PlayerState>,

    pub supply: Supply,

    /// Shared trash (append-only)
    pub trash: Vec<CardId>,

    pub turn: TurnStructure,

    /// Kingdom card names as set up
    pub kingdom: Vec<&'static str>,

    /// Events, Projects, Ways, Landmarks and Allies in play this game
    pub landscapes: Vec<&'static LandscapeDef>,

    pub hex_deck: Vec<Hex>,
    pub hex_discard: Vec<Hex>,

    /// Victory piles still holding a Trade Route token
    pub trade_route_tokens: Vec<&'static str>,
    pub trade_route_mat: u32,

    /// Random number generator for shuffles and random selections
    pub rng: ChaCha12Rng,

    /// Rounds after which the game is over regardless of piles
    pub max_turns: u32,

    /// Final metrics, captured once when the game first ends
    pub metrics: Option<GameMetrics>,

    /// Centralized logger for game events
    pub logger: GameLogger,
}

impl GameState {
    /// Create an empty game with the given player names
    pub fn new(player_names: &[String]) -> Self {
        let players = player_names
            .iter()
            .enumerate()
            .map(|(idx, name)| PlayerState::new(PlayerId::new(idx), name.as_str()))
            .collect();

        GameState {
            cards: EntityStore::new(),
            players,
            supply: Supply::new(),
            trash: Vec::new(),
            turn: TurnStructure::new(PlayerId::new(0)),
            kingdom: Vec::new(),
            landscapes: Vec::new(),
            hex_deck: Vec::new(),
            hex_discard: Vec::new(),
            trade_route_tokens: Vec::new(),
            trade_route_mat: 0,
            rng: ChaCha12Rng::seed_from_u64(0),
            max_turns: DEFAULT_MAX_TURNS,
            metrics: None,
            logger: GameLogger::new(),
        }
    }

    /// Set the RNG seed for deterministic gameplay
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = ChaCha12Rng::seed_from_u64(seed);
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.players.len()).map(PlayerId::new)
    }

    /// The other players in turn order, starting left of `player`
    pub fn others(&self, player: PlayerId) -> SmallVec<[PlayerId; 6]> {
        let n = self.players.len();
        (1..n)
            .map(|offset| PlayerId::new((player.index() + offset) % n))
            .collect()
    }

    /// Every player in turn order, starting with `player`
    pub fn everyone_from(&self, player: PlayerId) -> SmallVec<[PlayerId; 6]> {
        let mut players = SmallVec::new();
        players.push(player);
        players.extend(self.others(player));
        players
    }

    pub fn active_player(&self) -> PlayerId {
        self.turn.active_player
    }

    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    pub fn player(&self, id: PlayerId) -> Result<&PlayerState> {
        self.players
            .get(id.index())
            .ok_or_else(|| DominionError::InvalidAction(format!("no player {id}")))
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut PlayerState> {
        self.players
            .get_mut(id.index())
            .ok_or_else(|| DominionError::InvalidAction(format!("no player {id}")))
    }

    pub fn card(&self, id: CardId) -> Result<&Card> {
        self.cards.get(id)
    }

    pub fn card_def(&self, id: CardId) -> Result<&'static CardDef> {
        Ok(self.cards.get(id)?.def)
    }

    /// Card name, or "?" for ids that no longer exist (used in log lines)
    pub fn card_name(&self, id: CardId) -> &'static str {
        self.cards.get(id).map(|c| c.def.name).unwrap_or("?")
    }

    pub fn player_name(&self, id: PlayerId) -> &str {
        self.players
            .get(id.index())
            .map(|p| p.name.as_str())
            .unwrap_or("?")
    }

    /// Cards of one zone that satisfy `filter`, in zone order
    pub fn cards_in_zone(
        &self,
        player: PlayerId,
        zone: Zone,
        filter: impl Fn(&CardDef) -> bool,
    ) -> Vec<CardId> {
        self.players
            .get(player.index())
            .map(|p| {
                p.zones
                    .get_zone(zone)
                    .cards
                    .iter()
                    .copied()
                    .filter(|&id| self.cards.get(id).is_ok_and(|c| filter(c.def)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First card named `name` in a zone
    pub fn find_in_zone(&self, player: PlayerId, zone: Zone, name: &str) -> Option<CardId> {
        let p = self.players.get(player.index())?;
        p.zones
            .get_zone(zone)
            .cards
            .iter()
            .copied()
            .find(|&id| self.card_name(id) == name)
    }

    pub fn count_in_zone(&self, player: PlayerId, zone: Zone, name: &str) -> usize {
        self.players.get(player.index()).map_or(0, |p| {
            p.zones
                .get_zone(zone)
                .cards
                .iter()
                .filter(|&&id| self.card_name(id) == name)
                .count()
        })
    }

    pub fn count_in_play(&self, player: PlayerId, name: &str) -> usize {
        self.count_in_zone(player, Zone::InPlay, name)
    }

    /// Definitions of every card the player owns, across all zones
    pub fn owned_defs(&self, player: PlayerId) -> Vec<&'static CardDef> {
        self.players
            .get(player.index())
            .map(|p| {
                p.zones
                    .all_cards()
                    .filter_map(|id| self.cards.get(id).ok().map(|c| c.def))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Cost of a card for a player, after every active modifier
    ///
    /// Bridge-style reductions and Quarry only affect the player who played
    /// them. Potion and debt components are never reduced.
    pub fn get_card_cost(&self, player: PlayerId, def: &CardDef) -> Cost {
        let Some(p) = self.players.get(player.index()) else {
            return def.cost;
        };
        let mut reduction = p.flags.cost_reduction;
        if def.is_action() {
            reduction += 2 * self.count_in_play(player, "Quarry") as u32;
        }
        Cost {
            coins: def.cost.coins.saturating_sub(reduction),
            ..def.cost
        }
    }

    pub fn landscapes_of(&self, kind: LandscapeKind) -> impl Iterator<Item = &'static LandscapeDef> + '_ {
        self.landscapes.iter().copied().filter(move |l| l.kind == kind)
    }

    pub fn has_landscape(&self, name: &str) -> bool {
        self.landscapes.iter().any(|l| l.name == name)
    }

    /// Current victory point total for a player
    pub fn victory_points(&self, player: PlayerId) -> i32 {
        let Some(p) = self.players.get(player.index()) else {
            return 0;
        };
        let cards: i32 = self
            .owned_defs(player)
            .iter()
            .map(|def| def.stats.vp + def.victory_points.map_or(0, |score| score(self, player)))
            .sum();
        let landmarks: i32 = self
            .landscapes_of(LandscapeKind::Landmark)
            .filter_map(|l| l.score)
            .map(|score| score(self, player))
            .sum();
        cards + p.vp_tokens - 2 * i32::from(p.misery) + landmarks
    }

    /// Every card accounted for: supply counts, trash and all player zones
    pub fn total_cards(&self) -> usize {
        self.supply.total_cards() as usize
            + self.trash.len()
            + self
                .players
                .iter()
                .map(|p| p.zones.total_cards())
                .sum::<usize>()
    }

    /// Shuffle a player's deck using the game's RNG
    pub fn shuffle_deck(&mut self, player: PlayerId) {
        if let Some(p) = self.players.get_mut(player.index()) {
            p.zones.deck.shuffle(&mut self.rng);
        }
    }

    /// Number of owned cards carrying the given type tag
    pub fn count_owned_type(&self, player: PlayerId, card_type: CardType) -> usize {
        self.owned_defs(player)
            .iter()
            .filter(|def| def.is_type(card_type))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Player {i}")).collect()
    }

    #[test]
    fn test_others_in_turn_order() {
        let state = GameState::new(&names(4));
        assert_eq!(
            state.others(PlayerId::new(2)).as_slice(),
            &[PlayerId::new(3), PlayerId::new(0), PlayerId::new(1)]
        );
        assert_eq!(
            state.everyone_from(PlayerId::new(3)).as_slice(),
            &[PlayerId::new(3), PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]
        );
    }

    #[test]
    fn test_player_lookup() {
        let state = GameState::new(&names(2));
        assert_eq!(state.player(PlayerId::new(1)).unwrap().name.as_str(), "Player 2");
        assert!(state.player(PlayerId::new(5)).is_err());
        assert_eq!(state.total_cards(), 0);
    }
}
