//! Player representation

use crate::core::{CardId, PlayerId, PlayerName};
use crate::zones::PlayerZones;
use serde::{Deserialize, Serialize};

/// Once-per-turn conditions and counters
///
/// Reset wholesale at the start of the owner's turn and again at the end of
/// cleanup, so gains made during other players' turns never leak into the
/// owner's next turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnFlags {
    pub actions_played: u32,
    pub treasures_played: u32,
    pub cards_gained: u32,
    /// Gains during the owner's own buy phase, readable by controllers through the view
    pub cards_gained_in_buy_phase: u32,
    pub gained_victory_in_buy_phase: bool,
    /// Action cards gained this turn (Cauldron fires on the third)
    pub actions_gained: u32,
    pub merchants_played: u32,
    pub silver_played: bool,
    pub fools_gold_played: u32,
    pub schemes_played: u32,
    /// Walled Villages put back on the deck at the start of this cleanup
    pub walled_villages_topdecked: u32,
    pub trickster_uses: u32,
    pub cargo_ship_uses: u32,
    pub insignias_played: u32,
    /// Coins Bridge style effects knock off every cost this turn
    pub cost_reduction: u32,
    /// Way of the Seal: gains go on top of the deck
    pub topdeck_gains: bool,
    pub sewers_resolving: bool,
}

/// Represents a player in the game
#[derive(Debug, Clone, Serialize)]
pub struct PlayerState {
    /// Seat in turn order
    pub id: PlayerId,

    /// Player name
    pub name: PlayerName,

    /// All of this player's card zones
    pub zones: PlayerZones,

    pub actions: u32,
    pub buys: u32,
    pub coins: u32,
    pub potions: u32,
    pub debt: u32,
    pub coffers: u32,
    pub vp_tokens: i32,
    pub villagers: u32,

    /// Turns this player has started (extra turns included)
    pub turns_taken: u32,

    pub flags: TurnFlags,

    // Persistent state, never reset by the turn cycle
    pub seize_the_day_used: bool,
    pub extra_turn: bool,
    /// Flagships waiting for the next non-Command Action
    pub pending_flagships: Vec<CardId>,
    /// Card names this player has Invested in
    pub invested: Vec<&'static str>,
    /// Owned Projects, in purchase order
    pub projects: Vec<&'static str>,
    /// Opponents' Highwaymen currently affecting this player
    pub highwaymen: u32,
    pub envious: bool,
    pub deluded: bool,
    /// 0 = none, 1 = Miserable, 2 = Twice Miserable
    pub misery: u8,
}

impl PlayerState {
    pub fn new(id: PlayerId, name: impl Into<PlayerName>) -> Self {
        PlayerState {
            id,
            name: name.into(),
            zones: PlayerZones::new(id),
            actions: 1,
            buys: 1,
            coins: 0,
            potions: 0,
            debt: 0,
            coffers: 0,
            vp_tokens: 0,
            villagers: 0,
            turns_taken: 0,
            flags: TurnFlags::default(),
            seize_the_day_used: false,
            extra_turn: false,
            pending_flagships: Vec::new(),
            invested: Vec::new(),
            projects: Vec::new(),
            highwaymen: 0,
            envious: false,
            deluded: false,
            misery: 0,
        }
    }

    /// Restore the canonical per-turn resources (1 action, 1 buy, nothing else)
    pub fn reset_turn_resources(&mut self) {
        self.actions = 1;
        self.buys = 1;
        self.coins = 0;
        self.potions = 0;
    }

    pub fn owns_project(&self, name: &str) -> bool {
        self.projects.iter().any(|p| *p == name)
    }

    pub fn hand(&self) -> &[CardId] {
        &self.zones.hand.cards
    }

    pub fn in_play(&self) -> &[CardId] {
        &self.zones.in_play.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let id = PlayerId::new(0);
        let player = PlayerState::new(id, "Alice");

        assert_eq!(player.id, id);
        assert_eq!(player.name.as_str(), "Alice");
        assert_eq!(player.actions, 1);
        assert_eq!(player.buys, 1);
        assert_eq!(player.zones.total_cards(), 0);
    }

    #[test]
    fn test_reset_turn_resources() {
        let mut player = PlayerState::new(PlayerId::new(1), "Bob");
        player.actions = 0;
        player.buys = 3;
        player.coins = 7;
        player.potions = 1;
        player.coffers = 2;

        player.reset_turn_resources();
        assert_eq!(
            (player.actions, player.buys, player.coins, player.potions),
            (1, 1, 0, 0)
        );
        // Coffers persist across turns
        assert_eq!(player.coffers, 2);
    }

    #[test]
    fn test_turn_flags_default() {
        let mut player = PlayerState::new(PlayerId::new(0), "Carol");
        player.flags.actions_played = 4;
        player.flags.topdeck_gains = true;
        player.flags = TurnFlags::default();
        assert_eq!(player.flags.actions_played, 0);
        assert!(!player.flags.topdeck_gains);
    }
}
