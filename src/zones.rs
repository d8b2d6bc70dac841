//! Player zones (Deck, Hand, Discard, In Play, Duration, Exile, etc.)

use crate::core::{CardId, PlayerId};
use serde::{Deserialize, Serialize};

/// Different zones where a player's cards can exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand,
    Discard,
    InPlay,
    /// Duration cards waiting for the start of their owner's next turn
    Duration,
    /// Throne Room style cards that played a Duration card
    MultipliedDurations,
    Exile,
    /// Cards revealed or set aside while an effect resolves
    SetAside,
    /// Cards set aside by the Delay event
    Delayed,
    /// Cards set aside on Cargo Ship
    CargoShip,
}

impl Zone {
    /// All zones, in the order they are searched when locating a card
    pub const ALL: [Zone; 10] = [
        Zone::Hand,
        Zone::InPlay,
        Zone::Deck,
        Zone::Discard,
        Zone::Duration,
        Zone::MultipliedDurations,
        Zone::SetAside,
        Zone::Exile,
        Zone::Delayed,
        Zone::CargoShip,
    ];
}

/// An ordered zone of cards
///
/// For the deck, the END of the vector is the top.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardZone {
    /// Zone type
    pub zone_type: Zone,

    /// Owner of this zone (each player has their own zones)
    pub owner: PlayerId,

    /// Cards in this zone
    pub cards: Vec<CardId>,
}

impl CardZone {
    pub fn new(zone_type: Zone, owner: PlayerId) -> Self {
        CardZone {
            zone_type,
            owner,
            cards: Vec::new(),
        }
    }

    pub fn add(&mut self, card_id: CardId) {
        self.cards.push(card_id);
    }

    pub fn remove(&mut self, card_id: CardId) -> bool {
        if let Some(pos) = self.cards.iter().position(|&id| id == card_id) {
            // remove() rather than swap_remove(): controllers iterate over
            // zones in order, so order must stay stable for determinism
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, card_id: CardId) -> bool {
        self.cards.contains(&card_id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw from top (for Deck)
    pub fn draw_top(&mut self) -> Option<CardId> {
        self.cards.pop()
    }

    /// Look at top card without removing it
    pub fn peek_top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Add to bottom (for Deck)
    pub fn add_to_bottom(&mut self, card_id: CardId) {
        self.cards.insert(0, card_id);
    }

    /// Shuffle the zone (for Deck)
    pub fn shuffle(&mut self, rng: &mut impl rand::Rng) {
        use rand::seq::SliceRandom;
        self.cards.shuffle(rng);
    }

    /// Remove and return every card
    pub fn take_all(&mut self) -> Vec<CardId> {
        std::mem::take(&mut self.cards)
    }

    /// Clear all cards
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// Collection of all zones for a player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerZones {
    pub deck: CardZone,
    pub hand: CardZone,
    pub discard: CardZone,
    pub in_play: CardZone,
    pub duration: CardZone,
    pub multiplied_durations: CardZone,
    pub exile: CardZone,
    pub set_aside: CardZone,
    pub delayed: CardZone,
    pub cargo_ship: CardZone,
}

impl PlayerZones {
    pub fn new(player_id: PlayerId) -> Self {
        PlayerZones {
            deck: CardZone::new(Zone::Deck, player_id),
            hand: CardZone::new(Zone::Hand, player_id),
            discard: CardZone::new(Zone::Discard, player_id),
            in_play: CardZone::new(Zone::InPlay, player_id),
            duration: CardZone::new(Zone::Duration, player_id),
            multiplied_durations: CardZone::new(Zone::MultipliedDurations, player_id),
            exile: CardZone::new(Zone::Exile, player_id),
            set_aside: CardZone::new(Zone::SetAside, player_id),
            delayed: CardZone::new(Zone::Delayed, player_id),
            cargo_ship: CardZone::new(Zone::CargoShip, player_id),
        }
    }

    pub fn get_zone(&self, zone: Zone) -> &CardZone {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
            Zone::Discard => &self.discard,
            Zone::InPlay => &self.in_play,
            Zone::Duration => &self.duration,
            Zone::MultipliedDurations => &self.multiplied_durations,
            Zone::Exile => &self.exile,
            Zone::SetAside => &self.set_aside,
            Zone::Delayed => &self.delayed,
            Zone::CargoShip => &self.cargo_ship,
        }
    }

    pub fn get_zone_mut(&mut self, zone: Zone) -> &mut CardZone {
        match zone {
            Zone::Deck => &mut self.deck,
            Zone::Hand => &mut self.hand,
            Zone::Discard => &mut self.discard,
            Zone::InPlay => &mut self.in_play,
            Zone::Duration => &mut self.duration,
            Zone::MultipliedDurations => &mut self.multiplied_durations,
            Zone::Exile => &mut self.exile,
            Zone::SetAside => &mut self.set_aside,
            Zone::Delayed => &mut self.delayed,
            Zone::CargoShip => &mut self.cargo_ship,
        }
    }

    /// Find which zone currently holds a card
    pub fn locate(&self, card_id: CardId) -> Option<Zone> {
        Zone::ALL
            .into_iter()
            .find(|&zone| self.get_zone(zone).contains(card_id))
    }

    /// Remove a card from whichever zone holds it
    pub fn remove_anywhere(&mut self, card_id: CardId) -> Option<Zone> {
        let zone = self.locate(card_id)?;
        self.get_zone_mut(zone).remove(card_id);
        Some(zone)
    }

    /// Total cards across every zone
    pub fn total_cards(&self) -> usize {
        Zone::ALL.iter().map(|&zone| self.get_zone(zone).len()).sum()
    }

    /// Iterate over every card the player holds
    pub fn all_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        Zone::ALL
            .into_iter()
            .flat_map(move |zone| self.get_zone(zone).cards.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_zone() {
        let player_id = PlayerId::new(1);
        let mut zone = CardZone::new(Zone::Hand, player_id);

        assert_eq!(zone.len(), 0);
        assert!(zone.is_empty());

        let card1 = CardId::new(10);
        let card2 = CardId::new(11);

        zone.add(card1);
        zone.add(card2);

        assert_eq!(zone.len(), 2);
        assert!(zone.contains(card1));
        assert!(zone.contains(card2));

        assert!(zone.remove(card1));
        assert_eq!(zone.len(), 1);
        assert!(!zone.contains(card1));
        assert!(!zone.remove(card1));
    }

    #[test]
    fn test_deck_operations() {
        let player_id = PlayerId::new(1);
        let mut deck = CardZone::new(Zone::Deck, player_id);

        let card1 = CardId::new(10);
        let card2 = CardId::new(11);
        let card3 = CardId::new(12);

        deck.add(card1); // Bottom
        deck.add(card2);
        deck.add(card3); // Top

        assert_eq!(deck.peek_top(), Some(card3));
        assert_eq!(deck.draw_top(), Some(card3));
        assert_eq!(deck.len(), 2);

        let card4 = CardId::new(13);
        deck.add_to_bottom(card4);
        assert_eq!(deck.draw_top(), Some(card2));
        assert_eq!(deck.draw_top(), Some(card1));
        assert_eq!(deck.draw_top(), Some(card4));
        assert!(deck.is_empty());
        assert_eq!(deck.draw_top(), None);
    }

    #[test]
    fn test_locate_and_remove_anywhere() {
        let player_id = PlayerId::new(0);
        let mut zones = PlayerZones::new(player_id);
        let card = CardId::new(5);

        zones.exile.add(card);
        assert_eq!(zones.locate(card), Some(Zone::Exile));
        assert_eq!(zones.total_cards(), 1);

        assert_eq!(zones.remove_anywhere(card), Some(Zone::Exile));
        assert_eq!(zones.locate(card), None);
        assert_eq!(zones.total_cards(), 0);
    }
}
