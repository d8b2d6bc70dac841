//! Card instances

use crate::cards::CardDef;
use crate::core::{CardId, CardType, PlayerId};
use smallvec::SmallVec;

/// Represents a card in the game
///
/// Cards have a unique EntityId but many cards share the same static
/// definition. Identity for rules purposes is the definition's name; the ID
/// only tracks which physical copy is where.
#[derive(Debug, Clone)]
pub struct Card {
    /// Unique ID for this card instance
    pub id: CardId,

    /// Static definition (name, cost, stats, hooks)
    pub def: &'static CardDef,

    /// Player who owns this card
    pub owner: PlayerId,

    /// Times this Duration card was played before it went to the duration zone
    pub duration_plays: u8,

    /// Set on Throne Room style cards that played a Duration card
    pub holds_duration: bool,

    /// Opponents a lingering attack reached, one entry per play
    pub attack_hits: SmallVec<[PlayerId; 4]>,
}

impl Card {
    pub fn new(id: CardId, def: &'static CardDef, owner: PlayerId) -> Self {
        Card {
            id,
            def,
            owner,
            duration_plays: 0,
            holds_duration: false,
            attack_hits: SmallVec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn is_type(&self, card_type: CardType) -> bool {
        self.def.is_type(card_type)
    }

    pub fn is_action(&self) -> bool {
        self.is_type(CardType::Action)
    }

    pub fn is_treasure(&self) -> bool {
        self.is_type(CardType::Treasure)
    }

    pub fn is_victory(&self) -> bool {
        self.is_type(CardType::Victory)
    }

    pub fn is_duration(&self) -> bool {
        self.is_type(CardType::Duration)
    }

    /// Clear per-trip state when the card leaves play
    pub fn reset_play_state(&mut self) {
        self.duration_plays = 0;
        self.holds_duration = false;
        self.attack_hits.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::registry;

    #[test]
    fn test_card_creation() {
        let def = registry::card_def("Village").unwrap();
        let card = Card::new(CardId::new(1), def, PlayerId::new(0));

        assert_eq!(card.name(), "Village");
        assert!(card.is_action());
        assert!(!card.is_treasure());
        assert_eq!(card.duration_plays, 0);
    }

    #[test]
    fn test_reset_play_state() {
        let def = registry::card_def("Caravan").unwrap();
        let mut card = Card::new(CardId::new(7), def, PlayerId::new(1));
        card.duration_plays = 2;
        card.holds_duration = true;
        card.attack_hits.push(PlayerId::new(0));

        card.reset_play_state();
        assert_eq!(card.duration_plays, 0);
        assert!(!card.holds_duration);
        assert!(card.attack_hits.is_empty());
    }
}
