//! Strongly-typed wrappers for game concepts
//!
//! Card type tags, costs and the baseline numeric bonuses a card grants when
//! played. These are plain `Copy` values so static card definitions can be
//! built in `const` context.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Action,
    Treasure,
    Victory,
    Curse,
    Attack,
    Reaction,
    Duration,
    Command,
    Ruins,
    Shelter,
}

/// Cost of a card in coins, potions and debt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cost {
    pub coins: u32,
    pub potions: u32,
    pub debt: u32,
}

impl Cost {
    pub const ZERO: Cost = Cost {
        coins: 0,
        potions: 0,
        debt: 0,
    };

    pub const fn coins(coins: u32) -> Self {
        Cost {
            coins,
            potions: 0,
            debt: 0,
        }
    }

    pub const fn with_potion(coins: u32) -> Self {
        Cost {
            coins,
            potions: 1,
            debt: 0,
        }
    }

    pub const fn debt(debt: u32) -> Self {
        Cost {
            coins: 0,
            potions: 0,
            debt,
        }
    }

    /// "Costs up to" comparison used by gain effects
    ///
    /// Every component must be within the limit, so a potion-cost card never
    /// fits a plain coin limit.
    pub fn fits_within(&self, limit: &Cost) -> bool {
        self.coins <= limit.coins && self.potions <= limit.potions && self.debt <= limit.debt
    }

    /// Exact cost match used by Upgrade/Farmland style effects
    pub fn is_exactly(&self, other: &Cost) -> bool {
        self == other
    }

    /// The same cost with `amount` more coins
    pub fn plus_coins(&self, amount: u32) -> Cost {
        Cost {
            coins: self.coins + amount,
            ..*self
        }
    }

    /// Ordering key for "most expensive" heuristics
    pub fn sort_key(&self) -> u32 {
        self.coins + self.debt + self.potions * 2
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.coins)?;
        for _ in 0..self.potions {
            f.write_str("P")?;
        }
        if self.debt > 0 {
            write!(f, " {}D", self.debt)?;
        }
        Ok(())
    }
}

/// Baseline bonuses applied when a card is played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardStats {
    pub cards: u32,
    pub actions: u32,
    pub buys: u32,
    pub coins: u32,
    pub vp: i32,
}

impl CardStats {
    pub const NONE: CardStats = CardStats {
        cards: 0,
        actions: 0,
        buys: 0,
        coins: 0,
        vp: 0,
    };

    pub const fn new(cards: u32, actions: u32, buys: u32, coins: u32) -> Self {
        CardStats {
            cards,
            actions,
            buys,
            coins,
            vp: 0,
        }
    }

    pub const fn coins(coins: u32) -> Self {
        CardStats {
            coins,
            ..CardStats::NONE
        }
    }

    pub const fn vp(vp: i32) -> Self {
        CardStats {
            vp,
            ..CardStats::NONE
        }
    }
}

/// Player name (distinct from other string types)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(s: impl Into<String>) -> Self {
        PlayerName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PlayerName {
    fn from(s: String) -> Self {
        PlayerName(s)
    }
}

impl From<&str> for PlayerName {
    fn from(s: &str) -> Self {
        PlayerName(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_fits_within() {
        let four = Cost::coins(4);
        assert!(Cost::coins(3).fits_within(&four));
        assert!(Cost::coins(4).fits_within(&four));
        assert!(!Cost::coins(5).fits_within(&four));
        assert!(!Cost::with_potion(2).fits_within(&four));
        assert!(!Cost::debt(4).fits_within(&four));
    }

    #[test]
    fn test_cost_display() {
        assert_eq!(Cost::coins(5).to_string(), "$5");
        assert_eq!(Cost::with_potion(3).to_string(), "$3P");
        let two_potions = Cost {
            potions: 2,
            ..Cost::coins(6)
        };
        assert_eq!(two_potions.to_string(), "$6PP");
        assert_eq!(Cost::debt(8).to_string(), "$0 8D");
    }

    #[test]
    fn test_plus_coins() {
        assert_eq!(Cost::coins(3).plus_coins(2), Cost::coins(5));
        assert!(Cost::coins(5).is_exactly(&Cost::coins(3).plus_coins(2)));
    }

    #[test]
    fn test_player_name() {
        let name = PlayerName::new("Alice");
        assert_eq!(name.as_str(), "Alice");
    }
}
