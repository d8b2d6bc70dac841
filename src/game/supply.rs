//! Supply piles
//!
//! The supply maps pile names to remaining counts. A pile that runs out keeps
//! its entry (count zero) so empty-pile accounting stays correct, and the two
//! halves of a split pile are tracked separately but counted as one pile when
//! deciding how many piles are empty.

use crate::{DominionError, Result};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// A named stack of identical (or Ruins-style mixed) cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pile {
    pub name: &'static str,
    pub count: u32,
    /// Non-supply piles (Spoils) never count toward the empty-pile ending
    pub in_supply: bool,
    /// Other half of a split pile
    pub split_partner: Option<&'static str>,
}

/// All piles of the game, in setup order
#[derive(Debug, Clone, Default)]
pub struct Supply {
    piles: Vec<Pile>,
    index: FxHashMap<&'static str, usize>,
}

impl Supply {
    pub fn new() -> Self {
        Supply::default()
    }

    /// Register a pile (re-registering a name replaces its count)
    pub fn add_pile(&mut self, name: &'static str, count: u32, in_supply: bool) {
        if let Some(&idx) = self.index.get(name) {
            self.piles[idx].count = count;
            return;
        }
        self.index.insert(name, self.piles.len());
        self.piles.push(Pile {
            name,
            count,
            in_supply,
            split_partner: None,
        });
    }

    /// Register both halves of a split pile
    pub fn add_split_pile(&mut self, top: &'static str, bottom: &'static str, each: u32) {
        self.add_pile(top, each, true);
        self.add_pile(bottom, each, true);
        for (name, partner) in [(top, bottom), (bottom, top)] {
            if let Some(pile) = self.pile_mut(name) {
                pile.split_partner = Some(partner);
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Remaining cards in a pile (zero for unknown piles)
    pub fn count(&self, name: &str) -> u32 {
        self.pile(name).map_or(0, |p| p.count)
    }

    pub fn pile(&self, name: &str) -> Option<&Pile> {
        self.index.get(name).map(|&idx| &self.piles[idx])
    }

    fn pile_mut(&mut self, name: &str) -> Option<&mut Pile> {
        match self.index.get(name) {
            Some(&idx) => Some(&mut self.piles[idx]),
            None => None,
        }
    }

    /// Take one card off a pile
    ///
    /// Callers check `count > 0` first; taking from an empty or unknown pile
    /// is a bug in the calling effect and surfaces as an error.
    pub fn take(&mut self, name: &str) -> Result<()> {
        match self.pile_mut(name) {
            Some(pile) if pile.count > 0 => {
                pile.count -= 1;
                Ok(())
            }
            _ => Err(DominionError::EmptyPile(name.to_string())),
        }
    }

    /// Put one card back on a pile (refunds, Spoils returning)
    pub fn return_card(&mut self, name: &str) -> Result<()> {
        match self.pile_mut(name) {
            Some(pile) => {
                pile.count += 1;
                Ok(())
            }
            None => Err(DominionError::UnknownCard(name.to_string())),
        }
    }

    /// Overwrite a pile count (test setup and scenario building)
    pub fn set_count(&mut self, name: &str, count: u32) -> Result<()> {
        match self.pile_mut(name) {
            Some(pile) => {
                pile.count = count;
                Ok(())
            }
            None => Err(DominionError::UnknownCard(name.to_string())),
        }
    }

    /// Number of distinct empty supply piles
    ///
    /// A split pile counts once, and only when both halves are empty.
    pub fn empty_piles(&self) -> usize {
        self.piles
            .iter()
            .filter(|pile| pile.in_supply && pile.count == 0)
            .filter(|pile| match pile.split_partner {
                // Count the pair once, from the alphabetically first half
                Some(partner) => self.count(partner) == 0 && pile.name < partner,
                None => true,
            })
            .count()
    }

    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// Sum of all pile counts
    pub fn total_cards(&self) -> u32 {
        self.piles.iter().map(|p| p.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_and_return() {
        let mut supply = Supply::new();
        supply.add_pile("Silver", 2, true);

        supply.take("Silver").unwrap();
        supply.take("Silver").unwrap();
        assert_eq!(supply.count("Silver"), 0);
        assert!(matches!(
            supply.take("Silver"),
            Err(DominionError::EmptyPile(_))
        ));

        supply.return_card("Silver").unwrap();
        assert_eq!(supply.count("Silver"), 1);
        assert!(supply.take("Gold").is_err());
    }

    #[test]
    fn test_empty_piles_counts_split_once() {
        let mut supply = Supply::new();
        supply.add_pile("Province", 8, true);
        supply.add_pile("Smithy", 10, true);
        supply.add_split_pile("Patrician", "Emporium", 5);

        supply.set_count("Patrician", 0).unwrap();
        assert_eq!(supply.empty_piles(), 0);

        supply.set_count("Emporium", 0).unwrap();
        assert_eq!(supply.empty_piles(), 1);

        supply.set_count("Smithy", 0).unwrap();
        assert_eq!(supply.empty_piles(), 2);
    }

    #[test]
    fn test_non_supply_piles_ignored() {
        let mut supply = Supply::new();
        supply.add_pile("Spoils", 0, false);
        supply.add_pile("Curse", 0, true);
        assert_eq!(supply.empty_piles(), 1);
        assert!(supply.contains("Spoils"));
    }
}
