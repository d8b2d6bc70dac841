//! Nocturne: Skulk and the Hexes it hands out

use crate::cards::CardDef;
use crate::core::CardType::*;
use crate::core::{CardId, CardStats, Cost, PlayerId};
use crate::game::{Game, GainDestination};
use crate::Result;

/// A Hex: a one-shot harmful effect received from a Doom card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hex {
    /// Take Envious unless already Envious or Deluded: Silver and Gold make $1 this turn
    Envy,
    /// Take Deluded unless already Envious or Deluded: you can't buy Actions this turn
    Delusion,
    /// Gain a Curse to your hand
    Plague,
    /// Discard down to 3 cards in hand
    Poverty,
    /// Take Miserable (-2 VP), or flip it to Twice Miserable (-4 VP)
    Misery,
}

impl Hex {
    pub const ALL: [Hex; 5] = [Hex::Envy, Hex::Delusion, Hex::Plague, Hex::Poverty, Hex::Misery];

    pub fn name(self) -> &'static str {
        match self {
            Hex::Envy => "Envy",
            Hex::Delusion => "Delusion",
            Hex::Plague => "Plague",
            Hex::Poverty => "Poverty",
            Hex::Misery => "Misery",
        }
    }

    pub fn apply(self, game: &mut Game, player: PlayerId) -> Result<()> {
        match self {
            Hex::Envy | Hex::Delusion => {
                let p = game.state.player_mut(player)?;
                if !p.envious && !p.deluded {
                    if self == Hex::Envy {
                        p.envious = true;
                    } else {
                        p.deluded = true;
                    }
                }
            }
            Hex::Plague => {
                game.give_curse_to_player(player, true)?;
            }
            Hex::Poverty => game.discard_down_to(player, 3, "Poverty")?,
            Hex::Misery => {
                let p = game.state.player_mut(player)?;
                p.misery = (p.misery + 1).min(2);
            }
        }
        Ok(())
    }
}

// Skulk: +1 Buy. Each other player receives the next Hex. When you gain this, gain a Gold.
fn skulk(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.attack_each_opponent(player, |game, target| game.receive_hex(target))
}

fn skulk_gained(game: &mut Game, player: PlayerId, _card: CardId) -> Result<()> {
    game.gain_from_supply(player, "Gold", GainDestination::Discard)?;
    Ok(())
}

pub const CARDS: &[CardDef] = &[CardDef {
    name: "Skulk",
    cost: Cost::coins(4),
    stats: CardStats::new(0, 0, 1, 0),
    types: &[Action, Attack],
    play_effect: Some(skulk),
    on_gain: Some(skulk_gained),
    extra_piles: &["Hexes"],
    ..CardDef::EMPTY
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_names_are_distinct() {
        let mut names: Vec<&str> = Hex::ALL.iter().map(|hex| hex.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Hex::ALL.len());
    }
}
