//! Static card and landscape definitions
//!
//! Every card type is a `&'static CardDef`: printed cost, baseline stats and
//! type tags plus optional hook functions the engine calls at fixed trigger
//! points. Definitions are built in `const` context from [`CardDef::EMPTY`]
//! with struct-update syntax, so a card only names the hooks it overrides.

use crate::core::{CardId, CardStats, CardType, Cost, PlayerId};
use crate::game::{Game, GameState};
use crate::Result;

/// Hook fired for a specific card instance (play, gain, trash, duration, buy)
pub type EffectFn = fn(&mut Game, PlayerId, CardId) -> Result<()>;

/// Buy-phase availability predicate
pub type BuyGateFn = fn(&GameState, PlayerId) -> bool;

/// Victory point contribution computed from the whole game state
pub type ScoreFn = fn(&GameState, PlayerId) -> i32;

/// Starting pile size given the number of players
pub type SupplySizeFn = fn(usize) -> u32;

/// Two card types sharing one physical pile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPileInfo {
    pub partner: &'static str,
    /// The bottom half can only be reached once the top half is gone
    pub is_bottom_half: bool,
}

/// Immutable per-type card descriptor
#[derive(Debug)]
pub struct CardDef {
    pub name: &'static str,
    pub cost: Cost,
    pub stats: CardStats,
    pub types: &'static [CardType],
    /// Pile this card is gained from when it differs from the card name
    pub pile: Option<&'static str>,
    pub split: Option<SplitPileInfo>,
    /// Stays in the duration zone for the rest of the game once played
    pub persistent: bool,
    pub play_effect: Option<EffectFn>,
    pub on_gain: Option<EffectFn>,
    pub on_trash: Option<EffectFn>,
    pub on_duration: Option<EffectFn>,
    pub on_buy: Option<EffectFn>,
    pub may_be_bought: Option<BuyGateFn>,
    pub starting_supply: SupplySizeFn,
    /// Other piles this card brings into the game (Ruins, Spoils)
    pub extra_piles: &'static [&'static str],
    pub victory_points: Option<ScoreFn>,
}

fn kingdom_pile(_players: usize) -> u32 {
    10
}

/// Victory kingdom piles follow the Estate/Duchy sizing
pub fn victory_pile(players: usize) -> u32 {
    if players <= 2 {
        8
    } else {
        12
    }
}

/// Each half of a split pile
pub fn split_half(_players: usize) -> u32 {
    5
}

impl CardDef {
    pub const EMPTY: CardDef = CardDef {
        name: "",
        cost: Cost::ZERO,
        stats: CardStats::NONE,
        types: &[],
        pile: None,
        split: None,
        persistent: false,
        play_effect: None,
        on_gain: None,
        on_trash: None,
        on_duration: None,
        on_buy: None,
        may_be_bought: None,
        starting_supply: kingdom_pile,
        extra_piles: &[],
        victory_points: None,
    };

    pub fn is_type(&self, card_type: CardType) -> bool {
        self.types.contains(&card_type)
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

    /// Name of the supply pile copies of this card come from
    pub fn pile_name(&self) -> &'static str {
        self.pile.unwrap_or(self.name)
    }

    /// Whether the split-pile ordering lets this card be taken right now
    pub fn is_accessible(&self, state: &GameState) -> bool {
        match self.split {
            Some(split) if split.is_bottom_half => state.supply.count(split.partner) == 0,
            _ => true,
        }
    }

    /// Buy-phase availability: split-pile order plus the card's own predicate
    pub fn can_be_bought(&self, state: &GameState, player: PlayerId) -> bool {
        self.is_accessible(state) && self.may_be_bought.map_or(true, |gate| gate(state, player))
    }
}

/// Kinds of non-supply game elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LandscapeKind {
    Event,
    Project,
    Way,
    Landmark,
    Ally,
}

/// Landscape hook that only needs the player
pub type LandscapeFn = fn(&mut Game, PlayerId) -> Result<()>;

/// Fired for an owned Project when its owner gains or trashes a card
pub type CardHookFn = fn(&mut Game, PlayerId, CardId) -> Result<()>;

/// Fired for an owned Project when another player gains a card: (owner, gainer, card)
pub type OpponentGainFn = fn(&mut Game, PlayerId, PlayerId, CardId) -> Result<()>;

/// Event, Project, Way, Landmark or Ally
#[derive(Debug)]
pub struct LandscapeDef {
    pub name: &'static str,
    pub kind: LandscapeKind,
    pub cost: Cost,
    pub on_buy: Option<LandscapeFn>,
    pub may_be_bought: Option<BuyGateFn>,
    pub on_turn_start: Option<LandscapeFn>,
    pub on_gain: Option<CardHookFn>,
    pub on_opponent_gain: Option<OpponentGainFn>,
    pub on_trash: Option<CardHookFn>,
    /// Replaces the played card's own effect
    pub way_effect: Option<EffectFn>,
    pub score: Option<ScoreFn>,
}

impl LandscapeDef {
    pub const EMPTY: LandscapeDef = LandscapeDef {
        name: "",
        kind: LandscapeKind::Event,
        cost: Cost::ZERO,
        on_buy: None,
        may_be_bought: None,
        on_turn_start: None,
        on_gain: None,
        on_opponent_gain: None,
        on_trash: None,
        way_effect: None,
        score: None,
    };
}
