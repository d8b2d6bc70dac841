//! Card content
//!
//! Static definitions grouped by the expansion that introduced them, plus
//! the landscapes (Events, Projects, Ways, Landmarks, Allies), the Hexes
//! and the name-based registry the engine looks everything up through.

pub mod definition;
pub mod registry;

mod adventures;
mod allies;
mod alchemy;
mod base;
mod basic;
mod dark_ages;
mod empires;
mod guilds;
mod hinterlands;
mod intrigue;
mod menagerie;
mod nocturne;
mod plunder;
mod promo;
mod prosperity;
mod renaissance;
mod seaside;

pub use definition::{
    split_half, victory_pile, BuyGateFn, CardDef, CardHookFn, EffectFn, LandscapeDef, LandscapeFn,
    LandscapeKind, OpponentGainFn, ScoreFn, SplitPileInfo, SupplySizeFn,
};
pub use nocturne::Hex;
