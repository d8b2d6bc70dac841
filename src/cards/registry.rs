//! Name to definition lookup
//!
//! Names are matched after transliterating to ASCII, lowercasing and
//! dropping everything but letters and digits, so "King's Court",
//! "kings court" and "King’s Court" all find the same card. A miss is
//! always an error: boards and strategy files never fall back silently.

use crate::cards::{
    adventures, alchemy, allies, base, basic, dark_ages, empires, guilds, hinterlands, intrigue,
    menagerie, nocturne, plunder, promo, prosperity, renaissance, seaside, CardDef, LandscapeDef,
};
use crate::{DominionError, Result};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Every card set, in expansion order
const CARD_SETS: &[&[CardDef]] = &[
    basic::CARDS,
    base::CARDS,
    intrigue::CARDS,
    seaside::CARDS,
    alchemy::CARDS,
    prosperity::CARDS,
    hinterlands::CARDS,
    guilds::CARDS,
    dark_ages::CARDS,
    dark_ages::RUINS,
    adventures::CARDS,
    empires::CARDS,
    nocturne::CARDS,
    renaissance::CARDS,
    menagerie::CARDS,
    allies::CARDS,
    plunder::CARDS,
    promo::CARDS,
];

const LANDSCAPE_SETS: &[&[LandscapeDef]] = &[
    empires::LANDMARKS,
    renaissance::PROJECTS,
    menagerie::EVENTS,
    menagerie::WAYS,
    allies::ALLIES,
];

struct Registry {
    cards: FxHashMap<String, &'static CardDef>,
    landscapes: FxHashMap<String, &'static LandscapeDef>,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Lookup key for a card name
pub fn normalize(name: &str) -> String {
    deunicode::deunicode(name)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| Registry {
        cards: all_cards().map(|def| (normalize(def.name), def)).collect(),
        landscapes: all_landscapes()
            .map(|def| (normalize(def.name), def))
            .collect(),
    })
}

/// Every card definition known to the simulator
pub fn all_cards() -> impl Iterator<Item = &'static CardDef> {
    CARD_SETS.iter().flat_map(|set| set.iter())
}

pub fn all_landscapes() -> impl Iterator<Item = &'static LandscapeDef> {
    LANDSCAPE_SETS.iter().flat_map(|set| set.iter())
}

pub fn card_def(name: &str) -> Result<&'static CardDef> {
    registry()
        .cards
        .get(&normalize(name))
        .copied()
        .ok_or_else(|| DominionError::UnknownCard(name.to_string()))
}

pub fn landscape_def(name: &str) -> Result<&'static LandscapeDef> {
    registry()
        .landscapes
        .get(&normalize(name))
        .copied()
        .ok_or_else(|| DominionError::UnknownCard(name.to_string()))
}

/// The kinds of card a gain from the Ruins pile can produce
pub fn ruins_kinds() -> &'static [CardDef] {
    dark_ages::RUINS
}
