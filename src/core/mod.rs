//! Core game types and entities

pub mod card;
pub mod entity;
pub mod player;
pub mod types;

pub use card::Card;
pub use entity::{CardId, EntityId, EntityStore, PlayerId};
pub use player::{PlayerState, TurnFlags};
pub use types::{CardStats, CardType, Cost, PlayerName};
