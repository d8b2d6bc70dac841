//! Board loader
//!
//! Parser for the plain-text board format: kingdom cards plus landscapes

pub mod board;

pub use board::{Board, BoardLoader};
