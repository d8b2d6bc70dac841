//! Error types for the Dominion simulator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DominionError {
    #[error("Unknown card: {0}")]
    UnknownCard(String),

    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    #[error("Pile is empty: {0}")]
    EmptyPile(String),

    #[error("Card not found: {0}")]
    CardNotFound(u32),

    #[error("Invalid game action: {0}")]
    InvalidAction(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, DominionError>;
