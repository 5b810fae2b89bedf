//! Error types for the Clue engine.
//!
//! The engine trusts its caller for most preconditions, so the taxonomy is
//! small: bad configuration, cards outside the configured universe, and
//! operations that are not legal in the current game state.

use thiserror::Error;

use crate::cards::{Card, Category};

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueError {
    /// Configuration rejected at construction time.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A card that is not part of the configured universe.
    #[error("Unknown card: {card}")]
    UnknownCard { card: Card },

    /// A card name that no category of that kind defines.
    #[error("Unknown {category} card: {name:?}")]
    UnknownCardName { category: Category, name: String },

    /// A card placed in the wrong slot of a triple.
    #[error("Expected a {expected} card, got {card}")]
    CategoryMismatch { expected: Category, card: Card },

    /// Operation not legal in the current game state.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClueError>;
