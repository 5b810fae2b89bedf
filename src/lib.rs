//! # clue-engine
//!
//! A game-state engine for Clue-style deduction games.
//!
//! A hidden solution (one character, one weapon, one room) is drawn and the
//! remaining cards are dealt to the players. Each turn the current player
//! suggests a triple that the others may disprove by showing a matching
//! card, and may accuse: a correct accusation wins, a wrong one eliminates
//! the accuser. The last player standing also wins.
//!
//! ## Design Principles
//!
//! 1. **Adjudication only**: The engine resolves moves and state transitions.
//!    Choosing moves, note-taking and visibility of disclosed cards belong
//!    to the caller.
//!
//! 2. **Deterministic**: All randomness comes from an injected, seeded
//!    `GameRng`. Same seed and same calls replay the same game.
//!
//! 3. **Configuration Over Convention**: Players and card lists come from
//!    `ClueConfig`; the standard board is just a preset.
//!
//! ## Example
//!
//! ```
//! use clue_engine::{ClueConfig, GameState, GameStatus};
//!
//! let mut state = GameState::new(ClueConfig::standard(), 42).unwrap();
//!
//! let solution = state.solution();
//! let outcome = state.step(solution, true).unwrap();
//! assert_eq!(outcome.status, GameStatus::WonByAccusation(outcome.player));
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, actions, game state, views
//! - `cards`: Card categories, card values, registry
//! - `rules`: Suggestion disproof and the game status machine
//! - `error`: Error taxonomy

pub mod core;
pub mod cards;
pub mod rules;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    ClueConfig,
    Triple, TurnRecord,
    GameState, Hand, StepOutcome, PlayerView,
};

pub use crate::cards::{Card, CardRegistry, Category};

pub use crate::rules::{Disproof, GameStatus};

pub use crate::error::{ClueError, Result};
