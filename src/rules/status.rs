//! Game status: the turn/round state machine.
//!
//! `Active` is the only non-terminal state. A correct accusation moves to
//! `WonByAccusation`; the roster shrinking to one player moves to
//! `WonByElimination`. Neither terminal state can be left.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Current game status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game in progress.
    #[default]
    Active,
    /// The player made a correct accusation.
    WonByAccusation(PlayerId),
    /// The player is the last one not eliminated.
    WonByElimination(PlayerId),
}

impl GameStatus {
    /// Check if the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Active)
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameStatus::Active => None,
            GameStatus::WonByAccusation(p) | GameStatus::WonByElimination(p) => Some(*p),
        }
    }
}
