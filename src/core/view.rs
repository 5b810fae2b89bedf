//! Per-player view of the game.
//!
//! A `PlayerView` holds exactly what one seat may know: its own hand plus the
//! public table state. It is an owned snapshot, so collaborators can encode
//! or serialize it without holding a borrow on the game.

use serde::{Deserialize, Serialize};

use super::action::Triple;
use super::player::{PlayerId, PlayerMap};
use super::state::GameState;
use crate::cards::Card;
use crate::error::{ClueError, Result};
use crate::rules::GameStatus;

/// Observable state from one seat's perspective.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// The seat this view belongs to.
    pub perspective: PlayerId,

    /// The seat's own hand.
    pub hand: Vec<Card>,

    /// Whether the seat has been eliminated.
    pub eliminated: bool,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Players still in the game, in turn order.
    pub roster: Vec<PlayerId>,

    /// Hand sizes of every seat (public knowledge).
    pub hand_sizes: PlayerMap<u32>,

    /// The most recent suggestion.
    pub last_suggestion: Option<Triple>,

    pub status: GameStatus,

    pub turn_number: u32,
}

impl GameState {
    /// Snapshot the game from `perspective`'s point of view.
    ///
    /// Eliminated seats may still observe. The solution and other players'
    /// hands are never included.
    pub fn view(&self, perspective: PlayerId) -> Result<PlayerView> {
        let eliminated = *self.eliminated().get(perspective).ok_or_else(|| {
            ClueError::InvalidOperation(format!("{perspective} is not a seat in this game"))
        })?;

        let hands = self.hands();
        Ok(PlayerView {
            perspective,
            hand: self.hand(perspective).to_vec(),
            eliminated,
            current_player: self.current_player(),
            roster: self.roster(),
            hand_sizes: PlayerMap::new(hands.player_count(), |p| hands[p].len() as u32),
            last_suggestion: self.last_suggestion(),
            status: self.status(),
            turn_number: self.turn_number(),
        })
    }
}
