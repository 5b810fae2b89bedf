//! Turn actions: the card triple and the per-turn record.
//!
//! Suggestions, accusations and the solution all share one shape: a
//! character, a weapon and a room. `Triple` validates that shape against
//! the configured registry.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{Card, CardRegistry, Category};
use crate::error::{ClueError, Result};
use crate::rules::Disproof;

/// A (character, weapon, room) triple.
///
/// ## Example
///
/// ```
/// use clue_engine::cards::Card;
/// use clue_engine::core::Triple;
///
/// let guess = Triple::new(Card::character(0), Card::weapon(2), Card::room(5));
/// assert!(guess.contains(Card::weapon(2)));
/// assert_eq!(guess.cards()[2], Card::room(5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// The suspect.
    pub character: Card,
    /// The weapon.
    pub weapon: Card,
    /// The room.
    pub room: Card,
}

impl Triple {
    /// Create a triple. Slots are not checked until `validate`.
    #[must_use]
    pub const fn new(character: Card, weapon: Card, room: Card) -> Self {
        Self {
            character,
            weapon,
            room,
        }
    }

    /// Resolve a triple from card names.
    pub fn from_names(
        registry: &CardRegistry,
        character: &str,
        weapon: &str,
        room: &str,
    ) -> Result<Self> {
        Ok(Self::new(
            registry.card(Category::Character, character)?,
            registry.card(Category::Weapon, weapon)?,
            registry.card(Category::Room, room)?,
        ))
    }

    /// The three cards in check order: character, weapon, room.
    #[must_use]
    pub const fn cards(&self) -> [Card; 3] {
        [self.character, self.weapon, self.room]
    }

    /// Check if a card is part of this triple.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards().contains(&card)
    }

    /// Ensure every slot holds a registered card of the right category.
    pub fn validate(&self, registry: &CardRegistry) -> Result<()> {
        for (expected, card) in Category::ALL.into_iter().zip(self.cards()) {
            if !card.is(expected) {
                return Err(ClueError::CategoryMismatch { expected, card });
            }
            registry.check(card)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.character, self.weapon, self.room)
    }
}

/// One completed turn, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The acting player.
    pub player: PlayerId,

    /// Turn number when the turn was taken (starts at 1).
    pub turn: u32,

    /// The suggestion made.
    pub suggestion: Triple,

    /// Outcome of the suggestion.
    pub disproof: Disproof,

    /// Accusation outcome, if the player accused this turn.
    pub accusation: Option<bool>,
}
