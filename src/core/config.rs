//! Game configuration.
//!
//! A `ClueConfig` names the players (in turn order) and the cards of each
//! category. Nothing about the card universe is hardcoded: the standard
//! board is just one preset.

use serde::{Deserialize, Serialize};

use crate::error::{ClueError, Result};

/// Default chance that a collaborator turns a suggestion into an accusation.
pub const DEFAULT_ACCUSATION_PROBABILITY: f64 = 0.1;

const STANDARD_CHARACTERS: [&str; 6] = [
    "Miss Scarlett",
    "Colonel Mustard",
    "Mrs. White",
    "Reverend Green",
    "Mrs. Peacock",
    "Professor Plum",
];

const STANDARD_WEAPONS: [&str; 6] = [
    "Candlestick",
    "Dagger",
    "Lead Pipe",
    "Revolver",
    "Rope",
    "Wrench",
];

const STANDARD_ROOMS: [&str; 9] = [
    "Kitchen",
    "Ballroom",
    "Conservatory",
    "Dining Room",
    "Billiard Room",
    "Library",
    "Lounge",
    "Hall",
    "Study",
];

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use clue_engine::core::ClueConfig;
///
/// let config = ClueConfig::new()
///     .with_players(["Ann", "Bob"])
///     .with_characters(["Plum", "Peacock"])
///     .with_weapons(["Rope"])
///     .with_rooms(["Hall", "Study"]);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.card_count(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClueConfig {
    /// Player names in turn order (2-255).
    pub players: Vec<String>,

    /// Character card names.
    pub characters: Vec<String>,

    /// Weapon card names.
    pub weapons: Vec<String>,

    /// Room card names.
    pub rooms: Vec<String>,

    /// Probability used by `GameState::roll_accusation`.
    #[serde(default = "default_accusation_probability")]
    pub accusation_probability: f64,
}

fn default_accusation_probability() -> f64 {
    DEFAULT_ACCUSATION_PROBABILITY
}

impl Default for ClueConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClueConfig {
    /// Create an empty configuration. Fill it with the builder methods.
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            characters: Vec::new(),
            weapons: Vec::new(),
            rooms: Vec::new(),
            accusation_probability: DEFAULT_ACCUSATION_PROBABILITY,
        }
    }

    /// The standard board: 3 players, 6 characters, 6 weapons, 9 rooms.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_players(["Player 1", "Player 2", "Player 3"])
            .with_characters(STANDARD_CHARACTERS)
            .with_weapons(STANDARD_WEAPONS)
            .with_rooms(STANDARD_ROOMS)
    }

    /// Set the players, in turn order.
    #[must_use]
    pub fn with_players<I, S>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players = players.into_iter().map(Into::into).collect();
        self
    }

    /// Set `count` players named "Player 1".."Player N".
    #[must_use]
    pub fn with_player_count(self, count: usize) -> Self {
        self.with_players((1..=count).map(|i| format!("Player {i}")))
    }

    /// Set the character cards.
    #[must_use]
    pub fn with_characters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.characters = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the weapon cards.
    #[must_use]
    pub fn with_weapons<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weapons = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the room cards.
    #[must_use]
    pub fn with_rooms<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rooms = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the accusation probability.
    #[must_use]
    pub fn with_accusation_probability(mut self, probability: f64) -> Self {
        self.accusation_probability = probability;
        self
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Total number of cards across all categories.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.characters.len() + self.weapons.len() + self.rooms.len()
    }

    /// Check the player list and accusation probability.
    ///
    /// Card lists are validated when the `CardRegistry` is built from them.
    pub fn validate(&self) -> Result<()> {
        if self.players.len() < 2 {
            return Err(ClueError::InvalidConfiguration(format!(
                "need at least 2 players, got {}",
                self.players.len()
            )));
        }
        if self.players.len() > 255 {
            return Err(ClueError::InvalidConfiguration(format!(
                "at most 255 players supported, got {}",
                self.players.len()
            )));
        }
        for (category, list) in [
            ("character", &self.characters),
            ("weapon", &self.weapons),
            ("room", &self.rooms),
        ] {
            if list.is_empty() {
                return Err(ClueError::InvalidConfiguration(format!(
                    "{category} category has no cards"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.accusation_probability) {
            return Err(ClueError::InvalidConfiguration(format!(
                "accusation probability {} outside [0, 1]",
                self.accusation_probability
            )));
        }
        Ok(())
    }
}
