//! Card registry: the configured card universe.
//!
//! The `CardRegistry` owns the display names of every card, grouped by
//! category, and resolves names to `Card` values.

use rustc_hash::FxHashMap;

use super::card::{Card, Category};
use crate::error::{ClueError, Result};

/// Registry of all cards in a game.
///
/// ## Example
///
/// ```
/// use clue_engine::cards::{Card, CardRegistry, Category};
///
/// let registry = CardRegistry::new(
///     &["Scarlett".to_string(), "Plum".to_string()],
///     &["Rope".to_string()],
///     &["Hall".to_string()],
/// ).unwrap();
///
/// let plum = registry.card(Category::Character, "Plum").unwrap();
/// assert_eq!(plum, Card::character(1));
/// assert_eq!(registry.name(plum), Some("Plum"));
/// assert_eq!(registry.len(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    names: [Vec<String>; 3],
    by_name: FxHashMap<(Category, String), Card>,
}

impl CardRegistry {
    /// Build a registry from per-category name lists.
    ///
    /// Every category must be non-empty and free of duplicate names.
    pub fn new(characters: &[String], weapons: &[String], rooms: &[String]) -> Result<Self> {
        let mut registry = Self::default();

        for (category, names) in Category::ALL.into_iter().zip([characters, weapons, rooms]) {
            if names.is_empty() {
                return Err(ClueError::InvalidConfiguration(format!(
                    "{category} category has no cards"
                )));
            }
            if names.len() > usize::from(u16::MAX) {
                return Err(ClueError::InvalidConfiguration(format!(
                    "{category} category has too many cards"
                )));
            }

            for (i, name) in names.iter().enumerate() {
                let card = Card::new(category, i as u16);
                if registry.by_name.insert((category, name.clone()), card).is_some() {
                    return Err(ClueError::InvalidConfiguration(format!(
                        "duplicate {category} card {name:?}"
                    )));
                }
            }
            registry.names[category.index()] = names.to_vec();
        }

        Ok(registry)
    }

    /// Look up a card by category and name.
    pub fn card(&self, category: Category, name: &str) -> Result<Card> {
        self.by_name
            .get(&(category, name.to_string()))
            .copied()
            .ok_or_else(|| ClueError::UnknownCardName {
                category,
                name: name.to_string(),
            })
    }

    /// Display name of a card, if it is registered.
    #[must_use]
    pub fn name(&self, card: Card) -> Option<&str> {
        self.names[card.category.index()]
            .get(usize::from(card.index))
            .map(String::as_str)
    }

    /// Check if a card belongs to the configured universe.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        usize::from(card.index) < self.count(card.category)
    }

    /// Fail with `UnknownCard` unless the card is registered.
    pub fn check(&self, card: Card) -> Result<()> {
        if self.contains(card) {
            Ok(())
        } else {
            Err(ClueError::UnknownCard { card })
        }
    }

    /// Number of cards in a category.
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.names[category.index()].len()
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.iter().map(Vec::len).sum()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the cards of one category, in configured order.
    pub fn cards_in(&self, category: Category) -> impl Iterator<Item = Card> {
        (0..self.count(category) as u16).map(move |i| Card::new(category, i))
    }

    /// Iterate over every card: characters, then weapons, then rooms.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        Category::ALL.into_iter().flat_map(move |c| self.cards_in(c))
    }
}
