//! Card identity: category tag plus position within the category.
//!
//! A `Card` carries its category, so membership checks are O(1) and two
//! categories may reuse the same display name without colliding.

use serde::{Deserialize, Serialize};

/// The three disjoint card categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Suspects.
    Character,
    /// Murder weapons.
    Weapon,
    /// Locations.
    Room,
}

impl Category {
    /// All categories in triple order.
    pub const ALL: [Category; 3] = [Category::Character, Category::Weapon, Category::Room];

    /// Position of this category in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Category::Character => 0,
            Category::Weapon => 1,
            Category::Room => 2,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Character => "character",
            Category::Weapon => "weapon",
            Category::Room => "room",
        };
        f.write_str(name)
    }
}

/// A single card.
///
/// `index` is the 0-based position within the category's configured list.
///
/// ## Example
///
/// ```
/// use clue_engine::cards::{Card, Category};
///
/// let rope = Card::weapon(4);
/// assert_eq!(rope.category, Category::Weapon);
/// assert_eq!(rope.index, 4);
/// assert_ne!(rope, Card::room(4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Category this card belongs to.
    pub category: Category,
    /// Position within the category.
    pub index: u16,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(category: Category, index: u16) -> Self {
        Self { category, index }
    }

    /// Create a character card.
    #[must_use]
    pub const fn character(index: u16) -> Self {
        Self::new(Category::Character, index)
    }

    /// Create a weapon card.
    #[must_use]
    pub const fn weapon(index: u16) -> Self {
        Self::new(Category::Weapon, index)
    }

    /// Create a room card.
    #[must_use]
    pub const fn room(index: u16) -> Self {
        Self::new(Category::Room, index)
    }

    /// Check the category tag.
    #[must_use]
    pub fn is(self, category: Category) -> bool {
        self.category == category
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})", self.category, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_index_matches_all() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_card_constructors() {
        assert_eq!(Card::character(1), Card::new(Category::Character, 1));
        assert!(Card::room(0).is(Category::Room));
        assert!(!Card::room(0).is(Category::Weapon));
    }

    #[test]
    fn test_card_display() {
        assert_eq!(format!("{}", Card::weapon(3)), "Weapon(3)");
        assert_eq!(format!("{}", Category::Character), "character");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::room(7);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
