//! Card system: categories, card values, and the registry.
//!
//! ## Key Types
//!
//! - `Category`: Character, Weapon, or Room
//! - `Card`: Category-tagged card value
//! - `CardRegistry`: Configured card universe with name lookup

pub mod card;
pub mod registry;

pub use card::{Card, Category};
pub use registry::CardRegistry;
