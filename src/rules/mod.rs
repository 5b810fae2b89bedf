//! Game rules: suggestion disproof and the game status machine.
//!
//! `GameState` applies these rules; they are kept free of state so the
//! scan order and status transitions can be tested in isolation.

pub mod disproof;
pub mod status;

pub use disproof::{disproof_order, find_disproof, Disproof};
pub use status::GameStatus;
