//! Core engine types: players, RNG, configuration, actions, state.
//!
//! `GameState` owns everything about one game; the other modules here are
//! the value types it is built from.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod view;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{ClueConfig, DEFAULT_ACCUSATION_PROBABILITY};
pub use action::{Triple, TurnRecord};
pub use state::{GameState, Hand, StepOutcome};
pub use view::PlayerView;
