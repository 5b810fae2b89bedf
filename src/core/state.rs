//! Game state: solution, hands, roster and turn pointer.
//!
//! ## Lifecycle
//!
//! - `initialize` draws the solution and deals the remaining cards in one step
//! - each turn the current player suggests (`resolve_suggestion`), may accuse
//!   (`resolve_accusation`), then `advance_turn` applies the consequences
//! - `step` runs those three in order and records the turn in the history
//!
//! ## Roster
//!
//! Seats are fixed at construction. Elimination flips a per-seat flag rather
//! than removing the seat, so `PlayerId`s stay valid for the whole game and
//! the turn pointer is always a seat id, never a shifting index.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::action::{Triple, TurnRecord};
use super::config::ClueConfig;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, CardRegistry, Category};
use crate::error::{ClueError, Result};
use crate::rules::{disproof_order, find_disproof, Disproof, GameStatus};

/// Cards held by one seat.
pub type Hand = SmallVec<[Card; 8]>;

/// Result of one `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// The player who acted.
    pub player: PlayerId,
    /// Outcome of their suggestion.
    pub disproof: Disproof,
    /// Accusation outcome, if they accused.
    pub accusation: Option<bool>,
    /// Status after the turn advanced.
    pub status: GameStatus,
}

/// Full game state including private information.
#[derive(Clone, Debug)]
pub struct GameState {
    config: ClueConfig,
    registry: CardRegistry,

    /// Hidden solution. Never part of a player view.
    solution: Triple,

    /// Private hands per seat. Eliminated seats keep theirs, out of play.
    hands: PlayerMap<Hand>,

    eliminated: PlayerMap<bool>,

    /// Whose turn it is. Always a seat that is not eliminated.
    current: PlayerId,

    status: GameStatus,

    /// Turn number (starts at 1).
    turn_number: u32,

    last_suggestion: Option<Triple>,

    /// Completed `step`s, oldest first.
    history: Vector<TurnRecord>,

    /// Deterministic RNG.
    pub rng: GameRng,
}

impl GameState {
    /// Build a game: draw the solution and deal every other card.
    pub fn initialize(config: ClueConfig, mut rng: GameRng) -> Result<Self> {
        config.validate()?;
        let registry = CardRegistry::new(&config.characters, &config.weapons, &config.rooms)?;
        let solution = draw_solution(&registry, &mut rng);
        Ok(Self::setup(config, registry, solution, rng))
    }

    /// Build a game from a seed.
    pub fn new(config: ClueConfig, seed: u64) -> Result<Self> {
        Self::initialize(config, GameRng::new(seed))
    }

    /// Build a game around a fixed solution. Only the deal is random.
    pub fn with_solution(config: ClueConfig, solution: Triple, rng: GameRng) -> Result<Self> {
        config.validate()?;
        let registry = CardRegistry::new(&config.characters, &config.weapons, &config.rooms)?;
        solution.validate(&registry)?;
        Ok(Self::setup(config, registry, solution, rng))
    }

    fn setup(
        config: ClueConfig,
        registry: CardRegistry,
        solution: Triple,
        mut rng: GameRng,
    ) -> Self {
        let player_count = config.player_count();
        let hands = deal(&registry, &solution, player_count, &mut rng);

        debug!(
            players = player_count,
            cards = registry.len(),
            seed = rng.seed(),
            "dealt new game"
        );
        trace!(%solution, "solution drawn");

        Self {
            config,
            registry,
            solution,
            hands,
            eliminated: PlayerMap::with_value(player_count, false),
            current: PlayerId::new(0),
            status: GameStatus::Active,
            turn_number: 1,
            last_suggestion: None,
            history: Vector::new(),
            rng,
        }
    }

    /// Start a new game with the same configuration.
    ///
    /// Draws from the state's own RNG, so a reset game is still reproducible
    /// from the original seed.
    pub fn reset(&mut self) {
        self.solution = draw_solution(&self.registry, &mut self.rng);
        self.hands = deal(&self.registry, &self.solution, self.player_count(), &mut self.rng);
        self.eliminated = PlayerMap::with_value(self.player_count(), false);
        self.current = PlayerId::new(0);
        self.status = GameStatus::Active;
        self.turn_number = 1;
        self.last_suggestion = None;
        self.history = Vector::new();

        debug!(players = self.player_count(), "game reset");
        trace!(solution = %self.solution, "solution drawn");
    }

    // === Accessors ===

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &ClueConfig {
        &self.config
    }

    /// Get the card registry.
    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// Number of seats, eliminated ones included.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    /// Configured name of a seat.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> Option<&str> {
        self.config.players.get(player.index()).map(String::as_str)
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Position of the current player within `roster()`.
    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.roster()
            .iter()
            .position(|&p| p == self.current)
            .unwrap_or(0)
    }

    /// Players still in the game, in turn order.
    #[must_use]
    pub fn roster(&self) -> Vec<PlayerId> {
        self.eliminated
            .iter()
            .filter(|(_, out)| !**out)
            .map(|(p, _)| p)
            .collect()
    }

    /// Check if a seat exists and has not been eliminated.
    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.eliminated.get(player) == Some(&false)
    }

    /// A seat's private hand.
    ///
    /// Only the owner should see this; the caller enforces visibility.
    /// Panics if `player` is not a seat in this game.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    /// The hidden solution.
    ///
    /// For adjudication tooling and tests; never hand this to a player.
    #[must_use]
    pub fn solution(&self) -> Triple {
        self.solution
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.status.winner()
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The most recent suggestion, visible to every player.
    #[must_use]
    pub fn last_suggestion(&self) -> Option<Triple> {
        self.last_suggestion
    }

    /// Turns completed through `step`.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    // === Rules ===

    /// Resolve a suggestion by `suggester`.
    ///
    /// Other active players are asked in seat order starting after the
    /// suggester; the first holder of the character, weapon or room (checked
    /// in that order) discloses it. The disclosed card belongs to the
    /// suggester alone: the caller must keep it from everyone else.
    pub fn resolve_suggestion(
        &mut self,
        character: Card,
        weapon: Card,
        room: Card,
        suggester: PlayerId,
    ) -> Result<Disproof> {
        self.suggest(suggester, Triple::new(character, weapon, room))
    }

    /// `resolve_suggestion` for a prebuilt triple.
    pub fn suggest(&mut self, suggester: PlayerId, suggestion: Triple) -> Result<Disproof> {
        self.ensure_running()?;
        suggestion.validate(&self.registry)?;
        self.ensure_seat_active(suggester)?;

        let order = disproof_order(suggester, &self.eliminated);
        let result = find_disproof(&suggestion, &order, &self.hands);
        self.last_suggestion = Some(suggestion);

        debug!(
            player = %suggester,
            %suggestion,
            disproved_by = ?result.player(),
            "suggestion resolved"
        );
        if let Some(card) = result.card() {
            trace!(%card, "card disclosed");
        }

        Ok(result)
    }

    /// Check an accusation against the solution.
    ///
    /// Pure comparison: consequences are applied by `advance_turn`.
    pub fn resolve_accusation(&self, character: Card, weapon: Card, room: Card) -> Result<bool> {
        self.accuse(&Triple::new(character, weapon, room))
    }

    /// `resolve_accusation` for a prebuilt triple.
    pub fn accuse(&self, accusation: &Triple) -> Result<bool> {
        accusation.validate(&self.registry)?;
        Ok(*accusation == self.solution)
    }

    /// Advance the game by one turn.
    ///
    /// `accusation` is the outcome of the current player's accusation this
    /// turn, or `None` if they did not accuse:
    ///
    /// - `Some(true)`: the current player wins; the game is over
    /// - `Some(false)`: the current player is eliminated and the turn passes
    ///   to the next active seat; if only one player is left, they win
    /// - `None`: the turn passes to the next active seat
    ///
    /// Fails with `InvalidOperation` once the game is over.
    pub fn advance_turn(&mut self, accusation: Option<bool>) -> Result<GameStatus> {
        self.ensure_running()?;
        let player = self.current;

        match accusation {
            Some(true) => {
                self.status = GameStatus::WonByAccusation(player);
                info!(player = %player, turn = self.turn_number, "correct accusation, game over");
            }
            Some(false) => {
                self.eliminated[player] = true;
                let roster = self.roster();
                info!(
                    player = %player,
                    remaining = roster.len(),
                    "incorrect accusation, player eliminated"
                );

                if let &[survivor] = roster.as_slice() {
                    self.current = survivor;
                    self.status = GameStatus::WonByElimination(survivor);
                    info!(player = %survivor, "last player standing, game over");
                } else {
                    self.current = self.next_active_after(player);
                    self.turn_number += 1;
                }
            }
            None => {
                self.current = self.next_active_after(player);
                self.turn_number += 1;
            }
        }

        debug!(next = %self.current, status = ?self.status, "turn advanced");
        Ok(self.status)
    }

    // === Turn driver ===

    /// Play one full turn for the current player.
    ///
    /// Resolves `suggestion`; if `accuse` is set, resolves the same triple as
    /// an accusation; then advances the turn and records it in the history.
    pub fn step(&mut self, suggestion: Triple, accuse: bool) -> Result<StepOutcome> {
        self.ensure_running()?;
        let player = self.current;
        let turn = self.turn_number;

        let disproof = self.suggest(player, suggestion)?;
        let accusation = if accuse {
            Some(self.accuse(&suggestion)?)
        } else {
            None
        };
        let status = self.advance_turn(accusation)?;

        self.history.push_back(TurnRecord {
            player,
            turn,
            suggestion,
            disproof,
            accusation,
        });

        Ok(StepOutcome {
            player,
            disproof,
            accusation,
            status,
        })
    }

    /// Decide whether the current player accuses this turn.
    ///
    /// Draws from the state's RNG with `config.accusation_probability`.
    /// Once the game is over this is always `false` and draws nothing.
    pub fn roll_accusation(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.rng.gen_bool(self.config.accusation_probability)
    }

    /// `step`, with the accusation decided by `roll_accusation`.
    pub fn step_with_roll(&mut self, suggestion: Triple) -> Result<StepOutcome> {
        self.ensure_running()?;
        suggestion.validate(&self.registry)?;
        let accuse = self.roll_accusation();
        self.step(suggestion, accuse)
    }

    /// Draw a uniformly random legal triple from the state's RNG.
    ///
    /// Stand-in for a player policy in simulations and tests.
    pub fn random_triple(&mut self) -> Triple {
        draw_solution(&self.registry, &mut self.rng)
    }

    // === Helpers ===

    fn ensure_running(&self) -> Result<()> {
        if self.status.is_terminal() {
            return Err(ClueError::InvalidOperation(format!(
                "game is over ({:?})",
                self.status
            )));
        }
        Ok(())
    }

    fn ensure_seat_active(&self, player: PlayerId) -> Result<()> {
        if self.is_active(player) {
            Ok(())
        } else {
            Err(ClueError::InvalidOperation(format!(
                "{player} is not an active player"
            )))
        }
    }

    /// Next seat after `seat` (wrapping) that is still in the game.
    fn next_active_after(&self, seat: PlayerId) -> PlayerId {
        let seats = self.player_count();
        let mut next = seat.next(seats);
        for _ in 0..seats {
            if !self.eliminated[next] {
                return next;
            }
            next = next.next(seats);
        }
        seat
    }

    pub(crate) fn eliminated(&self) -> &PlayerMap<bool> {
        &self.eliminated
    }

    pub(crate) fn hands(&self) -> &PlayerMap<Hand> {
        &self.hands
    }
}

/// Draw one card uniformly from each category.
///
/// Used for the solution and for random suggestions.
fn draw_solution(registry: &CardRegistry, rng: &mut GameRng) -> Triple {
    let [character, weapon, room] = Category::ALL.map(|category| {
        let index = rng.gen_range_usize(0..registry.count(category));
        Card::new(category, index as u16)
    });
    Triple::new(character, weapon, room)
}

/// Shuffle every non-solution card and deal round-robin in seat order.
fn deal(
    registry: &CardRegistry,
    solution: &Triple,
    player_count: usize,
    rng: &mut GameRng,
) -> PlayerMap<Hand> {
    let mut pool: Vec<Card> = registry
        .all_cards()
        .filter(|card| !solution.contains(*card))
        .collect();
    rng.shuffle(&mut pool);

    let mut hands: PlayerMap<Hand> = PlayerMap::with_default(player_count);
    for (i, card) in pool.into_iter().enumerate() {
        hands[PlayerId::new((i % player_count) as u8)].push(card);
    }
    hands
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn small_config() -> ClueConfig {
        ClueConfig::new()
            .with_player_count(3)
            .with_characters(["A1", "A2"])
            .with_weapons(["W1", "W2"])
            .with_rooms(["R1", "R2"])
    }

    fn small_solution() -> Triple {
        Triple::new(Card::character(0), Card::weapon(0), Card::room(0))
    }

    fn small_game() -> GameState {
        GameState::with_solution(small_config(), small_solution(), GameRng::new(5)).unwrap()
    }

    #[test]
    fn test_initialize_partitions_cards() {
        let state = GameState::new(ClueConfig::standard(), 42).unwrap();

        let mut seen: HashSet<Card> = state.solution().cards().into_iter().collect();
        let mut total = 3;
        for player in PlayerId::all(state.player_count()) {
            for &card in state.hand(player) {
                assert!(seen.insert(card), "{card} dealt twice");
                total += 1;
            }
        }

        assert_eq!(total, 21);
        assert_eq!(seen, state.registry().all_cards().collect::<HashSet<_>>());
    }

    #[test]
    fn test_hand_sizes_differ_by_at_most_one() {
        let config = ClueConfig::standard().with_player_count(4);
        let state = GameState::new(config, 7).unwrap();

        // 18 cards over 4 seats: 5, 5, 4, 4 in seat order.
        let sizes: Vec<_> = PlayerId::all(4).map(|p| state.hand(p).len()).collect();
        assert_eq!(sizes, vec![5, 5, 4, 4]);
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(ClueConfig::standard(), 1).unwrap();
        assert_eq!(state.current_player(), PlayerId::new(0));
        assert_eq!(state.turn_index(), 0);
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.status(), GameStatus::Active);
        assert_eq!(state.roster().len(), 3);
        assert_eq!(state.last_suggestion(), None);
        assert!(state.history().is_empty());
        assert_eq!(state.player_name(PlayerId::new(2)), Some("Player 3"));
        assert_eq!(state.player_name(PlayerId::new(3)), None);
    }

    #[test]
    fn test_initialize_rejects_bad_config() {
        let config = ClueConfig::standard().with_players(["Solo"]);
        assert!(matches!(
            GameState::new(config, 1),
            Err(ClueError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = GameState::new(ClueConfig::standard(), 99).unwrap();
        let b = GameState::new(ClueConfig::standard(), 99).unwrap();

        assert_eq!(a.solution(), b.solution());
        for player in PlayerId::all(3) {
            assert_eq!(a.hand(player), b.hand(player));
        }
    }

    #[test]
    fn test_with_solution_small_scenario() {
        let state = small_game();

        let mut dealt: Vec<Card> = Vec::new();
        for player in PlayerId::all(3) {
            assert_eq!(state.hand(player).len(), 1);
            dealt.extend_from_slice(state.hand(player));
        }
        dealt.sort();
        assert_eq!(dealt, vec![Card::character(1), Card::weapon(1), Card::room(1)]);

        assert!(state
            .resolve_accusation(Card::character(0), Card::weapon(0), Card::room(0))
            .unwrap());
        assert!(!state
            .resolve_accusation(Card::character(1), Card::weapon(0), Card::room(0))
            .unwrap());
    }

    #[test]
    fn test_with_solution_rejects_unknown_card() {
        let bad = Triple::new(Card::character(0), Card::weapon(9), Card::room(0));
        assert_eq!(
            GameState::with_solution(small_config(), bad, GameRng::new(5)).unwrap_err(),
            ClueError::UnknownCard { card: Card::weapon(9) }
        );
    }

    #[test]
    fn test_suggestion_disproved_by_holder() {
        let mut state = small_game();

        let holder = PlayerId::all(3)
            .find(|&p| state.hand(p).contains(&Card::room(1)))
            .unwrap();
        let suggester = holder.next(3);

        let result = state
            .resolve_suggestion(Card::character(0), Card::weapon(0), Card::room(1), suggester)
            .unwrap();

        assert_eq!(result, Disproof::Disproved { player: holder, card: Card::room(1) });
        assert_eq!(
            state.last_suggestion(),
            Some(Triple::new(Card::character(0), Card::weapon(0), Card::room(1)))
        );
    }

    #[test]
    fn test_suggestion_of_solution_undisproved() {
        let mut state = small_game();
        let result = state
            .resolve_suggestion(
                Card::character(0),
                Card::weapon(0),
                Card::room(0),
                PlayerId::new(0),
            )
            .unwrap();
        assert_eq!(result, Disproof::Undisproved);
    }

    #[test]
    fn test_suggestion_rejects_bad_input() {
        let mut state = small_game();

        assert_eq!(
            state.resolve_suggestion(
                Card::character(0),
                Card::weapon(0),
                Card::room(7),
                PlayerId::new(0),
            ),
            Err(ClueError::UnknownCard { card: Card::room(7) })
        );
        assert!(matches!(
            state.resolve_suggestion(
                Card::room(0),
                Card::weapon(0),
                Card::room(0),
                PlayerId::new(0),
            ),
            Err(ClueError::CategoryMismatch { .. })
        ));
        assert!(matches!(
            state.resolve_suggestion(
                Card::character(0),
                Card::weapon(0),
                Card::room(0),
                PlayerId::new(5),
            ),
            Err(ClueError::InvalidOperation(_))
        ));
        assert_eq!(state.last_suggestion(), None);
    }

    #[test]
    fn test_advance_turn_rotates() {
        let mut state = GameState::new(ClueConfig::standard(), 3).unwrap();

        for expected in [1, 2, 0, 1] {
            assert_eq!(state.advance_turn(None).unwrap(), GameStatus::Active);
            assert_eq!(state.current_player(), PlayerId::new(expected));
        }
        assert_eq!(state.turn_number(), 5);
    }

    #[test]
    fn test_incorrect_accusation_eliminates_and_passes_turn() {
        let mut state = GameState::new(ClueConfig::standard().with_player_count(4), 3).unwrap();
        state.advance_turn(None).unwrap(); // Seat 1 to act

        let status = state.advance_turn(Some(false)).unwrap();

        assert_eq!(status, GameStatus::Active);
        assert!(!state.is_active(PlayerId::new(1)));
        assert_eq!(state.roster(), vec![PlayerId::new(0), PlayerId::new(2), PlayerId::new(3)]);
        assert_eq!(state.current_player(), PlayerId::new(2));
        assert_eq!(state.turn_index(), 1);
        // Eliminated hands are kept, not redistributed.
        assert!(!state.hand(PlayerId::new(1)).is_empty());
    }

    #[test]
    fn test_elimination_of_last_seat_wraps() {
        let mut state = GameState::new(ClueConfig::standard(), 3).unwrap();
        state.advance_turn(None).unwrap();
        state.advance_turn(None).unwrap(); // Seat 2 to act

        state.advance_turn(Some(false)).unwrap();
        assert_eq!(state.current_player(), PlayerId::new(0));

        // Seat 2 no longer gets turns.
        state.advance_turn(None).unwrap();
        assert_eq!(state.current_player(), PlayerId::new(1));
        state.advance_turn(None).unwrap();
        assert_eq!(state.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_last_player_standing_wins() {
        let mut state = GameState::new(ClueConfig::standard(), 3).unwrap();

        state.advance_turn(Some(false)).unwrap(); // Seat 0 out
        let status = state.advance_turn(Some(false)).unwrap(); // Seat 1 out

        assert_eq!(status, GameStatus::WonByElimination(PlayerId::new(2)));
        assert_eq!(state.winner(), Some(PlayerId::new(2)));
        assert_eq!(state.roster(), vec![PlayerId::new(2)]);
    }

    #[test]
    fn test_correct_accusation_freezes_game() {
        let mut state = GameState::new(ClueConfig::standard(), 3).unwrap();
        state.advance_turn(None).unwrap();

        let status = state.advance_turn(Some(true)).unwrap();
        assert_eq!(status, GameStatus::WonByAccusation(PlayerId::new(1)));
        assert_eq!(state.current_player(), PlayerId::new(1));
        assert_eq!(state.roster().len(), 3);

        assert!(matches!(state.advance_turn(None), Err(ClueError::InvalidOperation(_))));
        assert_eq!(state.current_player(), PlayerId::new(1));
        assert!(matches!(
            state.resolve_suggestion(
                Card::character(0),
                Card::weapon(0),
                Card::room(0),
                PlayerId::new(0),
            ),
            Err(ClueError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_step_records_history() {
        let mut state = small_game();
        let guess = Triple::new(Card::character(1), Card::weapon(0), Card::room(0));

        let outcome = state.step(guess, false).unwrap();
        assert_eq!(outcome.player, PlayerId::new(0));
        assert_eq!(outcome.accusation, None);
        assert_eq!(outcome.status, GameStatus::Active);

        let outcome = state.step(guess, true).unwrap();
        assert_eq!(outcome.player, PlayerId::new(1));
        assert_eq!(outcome.accusation, Some(false));
        assert!(!state.is_active(PlayerId::new(1)));

        let outcome = state.step(small_solution(), true).unwrap();
        assert_eq!(outcome.player, PlayerId::new(2));
        assert_eq!(outcome.status, GameStatus::WonByAccusation(PlayerId::new(2)));

        let turns: Vec<_> = state.history().iter().map(|r| (r.player, r.turn)).collect();
        assert_eq!(
            turns,
            vec![(PlayerId::new(0), 1), (PlayerId::new(1), 2), (PlayerId::new(2), 3)]
        );
    }

    #[test]
    fn test_step_rejected_after_game_over() {
        let mut state = small_game();
        state.step(small_solution(), true).unwrap();

        assert!(matches!(
            state.step(small_solution(), false),
            Err(ClueError::InvalidOperation(_))
        ));
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_roll_accusation_uses_config_probability() {
        let config = ClueConfig::standard().with_accusation_probability(0.0);
        let mut state = GameState::new(config, 11).unwrap();
        assert!((0..50).all(|_| !state.roll_accusation()));

        let config = ClueConfig::standard().with_accusation_probability(1.0);
        let mut state = GameState::new(config, 11).unwrap();
        let guess = state.random_triple();
        let outcome = state.step_with_roll(guess).unwrap();
        assert!(outcome.accusation.is_some());
    }

    #[test]
    fn test_roll_accusation_after_game_over_draws_nothing() {
        let config = ClueConfig::standard().with_accusation_probability(1.0);
        let mut state = GameState::new(config, 11).unwrap();
        let solution = state.solution();
        state.step(solution, true).unwrap();

        let before = state.rng.state();
        assert!(!state.roll_accusation());
        assert_eq!(state.rng.state(), before);
    }

    #[test]
    fn test_random_triple_matches_solution_draw() {
        let mut state = GameState::new(ClueConfig::standard(), 8).unwrap();
        let mut rng = GameRng::from_state(&state.rng.state());

        let expected = draw_solution(state.registry(), &mut rng);
        assert_eq!(state.random_triple(), expected);
    }

    #[test]
    fn test_reset_restores_full_roster() {
        let mut state = GameState::new(ClueConfig::standard(), 3).unwrap();
        let guess = state.random_triple();
        state.step(guess, false).unwrap();
        state.advance_turn(Some(false)).unwrap();

        state.reset();

        assert_eq!(state.roster().len(), 3);
        assert_eq!(state.current_player(), PlayerId::new(0));
        assert_eq!(state.status(), GameStatus::Active);
        assert_eq!(state.turn_number(), 1);
        assert!(state.history().is_empty());
        assert_eq!(state.last_suggestion(), None);

        let dealt: usize = PlayerId::all(3).map(|p| state.hand(p).len()).sum();
        assert_eq!(dealt, 18);
    }

    #[test]
    fn test_random_triple_is_valid() {
        let mut state = GameState::new(ClueConfig::standard(), 8).unwrap();
        for _ in 0..50 {
            let triple = state.random_triple();
            assert!(triple.validate(state.registry()).is_ok());
        }
    }
}
