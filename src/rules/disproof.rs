//! Suggestion disproof.
//!
//! Other players are asked in seat order starting with the seat after the
//! suggester, wrapping around the table. Eliminated seats are skipped: their
//! cards are out of play. The first player holding any of the suggested
//! cards discloses one, checking the character, then the weapon, then the room.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::action::Triple;
use crate::core::player::{PlayerId, PlayerMap};

/// Outcome of a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disproof {
    /// `player` holds `card`, one of the suggested cards.
    Disproved { player: PlayerId, card: Card },
    /// Nobody else holds any of the suggested cards.
    Undisproved,
}

impl Disproof {
    /// Check if the suggestion was disproved.
    #[must_use]
    pub fn is_disproved(&self) -> bool {
        matches!(self, Disproof::Disproved { .. })
    }

    /// The disproving player, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            Disproof::Disproved { player, .. } => Some(*player),
            Disproof::Undisproved => None,
        }
    }

    /// The disclosed card, if any.
    #[must_use]
    pub fn card(&self) -> Option<Card> {
        match self {
            Disproof::Disproved { card, .. } => Some(*card),
            Disproof::Undisproved => None,
        }
    }
}

/// Seats asked to disprove, in the order they are asked.
///
/// A suggester outside the table gets an empty order.
///
/// ```
/// use clue_engine::core::{PlayerId, PlayerMap};
/// use clue_engine::rules::disproof_order;
///
/// let mut eliminated = PlayerMap::with_value(4, false);
/// eliminated[PlayerId::new(3)] = true;
///
/// let order = disproof_order(PlayerId::new(1), &eliminated);
/// assert_eq!(order, vec![PlayerId::new(2), PlayerId::new(0)]);
/// ```
#[must_use]
pub fn disproof_order(suggester: PlayerId, eliminated: &PlayerMap<bool>) -> Vec<PlayerId> {
    let seats = eliminated.player_count();
    if suggester.index() >= seats {
        return Vec::new();
    }

    (1..seats)
        .map(|k| PlayerId::new(((suggester.index() + k) % seats) as u8))
        .filter(|&seat| !eliminated[seat])
        .collect()
}

/// Find the first disproof for `suggestion` among the seats in `order`.
///
/// Seats with no hand in `hands` are skipped.
pub fn find_disproof<H>(
    suggestion: &Triple,
    order: &[PlayerId],
    hands: &PlayerMap<H>,
) -> Disproof
where
    H: AsRef<[Card]>,
{
    for &player in order {
        let Some(hand) = hands.get(player) else {
            continue;
        };
        let hand = hand.as_ref();
        if let Some(card) = suggestion.cards().into_iter().find(|c| hand.contains(c)) {
            return Disproof::Disproved { player, card };
        }
    }
    Disproof::Undisproved
}
