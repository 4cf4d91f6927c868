//! Match resolver - compares a completed pick and applies the outcome.
//!
//! A match is applied immediately. A miss is turned into a
//! [`PendingRollback`] that the session owns and advances on every tick, so
//! dropping the session (or just the rollback) cancels it.

use tracing::debug;

use crate::deck::Deck;
use crate::types::{CardId, MISMATCH_DELAY_MS};

/// Per-session counters touched by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    /// Completed two-card comparisons.
    pub moves: u32,
    pub matched_pairs: u32,
}

/// Outcome of comparing two face-up cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Matched { pairs: u32 },
    Mismatched(PendingRollback),
}

/// Scheduled flip-back of two mismatched cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRollback {
    first: CardId,
    second: CardId,
    remaining_ms: u32,
}

impl PendingRollback {
    pub fn new(first: CardId, second: CardId) -> Self {
        Self {
            first,
            second,
            remaining_ms: MISMATCH_DELAY_MS,
        }
    }

    pub fn cards(&self) -> (CardId, CardId) {
        (self.first, self.second)
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    /// Count down; true once the delay has fully elapsed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        self.remaining_ms == 0
    }
}

/// Resolve a completed pick.
///
/// Always counts a move. Both cards must be face up; the selection tracker
/// guarantees that.
pub fn resolve(
    deck: &mut Deck,
    stats: &mut SessionStats,
    first: CardId,
    second: CardId,
) -> Resolution {
    stats.moves = stats.moves.saturating_add(1);

    let same = match (deck.get(first), deck.get(second)) {
        (Some(a), Some(b)) => a.identity() == b.identity(),
        _ => false,
    };

    if same {
        for id in [first, second] {
            if let Some(card) = deck.get_mut(id) {
                card.mark_matched();
            }
        }
        stats.matched_pairs += 1;
        debug!(first, second, moves = stats.moves, pairs = stats.matched_pairs, "pair matched");
        Resolution::Matched {
            pairs: stats.matched_pairs,
        }
    } else {
        debug!(first, second, moves = stats.moves, "pair missed");
        Resolution::Mismatched(PendingRollback::new(first, second))
    }
}
