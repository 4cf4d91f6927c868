use crate::card::Card;
use crate::deck::doubled_identities;
use crate::types::{win_message, CardId, Phase, DECK_SIZE};

/// Copyable view of a whole session, for renderers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cards: [Card; DECK_SIZE],
    pub phase: Phase,
    pub moves: u32,
    pub matched_pairs: u32,
    pub elapsed_seconds: u32,
    pub locked: bool,
    pub first: Option<CardId>,
    pub second: Option<CardId>,
    /// Time left before a missed pair flips back, if one is pending.
    pub rollback_ms: Option<u32>,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// Message area contents: empty until the session is won.
    pub fn message(&self) -> Option<String> {
        self.won().then(|| win_message(self.moves))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cards: doubled_identities().map(Card::new),
            phase: Phase::Idle,
            moves: 0,
            matched_pairs: 0,
            elapsed_seconds: 0,
            locked: false,
            first: None,
            second: None,
            rollback_ms: None,
            episode_id: 0,
            seed: 0,
        }
    }
}
