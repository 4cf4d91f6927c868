//! Selection tracker - the two-card pick protocol and the input lock.

use arrayvec::ArrayVec;

use crate::deck::Deck;
use crate::types::CardId;

/// Result of offering a card to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Locked board, repeat pick, matched card or unknown id.
    Ignored,
    /// First card of a pair attempt is now face up.
    First(CardId),
    /// Second card is face up and the board is locked until resolution.
    Pair { first: CardId, second: CardId },
}

/// Holds the unresolved face-up cards and the lock flag.
///
/// Invariant: `locked` is true iff two cards are pending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    pending: ArrayVec<CardId, 2>,
    locked: bool,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first(&self) -> Option<CardId> {
        self.pending.first().copied()
    }

    pub fn second(&self) -> Option<CardId> {
        self.pending.get(1).copied()
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Offer a card. Reveals it on acceptance.
    pub fn select(&mut self, deck: &mut Deck, id: CardId) -> SelectOutcome {
        if self.locked || self.pending.is_full() || self.first() == Some(id) {
            return SelectOutcome::Ignored;
        }

        let Some(card) = deck.get_mut(id) else {
            return SelectOutcome::Ignored;
        };
        if card.is_matched() || !card.reveal() {
            return SelectOutcome::Ignored;
        }

        match self.first() {
            None => {
                self.pending.push(id);
                SelectOutcome::First(id)
            }
            Some(first) => {
                self.pending.push(id);
                self.locked = true;
                SelectOutcome::Pair { first, second: id }
            }
        }
    }

    /// Forget both picks and unlock the board.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::doubled_identities;
    use crate::types::CardState;

    fn deck() -> Deck {
        Deck::from_layout(doubled_identities()).unwrap()
    }

    #[test]
    fn first_pick_reveals_without_locking() {
        let mut deck = deck();
        let mut sel = SelectionTracker::new();

        assert_eq!(sel.select(&mut deck, 3), SelectOutcome::First(3));
        assert_eq!(sel.first(), Some(3));
        assert!(!sel.locked());
        assert_eq!(deck.get(3).unwrap().state(), CardState::Revealed);
    }

    #[test]
    fn second_pick_locks() {
        let mut deck = deck();
        let mut sel = SelectionTracker::new();

        sel.select(&mut deck, 0);
        assert_eq!(
            sel.select(&mut deck, 5),
            SelectOutcome::Pair {
                first: 0,
                second: 5
            }
        );
        assert!(sel.locked());
        assert_eq!(sel.second(), Some(5));
    }

    #[test]
    fn repeat_pick_is_ignored() {
        let mut deck = deck();
        let mut sel = SelectionTracker::new();

        sel.select(&mut deck, 2);
        assert_eq!(sel.select(&mut deck, 2), SelectOutcome::Ignored);
        assert!(!sel.locked());
        assert_eq!(sel.second(), None);
    }

    #[test]
    fn locked_board_ignores_picks() {
        let mut deck = deck();
        let mut sel = SelectionTracker::new();

        sel.select(&mut deck, 0);
        sel.select(&mut deck, 1);
        assert_eq!(sel.select(&mut deck, 2), SelectOutcome::Ignored);
        assert!(deck.get(2).unwrap().is_hidden());
    }

    #[test]
    fn matched_card_is_ignored() {
        let mut deck = deck();
        let card = deck.get_mut(4).unwrap();
        card.reveal();
        card.mark_matched();

        let mut sel = SelectionTracker::new();
        assert_eq!(sel.select(&mut deck, 4), SelectOutcome::Ignored);
        assert_eq!(sel.first(), None);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut deck = deck();
        let mut sel = SelectionTracker::new();
        assert_eq!(sel.select(&mut deck, 99), SelectOutcome::Ignored);
    }

    #[test]
    fn reset_unlocks() {
        let mut deck = deck();
        let mut sel = SelectionTracker::new();
        sel.select(&mut deck, 0);
        sel.select(&mut deck, 1);

        sel.reset();
        assert!(!sel.locked());
        assert_eq!(sel.first(), None);
        assert_eq!(sel.second(), None);
    }
}
