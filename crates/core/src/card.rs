//! Card entity - one tile on the board.

use crate::types::{CardState, Identity};

/// A single card with a fixed identity and a mutable face state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    identity: Identity,
    state: CardState,
}

impl Card {
    /// Create a face-down card.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            state: CardState::Hidden,
        }
    }

    pub fn identity(&self) -> Identity {
        self.identity
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Hidden -> Revealed. Returns false (and changes nothing) otherwise.
    pub fn reveal(&mut self) -> bool {
        self.transition(CardState::Hidden, CardState::Revealed)
    }

    /// Revealed -> Matched.
    pub fn mark_matched(&mut self) -> bool {
        self.transition(CardState::Revealed, CardState::Matched)
    }

    /// Revealed -> Hidden.
    pub fn conceal(&mut self) -> bool {
        self.transition(CardState::Revealed, CardState::Hidden)
    }

    fn transition(&mut self, from: CardState, to: CardState) -> bool {
        if self.state != from {
            return false;
        }
        self.state = to;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_is_hidden() {
        let card = Card::new(Identity::Pink);
        assert_eq!(card.identity(), Identity::Pink);
        assert!(card.is_hidden());
    }

    #[test]
    fn reveal_then_conceal() {
        let mut card = Card::new(Identity::Red);
        assert!(card.reveal());
        assert_eq!(card.state(), CardState::Revealed);
        assert!(card.conceal());
        assert!(card.is_hidden());
    }

    #[test]
    fn matched_is_terminal() {
        let mut card = Card::new(Identity::Red);
        assert!(card.reveal());
        assert!(card.mark_matched());

        assert!(!card.conceal());
        assert!(!card.reveal());
        assert!(!card.mark_matched());
        assert!(card.is_matched());
    }

    #[test]
    fn hidden_card_cannot_jump_to_matched() {
        let mut card = Card::new(Identity::Blue);
        assert!(!card.mark_matched());
        assert!(!card.conceal());
        assert!(card.is_hidden());
    }
}
