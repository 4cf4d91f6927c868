//! Deck generator - doubled identity list, Fisher-Yates shuffled.

use crate::card::Card;
use crate::rng::SimpleRng;
use crate::types::{CardId, Identity, DECK_SIZE, PAIR_COUNT};

/// Ordered deck of `DECK_SIZE` cards, every identity exactly twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    /// Deal a freshly shuffled deck.
    pub fn shuffled(rng: &mut SimpleRng) -> Self {
        let mut layout = doubled_identities();
        rng.shuffle(&mut layout);
        Self::from_layout_unchecked(layout)
    }

    /// Build a deck from an explicit layout.
    ///
    /// Returns `None` unless every identity appears exactly twice.
    pub fn from_layout(layout: [Identity; DECK_SIZE]) -> Option<Self> {
        let mut counts = [0u8; PAIR_COUNT];
        for identity in layout.iter() {
            counts[identity.index()] += 1;
        }
        if counts.iter().any(|&c| c != 2) {
            return None;
        }
        Some(Self::from_layout_unchecked(layout))
    }

    fn from_layout_unchecked(layout: [Identity; DECK_SIZE]) -> Self {
        Self {
            cards: layout.map(Card::new),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id)
    }

    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    /// Identities in deck order.
    pub fn layout(&self) -> [Identity; DECK_SIZE] {
        self.cards.map(|c| c.identity())
    }
}

/// The unshuffled `[a, b, c, ..., a, b, c, ...]` identity list.
pub fn doubled_identities() -> [Identity; DECK_SIZE] {
    let mut out = [Identity::Black; DECK_SIZE];
    for (i, identity) in Identity::ALL.iter().enumerate() {
        out[i] = *identity;
        out[i + PAIR_COUNT] = *identity;
    }
    out
}
