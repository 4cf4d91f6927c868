//! Game state module - owns one session and drives its lifecycle
//!
//! This module ties together all core components: deck, selection tracker,
//! match resolver and session clock. Everything that used to be ambient state
//! (picks, counters, timers) is a field here, so a restart replaces it wholesale
//! and a stale rollback or clock tick can never reach the new session.

use std::vec::Drain;

use tracing::{debug, info, trace};

use crate::card::Card;
use crate::clock::SessionClock;
use crate::deck::Deck;
use crate::resolver::{resolve, PendingRollback, Resolution, SessionStats};
use crate::rng::SimpleRng;
use crate::selection::{SelectOutcome, SelectionTracker};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    deck: Deck,
    selection: SelectionTracker,
    stats: SessionStats,
    clock: SessionClock,
    rollback: Option<PendingRollback>,
    phase: Phase,
    rng: SimpleRng,
    /// RNG state the current deck was dealt from.
    seed: u32,
    /// Monotonic session id (increments on restart).
    episode_id: u32,
    /// Presentation events not yet drained.
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create an Idle session with a deck shuffled from `seed`
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let seed = rng.state();
        let deck = Deck::shuffled(&mut rng);
        Self::from_parts(deck, rng, seed)
    }

    /// Create an Idle session with a fixed layout.
    ///
    /// Restarts still deal shuffled decks.
    pub fn with_deck(deck: Deck) -> Self {
        let rng = SimpleRng::default();
        let seed = rng.state();
        Self::from_parts(deck, rng, seed)
    }

    fn from_parts(deck: Deck, rng: SimpleRng, seed: u32) -> Self {
        Self {
            deck,
            selection: SelectionTracker::new(),
            stats: SessionStats::default(),
            clock: SessionClock::new(),
            rollback: None,
            phase: Phase::Idle,
            rng,
            seed,
            episode_id: 0,
            events: Vec::with_capacity(16),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn won(&self) -> bool {
        self.phase == Phase::Won
    }

    pub fn moves(&self) -> u32 {
        self.stats.moves
    }

    pub fn matched_pairs(&self) -> u32 {
        self.stats.matched_pairs
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.clock.elapsed_seconds()
    }

    pub fn clock_running(&self) -> bool {
        self.clock.running()
    }

    pub fn locked(&self) -> bool {
        self.selection.locked()
    }

    pub fn rollback_pending(&self) -> bool {
        self.rollback.is_some()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id)
    }

    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        self.deck.cards()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Win message once the session is won.
    pub fn message(&self) -> Option<String> {
        self.won().then(|| win_message(self.stats.moves))
    }

    /// Take all events emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cards = *self.deck.cards();
        out.phase = self.phase;
        out.moves = self.stats.moves;
        out.matched_pairs = self.stats.matched_pairs;
        out.elapsed_seconds = self.clock.elapsed_seconds();
        out.locked = self.selection.locked();
        out.first = self.selection.first();
        out.second = self.selection.second();
        out.rollback_ms = self.rollback.map(|r| r.remaining_ms());
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a game action
    ///
    /// Returns true if the action changed the state.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Select(id) => self.select(id),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Flip a card.
    ///
    /// Returns false when the pick is ignored: the board is locked, the card is
    /// the pending first pick or already matched, the id is unknown, or the
    /// session is won.
    pub fn select(&mut self, id: CardId) -> bool {
        if self.phase == Phase::Won {
            return false;
        }

        match self.selection.select(&mut self.deck, id) {
            SelectOutcome::Ignored => {
                trace!(card = id, locked = self.selection.locked(), "pick ignored");
                false
            }
            SelectOutcome::First(card) => {
                self.on_revealed(card);
                true
            }
            SelectOutcome::Pair { first, second } => {
                self.on_revealed(second);
                self.resolve_pair(first, second);
                true
            }
        }
    }

    fn on_revealed(&mut self, card: CardId) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Playing;
            self.clock.start();
            debug!(episode_id = self.episode_id, "session started");
        }
        self.events.push(GameEvent::Cue(Cue::Flip));
        self.events.push(GameEvent::CardChanged {
            card,
            state: CardState::Revealed,
        });
    }

    fn resolve_pair(&mut self, first: CardId, second: CardId) {
        let resolution = resolve(&mut self.deck, &mut self.stats, first, second);
        self.events.push(GameEvent::MovesChanged(self.stats.moves));

        match resolution {
            Resolution::Matched { pairs } => {
                for card in [first, second] {
                    self.events.push(GameEvent::CardChanged {
                        card,
                        state: CardState::Matched,
                    });
                }
                self.events.push(GameEvent::PairMatched { pairs });
                // No rollback needed: unlock right away.
                self.selection.reset();

                if pairs as usize == PAIR_COUNT {
                    self.win();
                } else {
                    self.events.push(GameEvent::Cue(Cue::Match));
                }
            }
            Resolution::Mismatched(rollback) => {
                self.rollback = Some(rollback);
            }
        }
    }

    fn win(&mut self) {
        self.phase = Phase::Won;
        self.clock.stop();
        self.events.push(GameEvent::Cue(Cue::Victory));
        self.events.push(GameEvent::Won {
            moves: self.stats.moves,
            elapsed_seconds: self.clock.elapsed_seconds(),
        });
        info!(
            episode_id = self.episode_id,
            moves = self.stats.moves,
            elapsed_seconds = self.clock.elapsed_seconds(),
            "session won"
        );
    }

    /// Advance scheduled effects by `elapsed_ms`.
    ///
    /// Fires the pending rollback once its delay has fully elapsed and emits one
    /// `ElapsedChanged` per whole second crossed. Returns true if anything
    /// changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        let mut changed = false;

        if let Some(rollback) = self.rollback.as_mut() {
            if rollback.advance(elapsed_ms) {
                let (first, second) = rollback.cards();
                self.rollback = None;
                self.roll_back(first, second);
                changed = true;
            }
        }

        let before = self.clock.elapsed_seconds();
        if self.clock.advance(elapsed_ms) > 0 {
            for s in before + 1..=self.clock.elapsed_seconds() {
                self.events.push(GameEvent::ElapsedChanged(s));
            }
            changed = true;
        }

        changed
    }

    fn roll_back(&mut self, first: CardId, second: CardId) {
        for card in [first, second] {
            if let Some(c) = self.deck.get_mut(card) {
                if c.conceal() {
                    self.events.push(GameEvent::CardChanged {
                        card,
                        state: CardState::Hidden,
                    });
                }
            }
        }
        self.selection.reset();
        trace!(first, second, "missed pair flipped back");
    }

    /// Discard the session and deal a fresh Idle one.
    ///
    /// Any pending rollback and the running clock are dropped first.
    pub fn restart(&mut self) {
        let left = self.phase;
        self.rollback = None;
        self.clock = SessionClock::new();

        self.seed = self.rng.state();
        self.deck = Deck::shuffled(&mut self.rng);
        self.selection = SelectionTracker::new();
        self.stats = SessionStats::default();
        self.phase = Phase::Idle;
        self.episode_id = self.episode_id.wrapping_add(1);

        self.events.clear();
        self.events.push(GameEvent::SessionReset {
            episode_id: self.episode_id,
        });
        self.events.push(GameEvent::MovesChanged(0));
        self.events.push(GameEvent::ElapsedChanged(0));

        info!(
            episode_id = self.episode_id,
            seed = self.seed,
            from = left.as_str(),
            "session restarted"
        );
    }
}
