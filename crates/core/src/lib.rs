//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole pairs-game state machine. It has **no
//! dependencies** on terminals, audio or I/O (beyond `tracing` diagnostics),
//! making it:
//!
//! - **Deterministic**: Same seed deals the same deck
//! - **Testable**: Every rule is driven by plain method calls and `tick`
//! - **Portable**: Can run behind any presentation (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG with an unbiased Fisher-Yates shuffle
//! - [`deck`]: deck generator, every identity exactly twice
//! - [`card`]: card entity and its face-state transitions
//! - [`selection`]: two-pick protocol and the input lock
//! - [`resolver`]: match/miss outcome and the scheduled rollback
//! - [`clock`]: whole-second session clock
//! - [`game_state`]: the session controller (Idle -> Playing -> Won)
//! - [`snapshot`]: copyable session view for renderers
//!
//! # Example
//!
//! ```
//! use tui_pairs_core::{Deck, GameState};
//! use tui_pairs_core::deck::doubled_identities;
//! use tui_pairs_types::{CardState, Phase, MISMATCH_DELAY_MS, PAIR_COUNT};
//!
//! // Cards i and i + PAIR_COUNT share an identity in this layout.
//! let deck = Deck::from_layout(doubled_identities()).unwrap();
//! let mut game = GameState::with_deck(deck);
//!
//! game.select(0);
//! game.select(PAIR_COUNT);
//! assert_eq!(game.matched_pairs(), 1);
//!
//! game.select(1);
//! game.select(2);
//! assert!(game.locked());
//! game.tick(MISMATCH_DELAY_MS);
//! assert_eq!(game.card(1).unwrap().state(), CardState::Hidden);
//! assert_eq!(game.phase(), Phase::Playing);
//! ```
//!
//! # Timing
//!
//! Deferred effects (the mismatch rollback and the clock) advance only through
//! [`GameState::tick`](game_state::GameState::tick). Call it every frame with the
//! elapsed time.

pub mod card;
pub mod clock;
pub mod deck;
pub mod game_state;
pub mod resolver;
pub mod rng;
pub mod selection;
pub mod snapshot;

pub use tui_pairs_types as types;

// Re-export commonly used types for convenience
pub use card::Card;
pub use clock::SessionClock;
pub use deck::Deck;
pub use game_state::GameState;
pub use resolver::{resolve, PendingRollback, Resolution, SessionStats};
pub use rng::SimpleRng;
pub use selection::{SelectOutcome, SelectionTracker};
pub use snapshot::GameSnapshot;
