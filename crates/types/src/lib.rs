//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Layout
//!
//! - **Pairs**: 8 identities, each appearing exactly twice
//! - **Deck**: 16 cards, laid out as a 4x4 grid (row-major card ids 0-15)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Runner frame step (~60 FPS) |
//! | `MISMATCH_DELAY_MS` | 1000 | Time both faces stay up after a miss |
//! | `CLOCK_TICK_MS` | 1000 | Session clock resolution |
//!
//! # Examples
//!
//! ```
//! use tui_pairs_types::{CardState, Identity, DECK_SIZE, PAIR_COUNT};
//!
//! let red = Identity::from_str("RED").unwrap();
//! assert_eq!(red, Identity::Red);
//! assert_eq!(red.as_str(), "red");
//!
//! assert_eq!(CardState::default(), CardState::Hidden);
//! assert_eq!(DECK_SIZE, 2 * PAIR_COUNT);
//! ```

/// Number of distinct identities in a deck
pub const PAIR_COUNT: usize = 8;

/// Number of cards in a deck (every identity twice)
pub const DECK_SIZE: usize = PAIR_COUNT * 2;

/// Grid columns
pub const GRID_COLUMNS: u8 = 4;

/// Grid rows
pub const GRID_ROWS: u8 = 4;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay before two mismatched cards flip back face down
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Session clock resolution (one update per whole second)
pub const CLOCK_TICK_MS: u32 = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_holds_exactly_one_deck() {
        assert_eq!(GRID_COLUMNS as usize * GRID_ROWS as usize, DECK_SIZE);
        assert_eq!(Identity::ALL.len(), PAIR_COUNT);
    }

    #[test]
    fn identity_strings_round_trip_case_insensitively() {
        for id in Identity::ALL {
            assert_eq!(Identity::from_str(&id.as_str().to_uppercase()), Some(id));
        }
        assert_eq!(Identity::from_str("lightblue"), Some(Identity::LtBlue));
        assert_eq!(Identity::from_str("purple"), None);
    }

    #[test]
    fn clock_format_pads_seconds() {
        assert_eq!(format_clock(0).as_str(), "0:00");
        assert_eq!(format_clock(9).as_str(), "0:09");
        assert_eq!(format_clock(61).as_str(), "1:01");
        assert_eq!(format_clock(600).as_str(), "10:00");
    }

    #[test]
    fn phase_names_are_lowercase() {
        assert_eq!(Phase::Idle.as_str(), "idle");
        assert_eq!(Phase::Playing.as_str(), "playing");
        assert_eq!(Phase::Won.as_str(), "won");
    }

    #[test]
    fn win_message_reports_moves() {
        assert_eq!(win_message(12), "Congrats, you won in 12 moves!");
    }
}

/// The eight pair values printed on card faces
///
/// Every deck contains each identity exactly twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identity {
    Black,
    Blue,
    Red,
    Green,
    LtBlue,
    Melon,
    Pink,
    Yellow,
}

impl Identity {
    /// All identities in canonical order
    pub const ALL: [Identity; PAIR_COUNT] = [
        Identity::Black,
        Identity::Blue,
        Identity::Red,
        Identity::Green,
        Identity::LtBlue,
        Identity::Melon,
        Identity::Pink,
        Identity::Yellow,
    ];

    /// Parse identity from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pairs_types::Identity;
    ///
    /// assert_eq!(Identity::from_str("melon"), Some(Identity::Melon));
    /// assert_eq!(Identity::from_str("Lt-Blue"), Some(Identity::LtBlue));
    /// assert_eq!(Identity::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "black" => Some(Identity::Black),
            "blue" => Some(Identity::Blue),
            "red" => Some(Identity::Red),
            "green" => Some(Identity::Green),
            "lt-blue" | "ltblue" | "lightblue" => Some(Identity::LtBlue),
            "melon" => Some(Identity::Melon),
            "pink" => Some(Identity::Pink),
            "yellow" => Some(Identity::Yellow),
            _ => None,
        }
    }

    /// Position in [`Identity::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Identity::Black => "black",
            Identity::Blue => "blue",
            Identity::Red => "red",
            Identity::Green => "green",
            Identity::LtBlue => "lt-blue",
            Identity::Melon => "melon",
            Identity::Pink => "pink",
            Identity::Yellow => "yellow",
        }
    }
}

/// Face state of a single card
///
/// - **Hidden**: face down, selectable
/// - **Revealed**: face up and pending comparison
/// - **Matched**: face up for the rest of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardState {
    #[default]
    Hidden,
    Revealed,
    Matched,
}

/// Stable card address: index into the deck, row-major on the grid.
pub type CardId = usize;

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Deck dealt, no selection yet, clock stopped
    #[default]
    Idle,
    /// At least one selection made, clock running
    Playing,
    /// All pairs matched (terminal until restart)
    Won,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Playing => "playing",
            Phase::Won => "won",
        }
    }
}

/// Game actions that can be applied to modify game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Flip the card with the given id
    Select(CardId),
    /// Throw away the session and deal a fresh one
    Restart,
}

/// Audio cues signalled by the core; presentation decides playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// An accepted card flip
    Flip,
    /// A successful pair (not the final one)
    Match,
    /// The final pair, ending the session
    Victory,
}

/// Presentation event emitted by the core.
///
/// Events are queued in the order the state changes happen and drained by
/// the presentation layer once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CardChanged { card: CardId, state: CardState },
    MovesChanged(u32),
    ElapsedChanged(u32),
    PairMatched { pairs: u32 },
    Won { moves: u32, elapsed_seconds: u32 },
    Cue(Cue),
    SessionReset { episode_id: u32 },
}

/// Fixed-capacity text for the `m:ss` clock display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockText {
    buf: [u8; 16],
    len: usize,
}

impl ClockText {
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

/// Format whole seconds as `m:ss`.
///
/// This is stack-only and does not allocate.
pub fn format_clock(seconds: u32) -> ClockText {
    let minutes = seconds / 60;
    let secs = seconds % 60;

    let mut buf = [0u8; 16];
    let mut len = 0usize;

    let mut digits = [0u8; 10];
    let mut n = minutes;
    let mut count = 0usize;
    loop {
        digits[count] = b'0' + (n % 10) as u8;
        count += 1;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    while count > 0 {
        count -= 1;
        buf[len] = digits[count];
        len += 1;
    }

    buf[len] = b':';
    buf[len + 1] = b'0' + (secs / 10) as u8;
    buf[len + 2] = b'0' + (secs % 10) as u8;
    len += 3;

    ClockText { buf, len }
}

/// Text shown once every pair is matched.
pub fn win_message(moves: u32) -> String {
    format!("Congrats, you won in {} moves!", moves)
}
