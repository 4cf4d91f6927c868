//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into board [`Command`]s and keeps the grid
//! [`Cursor`] that turns a flip into a concrete card id.

pub mod cursor;
pub mod map;

pub use tui_pairs_types as types;

pub use cursor::{Cursor, Direction};
pub use map::{handle_key_event, should_quit, Command};
