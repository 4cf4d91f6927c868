//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead renders into a simple framebuffer that
//! is diffed and flushed to a terminal backend.
//!
//! - [`game_view`]: pure snapshot -> framebuffer mapping
//! - [`renderer`]: crossterm output with changed-run diffing
//! - [`render_throttle`]: skip frames nothing visible changed in
//! - [`cues`]: audio cues as terminal bells

pub mod cues;
pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_pairs_core as core;
pub use tui_pairs_types as types;

pub use cues::CuePlayer;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, PLAY_AGAIN_HINT};
pub use render_throttle::{fingerprint, RenderThrottle};
pub use renderer::{changed_runs, encode_full_into, encode_runs_into, Run, TerminalRenderer};
