//! TUI Pairs (workspace facade crate).
//!
//! Re-exports the game crates under stable `tui_pairs::{core,input,term,types}`
//! paths and hosts the runner's environment configuration, logging setup and
//! frame pacing.

pub mod config;
pub mod frame;
pub mod logging;

pub use tui_pairs_core as core;
pub use tui_pairs_input as input;
pub use tui_pairs_term as term;
pub use tui_pairs_types as types;

pub use config::Config;
pub use frame::FrameClock;
