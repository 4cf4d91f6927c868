//! Wall-clock pacing for the runner loop.
//!
//! Time is credited to the session in fixed-size frames. Before an input is
//! applied, the partial frame up to that input is settled first, so time
//! spent before a pick never counts toward the delays the pick starts.

use std::time::{Duration, Instant};

use crate::core::GameState;
use crate::types::TICK_MS;

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { last_tick: now }
    }

    /// How long input polling may block before the next frame is due.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        frame_duration().saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Credit everything since the last tick to the current state.
    ///
    /// Call right before applying an input. Returns the ms credited.
    pub fn settle(&mut self, game: &mut GameState, now: Instant) -> u32 {
        let ms = self.take_elapsed_ms(now);
        if ms > 0 {
            game.tick(ms);
        }
        ms
    }

    /// Tick once a whole frame has passed. Returns true if a tick ran.
    pub fn tick_if_due(&mut self, game: &mut GameState, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) < frame_duration() {
            return false;
        }
        let ms = self.take_elapsed_ms(now);
        game.tick(ms);
        true
    }

    fn take_elapsed_ms(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
    }
}

fn frame_duration() -> Duration {
    Duration::from_millis(u64::from(TICK_MS))
}
