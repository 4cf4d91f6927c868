//! Session clock - whole seconds since the first accepted pick.

use crate::types::CLOCK_TICK_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionClock {
    running: bool,
    stopped: bool,
    elapsed_seconds: u32,
    accumulator_ms: u32,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    /// Start counting. Returns false if already running or stopped for good.
    pub fn start(&mut self) -> bool {
        if self.running || self.stopped {
            return false;
        }
        self.running = true;
        self.accumulator_ms = 0;
        true
    }

    /// Stop permanently; later `start` calls are refused.
    pub fn stop(&mut self) {
        self.running = false;
        self.stopped = true;
    }

    /// Advance by `elapsed_ms`, returning how many whole seconds were crossed.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        let crossed = self.accumulator_ms / CLOCK_TICK_MS;
        self.accumulator_ms %= CLOCK_TICK_MS;
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(crossed);
        crossed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_clock_does_not_count() {
        let mut clock = SessionClock::new();
        assert_eq!(clock.advance(5_000), 0);
        assert_eq!(clock.elapsed_seconds(), 0);
    }

    #[test]
    fn counts_whole_seconds_only() {
        let mut clock = SessionClock::new();
        assert!(clock.start());

        assert_eq!(clock.advance(999), 0);
        assert_eq!(clock.advance(1), 1);
        assert_eq!(clock.elapsed_seconds(), 1);

        assert_eq!(clock.advance(2_500), 2);
        assert_eq!(clock.elapsed_seconds(), 3);
        assert_eq!(clock.advance(500), 1);
        assert_eq!(clock.elapsed_seconds(), 4);
    }

    #[test]
    fn no_double_start() {
        let mut clock = SessionClock::new();
        assert!(clock.start());
        clock.advance(600);
        assert!(!clock.start());
        // The partial second survives the refused start.
        assert_eq!(clock.advance(400), 1);
    }

    #[test]
    fn stop_is_permanent() {
        let mut clock = SessionClock::new();
        clock.start();
        clock.advance(2_000);
        clock.stop();

        assert!(!clock.start());
        assert_eq!(clock.advance(10_000), 0);
        assert_eq!(clock.elapsed_seconds(), 2);
    }
}
