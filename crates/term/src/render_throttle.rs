//! Frame gating: redraw when something visible changed, plus a slow refresh.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::GameSnapshot;
use crate::game_view::Viewport;
use crate::types::CardId;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Render on the first frame, on any fingerprint change, and otherwise at
    /// most once per `refresh_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = !self.has_rendered
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.refresh_interval_ms;
        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }

    /// Force the next `should_render` to return true.
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }
}

/// Hash of everything the game view draws.
///
/// The rollback countdown is left out: it is not drawn.
pub fn fingerprint(snap: &GameSnapshot, cursor: Option<CardId>, viewport: Viewport) -> u64 {
    let mut h = DefaultHasher::new();
    snap.cards.hash(&mut h);
    snap.phase.hash(&mut h);
    snap.moves.hash(&mut h);
    snap.matched_pairs.hash(&mut h);
    snap.elapsed_seconds.hash(&mut h);
    cursor.hash(&mut h);
    viewport.width.hash(&mut h);
    viewport.height.hash(&mut h);
    h.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_renders() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1));
    }

    #[test]
    fn unchanged_frames_are_throttled() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1));
        assert!(!t.should_render(10, 1));
        assert!(!t.should_render(249, 1));
        assert!(t.should_render(250, 1));
    }

    #[test]
    fn change_renders_immediately() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1));
        assert!(t.should_render(1, 2));
    }

    #[test]
    fn invalidate_forces_a_frame() {
        let mut t = RenderThrottle::new(250);
        t.should_render(0, 1);
        t.invalidate();
        assert!(t.should_render(1, 1));
    }

    #[test]
    fn rollback_countdown_does_not_change_fingerprint() {
        let vp = Viewport::new(80, 24);
        let mut snap = GameSnapshot::default();
        let a = fingerprint(&snap, Some(0), vp);
        snap.rollback_ms = Some(500);
        assert_eq!(fingerprint(&snap, Some(0), vp), a);
        snap.moves = 1;
        assert_ne!(fingerprint(&snap, Some(0), vp), a);
        assert_ne!(fingerprint(&GameSnapshot::default(), Some(1), vp), a);
    }
}
