//! Audio cues rendered as terminal bells.
//!
//! Playback failures are logged and otherwise ignored; the game never learns
//! whether a cue was heard.

use std::io::{self, Write};

use tracing::debug;

use crate::types::Cue;

const BELL: u8 = 0x07;

pub struct CuePlayer<W: Write = io::Stdout> {
    out: W,
    muted: bool,
}

impl CuePlayer<io::Stdout> {
    pub fn stdout(muted: bool) -> Self {
        Self::new(io::stdout(), muted)
    }
}

impl<W: Write> CuePlayer<W> {
    pub fn new(out: W, muted: bool) -> Self {
        Self { out, muted }
    }

    /// Bells per cue. Flips are silent; the terminal has only one sound.
    pub fn bells(cue: Cue) -> usize {
        match cue {
            Cue::Flip => 0,
            Cue::Match => 1,
            Cue::Victory => 2,
        }
    }

    pub fn play(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        let n = Self::bells(cue);
        if n == 0 {
            return;
        }
        let bells = [BELL; 2];
        if let Err(e) = self.out.write_all(&bells[..n]).and_then(|_| self.out.flush()) {
            debug!(error = %e, ?cue, "cue playback failed");
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
