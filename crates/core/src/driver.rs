//! Frame driver - turns a clock into `GameState::tick` calls.
//!
//! The session only understands elapsed play time. Whoever owns the clock (terminal loop,
//! test harness with synthetic timestamps) feeds absolute milliseconds here.

use crate::game_state::GameState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameDriver {
    last_ms: Option<u64>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance `game` to `now_ms`. The first call only records the timestamp.
    ///
    /// Timestamps that go backwards count as zero elapsed time.
    pub fn advance(&mut self, game: &mut GameState, now_ms: u64) -> bool {
        let elapsed = self.elapsed(now_ms);
        if elapsed == 0 {
            return false;
        }
        game.tick(elapsed)
    }

    /// Milliseconds since the previous timestamp, clamped to `u32`
    pub fn elapsed(&mut self, now_ms: u64) -> u32 {
        let elapsed = match self.last_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_ms = Some(now_ms.max(self.last_ms.unwrap_or(0)));
        elapsed.min(u32::MAX as u64) as u32
    }

    /// Forget the last timestamp (after a pause or a restart)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn last_ms(&self) -> Option<u64> {
        self.last_ms
    }
}
