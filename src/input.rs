//! Tap vs. hold press tracking
//!
//! Turns raw press/release edges into jump commands. A press released before
//! the hold threshold is a tap and yields a normal jump on release; a press
//! still held at the threshold yields a boosted jump at that moment. Either
//! way a single press produces at most one command.
//!
//! Time is injected as millisecond timestamps rather than read from a clock,
//! so the handler is fully deterministic under test. The browser driver feeds
//! it event timestamps on press edges and the animation-frame timestamp via
//! `poll`; whether a command actually jumps is decided by the world's
//! on-ground check, not here.

use crate::consts::HOLD_DELAY_MS;
use crate::sim::JumpStrength;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PressState {
    /// Nothing held
    Idle,
    /// Press active; becomes a boosted jump if still held at this timestamp
    Held { boost_at: f64 },
    /// Press active but its one command has already gone out
    Spent,
}

/// Press tracker with an explicit hold deadline
#[derive(Debug, Clone)]
pub struct InputHandler {
    state: PressState,
    threshold_ms: f64,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_threshold(HOLD_DELAY_MS)
    }

    /// Handler with a custom hold threshold
    pub fn with_threshold(threshold_ms: f64) -> Self {
        Self {
            state: PressState::Idle,
            threshold_ms,
        }
    }

    /// A press began; arms the hold deadline
    pub fn press_down(&mut self, now_ms: f64) {
        self.state = PressState::Held {
            boost_at: now_ms + self.threshold_ms,
        };
    }

    /// The press ended
    ///
    /// A tap yields a normal jump. A release past the threshold that `poll`
    /// never saw (no frame ran in between) still counts as a hold and yields
    /// the boosted jump instead of dropping it.
    pub fn press_up(&mut self, now_ms: f64) -> Option<JumpStrength> {
        let result = match self.state {
            PressState::Held { boost_at } => {
                if now_ms >= boost_at {
                    Some(JumpStrength::Boosted)
                } else {
                    Some(JumpStrength::Normal)
                }
            }
            PressState::Spent | PressState::Idle => None,
        };
        self.state = PressState::Idle;
        result
    }

    /// Frame-cadence check of the hold deadline
    ///
    /// Fires the boosted jump the first time it is called past the deadline
    /// while the press is still active, and never again for that press.
    pub fn poll(&mut self, now_ms: f64) -> Option<JumpStrength> {
        match self.state {
            PressState::Held { boost_at } if now_ms >= boost_at => {
                self.state = PressState::Spent;
                Some(JumpStrength::Boosted)
            }
            _ => None,
        }
    }

    /// Drop any in-flight press, e.g. across a run restart
    pub fn clear(&mut self) {
        self.state = PressState::Idle;
    }
}
