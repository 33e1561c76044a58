//! Cosmetic status-message cycling for an outstanding analysis call.

use std::time::{Duration, Instant};

/// Messages shown while the analysis call is in flight, in rotation order.
pub const LOADING_MESSAGES: [&str; 5] = [
    "Parsing birth coordinates...",
    "Running Gemini Generative AI protocols...",
    "Searching for statistical anomalies...",
    "Pretending to do complex math...",
    "Finalizing report...",
];

/// How long each loading message stays on screen.
pub const MESSAGE_INTERVAL: Duration = Duration::from_millis(800);

/// Repeating status-message cycle for the loading indicator.
///
/// Purely cosmetic. The ticker is owned by the loading sub-state, so its
/// lifetime is tied to the outstanding call: dropping the loading state
/// releases the ticker, and both settle paths do that before the outcome
/// is applied. At most one ticker is ever live.
#[derive(Debug)]
pub struct ProgressTicker {
    index: usize,
    next_rotation: Instant,
}

impl ProgressTicker {
    pub fn new(now: Instant) -> Self {
        Self {
            index: 0,
            next_rotation: now + MESSAGE_INTERVAL,
        }
    }

    /// The message to display right now.
    pub fn current(&self) -> &'static str {
        LOADING_MESSAGES[self.index]
    }

    /// Advances the rotation for every full interval that has elapsed.
    pub fn on_tick(&mut self, now: Instant) {
        while now >= self.next_rotation {
            self.index = (self.index + 1) % LOADING_MESSAGES.len();
            self.next_rotation += MESSAGE_INTERVAL;
        }
    }
}
