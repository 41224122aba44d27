//! One-shot tick scheduling
//!
//! The game loop fires a single tick, runs the step, then re-arms the clock
//! with whatever interval the game state asks for next. A speed change
//! therefore applies from the following tick, never retroactively.

use std::pin::Pin;
use std::time::Duration;

use tokio::time::{Instant, Sleep, sleep};

pub struct TickClock {
    sleep: Pin<Box<Sleep>>,
}

impl TickClock {
    /// Create a clock armed to fire once after `first`
    pub fn new(first: Duration) -> Self {
        Self {
            sleep: Box::pin(sleep(first)),
        }
    }

    /// Re-arm the clock to fire once, `after` from now
    pub fn schedule(&mut self, after: Duration) {
        self.sleep.as_mut().reset(Instant::now() + after);
    }

    pub fn deadline(&self) -> Instant {
        self.sleep.deadline()
    }

    /// Wait until the armed deadline.
    ///
    /// Resolves immediately if the deadline already passed and the clock was
    /// not re-armed.
    pub async fn fired(&mut self) {
        self.sleep.as_mut().await
    }
}
