//! Two-stage debounce of the raw button line.
//!
//! [`EdgeDetector`] is fed every raw reading it can see: edges from the pin
//! interrupt through [`EdgeDetector::observe`], and a periodic re-read of the
//! last level through [`EdgeDetector::settle`]. A reading is only believed
//! once it has held for longer than the debounce interval.

use crate::time::{TimeDuration, TimeInstant};
use crate::types::Level;

/// A debounced change of the button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<I: TimeInstant> {
    /// The button went down.
    Pressed {
        /// When the press was accepted.
        at: I,
    },
    /// The button came back up.
    Released {
        /// How long the button was held.
        held: I::Duration,
        /// When the release was accepted.
        at: I,
    },
}

/// Debounces raw readings into [`Transition`]s.
///
/// Does no blocking and constant work per call, so it is safe to drive from an
/// interrupt handler.
#[derive(Debug, Clone)]
pub struct EdgeDetector<I: TimeInstant> {
    debounce: I::Duration,
    last_reading: Level,
    state: Level,
    last_change: Option<I>,
    press_start: Option<I>,
}

impl<I: TimeInstant> EdgeDetector<I> {
    /// Creates a detector with the line released.
    pub fn new(debounce: I::Duration) -> Self {
        Self {
            debounce,
            last_reading: Level::Released,
            state: Level::Released,
            last_change: None,
            press_start: None,
        }
    }

    /// Feeds one raw reading taken at `now`.
    ///
    /// A reading that differs from the previous one restarts the debounce
    /// timer. The debounced state only follows the raw reading once the
    /// reading has been stable for strictly longer than the debounce interval.
    pub fn observe(&mut self, level: Level, now: I) -> Option<Transition<I>> {
        if level != self.last_reading {
            self.last_change = Some(now);
        }
        self.last_reading = level;

        let since = self.last_change?;
        if now.millis_since(since) <= self.debounce.as_millis() {
            return None;
        }

        if level == self.state {
            return None;
        }
        self.state = level;

        match level {
            Level::Pressed => {
                self.press_start = Some(now);
                Some(Transition::Pressed { at: now })
            }
            Level::Released => {
                let held = self
                    .press_start
                    .take()
                    .map(|start| now.duration_since(start))
                    .unwrap_or(I::Duration::ZERO);
                Some(Transition::Released { held, at: now })
            }
        }
    }

    /// Re-observes the last raw reading.
    ///
    /// Edge interrupts stop once the contacts stop bouncing, so the polling
    /// loop calls this each cycle to let a quiet line stabilize.
    #[inline]
    pub fn settle(&mut self, now: I) -> Option<Transition<I>> {
        self.observe(self.last_reading, now)
    }

    /// Returns the debounced button state.
    #[inline]
    pub fn state(&self) -> Level {
        self.state
    }

    /// Returns the most recent raw reading.
    #[inline]
    pub fn last_reading(&self) -> Level {
        self.last_reading
    }
}
