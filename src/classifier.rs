//! Press classification with a deferred single-tap decision.
//!
//! A short tap cannot be reported as [`PressKind::Single`] right away because
//! it might be the first half of a double press. The classifier parks it in a
//! single pending-timer slot and reports it only once the double-press window
//! has passed without a second tap.

use crate::config::TimingConfig;
use crate::time::{TimeDuration, TimeInstant};
use crate::types::{PressEvent, PressKind};

/// Outcome of classifying one release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<I> {
    /// A press was recognised and should be delivered.
    Emitted(PressEvent<I>),
    /// A short tap is parked until the double-press window closes.
    Deferred,
}

/// Classifies releases into single, double and long presses.
#[derive(Debug, Clone)]
pub struct PressClassifier<I: TimeInstant> {
    double_press_window: I::Duration,
    long_press_threshold: I::Duration,
    pending_tap: Option<I>,
}

impl<I: TimeInstant> PressClassifier<I> {
    /// Creates a classifier using the thresholds from `config`.
    pub fn new(config: &TimingConfig<I::Duration>) -> Self {
        Self {
            double_press_window: config.double_press_window(),
            long_press_threshold: config.long_press_threshold(),
            pending_tap: None,
        }
    }

    /// Classifies a release after the button was held for `held`.
    ///
    /// Long presses are reported at once and leave any pending tap untouched,
    /// so a tap followed quickly by a long press yields both a `Long` and the
    /// tap's `Single`.
    pub fn classify_release(&mut self, held: I::Duration, now: I) -> Classification<I> {
        if held.as_millis() >= self.long_press_threshold.as_millis() {
            return Classification::Emitted(PressEvent::new(PressKind::Long, now));
        }

        match self.pending_tap {
            Some(first) if now.millis_since(first) <= self.double_press_window.as_millis() => {
                self.pending_tap = None;
                Classification::Emitted(PressEvent::new(PressKind::Double, now))
            }
            Some(_) => {
                // The previous tap expired without being polled. Report it
                // now and park the new one in its place.
                self.pending_tap = Some(now);
                Classification::Emitted(PressEvent::new(PressKind::Single, now))
            }
            None => {
                self.pending_tap = Some(now);
                Classification::Deferred
            }
        }
    }

    /// Reports the pending tap as a single press once its window has closed.
    pub fn resolve_pending(&mut self, now: I) -> Option<PressEvent<I>> {
        let released = self.pending_tap?;
        if now.millis_since(released) <= self.double_press_window.as_millis() {
            return None;
        }

        self.pending_tap = None;
        Some(PressEvent::new(PressKind::Single, now))
    }

    /// Returns true while a tap is waiting for its window to close.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending_tap.is_some()
    }
}
