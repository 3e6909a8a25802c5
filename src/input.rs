//! Interrupt-safe button front end.
//!
//! [`ButtonInput`] is meant to live in a `static` (or a `StaticCell`) shared
//! by the pin interrupt and the main loop:
//!
//! - the interrupt calls [`ButtonInput::on_raw_transition`] on every edge;
//! - the loop calls [`ButtonInput::poll`] once per cycle.
//!
//! Both entry points take a critical section for the whole update, so the
//! detector and classifier never see an interleaved half-update.

use core::cell::RefCell;
use critical_section::Mutex;

use crate::classifier::{Classification, PressClassifier};
use crate::config::TimingConfig;
use crate::edge::{EdgeDetector, Transition};
use crate::slot::PressSlot;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{Level, PressEvent};

struct InputState<I: TimeInstant> {
    detector: EdgeDetector<I>,
    classifier: PressClassifier<I>,
    backlog: Option<PressEvent<I>>,
}

/// Debounces and classifies one button, shared between interrupt and loop.
pub struct ButtonInput<I: TimeInstant> {
    config: TimingConfig<I::Duration>,
    state: Mutex<RefCell<InputState<I>>>,
    slot: PressSlot<I>,
}

impl<I: TimeInstant> ButtonInput<I> {
    /// Creates an input with the line released and nothing pending.
    pub fn new(config: TimingConfig<I::Duration>) -> Self {
        Self {
            state: Mutex::new(RefCell::new(InputState {
                detector: EdgeDetector::new(config.debounce()),
                classifier: PressClassifier::new(&config),
                backlog: None,
            })),
            slot: PressSlot::new(),
            config,
        }
    }

    /// Interrupt entry point: the line changed to `level` at `now`.
    ///
    /// Runs in bounded time and never blocks.
    pub fn on_raw_transition(&self, level: Level, now: I) {
        critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            let transition = state.detector.observe(level, now);
            self.handle_transition(&mut state, transition);
        });
    }

    /// Loop entry point: advances timers and takes the pending press, if any.
    ///
    /// The clock is read inside the critical section so an edge interrupt
    /// cannot slip a newer timestamp in between reading the time and using it.
    pub fn poll<T: TimeSource<I>>(&self, time_source: &T) -> Option<PressEvent<I>> {
        critical_section::with(|cs| {
            let now = time_source.now();
            let mut state = self.state.borrow(cs).borrow_mut();

            if let Some(waiting) = state.backlog.take() {
                if let Err(waiting) = self.slot.offer(waiting) {
                    state.backlog = Some(waiting);
                }
            }

            let transition = state.detector.settle(now);
            self.handle_transition(&mut state, transition);

            if let Some(event) = state.classifier.resolve_pending(now) {
                self.publish(&mut state, event);
            }

            self.slot.take()
        })
    }

    /// Returns the debounced button level.
    pub fn level(&self) -> Level {
        critical_section::with(|cs| self.state.borrow(cs).borrow().detector.state())
    }

    /// Returns true while a short tap is waiting for the double-press window.
    pub fn has_pending_tap(&self) -> bool {
        critical_section::with(|cs| self.state.borrow(cs).borrow().classifier.has_pending())
    }

    /// Returns the timing configuration this input was built with.
    pub fn config(&self) -> &TimingConfig<I::Duration> {
        &self.config
    }

    fn handle_transition(&self, state: &mut InputState<I>, transition: Option<Transition<I>>) {
        match transition {
            Some(Transition::Pressed { .. }) => {
                trace!("button down");
            }
            Some(Transition::Released { held, at }) => {
                trace!("button up after {:?} ms", held.as_millis());
                if let Classification::Emitted(event) = state.classifier.classify_release(held, at)
                {
                    self.publish(state, event);
                }
            }
            None => {}
        }
    }

    fn publish(&self, state: &mut InputState<I>, event: PressEvent<I>) {
        if state.backlog.is_some() {
            warn!("press dropped, {:?} still unconsumed", event.kind);
            return;
        }

        if let Err(event) = self.slot.offer(event) {
            debug!("slot busy, holding {:?} back", event.kind);
            state.backlog = Some(event);
        }
    }
}
