//! Shared test infrastructure for tilt-indicator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use tilt_indicator::{
    AccelSample, Accelerometer, ButtonInput, IndicatorDisplay, Level, PressEvent, PressKind,
    TimeDuration, TimeInstant, TimeSource, TimingConfig,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, millis: u64) {
        self.current_time.set(TestInstant(millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Accelerometer
// ============================================================================

/// Accelerometer returning whatever sample was last set
pub struct MockAccelerometer {
    sample: AccelSample,
    reads: usize,
}

impl MockAccelerometer {
    pub fn new(sample: AccelSample) -> Self {
        Self { sample, reads: 0 }
    }

    /// Flat on the table, 1 g on Z
    pub fn flat() -> Self {
        Self::new(AccelSample::new(0.0, 0.0, 1.0))
    }

    pub fn set(&mut self, sample: AccelSample) {
        self.sample = sample;
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl Accelerometer for MockAccelerometer {
    fn read(&mut self) -> AccelSample {
        self.reads += 1;
        self.sample
    }
}

// ============================================================================
// Recording Display
// ============================================================================

/// One call made on the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Clear,
    Pixel(i32, i32, u8),
    Text(i32, i32, String),
    Present,
}

/// Display that records every call for inspection
#[derive(Default)]
pub struct RecordingDisplay {
    calls: Vec<DisplayCall>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DisplayCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DisplayCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn count(&self, wanted: &DisplayCall) -> usize {
        self.calls.iter().filter(|c| *c == wanted).count()
    }

    pub fn pixels(&self) -> Vec<(i32, i32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DisplayCall::Pixel(x, y, _) => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(i32, i32, String)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DisplayCall::Text(x, y, t) => Some((*x, *y, t.clone())),
                _ => None,
            })
            .collect()
    }
}

impl IndicatorDisplay for RecordingDisplay {
    fn clear(&mut self) {
        self.calls.push(DisplayCall::Clear);
    }

    fn set_pixel(&mut self, x: i32, y: i32, intensity: u8) {
        self.calls.push(DisplayCall::Pixel(x, y, intensity));
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.calls.push(DisplayCall::Text(x, y, text.to_string()));
    }

    fn present(&mut self) {
        self.calls.push(DisplayCall::Present);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// 50 ms debounce, 500 ms double-press window, 1000 ms long press
pub fn test_config() -> TimingConfig<TestDuration> {
    TimingConfig::new(TestDuration(50), TestDuration(500), TestDuration(1000)).unwrap()
}

pub fn test_input() -> ButtonInput<TestInstant> {
    ButtonInput::new(test_config())
}

/// Feeds a clean press of `held` ms starting at the current time.
///
/// The line is polled every 10 ms while held, and again for 100 ms after
/// release so the release gets past debounce. Returns every event polled.
pub fn press(
    input: &ButtonInput<TestInstant>,
    timer: &MockTimeSource,
    held: u64,
) -> Vec<PressEvent<TestInstant>> {
    let mut events = Vec::new();

    input.on_raw_transition(Level::Pressed, timer.now());
    let mut elapsed = 0;
    while elapsed < held {
        let step = (held - elapsed).min(10);
        timer.advance(step);
        elapsed += step;
        events.extend(input.poll(timer));
    }

    input.on_raw_transition(Level::Released, timer.now());
    for _ in 0..10 {
        timer.advance(10);
        events.extend(input.poll(timer));
    }

    events
}

/// Polls every 10 ms for `millis` ms, returning every event.
pub fn idle(
    input: &ButtonInput<TestInstant>,
    timer: &MockTimeSource,
    millis: u64,
) -> Vec<PressEvent<TestInstant>> {
    let mut events = Vec::new();
    let mut elapsed = 0;
    while elapsed < millis {
        let step = (millis - elapsed).min(10);
        timer.advance(step);
        elapsed += step;
        events.extend(input.poll(timer));
    }
    events
}

pub fn kinds(events: &[PressEvent<TestInstant>]) -> Vec<PressKind> {
    events.iter().map(|e| e.kind).collect()
}
