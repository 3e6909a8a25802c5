//! Display mode state machine.
//!
//! Double presses step through the active modes, long presses switch the
//! indicator off and back on. Transitions are a pure `(mode, press) -> mode`
//! table and do not depend on how [`DisplayMode`] is encoded.

use crate::types::{DisplayMode, PressKind};

/// Active modes in the order a double press visits them.
pub const MODE_CYCLE: [DisplayMode; 4] = [
    DisplayMode::TwoAxis,
    DisplayMode::XOnly,
    DisplayMode::YOnly,
    DisplayMode::RawData,
];

impl DisplayMode {
    /// Returns the next mode in the double-press cycle.
    ///
    /// `Off` is not part of the cycle and maps to itself.
    pub fn next_in_cycle(self) -> Self {
        match self {
            DisplayMode::TwoAxis => DisplayMode::XOnly,
            DisplayMode::XOnly => DisplayMode::YOnly,
            DisplayMode::YOnly => DisplayMode::RawData,
            DisplayMode::RawData => DisplayMode::TwoAxis,
            DisplayMode::Off => DisplayMode::Off,
        }
    }

    /// Returns true for every mode except `Off`.
    #[inline]
    pub fn is_powered(self) -> bool {
        self != DisplayMode::Off
    }
}

/// Transition function for the mode state machine.
///
/// Powering back on always lands on `TwoAxis`; the mode active before the
/// power-off is not restored.
pub fn transition(mode: DisplayMode, press: PressKind) -> DisplayMode {
    match (mode, press) {
        (_, PressKind::None | PressKind::Single) => mode,
        (DisplayMode::Off, PressKind::Double) => DisplayMode::Off,
        (DisplayMode::Off, PressKind::Long) => DisplayMode::TwoAxis,
        (_, PressKind::Long) => DisplayMode::Off,
        (active, PressKind::Double) => active.next_in_cycle(),
    }
}

/// Holds the current display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeMachine {
    mode: DisplayMode,
}

impl ModeMachine {
    /// Creates a machine in the initial, powered `TwoAxis` mode.
    pub fn new() -> Self {
        Self {
            mode: DisplayMode::TwoAxis,
        }
    }

    /// Applies a classified press and returns the resulting mode.
    pub fn apply(&mut self, press: PressKind) -> DisplayMode {
        self.mode = transition(self.mode, press);
        self.mode
    }

    /// Returns the current mode.
    #[inline]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Returns the power flag toggled by long presses.
    #[inline]
    pub fn is_powered(&self) -> bool {
        self.mode.is_powered()
    }
}

impl Default for ModeMachine {
    fn default() -> Self {
        Self::new()
    }
}
