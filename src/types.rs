//! Core value types shared by the input and display halves of the crate.

/// Debounced or raw level of the button line.
///
/// The line is wired active-high with a pull-down, so a high reading is
/// [`Level::Pressed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Line low, button up.
    #[default]
    Released,
    /// Line high, button down.
    Pressed,
}

impl Level {
    /// Maps a raw active-high pin reading to a level.
    #[inline]
    pub fn from_active_high(is_high: bool) -> Self {
        if is_high {
            Level::Pressed
        } else {
            Level::Released
        }
    }

    /// Returns true for [`Level::Pressed`].
    #[inline]
    pub fn is_pressed(self) -> bool {
        self == Level::Pressed
    }
}

/// Classified kind of a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    /// Nothing to report.
    #[default]
    None,
    /// A short tap with no follow-up tap inside the double-press window.
    Single,
    /// Two short taps released within the double-press window.
    Double,
    /// A press held at least the long-press threshold.
    Long,
}

/// A classified press and the instant it was classified.
///
/// Built once by the classifier and handed to the polling loop as a whole
/// value; it is never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressEvent<I> {
    /// What kind of press this was.
    pub kind: PressKind,

    /// When the classification was made.
    pub at: I,
}

impl<I> PressEvent<I> {
    /// Creates a new press event.
    #[inline]
    pub fn new(kind: PressKind, at: I) -> Self {
        Self { kind, at }
    }
}

/// What the indicator is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Powered down. An idle glyph is shown and angles are ignored.
    Off,
    /// Indicators for both tilt axes.
    #[default]
    TwoAxis,
    /// Indicator for the X tilt only.
    XOnly,
    /// Indicator for the Y tilt only.
    YOnly,
    /// Raw accelerometer readings as text.
    RawData,
}

/// One accelerometer reading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelSample {
    /// Acceleration along X.
    pub x: f32,
    /// Acceleration along Y.
    pub y: f32,
    /// Acceleration along Z, about 1 g when lying flat.
    pub z: f32,
}

impl AccelSample {
    /// Creates a sample from the three axis readings.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Tilt angles derived from one [`AccelSample`], in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Orientation {
    /// Tilt of the X axis against gravity.
    pub angle_x: f32,

    /// Tilt of the Y axis against gravity.
    pub angle_y: f32,
}
