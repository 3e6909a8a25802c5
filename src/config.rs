//! Timing configuration for button handling.

use crate::time::TimeDuration;

/// Default debounce interval in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;

/// Default window in which a second tap turns into a double press.
pub const DEFAULT_DOUBLE_PRESS_MS: u64 = 500;

/// Default hold time at which a press counts as long.
pub const DEFAULT_LONG_PRESS_MS: u64 = 1000;

/// Default pause after a handled press, so mechanical bounce after a long
/// press is not picked up as a fresh press.
pub const DEFAULT_SETTLE_MS: u64 = 200;

/// Timing thresholds for debounce and press classification.
///
/// Immutable once built. Construction enforces
/// `debounce < double_press_window < long_press_threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfig<D: TimeDuration> {
    debounce: D,
    double_press_window: D,
    long_press_threshold: D,
    settle: D,
}

impl<D: TimeDuration> TimingConfig<D> {
    /// Creates a validated configuration with the default settle delay.
    ///
    /// # Errors
    /// * `DebounceNotBelowDoublePress` - `debounce >= double_press_window`
    /// * `DoublePressNotBelowLongPress` - `double_press_window >= long_press_threshold`
    pub fn new(
        debounce: D,
        double_press_window: D,
        long_press_threshold: D,
    ) -> Result<Self, ConfigError> {
        Self::builder()
            .debounce(debounce)
            .double_press_window(double_press_window)
            .long_press_threshold(long_press_threshold)
            .build()
    }

    /// Creates a builder preloaded with the crate defaults.
    pub fn builder() -> TimingConfigBuilder<D> {
        TimingConfigBuilder::new()
    }

    /// Returns a copy with a different settle delay.
    pub fn with_settle(mut self, settle: D) -> Self {
        self.settle = settle;
        self
    }

    /// Minimum time a raw reading must hold before it is believed.
    #[inline]
    pub fn debounce(&self) -> D {
        self.debounce
    }

    /// Maximum gap between two tap releases that still forms a double press.
    #[inline]
    pub fn double_press_window(&self) -> D {
        self.double_press_window
    }

    /// Hold duration from which a press is long.
    #[inline]
    pub fn long_press_threshold(&self) -> D {
        self.long_press_threshold
    }

    /// Blocking pause the polling loop takes after handling a press.
    #[inline]
    pub fn settle(&self) -> D {
        self.settle
    }
}

impl<D: TimeDuration> Default for TimingConfig<D> {
    fn default() -> Self {
        Self {
            debounce: D::from_millis(DEFAULT_DEBOUNCE_MS),
            double_press_window: D::from_millis(DEFAULT_DOUBLE_PRESS_MS),
            long_press_threshold: D::from_millis(DEFAULT_LONG_PRESS_MS),
            settle: D::from_millis(DEFAULT_SETTLE_MS),
        }
    }
}

/// Builder for [`TimingConfig`].
#[derive(Debug)]
pub struct TimingConfigBuilder<D: TimeDuration> {
    config: TimingConfig<D>,
}

impl<D: TimeDuration> TimingConfigBuilder<D> {
    /// Creates a builder starting from the default thresholds.
    pub fn new() -> Self {
        Self {
            config: TimingConfig::default(),
        }
    }

    /// Sets the debounce interval.
    pub fn debounce(mut self, debounce: D) -> Self {
        self.config.debounce = debounce;
        self
    }

    /// Sets the double-press window.
    pub fn double_press_window(mut self, window: D) -> Self {
        self.config.double_press_window = window;
        self
    }

    /// Sets the long-press threshold.
    pub fn long_press_threshold(mut self, threshold: D) -> Self {
        self.config.long_press_threshold = threshold;
        self
    }

    /// Sets the post-press settle delay.
    pub fn settle(mut self, settle: D) -> Self {
        self.config.settle = settle;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `DebounceNotBelowDoublePress` - debounce is not strictly shorter than the window
    /// * `DoublePressNotBelowLongPress` - the window is not strictly shorter than a long press
    pub fn build(self) -> Result<TimingConfig<D>, ConfigError> {
        let c = self.config;

        if c.debounce.as_millis() >= c.double_press_window.as_millis() {
            return Err(ConfigError::DebounceNotBelowDoublePress);
        }

        if c.double_press_window.as_millis() >= c.long_press_threshold.as_millis() {
            return Err(ConfigError::DoublePressNotBelowLongPress);
        }

        Ok(c)
    }
}

impl<D: TimeDuration> Default for TimingConfigBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Debounce interval is not shorter than the double-press window.
    DebounceNotBelowDoublePress,

    /// Double-press window is not shorter than the long-press threshold.
    DoublePressNotBelowLongPress,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::DebounceNotBelowDoublePress => {
                write!(f, "debounce interval must be shorter than the double-press window")
            }
            ConfigError::DoublePressNotBelowLongPress => {
                write!(f, "double-press window must be shorter than the long-press threshold")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
