#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonInput`**: Debounces and classifies one button; shared between the pin interrupt and the main loop
//! - **`EdgeDetector`**: Two-stage debounce turning raw readings into press/release transitions
//! - **`PressClassifier`**: Turns releases into `Single`, `Double` or `Long` presses, deferring short taps
//! - **`PressSlot`**: Single-slot, swap-and-clear handoff for the pending `PressEvent`
//! - **`ModeMachine`**: Display mode state machine driven by classified presses
//! - **`Orientation`**: Tilt angles derived from an `AccelSample`
//! - **`RenderPlan`**: What to draw for a mode, produced by `render::select`
//! - **`TiltIndicator`**: Runs one polling cycle: poll input, update mode, read sensor, redraw
//! - **`Accelerometer`** / **`IndicatorDisplay`**: Traits to implement for your sensor and panel
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! All timing is in milliseconds through the [`TimeDuration`] and
//! [`TimeInstant`] traits.

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

pub mod time;
pub mod types;
pub mod config;
pub mod edge;
pub mod classifier;
pub mod slot;
pub mod input;
pub mod mode;
pub mod angle;
pub mod render;
pub mod indicator;
#[cfg(feature = "embedded-graphics")]
pub mod graphics;

pub use angle::Accelerometer;
pub use classifier::{Classification, PressClassifier};
pub use config::{ConfigError, TimingConfig, TimingConfigBuilder};
pub use edge::{EdgeDetector, Transition};
pub use indicator::{CycleTiming, TiltIndicator};
pub use input::ButtonInput;
pub use mode::{ModeMachine, MODE_CYCLE};
pub use render::{Anchor, Axis, Indicator, IndicatorDisplay, IndicatorSize, RenderPlan};
pub use slot::PressSlot;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{AccelSample, DisplayMode, Level, Orientation, PressEvent, PressKind};
#[cfg(feature = "embedded-graphics")]
pub use graphics::GraphicsDisplay;
