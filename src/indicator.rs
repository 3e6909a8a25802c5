//! The polling-loop half of the tilt indicator.
//!
//! Provides [`TiltIndicator`], which owns the display mode, reads the
//! accelerometer and redraws the panel once per [`service`](TiltIndicator::service)
//! call. Button presses arrive through a shared [`ButtonInput`].

use crate::angle::Accelerometer;
use crate::input::ButtonInput;
use crate::mode::ModeMachine;
use crate::render::{self, IndicatorDisplay};
use crate::time::{TimeInstant, TimeSource};
use crate::types::{AccelSample, DisplayMode, Orientation, PressEvent};

/// What the caller should do before the next service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleTiming<D> {
    /// Nothing was pressed. Service again at your frame rate.
    Continue,

    /// A press was handled. Block for this long before servicing again so
    /// contact bounce after the press is not read as a new press.
    Settle(D),
}

/// Runs the tilt indicator's polling cycle.
///
/// # Type Parameters
/// * `'t` - Lifetime of the shared button input and time source
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `A` - Accelerometer implementation type
/// * `D` - Display implementation type
pub struct TiltIndicator<'t, I, T, A, D>
where
    I: TimeInstant,
    T: TimeSource<I>,
    A: Accelerometer,
    D: IndicatorDisplay,
{
    input: &'t ButtonInput<I>,
    time_source: &'t T,
    accelerometer: A,
    display: D,
    modes: ModeMachine,
    sample: AccelSample,
    orientation: Orientation,
}

impl<'t, I, T, A, D> TiltIndicator<'t, I, T, A, D>
where
    I: TimeInstant,
    T: TimeSource<I>,
    A: Accelerometer,
    D: IndicatorDisplay,
{
    /// Creates an indicator in the powered `TwoAxis` mode.
    ///
    /// Nothing is drawn until the first [`service`](Self::service) call.
    pub fn new(input: &'t ButtonInput<I>, time_source: &'t T, accelerometer: A, display: D) -> Self {
        Self {
            input,
            time_source,
            accelerometer,
            display,
            modes: ModeMachine::new(),
            sample: AccelSample::default(),
            orientation: Orientation::default(),
        }
    }

    /// Runs one polling cycle.
    ///
    /// Takes at most one press from the input and applies it to the mode,
    /// reads the accelerometer, then clears, draws and presents one frame.
    /// Angles are recomputed even while off.
    pub fn service(&mut self) -> CycleTiming<I::Duration> {
        let press = self.input.poll(self.time_source);
        if let Some(event) = press {
            self.handle_press(event);
        }

        self.sample = self.accelerometer.read();
        self.orientation = Orientation::from_sample(self.sample);

        let plan = render::select(self.modes.mode(), self.orientation, self.sample);
        self.display.clear();
        render::render(&plan, &mut self.display);
        self.display.present();

        match press {
            Some(_) => CycleTiming::Settle(self.input.config().settle()),
            None => CycleTiming::Continue,
        }
    }

    fn handle_press(&mut self, event: PressEvent<I>) {
        let before = self.modes.mode();
        let after = self.modes.apply(event.kind);
        if before != after {
            info!("{:?} press: {:?} -> {:?}", event.kind, before, after);
        } else {
            info!("{:?} press: staying in {:?}", event.kind, after);
        }
    }

    /// Returns the current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.modes.mode()
    }

    /// Returns true unless switched off by a long press.
    pub fn is_powered(&self) -> bool {
        self.modes.is_powered()
    }

    /// Returns the angles computed in the last cycle.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the accelerometer sample read in the last cycle.
    pub fn last_sample(&self) -> AccelSample {
        self.sample
    }

    /// Returns a reference to the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns a mutable reference to the accelerometer.
    pub fn accelerometer_mut(&mut self) -> &mut A {
        &mut self.accelerometer
    }

    /// Consumes the indicator and hands back the drivers.
    pub fn release(self) -> (A, D) {
        (self.accelerometer, self.display)
    }
}
