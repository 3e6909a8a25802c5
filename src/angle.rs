//! Tilt angles from a 3-axis accelerometer.

use core::f32::consts::PI;

use crate::types::{AccelSample, Orientation};

/// Trait for abstracting the accelerometer.
///
/// Implement this for your sensor driver. Reads are blocking and assumed to
/// succeed once the sensor has been brought up; handle bus errors inside the
/// implementation (for example by returning the previous sample).
pub trait Accelerometer {
    /// Returns the latest acceleration on all three axes.
    fn read(&mut self) -> AccelSample;
}

const RAD_TO_DEG: f32 = 180.0 / PI;

impl Orientation {
    /// Derives both tilt angles from one sample.
    ///
    /// Each angle is measured between its axis and the plane of the other two,
    /// so the units of the sample cancel out.
    pub fn from_sample(sample: AccelSample) -> Self {
        let AccelSample { x, y, z } = sample;
        Self {
            angle_x: libm::atan2f(x, libm::sqrtf(y * y + z * z)) * RAD_TO_DEG,
            angle_y: libm::atan2f(y, libm::sqrtf(x * x + z * z)) * RAD_TO_DEG,
        }
    }
}

impl From<AccelSample> for Orientation {
    fn from(sample: AccelSample) -> Self {
        Orientation::from_sample(sample)
    }
}
