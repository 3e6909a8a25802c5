//! Decides what the display shows for a mode and orientation.
//!
//! [`select`] turns the current state into a [`RenderPlan`]; [`render`] walks
//! the plan and issues pixel and text calls on an [`IndicatorDisplay`]. The
//! geometry targets a 64x48 monochrome panel.

use core::fmt::Write;
use heapless::{String, Vec};

use crate::types::{AccelSample, DisplayMode, Orientation};

/// Trait for abstracting the pixel display.
///
/// Implement this for your display driver. Drawing calls go to a frame buffer
/// that [`present`](IndicatorDisplay::present) pushes to the panel. Handle
/// any bus errors internally - these methods cannot fail.
pub trait IndicatorDisplay {
    /// Blanks the frame buffer.
    fn clear(&mut self);

    /// Sets one pixel. An intensity of 0 is off.
    fn set_pixel(&mut self, x: i32, y: i32, intensity: u8);

    /// Draws a line of text with its top-left corner at (`x`, `y`).
    fn draw_text(&mut self, x: i32, y: i32, text: &str);

    /// Pushes the frame buffer to the panel.
    fn present(&mut self);
}

/// Panel width in pixels.
pub const DISPLAY_WIDTH: i32 = 64;

/// Panel height in pixels.
pub const DISPLAY_HEIGHT: i32 = 48;

/// Tilt, in degrees, above which the large indicator is drawn.
pub const LARGE_ANGLE_DEG: f32 = 0.5;

/// Intensity used for indicator pixels.
pub const INDICATOR_INTENSITY: u8 = 255;

/// Text shown while the indicator is off.
pub const IDLE_TEXT: &str = "OFF";

/// Top-left corner of [`IDLE_TEXT`].
pub const IDLE_POSITION: (i32, i32) = (5, 5);

/// Top-left corners of the raw X, Y and Z text lines.
pub const RAW_LINE_POSITIONS: [(i32, i32); 3] = [(0, 0), (0, 10), (0, 20)];

/// Capacity of one raw-data line: a label plus `f32::MIN` at two decimals.
pub const RAW_LINE_CAPACITY: usize = 48;

// Triangle glyph as (depth, spread) offsets: rows of width 1, 3, 5 and 7.
const GLYPH_DEPTH: [i32; 16] = [0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3];
const GLYPH_SPREAD: [i32; 16] = [0, -1, 0, 1, -2, -1, 0, 1, 2, -3, -2, -1, 0, 1, 2, 3];

// The small glyph is the first two rows.
const SMALL_GLYPH_POINTS: usize = 4;

/// Which tilt axis an indicator shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Tilt of the sensor's X axis, drawn from the left or right edge.
    X,
    /// Tilt of the sensor's Y axis, drawn from the top or bottom edge.
    Y,
}

/// Indicator glyph size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorSize {
    /// Tilt within the dead band.
    Small,
    /// Tilt beyond [`LARGE_ANGLE_DEG`].
    Large,
}

/// Which panel edge an indicator is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Anchor {
    /// Angle above zero: left edge for X, top edge for Y.
    Positive,
    /// Angle zero or below: right edge for X, bottom edge for Y.
    Negative,
}

/// One tilt indicator glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Indicator {
    /// Axis whose tilt this glyph shows.
    pub axis: Axis,
    /// Glyph size, chosen from the tilt magnitude.
    pub size: IndicatorSize,
    /// Panel edge the glyph grows from, chosen from the tilt sign.
    pub anchor: Anchor,
}

impl Indicator {
    /// Picks size and anchor for a tilt of `angle` degrees on `axis`.
    pub fn for_angle(axis: Axis, angle: f32) -> Self {
        let size = if libm::fabsf(angle) > LARGE_ANGLE_DEG {
            IndicatorSize::Large
        } else {
            IndicatorSize::Small
        };
        let anchor = if angle > 0.0 {
            Anchor::Positive
        } else {
            Anchor::Negative
        };

        Self { axis, size, anchor }
    }

    /// Returns the pixels covered by this glyph.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32)> {
        let (origin_x, origin_y, dir_x, dir_y) = self.placement();
        let count = match self.size {
            IndicatorSize::Small => SMALL_GLYPH_POINTS,
            IndicatorSize::Large => GLYPH_DEPTH.len(),
        };
        let swap = self.axis == Axis::Y;

        GLYPH_DEPTH
            .iter()
            .zip(GLYPH_SPREAD.iter())
            .take(count)
            .map(move |(&depth, &spread)| {
                // X glyphs grow horizontally from a side edge, Y glyphs
                // vertically from the top or bottom edge.
                let (dx, dy) = if swap { (spread, depth) } else { (depth, spread) };
                (origin_x + dir_x * dx, origin_y + dir_y * dy)
            })
    }

    fn placement(&self) -> (i32, i32, i32, i32) {
        let mid_x = DISPLAY_WIDTH / 2 - 1;
        let mid_y = DISPLAY_HEIGHT / 2 - 1;
        match (self.axis, self.anchor) {
            (Axis::X, Anchor::Positive) => (0, mid_y, 1, 1),
            (Axis::X, Anchor::Negative) => (DISPLAY_WIDTH - 1, mid_y, -1, 1),
            (Axis::Y, Anchor::Positive) => (mid_x, 0, 1, 1),
            (Axis::Y, Anchor::Negative) => (mid_x, DISPLAY_HEIGHT - 1, 1, -1),
        }
    }
}

/// A line of text at a fixed position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels.
    pub y: i32,
    /// Formatted line, for example `"ax: 1.23"`.
    pub text: String<RAW_LINE_CAPACITY>,
}

/// What to draw for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan {
    /// Indicator is off: idle glyph only.
    Idle,
    /// Tilt indicators, one per shown axis.
    Indicators(Vec<Indicator, 2>),
    /// Raw accelerometer readings as text.
    Raw(AccelSample),
}

/// Chooses what to draw for `mode`.
pub fn select(mode: DisplayMode, orientation: Orientation, sample: AccelSample) -> RenderPlan {
    let x = Indicator::for_angle(Axis::X, orientation.angle_x);
    let y = Indicator::for_angle(Axis::Y, orientation.angle_y);

    let mut shown = Vec::new();
    match mode {
        DisplayMode::Off => return RenderPlan::Idle,
        DisplayMode::RawData => return RenderPlan::Raw(sample),
        DisplayMode::TwoAxis => {
            let _ = shown.push(x);
            let _ = shown.push(y);
        }
        DisplayMode::XOnly => {
            let _ = shown.push(x);
        }
        DisplayMode::YOnly => {
            let _ = shown.push(y);
        }
    }

    RenderPlan::Indicators(shown)
}

/// Formats a sample as the three raw-data lines, two decimals each.
pub fn raw_lines(sample: AccelSample) -> [TextLine; 3] {
    let values = [("ax", sample.x), ("ay", sample.y), ("az", sample.z)];
    core::array::from_fn(|i| {
        let (label, value) = values[i];
        let (x, y) = RAW_LINE_POSITIONS[i];
        let mut text = String::new();
        // Capacity covers every finite f32, so this cannot fail
        let _ = write!(text, "{}: {:.2}", label, value);
        TextLine { x, y, text }
    })
}

/// Draws `plan` on `display`.
///
/// Only pixel and text calls are issued; clearing and presenting the frame is
/// left to the caller.
pub fn render<D: IndicatorDisplay>(plan: &RenderPlan, display: &mut D) {
    match plan {
        RenderPlan::Idle => {
            let (x, y) = IDLE_POSITION;
            display.draw_text(x, y, IDLE_TEXT);
        }
        RenderPlan::Indicators(indicators) => {
            for indicator in indicators {
                for (x, y) in indicator.pixels() {
                    display.set_pixel(x, y, INDICATOR_INTENSITY);
                }
            }
        }
        RenderPlan::Raw(sample) => {
            for line in raw_lines(*sample) {
                display.draw_text(line.x, line.y, &line.text);
            }
        }
    }
}
