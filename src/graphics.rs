//! [`IndicatorDisplay`] for `embedded-graphics` draw targets.
//!
//! Wraps any monochrome [`DrawTarget`] (for example a buffered `ssd1306`
//! display) together with a flush closure that pushes the buffer to the panel.
//!
//! ```ignore
//! let oled = Ssd1306::new(interface, DisplaySize64x48, DisplayRotation::Rotate0)
//!     .into_buffered_graphics_mode();
//! let display = GraphicsDisplay::new(oled, |d| { let _ = d.flush(); });
//! ```

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::render::IndicatorDisplay;

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Adapts a [`DrawTarget`] to [`IndicatorDisplay`].
///
/// Draw errors are discarded; the panel is assumed to keep working once it
/// has been initialised.
pub struct GraphicsDisplay<T, F> {
    target: T,
    flush: F,
}

impl<T, F> GraphicsDisplay<T, F>
where
    T: DrawTarget<Color = BinaryColor>,
    F: FnMut(&mut T),
{
    /// Wraps `target`; `flush` is called on every present.
    pub fn new(target: T, flush: F) -> Self {
        Self { target, flush }
    }

    /// Returns a reference to the wrapped target.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Consumes the adapter and returns the wrapped target.
    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<T, F> IndicatorDisplay for GraphicsDisplay<T, F>
where
    T: DrawTarget<Color = BinaryColor>,
    F: FnMut(&mut T),
{
    fn clear(&mut self) {
        let _ = self.target.clear(BinaryColor::Off);
    }

    fn set_pixel(&mut self, x: i32, y: i32, intensity: u8) {
        let color = if intensity > 0 {
            BinaryColor::On
        } else {
            BinaryColor::Off
        };
        let _ = Pixel(Point::new(x, y), color).draw(&mut self.target);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        let _ = Text::with_baseline(text, Point::new(x, y), text_style(), Baseline::Top)
            .draw(&mut self.target);
    }

    fn present(&mut self) {
        (self.flush)(&mut self.target);
    }
}
