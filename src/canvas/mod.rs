// Canvas module - the drawing-cursor interface the renderer paints through,
// plus the backends that implement it

pub mod recording;
pub mod terminal;
pub mod turtle;

pub use recording::{DrawCommand, FillRecord, RecordingCanvas};
pub use terminal::TerminalCanvas;
pub use turtle::Turtle;

use crate::colour::HexColour;
use crate::pattern_errors::PatternResult;
use std::time::Duration;

/// Turtle-style drawing surface.
///
/// Coordinates are canvas pixels with the origin at the centre and y pointing
/// up. Headings are degrees counter-clockwise from east; `right` turns clockwise.
pub trait Canvas {
    /// Size the drawing surface
    fn setup(&mut self, width: u32, height: u32) -> PatternResult<()>;

    /// Hide the cursor glyph
    fn hide_cursor(&mut self) -> PatternResult<()>;

    /// Show the cursor glyph
    fn show_cursor(&mut self) -> PatternResult<()>;

    /// 0 draws instantly, 1 is slowest, 10 is fastest animated speed
    fn set_speed(&mut self, speed: u8) -> PatternResult<()>;

    fn pen_up(&mut self) -> PatternResult<()>;

    fn pen_down(&mut self) -> PatternResult<()>;

    /// Move to an absolute position, drawing if the pen is down
    fn goto(&mut self, x: f64, y: f64) -> PatternResult<()>;

    fn set_colour(&mut self, colour: &HexColour) -> PatternResult<()>;

    /// Start recording the outline of a filled region
    fn begin_fill(&mut self) -> PatternResult<()>;

    /// Close and paint the region traced since `begin_fill`
    fn end_fill(&mut self) -> PatternResult<()>;

    /// Move along the current heading
    fn forward(&mut self, distance: f64) -> PatternResult<()>;

    /// Turn clockwise by `degrees`
    fn right(&mut self, degrees: f64) -> PatternResult<()>;

    /// Current cursor position
    fn position(&self) -> (f64, f64);

    /// Keep the canvas on screen for `duration`
    fn hold(&mut self, duration: Duration) -> PatternResult<()>;

    /// Tear the canvas down. No drawing is possible afterwards.
    fn bye(&mut self) -> PatternResult<()>;
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn setup(&mut self, width: u32, height: u32) -> PatternResult<()> {
        (**self).setup(width, height)
    }

    fn hide_cursor(&mut self) -> PatternResult<()> {
        (**self).hide_cursor()
    }

    fn show_cursor(&mut self) -> PatternResult<()> {
        (**self).show_cursor()
    }

    fn set_speed(&mut self, speed: u8) -> PatternResult<()> {
        (**self).set_speed(speed)
    }

    fn pen_up(&mut self) -> PatternResult<()> {
        (**self).pen_up()
    }

    fn pen_down(&mut self) -> PatternResult<()> {
        (**self).pen_down()
    }

    fn goto(&mut self, x: f64, y: f64) -> PatternResult<()> {
        (**self).goto(x, y)
    }

    fn set_colour(&mut self, colour: &HexColour) -> PatternResult<()> {
        (**self).set_colour(colour)
    }

    fn begin_fill(&mut self) -> PatternResult<()> {
        (**self).begin_fill()
    }

    fn end_fill(&mut self) -> PatternResult<()> {
        (**self).end_fill()
    }

    fn forward(&mut self, distance: f64) -> PatternResult<()> {
        (**self).forward(distance)
    }

    fn right(&mut self, degrees: f64) -> PatternResult<()> {
        (**self).right(degrees)
    }

    fn position(&self) -> (f64, f64) {
        (**self).position()
    }

    fn hold(&mut self, duration: Duration) -> PatternResult<()> {
        (**self).hold(duration)
    }

    fn bye(&mut self) -> PatternResult<()> {
        (**self).bye()
    }
}
