// Renderer - walks a generated pattern and paints each cell as a filled
// square through a Canvas

use crate::canvas::Canvas;
use crate::colour::HexColour;
use crate::config::PatternConfig;
use crate::grid::Pattern;
use crate::pattern_errors::{PatternError, PatternResult};
use log::{debug, info, trace};
use std::time::Duration;

/// How long the finished canvas stays up before teardown
pub const DEFAULT_HOLD: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// Nothing issued yet
    Idle,
    /// Canvas sized, cursor hidden and parked at the top-left corner
    Positioned,
    /// Pen lowered, colour set, fill region open
    PenDown,
    /// Tracing the square outline
    Filling,
    /// Fill closed, cursor moved to the next cell
    PenUp,
    /// Cursor back at the left edge, one row lower
    RowAdvance,
    /// Canvas torn down; the renderer cannot draw again
    Done,
}

/// What a render pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderReport {
    pub squares: usize,
    pub row_advances: usize,
    pub hold: Duration,
}

/// Owns a canvas for the length of a single render pass
pub struct Renderer<C: Canvas> {
    canvas: C,
    state: RenderState,
    hold: Duration,
}

impl<C: Canvas> Renderer<C> {
    pub fn new(canvas: C) -> Self {
        Self::with_hold(canvas, DEFAULT_HOLD)
    }

    pub fn with_hold(canvas: C, hold: Duration) -> Self {
        Self {
            canvas,
            state: RenderState::Idle,
            hold,
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Paint `pattern` row by row, top to bottom and left to right, then hold
    /// the result on screen and close the canvas.
    ///
    /// The pattern is assumed to come from `config`; no validation happens here.
    pub fn render(&mut self, config: &PatternConfig, pattern: &Pattern) -> PatternResult<RenderReport> {
        if self.state == RenderState::Done {
            return Err(PatternError::RenderFinished);
        }

        let side = f64::from(config.side_length);
        let left = -f64::from(config.width) / 2.0;
        let top = f64::from(config.height) / 2.0;
        let mut report = RenderReport {
            hold: self.hold,
            ..RenderReport::default()
        };

        self.canvas.setup(config.width, config.height)?;
        self.canvas.hide_cursor()?;
        self.canvas.set_speed(config.speed)?;
        self.canvas.pen_up()?;
        self.canvas.goto(left, top)?;
        self.transition(RenderState::Positioned);

        if pattern.is_empty() {
            debug!("Empty {}x{} pattern - nothing to draw", pattern.rows(), pattern.cols());
            return self.finish(report);
        }

        for row in pattern.iter_rows() {
            for colour in row {
                self.draw_square(colour, side)?;
                report.squares += 1;
            }

            self.canvas.pen_up()?;
            let (_, y) = self.canvas.position();
            self.canvas.goto(left, y - side)?;
            self.transition(RenderState::RowAdvance);
            report.row_advances += 1;
        }

        self.finish(report)
    }

    fn draw_square(&mut self, colour: &HexColour, side: f64) -> PatternResult<()> {
        self.canvas.pen_down()?;
        self.canvas.set_colour(colour)?;
        self.canvas.begin_fill()?;
        self.transition(RenderState::PenDown);

        self.transition(RenderState::Filling);
        for _ in 0..4 {
            self.canvas.forward(side)?;
            self.canvas.right(90.0)?;
        }

        self.canvas.end_fill()?;
        self.canvas.pen_up()?;
        self.canvas.forward(side)?;
        self.transition(RenderState::PenUp);
        Ok(())
    }

    fn finish(&mut self, report: RenderReport) -> PatternResult<RenderReport> {
        self.canvas.hold(self.hold)?;
        self.canvas.bye()?;
        self.transition(RenderState::Done);
        info!(
            "Render pass done: {} squares, {} rows",
            report.squares, report.row_advances
        );
        Ok(report)
    }

    fn transition(&mut self, next: RenderState) {
        trace!("Renderer {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};
    use crate::grid::seeded_rng;

    fn config(width: u32, height: u32, side_length: u32) -> PatternConfig {
        PatternConfig {
            colours: vec![
                HexColour::parse("#ff0000").unwrap(),
                HexColour::parse("#00ff00").unwrap(),
            ],
            height,
            side_length,
            speed: 3,
            width,
        }
    }

    fn render(config: &PatternConfig) -> (RenderReport, RecordingCanvas, Pattern) {
        let pattern = Pattern::from_config(config, &mut seeded_rng(Some(11))).unwrap();
        let mut canvas = RecordingCanvas::new();
        let mut renderer = Renderer::with_hold(&mut canvas, Duration::ZERO);
        let report = renderer.render(config, &pattern).unwrap();
        assert_eq!(renderer.state(), RenderState::Done);
        (report, canvas, pattern)
    }

    #[test]
    fn test_sample_draws_eight_squares_in_two_rows() {
        let (report, canvas, _) = render(&config(200, 100, 50));
        assert_eq!(report.squares, 8);
        assert_eq!(report.row_advances, 2);
        assert_eq!(canvas.fills().len(), 8);
        assert_eq!(canvas.count(|c| *c == DrawCommand::BeginFill), 8);
        assert_eq!(canvas.count(|c| *c == DrawCommand::Right(90.0)), 32);
    }

    #[test]
    fn test_prologue_positions_at_top_left() {
        let (_, canvas, _) = render(&config(200, 100, 50));
        assert_eq!(
            &canvas.commands()[..5],
            &[
                DrawCommand::Setup { width: 200, height: 100 },
                DrawCommand::HideCursor,
                DrawCommand::Speed(3),
                DrawCommand::PenUp,
                DrawCommand::Goto { x: -100.0, y: 50.0 },
            ]
        );
    }

    #[test]
    fn test_squares_tile_row_major() {
        let (_, canvas, pattern) = render(&config(200, 100, 50));
        for (i, fill) in canvas.fills().iter().enumerate() {
            let (row, col) = (i / 4, i % 4);
            let left = -100.0 + 50.0 * col as f64;
            let top = 50.0 - 50.0 * row as f64;
            assert_eq!(fill.bounds(), Some((left, top, left + 50.0, top - 50.0)));
            assert_eq!(fill.colour.as_ref(), pattern.cell(row, col));
        }
    }

    #[test]
    fn test_finishes_with_hold_then_bye() {
        let (_, canvas, _) = render(&config(200, 100, 50));
        let n = canvas.commands().len();
        assert_eq!(
            &canvas.commands()[n - 2..],
            &[DrawCommand::Hold(Duration::ZERO), DrawCommand::Bye]
        );
        assert!(canvas.is_closed());
        assert_eq!(canvas.position(), (-100.0, -50.0));
    }

    #[test]
    fn test_empty_pattern_goes_straight_to_done() {
        let (report, canvas, pattern) = render(&config(0, 100, 50));
        assert!(pattern.is_empty());
        assert_eq!(report, RenderReport::default());
        assert!(canvas.fills().is_empty());
        assert_eq!(canvas.count(|c| *c == DrawCommand::PenDown), 0);
        assert_eq!(canvas.commands().len(), 7);
    }

    #[test]
    fn test_second_render_is_refused() {
        let config = config(100, 100, 50);
        let pattern = Pattern::from_config(&config, &mut seeded_rng(Some(2))).unwrap();
        let mut renderer = Renderer::with_hold(RecordingCanvas::new(), Duration::ZERO);
        renderer.render(&config, &pattern).unwrap();
        assert_eq!(
            renderer.render(&config, &pattern),
            Err(PatternError::RenderFinished)
        );
        let canvas = renderer.into_canvas();
        assert_eq!(canvas.count(|c| *c == DrawCommand::Bye), 1);
    }
}
