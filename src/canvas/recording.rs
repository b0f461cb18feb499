// Headless canvas that records every command it receives

use super::turtle::Turtle;
use super::Canvas;
use crate::colour::HexColour;
use crate::pattern_errors::{PatternError, PatternResult};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Setup { width: u32, height: u32 },
    HideCursor,
    ShowCursor,
    Speed(u8),
    PenUp,
    PenDown,
    Goto { x: f64, y: f64 },
    Colour(HexColour),
    BeginFill,
    EndFill,
    Forward(f64),
    Right(f64),
    Hold(Duration),
    Bye,
}

/// A closed fill region as painted
#[derive(Debug, Clone, PartialEq)]
pub struct FillRecord {
    pub colour: Option<HexColour>,
    pub vertices: Vec<(f64, f64)>,
}

impl FillRecord {
    /// Axis-aligned bounds as (left, top, right, bottom) in canvas coordinates
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let (first_x, first_y) = *self.vertices.first()?;
        Some(self.vertices.iter().fold(
            (first_x, first_y, first_x, first_y),
            |(l, t, r, b), &(x, y)| (l.min(x), t.max(y), r.max(x), b.min(y)),
        ))
    }
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    turtle: Turtle,
    commands: Vec<DrawCommand>,
    fills: Vec<FillRecord>,
    size: Option<(u32, u32)>,
    closed: bool,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn fills(&self) -> &[FillRecord] {
        &self.fills
    }

    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of times a given command was issued
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    fn record(&mut self, command: DrawCommand) -> PatternResult<()> {
        if self.closed {
            return Err(PatternError::Canvas(format!(
                "{:?} issued after the canvas was closed",
                command
            )));
        }
        self.commands.push(command);
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn setup(&mut self, width: u32, height: u32) -> PatternResult<()> {
        self.record(DrawCommand::Setup { width, height })?;
        self.size = Some((width, height));
        Ok(())
    }

    fn hide_cursor(&mut self) -> PatternResult<()> {
        self.record(DrawCommand::HideCursor)?;
        self.turtle.visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> PatternResult<()> {
        self.record(DrawCommand::ShowCursor)?;
        self.turtle.visible = true;
        Ok(())
    }

    fn set_speed(&mut self, speed: u8) -> PatternResult<()> {
        self.record(DrawCommand::Speed(speed))
    }

    fn pen_up(&mut self) -> PatternResult<()> {
        self.record(DrawCommand::PenUp)?;
        self.turtle.pen_down = false;
        Ok(())
    }

    fn pen_down(&mut self) -> PatternResult<()> {
        self.record(DrawCommand::PenDown)?;
        self.turtle.pen_down = true;
        Ok(())
    }

    fn goto(&mut self, x: f64, y: f64) -> PatternResult<()> {
        self.record(DrawCommand::Goto { x, y })?;
        self.turtle.goto(x, y);
        Ok(())
    }

    fn set_colour(&mut self, colour: &HexColour) -> PatternResult<()> {
        self.record(DrawCommand::Colour(colour.clone()))?;
        self.turtle.colour = Some(colour.clone());
        Ok(())
    }

    fn begin_fill(&mut self) -> PatternResult<()> {
        self.record(DrawCommand::BeginFill)?;
        self.turtle.begin_fill();
        Ok(())
    }

    fn end_fill(&mut self) -> PatternResult<()> {
        self.record(DrawCommand::EndFill)?;
        let vertices = self.turtle.end_fill();
        self.fills.push(FillRecord {
            colour: self.turtle.colour.clone(),
            vertices,
        });
        Ok(())
    }

    fn forward(&mut self, distance: f64) -> PatternResult<()> {
        self.record(DrawCommand::Forward(distance))?;
        self.turtle.forward(distance);
        Ok(())
    }

    fn right(&mut self, degrees: f64) -> PatternResult<()> {
        self.record(DrawCommand::Right(degrees))?;
        self.turtle.right(degrees);
        Ok(())
    }

    fn position(&self) -> (f64, f64) {
        self.turtle.position()
    }

    fn hold(&mut self, duration: Duration) -> PatternResult<()> {
        self.record(DrawCommand::Hold(duration))
    }

    fn bye(&mut self) -> PatternResult<()> {
        self.record(DrawCommand::Bye)?;
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_fill_with_colour() {
        let mut canvas = RecordingCanvas::new();
        let red = HexColour::parse("#f00").unwrap();
        canvas.set_colour(&red).unwrap();
        canvas.begin_fill().unwrap();
        for _ in 0..4 {
            canvas.forward(10.0).unwrap();
            canvas.right(90.0).unwrap();
        }
        canvas.end_fill().unwrap();

        assert_eq!(canvas.fills().len(), 1);
        let fill = &canvas.fills()[0];
        assert_eq!(fill.colour.as_ref(), Some(&red));
        assert_eq!(fill.bounds(), Some((0.0, 0.0, 10.0, -10.0)));
        assert_eq!(canvas.count(|c| matches!(c, DrawCommand::Forward(_))), 4);
    }

    #[test]
    fn test_refuses_commands_after_bye() {
        let mut canvas = RecordingCanvas::new();
        canvas.bye().unwrap();
        assert!(canvas.is_closed());
        assert!(matches!(canvas.forward(1.0), Err(PatternError::Canvas(_))));
        assert_eq!(canvas.commands(), &[DrawCommand::Bye]);
    }
}
