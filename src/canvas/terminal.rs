// Terminal canvas - paints filled regions as 24-bit coloured cells in the
// alternate screen using crossterm

use super::turtle::{polygon_contains, Turtle};
use super::Canvas;
use crate::colour::HexColour;
use crate::pattern_errors::{PatternError, PatternResult};
use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, trace, warn};
use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

// Each canvas cell is printed two characters wide so it looks roughly square
const CELL_GLYPH: &str = "  ";

pub struct TerminalCanvas<W: Write = Stdout> {
    out: W,
    turtle: Turtle,
    width: u32,
    height: u32,
    pixels_per_cell: u32,
    cell_rows: usize,
    cell_cols: usize,
    cells: Vec<Option<(u8, u8, u8)>>,
    /// Visible terminal area as (columns, rows); cells outside it are tracked but not printed
    viewport: Option<(u16, u16)>,
    step_delay: Duration,
    active: bool,
    closed: bool,
}

impl TerminalCanvas<Stdout> {
    pub fn stdout(pixels_per_cell: u32) -> Self {
        let canvas = Self::new(io::stdout(), pixels_per_cell);
        match terminal::size() {
            Ok((cols, rows)) => canvas.with_viewport(cols, rows),
            Err(e) => {
                debug!("Terminal size unavailable ({}), painting unclipped", e);
                canvas
            }
        }
    }
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W, pixels_per_cell: u32) -> Self {
        Self {
            out,
            turtle: Turtle::new(),
            width: 0,
            height: 0,
            pixels_per_cell: pixels_per_cell.max(1),
            cell_rows: 0,
            cell_cols: 0,
            cells: Vec::new(),
            viewport: None,
            step_delay: Duration::ZERO,
            active: false,
            closed: false,
        }
    }

    /// Clip printing to a terminal of `cols` x `rows` characters
    pub fn with_viewport(mut self, cols: u16, rows: u16) -> Self {
        self.viewport = Some((cols, rows));
        self
    }

    /// Terminal cell grid as (rows, cols)
    pub fn cell_grid(&self) -> (usize, usize) {
        (self.cell_rows, self.cell_cols)
    }

    /// Colour painted into a terminal cell, if any
    pub fn cell_colour(&self, row: usize, col: usize) -> Option<(u8, u8, u8)> {
        if row >= self.cell_rows || col >= self.cell_cols {
            return None;
        }
        self.cells[row * self.cell_cols + col]
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    fn ensure_open(&self) -> PatternResult<()> {
        if self.closed {
            Err(PatternError::Canvas("terminal canvas already closed".to_string()))
        } else {
            Ok(())
        }
    }

    fn in_view(&self, row: usize, col: usize) -> bool {
        match self.viewport {
            Some((cols, rows)) => (col + 1) * CELL_GLYPH.len() <= cols as usize && row < rows as usize,
            None => true,
        }
    }

    fn pace(&self) {
        if !self.step_delay.is_zero() {
            thread::sleep(self.step_delay);
        }
    }

    /// Paint every cell whose centre lies inside the outline
    fn paint(&mut self, vertices: &[(f64, f64)], rgb: (u8, u8, u8)) -> io::Result<usize> {
        if vertices.len() < 3 || self.cell_cols == 0 || self.cell_rows == 0 {
            return Ok(0);
        }

        let half_w = self.width as f64 / 2.0;
        let half_h = self.height as f64 / 2.0;
        let ppc = self.pixels_per_cell as f64;

        let (mut left, mut right) = (f64::MAX, f64::MIN);
        let (mut bottom, mut top) = (f64::MAX, f64::MIN);
        for &(x, y) in vertices {
            left = left.min(x);
            right = right.max(x);
            bottom = bottom.min(y);
            top = top.max(y);
        }

        // Cell centres sit at (i + 0.5) * ppc in screen pixels
        let to_index = |px: f64| px / ppc - 0.5;
        let col_start = to_index(left + half_w).ceil().max(0.0) as usize;
        let col_end = to_index(right + half_w).floor();
        let row_start = to_index(half_h - top).ceil().max(0.0) as usize;
        let row_end = to_index(half_h - bottom).floor();
        if col_end < 0.0 || row_end < 0.0 {
            return Ok(0);
        }
        let col_end = (col_end as usize).min(self.cell_cols - 1);
        let row_end = (row_end as usize).min(self.cell_rows - 1);

        let (r, g, b) = rgb;
        let mut painted = 0;
        for row in row_start..=row_end {
            for col in col_start..=col_end {
                let x = (col as f64 + 0.5) * ppc - half_w;
                let y = half_h - (row as f64 + 0.5) * ppc;
                if !polygon_contains(vertices, x, y) {
                    continue;
                }
                self.cells[row * self.cell_cols + col] = Some(rgb);
                painted += 1;
                if !self.in_view(row, col) {
                    continue;
                }
                queue!(
                    self.out,
                    cursor::MoveTo((col * CELL_GLYPH.len()) as u16, row as u16),
                    SetBackgroundColor(Color::Rgb { r, g, b }),
                    Print(CELL_GLYPH)
                )?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(painted)
    }

    fn restore(&mut self) -> io::Result<()> {
        execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen)?;
        self.active = false;
        Ok(())
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn setup(&mut self, width: u32, height: u32) -> PatternResult<()> {
        self.ensure_open()?;
        self.width = width;
        self.height = height;
        self.cell_cols = width.div_ceil(self.pixels_per_cell) as usize;
        self.cell_rows = height.div_ceil(self.pixels_per_cell) as usize;
        self.cells = vec![None; self.cell_rows * self.cell_cols];

        if !self.active {
            execute!(self.out, EnterAlternateScreen)?;
            self.active = true;
        }
        execute!(self.out, Clear(ClearType::All))?;

        if let Some((cols, rows)) = self.viewport {
            if self.cell_cols * CELL_GLYPH.len() > cols as usize || self.cell_rows > rows as usize {
                warn!(
                    "⚠️ Canvas needs {}x{} terminal cells but only {}x{} are visible; the pattern will be clipped",
                    self.cell_cols * CELL_GLYPH.len(),
                    self.cell_rows,
                    cols,
                    rows
                );
            }
        }

        debug!(
            "Terminal canvas {}x{} px -> {}x{} cells ({} px per cell)",
            width, height, self.cell_rows, self.cell_cols, self.pixels_per_cell
        );
        Ok(())
    }

    fn hide_cursor(&mut self) -> PatternResult<()> {
        self.ensure_open()?;
        execute!(self.out, cursor::Hide)?;
        self.turtle.visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> PatternResult<()> {
        self.ensure_open()?;
        execute!(self.out, cursor::Show)?;
        self.turtle.visible = true;
        Ok(())
    }

    fn set_speed(&mut self, speed: u8) -> PatternResult<()> {
        self.ensure_open()?;
        self.step_delay = match speed.min(10) {
            0 => Duration::ZERO,
            s => Duration::from_millis(u64::from(11 - s) * 6),
        };
        Ok(())
    }

    fn pen_up(&mut self) -> PatternResult<()> {
        self.ensure_open()?;
        self.turtle.pen_down = false;
        Ok(())
    }

    fn pen_down(&mut self) -> PatternResult<()> {
        self.ensure_open()?;
        self.turtle.pen_down = true;
        Ok(())
    }

    fn goto(&mut self, x: f64, y: f64) -> PatternResult<()> {
        self.ensure_open()?;
        self.turtle.goto(x, y);
        self.pace();
        Ok(())
    }

    fn set_colour(&mut self, colour: &HexColour) -> PatternResult<()> {
        self.ensure_open()?;
        self.turtle.colour = Some(colour.clone());
        Ok(())
    }

    fn begin_fill(&mut self) -> PatternResult<()> {
        self.ensure_open()?;
        self.turtle.begin_fill();
        Ok(())
    }

    fn end_fill(&mut self) -> PatternResult<()> {
        self.ensure_open()?;
        let vertices = self.turtle.end_fill();
        let rgb = self
            .turtle
            .colour
            .as_ref()
            .map(HexColour::rgb)
            .unwrap_or((0, 0, 0));
        let painted = self.paint(&vertices, rgb)?;
        trace!("Filled {} cells with {:?}", painted, rgb);
        Ok(())
    }

    fn forward(&mut self, distance: f64) -> PatternResult<()> {
        self.ensure_open()?;
        self.turtle.forward(distance);
        self.pace();
        Ok(())
    }

    fn right(&mut self, degrees: f64) -> PatternResult<()> {
        self.ensure_open()?;
        self.turtle.right(degrees);
        Ok(())
    }

    fn position(&self) -> (f64, f64) {
        self.turtle.position()
    }

    fn hold(&mut self, duration: Duration) -> PatternResult<()> {
        self.ensure_open()?;
        self.out.flush()?;
        thread::sleep(duration);
        Ok(())
    }

    fn bye(&mut self) -> PatternResult<()> {
        self.ensure_open()?;
        if self.active {
            self.restore()?;
        }
        self.closed = true;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalCanvas<W> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.restore();
        }
    }
}
