// Cursor state shared by the canvas backends

use crate::colour::HexColour;

/// Position, heading, pen and fill state of a drawing cursor
#[derive(Debug, Clone, PartialEq)]
pub struct Turtle {
    pub x: f64,
    pub y: f64,
    /// Degrees counter-clockwise from east, kept in [0, 360)
    pub heading: f64,
    pub pen_down: bool,
    pub visible: bool,
    pub colour: Option<HexColour>,
    fill_path: Option<Vec<(f64, f64)>>,
}

impl Default for Turtle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            heading: 0.0,
            pen_down: true,
            visible: true,
            colour: None,
            fill_path: None,
        }
    }
}

impl Turtle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn is_filling(&self) -> bool {
        self.fill_path.is_some()
    }

    /// Move to an absolute point, recording it on the fill outline if one is open
    pub fn goto(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        if let Some(path) = self.fill_path.as_mut() {
            path.push((x, y));
        }
    }

    pub fn forward(&mut self, distance: f64) {
        let (dx, dy) = unit_vector(self.heading);
        self.goto(self.x + dx * distance, self.y + dy * distance);
    }

    pub fn right(&mut self, degrees: f64) {
        self.heading = (self.heading - degrees).rem_euclid(360.0);
    }

    pub fn left(&mut self, degrees: f64) {
        self.heading = (self.heading + degrees).rem_euclid(360.0);
    }

    pub fn begin_fill(&mut self) {
        self.fill_path = Some(vec![(self.x, self.y)]);
    }

    /// Close the fill outline and hand back its vertices (empty if no fill was open)
    pub fn end_fill(&mut self) -> Vec<(f64, f64)> {
        self.fill_path.take().unwrap_or_default()
    }
}

/// Direction of travel for a heading. Right angles are exact so square
/// outlines close without floating point drift.
fn unit_vector(heading: f64) -> (f64, f64) {
    match heading {
        h if h == 0.0 => (1.0, 0.0),
        h if h == 90.0 => (0.0, 1.0),
        h if h == 180.0 => (-1.0, 0.0),
        h if h == 270.0 => (0.0, -1.0),
        h => {
            let radians = h.to_radians();
            (radians.cos(), radians.sin())
        }
    }
}

/// Even-odd point in polygon test
pub fn polygon_contains(vertices: &[(f64, f64)], x: f64, y: f64) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (xi, yi) = vertices[i];
        let (xj, yj) = vertices[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
