// Pattern grid - one randomly chosen palette colour per cell

use crate::colour::HexColour;
use crate::config::PatternConfig;
use crate::pattern_errors::{PatternError, PatternResult};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Number of whole squares that fit along `extent`, rounding half to even.
///
/// Integer-only so canvases that are not a multiple of `side_length` round the
/// same way on every platform: 75/50 -> 2, 125/50 -> 2, 25/50 -> 0.
pub fn grid_dimension(extent: u32, side_length: u32) -> usize {
    if side_length == 0 {
        return 0;
    }

    let quotient = extent / side_length;
    let remainder = extent % side_length;
    let twice = u64::from(remainder) * 2;
    let side = u64::from(side_length);

    let rounded = if twice > side || (twice == side && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };
    rounded as usize
}

/// RNG for pattern generation: seeded when a seed is given, from OS entropy otherwise
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Row-major grid of cell colours. Immutable once generated.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<HexColour>>,
}

impl Pattern {
    /// Fill a `round(height / side_length)` x `round(width / side_length)` grid,
    /// picking each cell uniformly from `palette`
    pub fn generate<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        side_length: u32,
        palette: &[HexColour],
        rng: &mut R,
    ) -> PatternResult<Self> {
        if side_length == 0 {
            return Err(PatternError::invalid("side_length must be greater than 0"));
        }

        let rows = grid_dimension(height, side_length);
        let cols = grid_dimension(width, side_length);

        if rows > 0 && cols > 0 && palette.is_empty() {
            return Err(PatternError::EmptyPalette);
        }

        let cells = (0..rows)
            .map(|_| {
                (0..cols)
                    .filter_map(|_| palette.choose(rng).cloned())
                    .collect::<Vec<_>>()
            })
            .collect();

        debug!(
            "Generated {}x{} pattern from {} colours (canvas {}x{}, side {})",
            rows,
            cols,
            palette.len(),
            width,
            height,
            side_length
        );

        Ok(Self { rows, cols, cells })
    }

    pub fn from_config<R: Rng + ?Sized>(config: &PatternConfig, rng: &mut R) -> PatternResult<Self> {
        Self::generate(
            config.width,
            config.height,
            config.side_length,
            &config.colours,
            rng,
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Nothing to draw when either dimension rounds to zero
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&HexColour> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[HexColour]> {
        self.cells.iter().map(|row| row.as_slice())
    }

    /// How many cells ended up with each colour
    pub fn colour_counts(&self) -> HashMap<&HexColour, usize> {
        let mut counts = HashMap::new();
        for colour in self.cells.iter().flatten() {
            *counts.entry(colour).or_insert(0) += 1;
        }
        counts
    }
}
