// Grid module - pattern generation from canvas size, square size and palette

pub mod pattern;

pub use pattern::{grid_dimension, seeded_rng, Pattern};
