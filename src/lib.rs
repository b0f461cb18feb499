// E-Pattern: random colour square patterns drawn cell by cell onto a canvas

pub mod canvas;
pub mod colour;
pub mod config;
pub mod display;
pub mod grid;
pub mod menu;
pub mod orchestrator;
pub mod renderer;
pub mod session;
pub mod store;

pub mod pattern_errors;
pub use pattern_errors::{PatternError, PatternResult};

// Re-export main types for convenience
pub use canvas::{Canvas, RecordingCanvas, TerminalCanvas, Turtle};
pub use colour::HexColour;
pub use config::{validate, AppSettings, PatternConfig};
pub use grid::{grid_dimension, seeded_rng, Pattern};
pub use menu::{MenuCommand, Prompter};
pub use orchestrator::{ApplyReport, ConfigOrigin, ConfigSource, FileSource, InlineSource, Orchestrator};
pub use renderer::{RenderReport, RenderState, Renderer};
pub use session::{Session, SessionEnd};
pub use store::ConfigStore;
