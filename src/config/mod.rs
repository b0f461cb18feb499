// Config module: pattern parameters from JSON files plus runtime settings
pub mod app_settings;
pub mod pattern_config;

pub use app_settings::AppSettings;
pub use pattern_config::{read_raw, validate, PatternConfig, REQUIRED_KEYS};
