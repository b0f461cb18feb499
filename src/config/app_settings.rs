use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "./config.json";
pub const ALT_CONFIGS_DIR: &str = "./alt-configs/";

/// Runtime settings for the drawing session (where configs live, how long the
/// finished canvas stays up, how the terminal canvas is scaled)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Config loaded at startup and used as the fallback for broken files
    pub default_config: PathBuf,
    /// Directory holding alternate config files
    pub alt_configs_dir: PathBuf,
    /// How long the finished pattern stays visible before teardown (seconds)
    pub hold_secs: u64,
    /// Fixed RNG seed; `None` draws a fresh pattern every run
    pub seed: Option<u64>,
    /// Canvas pixels per terminal cell
    pub pixels_per_cell: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_config: PathBuf::from(DEFAULT_CONFIG_FILE),
            alt_configs_dir: PathBuf::from(ALT_CONFIGS_DIR),
            hold_secs: 10,
            seed: None,
            pixels_per_cell: 10,
        }
    }
}

impl AppSettings {
    /// Load settings from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Ok(path) = std::env::var("PATTERN_DEFAULT_CONFIG") {
            settings.default_config = PathBuf::from(path);
        }
        if let Ok(dir) = std::env::var("PATTERN_ALT_CONFIGS_DIR") {
            settings.alt_configs_dir = PathBuf::from(dir);
        }
        if let Ok(secs) = std::env::var("PATTERN_HOLD_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                settings.hold_secs = secs;
            }
        }
        if let Ok(seed) = std::env::var("PATTERN_SEED") {
            if let Ok(seed) = seed.parse::<u64>() {
                settings.seed = Some(seed);
            }
        }
        if let Ok(scale) = std::env::var("PATTERN_PIXELS_PER_CELL") {
            if let Ok(scale) = scale.parse::<u32>() {
                if scale > 0 {
                    settings.pixels_per_cell = scale;
                }
            }
        }

        settings
    }

    /// Get hold time as Duration
    pub fn hold(&self) -> Duration {
        Duration::from_secs(self.hold_secs)
    }
}
