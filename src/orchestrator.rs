// Orchestrator - load, validate (falling back to the default config),
// generate and render, one configuration at a time

use crate::canvas::Canvas;
use crate::config::{read_raw, validate, AppSettings, PatternConfig};
use crate::grid::Pattern;
use crate::pattern_errors::{PatternError, PatternResult};
use crate::renderer::{RenderReport, Renderer};
use log::{info, warn};
use rand::Rng;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where a raw config mapping comes from
pub trait ConfigSource {
    /// Human readable name for logs
    fn describe(&self) -> String;

    /// Produce the unvalidated config mapping
    fn load(&self) -> PatternResult<Value>;
}

/// A `.json` config file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> PatternResult<Value> {
        read_raw(&self.path)
    }
}

/// Config JSON held in memory
#[derive(Debug, Clone)]
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ConfigSource for InlineSource {
    fn describe(&self) -> String {
        "<inline config>".to_string()
    }

    fn load(&self) -> PatternResult<Value> {
        Ok(serde_json::from_str(&self.text)?)
    }
}

/// Whether the drawn config came from the source or from the default
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigOrigin {
    Loaded,
    Fallback(PatternError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplyReport {
    pub origin: ConfigOrigin,
    pub config: PatternConfig,
    pub pattern: Pattern,
    pub render: RenderReport,
}

/// Sequences validate -> generate -> render for a config source.
///
/// The default config is handed in at construction and never changes; nothing
/// else carries over between `apply` calls.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    default_config: PatternConfig,
    hold: Duration,
}

impl Orchestrator {
    pub fn new(default_config: PatternConfig, hold: Duration) -> Self {
        Self {
            default_config,
            hold,
        }
    }

    /// Build from runtime settings, loading the default config file once.
    /// Falls back to the built-in default if that file is unusable.
    pub fn from_settings(settings: &AppSettings) -> Self {
        let default_config = match PatternConfig::load_from_file(&settings.default_config) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "⚠️ Default config {} unusable ({}), using built-in default",
                    settings.default_config.display(),
                    e
                );
                PatternConfig::default()
            }
        };
        Self::new(default_config, settings.hold())
    }

    pub fn default_config(&self) -> &PatternConfig {
        &self.default_config
    }

    /// Load and validate a source, substituting the default config on failure
    pub fn resolve(&self, source: &dyn ConfigSource) -> (PatternConfig, ConfigOrigin) {
        match source.load().and_then(|raw| validate(&raw)) {
            Ok(config) => {
                info!("Using config from {}", source.describe());
                (config, ConfigOrigin::Loaded)
            }
            Err(e) => {
                warn!(
                    "⚠️ Config {} rejected ({}), drawing with the default config",
                    source.describe(),
                    e
                );
                (self.default_config.clone(), ConfigOrigin::Fallback(e))
            }
        }
    }

    /// Resolve the config, generate a pattern from it and render it onto `canvas`
    pub fn apply<C, R>(
        &self,
        source: &dyn ConfigSource,
        canvas: C,
        rng: &mut R,
    ) -> PatternResult<ApplyReport>
    where
        C: Canvas,
        R: Rng + ?Sized,
    {
        let (config, origin) = self.resolve(source);
        let pattern = Pattern::from_config(&config, rng)?;

        let mut renderer = Renderer::with_hold(canvas, self.hold);
        let render = renderer.render(&config, &pattern)?;

        Ok(ApplyReport {
            origin,
            config,
            pattern,
            render,
        })
    }
}
