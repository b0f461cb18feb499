// Interactive drawing session: menu dispatch, config selection and creation

use crate::canvas::Canvas;
use crate::config::pattern_config::{HEIGHT_RANGE, SIDE_LENGTH_RANGE, SPEED_RANGE, WIDTH_RANGE};
use crate::config::{AppSettings, PatternConfig};
use crate::display::write_config_summary;
use crate::menu::{MenuCommand, Prompter};
use crate::orchestrator::{ApplyReport, FileSource, Orchestrator};
use crate::pattern_errors::PatternResult;
use crate::store::ConfigStore;
use log::info;
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// How a menu loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user asked to draw the selected config; drawing ends the session
    Draw,
    Quit,
}

/// The selected config plus where configs live
#[derive(Debug, Clone)]
pub struct Session {
    orchestrator: Orchestrator,
    store: ConfigStore,
    current: PathBuf,
}

impl Session {
    pub fn new(orchestrator: Orchestrator, store: ConfigStore, current: impl Into<PathBuf>) -> Self {
        Self {
            orchestrator,
            store,
            current: current.into(),
        }
    }

    /// Start with the default config selected
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(
            Orchestrator::from_settings(settings),
            ConfigStore::new(settings.alt_configs_dir.clone()),
            settings.default_config.clone(),
        )
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn select(&mut self, path: impl Into<PathBuf>) {
        self.current = path.into();
    }

    /// Render the selected config onto `canvas`
    pub fn draw<C: Canvas, R: Rng + ?Sized>(&self, canvas: C, rng: &mut R) -> PatternResult<ApplyReport> {
        self.orchestrator
            .apply(&FileSource::new(self.current.clone()), canvas, rng)
    }

    /// List the stored configs and switch to one by name. A blank answer keeps
    /// the current selection.
    pub fn change_config<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> PatternResult<()> {
        prompter.say("\nCurrent config files: ")?;
        for name in self.store.list()? {
            prompter.say(&name)?;
        }

        loop {
            let name =
                prompter.read_line("\nEnter the name of the file you want to use (blank to keep current): ")?;
            if name.is_empty() {
                return Ok(());
            }
            if let Some(path) = self.store.resolve(&name) {
                info!("Selected config {}", path.display());
                self.current = path;
                return Ok(());
            }
            prompter.say("\nERROR: You didn't enter a valid file name. Please try again...")?;
        }
    }

    /// Prompt for every parameter and write a new config into the store
    pub fn create_config<R: BufRead, W: Write, G: Rng + ?Sized>(
        &self,
        prompter: &mut Prompter<R, W>,
        rng: &mut G,
    ) -> PatternResult<PathBuf> {
        let width = prompter.read_in_range("\nEnter the screen width (max. 1000): ", WIDTH_RANGE)?;
        let height = prompter.read_in_range("\nEnter the screen height (max. 1000): ", HEIGHT_RANGE)?;
        let speed = prompter.read_in_range("\nEnter the drawing speed (max. 10): ", SPEED_RANGE)?;
        let side_length =
            prompter.read_in_range("\nEnter the side length of the square/s (max. 250): ", SIDE_LENGTH_RANGE)?;
        let colours = prompter.read_colours()?;

        let config = PatternConfig::new(speed as u8, width as u32, height as u32, side_length as u32, colours)?;
        let path = self.store.create(&config, rng)?;
        prompter.say(&format!("\nNew config file created: {}", path.display()))?;
        Ok(path)
    }

    /// Run the menu until the user draws or quits
    pub fn run_menu<R: BufRead, W: Write, G: Rng + ?Sized>(
        &mut self,
        prompter: &mut Prompter<R, W>,
        rng: &mut G,
    ) -> PatternResult<SessionEnd> {
        write_config_summary(prompter.output(), self.orchestrator.default_config())?;
        loop {
            match prompter.read_command()? {
                MenuCommand::DrawPattern => return Ok(SessionEnd::Draw),
                MenuCommand::ChangeConfig => self.change_config(prompter)?,
                MenuCommand::NewConfig => {
                    self.create_config(prompter, rng)?;
                }
                MenuCommand::Quit => return Ok(SessionEnd::Quit),
            }
        }
    }
}
