// Alternate config directory: listing, selecting and creating config files

use crate::config::{read_raw, PatternConfig, REQUIRED_KEYS};
use crate::pattern_errors::PatternResult;
use log::{debug, info};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::path::{Component, Path, PathBuf};

const UNIQUE_SUFFIX_LEN: usize = 5;

#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Names of the `.json` files in the directory, sorted. A missing
    /// directory lists as empty.
    pub fn list(&self) -> PatternResult<Vec<String>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Path of `name` inside the store if it is a usable config file: exists,
    /// has a `.json` extension and carries every required key. Only bare file
    /// names are accepted, so nothing outside the directory can be selected.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let mut components = Path::new(name).components();
        if !matches!((components.next(), components.next()), (Some(Component::Normal(_)), None)) {
            debug!("Rejected config name {:?}: not a bare file name", name);
            return None;
        }
        let path = self.dir.join(name);
        is_config_file(&path).then_some(path)
    }

    /// Write `config` under a fresh descriptive name and return its path
    pub fn create<R: Rng + ?Sized>(&self, config: &PatternConfig, rng: &mut R) -> PatternResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;

        let path = loop {
            let candidate = self.dir.join(config_file_name(config, rng));
            if !candidate.exists() {
                break candidate;
            }
            debug!("Name clash on {}, retrying", candidate.display());
        };

        config.save_to_file(&path)?;
        info!("💾 New config file created at {}", path.display());
        Ok(path)
    }
}

/// `-w{width}-h{height}-s{speed}-sl{side}-c{colour digits}-{random}-.json`
pub fn config_file_name<R: Rng + ?Sized>(config: &PatternConfig, rng: &mut R) -> String {
    let digits: String = config.colours.iter().map(|c| c.digits()).collect();
    let suffix: String = (0..UNIQUE_SUFFIX_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect();

    format!(
        "-w{}-h{}-s{}-sl{}-c{}-{}-.json",
        config.width, config.height, config.speed, config.side_length, digits, suffix
    )
}

/// Only checks that the required keys are present; values are validated when drawing
fn is_config_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    match read_raw(path) {
        Ok(raw) => raw
            .as_object()
            .map(|obj| REQUIRED_KEYS.iter().all(|key| obj.contains_key(*key)))
            .unwrap_or(false),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::seeded_rng;

    #[test]
    fn test_file_name_layout() {
        let config = PatternConfig::default();
        let name = config_file_name(&config, &mut seeded_rng(Some(1)));
        assert!(name.starts_with("-w400-h400-s0-sl50-cff000000ff000000ffffff00-"));
        assert!(name.ends_with("-.json"));
        let suffix = &name[name.len() - 11..name.len() - 6];
        assert_eq!(suffix.len(), 5);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_resolve_rejects_paths_outside_store() {
        let root = tempfile::tempdir().unwrap();
        let store_dir = root.path().join("alt");
        std::fs::create_dir(&store_dir).unwrap();
        let outside = root.path().join("outside.json");
        PatternConfig::default().save_to_file(&outside).unwrap();
        PatternConfig::default()
            .save_to_file(store_dir.join("inside.json"))
            .unwrap();

        let store = ConfigStore::new(&store_dir);
        assert_eq!(store.resolve("inside.json"), Some(store_dir.join("inside.json")));
        assert!(store.resolve("../outside.json").is_none());
        assert!(store.resolve(outside.to_str().unwrap()).is_none());
        assert!(store.resolve("./inside.json").is_none());
        assert!(store.resolve("").is_none());
    }

    #[test]
    fn test_missing_dir_lists_empty() {
        let store = ConfigStore::new("/no/such/pattern/dir");
        assert!(store.list().unwrap().is_empty());
        assert!(store.resolve("anything.json").is_none());
    }
}
