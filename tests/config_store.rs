//! Alternate config directory: create, list and select
use e_pattern::store::config_file_name;
use e_pattern::{seeded_rng, ConfigStore, HexColour, PatternConfig};

fn config() -> PatternConfig {
    let colours = ["#FFF", "#000000", "#a1b2c3"]
        .iter()
        .map(|c| HexColour::parse(c).unwrap())
        .collect();
    PatternConfig::new(4, 300, 200, 25, colours).unwrap()
}

#[test]
fn test_create_then_list_and_resolve() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("alt-configs"));

    let path = store.create(&config(), &mut seeded_rng(Some(9))).unwrap();
    let name = path.file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("-w300-h200-s4-sl25-cFFF000000a1b2c3-"));

    assert_eq!(store.list().unwrap(), vec![name.clone()]);
    assert_eq!(store.resolve(&name), Some(path.clone()));
    assert_eq!(PatternConfig::load_from_file(&path).unwrap(), config());
}

#[test]
fn test_created_file_is_pretty_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path());
    let path = store.create(&config(), &mut seeded_rng(Some(9))).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.starts_with("{\n    \"colours\": ["));
    assert!(text.find("\"height\"").unwrap() < text.find("\"width\"").unwrap());
}

#[test]
fn test_same_seed_never_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path());
    let first = store.create(&config(), &mut seeded_rng(Some(1))).unwrap();
    let second = store.create(&config(), &mut seeded_rng(Some(1))).unwrap();
    assert_ne!(first, second);
    assert_eq!(store.list().unwrap().len(), 2);
}

#[test]
fn test_resolve_rejects_unusable_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path());

    std::fs::write(dir.path().join("partial.json"), r#"{"speed": 1, "width": 10}"#).unwrap();
    std::fs::write(dir.path().join("broken.json"), "not json").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();

    assert!(store.resolve("partial.json").is_none());
    assert!(store.resolve("broken.json").is_none());
    assert!(store.resolve("notes.txt").is_none());
    assert!(store.resolve("missing.json").is_none());
    assert_eq!(
        store.list().unwrap(),
        vec!["broken.json".to_string(), "partial.json".to_string()]
    );
}

#[test]
fn test_file_names_differ_between_draws() {
    let mut rng = seeded_rng(Some(5));
    let a = config_file_name(&config(), &mut rng);
    let b = config_file_name(&config(), &mut rng);
    assert_ne!(a, b);
}
