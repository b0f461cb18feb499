// Pattern configuration: the five drawing parameters read from a JSON file

use crate::colour::HexColour;
use crate::pattern_errors::{PatternError, PatternResult};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::RangeInclusive;
use std::path::Path;

/// Keys every config file must carry
pub const REQUIRED_KEYS: [&str; 5] = ["speed", "height", "width", "side_length", "colours"];

pub const SPEED_RANGE: RangeInclusive<i64> = 0..=10;
pub const WIDTH_RANGE: RangeInclusive<i64> = 0..=1000;
pub const HEIGHT_RANGE: RangeInclusive<i64> = 0..=1000;
pub const SIDE_LENGTH_RANGE: RangeInclusive<i64> = 1..=250;
pub const COLOUR_COUNT_RANGE: RangeInclusive<usize> = 2..=10;

/// Validated drawing parameters.
///
/// Fields are declared in alphabetical order so serialized files come out with
/// sorted keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternConfig {
    pub colours: Vec<HexColour>,
    pub height: u32,
    pub side_length: u32,
    pub speed: u8,
    pub width: u32,
}

impl Default for PatternConfig {
    /// Built-in fallback used when even the default config file is unusable
    fn default() -> Self {
        Self {
            colours: ["#ff0000", "#00ff00", "#0000ff", "#ffff00"]
                .iter()
                .filter_map(|c| HexColour::parse(c).ok())
                .collect(),
            height: 400,
            side_length: 50,
            speed: 0,
            width: 400,
        }
    }
}

impl PatternConfig {
    /// Build a config from already-typed values, applying the same range rules as `validate`
    pub fn new(
        speed: u8,
        width: u32,
        height: u32,
        side_length: u32,
        colours: Vec<HexColour>,
    ) -> PatternResult<Self> {
        let config = Self {
            colours,
            height,
            side_length,
            speed,
            width,
        };
        validate(&config.to_value()?)
    }

    /// Load, parse and validate a config file
    pub fn load_from_file(path: impl AsRef<Path>) -> PatternResult<Self> {
        let path = path.as_ref();
        let raw = read_raw(path)?;
        let config = validate(&raw)?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Save as pretty JSON with 4-space indentation and sorted keys
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> PatternResult<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    pub fn to_json_pretty(&self) -> PatternResult<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| PatternError::Io(e.to_string()))
    }

    pub fn to_value(&self) -> PatternResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Read a `.json` file into an unvalidated JSON value
pub fn read_raw(path: &Path) -> PatternResult<Value> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(PatternError::invalid(format!(
            "config file '{}' must have a .json extension",
            path.display()
        )));
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| PatternError::Io(format!("{}: {}", path.display(), e)))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Check a raw config mapping and turn it into a `PatternConfig`.
///
/// Every problem found is reported, not just the first one. Keys outside
/// `REQUIRED_KEYS` are ignored.
pub fn validate(raw: &Value) -> PatternResult<PatternConfig> {
    let obj = raw
        .as_object()
        .ok_or_else(|| PatternError::invalid("config must be a JSON object"))?;

    let mut problems = Vec::new();

    for key in REQUIRED_KEYS {
        if !obj.contains_key(key) {
            problems.push(format!("missing key '{}'", key));
        }
    }

    let speed = int_field(obj, "speed", &SPEED_RANGE, &mut problems);
    let width = int_field(obj, "width", &WIDTH_RANGE, &mut problems);
    let height = int_field(obj, "height", &HEIGHT_RANGE, &mut problems);
    let side_length = int_field(obj, "side_length", &SIDE_LENGTH_RANGE, &mut problems);
    let colours = colours_field(obj, &mut problems);

    match (speed, width, height, side_length, colours) {
        (Some(speed), Some(width), Some(height), Some(side_length), Some(colours))
            if problems.is_empty() =>
        {
            Ok(PatternConfig {
                colours,
                height: height as u32,
                side_length: side_length as u32,
                speed: speed as u8,
                width: width as u32,
            })
        }
        _ => Err(PatternError::InvalidConfig(problems)),
    }
}

fn int_field(
    obj: &Map<String, Value>,
    key: &str,
    range: &RangeInclusive<i64>,
    problems: &mut Vec<String>,
) -> Option<i64> {
    let value = obj.get(key)?;
    let out_of_range = |problems: &mut Vec<String>| {
        problems.push(format!(
            "'{}' is {} but must be between {} and {}",
            key,
            value,
            range.start(),
            range.end()
        ));
    };

    // Integers past i64::MAX are still integers, just too large
    if value.is_u64() && value.as_i64().is_none() {
        out_of_range(problems);
        return None;
    }
    let Some(n) = value.as_i64() else {
        problems.push(format!("'{}' must be an integer, got {}", key, value));
        return None;
    };

    if !range.contains(&n) {
        out_of_range(problems);
        return None;
    }

    Some(n)
}

fn colours_field(obj: &Map<String, Value>, problems: &mut Vec<String>) -> Option<Vec<HexColour>> {
    let value = obj.get("colours")?;
    let Some(items) = value.as_array() else {
        problems.push("'colours' must be an array of hex colour strings".to_string());
        return None;
    };

    let mut ok = true;
    if !COLOUR_COUNT_RANGE.contains(&items.len()) {
        problems.push(format!(
            "'colours' has {} entries but needs between {} and {}",
            items.len(),
            COLOUR_COUNT_RANGE.start(),
            COLOUR_COUNT_RANGE.end()
        ));
        ok = false;
    }

    let mut colours = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item.as_str().map(HexColour::parse) {
            Some(Ok(colour)) => colours.push(colour),
            _ => {
                problems.push(format!("'colours[{}]' is not a hex colour: {}", i, item));
                ok = false;
            }
        }
    }

    ok.then_some(colours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "speed": 5,
            "width": 200,
            "height": 100,
            "side_length": 50,
            "colours": ["#ff0000", "#00ff00"]
        })
    }

    #[test]
    fn test_validate_accepts_sample() {
        let config = validate(&sample()).unwrap();
        assert_eq!(config.speed, 5);
        assert_eq!(config.width, 200);
        assert_eq!(config.height, 100);
        assert_eq!(config.side_length, 50);
        assert_eq!(config.colours.len(), 2);
    }

    #[test]
    fn test_validate_reports_all_missing_keys() {
        let err = validate(&json!({ "speed": 1 })).unwrap_err();
        match err {
            PatternError::InvalidConfig(problems) => {
                assert_eq!(problems.len(), 4);
                assert!(problems.iter().any(|p| p.contains("'colours'")));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_side_length() {
        let mut raw = sample();
        raw["side_length"] = json!(0);
        assert!(matches!(validate(&raw), Err(PatternError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_non_integer_numbers() {
        let mut raw = sample();
        raw["speed"] = json!(2.5);
        assert!(validate(&raw).is_err());
        raw["speed"] = json!("3");
        assert!(validate(&raw).is_err());
    }

    #[test]
    fn test_validate_huge_integer_is_out_of_range() {
        let mut raw = sample();
        raw["width"] = json!(u64::MAX);
        match validate(&raw).unwrap_err() {
            PatternError::InvalidConfig(problems) => {
                assert_eq!(problems.len(), 1);
                assert!(problems[0].contains("must be between 0 and 1000"));
                assert!(!problems[0].contains("must be an integer"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_validate_ignores_extra_keys() {
        let mut raw = sample();
        raw["title"] = json!("ignored");
        assert!(validate(&raw).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_object() {
        assert!(validate(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_pretty_json_sorted_with_four_spaces() {
        let config = validate(&sample()).unwrap();
        let text = config.to_json_pretty().unwrap();
        let keys: Vec<usize> = ["colours", "height", "side_length", "speed", "width"]
            .iter()
            .map(|k| text.find(&format!("\"{}\"", k)).unwrap())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("\n    \"colours\""));
    }

    #[test]
    fn test_new_applies_ranges() {
        let colours = vec![
            HexColour::parse("#000").unwrap(),
            HexColour::parse("#fff").unwrap(),
        ];
        assert!(PatternConfig::new(11, 100, 100, 10, colours.clone()).is_err());
        assert!(PatternConfig::new(10, 100, 100, 10, colours).is_ok());
    }

    #[test]
    fn test_default_is_valid() {
        let config = PatternConfig::default();
        assert_eq!(validate(&config.to_value().unwrap()).unwrap(), config);
    }
}
