// Hex colour tokens as they appear in config files

use crate::pattern_errors::{PatternError, PatternResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated `#rgb` or `#rrggbb` colour. Keeps the original spelling so a
/// config written back to disk looks the way the user typed it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColour(String);

impl HexColour {
    pub fn parse(token: &str) -> PatternResult<Self> {
        let digits = match token.strip_prefix('#') {
            Some(digits) => digits,
            None => return Err(PatternError::InvalidColour(token.to_string())),
        };

        if (digits.len() == 3 || digits.len() == 6)
            && digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            Ok(Self(token.to_string()))
        } else {
            Err(PatternError::InvalidColour(token.to_string()))
        }
    }

    pub fn is_valid(token: &str) -> bool {
        Self::parse(token).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The token without its leading `#`
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }

    /// Red, green and blue channels. Short form expands each nibble (`#abc` -> `#aabbcc`).
    pub fn rgb(&self) -> (u8, u8, u8) {
        let digits = self.digits();
        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).unwrap_or(0);
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);

        if digits.len() == 3 {
            (nibble(0) * 17, nibble(1) * 17, nibble(2) * 17)
        } else {
            (byte(0), byte(2), byte(4))
        }
    }
}

impl TryFrom<String> for HexColour {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColour> for String {
    fn from(colour: HexColour) -> Self {
        colour.0
    }
}

impl fmt::Display for HexColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
