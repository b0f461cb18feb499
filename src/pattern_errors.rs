use std::fmt;

/// Error types for config loading, pattern generation and rendering
#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    /// Config was readable but broke one or more rules (every problem is listed)
    InvalidConfig(Vec<String>),
    /// Config source could not be parsed as JSON
    MalformedFile(String),
    /// Filesystem or terminal I/O failure
    Io(String),
    /// A colour token did not match `#rgb` or `#rrggbb`
    InvalidColour(String),
    /// Asked to fill a non-empty grid from an empty palette
    EmptyPalette,
    /// The canvas backend refused a command
    Canvas(String),
    /// The renderer already reached `Done` and tore its canvas down
    RenderFinished,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidConfig(problems) => {
                write!(f, "Invalid config: {}", problems.join("; "))
            }
            PatternError::MalformedFile(msg) => write!(f, "Malformed config file: {}", msg),
            PatternError::Io(msg) => write!(f, "I/O error: {}", msg),
            PatternError::InvalidColour(token) => {
                write!(f, "Invalid hex colour '{}' (expected #rgb or #rrggbb)", token)
            }
            PatternError::EmptyPalette => {
                write!(f, "Cannot fill a non-empty grid from an empty palette")
            }
            PatternError::Canvas(msg) => write!(f, "Canvas error: {}", msg),
            PatternError::RenderFinished => {
                write!(f, "Render pass already finished; the canvas has been closed")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        PatternError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PatternError {
    fn from(err: serde_json::Error) -> Self {
        PatternError::MalformedFile(err.to_string())
    }
}

impl PatternError {
    /// Build an `InvalidConfig` from a single problem
    pub fn invalid(problem: impl Into<String>) -> Self {
        PatternError::InvalidConfig(vec![problem.into()])
    }
}

/// Result type alias for pattern operations
pub type PatternResult<T> = Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_lists_every_problem() {
        let err = PatternError::InvalidConfig(vec![
            "missing key 'speed'".to_string(),
            "missing key 'width'".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid config: missing key 'speed'; missing key 'width'"
        );
    }

    #[test]
    fn test_serde_errors_become_malformed_file() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let err: PatternError = parse_err.into();
        assert!(matches!(err, PatternError::MalformedFile(_)));
    }

    #[test]
    fn test_io_errors_keep_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.json");
        assert_eq!(PatternError::from(io_err), PatternError::Io("config.json".to_string()));
    }
}
