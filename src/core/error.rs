//! Error types.

use thiserror::Error;

/// Why a start request was rejected.
///
/// A rejected start leaves the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("button count {input:?} is not a whole number")]
    NotANumber { input: String },
    #[error("button count {count} is outside {min}..={max}")]
    OutOfRange { count: i64, min: u32, max: u32 },
}

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum button count must be at least 1")]
    ZeroMinimum,
    #[error("minimum button count ({min}) exceeds maximum ({max})")]
    InvertedRange { min: u32, max: u32 },
    #[error("maximum button count ({max}) exceeds the supported limit of {limit}")]
    TooManyButtons { max: u32, limit: u32 },
    #[error("time unit must be greater than zero")]
    ZeroUnit,
    #[error("button size {width}x{height} has a zero dimension")]
    EmptyButton { width: u32, height: u32 },
    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Snapshot encoding or decoding failed.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_error_messages() {
        let err = StartError::OutOfRange { count: 8, min: 3, max: 7 };
        assert_eq!(err.to_string(), "button count 8 is outside 3..=7");

        let err = StartError::NotANumber { input: "abc".into() };
        assert_eq!(err.to_string(), "button count \"abc\" is not a whole number");
    }

    #[test]
    fn test_config_error_from_json() {
        let err: ConfigError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
