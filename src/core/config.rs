//! Game configuration.
//!
//! Hosts configure the game at startup by providing:
//! - The accepted button-count range
//! - The time unit every pause and scramble period is a multiple of
//! - Button size and RNG seed
//! - `Messages`: the user-visible text for each notice
//!
//! Configs can be built in code or loaded from JSON; missing JSON fields
//! fall back to the defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::geometry::Size;

/// Hard upper bound on buttons per session.
pub const MAX_SUPPORTED_BUTTONS: u32 = 64;

/// User-visible text shown through the surface.
///
/// The engine never interprets these strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Shown when a session starts.
    pub start: String,
    /// Shown when the requested count is rejected.
    pub validation: String,
    /// Shown when the full sequence is entered.
    pub success: String,
    /// Shown when a wrong button is clicked.
    pub failure: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            start: "Memorize the order! The buttons will scramble shortly.".to_string(),
            validation: "Please enter a number between 3 and 7.".to_string(),
            success: "Excellent memory!".to_string(),
            failure: "Wrong order!".to_string(),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Smallest accepted button count (inclusive).
    pub min_buttons: u32,

    /// Largest accepted button count (inclusive).
    pub max_buttons: u32,

    /// Time unit in milliseconds. With `n` buttons the initial pause and
    /// every scramble period last `n` units.
    pub unit_ms: u64,

    /// Size of every button.
    pub button_size: Size,

    /// Seed for colors and placements.
    pub seed: u64,

    /// Notice text.
    pub messages: Messages,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_buttons: 3,
            max_buttons: 7,
            unit_ms: 1000,
            // 10em x 5em at a 16px root font
            button_size: Size::new(160, 80),
            seed: 42,
            messages: Messages::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the accepted button-count range.
    #[must_use]
    pub fn with_range(mut self, min: u32, max: u32) -> Self {
        self.min_buttons = min;
        self.max_buttons = max;
        self
    }

    /// Set the time unit.
    #[must_use]
    pub fn with_unit(mut self, unit: Duration) -> Self {
        self.unit_ms = u64::try_from(unit.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the button size.
    #[must_use]
    pub fn with_button_size(mut self, size: Size) -> Self {
        self.button_size = size;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the notice text.
    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// The time unit as a `Duration`.
    #[must_use]
    pub fn unit(&self) -> Duration {
        Duration::from_millis(self.unit_ms)
    }

    /// Pause before the first scramble, and the period between scrambles,
    /// for a session of `count` buttons.
    #[must_use]
    pub fn period_for(&self, count: u32) -> Duration {
        self.unit() * count
    }

    /// Check if `count` is an accepted button count.
    #[must_use]
    pub fn accepts(&self, count: i64) -> bool {
        (i64::from(self.min_buttons)..=i64::from(self.max_buttons)).contains(&count)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_buttons == 0 {
            return Err(ConfigError::ZeroMinimum);
        }
        if self.min_buttons > self.max_buttons {
            return Err(ConfigError::InvertedRange {
                min: self.min_buttons,
                max: self.max_buttons,
            });
        }
        if self.max_buttons > MAX_SUPPORTED_BUTTONS {
            return Err(ConfigError::TooManyButtons {
                max: self.max_buttons,
                limit: MAX_SUPPORTED_BUTTONS,
            });
        }
        if self.unit_ms == 0 {
            return Err(ConfigError::ZeroUnit);
        }
        if self.button_size.is_empty() {
            return Err(ConfigError::EmptyButton {
                width: self.button_size.width,
                height: self.button_size.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.min_buttons, 3);
        assert_eq!(config.max_buttons, 7);
        assert_eq!(config.unit(), Duration::from_secs(1));
        assert_eq!(config.button_size, Size::new(160, 80));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_accepts_boundaries() {
        let config = GameConfig::default();
        assert!(!config.accepts(2));
        assert!(config.accepts(3));
        assert!(config.accepts(7));
        assert!(!config.accepts(8));
        assert!(!config.accepts(-3));
    }

    #[test]
    fn test_period_scales_with_count() {
        let config = GameConfig::default().with_unit(Duration::from_millis(250));
        assert_eq!(config.period_for(4), Duration::from_secs(1));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_range(2, 9)
            .with_seed(7)
            .with_button_size(Size::new(50, 20));

        assert_eq!(config.min_buttons, 2);
        assert_eq!(config.max_buttons, 9);
        assert_eq!(config.seed, 7);
        assert_eq!(config.button_size, Size::new(50, 20));
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        assert_eq!(
            GameConfig::new().with_range(0, 3).validate(),
            Err(ConfigError::ZeroMinimum)
        );
        assert_eq!(
            GameConfig::new().with_range(5, 4).validate(),
            Err(ConfigError::InvertedRange { min: 5, max: 4 })
        );
        assert!(matches!(
            GameConfig::new().with_range(1, 65).validate(),
            Err(ConfigError::TooManyButtons { .. })
        ));
        assert_eq!(
            GameConfig::new().with_unit(Duration::ZERO).validate(),
            Err(ConfigError::ZeroUnit)
        );
        assert!(matches!(
            GameConfig::new().with_button_size(Size::new(0, 10)).validate(),
            Err(ConfigError::EmptyButton { .. })
        ));
    }

    #[test]
    fn test_from_json_partial() {
        let config = GameConfig::from_json(
            r#"{"unit_ms": 10, "messages": {"success": "Well done"}}"#,
        )
        .unwrap();

        assert_eq!(config.unit(), Duration::from_millis(10));
        assert_eq!(config.max_buttons, 7);
        assert_eq!(config.messages.success, "Well done");
        assert_eq!(config.messages.failure, Messages::default().failure);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            GameConfig::from_json(r#"{"unit_ms": 0}"#),
            Err(ConfigError::ZeroUnit)
        ));
        assert!(matches!(
            GameConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }
}
