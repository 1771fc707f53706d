//! Core types: button identities, geometry, colors, RNG, configuration, errors.

pub mod entity;
pub mod geometry;
pub mod color;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::ButtonId;
pub use geometry::{Position, Rect, Size};
pub use color::Color;
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, Messages, MAX_SUPPORTED_BUTTONS};
pub use error::{ConfigError, SnapshotError, StartError};
