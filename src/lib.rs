//! # scramble-recall
//!
//! A "watch, scramble, recall" memory game engine.
//!
//! The player picks how many buttons to play with. The buttons show their
//! numbers, jump around the screen a few times, go blank, and the player has
//! to click them back in the original order.
//!
//! ## Design Principles
//!
//! 1. **Surface-Agnostic**: The engine drives any display through the
//!    `Surface` trait. `Canvas` is the bundled headless surface.
//!
//! 2. **Virtual Time**: Pauses and scramble ticks run on a `Scheduler`
//!    the host advances, so play is deterministic and testable.
//!
//! 3. **Explicit Ownership**: One `Game` owns one `Session` at a time.
//!    Starting again cancels the old session's timers and replaces it.
//!
//! ## Modules
//!
//! - `core`: Button identities, geometry, colors, RNG, configuration, errors
//! - `button`: Buttons and identity-keyed button storage
//! - `timer`: Cancellable virtual-time timers
//! - `surface`: Rendering boundary, stage operations, click dispatch, `Canvas`
//! - `game`: Phases, sessions, events, snapshots and the `Game` orchestrator

pub mod core;
pub mod button;
pub mod timer;
pub mod surface;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ButtonId, Color, Position, Rect, Size,
    GameRng, GameRngState,
    GameConfig, Messages,
    ConfigError, SnapshotError, StartError,
};

pub use crate::button::{random_placement, Button, ButtonSet, DisplayState, Order, Placement};

pub use crate::timer::{Scheduler, TimerId};

pub use crate::surface::{Canvas, ClickDispatch, ElementHandle, ElementView, Notice, Surface};

pub use crate::game::{
    EventRecord, Game, GameEvent, GameSnapshot, Judgement, Outcome, Phase, Session, SessionId,
};
