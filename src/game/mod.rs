//! The game orchestrator.
//!
//! - `phase`: session phases and outcomes
//! - `session`: one play-through and click judging
//! - `event`: the event history front-ends consume
//! - `orchestrator`: `Game`, which validates starts, runs the timed
//!   scramble sequence and routes clicks
//! - `snapshot`: serializable captures of a game

pub mod phase;
pub mod session;
pub mod event;
pub mod orchestrator;
pub mod snapshot;

pub use phase::{Outcome, Phase};
pub use session::{Judgement, Session, SessionTask, TaskKind};
pub use event::{EventRecord, GameEvent, SessionId};
pub use orchestrator::Game;
pub use snapshot::GameSnapshot;
