//! Game events.
//!
//! Every transition the game makes is recorded as a `GameEvent`, stamped
//! with the session it belongs to and the virtual time it happened at.
//! Front-ends drain them with `Game::take_events`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::phase::Outcome;
use crate::core::ButtonId;

/// Identifier of one play-through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Something that happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A start request was refused.
    Rejected { reason: String },
    /// A session started with `count` buttons.
    Started { count: u32 },
    /// Timers left over from the previous session were cancelled.
    TimersCancelled { count: usize },
    /// Buttons laid out in order.
    Arranged,
    /// One scramble tick (1-based).
    Scrambled { tick: u32 },
    /// Every label blanked; clicks are accepted from now on.
    NumbersHidden,
    /// A correct click; `progress` buttons accepted so far.
    Accepted { button: ButtonId, progress: usize },
    /// A click arrived that the session could not use.
    ClickIgnored { button: Option<ButtonId> },
    /// Wrong button clicked.
    Mistake { clicked: ButtonId, expected: ButtonId },
    /// Session over.
    Resolved { outcome: Outcome },
}

/// A `GameEvent` with its context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Session the event belongs to; `None` before any session started.
    pub session: Option<SessionId>,
    /// Virtual time of the event.
    pub at: Duration,
    pub event: GameEvent,
}

impl EventRecord {
    #[must_use]
    pub fn new(session: Option<SessionId>, at: Duration, event: GameEvent) -> Self {
        Self { session, at, event }
    }
}
