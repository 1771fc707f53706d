//! Session phases.

use serde::{Deserialize, Serialize};

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every button clicked in the original order.
    Success,
    /// A button was clicked out of order.
    Failure,
}

/// Where the game is in a session.
///
/// Validation happens synchronously inside `Game::start`, so there is no
/// observable validating phase.
///
/// ```text
/// Idle → Arranged → Scrambling → AwaitingInput → Resolved(Success | Failure)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No session has started.
    #[default]
    Idle,
    /// Buttons laid out in order, numbers visible.
    Arranged,
    /// Buttons jumping to random positions.
    Scrambling,
    /// Numbers hidden, waiting for clicks.
    AwaitingInput,
    /// Session over.
    Resolved(Outcome),
}

impl Phase {
    /// True while a session is running (timers pending or input expected).
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Phase::Arranged | Phase::Scrambling | Phase::AwaitingInput)
    }

    #[must_use]
    pub fn accepts_input(self) -> bool {
        self == Phase::AwaitingInput
    }

    #[must_use]
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Phase::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => f.write_str("idle"),
            Phase::Arranged => f.write_str("arranged"),
            Phase::Scrambling => f.write_str("scrambling"),
            Phase::AwaitingInput => f.write_str("awaiting input"),
            Phase::Resolved(Outcome::Success) => f.write_str("resolved (success)"),
            Phase::Resolved(Outcome::Failure) => f.write_str("resolved (failure)"),
        }
    }
}
