//! Point-in-time capture of a game, encodable to bytes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::event::SessionId;
use super::phase::Phase;
use super::session::Session;
use crate::button::Button;
use crate::core::{ButtonId, GameRng, GameRngState, SnapshotError};

/// Serializable view of the game at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Virtual time of capture.
    pub at: Duration,
    pub session: Option<SessionId>,
    pub phase: Phase,
    pub requested_count: u32,
    pub scrambles: u32,
    pub correct_order: Vec<ButtonId>,
    pub progress: Vec<ButtonId>,
    /// Buttons in identity order.
    pub buttons: Vec<Button>,
    /// Game-level RNG, the source every session forks from.
    pub rng: GameRngState,
    /// The session's placement stream. Restoring it with
    /// `GameRng::from_state` reproduces the remaining scrambles.
    pub placement_rng: Option<GameRngState>,
}

impl GameSnapshot {
    pub(crate) fn capture(at: Duration, session: Option<&Session>, rng: &GameRng) -> Self {
        match session {
            Some(s) => Self {
                at,
                session: Some(s.id()),
                phase: s.phase(),
                requested_count: s.requested_count(),
                scrambles: s.scrambles(),
                correct_order: s.correct_order().to_vec(),
                progress: s.progress().to_vec(),
                buttons: s.buttons().iter().cloned().collect(),
                rng: rng.state(),
                placement_rng: Some(s.placement_rng.state()),
            },
            None => Self {
                at,
                session: None,
                phase: Phase::Idle,
                requested_count: 0,
                scrambles: 0,
                correct_order: Vec::new(),
                progress: Vec::new(),
                buttons: Vec::new(),
                rng: rng.state(),
                placement_rng: None,
            },
        }
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Labels currently visible, in identity order.
    #[must_use]
    pub fn labels(&self) -> Vec<Option<u32>> {
        self.buttons.iter().map(Button::label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_capture() {
        let snap = GameSnapshot::capture(Duration::from_secs(1), None, &GameRng::new(3));
        assert_eq!(snap.phase, Phase::Idle);
        assert!(snap.buttons.is_empty());
        assert_eq!(snap.rng.seed, 3);
        assert_eq!(snap.placement_rng, None);
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert!(GameSnapshot::from_bytes(&[1, 2, 3]).is_err());
    }
}
