//! One play-through.
//!
//! A `Session` owns the buttons, the correct order, the player's progress
//! and the timer handles it scheduled. The game replaces it wholesale on
//! every start.
//!
//! ## Invariant
//!
//! While the session is active, `progress` is a strict prefix of
//! `correct_order`. It only equals `correct_order` once resolved as a success.

use smallvec::SmallVec;

use super::event::SessionId;
use super::phase::{Outcome, Phase};
use crate::button::{ButtonSet, Order};
use crate::core::{ButtonId, GameRng};
use crate::surface::ClickDispatch;
use crate::timer::TimerId;

/// Work a session schedules on the timer queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionTask {
    pub session: SessionId,
    pub kind: TaskKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    /// End of the initial pause: first scramble.
    BeginScramble,
    /// Periodic scramble tick.
    ScrambleTick,
}

/// Verdict on one click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Judgement {
    /// Correct button; `progress` buttons accepted so far.
    Accepted { button: ButtonId, progress: usize },
    /// Correct final button; session resolved as a success.
    Completed { button: ButtonId },
    /// Wrong button; session resolved as a failure.
    Mistake { clicked: ButtonId, expected: ButtonId },
    /// Not accepting input, or not a button of this session.
    Ignored,
}

impl Judgement {
    /// Outcome this click produced, if it ended the session.
    #[must_use]
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Judgement::Completed { .. } => Some(Outcome::Success),
            Judgement::Mistake { .. } => Some(Outcome::Failure),
            _ => None,
        }
    }
}

/// State of one play-through.
#[derive(Clone, Debug)]
pub struct Session {
    id: SessionId,
    requested: u32,
    pub(crate) buttons: ButtonSet,
    correct_order: Order,
    progress: Order,
    phase: Phase,
    scrambles: u32,
    pub(crate) placement_rng: GameRng,
    dispatch: ClickDispatch,
    timers: SmallVec<[TimerId; 2]>,
}

impl Session {
    /// Start a session over freshly built `buttons`.
    ///
    /// The correct order is the buttons' creation order.
    pub(crate) fn new(id: SessionId, buttons: ButtonSet, placement_rng: GameRng) -> Self {
        let correct_order = buttons.creation_order();
        Self {
            id,
            requested: buttons.len() as u32,
            buttons,
            correct_order,
            progress: Order::new(),
            phase: Phase::Arranged,
            scrambles: 0,
            placement_rng,
            dispatch: ClickDispatch::new(),
            timers: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn requested_count(&self) -> u32 {
        self.requested
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn buttons(&self) -> &ButtonSet {
        &self.buttons
    }

    #[must_use]
    pub fn correct_order(&self) -> &[ButtonId] {
        &self.correct_order
    }

    #[must_use]
    pub fn progress(&self) -> &[ButtonId] {
        &self.progress
    }

    /// Scramble ticks performed so far.
    #[must_use]
    pub fn scrambles(&self) -> u32 {
        self.scrambles
    }

    #[must_use]
    pub fn dispatch(&self) -> &ClickDispatch {
        &self.dispatch
    }

    /// Timers this session still owns.
    #[must_use]
    pub fn timers(&self) -> &[TimerId] {
        &self.timers
    }

    /// Identity the player must click next.
    #[must_use]
    pub fn next_expected(&self) -> Option<ButtonId> {
        self.correct_order.get(self.progress.len()).copied()
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn own_timer(&mut self, id: TimerId) {
        self.timers.push(id);
    }

    pub(crate) fn release_timer(&mut self, id: TimerId) {
        self.timers.retain(|t| *t != id);
    }

    pub(crate) fn take_timers(&mut self) -> SmallVec<[TimerId; 2]> {
        std::mem::take(&mut self.timers)
    }

    /// Count one scramble. Returns the tick number (1-based).
    pub(crate) fn record_scramble(&mut self) -> u32 {
        self.scrambles += 1;
        self.scrambles
    }

    /// True once every requested scramble has run.
    #[must_use]
    pub fn scrambling_done(&self) -> bool {
        self.scrambles >= self.requested
    }

    pub(crate) fn install_dispatch(&mut self, dispatch: ClickDispatch) {
        self.dispatch = dispatch;
    }

    /// Judge a click and advance the session accordingly.
    ///
    /// Only updates progress and phase; revealing labels is up to the caller.
    pub fn judge(&mut self, clicked: ButtonId) -> Judgement {
        if !self.phase.accepts_input() || !self.buttons.contains(clicked) {
            return Judgement::Ignored;
        }
        let Some(expected) = self.next_expected() else {
            return Judgement::Ignored;
        };

        if clicked != expected {
            self.phase = Phase::Resolved(Outcome::Failure);
            return Judgement::Mistake { clicked, expected };
        }

        self.progress.push(clicked);
        if self.progress.len() == self.correct_order.len() {
            self.phase = Phase::Resolved(Outcome::Success);
            Judgement::Completed { button: clicked }
        } else {
            Judgement::Accepted {
                button: clicked,
                progress: self.progress.len(),
            }
        }
    }
}
