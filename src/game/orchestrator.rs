//! The game: owns the current session and drives it through its phases.
//!
//! ## Timeline
//!
//! With `n` buttons and time unit `u`:
//!
//! ```text
//! t = 0        start: buttons numbered, in flow layout      (Arranged)
//! t = n·u      scramble 1                                   (Scrambling)
//! t = 2n·u     scramble 2
//! ...
//! t = n·n·u    scramble n
//! t = (n+1)n·u labels hidden, clicks accepted               (AwaitingInput)
//! ```
//!
//! Time only moves when the host calls `advance`; the game never reads a
//! wall clock.
//!
//! ```
//! use scramble_recall::{ButtonId, Canvas, Game, GameConfig, Phase, Size};
//!
//! let mut game = Game::new(GameConfig::default(), Canvas::new(Size::new(800, 600))).unwrap();
//! game.start("3").unwrap();
//! game.run_timers();
//! assert_eq!(game.phase(), Phase::AwaitingInput);
//!
//! for id in 0..3 {
//!     game.click(ButtonId(id));
//! }
//! assert!(matches!(game.phase(), Phase::Resolved(_)));
//! ```

use std::time::Duration;

use im::Vector;
use tracing::{debug, info, warn};

use super::event::{EventRecord, GameEvent, SessionId};
use super::phase::{Outcome, Phase};
use super::session::{Judgement, Session, SessionTask, TaskKind};
use super::snapshot::GameSnapshot;
use crate::button::{Button, ButtonSet};
use crate::core::{ButtonId, ConfigError, GameConfig, GameRng, Position, StartError};
use crate::surface::{stage, Canvas, ElementHandle, Notice, Surface};
use crate::timer::{Fired, Scheduler};

/// Sign of `text` if it is an optionally signed run of ASCII digits.
fn whole_number_sign(text: &str) -> Option<bool> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(negative)
}

/// Session-owning game over a rendering surface.
pub struct Game<S: Surface> {
    config: GameConfig,
    surface: S,
    rng: GameRng,
    scheduler: Scheduler<SessionTask>,
    session: Option<Session>,
    next_session: u64,
    events: Vector<EventRecord>,
}

impl<S: Surface> Game<S> {
    /// Create an idle game.
    pub fn new(config: GameConfig, surface: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = GameRng::new(config.seed);
        Ok(Self {
            config,
            surface,
            rng,
            scheduler: Scheduler::new(),
            session: None,
            next_session: 1,
            events: Vector::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Current session, if one has started.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.as_ref().map_or(Phase::Idle, Session::phase)
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Timers waiting to fire, across all sessions.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &Vector<EventRecord> {
        &self.events
    }

    /// Drain recorded events.
    pub fn take_events(&mut self) -> Vector<EventRecord> {
        std::mem::take(&mut self.events)
    }

    fn record(&mut self, event: GameEvent) {
        let session = self.session.as_ref().map(Session::id);
        self.events.push_back(EventRecord::new(session, self.scheduler.now(), event));
    }

    /// Parse user input as a button count.
    ///
    /// Surrounding whitespace is allowed; anything else that is not a whole
    /// number is rejected rather than coerced.
    pub fn parse_count(&self, input: &str) -> Result<u32, StartError> {
        let trimmed = input.trim();
        let count = match trimmed.parse::<i64>() {
            Ok(count) => count,
            Err(_) => match whole_number_sign(trimmed) {
                // too many digits for i64: still a number, just far out of range
                Some(true) => i64::MIN,
                Some(false) => i64::MAX,
                None => {
                    return Err(StartError::NotANumber {
                        input: trimmed.to_string(),
                    })
                }
            },
        };
        self.check_count(count)
    }

    fn check_count(&self, count: i64) -> Result<u32, StartError> {
        if !self.config.accepts(count) {
            return Err(StartError::OutOfRange {
                count,
                min: self.config.min_buttons,
                max: self.config.max_buttons,
            });
        }
        u32::try_from(count).map_err(|_| StartError::OutOfRange {
            count,
            min: self.config.min_buttons,
            max: self.config.max_buttons,
        })
    }

    /// Start a session from user input.
    ///
    /// On rejection the validation notice is shown and the game is left
    /// exactly as it was, including any session in progress.
    pub fn start(&mut self, input: &str) -> Result<SessionId, StartError> {
        match self.parse_count(input) {
            Ok(count) => Ok(self.begin(count)),
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Start a session with a numeric count.
    pub fn start_count(&mut self, count: i64) -> Result<SessionId, StartError> {
        match self.check_count(count) {
            Ok(count) => Ok(self.begin(count)),
            Err(err) => Err(self.reject(err)),
        }
    }

    fn reject(&mut self, err: StartError) -> StartError {
        warn!(error = %err, "start rejected");
        self.surface.notify(Notice::Validation, &self.config.messages.validation);
        self.record(GameEvent::Rejected { reason: err.to_string() });
        err
    }

    fn begin(&mut self, count: u32) -> SessionId {
        if let Some(mut old) = self.session.take() {
            let stale = old.take_timers();
            let cancelled = stale.iter().filter(|&&id| self.scheduler.cancel(id)).count();
            if cancelled > 0 {
                debug!(session = %old.id(), cancelled, "cancelled timers of replaced session");
                self.session = Some(old);
                self.record(GameEvent::TimersCancelled { count: cancelled });
            }
        }

        let id = SessionId(self.next_session);
        self.next_session += 1;

        self.surface.notify(Notice::Start, &self.config.messages.start);
        stage::clear(&mut self.surface);

        let mut session_rng = self.rng.fork();
        let mut colors = session_rng.for_context("color");
        let placement = session_rng.for_context("placement");

        let size = self.config.button_size;
        let mut buttons = ButtonSet::build(count, |id| Button::create(id, size, stage::random_color(&mut colors)));
        for button in buttons.iter_mut() {
            stage::add_button(&mut self.surface, button);
        }
        stage::arrange(&mut self.surface, &mut buttons);

        let mut session = Session::new(id, buttons, placement);
        let timer = self.scheduler.schedule_once(
            self.config.period_for(count),
            SessionTask { session: id, kind: TaskKind::BeginScramble },
        );
        session.own_timer(timer);
        self.session = Some(session);

        info!(session = %id, count, "session started");
        self.record(GameEvent::Started { count });
        self.record(GameEvent::Arranged);
        id
    }

    /// Move virtual time forward by `dt`, firing every timer that comes due.
    pub fn advance(&mut self, dt: Duration) {
        let horizon = self.scheduler.now().saturating_add(dt);
        while let Some(fired) = self.scheduler.pop_due(horizon) {
            self.on_timer(fired);
        }
        self.scheduler.settle_at(horizon);
    }

    /// Jump to the next pending timer and fire it. Returns false if none.
    pub fn advance_to_next_timer(&mut self) -> bool {
        match self.scheduler.next_due() {
            Some(due) => {
                let dt = due.saturating_sub(self.scheduler.now());
                self.advance(dt);
                true
            }
            None => false,
        }
    }

    /// Fire timers until none are pending.
    pub fn run_timers(&mut self) {
        while self.advance_to_next_timer() {}
    }

    fn on_timer(&mut self, fired: Fired<SessionTask>) {
        let current = self.session.as_ref().map(Session::id);
        if current != Some(fired.task.session) {
            warn!(timer = %fired.id, session = %fired.task.session, "dropping timer of a replaced session");
            self.scheduler.cancel(fired.id);
            return;
        }

        match fired.task.kind {
            TaskKind::BeginScramble => {
                if let Some(session) = self.session.as_mut() {
                    session.release_timer(fired.id);
                }
                self.begin_scramble(fired.task.session);
            }
            TaskKind::ScrambleTick => self.scramble_tick(fired),
        }
    }

    fn begin_scramble(&mut self, id: SessionId) {
        let Some(session) = self.session.as_mut() else { return };
        session.set_phase(Phase::Scrambling);
        let period = self.config.period_for(session.requested_count());
        let timer = self
            .scheduler
            .schedule_every(period, SessionTask { session: id, kind: TaskKind::ScrambleTick });
        session.own_timer(timer);
        debug!(session = %id, ?period, "scrambling");
        self.scramble_once();
    }

    fn scramble_tick(&mut self, fired: Fired<SessionTask>) {
        let done = self.session.as_ref().is_some_and(Session::scrambling_done);
        if !done {
            self.scramble_once();
            return;
        }

        self.scheduler.cancel(fired.id);
        let Some(session) = self.session.as_mut() else { return };
        session.release_timer(fired.id);
        stage::hide_numbers(&mut self.surface, &mut session.buttons);
        session.install_dispatch(stage::make_clickable(&session.buttons));
        session.set_phase(Phase::AwaitingInput);
        debug!(session = %session.id(), "numbers hidden, awaiting input");
        self.record(GameEvent::NumbersHidden);
    }

    fn scramble_once(&mut self) {
        let Some(session) = self.session.as_mut() else { return };
        stage::scramble(&mut self.surface, &mut session.buttons, &mut session.placement_rng);
        let tick = session.record_scramble();
        debug!(session = %session.id(), tick, "scrambled");
        self.record(GameEvent::Scrambled { tick });
    }

    /// Report a click on button `id`.
    pub fn click(&mut self, id: ButtonId) -> Judgement {
        let Some(session) = self.session.as_mut() else {
            warn!(button = %id, "click with no session");
            self.record(GameEvent::ClickIgnored { button: Some(id) });
            return Judgement::Ignored;
        };

        let verdict = session.judge(id);
        match verdict {
            Judgement::Accepted { button, progress } => {
                stage::reveal(&mut self.surface, &mut session.buttons, button);
                self.record(GameEvent::Accepted { button, progress });
            }
            Judgement::Completed { button } => {
                stage::reveal(&mut self.surface, &mut session.buttons, button);
                let progress = session.progress().len();
                info!(session = %session.id(), "sequence completed");
                self.surface.notify(Notice::Success, &self.config.messages.success);
                self.record(GameEvent::Accepted { button, progress });
                self.record(GameEvent::Resolved { outcome: Outcome::Success });
            }
            Judgement::Mistake { clicked, expected } => {
                let order = session.correct_order().to_vec();
                stage::reveal_order(&mut self.surface, &mut session.buttons, &order);
                info!(session = %session.id(), %clicked, %expected, "wrong button");
                self.surface.notify(Notice::Failure, &self.config.messages.failure);
                self.record(GameEvent::Mistake { clicked, expected });
                self.record(GameEvent::Resolved { outcome: Outcome::Failure });
            }
            Judgement::Ignored => {
                debug!(button = %id, phase = %session.phase(), "click ignored");
                self.record(GameEvent::ClickIgnored { button: Some(id) });
            }
        }
        verdict
    }

    /// Report a click on a surface element, routed through the dispatch table.
    pub fn click_element(&mut self, element: ElementHandle) -> Judgement {
        let routed = self.session.as_ref().and_then(|s| s.dispatch().resolve(element));
        match routed {
            Some(id) => self.click(id),
            None => {
                debug!(%element, "click on unrouted element");
                self.record(GameEvent::ClickIgnored { button: None });
                Judgement::Ignored
            }
        }
    }

    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self.scheduler.now(), self.session.as_ref(), &self.rng)
    }
}

impl Game<Canvas> {
    /// Click whatever element is drawn topmost at `point`.
    pub fn click_at(&mut self, point: Position) -> Judgement {
        match self.surface.hit_test(point) {
            Some(element) => self.click_element(element),
            None => {
                self.record(GameEvent::ClickIgnored { button: None });
                Judgement::Ignored
            }
        }
    }
}
