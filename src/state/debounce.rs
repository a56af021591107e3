//! Single-slot debounce timer.
//!
//! Coalesces bursts of keystrokes into one search. Every keystroke re-arms
//! the slot, cancelling whatever was outstanding, so at most one timer is
//! ever live and a cancelled timer can never fire.
//!
//! The controller owns no scheduler: callers pass `now` explicitly and either
//! ask for the [`Debouncer::deadline`] to sleep on, or hand back the
//! [`TimerToken`] they were given when their own delayed task wakes up.

use std::time::{Duration, Instant};

/// Default quiet interval between the last keystroke and the search.
pub const DEFAULT_QUIET_INTERVAL: Duration = Duration::from_millis(300);

/// Handle for one armed timer. Stale handles are rejected by
/// [`Debouncer::fire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// No search scheduled.
    Idle,
    /// A search is scheduled.
    Pending {
        /// Handle of the live timer.
        token: TimerToken,
        /// When the timer was armed.
        scheduled_at: Instant,
        /// When the timer is due.
        fire_at: Instant,
    },
}

/// Debounce controller.
///
/// # Cardinality
/// - Idle: 1 state
/// - Pending: exactly one live token
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    state: DebounceState,
    generation: u64,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_INTERVAL)
    }
}

impl Debouncer {
    /// Create an idle controller with the given quiet interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: DebounceState::Idle,
            generation: 0,
        }
    }

    /// Quiet interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Current state.
    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// Whether a search is scheduled.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    /// Record a keystroke at `now`.
    ///
    /// Cancels the outstanding timer, if any, then arms a fresh one due one
    /// quiet interval from `now`.
    pub fn arm(&mut self, now: Instant) -> TimerToken {
        self.cancel();
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken(self.generation);
        self.state = DebounceState::Pending {
            token,
            scheduled_at: now,
            fire_at: now + self.interval,
        };
        token
    }

    /// Cancel the outstanding timer. Returns the cancelled token.
    pub fn cancel(&mut self) -> Option<TimerToken> {
        match std::mem::replace(&mut self.state, DebounceState::Idle) {
            DebounceState::Pending { token, .. } => Some(token),
            DebounceState::Idle => None,
        }
    }

    /// When the live timer is due.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            DebounceState::Pending { fire_at, .. } => Some(fire_at),
            DebounceState::Idle => None,
        }
    }

    /// Time left until the live timer is due, saturating at zero.
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|fire_at| fire_at.saturating_duration_since(now))
    }

    /// Fire `token` at `now`.
    ///
    /// Succeeds only for the live token at or after its deadline; the
    /// controller then returns to idle. Stale or early fires are ignored.
    pub fn fire(&mut self, token: TimerToken, now: Instant) -> bool {
        match self.state {
            DebounceState::Pending {
                token: live,
                fire_at,
                ..
            } if live == token && now >= fire_at => {
                self.state = DebounceState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Fire the live timer if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            DebounceState::Pending { token, .. } => self.fire(token, now),
            DebounceState::Idle => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn new_debouncer_is_idle() {
        let debouncer = Debouncer::default();
        assert_eq!(debouncer.state(), DebounceState::Idle);
        assert_eq!(debouncer.interval(), DEFAULT_QUIET_INTERVAL);
        assert_eq!(debouncer.deadline(), None);
    }

    #[test]
    fn arm_schedules_one_interval_ahead() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::default();
        debouncer.arm(t0);

        assert!(debouncer.is_pending());
        assert_eq!(debouncer.deadline(), Some(t0 + ms(300)));
        assert_eq!(debouncer.time_until_fire(t0 + ms(100)), Some(ms(200)));
    }

    #[test]
    fn does_not_fire_before_deadline() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::default();
        debouncer.arm(t0);

        assert!(!debouncer.poll(t0 + ms(299)));
        assert!(debouncer.is_pending());
    }

    #[test]
    fn fires_once_at_deadline_then_idles() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::default();
        debouncer.arm(t0);

        assert!(debouncer.poll(t0 + ms(300)));
        assert_eq!(debouncer.state(), DebounceState::Idle);
        assert!(!debouncer.poll(t0 + ms(600)));
    }

    #[test]
    fn burst_of_keystrokes_fires_once_after_last() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::default();
        debouncer.arm(t0);
        debouncer.arm(t0 + ms(100));
        debouncer.arm(t0 + ms(150));

        let mut fires = 0;
        for step in 0..=100 {
            if debouncer.poll(t0 + ms(step * 10)) {
                fires += 1;
                assert_eq!(step * 10, 450, "should fire at 450ms");
            }
        }
        assert_eq!(fires, 1);
    }

    #[test]
    fn stale_token_never_fires() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::default();
        let stale = debouncer.arm(t0);
        let live = debouncer.arm(t0 + ms(100));

        assert!(!debouncer.fire(stale, t0 + ms(300)));
        assert!(debouncer.is_pending(), "stale fire must not consume the live timer");
        assert!(debouncer.fire(live, t0 + ms(400)));
    }

    #[test]
    fn early_fire_is_ignored() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::default();
        let token = debouncer.arm(t0);
        assert!(!debouncer.fire(token, t0 + ms(10)));
        assert!(debouncer.fire(token, t0 + ms(300)));
    }

    #[test]
    fn cancel_returns_live_token() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::default();
        let token = debouncer.arm(t0);

        assert_eq!(debouncer.cancel(), Some(token));
        assert_eq!(debouncer.cancel(), None);
        assert!(!debouncer.fire(token, t0 + ms(300)));
    }

    #[test]
    fn pending_state_records_schedule_time() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(50));
        let token = debouncer.arm(t0);
        assert_eq!(
            debouncer.state(),
            DebounceState::Pending {
                token,
                scheduled_at: t0,
                fire_at: t0 + ms(50),
            }
        );
    }

    #[test]
    fn zero_interval_fires_immediately() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(Duration::ZERO);
        debouncer.arm(t0);
        assert!(debouncer.poll(t0));
    }
}
