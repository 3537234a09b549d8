//! Host tick sources.
//!
//! The simulator never schedules itself.  It asks a [`TickSource`] for the
//! next tick, and the host delivers it by calling
//! [`RaceSimulator::poll`][crate::RaceSimulator::poll] from whatever loop it
//! owns: a display-refresh callback, a game loop, a timer, or a test.
//!
//! Requests do not stack: asking twice before the tick is delivered still
//! yields one tick.

use std::time::{Duration, Instant};

/// Scheduler abstraction between the simulator and its host.
pub trait TickSource {
    /// Ask for one more tick.
    fn request_tick(&mut self);

    /// Drop any outstanding request.
    fn cancel(&mut self);

    /// Consume the outstanding request if it is due.  Returns `true` when the
    /// caller should process a tick now.
    fn poll_tick(&mut self) -> bool;

    /// Time until the outstanding request becomes due; `None` when nothing
    /// is requested.
    fn time_until_next(&self) -> Option<Duration>;
}

impl<T: TickSource + ?Sized> TickSource for Box<T> {
    fn request_tick(&mut self) {
        (**self).request_tick()
    }
    fn cancel(&mut self) {
        (**self).cancel()
    }
    fn poll_tick(&mut self) -> bool {
        (**self).poll_tick()
    }
    fn time_until_next(&self) -> Option<Duration> {
        (**self).time_until_next()
    }
}

// ── ManualTickSource ──────────────────────────────────────────────────────────

/// Test-controlled stepper: a request is due immediately.
#[derive(Debug, Default, Clone)]
pub struct ManualTickSource {
    pending:       bool,
    requests:      u64,
    cancellations: u64,
}

impl ManualTickSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Total `request_tick` calls received.
    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Total `cancel` calls received.
    pub fn cancellations(&self) -> u64 {
        self.cancellations
    }
}

impl TickSource for ManualTickSource {
    fn request_tick(&mut self) {
        self.pending = true;
        self.requests += 1;
    }

    fn cancel(&mut self) {
        self.pending = false;
        self.cancellations += 1;
    }

    fn poll_tick(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    fn time_until_next(&self) -> Option<Duration> {
        self.pending.then_some(Duration::ZERO)
    }
}

// ── FixedRateTickSource ───────────────────────────────────────────────────────

/// Timer pacing: at most one tick per `interval` of wall-clock time.
///
/// The first request is due immediately; each later one is due `interval`
/// after the previous tick was delivered.
#[derive(Debug, Clone)]
pub struct FixedRateTickSource {
    interval:   Duration,
    pending:    bool,
    last_fired: Option<Instant>,
}

impl FixedRateTickSource {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending:    false,
            last_fired: None,
        }
    }

    /// `hz` ticks per second.  Non-positive or non-finite rates, and rates so
    /// small that the interval overflows `Duration`, fall back to 60 Hz.
    pub fn from_hz(hz: f64) -> Self {
        let fallback = Duration::from_secs_f64(1.0 / 60.0);
        let interval = if hz.is_finite() && hz > 0.0 {
            Duration::try_from_secs_f64(1.0 / hz).unwrap_or(fallback)
        } else {
            fallback
        };
        Self::new(interval)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn due_at(&self) -> Option<Instant> {
        self.last_fired.map(|t| t + self.interval)
    }
}

impl TickSource for FixedRateTickSource {
    fn request_tick(&mut self) {
        self.pending = true;
    }

    fn cancel(&mut self) {
        self.pending = false;
    }

    fn poll_tick(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        let now = Instant::now();
        if let Some(due) = self.due_at() {
            if now < due {
                return false;
            }
        }
        self.pending    = false;
        self.last_fired = Some(now);
        true
    }

    fn time_until_next(&self) -> Option<Duration> {
        if !self.pending {
            return None;
        }
        Some(match self.due_at() {
            Some(due) => due.saturating_duration_since(Instant::now()),
            None      => Duration::ZERO,
        })
    }
}
