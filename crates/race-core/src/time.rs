//! Simulation time model and run configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  The mapping to
//! simulated seconds is held in `RaceClock`:
//!
//!   elapsed_secs = tick * tick_duration_secs
//!
//! This is a nominal approximation (default 1/60 s per tick), not a
//! wall-clock measurement: a host that delivers ticks late does not stretch
//! race times.

use std::fmt;

use crate::{CoreResult, RaceError};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.  Tick 0 is "before the first step";
/// the first processed tick is `Tick(1)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RaceClock ─────────────────────────────────────────────────────────────────

/// Converts tick counts into simulated seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceClock {
    /// Simulated seconds per tick.  Default: 1/60.
    pub tick_duration_secs: f64,
    /// Number of ticks processed so far.
    pub current_tick:       Tick,
}

impl RaceClock {
    pub fn new(tick_duration_secs: f64) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Simulated seconds since the start.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.secs_at(self.current_tick)
    }

    /// Simulated seconds at an arbitrary tick.
    #[inline]
    pub fn secs_at(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.tick_duration_secs
    }
}

impl fmt::Display for RaceClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── RaceConfig ────────────────────────────────────────────────────────────────

/// Nominal tick duration: one display frame at 60 Hz.
pub const DEFAULT_TICK_DURATION_SECS: f64 = 1.0 / 60.0;

/// Normalized course fraction covered per tick per unit of velocity.
///
/// Purely a tuning knob: with the default, a field of ~80-rated competitors
/// finishes in roughly 300 ticks (about five seconds at 60 Hz).
pub const DEFAULT_DISTANCE_SCALE: f64 = 0.000_05;

/// Frames retained in the simulator's diagnostic history.
pub const DEFAULT_FRAME_HISTORY: usize = 120;

/// Run configuration.
///
/// Typically built with `RaceConfig::default()` and a chosen seed, or loaded
/// from JSON by the application crate (requires the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RaceConfig {
    /// Master RNG seed.  The same seed always produces identical races.
    pub seed:               u64,

    /// Simulated seconds per tick, used for elapsed/finish times.
    pub tick_duration_secs: f64,

    /// Per-tick distance scale: `position += velocity * distance_scale`.
    /// Controls race duration independently of the ability scale.
    pub distance_scale:     f64,

    /// Number of most recent frames kept for diagnostics.  0 keeps none
    /// (the latest frame is still available).
    pub frame_history:      usize,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            seed:               0,
            tick_duration_secs: DEFAULT_TICK_DURATION_SECS,
            distance_scale:     DEFAULT_DISTANCE_SCALE,
            frame_history:      DEFAULT_FRAME_HISTORY,
        }
    }
}

impl RaceConfig {
    /// Default configuration with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }

    /// Reject non-finite or non-positive time and distance scales.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.tick_duration_secs.is_finite() && self.tick_duration_secs > 0.0) {
            return Err(RaceError::Config(format!(
                "tick_duration_secs must be positive and finite, got {}",
                self.tick_duration_secs
            )));
        }
        if !(self.distance_scale.is_finite() && self.distance_scale > 0.0) {
            return Err(RaceError::Config(format!(
                "distance_scale must be positive and finite, got {}",
                self.distance_scale
            )));
        }
        Ok(())
    }

    /// Construct a `RaceClock` pre-configured for this run.
    pub fn make_clock(&self) -> RaceClock {
        RaceClock::new(self.tick_duration_secs)
    }
}
