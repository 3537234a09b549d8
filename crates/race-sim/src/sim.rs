//! The `RaceSimulator` struct and its tick loop.

use std::collections::VecDeque;
use std::time::Duration;

use race_core::{Competitor, CompetitorId, Conditions, RaceClock, RaceConfig, RaceRng};

use crate::physics;
use crate::progress::{leader_of, rank_results};
use crate::{CompetitorProgress, Frame, RaceObserver, RaceResult, TickSource};

#[cfg(feature = "fx-hash")]
pub(crate) type IdIndex = rustc_hash::FxHashMap<CompetitorId, usize>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type IdIndex = std::collections::HashMap<CompetitorId, usize>;

/// Lifecycle state.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum RaceState {
    /// Constructed, not started.
    #[default]
    Idle,
    /// Ticking.
    Running,
    /// Cancelled by [`RaceSimulator::stop`].  Terminal.
    Stopped,
    /// Every competitor finished and results were delivered.  Terminal.
    Finished,
}

// ── RaceSimulator ─────────────────────────────────────────────────────────────

/// The race simulator.
///
/// Holds the field, one [`CompetitorProgress`] per competitor (same order),
/// and drives the per-tick rule in [`physics`].  The progress collection is
/// owned exclusively by the simulator; queries hand out copies or shared
/// references only.
///
/// Create via [`RaceBuilder`][crate::RaceBuilder].
pub struct RaceSimulator<S: TickSource, O: RaceObserver> {
    pub(crate) config:      RaceConfig,
    pub(crate) conditions:  Conditions,
    pub(crate) competitors: Vec<Competitor>,
    pub(crate) progress:    Vec<CompetitorProgress>,
    /// `CompetitorId` → index into `competitors` / `progress`.
    pub(crate) index:       IdIndex,
    pub(crate) clock:       RaceClock,
    pub(crate) rng:         RaceRng,
    pub(crate) state:       RaceState,
    /// Most recent frames, oldest first.  Never empty once a tick has run.
    pub(crate) history:     VecDeque<Frame>,
    pub(crate) results:     Option<Vec<RaceResult>>,
    pub(crate) tick_source: S,
    pub(crate) observer:    O,
}

impl<S: TickSource, O: RaceObserver> RaceSimulator<S, O> {
    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// `Idle` → `Running` and request the first tick.  No-op in any other
    /// state, so a second call never double-schedules.
    pub fn start(&mut self) {
        if self.state != RaceState::Idle {
            log::debug!("start() ignored in state {:?}", self.state);
            return;
        }
        self.state = RaceState::Running;
        log::debug!(
            "race started: {} competitors, {} / {}",
            self.competitors.len(),
            self.conditions.surface,
            self.conditions.weather
        );
        self.tick_source.request_tick();
    }

    /// `Running` → `Stopped` and cancel the pending tick.  No-op in any
    /// other state.  Progress is kept and stays queryable.
    pub fn stop(&mut self) {
        if self.state != RaceState::Running {
            return;
        }
        self.state = RaceState::Stopped;
        self.tick_source.cancel();
        log::debug!("race stopped at {}", self.clock);
    }

    /// Host entry point: process one tick if the simulator is running and
    /// its tick source has a due request.  Returns `true` if a tick ran.
    pub fn poll(&mut self) -> bool {
        if self.state != RaceState::Running {
            return false;
        }
        if !self.tick_source.poll_tick() {
            return false;
        }
        self.process_tick();
        true
    }

    /// Drive the race from the calling thread until it leaves `Running` or
    /// `max_ticks` ticks have been processed by this call, sleeping while
    /// the tick source is not yet due.  Returns the resulting state.
    pub fn run_to_finish(&mut self, max_ticks: u64) -> RaceState {
        let mut ticks = 0;
        while self.state == RaceState::Running && ticks < max_ticks {
            if self.poll() {
                ticks += 1;
                continue;
            }
            match self.tick_source.time_until_next() {
                Some(wait) if wait > Duration::ZERO => std::thread::sleep(wait),
                Some(_) => {}
                None => break,
            }
        }
        self.state
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn state(&self) -> RaceState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RaceState::Running
    }

    /// Copy of every competitor's progress, in field order.
    pub fn current_positions(&self) -> Vec<CompetitorProgress> {
        self.progress.clone()
    }

    /// Mean position across the field; 0 for an empty field.
    pub fn progress(&self) -> f64 {
        if self.progress.is_empty() {
            return 0.0;
        }
        self.progress.iter().map(|p| p.position).sum::<f64>() / self.progress.len() as f64
    }

    /// Progress of one competitor by id.
    pub fn progress_of(&self, id: CompetitorId) -> Option<&CompetitorProgress> {
        self.index.get(&id).map(|&i| &self.progress[i])
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn competitor(&self, id: CompetitorId) -> Option<&Competitor> {
        self.index.get(&id).map(|&i| &self.competitors[i])
    }

    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    pub fn clock(&self) -> &RaceClock {
        &self.clock
    }

    /// Frame of the most recent tick.
    pub fn latest_frame(&self) -> Option<&Frame> {
        self.history.back()
    }

    /// Retained frames, oldest first.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.history.iter()
    }

    /// Ranked results once `Finished`.
    pub fn results(&self) -> Option<&[RaceResult]> {
        self.results.as_deref()
    }

    pub fn tick_source(&self) -> &S {
        &self.tick_source
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self) {
        self.clock.advance();
        let now = self.clock.current_tick;

        // ── Update every unfinished competitor, in field order ───────────
        //
        // Field order is load-bearing: it fixes the RNG draw order and is
        // the final tie-break for same-tick finishers.
        for (competitor, progress) in self.competitors.iter().zip(self.progress.iter_mut()) {
            if progress.finished {
                continue;
            }
            physics::advance(
                competitor,
                progress,
                &self.conditions,
                self.config.distance_scale,
                now,
                &mut self.rng,
            );
            if progress.finished {
                log::debug!("{} finished at {}", competitor.label(), now);
            }
        }

        // ── Emit the frame ────────────────────────────────────────────────
        let frame = Frame {
            tick:         now,
            elapsed_secs: self.clock.elapsed_secs(),
            competitors:  self.progress.clone(),
            leader:       leader_of(&self.progress),
        };
        log::trace!("{}: leader {:?}", now, frame.leader);
        self.observer.on_frame(&frame);
        self.record_frame(frame);

        // ── Completion check ──────────────────────────────────────────────
        if self.progress.iter().all(|p| p.finished) {
            let results = rank_results(&self.progress, &self.clock);
            self.observer.on_complete(&results);
            self.results = Some(results);
            self.state = RaceState::Finished;
            log::info!(
                "race finished at {}: {} competitors ranked",
                self.clock,
                self.progress.len()
            );
        } else {
            self.tick_source.request_tick();
        }
    }

    fn record_frame(&mut self, frame: Frame) {
        let cap = self.config.frame_history.max(1);
        while self.history.len() >= cap {
            self.history.pop_front();
        }
        self.history.push_back(frame);
    }
}
