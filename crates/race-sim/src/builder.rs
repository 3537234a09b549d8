//! Fluent builder for constructing a [`RaceSimulator`].

use std::collections::VecDeque;

use race_core::{Competitor, Conditions, RaceConfig, RaceRng};

use crate::sim::IdIndex;
use crate::{CompetitorProgress, RaceObserver, RaceSimulator, RaceState, SimError, SimResult, TickSource};

/// Fluent builder for [`RaceSimulator<S, O>`].
///
/// # Required inputs
///
/// - the field (`Vec<Competitor>`; may be empty)
/// - [`Conditions`]
/// - `S: TickSource`: how the host delivers ticks
/// - `O: RaceObserver`: use [`NoopObserver`][crate::NoopObserver] for none
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                              |
/// |---------------|--------------------------------------|
/// | `.config(c)`  | `RaceConfig::default()`              |
/// | `.rng(r)`     | `RaceRng::new(config.seed)`          |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = RaceBuilder::new(field, conditions, ManualTickSource::new(), NoopObserver)
///     .config(RaceConfig::with_seed(7))
///     .build()?;
/// sim.start();
/// ```
pub struct RaceBuilder<S: TickSource, O: RaceObserver> {
    competitors: Vec<Competitor>,
    conditions:  Conditions,
    config:      Option<RaceConfig>,
    rng:         Option<RaceRng>,
    tick_source: S,
    observer:    O,
}

impl<S: TickSource, O: RaceObserver> RaceBuilder<S, O> {
    /// Create a builder with all required inputs.
    pub fn new(
        competitors: Vec<Competitor>,
        conditions:  Conditions,
        tick_source: S,
        observer:    O,
    ) -> Self {
        Self {
            competitors,
            conditions,
            config: None,
            rng:    None,
            tick_source,
            observer,
        }
    }

    pub fn config(mut self, config: RaceConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Inject a specific RNG instead of seeding from `config.seed`.
    pub fn rng(mut self, rng: RaceRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate inputs, allocate start-line progress, and return an `Idle`
    /// simulator.
    ///
    /// Degenerate fields (empty, or all-zero stat sheets) are accepted.  A
    /// race distance that is not finite and positive is rejected.
    pub fn build(self) -> SimResult<RaceSimulator<S, O>> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        check_conditions(&self.conditions)?;

        let index = index_field(&self.competitors)?;

        for c in self.competitors.iter().filter(|c| c.attributes.clamped().is_degenerate()) {
            log::warn!("{} has all-zero attributes; it may never finish", c.label());
        }

        let progress = self.competitors.iter().map(CompetitorProgress::new).collect();
        let rng = self.rng.unwrap_or_else(|| RaceRng::new(config.seed));

        Ok(RaceSimulator {
            clock:       config.make_clock(),
            history:     VecDeque::with_capacity(config.frame_history.max(1)),
            config,
            conditions:  self.conditions,
            competitors: self.competitors,
            progress,
            index,
            rng,
            state:       RaceState::Idle,
            results:     None,
            tick_source: self.tick_source,
            observer:    self.observer,
        })
    }
}

pub(crate) fn check_conditions(conditions: &Conditions) -> SimResult<()> {
    if !(conditions.distance_m.is_finite() && conditions.distance_m > 0.0) {
        return Err(SimError::Config(format!(
            "race distance must be finite and positive, got {} m",
            conditions.distance_m
        )));
    }
    Ok(())
}

/// Build the id → index lookup, rejecting duplicate and sentinel ids.
pub(crate) fn index_field(competitors: &[Competitor]) -> SimResult<IdIndex> {
    let mut index = IdIndex::default();
    for (i, c) in competitors.iter().enumerate() {
        if !c.id.is_valid() {
            return Err(SimError::Config(format!(
                "competitor at field index {i} uses the reserved id {}",
                c.id.0
            )));
        }
        if index.insert(c.id, i).is_some() {
            return Err(SimError::DuplicateCompetitor(c.id));
        }
    }
    Ok(index)
}
