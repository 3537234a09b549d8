//! Many independent seeded races over the same field.
//!
//! Run `n` uses `derive_seed(config.seed, n)`, so a batch is reproducible
//! and its runs are independent of each other.  With the `parallel` feature
//! the runs are spread over Rayon's thread pool; the tallies are identical
//! either way because each run owns its RNG.

use race_core::{Competitor, CompetitorId, Conditions, RaceConfig, derive_seed};

use crate::builder::{check_conditions, index_field};
use crate::{ManualTickSource, NoopObserver, RaceBuilder, RaceResult, RaceState, SimResult};

/// Placing counts for one competitor across a batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompetitorTally {
    pub competitor:    CompetitorId,
    pub wins:          u32,
    /// Top-three finishes (wins included).
    pub podiums:       u32,
    pub rank_sum:      u64,
    /// Runs that reached `Finished` and therefore contribute a rank.
    pub finished_runs: u32,
}

impl CompetitorTally {
    fn new(competitor: CompetitorId) -> Self {
        Self { competitor, ..Self::default() }
    }

    fn record(&mut self, rank: u32) {
        self.finished_runs += 1;
        self.rank_sum += u64::from(rank);
        if rank == 1 {
            self.wins += 1;
        }
        if rank <= 3 {
            self.podiums += 1;
        }
    }

    /// Fraction of finished runs won; 0 when nothing finished.
    pub fn win_rate(&self) -> f64 {
        if self.finished_runs == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.finished_runs)
        }
    }

    /// Mean rank over finished runs; `None` when nothing finished.
    pub fn mean_rank(&self) -> Option<f64> {
        (self.finished_runs > 0).then(|| self.rank_sum as f64 / f64::from(self.finished_runs))
    }
}

/// Aggregate of a [`simulate_batch`] call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchSummary {
    pub runs:            u32,
    /// Runs that hit `max_ticks` before every competitor finished.
    pub unfinished_runs: u32,
    /// One entry per competitor, in field order.
    pub tallies:         Vec<CompetitorTally>,
}

impl BatchSummary {
    pub fn tally(&self, id: CompetitorId) -> Option<&CompetitorTally> {
        self.tallies.iter().find(|t| t.competitor == id)
    }

    /// Competitor with the most wins.  Earlier field position wins ties.
    pub fn favourite(&self) -> Option<&CompetitorTally> {
        self.tallies
            .iter()
            .fold(None, |best: Option<&CompetitorTally>, t| match best {
                Some(b) if t.wins <= b.wins => Some(b),
                _ => Some(t),
            })
            .filter(|t| t.wins > 0)
    }
}

/// Run `runs` independent races of `competitors` under `conditions`, each
/// capped at `max_ticks`, and tally the placings.
///
/// Fails up front on an invalid config, a bad distance or duplicate ids; no
/// race is run.
pub fn simulate_batch(
    competitors: &[Competitor],
    conditions:  &Conditions,
    config:      &RaceConfig,
    runs:        u32,
    max_ticks:   u64,
) -> SimResult<BatchSummary> {
    config.validate()?;
    check_conditions(conditions)?;
    let index = index_field(competitors)?;

    let run_one = |n: u32| -> SimResult<Option<Vec<RaceResult>>> {
        let run_config = RaceConfig {
            seed: derive_seed(config.seed, u64::from(n)),
            ..config.clone()
        };
        let mut sim = RaceBuilder::new(
            competitors.to_vec(),
            *conditions,
            ManualTickSource::new(),
            NoopObserver,
        )
        .config(run_config)
        .build()?;
        sim.start();
        match sim.run_to_finish(max_ticks) {
            RaceState::Finished => Ok(sim.results.take()),
            _                   => Ok(None),
        }
    };

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<Option<Vec<RaceResult>>> =
        (0..runs).map(run_one).collect::<SimResult<_>>()?;

    #[cfg(feature = "parallel")]
    let outcomes: Vec<Option<Vec<RaceResult>>> = {
        use rayon::prelude::*;
        (0..runs).into_par_iter().map(run_one).collect::<SimResult<_>>()?
    };

    let mut summary = BatchSummary {
        runs,
        unfinished_runs: 0,
        tallies: competitors.iter().map(|c| CompetitorTally::new(c.id)).collect(),
    };

    for outcome in outcomes {
        let Some(results) = outcome else {
            summary.unfinished_runs += 1;
            continue;
        };
        for r in &results {
            if let Some(&i) = index.get(&r.competitor) {
                summary.tallies[i].record(r.rank);
            }
        }
    }

    log::debug!(
        "batch of {} runs: {} unfinished",
        summary.runs,
        summary.unfinished_runs
    );
    Ok(summary)
}
