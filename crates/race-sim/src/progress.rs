//! Per-competitor progress, per-tick frames, and final results.

use race_core::{Competitor, CompetitorId, RaceClock, Tick};

// ── CompetitorProgress ────────────────────────────────────────────────────────

/// Mutable race state of one competitor, owned by the simulator.
///
/// Invariants while a race runs:
/// - `position` is non-decreasing and within `[0, 1]`.
/// - `stamina` is non-increasing and within `[0, initial stamina]`.
/// - `finished` flips to `true` exactly once, on the tick `position` first
///   reaches 1.0, and `finish_tick` records that tick.
#[derive(Clone, Debug, PartialEq)]
pub struct CompetitorProgress {
    pub id:          CompetitorId,
    /// Normalized course position: 0 = start, 1 = finish.
    pub position:    f64,
    /// Velocity computed on the most recent tick (frozen once finished).
    pub velocity:    f64,
    /// Effective stamina.
    pub stamina:     f64,
    pub finished:    bool,
    pub finish_tick: Option<Tick>,
}

impl CompetitorProgress {
    /// Start-line state for `competitor`.
    pub fn new(competitor: &Competitor) -> Self {
        Self {
            id:          competitor.id,
            position:    0.0,
            velocity:    0.0,
            stamina:     competitor.attributes.clamped().stamina,
            finished:    false,
            finish_tick: None,
        }
    }
}

// ── Frame ─────────────────────────────────────────────────────────────────────

/// Snapshot emitted after every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub tick:         Tick,
    /// Simulated seconds: `tick · tick_duration_secs`.
    pub elapsed_secs: f64,
    /// Every competitor, in field order.
    pub competitors:  Vec<CompetitorProgress>,
    /// Competitor with the greatest position; `None` for an empty field.
    pub leader:       Option<CompetitorId>,
}

impl Frame {
    pub fn finished_count(&self) -> usize {
        self.competitors.iter().filter(|p| p.finished).count()
    }
}

/// Competitor with the greatest position.  The first one encountered wins
/// ties.
pub fn leader_of(progress: &[CompetitorProgress]) -> Option<CompetitorId> {
    let mut best: Option<&CompetitorProgress> = None;
    for p in progress {
        match best {
            Some(b) if p.position <= b.position => {}
            _ => best = Some(p),
        }
    }
    best.map(|p| p.id)
}

// ── RaceResult ────────────────────────────────────────────────────────────────

/// Final placing of one competitor.
#[derive(Clone, Debug, PartialEq)]
pub struct RaceResult {
    /// 1-based, dense, unique.
    pub rank:             u32,
    pub competitor:       CompetitorId,
    pub finish_tick:      Tick,
    /// Simulated seconds at `finish_tick`.
    pub finish_time_secs: f64,
    /// Simulated seconds for the whole race (identical for every entry).
    pub elapsed_secs:     f64,
    pub final_position:   f64,
    /// Velocity on the tick the competitor crossed the line.
    pub final_velocity:   f64,
}

/// Rank a completed field.
///
/// Order: position descending, then finish tick ascending, then field order.
/// Every finisher sits at exactly 1.0, so in practice the finish tick
/// decides, and field order breaks same-tick ties.
pub fn rank_results(progress: &[CompetitorProgress], clock: &RaceClock) -> Vec<RaceResult> {
    let finish_key = |p: &CompetitorProgress| p.finish_tick.unwrap_or(Tick(u64::MAX));

    let mut order: Vec<usize> = (0..progress.len()).collect();
    order.sort_by(|&a, &b| {
        let (pa, pb) = (&progress[a], &progress[b]);
        pb.position
            .total_cmp(&pa.position)
            .then_with(|| finish_key(pa).cmp(&finish_key(pb)))
            .then_with(|| a.cmp(&b))
    });

    let elapsed_secs = clock.elapsed_secs();
    order
        .into_iter()
        .enumerate()
        .map(|(i, idx)| {
            let p = &progress[idx];
            let finish_tick = p.finish_tick.unwrap_or(clock.current_tick);
            RaceResult {
                rank:             i as u32 + 1,
                competitor:       p.id,
                finish_tick,
                finish_time_secs: clock.secs_at(finish_tick),
                elapsed_secs,
                final_position:   p.position,
                final_velocity:   p.velocity,
            }
        })
        .collect()
}
