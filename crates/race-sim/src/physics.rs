//! The per-tick update rule.
//!
//! Every unfinished competitor is advanced once per tick by [`advance`],
//! which applies, in order:
//!
//! | Step | Function              | Effect                                            |
//! |------|-----------------------|---------------------------------------------------|
//! | 1    | [`base_performance`]  | 0.4·top speed + 0.3·acceleration + 0.3·stamina    |
//! | 2    | [`surface_modifier`]  | ×1.10 on preferred going, ×0.95 / ×0.90 otherwise |
//! | 3    | [`weather_modifier`]  | rain hits low stamina, mud hits low acceleration  |
//! | 4    | [`variance_span`]     | ± uniform noise, narrower with consistency        |
//! | 5    | [`fade_factor`]       | late-race fade past 75 % of the course            |
//! | 6    | [`ramp_factor`]       | standing-start ramp over the first 10 %           |
//! | 7    |                       | clamp velocity to ≥ 0                             |
//! | 8    |                       | `position += velocity · distance_scale`           |
//! | 9    | [`effective_stamina`] | stamina recomputed from position (30 % drain)     |
//! | 10   |                       | position ≥ 1 → clamp to 1, mark finished          |
//!
//! The weights and modifiers are balance choices, not physics.  They are
//! plain constants so a tuning pass only touches this file.

use race_core::{Attributes, Competitor, Conditions, RaceRng, Surface, Tick, Weather};
use race_core::competitor::ATTRIBUTE_MAX;

use crate::CompetitorProgress;

// ── Tunables ──────────────────────────────────────────────────────────────────

pub const TOP_SPEED_WEIGHT:    f64 = 0.4;
pub const ACCELERATION_WEIGHT: f64 = 0.3;
pub const STAMINA_WEIGHT:      f64 = 0.3;

/// Multiplier when the competitor's preferred surface matches the track.
pub const SURFACE_MATCH_BONUS:      f64 = 1.10;
/// firm↔soft and soft↔heavy.
pub const SURFACE_ADJACENT_PENALTY: f64 = 0.95;
/// firm↔heavy.
pub const SURFACE_FAR_PENALTY:      f64 = 0.90;

/// Performance lost in rain by a zero-stamina competitor (nominal sensitivity).
pub const RAIN_MAX_PENALTY: f64 = 0.20;
/// Performance lost in mud by a zero-acceleration competitor.
pub const MUD_MAX_PENALTY:  f64 = 0.20;

/// Full width of the noise band at zero consistency (±10 points).
pub const VARIANCE_SPAN: f64 = 20.0;

/// Position after which the late-race fade applies.
pub const FADE_START: f64 = 0.75;
/// Reduction at the finish line for a zero-stamina competitor.
pub const FADE_MAX:   f64 = 0.30;

/// Length of the standing-start ramp, as a fraction of the course.
pub const RAMP_END:   f64 = 0.10;
/// Lowest ramp factor.  Without a floor a competitor at position 0 would
/// compute zero velocity forever.
pub const RAMP_FLOOR: f64 = 0.05;

/// Fraction of the stamina attribute drained between start and finish.
pub const STAMINA_DRAIN: f64 = 0.30;

// ── Steps ─────────────────────────────────────────────────────────────────────

/// Step 1: weighted blend of top speed, acceleration, and the current
/// effective stamina.
#[inline]
pub fn base_performance(attrs: &Attributes, stamina: f64) -> f64 {
    TOP_SPEED_WEIGHT * attrs.top_speed
        + ACCELERATION_WEIGHT * attrs.acceleration
        + STAMINA_WEIGHT * stamina
}

/// Step 2: surface match bonus or mismatch penalty.  Symmetric in its
/// arguments apart from the diagonal, which is the bonus.
#[inline]
pub fn surface_modifier(preferred: Surface, actual: Surface) -> f64 {
    match preferred.distance(actual) {
        0 => SURFACE_MATCH_BONUS,
        1 => SURFACE_ADJACENT_PENALTY,
        _ => SURFACE_FAR_PENALTY,
    }
}

/// Step 3: weather penalty proportional to the lacking attribute, scaled by
/// the competitor's sensitivity.  Never negative.
pub fn weather_modifier(weather: Weather, attrs: &Attributes, stamina: f64, sensitivity: f64) -> f64 {
    let sensitivity = if sensitivity.is_nan() { 0.0 } else { sensitivity.max(0.0) };
    let penalty = match weather {
        Weather::Clear => return 1.0,
        Weather::Rain  => RAIN_MAX_PENALTY * lack(stamina),
        Weather::Mud   => MUD_MAX_PENALTY * lack(attrs.acceleration),
    };
    (1.0 - penalty * sensitivity).max(0.0)
}

#[inline]
fn lack(value: f64) -> f64 {
    (1.0 - value / ATTRIBUTE_MAX).clamp(0.0, 1.0)
}

/// Step 4: full width of the uniform noise band.  0 at consistency 100,
/// [`VARIANCE_SPAN`] at consistency 0.
#[inline]
pub fn variance_span(consistency: f64) -> f64 {
    VARIANCE_SPAN * lack(consistency)
}

/// Step 5: 1.0 up to [`FADE_START`], then falling linearly to
/// `1 - FADE_MAX · (1 - stamina/100)` at the finish.
pub fn fade_factor(position: f64, stamina_attr: f64) -> f64 {
    if position <= FADE_START {
        return 1.0;
    }
    let through = ((position - FADE_START) / (1.0 - FADE_START)).min(1.0);
    1.0 - FADE_MAX * lack(stamina_attr) * through
}

/// Step 6: linear ramp over the first [`RAMP_END`] of the course, floored at
/// [`RAMP_FLOOR`].
#[inline]
pub fn ramp_factor(position: f64) -> f64 {
    if position >= RAMP_END {
        1.0
    } else {
        (position / RAMP_END).max(RAMP_FLOOR)
    }
}

/// Step 9: stamina as a pure function of position.
#[inline]
pub fn effective_stamina(initial: f64, position: f64) -> f64 {
    let drained = initial * (1.0 - STAMINA_DRAIN * position.clamp(0.0, 1.0));
    drained.clamp(0.0, initial.max(0.0))
}

/// Steps 1–7: this tick's velocity for `competitor` in its current state.
///
/// Draws exactly one value from `rng`, even at consistency 100, so the
/// stream position depends only on how many competitors are still running.
pub fn compute_velocity(
    competitor: &Competitor,
    progress:   &CompetitorProgress,
    conditions: &Conditions,
    rng:        &mut RaceRng,
) -> f64 {
    let attrs = competitor.attributes.clamped();

    let mut perf = base_performance(&attrs, progress.stamina);
    perf *= surface_modifier(competitor.preferred_surface, conditions.surface);
    perf *= weather_modifier(
        conditions.weather,
        &attrs,
        progress.stamina,
        competitor.weather_sensitivity,
    );
    perf += variance_span(attrs.consistency) * rng.centered_unit();
    perf *= fade_factor(progress.position, attrs.stamina);
    perf *= ramp_factor(progress.position);

    perf.max(0.0)
}

/// Steps 1–10: advance one unfinished competitor by one tick.
///
/// No-op for a finished competitor (and no RNG draw).
pub fn advance(
    competitor:     &Competitor,
    progress:       &mut CompetitorProgress,
    conditions:     &Conditions,
    distance_scale: f64,
    now:            Tick,
    rng:            &mut RaceRng,
) {
    if progress.finished {
        return;
    }

    let velocity = compute_velocity(competitor, progress, conditions, rng);
    progress.velocity = velocity;
    progress.position += velocity * distance_scale;

    let initial = competitor.attributes.clamped().stamina;
    progress.stamina = effective_stamina(initial, progress.position);

    if progress.position >= 1.0 {
        progress.position    = 1.0;
        progress.finished    = true;
        progress.finish_tick = Some(now);
    }
}
