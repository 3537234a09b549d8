//! Seeded random fields.

use race_core::{Attributes, Competitor, CompetitorId, RaceRng, Surface};

/// Attribute range for generated competitors.
pub const ATTRIBUTE_RANGE: std::ops::RangeInclusive<f64> = 40.0..=95.0;
/// Weather sensitivity range for generated competitors.
pub const SENSITIVITY_RANGE: std::ops::RangeInclusive<f64> = 0.8..=1.2;

const FIRST: &[&str] = &[
    "Night", "Copper", "Silver", "Iron", "Velvet", "Storm", "Amber", "Quiet",
    "Lucky", "Northern", "Crimson", "Paper",
];
const SECOND: &[&str] = &[
    "Ledger", "Tide", "Arrow", "Sonnet", "Harbor", "Comet", "Lantern", "Echo",
    "Meadow", "Verdict", "Gambit", "Orchard",
];

/// `count` competitors with ids `0..count`, drawn from `rng`.
///
/// The same seed always yields the same field.
pub fn generate_roster(count: u32, rng: &mut RaceRng) -> Vec<Competitor> {
    (0..count)
        .map(|i| {
            let attributes = Attributes::new(
                rng.gen_range(ATTRIBUTE_RANGE),
                rng.gen_range(ATTRIBUTE_RANGE),
                rng.gen_range(ATTRIBUTE_RANGE),
                rng.gen_range(ATTRIBUTE_RANGE),
            );
            let surface = rng.choose(&Surface::ALL).copied().unwrap_or_default();
            let name = format!(
                "{} {}",
                rng.choose(FIRST).copied().unwrap_or("No"),
                rng.choose(SECOND).copied().unwrap_or("Name"),
            );
            Competitor::new(CompetitorId(i), attributes, surface)
                .with_name(name)
                .with_weather_sensitivity(rng.gen_range(SENSITIVITY_RANGE))
        })
        .collect()
}
