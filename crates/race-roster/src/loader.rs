//! CSV roster loader.
//!
//! # CSV format
//!
//! One row per competitor, in field order.
//!
//! ```csv
//! id,name,top_speed,acceleration,stamina,consistency,surface,weather_sensitivity
//! 0,Night Ledger,82,75,90,70,firm,1.0
//! 1,Copper Tide,78,88,65,85,soft,
//! 2,,70,70,70,70,heavy,1.2
//! ```
//!
//! | Column                | Notes                                          |
//! |-----------------------|------------------------------------------------|
//! | `name`                | May be empty                                   |
//! | attributes            | 0–100; out-of-range values are clamped at use  |
//! | `surface`             | `firm`, `soft` or `heavy` (case-insensitive)   |
//! | `weather_sensitivity` | Optional; empty means 1.0                      |
//!
//! Duplicate ids are rejected here so the error names the offending row.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use race_core::{Attributes, Competitor, CompetitorId, Surface};

use crate::{RosterError, RosterResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    id:                  u32,
    #[serde(default)]
    name:                String,
    top_speed:           f64,
    acceleration:        f64,
    stamina:             f64,
    consistency:         f64,
    surface:             String,
    #[serde(default)]
    weather_sensitivity: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a field of competitors from a CSV file.
pub fn load_roster_csv(path: &Path) -> RosterResult<Vec<Competitor>> {
    let file = std::fs::File::open(path).map_err(RosterError::Io)?;
    let roster = load_roster_reader(file)?;
    log::debug!("loaded {} competitors from {}", roster.len(), path.display());
    Ok(roster)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
pub fn load_roster_reader<R: Read>(reader: R) -> RosterResult<Vec<Competitor>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut seen = HashSet::new();
    let mut roster = Vec::new();

    for (row, result) in csv_reader.deserialize::<RosterRecord>().enumerate() {
        let record = result.map_err(|e| RosterError::Parse(e.to_string()))?;
        // Header is line 1.
        let line = row + 2;

        if !seen.insert(record.id) {
            return Err(RosterError::Parse(format!("line {line}: duplicate id {}", record.id)));
        }
        let surface: Surface = record
            .surface
            .parse()
            .map_err(|e| RosterError::Parse(format!("line {line}: {e}")))?;

        let attributes = Attributes::new(
            record.top_speed,
            record.acceleration,
            record.stamina,
            record.consistency,
        );
        let mut competitor = Competitor::new(CompetitorId(record.id), attributes, surface)
            .with_name(record.name);
        if let Some(sensitivity) = record.weather_sensitivity {
            competitor = competitor.with_weather_sensitivity(sensitivity);
        }
        roster.push(competitor);
    }

    Ok(roster)
}
