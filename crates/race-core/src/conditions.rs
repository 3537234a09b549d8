//! Environmental conditions shared by every competitor in one race.

use std::fmt;
use std::str::FromStr;

use crate::{RaceError, Surface};

/// Weather category.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Weather {
    #[default]
    Clear,
    /// Penalises competitors lacking stamina.
    Rain,
    /// Penalises competitors lacking acceleration.
    Mud,
}

impl Weather {
    pub fn as_str(self) -> &'static str {
        match self {
            Weather::Clear => "clear",
            Weather::Rain  => "rain",
            Weather::Mud   => "mud",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weather {
    type Err = RaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clear"         => Ok(Weather::Clear),
            "rain"          => Ok(Weather::Rain),
            "mud" | "muddy" => Ok(Weather::Mud),
            other           => Err(RaceError::Parse(format!(
                "invalid weather {other:?}: expected \"clear\", \"rain\", or \"mud\""
            ))),
        }
    }
}

/// Track surface, weather, and nominal distance for one race.
///
/// Invariant for the lifetime of a simulation run.  `distance_m` does not
/// enter the per-tick rule (positions are normalized to `[0, 1]`); it is
/// carried so consumers can map positions back to metres.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conditions {
    pub surface:    Surface,
    pub weather:    Weather,
    pub distance_m: f64,
}

impl Conditions {
    pub fn new(surface: Surface, weather: Weather, distance_m: f64) -> Self {
        Self { surface, weather, distance_m }
    }

    /// Metres covered at normalized `position`.
    #[inline]
    pub fn metres_at(&self, position: f64) -> f64 {
        position * self.distance_m
    }
}

impl Default for Conditions {
    /// Firm going, clear skies, 1 200 m.
    fn default() -> Self {
        Self::new(Surface::Firm, Weather::Clear, 1_200.0)
    }
}
