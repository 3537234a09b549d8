//! Competitor stat sheets.
//!
//! A [`Competitor`] is immutable input to one race.  It is produced by a
//! stat-generation collaborator (see `race-roster`) and never mutated by the
//! simulator; whatever history bookkeeping happens after a race is the
//! caller's business.

use std::fmt;
use std::str::FromStr;

use crate::{CompetitorId, RaceError};

/// Upper bound of the normalized ability scale.
pub const ATTRIBUTE_MAX: f64 = 100.0;

// ── Surface ───────────────────────────────────────────────────────────────────

/// Track-surface category.  Ordered from firmest to softest so that the
/// distance between two variants is meaningful.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Surface {
    #[default]
    Firm,
    Soft,
    Heavy,
}

impl Surface {
    pub const ALL: [Surface; 3] = [Surface::Firm, Surface::Soft, Surface::Heavy];

    /// Category distance: 0 for the same surface, 1 for neighbours
    /// (firm↔soft, soft↔heavy), 2 for firm↔heavy.  Symmetric.
    #[inline]
    pub fn distance(self, other: Surface) -> u8 {
        (self.rank() as i8 - other.rank() as i8).unsigned_abs()
    }

    fn rank(self) -> u8 {
        match self {
            Surface::Firm  => 0,
            Surface::Soft  => 1,
            Surface::Heavy => 2,
        }
    }

    /// Lower-case label, used in CSV and CLI values.
    pub fn as_str(self) -> &'static str {
        match self {
            Surface::Firm  => "firm",
            Surface::Soft  => "soft",
            Surface::Heavy => "heavy",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Surface {
    type Err = RaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firm"  => Ok(Surface::Firm),
            "soft"  => Ok(Surface::Soft),
            "heavy" => Ok(Surface::Heavy),
            other   => Err(RaceError::Parse(format!(
                "invalid surface {other:?}: expected \"firm\", \"soft\", or \"heavy\""
            ))),
        }
    }
}

// ── Attributes ────────────────────────────────────────────────────────────────

/// The four normalized ability attributes, each on a 0–100 scale.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub top_speed:    f64,
    pub acceleration: f64,
    pub stamina:      f64,
    pub consistency:  f64,
}

impl Attributes {
    pub fn new(top_speed: f64, acceleration: f64, stamina: f64, consistency: f64) -> Self {
        Self { top_speed, acceleration, stamina, consistency }
    }

    /// Every attribute set to `value`.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Copy with every attribute clamped into `[0, 100]`.  NaN becomes 0 so a
    /// malformed stat sheet degrades into a slow competitor rather than
    /// poisoning the whole frame with NaN positions.
    pub fn clamped(self) -> Self {
        Self {
            top_speed:    clamp_attr(self.top_speed),
            acceleration: clamp_attr(self.acceleration),
            stamina:      clamp_attr(self.stamina),
            consistency:  clamp_attr(self.consistency),
        }
    }

    /// `true` when every attribute is zero (or below).
    pub fn is_degenerate(&self) -> bool {
        self.top_speed <= 0.0
            && self.acceleration <= 0.0
            && self.stamina <= 0.0
            && self.consistency <= 0.0
    }
}

#[inline]
fn clamp_attr(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, ATTRIBUTE_MAX) }
}

// ── Competitor ────────────────────────────────────────────────────────────────

/// One racing entity with fixed ability attributes for one race.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Competitor {
    pub id:                  CompetitorId,
    /// Display name.  Not used by the simulation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name:                String,
    pub attributes:          Attributes,
    pub preferred_surface:   Surface,
    /// Multiplies the weather penalty.  1.0 = nominal, 0.0 = immune.
    #[cfg_attr(feature = "serde", serde(default = "default_sensitivity"))]
    pub weather_sensitivity: f64,
}

#[cfg(feature = "serde")]
fn default_sensitivity() -> f64 {
    1.0
}

impl Competitor {
    /// Competitor with nominal weather sensitivity and an empty name.
    pub fn new(id: CompetitorId, attributes: Attributes, preferred_surface: Surface) -> Self {
        Self {
            id,
            name: String::new(),
            attributes,
            preferred_surface,
            weather_sensitivity: 1.0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_weather_sensitivity(mut self, sensitivity: f64) -> Self {
        self.weather_sensitivity = sensitivity;
        self
    }

    /// Name for display; falls back to the id when the name is empty.
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            format!("#{}", self.id.0)
        } else {
            self.name.clone()
        }
    }
}
