//! Strongly typed competitor identifier.
//!
//! `CompetitorId` is `Copy + Ord + Hash` so it can be used as a map key and
//! sorted without ceremony.  The id is assigned by whoever builds the field
//! (roster loader, generator, caller); it is *not* required to equal the
//! competitor's position in the simulator's progress array.

use std::fmt;

/// Identifier of one competitor in a race.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CompetitorId(pub u32);

impl CompetitorId {
    /// Sentinel meaning "no valid ID", equal to `u32::MAX`.
    pub const INVALID: CompetitorId = CompetitorId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for CompetitorId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for CompetitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompetitorId({})", self.0)
    }
}
