//! `race-core`: foundational types for the race simulator workspace.
//!
//! This crate is a dependency of every other `race-*` crate.  It has no
//! `race-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`ids`]          | `CompetitorId`                                             |
//! | [`competitor`]   | `Competitor`, `Attributes`, `Surface`                      |
//! | [`conditions`]   | `Conditions`, `Weather`                                    |
//! | [`time`]         | `Tick`, `RaceClock`, `RaceConfig`                          |
//! | [`rng`]          | `RaceRng`, `derive_seed`                                   |
//! | [`error`]        | `RaceError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `RaceConfig` from JSON.                   |

pub mod competitor;
pub mod conditions;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use competitor::{Attributes, Competitor, Surface};
pub use conditions::{Conditions, Weather};
pub use error::{CoreResult, RaceError};
pub use ids::CompetitorId;
pub use rng::{RaceRng, derive_seed};
pub use time::{RaceClock, RaceConfig, Tick};
