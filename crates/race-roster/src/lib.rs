//! `race-roster`: where competitor stat sheets come from.
//!
//! # Crate layout
//!
//! | Module        | Contents                                        |
//! |---------------|-------------------------------------------------|
//! | [`loader`]    | `load_roster_csv`, `load_roster_reader`         |
//! | [`generator`] | `generate_roster` (seeded random field)         |
//! | [`error`]     | `RosterError`, `RosterResult<T>`                |
//!
//! Both sources return a `Vec<Competitor>` in field order, ready for
//! `race_sim::RaceBuilder`.

pub mod error;
pub mod generator;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{RosterError, RosterResult};
pub use generator::generate_roster;
pub use loader::{load_roster_csv, load_roster_reader};
