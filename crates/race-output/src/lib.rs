//! `race-output`: race output writers.
//!
//! | Backend | Files created                 |
//! |---------|-------------------------------|
//! | CSV     | `frames.csv`, `results.csv`   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`RaceOutputObserver`], which implements `race_sim::RaceObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use race_output::{CsvWriter, RaceOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let observer = RaceOutputObserver::new(writer, &conditions).frame_interval(10);
//! let mut sim = RaceBuilder::new(field, conditions, ManualTickSource::new(), observer).build()?;
//! sim.start();
//! sim.run_to_finish(100_000);
//! if let Some(e) = sim.observer_mut().take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RaceOutputObserver;
pub use row::{FrameRow, ResultRow};
pub use writer::OutputWriter;
