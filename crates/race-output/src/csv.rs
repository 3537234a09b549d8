//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `frames.csv`
//! - `results.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{FrameRow, OutputResult, ResultRow};

pub const FRAMES_FILE:  &str = "frames.csv";
pub const RESULTS_FILE: &str = "results.csv";

/// Writes race output to two CSV files.
pub struct CsvWriter {
    frames:   Writer<File>,
    results:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files, and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut frames = Writer::from_path(dir.join(FRAMES_FILE))?;
        frames.write_record([
            "tick", "elapsed_secs", "competitor_id", "position", "distance_m",
            "velocity", "stamina", "finished", "leader",
        ])?;

        let mut results = Writer::from_path(dir.join(RESULTS_FILE))?;
        results.write_record([
            "rank", "competitor_id", "finish_tick", "finish_time_secs", "elapsed_secs", "final_velocity",
        ])?;

        Ok(Self {
            frames,
            results,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_frame(&mut self, rows: &[FrameRow]) -> OutputResult<()> {
        for row in rows {
            self.frames.write_record(&[
                row.tick.to_string(),
                format!("{:.4}", row.elapsed_secs),
                row.competitor_id.to_string(),
                format!("{:.6}", row.position),
                format!("{:.2}", row.distance_m),
                format!("{:.4}", row.velocity),
                format!("{:.4}", row.stamina),
                (row.finished as u8).to_string(),
                (row.leader as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_results(&mut self, rows: &[ResultRow]) -> OutputResult<()> {
        for row in rows {
            self.results.write_record(&[
                row.rank.to_string(),
                row.competitor_id.to_string(),
                row.finish_tick.to_string(),
                format!("{:.4}", row.finish_time_secs),
                format!("{:.4}", row.elapsed_secs),
                format!("{:.4}", row.final_velocity),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.frames.flush()?;
        self.results.flush()?;
        Ok(())
    }
}
