//! `RaceOutputObserver<W>` bridges `RaceObserver` to an `OutputWriter`.

use race_core::Conditions;
use race_sim::{Frame, RaceObserver, RaceResult};

use crate::row::{FrameRow, ResultRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`RaceObserver`] that writes frames and results to any [`OutputWriter`].
///
/// Every `frame_interval`-th frame is written (1 = every frame), plus the
/// final frame in which the last competitor finished.  Results are always
/// written, after which the writer is finished.
///
/// Errors from the writer are stored internally because `RaceObserver`
/// methods have no return value.  After the race, check with
/// [`take_error`][Self::take_error].
pub struct RaceOutputObserver<W: OutputWriter> {
    writer:         W,
    conditions:     Conditions,
    frame_interval: u64,
    frames_written: u64,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> RaceOutputObserver<W> {
    /// Create an observer backed by `writer`, using `conditions` to convert
    /// positions to metres.
    pub fn new(writer: W, conditions: &Conditions) -> Self {
        Self {
            writer,
            conditions:     *conditions,
            frame_interval: 1,
            frames_written: 0,
            last_error:     None,
        }
    }

    /// Write only every `n`-th tick (0 is treated as 1).
    pub fn frame_interval(mut self, n: u64) -> Self {
        self.frame_interval = n.max(1);
        self
    }

    /// Number of frames the writer accepted so far.  Empty frames and
    /// failed writes are not counted.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Unwrap the inner writer (e.g. to inspect files after the race).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            log::warn!("race output write failed: {e}");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RaceObserver for RaceOutputObserver<W> {
    fn on_frame(&mut self, frame: &Frame) {
        let all_finished = frame.finished_count() == frame.competitors.len();
        if frame.tick.0 % self.frame_interval != 0 && !all_finished {
            return;
        }

        let rows: Vec<FrameRow> = frame
            .competitors
            .iter()
            .map(|p| FrameRow {
                tick:          frame.tick.0,
                elapsed_secs:  frame.elapsed_secs,
                competitor_id: p.id.0,
                position:      p.position,
                distance_m:    self.conditions.metres_at(p.position),
                velocity:      p.velocity,
                stamina:       p.stamina,
                finished:      p.finished,
                leader:        frame.leader == Some(p.id),
            })
            .collect();

        if rows.is_empty() {
            return;
        }
        match self.writer.write_frame(&rows) {
            Ok(()) => self.frames_written += 1,
            result => self.store_err(result),
        }
    }

    fn on_complete(&mut self, results: &[RaceResult]) {
        let rows: Vec<ResultRow> = results
            .iter()
            .map(|r| ResultRow {
                rank:             r.rank,
                competitor_id:    r.competitor.0,
                finish_tick:      r.finish_tick.0,
                finish_time_secs: r.finish_time_secs,
                elapsed_secs:     r.elapsed_secs,
                final_velocity:   r.final_velocity,
            })
            .collect();

        let result = self.writer.write_results(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
