//! The `OutputWriter` trait implemented by backend writers.

use crate::{FrameRow, OutputResult, ResultRow};

/// Trait implemented by output backends.
///
/// Errors are returned to the caller; [`RaceOutputObserver`][crate::RaceOutputObserver]
/// stores them for later retrieval with `take_error`.
pub trait OutputWriter {
    /// Write every competitor row of one frame.
    fn write_frame(&mut self, rows: &[FrameRow]) -> OutputResult<()>;

    /// Write the ranked results, in rank order.
    fn write_results(&mut self, rows: &[ResultRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
