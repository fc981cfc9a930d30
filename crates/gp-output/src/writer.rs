//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutcomeRow, OutputResult, ScoreRow};

/// A sink for per-tick score rows and end-of-game rows.
///
/// Errors are returned to [`ScoreOutputObserver`][crate::ScoreOutputObserver],
/// which stores the first one for [`take_error`][crate::ScoreOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one row per team for a tick.
    fn write_scores(&mut self, rows: &[ScoreRow]) -> OutputResult<()>;

    /// Write the final rows of a finished game.
    fn write_outcome(&mut self, rows: &[OutcomeRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
