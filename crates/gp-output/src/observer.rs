//! `ScoreOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use gp_core::SimConfig;
use gp_sim::{SimObserver, Snapshot};
use tracing::warn;

use crate::row::{OutcomeRow, ScoreRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes score rows every `output_interval_ticks`
/// ticks and the outcome rows when the game ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct ScoreOutputObserver<W: OutputWriter> {
    writer:     W,
    config:     SimConfig,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ScoreOutputObserver<W> {
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            config:     config.clone(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Needed when a run stops at the tick cap, since
    /// `on_game_over` never fires then.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect files after the game).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for ScoreOutputObserver<W> {
    fn on_tick_end(&mut self, snapshot: &Snapshot) {
        // The final tick is always written so the file ends on the result.
        if !self.config.is_output_tick(snapshot.tick) && !snapshot.outcome.is_terminal() {
            return;
        }
        let tick = snapshot.tick.0;
        let rows: Vec<ScoreRow> =
            snapshot.seekers.iter().map(|s| ScoreRow::from_view(tick, s)).collect();
        if !rows.is_empty() {
            let result = self.writer.write_scores(&rows);
            self.store_err(result);
        }
    }

    fn on_game_over(&mut self, snapshot: &Snapshot) {
        let result = self.writer.write_outcome(&OutcomeRow::from_snapshot(snapshot));
        self.store_err(result);
        self.finish();
    }
}
