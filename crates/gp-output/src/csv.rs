//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `scores.csv`: one row per team per output tick
//! - `outcome.csv`: one row per team when a game ends

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutcomeRow, OutputResult, ScoreRow};

pub const SCORE_HEADER: [&str; 9] = [
    "tick",
    "team",
    "raw_score",
    "intelligence_score",
    "time_efficiency",
    "path_efficiency",
    "food_collected",
    "flags_reached",
    "protected",
];

pub const OUTCOME_HEADER: [&str; 6] = ["ticks", "outcome", "result", "team", "final_score", "high_score"];

/// Writes game output to two CSV files.
pub struct CsvWriter {
    scores:   Writer<File>,
    outcome:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the output directory if needed, open both files and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut scores = Writer::from_path(dir.join("scores.csv"))?;
        scores.write_record(SCORE_HEADER)?;

        let mut outcome = Writer::from_path(dir.join("outcome.csv"))?;
        outcome.write_record(OUTCOME_HEADER)?;

        Ok(Self { scores, outcome, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_scores(&mut self, rows: &[ScoreRow]) -> OutputResult<()> {
        for row in rows {
            self.scores.write_record(&[
                row.tick.to_string(),
                row.team.clone(),
                row.raw_score.to_string(),
                format!("{:.3}", row.intelligence_score),
                format!("{:.3}", row.time_efficiency),
                format!("{:.3}", row.path_efficiency),
                row.food_collected.to_string(),
                row.flags_reached.to_string(),
                (row.protected as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_outcome(&mut self, rows: &[OutcomeRow]) -> OutputResult<()> {
        for row in rows {
            self.outcome.write_record(&[
                row.ticks.to_string(),
                row.outcome.to_owned(),
                row.result.clone(),
                row.team.clone(),
                row.final_score.to_string(),
                row.high_score.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.scores.flush()?;
        self.outcome.flush()?;
        Ok(())
    }
}
