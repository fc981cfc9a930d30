//! `gp-output`: game output for the grid_pursuit engine.
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`csv`]      | `CsvWriter`: `scores.csv` and `outcome.csv`               |
//! | [`observer`] | `ScoreOutputObserver`: drives any `OutputWriter` from the tick loop |
//! | [`frame`]    | Plain-text rendering of a grid plus snapshot               |
//! | [`row`]      | `ScoreRow`, `OutcomeRow`                                   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use gp_output::{CsvWriter, ScoreOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ScoreOutputObserver::new(writer, &config);
//! sim.run(&mut obs);
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod frame;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use frame::{render_frame, status_lines};
pub use observer::ScoreOutputObserver;
pub use row::{OutcomeRow, ScoreRow};
pub use writer::OutputWriter;
