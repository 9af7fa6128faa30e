//! `oc-output`: run output writers for the office contagion simulator.
//!
//! | Backend | Files created                                                  |
//! |---------|----------------------------------------------------------------|
//! | CSV     | `tick_summaries.csv`, `interactions.csv`, `roster.csv`         |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `oc_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use oc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{InteractionRow, RosterRow, TickSummaryRow};
pub use writer::OutputWriter;
