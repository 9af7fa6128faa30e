//! The `OutputWriter` trait implemented by backend writers.

use crate::{InteractionRow, OutputResult, RosterRow, TickSummaryRow};

/// Sink for everything a run reports.
///
/// The observer never sees these errors directly: they are stored and
/// retrieved with [`SimOutputObserver::take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write one tick's interactions.
    fn write_interactions(&mut self, rows: &[InteractionRow]) -> OutputResult<()>;

    /// Write the final roster, one row per agent.
    fn write_roster(&mut self, rows: &[RosterRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
