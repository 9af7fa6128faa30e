//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use oc_agent::AgentStore;
use oc_core::Tick;
use oc_epi::Interaction;
use oc_sim::{SimObserver, TickSummary};

use crate::row::{InteractionRow, RosterRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries, the interaction history and
/// the final roster to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:       W,
    interactions: bool,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            interactions: true,
            last_error: None,
        }
    }

    /// Skip the per-tick interaction history (it dominates file size on
    /// crowded plans).
    pub fn without_interactions(mut self) -> Self {
        self.interactions = false;
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                log::warn!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_interactions(&mut self, tick: Tick, interactions: &[Interaction]) {
        if !self.interactions || interactions.is_empty() {
            return;
        }
        let rows: Vec<InteractionRow> =
            interactions.iter().map(|i| InteractionRow::new(tick.0, i)).collect();
        let result = self.writer.write_interactions(&rows);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, agents: &AgentStore) {
        let rows: Vec<RosterRow> = agents.roster().iter().map(RosterRow::from).collect();
        let result = self.writer.write_roster(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
