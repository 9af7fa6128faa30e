//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `tick_summaries.csv`
//! - `interactions.csv`
//! - `roster.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{InteractionRow, OutputResult, RosterRow, TickSummaryRow};

/// Writes run output to three CSV files.
pub struct CsvWriter {
    summaries:    Writer<File>,
    interactions: Writer<File>,
    roster:       Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick",
            "infected",
            "carriers",
            "susceptible",
            "interactions",
            "contagious_contacts",
            "new_infections",
        ])?;

        let mut interactions = Writer::from_path(dir.join("interactions.csv"))?;
        interactions.write_record(["tick", "agent_a", "agent_b", "distance"])?;

        let mut roster = Writer::from_path(dir.join("roster.csv"))?;
        roster.write_record([
            "agent_id",
            "age",
            "masked",
            "distancing",
            "desk_row",
            "desk_col",
            "infected",
            "contagious",
            "infector",
        ])?;

        Ok(Self {
            summaries,
            interactions,
            roster,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.infected.to_string(),
            row.carriers.to_string(),
            row.susceptible.to_string(),
            row.interactions.to_string(),
            row.contagious_contacts.to_string(),
            row.new_infections.to_string(),
        ])?;
        Ok(())
    }

    fn write_interactions(&mut self, rows: &[InteractionRow]) -> OutputResult<()> {
        for row in rows {
            self.interactions.write_record(&[
                row.tick.to_string(),
                row.agent_a.to_string(),
                row.agent_b.to_string(),
                format!("{:.4}", row.distance),
            ])?;
        }
        Ok(())
    }

    fn write_roster(&mut self, rows: &[RosterRow]) -> OutputResult<()> {
        for row in rows {
            self.roster.write_record(&[
                row.agent_id.to_string(),
                row.age.to_string(),
                (row.masked as u8).to_string(),
                (row.distancing as u8).to_string(),
                row.desk_row.to_string(),
                row.desk_col.to_string(),
                (row.infected as u8).to_string(),
                (row.contagious as u8).to_string(),
                row.infector.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.interactions.flush()?;
        self.roster.flush()?;
        Ok(())
    }
}
