//! Integration tests for oc-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{InteractionRow, RosterRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            infected:            2,
            carriers:            1,
            susceptible:         8,
            interactions:        4,
            contagious_contacts: 1,
            new_infections:      1,
        }
    }

    fn roster_row(agent_id: u32, infector: u32) -> RosterRow {
        RosterRow {
            agent_id,
            age:        30 + agent_id as u8,
            masked:     agent_id % 2 == 0,
            distancing: false,
            desk_row:   1,
            desk_col:   agent_id,
            infected:   infector != 0,
            contagious: false,
            infector,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("tick_summaries.csv").exists());
        assert!(dir.path().join("interactions.csv").exists());
        assert!(dir.path().join("roster.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("roster.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("tick_summaries.csv")),
            [
                "tick",
                "infected",
                "carriers",
                "susceptible",
                "interactions",
                "contagious_contacts",
                "new_infections",
            ]
        );
        assert_eq!(
            headers(dir.path().join("interactions.csv")),
            ["tick", "agent_a", "agent_b", "distance"]
        );
        assert_eq!(
            headers(dir.path().join("roster.csv")),
            [
                "agent_id",
                "age",
                "masked",
                "distancing",
                "desk_row",
                "desk_col",
                "infected",
                "contagious",
                "infector",
            ]
        );
    }

    #[test]
    fn csv_tick_summary_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(0)).unwrap();
        w.write_tick_summary(&summary_row(1)).unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join("tick_summaries.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "1"); // tick
        assert_eq!(&rows[1][1], "2"); // infected
        assert_eq!(&rows[1][6], "1"); // new_infections
    }

    #[test]
    fn csv_interaction_distance_formatted() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = [
            InteractionRow { tick: 3, agent_a: 1, agent_b: 2, distance: 1.0 },
            InteractionRow { tick: 3, agent_a: 1, agent_b: 4, distance: std::f32::consts::SQRT_2 },
        ];
        w.write_interactions(&rows).unwrap();
        w.finish().unwrap();

        let read = records(dir.path().join("interactions.csv"));
        assert_eq!(read.len(), 2);
        assert_eq!(&read[0][3], "1.0000");
        assert_eq!(&read[1][2], "4");
        assert_eq!(&read[1][3], "1.4142");
    }

    #[test]
    fn csv_roster_flags_as_digits() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_roster(&[roster_row(1, 0), roster_row(2, 1)]).unwrap();
        w.finish().unwrap();

        let read = records(dir.path().join("roster.csv"));
        assert_eq!(read.len(), 2);
        assert_eq!(&read[0][2], "0"); // masked
        assert_eq!(&read[1][2], "1");
        assert_eq!(&read[0][8], "0"); // infector
        assert_eq!(&read[1][6], "1"); // infected
        assert_eq!(&read[1][8], "1");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod row_tests {
    use oc_agent::AgentRecord;
    use oc_core::{AgentId, Cell};

    use crate::row::RosterRow;

    fn record(infector: Option<AgentId>) -> AgentRecord {
        AgentRecord {
            id: AgentId(5),
            age: 41,
            masked: true,
            distancing: false,
            desk: Cell { row: 3, col: 7 },
            infected: infector.is_some(),
            contagious: false,
            infector,
        }
    }

    #[test]
    fn roster_row_unpacks_desk() {
        let row = RosterRow::from(&record(None));
        assert_eq!((row.desk_row, row.desk_col), (3, 7));
        assert_eq!(row.agent_id, 5);
        assert_eq!(row.infector, 0);
    }

    #[test]
    fn roster_row_keeps_infector_id() {
        let row = RosterRow::from(&record(Some(AgentId(2))));
        assert_eq!(row.infector, 2);
        assert!(row.infected);
    }
}

#[cfg(test)]
mod observer_tests {
    use oc_core::SimParams;
    use oc_grid::Layout;
    use oc_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;

    const TICKS: u64 = 6;

    /// Two neighbouring desks and nowhere else to go: the pair interacts
    /// every tick.
    fn run_desk_pair(dir: &TempDir, interactions: bool) {
        let params = SimParams {
            population_size: 2,
            initial_infected: 1,
            duration_ticks: TICKS,
            ..SimParams::default()
        };
        let layout = Layout::parse("####\n#DD#\n####").unwrap();
        let mut sim = SimBuilder::new(params, layout).build().unwrap();

        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        if !interactions {
            obs = obs.without_interactions();
        }
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
    }

    fn row_count(path: std::path::PathBuf) -> usize {
        csv::Reader::from_path(path).unwrap().records().count()
    }

    #[test]
    fn observer_writes_every_file() {
        let dir = tempfile::tempdir().unwrap();
        run_desk_pair(&dir, true);

        assert_eq!(row_count(dir.path().join("tick_summaries.csv")), TICKS as usize);
        assert_eq!(row_count(dir.path().join("interactions.csv")), TICKS as usize);
        assert_eq!(row_count(dir.path().join("roster.csv")), 2);
    }

    #[test]
    fn observer_can_skip_interactions() {
        let dir = tempfile::tempdir().unwrap();
        run_desk_pair(&dir, false);

        assert_eq!(row_count(dir.path().join("interactions.csv")), 0);
        assert_eq!(row_count(dir.path().join("tick_summaries.csv")), TICKS as usize);
    }

    #[test]
    fn roster_has_one_carrier() {
        let dir = tempfile::tempdir().unwrap();
        run_desk_pair(&dir, true);

        let mut rdr = csv::Reader::from_path(dir.path().join("roster.csv")).unwrap();
        let contagious = rdr
            .records()
            .map(|r| r.unwrap())
            .filter(|r| &r[7] == "1")
            .count();
        assert_eq!(contagious, 1);
    }
}
