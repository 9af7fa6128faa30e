//! Unit tests for oc-epi.

#[cfg(test)]
mod helpers {
    use oc_agent::{AgentStore, AgentStoreBuilder};
    use oc_grid::{Grid, Layout};

    /// A 3×11 room with a wall ring; nine desks along the middle row.
    pub const HALL: &str = "\
###########
#DDDDDDDDD#
###########";

    /// `count` agents seated on `HALL`, none masked.
    pub fn seated(count: usize) -> (Grid, AgentStore) {
        let mut grid = Grid::new(Layout::parse(HALL).unwrap());
        let desks = grid.desks().to_vec();
        let (store, _) = AgentStoreBuilder::new(count, 3, &desks).build().unwrap();
        for id in store.agent_ids() {
            grid.place_agent(id, store.location[id.slot()]);
        }
        (grid, store)
    }
}

// ── Factors ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod factors {
    use crate::{distance_factor, mask_factor, transmission_probability};

    #[test]
    fn mask_table() {
        assert_eq!(mask_factor(true, true), 0.5);
        assert_eq!(mask_factor(true, false), 0.75);
        assert_eq!(mask_factor(false, true), 0.75);
        assert_eq!(mask_factor(false, false), 1.0);
    }

    #[test]
    fn distance_edges() {
        assert_eq!(distance_factor(0.5), 1.0);
        assert_eq!(distance_factor(1.0), 1.0);
        assert!((distance_factor(1.5) - 1.0 / 2.25).abs() < 1e-6);
        assert!((distance_factor(2.0) - 0.25).abs() < 1e-9);
        assert_eq!(distance_factor(3.0), 0.25);
        assert!((distance_factor(2f32.sqrt()) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn probability_is_bounded() {
        for virality in [0, 1, 50, 100, 250] {
            for d in [0.0f32, 1.0, 1.4, 2.0, 2.3, 3.0] {
                for (ma, mb) in [(false, false), (true, false), (true, true)] {
                    let p = transmission_probability(ma, mb, d, virality);
                    assert!((0.0..=1.0).contains(&p), "p = {p}");
                }
            }
        }
    }

    #[test]
    fn adjacent_unmasked_full_virality_is_certain() {
        assert_eq!(transmission_probability(false, false, 1.0, 100), 1.0);
    }

    #[test]
    fn zero_virality_never_transmits() {
        assert_eq!(transmission_probability(false, false, 0.0, 0), 0.0);
    }

    #[test]
    fn worked_example() {
        // One mask, 1.5 cells apart, virality 80.
        let p = transmission_probability(true, false, 1.5, 80);
        assert!((p - 0.75 * (1.0 / 2.25) * 0.8).abs() < 1e-6);
    }
}

// ── Contact detection ──────────────────────────────────────────────────────────

#[cfg(test)]
mod contact {
    use oc_core::AgentId;
    use super::helpers::seated;
    use crate::detect_interactions;

    #[test]
    fn neighbours_within_two_cells() {
        // Agents 1..=4 sit in a row at columns 1..=4.
        let (grid, _) = seated(4);
        let found = detect_interactions(&grid);
        let pairs: Vec<_> = found.iter().map(|i| (i.a.0, i.b.0)).collect();
        assert_eq!(pairs, vec![(1, 2), (1, 3), (2, 3), (2, 4), (3, 4)]);
        assert!(found.iter().all(|i| i.a < i.b));
        assert_eq!(found[0].distance, 1.0);
        assert_eq!(found[1].distance, 2.0);
    }

    #[test]
    fn single_agent_has_no_contacts() {
        let (grid, _) = seated(1);
        assert!(detect_interactions(&grid).is_empty());
    }

    #[test]
    fn partner_lookup() {
        let (grid, _) = seated(2);
        let found = detect_interactions(&grid);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].partner(AgentId(1)), Some(AgentId(2)));
        assert_eq!(found[0].partner(AgentId(2)), Some(AgentId(1)));
        assert_eq!(found[0].partner(AgentId(3)), None);
    }
}

// ── Transmission ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod transmission {
    use oc_core::{AgentId, SimRng};
    use super::helpers::seated;
    use crate::{Infection, TransmissionModel, detect_interactions};

    #[test]
    fn only_carrier_susceptible_pairs_count() {
        let (grid, mut store) = seated(3);
        store.make_carrier(AgentId(1));
        store.make_carrier(AgentId(2));
        let contacts = TransmissionModel::new(50)
            .contagious_contacts(&detect_interactions(&grid), &store);
        let pairs: Vec<_> = contacts.iter().map(|c| (c.carrier.0, c.susceptible.0)).collect();
        // 1–2 is carrier–carrier and is skipped.
        assert_eq!(pairs, vec![(1, 3), (2, 3)]);
    }

    #[test]
    fn carrier_listed_first_even_with_higher_id() {
        let (grid, mut store) = seated(2);
        store.make_carrier(AgentId(2));
        let contacts = TransmissionModel::new(50)
            .contagious_contacts(&detect_interactions(&grid), &store);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].carrier, AgentId(2));
        assert_eq!(contacts[0].susceptible, AgentId(1));
    }

    #[test]
    fn certain_transmission_infects_on_the_same_tick() {
        let (grid, mut store) = seated(2);
        store.make_carrier(AgentId(1));
        let outcome = TransmissionModel::new(100)
            .apply(&detect_interactions(&grid), &mut store, &mut SimRng::new(0));
        assert!(outcome.any());
        assert_eq!(outcome.infections, vec![Infection { infected: AgentId(2), infector: AgentId(1) }]);
        assert!(store.infected[AgentId(2).slot()]);
        assert!(!store.contagious[AgentId(2).slot()]);
        assert_eq!(store.infector[AgentId(2).slot()], Some(AgentId(1)));
    }

    #[test]
    fn zero_virality_infects_nobody() {
        let (grid, mut store) = seated(6);
        store.make_carrier(AgentId(3));
        let model = TransmissionModel::new(0);
        let mut rng = SimRng::new(8);
        for _ in 0..50 {
            let outcome = model.apply(&detect_interactions(&grid), &mut store, &mut rng);
            assert!(!outcome.any());
            assert!(!outcome.contagious_contacts.is_empty());
        }
        assert_eq!(store.infected_count(), 1);
    }

    #[test]
    fn at_most_one_infection_per_agent() {
        // Agents 1 and 3 are carriers; agent 2 between them is in contact
        // with both at distance 1.
        let (grid, mut store) = seated(3);
        store.make_carrier(AgentId(1));
        store.make_carrier(AgentId(3));
        let outcome = TransmissionModel::new(100)
            .apply(&detect_interactions(&grid), &mut store, &mut SimRng::new(4));
        assert_eq!(outcome.contagious_contacts.len(), 2);
        assert_eq!(outcome.infections.len(), 1);
        // The lower-ID carrier comes first in detector order and wins.
        assert_eq!(store.infector[AgentId(2).slot()], Some(AgentId(1)));
    }

    #[test]
    fn secondary_cases_do_not_transmit() {
        let (grid, mut store) = seated(3);
        store.make_carrier(AgentId(1));
        store.infect(AgentId(2), AgentId(1));
        let model = TransmissionModel::new(100);
        let contacts = model.contagious_contacts(&detect_interactions(&grid), &store);
        // Only 1–3 (distance 2) remains; 2–3 is secondary–susceptible.
        assert_eq!(contacts.len(), 1);
        assert_eq!((contacts[0].carrier, contacts[0].susceptible), (AgentId(1), AgentId(3)));
    }
}
