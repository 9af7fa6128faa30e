//! Unit tests for oc-agent.

#[cfg(test)]
mod helpers {
    use oc_core::Cell;

    /// One desk per column along row 1.
    pub fn desks(n: u32) -> Vec<Cell> {
        (0..n).map(|col| Cell::new(1, col)).collect()
    }
}

// ── Builder ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use oc_core::{AgentId, Cell, SimParams};
    use super::helpers::desks;
    use crate::{AgentError, AgentStoreBuilder, INITIAL_DESK_STINT};

    #[test]
    fn agents_sit_at_their_desks() {
        let desks = desks(5);
        let (store, rngs) = AgentStoreBuilder::new(4, 7, &desks).build().unwrap();
        assert_eq!(store.count, 4);
        assert_eq!(rngs.len(), 4);
        for id in store.agent_ids() {
            let i = id.slot();
            assert_eq!(store.desk[i], desks[i]);
            assert_eq!(store.location[i], desks[i]);
            assert!(store.is_at_task(id));
            assert!(store.is_at_desk(id));
            assert_eq!(store.task_progress[i], 0);
            assert!(INITIAL_DESK_STINT.contains(&store.task_duration[i]));
        }
        assert_eq!(store.desk[AgentId(1).slot()], Cell::new(1, 0));
    }

    #[test]
    fn ages_within_bounds() {
        let desks = desks(40);
        let (store, _) = AgentStoreBuilder::new(40, 1, &desks).ages(30, 33).build().unwrap();
        assert!(store.age.iter().all(|&a| (30..=33).contains(&a)));
    }

    #[test]
    fn single_age() {
        let desks = desks(3);
        let (store, _) = AgentStoreBuilder::new(3, 1, &desks).ages(40, 40).build().unwrap();
        assert!(store.age.iter().all(|&a| a == 40));
    }

    #[test]
    fn inverted_age_range_rejected() {
        let desks = desks(3);
        let err = AgentStoreBuilder::new(3, 1, &desks).ages(50, 20).build().err().unwrap();
        assert!(matches!(err, AgentError::InvalidAgeRange { min: 50, max: 20 }));
    }

    #[test]
    fn adherence_extremes() {
        let desks = desks(20);
        let (all, _) = AgentStoreBuilder::new(20, 3, &desks)
            .mask_adherence(100)
            .distancing_adherence(100)
            .build()
            .unwrap();
        assert!(all.masked.iter().all(|&m| m));
        assert!(all.distancing.iter().all(|&d| d));

        let (none, _) = AgentStoreBuilder::new(20, 3, &desks).build().unwrap();
        assert!(none.masked.iter().all(|&m| !m));
        assert!(none.distancing.iter().all(|&d| !d));
    }

    #[test]
    fn same_seed_same_traits() {
        let desks = desks(10);
        let params = SimParams { mask_adherence: 50, distancing_adherence: 50, ..SimParams::default() };
        let (a, _) = AgentStoreBuilder::from_params(&params, &desks).build().unwrap();
        let (b, _) = AgentStoreBuilder::from_params(&params, &desks).build().unwrap();
        assert_eq!(a.age, b.age);
        assert_eq!(a.masked, b.masked);
        assert_eq!(a.distancing, b.distancing);
        assert_eq!(a.task_duration, b.task_duration);
    }

    #[test]
    fn traits_independent_of_population_size() {
        let desks = desks(10);
        let (small, _) = AgentStoreBuilder::new(3, 9, &desks).mask_adherence(50).build().unwrap();
        let (large, _) = AgentStoreBuilder::new(10, 9, &desks).mask_adherence(50).build().unwrap();
        assert_eq!(small.age[..], large.age[..3]);
        assert_eq!(small.masked[..], large.masked[..3]);
    }

    #[test]
    fn too_few_desks() {
        let desks = desks(2);
        let err = AgentStoreBuilder::new(3, 0, &desks).build().err().unwrap();
        assert!(matches!(err, AgentError::NotEnoughDesks { population: 3, desks: 2 }));
    }
}

// ── Store & health ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use oc_core::{AgentId, SimRng};
    use super::helpers::desks;
    use crate::{AgentError, AgentStoreBuilder, HealthClass, seed_carriers};

    #[test]
    fn classify_table() {
        assert_eq!(HealthClass::classify(true, true), HealthClass::Carrier);
        assert_eq!(HealthClass::classify(true, false), HealthClass::Secondary);
        assert_eq!(HealthClass::classify(false, false), HealthClass::Susceptible);
        assert!(HealthClass::Secondary.is_infected());
        assert!(!HealthClass::Susceptible.is_infected());
    }

    #[test]
    fn carriers_are_distinct_and_contagious() {
        let desks = desks(10);
        let (mut store, _) = AgentStoreBuilder::new(10, 5, &desks).build().unwrap();
        let mut rng = SimRng::new(5);
        let carriers = seed_carriers(&mut store, &mut rng, 4).unwrap();
        assert_eq!(carriers.len(), 4);
        assert!(carriers.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(store.infected_count(), 4);
        assert_eq!(store.contagious_count(), 4);
        for &c in &carriers {
            assert_eq!(store.health_class(c), HealthClass::Carrier);
            assert_eq!(store.infector[c.slot()], None);
        }
    }

    #[test]
    fn whole_population_can_be_carriers() {
        let desks = desks(3);
        let (mut store, _) = AgentStoreBuilder::new(3, 5, &desks).build().unwrap();
        let carriers = seed_carriers(&mut store, &mut SimRng::new(1), 3).unwrap();
        assert_eq!(carriers, vec![AgentId(1), AgentId(2), AgentId(3)]);
    }

    #[test]
    fn too_many_carriers() {
        let desks = desks(2);
        let (mut store, _) = AgentStoreBuilder::new(2, 5, &desks).build().unwrap();
        let err = seed_carriers(&mut store, &mut SimRng::new(1), 3).unwrap_err();
        assert!(matches!(err, AgentError::TooManyCarriers { requested: 3, population: 2 }));
    }

    #[test]
    fn infect_once() {
        let desks = desks(3);
        let (mut store, _) = AgentStoreBuilder::new(3, 5, &desks).build().unwrap();
        store.make_carrier(AgentId(1));
        assert!(store.infect(AgentId(2), AgentId(1)));
        assert!(!store.infect(AgentId(2), AgentId(3)));
        assert_eq!(store.infector[AgentId(2).slot()], Some(AgentId(1)));
        assert_eq!(store.health_class(AgentId(2)), HealthClass::Secondary);
        assert!(!store.contagious[AgentId(2).slot()]);
    }

    #[test]
    fn roster_in_id_order() {
        let desks = desks(3);
        let (mut store, _) = AgentStoreBuilder::new(3, 5, &desks).build().unwrap();
        store.make_carrier(AgentId(3));
        store.infect(AgentId(1), AgentId(3));
        let roster = store.roster();
        let ids: Vec<_> = roster.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![AgentId(1), AgentId(2), AgentId(3)]);
        assert_eq!(roster[0].health_class(), HealthClass::Secondary);
        assert_eq!(roster[0].infector, Some(AgentId(3)));
        assert_eq!(roster[1].health_class(), HealthClass::Susceptible);
        assert_eq!(roster[2].health_class(), HealthClass::Carrier);
        assert_eq!(roster[2].desk, desks[2]);
    }

    #[test]
    fn contains_bounds() {
        let desks = desks(2);
        let (store, _) = AgentStoreBuilder::new(2, 5, &desks).build().unwrap();
        assert!(store.contains(AgentId(1)));
        assert!(store.contains(AgentId(2)));
        assert!(!store.contains(AgentId(3)));
        assert!(!store.contains(AgentId(0)));
    }
}
