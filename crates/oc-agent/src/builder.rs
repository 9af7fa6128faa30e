//! Population instantiation: `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use oc_agent::AgentStoreBuilder;
//! use oc_core::Cell;
//!
//! let desks = [Cell::new(1, 1), Cell::new(1, 3), Cell::new(3, 1)];
//! let (store, rngs) = AgentStoreBuilder::new(3, /*seed=*/ 42, &desks)
//!     .ages(20, 60)
//!     .mask_adherence(50)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count, 3);
//! assert_eq!(rngs.len(), 3);
//! assert_eq!(store.location[0], Cell::new(1, 1));
//! ```
//!
//! Every agent starts seated at its own desk, working a desk stint whose
//! length is drawn from [`INITIAL_DESK_STINT`].  Trait draws use the agent's
//! own RNG, so agent `n`'s traits do not depend on the population size.

use std::ops::RangeInclusive;

use oc_core::{AgentId, Cell, SimParams, SimRng};

use crate::{AgentError, AgentResult, AgentRngs, AgentStore};

/// Length, in ticks, of the desk stint every agent starts with.
pub const INITIAL_DESK_STINT: RangeInclusive<u32> = 1..=50;

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
pub struct AgentStoreBuilder<'a> {
    count: usize,
    seed: u64,
    desks: &'a [Cell],
    min_age: u8,
    max_age: u8,
    mask_adherence: u32,
    distancing_adherence: u32,
}

impl<'a> AgentStoreBuilder<'a> {
    /// Create a builder for `count` agents seated at the first `count` of
    /// `desks`.  Traits default to age 18..=65 and no masks or distancing.
    pub fn new(count: usize, seed: u64, desks: &'a [Cell]) -> Self {
        Self {
            count,
            seed,
            desks,
            min_age: 18,
            max_age: 65,
            mask_adherence: 0,
            distancing_adherence: 0,
        }
    }

    /// Builder configured from validated run parameters.
    pub fn from_params(params: &SimParams, desks: &'a [Cell]) -> Self {
        Self::new(params.population_size, params.seed, desks)
            .ages(params.min_age, params.max_age)
            .mask_adherence(params.mask_adherence)
            .distancing_adherence(params.distancing_adherence)
    }

    /// Ages are drawn uniformly from `min..=max`.  An inverted range is
    /// rejected by [`build`](Self::build).
    pub fn ages(mut self, min: u8, max: u8) -> Self {
        self.min_age = min;
        self.max_age = max;
        self
    }

    /// Percent chance that an agent wears a mask.
    pub fn mask_adherence(mut self, percent: u32) -> Self {
        self.mask_adherence = percent;
        self
    }

    /// Percent chance that an agent keeps its distance.
    pub fn distancing_adherence(mut self, percent: u32) -> Self {
        self.distancing_adherence = percent;
        self
    }

    /// Draw every agent's traits and seat it at its desk.
    ///
    /// Agent `n` is given `desks[n - 1]`.  Fails if there are fewer desks
    /// than agents or if the age range is inverted.
    pub fn build(self) -> AgentResult<(AgentStore, AgentRngs)> {
        if self.min_age > self.max_age {
            return Err(AgentError::InvalidAgeRange {
                min: self.min_age,
                max: self.max_age,
            });
        }
        if self.count > self.desks.len() {
            return Err(AgentError::NotEnoughDesks {
                population: self.count,
                desks: self.desks.len(),
            });
        }

        let mut store = AgentStore::new(self.count);
        let mut rngs = AgentRngs::new(self.count, self.seed);

        for slot in 0..self.count {
            let rng = rngs.get_mut(AgentId::from_slot(slot));
            store.age[slot] = rng.gen_range(self.min_age..=self.max_age);
            store.masked[slot] = rng.percent_chance(self.mask_adherence);
            store.distancing[slot] = rng.percent_chance(self.distancing_adherence);

            let desk = self.desks[slot];
            store.desk[slot] = desk;
            store.location[slot] = desk;
            store.task_location[slot] = desk;
            store.task_duration[slot] = rng.gen_range(INITIAL_DESK_STINT);
            store.task_progress[slot] = 0;
        }

        log::debug!(
            "instantiated {} agents: {} masked, {} distancing",
            store.count,
            store.masked.iter().filter(|&&m| m).count(),
            store.distancing.iter().filter(|&&d| d).count(),
        );

        Ok((store, rngs))
    }
}

/// Pick `amount` distinct agents uniformly at random and make them carriers.
///
/// Returns the chosen IDs in ascending order.
pub fn seed_carriers(
    store: &mut AgentStore,
    rng: &mut SimRng,
    amount: usize,
) -> AgentResult<Vec<AgentId>> {
    if amount > store.count {
        return Err(AgentError::TooManyCarriers {
            requested: amount,
            population: store.count,
        });
    }
    let mut carriers: Vec<AgentId> = rng
        .sample_indices(store.count, amount)
        .into_iter()
        .map(AgentId::from_slot)
        .collect();
    carriers.sort_unstable();
    for &agent in &carriers {
        store.make_carrier(agent);
    }
    log::debug!("seeded carriers {carriers:?}");
    Ok(carriers)
}
