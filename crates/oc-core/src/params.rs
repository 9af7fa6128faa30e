//! Run parameters.
//!
//! `SimParams` is produced by an external front end (parameter form, JSON
//! file, sweep driver) and consumed read-only by the simulation.  It is
//! validated once, before the run starts.
//!
//! # Percentages
//!
//! `mask_adherence`, `distancing_adherence` and `virality` are integer
//! percentages in `0..=100`.  They are normalised with `× 0.01` at the point
//! of use.  Fractions in `0.0..=1.0` are not accepted: the integer type cannot
//! express them and anything above 100 is rejected by [`SimParams::validate`].

use crate::{CoreError, CoreResult, PlanId};

/// Upper bound for every percentage parameter.
pub const MAX_PERCENT: u32 = 100;

/// Parameters for one simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimParams {
    /// Youngest possible agent age (inclusive).
    pub min_age: u8,

    /// Oldest possible agent age (inclusive).  Must be `>= min_age`.
    pub max_age: u8,

    /// Chance, in percent, that an agent wears a mask.
    pub mask_adherence: u32,

    /// Chance, in percent, that an agent follows distancing guidance.
    pub distancing_adherence: u32,

    /// Scales every transmission probability, in percent.
    pub virality: u32,

    /// Which floor plan to run on.
    pub office_plan: PlanId,

    /// Number of agents.  `1..=desk_count` for the chosen plan.
    pub population_size: usize,

    /// Number of agents seeded as carriers.  `1..=population_size`.
    pub initial_infected: usize,

    /// Number of ticks to simulate.  At least 1.
    pub duration_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            min_age:              18,
            max_age:              65,
            mask_adherence:       0,
            distancing_adherence: 0,
            virality:             50,
            office_plan:          PlanId(0),
            population_size:      10,
            initial_infected:     1,
            duration_ticks:       200,
            seed:                 42,
        }
    }
}

impl SimParams {
    /// Check every range constraint against a floor plan with `desk_count`
    /// desks.
    ///
    /// Returns the first violation found as [`CoreError::Config`].
    pub fn validate(&self, desk_count: usize) -> CoreResult<()> {
        if self.min_age > self.max_age {
            return Err(config(format!(
                "min_age {} exceeds max_age {}",
                self.min_age, self.max_age
            )));
        }
        for (name, value) in [
            ("mask_adherence", self.mask_adherence),
            ("distancing_adherence", self.distancing_adherence),
            ("virality", self.virality),
        ] {
            if value > MAX_PERCENT {
                return Err(config(format!("{name} {value} is outside 0..=100")));
            }
        }
        if self.population_size == 0 {
            return Err(config("population_size must be at least 1".into()));
        }
        if self.population_size > desk_count {
            return Err(config(format!(
                "population_size {} exceeds the {desk_count} desks of plan {}",
                self.population_size, self.office_plan
            )));
        }
        if self.initial_infected == 0 {
            return Err(config("initial_infected must be at least 1".into()));
        }
        if self.initial_infected > self.population_size {
            return Err(config(format!(
                "initial_infected {} exceeds population_size {}",
                self.initial_infected, self.population_size
            )));
        }
        if self.duration_ticks == 0 {
            return Err(config("duration_ticks must be at least 1".into()));
        }
        Ok(())
    }
}

fn config(msg: String) -> CoreError {
    CoreError::Config(msg)
}
