//! Per-tick headline numbers.

use oc_agent::AgentStore;
use oc_core::Tick;
use oc_epi::{Interaction, TransmissionOutcome};

/// Counts recorded at the end of one tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    pub tick: Tick,
    pub population: usize,
    /// Carriers plus secondary cases.
    pub infected: usize,
    pub carriers: usize,
    pub susceptible: usize,
    /// Distinct agent pairs within contact range.
    pub interactions: usize,
    /// Carrier–susceptible pairs drawn for.
    pub contagious_contacts: usize,
    /// Secondary cases created this tick.
    pub new_infections: usize,
}

impl TickSummary {
    pub fn collect(
        tick: Tick,
        agents: &AgentStore,
        interactions: &[Interaction],
        outcome: &TransmissionOutcome,
    ) -> Self {
        let infected = agents.infected_count();
        Self {
            tick,
            population: agents.count,
            infected,
            carriers: agents.contagious_count(),
            susceptible: agents.count - infected,
            interactions: interactions.len(),
            contagious_contacts: outcome.contagious_contacts.len(),
            new_infections: outcome.infections.len(),
        }
    }

    /// Fraction of the population infected, in `[0, 1]`.
    pub fn infected_fraction(&self) -> f64 {
        if self.population == 0 {
            0.0
        } else {
            self.infected as f64 / self.population as f64
        }
    }

    /// Secondary cases so far.
    pub fn secondary(&self) -> usize {
        self.infected - self.carriers
    }
}
