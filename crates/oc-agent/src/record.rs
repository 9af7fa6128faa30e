//! Roster rows handed to front ends at the end of a run.

use oc_core::{AgentId, Cell};

use crate::HealthClass;

/// Static traits and final infection state of one agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentRecord {
    pub id: AgentId,
    pub age: u8,
    pub masked: bool,
    pub distancing: bool,
    pub desk: Cell,
    pub infected: bool,
    pub contagious: bool,
    /// Carrier that infected this agent, for secondary cases.
    pub infector: Option<AgentId>,
}

impl AgentRecord {
    #[inline]
    pub fn health_class(&self) -> HealthClass {
        HealthClass::classify(self.infected, self.contagious)
    }
}
