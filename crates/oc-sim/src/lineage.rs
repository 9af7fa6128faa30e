//! Who infected whom.
//!
//! [`Lineage`] groups every secondary case under the carrier that infected
//! it.  Drawing the tree is left to the caller.

use std::collections::BTreeMap;

use oc_agent::{AgentRecord, HealthClass};
use oc_core::AgentId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lineage {
    /// Secondary cases per carrier, ascending by ID.  Every carrier has an
    /// entry, possibly empty.
    pub by_carrier: BTreeMap<AgentId, Vec<AgentId>>,
}

impl Lineage {
    pub fn from_roster(roster: &[AgentRecord]) -> Self {
        let mut by_carrier: BTreeMap<AgentId, Vec<AgentId>> = roster
            .iter()
            .filter(|r| r.health_class() == HealthClass::Carrier)
            .map(|r| (r.id, Vec::new()))
            .collect();

        for record in roster {
            if let Some(infector) = record.infector {
                by_carrier.entry(infector).or_default().push(record.id);
            }
        }
        for cases in by_carrier.values_mut() {
            cases.sort_unstable();
        }
        Self { by_carrier }
    }

    /// Carriers in ascending ID order.
    pub fn carriers(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.by_carrier.keys().copied()
    }

    /// Agents infected by `carrier`.
    pub fn infected_by(&self, carrier: AgentId) -> &[AgentId] {
        self.by_carrier.get(&carrier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of secondary cases.
    pub fn secondary_count(&self) -> usize {
        self.by_carrier.values().map(Vec::len).sum()
    }
}
