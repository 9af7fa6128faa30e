//! Proximity contacts between agents.

use oc_core::{AgentId, Cell};
use oc_grid::Grid;

/// Two agents within the two-hop contact radius during one tick.
///
/// `a < b` always holds; each unordered pair appears at most once per tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interaction {
    pub a: AgentId,
    pub b: AgentId,
    /// Euclidean distance between the two cells.
    pub distance: f32,
}

impl Interaction {
    fn between(x: (AgentId, Cell), y: (AgentId, Cell)) -> Self {
        let (a, b) = if x.0 < y.0 { (x.0, y.0) } else { (y.0, x.0) };
        Self { a, b, distance: x.1.distance(y.1) }
    }

    /// The other party, if `agent` took part.
    pub fn partner(&self, agent: AgentId) -> Option<AgentId> {
        if agent == self.a {
            Some(self.b)
        } else if agent == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Every pair of agents within two hops of each other, from the grid as it
/// stands after all agents have moved.
///
/// Sorted by `(a, b, distance)`.  Both directions of a pair collapse to one
/// record.
pub fn detect_interactions(grid: &Grid) -> Vec<Interaction> {
    let mut found: Vec<Interaction> = grid
        .agent_positions()
        .flat_map(|origin| {
            grid.find_proximate_pairs(origin.1)
                .into_iter()
                .map(move |other| Interaction::between(origin, other))
        })
        .collect();

    found.sort_by(|x, y| {
        x.a.cmp(&y.a)
            .then(x.b.cmp(&y.b))
            .then(x.distance.total_cmp(&y.distance))
    });
    found.dedup();
    found
}
