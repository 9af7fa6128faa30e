//! Per-agent step state and outcomes.

use oc_agent::AgentStore;
use oc_core::AgentId;

/// Where an agent is in its task cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AgentPhase {
    /// Standing on the task location.
    AtTask,
    /// Walking towards the task location.
    EnRoute,
}

impl AgentPhase {
    #[inline]
    pub fn of(store: &AgentStore, agent: AgentId) -> AgentPhase {
        if store.is_at_task(agent) { AgentPhase::AtTask } else { AgentPhase::EnRoute }
    }
}

/// Which movement tier produced a step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// First step of a route that keeps clear of other agents.
    Distanced,
    /// First step of a route over the live occupancy.
    Direct,
    /// No route: a random open neighbour.
    Fallback,
    /// No route and no open neighbour.
    Stayed,
}

/// What one agent did in one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Worked on its current task without moving.
    Working,
    /// Attempted a movement step.
    Moved(MoveKind),
}

impl StepOutcome {
    /// `true` if the agent ended the tick on a different cell.
    pub fn changed_cell(self) -> bool {
        matches!(self, StepOutcome::Moved(kind) if kind != MoveKind::Stayed)
    }
}
