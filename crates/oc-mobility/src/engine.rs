//! Per-agent tick step and three-tier movement.

use oc_agent::{AgentRngs, AgentStore};
use oc_core::{AgentId, AgentRng, Cell};
use oc_grid::{Grid, Pathfinder};

use crate::{AgentPhase, MoveKind, StepOutcome, assign_next_task};

/// Advances agents one at a time against a shared [`Grid`].
///
/// # Type parameter
///
/// `P` is the routing algorithm (e.g. [`oc_grid::AStarPathfinder`]).  Swap it
/// at compile time for a different search with no runtime overhead.
pub struct MovementEngine<P: Pathfinder> {
    pub pathfinder: P,
}

impl<P: Pathfinder> MovementEngine<P> {
    pub fn new(pathfinder: P) -> Self {
        Self { pathfinder }
    }

    /// Run one tick of `agent`'s task state machine.
    ///
    /// Must be called for agents in ascending ID order; the grid is updated
    /// in place, so later agents route around where earlier ones went.
    pub fn step_agent(
        &self,
        agent: AgentId,
        store: &mut AgentStore,
        rngs: &mut AgentRngs,
        grid: &mut Grid,
    ) -> StepOutcome {
        let i = agent.slot();
        let rng = rngs.get_mut(agent);

        if AgentPhase::of(store, agent) == AgentPhase::AtTask {
            if store.task_progress[i] < store.task_duration[i] {
                store.task_progress[i] += 1;
                return StepOutcome::Working;
            }
            assign_next_task(store, rng, grid.tasks(), agent);
            if store.is_at_task(agent) {
                // New task is where the agent already stands.
                return StepOutcome::Working;
            }
        }

        StepOutcome::Moved(self.attempt_move(agent, store, rng, grid))
    }

    /// Take at most one step towards `agent`'s task location.
    ///
    /// The agent's own cell is opened for the duration of the attempt, so a
    /// fallback move can never pick it and routes may start through it.
    fn attempt_move(
        &self,
        agent: AgentId,
        store: &mut AgentStore,
        rng: &mut AgentRng,
        grid: &mut Grid,
    ) -> MoveKind {
        let i = agent.slot();
        let Some(from) = grid.vacate(agent) else {
            debug_assert!(false, "{agent} is not on the grid");
            return MoveKind::Stayed;
        };
        let goal = store.task_location[i];

        let (to, kind) = self
            .distanced_step(agent, store.distancing[i], grid, from, goal)
            .map(|cell| (cell, MoveKind::Distanced))
            .or_else(|| {
                first_step(&self.pathfinder, grid, from, goal).map(|cell| (cell, MoveKind::Direct))
            })
            .unwrap_or_else(|| fallback_step(agent, rng, grid, from));

        debug_assert!(from == to || from.touches(to), "{agent} jumped {from} -> {to}");
        grid.occupy(agent, to);
        store.location[i] = to;
        kind
    }

    fn distanced_step(
        &self,
        agent: AgentId,
        distancing: bool,
        grid: &Grid,
        from: Cell,
        goal: Cell,
    ) -> Option<Cell> {
        if !distancing {
            return None;
        }
        let view = grid.distancing_view(agent);
        self.pathfinder.find_path(&view, from, goal).first().copied()
    }
}

fn first_step<P: Pathfinder>(pathfinder: &P, grid: &Grid, from: Cell, goal: Cell) -> Option<Cell> {
    pathfinder.find_path(grid.occupancy(), from, goal).first().copied()
}

/// Random open neighbour of `from`, or `from` itself when boxed in.
fn fallback_step(agent: AgentId, rng: &mut AgentRng, grid: &Grid, from: Cell) -> (Cell, MoveKind) {
    let open = grid.adjacent_cells(from, false);
    match rng.choose(&open) {
        Some(&cell) => {
            log::trace!("{agent} has no route from {from}, sidestepping to {cell}");
            (cell, MoveKind::Fallback)
        }
        None => {
            log::trace!("{agent} is boxed in at {from}");
            (from, MoveKind::Stayed)
        }
    }
}
