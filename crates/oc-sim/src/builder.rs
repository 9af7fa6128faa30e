//! Fluent builder for constructing a [`Sim`].

use oc_agent::{AgentStoreBuilder, seed_carriers};
use oc_core::{SimParams, SimRng, Tick};
use oc_epi::TransmissionModel;
use oc_grid::{AStarPathfinder, Grid, Layout, Pathfinder};
use oc_mobility::MovementEngine;

use crate::sim::SimPhase;
use crate::{Sim, SimResult};

/// Stream offset of the transmission RNG, derived from the master seed after
/// carriers have been chosen.
const TRANSMISSION_STREAM: u64 = 1;

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimParams`]: population, adherence, virality, duration, seed
/// - [`Layout`]: the floor plan to run on
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default             |
/// |-------------------|---------------------|
/// | `.pathfinder(p)`  | [`AStarPathfinder`] |
///
/// # Example
///
/// ```rust,ignore
/// let layout = FloorPlans::builtin()?.get(PlanId(0))?.clone();
/// let mut sim = SimBuilder::new(params, layout).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: Pathfinder> {
    params:     SimParams,
    layout:     Layout,
    pathfinder: P,
}

impl SimBuilder<AStarPathfinder> {
    pub fn new(params: SimParams, layout: Layout) -> Self {
        Self { params, layout, pathfinder: AStarPathfinder }
    }
}

impl<P: Pathfinder> SimBuilder<P> {
    /// Route with `pathfinder` instead of the default A*.
    pub fn pathfinder<Q: Pathfinder>(self, pathfinder: Q) -> SimBuilder<Q> {
        SimBuilder { params: self.params, layout: self.layout, pathfinder }
    }

    /// Validate the parameters against the layout, seat the population,
    /// choose the initial carriers, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        let params = self.params;
        params.validate(self.layout.desk_count())?;

        // ── Population ────────────────────────────────────────────────────
        let mut grid = Grid::new(self.layout);
        let (mut agents, rngs) = AgentStoreBuilder::from_params(&params, grid.desks()).build()?;
        for id in agents.agent_ids() {
            grid.place_agent(id, agents.location[id.slot()]);
        }

        // ── Carriers ──────────────────────────────────────────────────────
        let mut master = SimRng::new(params.seed);
        let carriers = seed_carriers(&mut agents, &mut master, params.initial_infected)?;
        let rng = master.child(TRANSMISSION_STREAM);

        Ok(Sim {
            transmission: TransmissionModel::new(params.virality),
            engine: MovementEngine::new(self.pathfinder),
            params,
            grid,
            agents,
            rngs,
            carriers,
            rng,
            phase: SimPhase::Initializing,
            next_tick: Tick::ZERO,
        })
    }
}
