//! `oc-sim`: tick loop orchestrator for the office contagion simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..params.duration_ticks:
//!   ① Move:      every agent in ascending ID order works, picks a new
//!                task, or takes one step; the grid is updated after each.
//!   ② Detect:    all agent pairs within two hops of each other.
//!   ③ Transmit:  one draw per carrier–susceptible pair.
//!   ④ Snapshot:  Frame + TickSummary to the observer.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | [`run_sweep`] runs parameter sets on Rayon's thread pool. |
//! | `serde`    | Derives `Serialize`/`Deserialize` on frames and summaries. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use oc_core::SimParams;
//! use oc_sim::run_plan;
//!
//! let output = run_plan(&SimParams::default())?;
//! println!("{} frames, {} infected", output.frames.len(), output.final_infected());
//! ```

pub mod builder;
pub mod error;
pub mod frame;
pub mod lineage;
pub mod observer;
pub mod sim;
pub mod summary;
pub mod sweep;


use oc_agent::AgentRecord;
use oc_core::{PlanId, SimParams};
use oc_epi::Interaction;
use oc_grid::{FloorPlans, Layout};

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use frame::{CellCategory, Frame};
pub use lineage::Lineage;
pub use observer::{FrameRecorder, NoopObserver, SimObserver, Tee};
pub use sim::{Sim, SimPhase};
pub use summary::TickSummary;
pub use sweep::run_sweep;

/// Everything a completed run hands back.
#[derive(Clone, Debug)]
pub struct SimOutput {
    /// One frame per tick.
    pub frames: Vec<Frame>,
    /// Final state of every agent, ascending ID.
    pub roster: Vec<AgentRecord>,
    /// One summary per tick.
    pub summaries: Vec<TickSummary>,
    /// Interaction set of every tick.
    pub interactions: Vec<Vec<Interaction>>,
}

impl SimOutput {
    pub fn lineage(&self) -> Lineage {
        Lineage::from_roster(&self.roster)
    }

    pub fn final_infected(&self) -> usize {
        self.roster.iter().filter(|r| r.infected).count()
    }
}

/// Run `params` on `layout` from start to finish.
pub fn run_simulation(params: &SimParams, layout: &Layout) -> SimResult<SimOutput> {
    let mut sim = SimBuilder::new(params.clone(), layout.clone()).build()?;
    let mut recorder = FrameRecorder::new();
    sim.run(&mut recorder)?;
    Ok(SimOutput {
        frames: recorder.frames,
        roster: sim.agents.roster(),
        summaries: recorder.summaries,
        interactions: recorder.interactions,
    })
}

/// Run `params` on the built-in plan named by `params.office_plan`.
pub fn run_plan(params: &SimParams) -> SimResult<SimOutput> {
    let plans = FloorPlans::builtin()?;
    run_simulation(params, plans.get(params.office_plan)?)
}

/// Desks on built-in plan `plan`; the largest valid `population_size`.
pub fn desk_count(plan: PlanId) -> SimResult<usize> {
    Ok(FloorPlans::builtin()?.desk_count(plan)?)
}
