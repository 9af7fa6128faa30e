//! Task assignment.
//!
//! Agents alternate between long desk stints and short trips to shared task
//! spots.  Durations are counted in ticks of work once the agent has arrived;
//! walking time is not included.

use std::ops::RangeInclusive;

use oc_agent::AgentStore;
use oc_core::{AgentId, AgentRng, Cell};

/// Length of a desk stint after returning from a task spot.
pub const DESK_STINT: RangeInclusive<u32> = 50..=100;

/// Length of a stay at a task spot.
pub const AWAY_TASK: RangeInclusive<u32> = 1..=10;

/// Give `agent` its next task and reset its progress.
///
/// An agent finishing a desk stint is sent to a uniformly random task spot;
/// an agent finishing anywhere else is sent home.  A plan without task spots
/// keeps everyone at their desks.
pub fn assign_next_task(store: &mut AgentStore, rng: &mut AgentRng, tasks: &[Cell], agent: AgentId) {
    let i = agent.slot();
    let leaving_desk = store.task_location[i] == store.desk[i];

    let spot = if leaving_desk { rng.choose(tasks).copied() } else { None };
    let (location, duration) = match spot {
        Some(spot) => (spot, rng.gen_range(AWAY_TASK)),
        None => (store.desk[i], rng.gen_range(DESK_STINT)),
    };

    store.task_location[i] = location;
    store.task_duration[i] = duration;
    store.task_progress[i] = 0;
}
