//! `oc-mobility`: what each agent does in a tick, and how it moves.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`state`]  | `AgentPhase`, `MoveKind`, `StepOutcome`                      |
//! | [`task`]   | Task assignment (desk stints and away tasks)                 |
//! | [`engine`] | `MovementEngine<P>`: per-agent step + three-tier movement   |
//!
//! # Behaviour model
//!
//! An agent is either working at its task location or walking towards it.
//!
//! 1. At the task with time left: progress advances by one tick.
//! 2. At the task with the time used up: a new task is assigned (desk →
//!    random task spot, anything else → home desk) and the agent takes its
//!    first step.
//! 3. En route: the agent takes one step.
//!
//! A step first tries a distancing route (if the agent distances), then a
//! direct route, then a random open neighbour, and otherwise stays put.  The
//! grid is updated before the next agent moves.

pub mod engine;
pub mod state;
pub mod task;


pub use engine::MovementEngine;
pub use state::{AgentPhase, MoveKind, StepOutcome};
pub use task::{AWAY_TASK, DESK_STINT, assign_next_task};
