//! `oc-core`: foundational types for the office contagion simulator.
//!
//! Every other `oc-*` crate depends on this one.  It has no `oc-*`
//! dependencies and only two external ones (`rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId` (1-based), `PlanId`                         |
//! | [`cell`]        | `Cell` grid coordinate, Euclidean distance            |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (run-level)          |
//! | [`params`]      | `SimParams` and its validation                        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, PlanId};
pub use params::SimParams;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
