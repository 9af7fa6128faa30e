//! `oc-grid`: floor plans, occupancy, proximity, and pathfinding.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`layout`]     | `CellKind`, `Layout` (immutable parsed floor plan)        |
//! | [`matrix`]     | `TraversalMap` (signed occupancy matrix), adjacency       |
//! | [`grid`]       | `Grid`: occupancy, position registry, proximity queries  |
//! | [`pathfinder`] | `Pathfinder` trait, `AStarPathfinder`                     |
//! | [`plans`]      | `FloorPlans`: built-in office layouts keyed by `PlanId`  |
//! | [`error`]      | `GridError`, `GridResult<T>`                              |
//!
//! # Occupancy encoding
//!
//! ```text
//!   0   wall, never traversable
//!  >0   open floor, desk seat, or task spot
//!  <0   occupied by the agent whose ID is the absolute value
//! ```
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod layout;
pub mod matrix;
pub mod pathfinder;
pub mod plans;


pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use layout::{CellKind, Layout};
pub use matrix::TraversalMap;
pub use pathfinder::{AStarPathfinder, Path, Pathfinder};
pub use plans::FloorPlans;
