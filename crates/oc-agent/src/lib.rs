//! `oc-agent`: Structure-of-Arrays agent storage for the office simulator.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA arrays), `AgentRngs`, `HealthClass`       |
//! | [`record`]  | `AgentRecord` (one roster row per agent)                    |
//! | [`builder`] | `AgentStoreBuilder` (population instantiation), `seed_carriers` |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `AgentRecord` and `HealthClass`. |

pub mod builder;
pub mod error;
pub mod record;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::{AgentStoreBuilder, INITIAL_DESK_STINT, seed_carriers};
pub use error::{AgentError, AgentResult};
pub use record::AgentRecord;
pub use store::{AgentRngs, AgentStore, HealthClass};
