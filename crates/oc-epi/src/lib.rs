//! `oc-epi`: who was near whom, and who caught what.
//!
//! # Crate layout
//!
//! | Module           | Contents                                               |
//! |------------------|--------------------------------------------------------|
//! | [`contact`]      | `Interaction`, `detect_interactions`                   |
//! | [`transmission`] | Mask / distance factors, `TransmissionModel`, outcomes |
//!
//! # Transmission formula
//!
//! ```text
//! p = mask_factor × distance_factor × virality × 0.01      (clamped to [0, 1])
//!
//! mask_factor:      both masked 0.5, one masked 0.75, neither 1.0
//! distance_factor:  d < 1 → 1.0,  d > 2 → 0.25,  otherwise 1 / d²
//! ```
//!
//! One uniform draw in `[0, 1)` is made per carrier–susceptible contact; the
//! contact infects when the draw is below `p`.

pub mod contact;
pub mod transmission;

#[cfg(test)]
mod tests;

pub use contact::{Interaction, detect_interactions};
pub use transmission::{
    ContagiousContact, Infection, TransmissionModel, TransmissionOutcome, distance_factor,
    mask_factor, transmission_probability,
};
