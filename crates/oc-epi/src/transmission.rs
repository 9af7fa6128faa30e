//! Stochastic airborne transmission.
//!
//! Only carrier–susceptible contacts can transmit.  Secondary cases are
//! infected but never contagious within a run, and a contact between two
//! carriers, two secondaries, or a carrier and a secondary changes nothing.

use oc_agent::{AgentStore, HealthClass};
use oc_core::{AgentId, SimRng};

use crate::Interaction;

// ── Factors ───────────────────────────────────────────────────────────────────

/// Protection from masks: 0.5 if both wear one, 0.75 if one does, else 1.0.
#[inline]
pub fn mask_factor(a_masked: bool, b_masked: bool) -> f64 {
    match (a_masked, b_masked) {
        (true, true) => 0.5,
        (true, false) | (false, true) => 0.75,
        (false, false) => 1.0,
    }
}

/// Attenuation with distance: 1.0 under one cell, 0.25 beyond two, and the
/// inverse square in between.
#[inline]
pub fn distance_factor(distance: f32) -> f64 {
    let d = f64::from(distance);
    if d < 1.0 {
        1.0
    } else if d > 2.0 {
        0.25
    } else {
        1.0 / (d * d)
    }
}

/// Chance that one contact transmits, in `[0, 1]`.
///
/// `virality` is a 0–100 percentage.
pub fn transmission_probability(a_masked: bool, b_masked: bool, distance: f32, virality: u32) -> f64 {
    let p = mask_factor(a_masked, b_masked) * distance_factor(distance) * f64::from(virality) * 0.01;
    p.clamp(0.0, 1.0)
}

// ── Contacts & outcomes ───────────────────────────────────────────────────────

/// An interaction in which a carrier met a susceptible agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContagiousContact {
    pub carrier: AgentId,
    pub susceptible: AgentId,
    pub distance: f32,
}

/// A new secondary case.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Infection {
    pub infected: AgentId,
    pub infector: AgentId,
}

/// What the transmission phase of one tick did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransmissionOutcome {
    /// Every carrier–susceptible contact that was drawn for, in order.
    pub contagious_contacts: Vec<ContagiousContact>,
    /// New cases, in the order they happened.
    pub infections: Vec<Infection>,
}

impl TransmissionOutcome {
    /// `true` if at least one agent was infected.
    #[inline]
    pub fn any(&self) -> bool {
        !self.infections.is_empty()
    }
}

// ── TransmissionModel ─────────────────────────────────────────────────────────

/// Applies one tick's interactions to the agent store.
#[derive(Copy, Clone, Debug)]
pub struct TransmissionModel {
    virality: u32,
}

impl TransmissionModel {
    pub fn new(virality: u32) -> Self {
        Self { virality }
    }

    #[inline]
    pub fn virality(&self) -> u32 {
        self.virality
    }

    /// The carrier–susceptible subset of `interactions`, carrier first,
    /// keeping the input order.
    pub fn contagious_contacts(
        &self,
        interactions: &[Interaction],
        store: &AgentStore,
    ) -> Vec<ContagiousContact> {
        interactions
            .iter()
            .filter_map(|i| {
                let (carrier, susceptible) =
                    match (store.health_class(i.a), store.health_class(i.b)) {
                        (HealthClass::Carrier, HealthClass::Susceptible) => (i.a, i.b),
                        (HealthClass::Susceptible, HealthClass::Carrier) => (i.b, i.a),
                        _ => return None,
                    };
                Some(ContagiousContact { carrier, susceptible, distance: i.distance })
            })
            .collect()
    }

    /// Transmission probability for one contact.
    pub fn probability(&self, contact: &ContagiousContact, store: &AgentStore) -> f64 {
        transmission_probability(
            store.masked[contact.carrier.slot()],
            store.masked[contact.susceptible.slot()],
            contact.distance,
            self.virality,
        )
    }

    /// Draw for every contagious contact and record the infections.
    ///
    /// Contacts are classified before any draw, so a case created earlier in
    /// the same call neither transmits nor is infected again.  A draw is
    /// still made for such contacts, keeping the RNG stream independent of
    /// earlier outcomes.
    pub fn apply(
        &self,
        interactions: &[Interaction],
        store: &mut AgentStore,
        rng: &mut SimRng,
    ) -> TransmissionOutcome {
        let contacts = self.contagious_contacts(interactions, store);
        let mut infections = Vec::new();

        for contact in &contacts {
            let p = self.probability(contact, store);
            let draw = rng.unit();
            if draw < p && store.infect(contact.susceptible, contact.carrier) {
                log::debug!(
                    "{} infected {} at distance {:.2} (p = {p:.3})",
                    contact.carrier,
                    contact.susceptible,
                    contact.distance,
                );
                infections.push(Infection {
                    infected: contact.susceptible,
                    infector: contact.carrier,
                });
            }
        }

        TransmissionOutcome { contagious_contacts: contacts, infections }
    }
}
