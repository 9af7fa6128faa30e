//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! The movement engine needs `&mut AgentRngs` for task and fallback draws
//! while it reads and writes `AgentStore` fields of the same agent.  Keeping
//! the RNGs in their own struct lets both borrows coexist.
//!
//! Positions live in two places: `location` here is the agent's
//! own view, and the grid's position registry is the spatial index.  The
//! movement engine writes both in the same step.

use oc_core::{AgentId, AgentRng, Cell};

use crate::AgentRecord;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, indexed by [`AgentId::slot`].
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Seed one RNG per agent `1..=count` from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count)
            .map(|slot| AgentRng::new(global_seed, AgentId::from_slot(slot)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.slot()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── HealthClass ───────────────────────────────────────────────────────────────

/// Epidemiological role of an agent.
///
/// | Class         | infected | contagious |
/// |---------------|----------|------------|
/// | `Carrier`     | yes      | yes        |
/// | `Secondary`   | yes      | no         |
/// | `Susceptible` | no       | no         |
///
/// Only carriers transmit; secondary cases never become contagious within a
/// run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthClass {
    Carrier,
    Secondary,
    Susceptible,
}

impl HealthClass {
    #[inline]
    pub fn classify(infected: bool, contagious: bool) -> HealthClass {
        match (infected, contagious) {
            (_, true) => HealthClass::Carrier,
            (true, false) => HealthClass::Secondary,
            (false, false) => HealthClass::Susceptible,
        }
    }

    #[inline]
    pub fn is_infected(self) -> bool {
        !matches!(self, HealthClass::Susceptible)
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements and is indexed by
/// `agent.slot()`:
///
/// ```ignore
/// let here = store.location[agent.slot()];
/// ```
///
/// Static traits (`age`, `masked`, `distancing`, `desk`) are written once by
/// [`AgentStoreBuilder`](crate::AgentStoreBuilder) and never change.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Static traits ─────────────────────────────────────────────────────
    pub age: Vec<u8>,

    /// Wears a mask for the whole run.
    pub masked: Vec<bool>,

    /// Routes around other agents' personal space when it can.
    pub distancing: Vec<bool>,

    /// Home desk.  Agent `n` sits at the `n`-th desk in row-major order.
    pub desk: Vec<Cell>,

    // ── Task state ────────────────────────────────────────────────────────
    /// Current cell.
    pub location: Vec<Cell>,

    /// Where the current task is performed: the home desk or a task spot.
    pub task_location: Vec<Cell>,

    /// Ticks the current task lasts once the agent has arrived.
    pub task_duration: Vec<u32>,

    /// Ticks already worked on the current task.
    pub task_progress: Vec<u32>,

    // ── Health state ──────────────────────────────────────────────────────
    pub infected: Vec<bool>,
    pub contagious: Vec<bool>,

    /// Carrier that infected this agent.  `None` for carriers and the
    /// never-infected.
    pub infector: Vec<Option<AgentId>>,
}

impl AgentStore {
    pub(crate) fn new(count: usize) -> Self {
        let origin = Cell::new(0, 0);
        Self {
            count,
            age: vec![0; count],
            masked: vec![false; count],
            distancing: vec![false; count],
            desk: vec![origin; count],
            location: vec![origin; count],
            task_location: vec![origin; count],
            task_duration: vec![0; count],
            task_progress: vec![0; count],
            infected: vec![false; count],
            contagious: vec![false; count],
            infector: vec![None; count],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// All IDs in ascending order, `AgentId(1)..=AgentId(count)`.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count).map(AgentId::from_slot)
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.0 >= 1 && agent.slot() < self.count
    }

    // ── Health helpers ────────────────────────────────────────────────────

    #[inline]
    pub fn health_class(&self, agent: AgentId) -> HealthClass {
        let i = agent.slot();
        HealthClass::classify(self.infected[i], self.contagious[i])
    }

    /// Make `agent` an initial carrier: infected and contagious, no infector.
    pub fn make_carrier(&mut self, agent: AgentId) {
        let i = agent.slot();
        self.infected[i] = true;
        self.contagious[i] = true;
        self.infector[i] = None;
    }

    /// Record a secondary infection.  Returns `false` (and changes nothing)
    /// if `agent` was already infected.
    pub fn infect(&mut self, agent: AgentId, by: AgentId) -> bool {
        let i = agent.slot();
        if self.infected[i] {
            return false;
        }
        self.infected[i] = true;
        self.infector[i] = Some(by);
        true
    }

    pub fn infected_count(&self) -> usize {
        self.infected.iter().filter(|&&v| v).count()
    }

    pub fn contagious_count(&self) -> usize {
        self.contagious.iter().filter(|&&v| v).count()
    }

    // ── Task helpers ──────────────────────────────────────────────────────

    /// `true` once the agent stands on its task location.
    #[inline]
    pub fn is_at_task(&self, agent: AgentId) -> bool {
        let i = agent.slot();
        self.location[i] == self.task_location[i]
    }

    /// `true` while the agent sits at its home desk.
    #[inline]
    pub fn is_at_desk(&self, agent: AgentId) -> bool {
        let i = agent.slot();
        self.location[i] == self.desk[i]
    }

    // ── Export ────────────────────────────────────────────────────────────

    /// Snapshot of one agent as a roster row.
    pub fn record(&self, agent: AgentId) -> AgentRecord {
        let i = agent.slot();
        AgentRecord {
            id: agent,
            age: self.age[i],
            masked: self.masked[i],
            distancing: self.distancing[i],
            desk: self.desk[i],
            infected: self.infected[i],
            contagious: self.contagious[i],
            infector: self.infector[i],
        }
    }

    /// One record per agent, in ascending ID order.
    pub fn roster(&self) -> Vec<AgentRecord> {
        self.agent_ids().map(|id| self.record(id)).collect()
    }
}
