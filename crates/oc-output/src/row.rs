//! Plain data row types written by output backends.

use oc_agent::AgentRecord;
use oc_epi::Interaction;
use oc_sim::TickSummary;

/// Headline counts for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:                u64,
    pub infected:            u64,
    pub carriers:            u64,
    pub susceptible:         u64,
    pub interactions:        u64,
    pub contagious_contacts: u64,
    pub new_infections:      u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:                s.tick.0,
            infected:            s.infected as u64,
            carriers:            s.carriers as u64,
            susceptible:         s.susceptible as u64,
            interactions:        s.interactions as u64,
            contagious_contacts: s.contagious_contacts as u64,
            new_infections:      s.new_infections as u64,
        }
    }
}

/// One agent pair in contact range during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionRow {
    pub tick:     u64,
    pub agent_a:  u32,
    pub agent_b:  u32,
    pub distance: f32,
}

impl InteractionRow {
    pub fn new(tick: u64, interaction: &Interaction) -> Self {
        Self {
            tick,
            agent_a:  interaction.a.0,
            agent_b:  interaction.b.0,
            distance: interaction.distance,
        }
    }
}

/// Final state of one agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterRow {
    pub agent_id:   u32,
    pub age:        u8,
    pub masked:     bool,
    pub distancing: bool,
    pub desk_row:   u32,
    pub desk_col:   u32,
    pub infected:   bool,
    pub contagious: bool,
    /// `0` when the agent was never infected by another agent.
    pub infector:   u32,
}

impl From<&AgentRecord> for RosterRow {
    fn from(r: &AgentRecord) -> Self {
        Self {
            agent_id:   r.id.0,
            age:        r.age,
            masked:     r.masked,
            distancing: r.distancing,
            desk_row:   r.desk.row,
            desk_col:   r.desk.col,
            infected:   r.infected,
            contagious: r.contagious,
            infector:   r.infector.map_or(0, |a| a.0),
        }
    }
}
