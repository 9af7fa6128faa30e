//! Strongly typed identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.
//!
//! # Agent numbering
//!
//! Agent IDs start at **1**.  The occupancy matrix stores an agent as the
//! negative of its ID, and `0` is reserved for walls, so ID 0 can never be a
//! valid agent.  SoA storage is 0-based; convert with [`AgentId::slot`] and
//! [`AgentId::from_slot`].  Decoding an occupancy value applies no offset:
//! the ID is the absolute value of the cell.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Identity of one simulated person.  Stable for the whole run, `1..=N`.
    pub struct AgentId(u32);
}

typed_id! {
    /// Selects one of the registered office floor plans.
    pub struct PlanId(u16);
}

impl AgentId {
    /// Position of this agent in 0-based SoA storage.
    ///
    /// # Panics
    /// Panics in debug mode for the reserved ID 0.
    #[inline(always)]
    pub fn slot(self) -> usize {
        debug_assert!(self.0 > 0, "agent id 0 is reserved for walls");
        (self.0 - 1) as usize
    }

    /// Inverse of [`slot`](Self::slot).
    #[inline(always)]
    pub fn from_slot(slot: usize) -> AgentId {
        AgentId(slot as u32 + 1)
    }

    /// The value written into the occupancy matrix for this agent.
    #[inline(always)]
    pub fn marker(self) -> i32 {
        -(self.0 as i32)
    }

    /// Decode an occupancy value.  Returns `None` for walls and free cells.
    #[inline(always)]
    pub fn from_marker(value: i32) -> Option<AgentId> {
        (value < 0).then(|| AgentId(value.unsigned_abs()))
    }
}
