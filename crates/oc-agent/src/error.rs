//! Agent-subsystem error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("population of {population} needs {population} desks, plan has {desks}")]
    NotEnoughDesks { population: usize, desks: usize },

    #[error("age range {min}..={max} is empty")]
    InvalidAgeRange { min: u8, max: u8 },

    #[error("cannot seed {requested} carriers in a population of {population}")]
    TooManyCarriers { requested: usize, population: usize },
}

pub type AgentResult<T> = Result<T, AgentError>;
