use race_core::{CompetitorId, RaceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("competitor {0} appears more than once in the field")]
    DuplicateCompetitor(CompetitorId),

    #[error(transparent)]
    Core(#[from] RaceError),
}

pub type SimResult<T> = Result<T, SimError>;
