use shared::DomainError;
use thiserror::Error;

/// The scheduler's error taxonomy. The first three variants are pre-model validation
/// failures raised before any solver variable exists; `NoSolution` is the
/// solver's own verdict and is the only failure that can arise after
/// constraint assertion. The core never retries and never logs -- logging
/// happens at the HTTP boundary, if at all.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("invalid date range: {reason}")]
    InvalidRange { reason: String },

    #[error("invalid seed shift: {reason}")]
    InvalidSeed { reason: String },

    #[error("agent '{agent}' has overlapping preferred/avoid shifts: {shifts:?}")]
    InconsistentPreferences { agent: String, shifts: Vec<String> },

    #[error("no feasible roster exists for the given constraints")]
    NoSolution,
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Pre-model validation failures become `DomainError::InvalidInput`; the
/// solver's own verdict has no good fit in the shared taxonomy, so it
/// travels as `InternalError` and is given its own HTTP status at the API
/// boundary instead of `DomainError`'s usual 500.
impl From<SchedulerError> for DomainError {
    fn from(err: SchedulerError) -> Self {
        match err {
            SchedulerError::InvalidRange { .. }
            | SchedulerError::InvalidSeed { .. }
            | SchedulerError::InconsistentPreferences { .. } => {
                DomainError::InvalidInput(err.to_string())
            }
            SchedulerError::NoSolution => DomainError::InternalError(err.to_string()),
        }
    }
}
