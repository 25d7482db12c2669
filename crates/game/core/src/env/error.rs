use crate::error::{ErrorSeverity, GameError};

/// A required oracle was not provided to the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("map oracle not available")]
    MapNotAvailable,

    #[error("rng oracle not available")]
    RngNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        // A missing oracle means the embedding wired the environment wrong.
        ErrorSeverity::Fatal
    }
}
