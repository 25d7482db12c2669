//! Common error infrastructure.
//!
//! Domain-specific errors (e.g., `MoveError`, `MeleeError`) are defined in
//! their respective modules alongside the actions they validate; this module
//! provides the shared severity classification they all report through.

/// Severity level of an error, used for categorization and recovery
/// strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Recoverable error - an expected "impossible action" such as walking
    /// into a wall or attacking empty space. Callers substitute behavior
    /// (usually a wasted turn) and never surface these to the player.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: actor not found, malformed command.
    Validation,

    /// Internal error - unexpected state inconsistency. These indicate bugs
    /// and should be investigated.
    Internal,

    /// Fatal error - the surrounding wiring is broken and the game cannot
    /// continue (e.g., a required oracle is missing).
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error type.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Error type for actions that never fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("this error should never be constructed")]
pub enum NeverError {}

impl GameError for NeverError {
    fn severity(&self) -> ErrorSeverity {
        match *self {} // Empty match - this is never constructed
    }

    fn error_code(&self) -> &'static str {
        match *self {}
    }
}
