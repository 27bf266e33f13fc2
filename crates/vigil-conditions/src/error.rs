//! Error types for condition bookkeeping.

/// Errors that can occur during condition operations.
#[derive(Debug, thiserror::Error)]
pub enum ConditionError {
    /// No catalog entry matches the given id or label.
    /// Surfaced to the user as a warning, never a fault.
    #[error("unknown condition: \"{0}\"")]
    UnknownCondition(String),
}

/// Convenience result type for condition operations.
pub type ConditionResult<T> = Result<T, ConditionError>;
