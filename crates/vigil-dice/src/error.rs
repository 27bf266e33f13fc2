//! Error types for dice operations.

/// Errors that can occur when building or rolling dice pools.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// The pool contains no dice, so there is nothing to roll.
    /// Callers surface this as a warning, not a fault.
    #[error("dice pool is empty, nothing to roll")]
    EmptyPool,

    /// A pool specification string could not be parsed.
    #[error("invalid pool spec: {0}")]
    InvalidSpec(String),

    /// A die size outside the supported d4–d12 range was requested.
    #[error("unsupported die size: d{0}")]
    UnsupportedDie(u32),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
