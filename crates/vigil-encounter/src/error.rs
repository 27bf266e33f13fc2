//! Error types for encounter operations.

use crate::participant::ParticipantId;

/// Errors that can occur while managing an encounter.
#[derive(Debug, thiserror::Error)]
pub enum EncounterError {
    /// The encounter has no participant whose turn it could be.
    #[error("no active participant")]
    NoActiveParticipant,

    /// The given participant id is not part of this encounter.
    #[error("participant not found: {0}")]
    UnknownParticipant(ParticipantId),
}

/// Convenience result type for encounter operations.
pub type EncounterResult<T> = Result<T, EncounterError>;
