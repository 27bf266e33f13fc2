//! Initiative ordering and encounter state for Vigil.
//!
//! An [`Encounter`] owns its participants and a round/turn cursor. Rolling
//! initiative computes a per-participant target number (manual or derived
//! from the distance to the nearest opponent), obtains a roll from
//! `vigil-dice`, derives a comparable ordering key (team bucket or
//! highest-die-plus-tiebreak), batches all write-backs, and re-sorts the
//! encounter under a deterministic four-level total order.
//!
//! Host collaborators (distance function, chat sink) and the ordering rules
//! themselves ([`InitiativeStrategy`]) are injected traits, so tests can
//! substitute any of them.

pub mod encounter;
pub mod error;
pub mod host;
pub mod ordering;
pub mod participant;
pub mod settings;
pub mod strategy;
pub mod threshold;

pub use encounter::{Encounter, RollSummary};
pub use error::{EncounterError, EncounterResult};
pub use host::{ChatSink, DistanceModel, GridDistance, MemorySink};
pub use ordering::{compare_participants, individual_key, team_bucket};
pub use participant::{Disposition, Participant, ParticipantId, Position};
pub use settings::{EncounterSettings, OrderingMode};
pub use strategy::{InitiativeStrategy, StandardStrategy};
pub use threshold::{DEFAULT_THRESHOLD, compute_threshold, threshold_for_distance};
