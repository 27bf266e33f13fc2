//! Chat-ready packaging of a roll.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::outcome::RollOutcome;
use crate::verdict::Verdict;

/// A roll outcome bundled with speaker and flavor text, ready for a chat log.
///
/// Reports are plain data; whether one is actually persisted is up to the
/// consuming sink.
#[derive(Debug, Clone, Serialize)]
pub struct RollReport {
    /// Who rolled.
    pub speaker: String,
    /// Flavor line describing what the roll was for.
    pub flavor: String,
    /// The scored outcome.
    pub outcome: RollOutcome,
    /// When the roll happened.
    pub timestamp: DateTime<Utc>,
}

impl RollReport {
    /// Package an outcome for chat.
    pub fn new(speaker: impl Into<String>, flavor: impl Into<String>, outcome: RollOutcome) -> Self {
        Self {
            speaker: speaker.into(),
            flavor: flavor.into(),
            outcome,
            timestamp: Utc::now(),
        }
    }

    /// The outcome's classification.
    pub fn verdict(&self) -> Verdict {
        self.outcome.verdict()
    }
}

impl std::fmt::Display for RollReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} — {}", self.speaker, self.flavor, self.outcome)
    }
}
