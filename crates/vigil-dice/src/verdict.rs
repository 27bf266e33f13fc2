//! Roll classification for display.

use serde::Serialize;

/// The human-facing classification of a roll outcome.
///
/// Threshold-mode precedence is fixed: any success wins, then a shown
/// minimum face makes the roll a botch, then ties, then plain failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// At least one die beat the target number.
    Success(u32),
    /// No success and at least one die showed its minimum face.
    Botch,
    /// No success, no botch, at least one die exactly on the target.
    Tie(u32),
    /// Nothing scored.
    Failure,
    /// Highest-mode result: the top face value, botched when it is 1.
    Highest {
        /// The highest face value rolled.
        value: u32,
        /// True when even the highest die shows the minimum face.
        botch: bool,
    },
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success(n) => write!(f, "success ({n})"),
            Self::Botch => write!(f, "botch"),
            Self::Tie(n) => write!(f, "tie ({n})"),
            Self::Failure => write!(f, "failure"),
            Self::Highest { value, botch: true } => write!(f, "highest {value} (botch)"),
            Self::Highest { value, botch: false } => write!(f, "highest {value}"),
        }
    }
}

impl Verdict {
    /// Short code persisted next to an initiative value (e.g. on a tracker).
    pub fn label(&self) -> String {
        match self {
            Self::Success(n) => n.to_string(),
            Self::Botch => "botch".to_string(),
            Self::Tie(_) => "tie".to_string(),
            Self::Failure => "fail".to_string(),
            Self::Highest { value, botch: true } => format!("{value}!"),
            Self::Highest { value, botch: false } => value.to_string(),
        }
    }
}
