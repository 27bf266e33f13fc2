//! Participants: the combatant records an encounter orders.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vigil_dice::DicePool;

/// Unique identifier for a participant within an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    /// Generate a new random participant id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Token allegiance toward the player side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Allied with the players.
    Friendly,
    /// Neither side.
    Neutral,
    /// Opposed to the players.
    Hostile,
}

/// A point on the encounter grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate, in grid units.
    pub x: f64,
    /// Vertical coordinate, in grid units.
    pub y: f64,
}

impl Position {
    /// Create a position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A combatant taking part in an encounter and its turn order.
///
/// `disposition: None` models a combatant with no usable allegiance data
/// (no linked token); `position: None` one that cannot be measured against.
/// The `pool` is the stat-derived dice pool used for initiative rolls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Stable identity.
    #[serde(default)]
    pub id: ParticipantId,
    /// Display name, also an ordering tiebreak.
    pub name: String,
    /// Whether a player controls this participant. Grants the "owner
    /// advantage" on exact initiative ties.
    #[serde(default)]
    pub player_controlled: bool,
    /// Whether the caller may write initiative back to this participant.
    /// Non-editable participants are silently skipped during rolls.
    #[serde(default = "default_true")]
    pub editable: bool,
    /// Defeated participants can be skipped during turn advance.
    #[serde(default)]
    pub defeated: bool,
    /// Allegiance, when known.
    #[serde(default)]
    pub disposition: Option<Disposition>,
    /// Grid position, when a token is linked.
    #[serde(default)]
    pub position: Option<Position>,
    /// The stat-derived dice pool rolled for initiative.
    #[serde(default)]
    pub pool: DicePool,
    /// Current ordering key; `None` until initiative is rolled.
    #[serde(default)]
    pub initiative: Option<f64>,
    /// Display-only annotation next to the ordering key (success count or
    /// tie/botch/fail code).
    #[serde(default)]
    pub initiative_label: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Participant {
    /// Create a participant with the given name and defaults everywhere else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(),
            name: name.into(),
            player_controlled: false,
            editable: true,
            defeated: false,
            disposition: None,
            position: None,
            pool: DicePool::new(),
            initiative: None,
            initiative_label: None,
        }
    }

    /// Set the initiative dice pool.
    pub fn with_pool(mut self, pool: DicePool) -> Self {
        self.pool = pool;
        self
    }

    /// Place the participant on the grid.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }

    /// Set the allegiance.
    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = Some(disposition);
        self
    }

    /// Mark the participant as player-controlled.
    pub fn player(mut self) -> Self {
        self.player_controlled = true;
        self
    }

    /// Mark the participant as not writable by the caller.
    pub fn locked(mut self) -> Self {
        self.editable = false;
        self
    }
}
