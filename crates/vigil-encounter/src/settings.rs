//! Per-encounter configuration.

use serde::{Deserialize, Serialize};

/// How participants are partitioned into sides for team initiative and
/// distance thresholds.
///
/// Two-side modes split on player control or allegiance; the three-side
/// modes additionally distinguish friendly non-player participants. The
/// variant name lists the sides in bucket order (first side sorts first).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingMode {
    /// Player characters before everyone else.
    #[default]
    PcVsNpc,
    /// Everyone else before player characters.
    NpcVsPc,
    /// Player side (players and friendly tokens) before enemies.
    AlliesVsEnemies,
    /// Enemies before the player side.
    EnemiesVsAllies,
    /// Three sides: players, then friendly non-players, then enemies.
    PcsAlliesEnemies,
    /// Three sides: enemies, then players, then friendly non-players.
    EnemiesPcsAllies,
}

/// Global per-encounter configuration. Read by the ordering engine, never
/// mutated by it.
///
/// Every field is defaulted so a malformed or partial settings blob degrades
/// to defaults instead of failing the round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterSettings {
    /// Order by side buckets instead of individual roll keys.
    pub team_based: bool,
    /// Side partition rule.
    pub ordering_mode: OrderingMode,
    /// Skip defeated participants when advancing turns.
    pub skip_defeated: bool,
    /// When positive, overrides the distance-derived target number.
    pub manual_threshold: u32,
}

impl EncounterSettings {
    /// Parse settings from JSON, falling back to defaults on malformed input.
    pub fn from_json_lenient(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }
}
