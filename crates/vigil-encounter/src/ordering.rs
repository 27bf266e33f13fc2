//! Ordering keys and the global participant comparator.

use std::cmp::Ordering;

use vigil_dice::RollOutcome;

use crate::participant::{Disposition, Participant};
use crate::settings::OrderingMode;

/// Sentinel ordering key for participants that could not be classified.
pub const UNCLASSIFIED: i32 = -1;

/// Sort value standing in for an unset initiative, so unrolled participants
/// sort last.
pub const UNSET_KEY: f64 = -9999.0;

/// Coarse side classification used by the bucket tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// Player-controlled.
    Pc,
    /// Friendly-disposition non-player.
    Ally,
    /// Everyone else with known allegiance.
    Enemy,
}

fn classify(p: &Participant) -> Option<Side> {
    if p.player_controlled {
        return Some(Side::Pc);
    }
    match p.disposition? {
        Disposition::Friendly => Some(Side::Ally),
        Disposition::Neutral | Disposition::Hostile => Some(Side::Enemy),
    }
}

/// The team-mode ordering key: a small integer bucket per the mode's fixed
/// side table, or [`UNCLASSIFIED`] when the participant's side is unknown.
///
/// Two-side modes bucket into {1, 2}, three-side modes into {1, 2, 3}. The
/// comparator sorts descending, so the side a mode names first receives the
/// highest bucket and acts first. The allies/enemies variants fold players
/// and friendly tokens onto one side.
pub fn team_bucket(mode: OrderingMode, p: &Participant) -> i32 {
    match mode {
        // Player-control splits need no token data and always classify.
        OrderingMode::PcVsNpc => {
            if p.player_controlled {
                2
            } else {
                1
            }
        }
        OrderingMode::NpcVsPc => {
            if p.player_controlled {
                1
            } else {
                2
            }
        }
        OrderingMode::AlliesVsEnemies => match classify(p) {
            Some(Side::Pc | Side::Ally) => 2,
            Some(Side::Enemy) => 1,
            None => UNCLASSIFIED,
        },
        OrderingMode::EnemiesVsAllies => match classify(p) {
            Some(Side::Enemy) => 2,
            Some(Side::Pc | Side::Ally) => 1,
            None => UNCLASSIFIED,
        },
        OrderingMode::PcsAlliesEnemies => match classify(p) {
            Some(Side::Pc) => 3,
            Some(Side::Ally) => 2,
            Some(Side::Enemy) => 1,
            None => UNCLASSIFIED,
        },
        OrderingMode::EnemiesPcsAllies => match classify(p) {
            Some(Side::Enemy) => 3,
            Some(Side::Pc) => 2,
            Some(Side::Ally) => 1,
            None => UNCLASSIFIED,
        },
    }
}

/// The individual-mode ordering key: highest die plus a fractional tiebreak.
///
/// The tiebreak is the best die after skipping exactly one occurrence of the
/// maximum, divided by 20 so it can never overtake a higher primary die.
/// Richer pools therefore win ties without disturbing the primary order.
pub fn individual_key(outcome: &RollOutcome) -> f64 {
    f64::from(outcome.highest()) + f64::from(outcome.second_highest()) / 20.0
}

/// The global turn-order comparator: a deterministic total order.
///
/// Four levels: initiative descending (unset sorts last), player-controlled
/// above not on exact ties, then name, then id. Sorting participants with
/// this comparator never depends on input order.
pub fn compare_participants(a: &Participant, b: &Participant) -> Ordering {
    let ka = a.initiative.unwrap_or(UNSET_KEY);
    let kb = b.initiative.unwrap_or(UNSET_KEY);
    kb.total_cmp(&ka)
        .then_with(|| b.player_controlled.cmp(&a.player_controlled))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}
