//! Target-number computation: manual override or distance-derived.

use crate::host::DistanceModel;
use crate::ordering::team_bucket;
use crate::participant::Participant;
use crate::settings::EncounterSettings;

/// Target number used when no opponent can be measured against.
pub const DEFAULT_THRESHOLD: u32 = 2;

/// Map a distance to the nearest opponent onto a target number.
///
/// Fixed breakpoints, monotonic non-decreasing in distance.
pub fn threshold_for_distance(distance: f64) -> u32 {
    if distance <= 4.0 {
        2
    } else if distance <= 12.0 {
        3
    } else if distance <= 36.0 {
        4
    } else if distance <= 100.0 {
        5
    } else {
        6
    }
}

/// Compute the target number for one roller.
///
/// A positive manual threshold always wins. Otherwise participants are
/// partitioned into sides by the ordering mode, and the minimum distance from
/// the roller to any participant on another side picks the breakpoint. With
/// no opposing participants, no usable side data, or no measurable distance,
/// the default threshold applies.
pub fn compute_threshold(
    roller: &Participant,
    all: &[Participant],
    settings: &EncounterSettings,
    distance: &dyn DistanceModel,
) -> u32 {
    if settings.manual_threshold > 0 {
        return settings.manual_threshold;
    }

    let own_side = team_bucket(settings.ordering_mode, roller);
    if own_side < 0 {
        return DEFAULT_THRESHOLD;
    }

    let nearest = all
        .iter()
        .filter(|p| {
            let side = team_bucket(settings.ordering_mode, p);
            side >= 0 && side != own_side
        })
        .filter_map(|opponent| distance.distance(roller, opponent))
        .min_by(f64::total_cmp);

    match nearest {
        Some(d) => threshold_for_distance(d),
        None => DEFAULT_THRESHOLD,
    }
}
