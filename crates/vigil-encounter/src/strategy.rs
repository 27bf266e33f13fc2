//! The ordering strategy seam.

use std::cmp::Ordering;

use vigil_dice::RollOutcome;

use crate::host::DistanceModel;
use crate::ordering;
use crate::participant::Participant;
use crate::settings::EncounterSettings;

/// The three decisions initiative ordering is built from.
///
/// The encounter invokes a strategy rather than hard-coding the rules, so
/// tests (or alternative rulesets) can substitute any of the three without
/// touching encounter state handling.
pub trait InitiativeStrategy {
    /// The target number for one roller.
    fn threshold(
        &self,
        roller: &Participant,
        all: &[Participant],
        settings: &EncounterSettings,
        distance: &dyn DistanceModel,
    ) -> u32;

    /// The comparable ordering key derived from a roll.
    fn order_key(
        &self,
        roller: &Participant,
        outcome: &RollOutcome,
        settings: &EncounterSettings,
    ) -> f64;

    /// The global turn-order comparator.
    fn compare(&self, a: &Participant, b: &Participant) -> Ordering;
}

/// The system's standard rules: distance-derived thresholds, team buckets or
/// highest-die-plus-tiebreak keys, and the four-level comparator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardStrategy;

impl InitiativeStrategy for StandardStrategy {
    fn threshold(
        &self,
        roller: &Participant,
        all: &[Participant],
        settings: &EncounterSettings,
        distance: &dyn DistanceModel,
    ) -> u32 {
        crate::threshold::compute_threshold(roller, all, settings, distance)
    }

    fn order_key(
        &self,
        roller: &Participant,
        outcome: &RollOutcome,
        settings: &EncounterSettings,
    ) -> f64 {
        if settings.team_based {
            f64::from(ordering::team_bucket(settings.ordering_mode, roller))
        } else {
            ordering::individual_key(outcome)
        }
    }

    fn compare(&self, a: &Participant, b: &Participant) -> Ordering {
        ordering::compare_participants(a, b)
    }
}
