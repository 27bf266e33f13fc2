//! Encounter state: participants, rounds, and the initiative round trip.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use vigil_dice::RollReport;

use crate::error::{EncounterError, EncounterResult};
use crate::host::{ChatSink, DistanceModel};
use crate::participant::{Participant, ParticipantId};
use crate::settings::EncounterSettings;
use crate::strategy::InitiativeStrategy;

/// What one initiative round actually did.
///
/// Skips are not errors: participants that are missing, locked against
/// writes, or have an empty dice pool are passed over and reported here,
/// and the rest of the batch proceeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollSummary {
    /// How many participants received a new ordering key.
    pub updated: usize,
    /// Participants that were skipped, in input order.
    pub skipped: Vec<ParticipantId>,
}

/// An encounter: the participant collection, per-encounter settings, and the
/// round/turn cursor.
///
/// Ordering keys are mutated in exactly two places: the batched write-back at
/// the end of [`roll_initiative`](Self::roll_initiative) and
/// [`reset_all`](Self::reset_all).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Encounter {
    /// Per-encounter configuration.
    #[serde(default)]
    pub settings: EncounterSettings,
    #[serde(default)]
    participants: Vec<Participant>,
    #[serde(default)]
    round: u32,
    #[serde(default)]
    turn_index: usize,
}

impl Encounter {
    /// Create an empty encounter with the given settings.
    pub fn new(settings: EncounterSettings) -> Self {
        Self {
            settings,
            participants: Vec::new(),
            round: 0,
            turn_index: 0,
        }
    }

    /// Add a participant, returning its id.
    pub fn add_participant(&mut self, participant: Participant) -> ParticipantId {
        let id = participant.id;
        self.participants.push(participant);
        id
    }

    /// All participants, in current turn order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Ids of all participants, in current turn order.
    pub fn participant_ids(&self) -> Vec<ParticipantId> {
        self.participants.iter().map(|p| p.id).collect()
    }

    /// Look up a participant by id.
    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Returns true if the encounter has no participants.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Current round number (0 before the encounter starts).
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Roll initiative for the given participants.
    ///
    /// Each roller gets a target number from the strategy, rolls its pool in
    /// threshold mode, and derives an ordering key. All write-backs are
    /// collected and applied as one batch at the end, followed by a single
    /// global resort. Reports go to the sink if one is given; passing `None`
    /// is the compute-only mode. An empty id list is a no-op.
    pub fn roll_initiative(
        &mut self,
        ids: &[ParticipantId],
        strategy: &dyn InitiativeStrategy,
        distance: &dyn DistanceModel,
        rng: &mut StdRng,
        mut sink: Option<&mut dyn ChatSink>,
    ) -> RollSummary {
        let mut summary = RollSummary::default();
        if ids.is_empty() {
            return summary;
        }

        let mut updates: Vec<(ParticipantId, f64, String, RollReport)> = Vec::new();
        for &id in ids {
            let Some(roller) = self.participant(id) else {
                summary.skipped.push(id);
                continue;
            };
            if !roller.editable {
                summary.skipped.push(id);
                continue;
            }
            let threshold = strategy.threshold(roller, &self.participants, &self.settings, distance);
            let Ok(outcome) = roller.pool.roll_threshold(threshold, rng) else {
                summary.skipped.push(id);
                continue;
            };
            let key = strategy.order_key(roller, &outcome, &self.settings);
            let label = outcome.verdict().label();
            let report = RollReport::new(
                roller.name.clone(),
                format!("initiative vs {threshold}"),
                outcome,
            );
            updates.push((id, key, label, report));
        }

        // One batched write-back, then one resort.
        for (id, key, label, report) in updates {
            if let Some(p) = self.participants.iter_mut().find(|p| p.id == id) {
                p.initiative = Some(key);
                p.initiative_label = Some(label);
                summary.updated += 1;
            }
            if let Some(sink) = sink.as_deref_mut() {
                sink.post(report);
            }
        }
        self.sort(strategy);
        summary
    }

    /// Re-sort participants under the strategy's comparator. Stable.
    pub fn sort(&mut self, strategy: &dyn InitiativeStrategy) {
        self.participants.sort_by(|a, b| strategy.compare(a, b));
    }

    /// Clear every ordering key and return to the idle state.
    pub fn reset_all(&mut self) {
        for p in &mut self.participants {
            p.initiative = None;
            p.initiative_label = None;
        }
        self.round = 0;
        self.turn_index = 0;
    }

    /// Begin round 1 at the top of the order.
    pub fn start(&mut self) {
        self.round = 1;
        self.turn_index = 0;
        self.skip_defeated_forward();
    }

    /// The participant whose turn it is.
    pub fn current(&self) -> EncounterResult<&Participant> {
        self.participants
            .get(self.turn_index)
            .ok_or(EncounterError::NoActiveParticipant)
    }

    /// Advance to the next turn. Returns true when a new round begins.
    pub fn next_turn(&mut self) -> bool {
        if self.participants.is_empty() {
            return false;
        }
        let mut new_round = false;
        // Bounded walk so a fully-defeated roster cannot spin forever.
        for _ in 0..=self.participants.len() {
            self.turn_index += 1;
            if self.turn_index >= self.participants.len() {
                self.turn_index = 0;
                self.round += 1;
                new_round = true;
            }
            if !self.should_skip(self.turn_index) {
                break;
            }
        }
        new_round
    }

    fn should_skip(&self, index: usize) -> bool {
        self.settings.skip_defeated
            && self
                .participants
                .get(index)
                .is_some_and(|p| p.defeated)
    }

    fn skip_defeated_forward(&mut self) {
        for _ in 0..self.participants.len() {
            if !self.should_skip(self.turn_index) {
                break;
            }
            self.turn_index += 1;
            if self.turn_index >= self.participants.len() {
                self.turn_index = 0;
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{GridDistance, MemorySink};
    use crate::participant::Disposition;
    use crate::settings::OrderingMode;
    use crate::strategy::StandardStrategy;
    use rand::SeedableRng;
    use vigil_dice::{DicePool, Die};

    fn demo_encounter(settings: EncounterSettings) -> Encounter {
        let mut enc = Encounter::new(settings);
        enc.add_participant(
            Participant::new("Mara")
                .player()
                .with_pool(DicePool::new().add(Die::D8, 2).add(Die::D6, 1))
                .at(0.0, 0.0),
        );
        enc.add_participant(
            Participant::new("Grask")
                .with_disposition(Disposition::Hostile)
                .with_pool(DicePool::new().add(Die::D10, 2))
                .at(6.0, 0.0),
        );
        enc.add_participant(
            Participant::new("Tessa")
                .with_disposition(Disposition::Friendly)
                .with_pool(DicePool::new().add(Die::D6, 2))
                .at(1.0, 1.0),
        );
        enc
    }

    #[test]
    fn roll_assigns_keys_and_sorts() {
        let mut enc = demo_encounter(EncounterSettings::default());
        let ids = enc.participant_ids();
        let mut rng = StdRng::seed_from_u64(11);
        let summary =
            enc.roll_initiative(&ids, &StandardStrategy, &GridDistance, &mut rng, None);
        assert_eq!(summary.updated, 3);
        assert!(summary.skipped.is_empty());

        for p in enc.participants() {
            assert!(p.initiative.is_some());
            assert!(p.initiative_label.is_some());
        }
        let keys: Vec<f64> = enc
            .participants()
            .iter()
            .map(|p| p.initiative.unwrap())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn empty_id_list_is_a_noop() {
        let mut enc = demo_encounter(EncounterSettings::default());
        let mut rng = StdRng::seed_from_u64(11);
        let before: Vec<String> = enc.participants().iter().map(|p| p.name.clone()).collect();
        let summary = enc.roll_initiative(&[], &StandardStrategy, &GridDistance, &mut rng, None);
        assert_eq!(summary, RollSummary::default());
        let after: Vec<String> = enc.participants().iter().map(|p| p.name.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn locked_and_empty_pool_participants_are_skipped() {
        let mut enc = Encounter::new(EncounterSettings::default());
        let locked = enc.add_participant(
            Participant::new("Locked")
                .with_pool(DicePool::new().add(Die::D6, 1))
                .locked(),
        );
        let poolless = enc.add_participant(Participant::new("Poolless"));
        let ok = enc.add_participant(
            Participant::new("Ok").with_pool(DicePool::new().add(Die::D6, 1)),
        );
        let ghost = ParticipantId::new();

        let mut rng = StdRng::seed_from_u64(2);
        let summary = enc.roll_initiative(
            &[locked, poolless, ok, ghost],
            &StandardStrategy,
            &GridDistance,
            &mut rng,
            None,
        );
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.skipped, vec![locked, poolless, ghost]);
        assert!(enc.participant(locked).unwrap().initiative.is_none());
        assert!(enc.participant(ok).unwrap().initiative.is_some());
    }

    #[test]
    fn team_mode_buckets_drive_the_order() {
        let settings = EncounterSettings {
            team_based: true,
            ordering_mode: OrderingMode::NpcVsPc,
            ..EncounterSettings::default()
        };
        let mut enc = demo_encounter(settings);
        let ids = enc.participant_ids();
        let mut rng = StdRng::seed_from_u64(3);
        enc.roll_initiative(&ids, &StandardStrategy, &GridDistance, &mut rng, None);
        // NpcVsPc: non-players get bucket 2 and act first; name breaks the tie.
        assert_eq!(enc.participants()[0].name, "Grask");
        assert_eq!(enc.participants()[0].initiative, Some(2.0));
        assert_eq!(enc.participants()[2].name, "Mara");
        assert_eq!(enc.participants()[2].initiative, Some(1.0));
    }

    #[test]
    fn reports_reach_the_sink_only_when_given() {
        let mut enc = demo_encounter(EncounterSettings::default());
        let ids = enc.participant_ids();
        let mut rng = StdRng::seed_from_u64(4);
        let mut sink = MemorySink::default();
        enc.roll_initiative(
            &ids,
            &StandardStrategy,
            &GridDistance,
            &mut rng,
            Some(&mut sink),
        );
        assert_eq!(sink.reports.len(), 3);
        assert!(sink.reports[0].flavor.starts_with("initiative vs "));
    }

    #[test]
    fn reset_all_returns_to_idle() {
        let mut enc = demo_encounter(EncounterSettings::default());
        let ids = enc.participant_ids();
        let mut rng = StdRng::seed_from_u64(5);
        enc.roll_initiative(&ids, &StandardStrategy, &GridDistance, &mut rng, None);
        enc.start();
        assert_eq!(enc.round(), 1);

        enc.reset_all();
        assert_eq!(enc.round(), 0);
        for p in enc.participants() {
            assert!(p.initiative.is_none());
            assert!(p.initiative_label.is_none());
        }
    }

    #[test]
    fn turn_cursor_wraps_into_a_new_round() {
        let mut enc = demo_encounter(EncounterSettings::default());
        enc.start();
        assert!(!enc.next_turn());
        assert!(!enc.next_turn());
        assert!(enc.next_turn());
        assert_eq!(enc.round(), 2);
    }

    #[test]
    fn defeated_participants_are_skipped_when_configured() {
        let settings = EncounterSettings {
            skip_defeated: true,
            ..EncounterSettings::default()
        };
        let mut enc = Encounter::new(settings);
        enc.add_participant(Participant::new("A"));
        let b = enc.add_participant(Participant::new("B"));
        enc.add_participant(Participant::new("C"));
        if let Some(p) = enc.participants.iter_mut().find(|p| p.id == b) {
            p.defeated = true;
        }
        enc.start();
        assert_eq!(enc.current().unwrap().name, "A");
        enc.next_turn();
        // B is defeated and skipped.
        assert_eq!(enc.current().unwrap().name, "C");
    }

    #[test]
    fn current_on_empty_encounter_errors() {
        let enc = Encounter::new(EncounterSettings::default());
        assert!(matches!(
            enc.current(),
            Err(EncounterError::NoActiveParticipant)
        ));
    }

    #[test]
    fn encounter_round_trips_through_json() {
        let enc = demo_encounter(EncounterSettings::default());
        let json = serde_json::to_string(&enc).unwrap();
        let back: Encounter = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 3);
        assert_eq!(back.participants()[0].name, enc.participants()[0].name);
    }
}
