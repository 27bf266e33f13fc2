//! Immutable roll outcomes and their derivations.

use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::die::Die;
use crate::verdict::Verdict;

/// The result of rolling a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DieRoll {
    /// The die that was rolled.
    pub die: Die,
    /// The value rolled (1 to `die.sides()`).
    pub value: u32,
}

/// How a die sequence is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RollMode {
    /// Count dice against a target number: strictly above scores a success,
    /// exactly equal scores a tie.
    Threshold(u32),
    /// Only the single highest die matters.
    Highest,
}

/// The scored result of rolling a [`DicePool`](crate::DicePool).
///
/// Outcomes are immutable once built. Re-scoring under a different mode or
/// rerolling a botched die always derives a new outcome via [`rescored`]
/// and [`reroll_first_minimum`]; the original sequence is never touched.
///
/// [`rescored`]: RollOutcome::rescored
/// [`reroll_first_minimum`]: RollOutcome::reroll_first_minimum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollOutcome {
    dice: Vec<DieRoll>,
    mode: RollMode,
    successes: u32,
    ties: u32,
}

impl RollOutcome {
    /// Score a die sequence under the given mode.
    pub(crate) fn scored(dice: Vec<DieRoll>, mode: RollMode) -> Self {
        let (successes, ties) = match mode {
            RollMode::Threshold(threshold) => {
                let successes = dice.iter().filter(|d| d.value > threshold).count() as u32;
                let ties = dice.iter().filter(|d| d.value == threshold).count() as u32;
                (successes, ties)
            }
            RollMode::Highest => (0, 0),
        };
        Self {
            dice,
            mode,
            successes,
            ties,
        }
    }

    /// The individual die results, in roll order.
    pub fn dice(&self) -> &[DieRoll] {
        &self.dice
    }

    /// The mode this outcome was scored under.
    pub fn mode(&self) -> RollMode {
        self.mode
    }

    /// Number of dice strictly above the threshold (0 under highest mode).
    pub fn successes(&self) -> u32 {
        self.successes
    }

    /// Number of dice exactly on the threshold (0 under highest mode).
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// The highest die value, or 0 for an empty sequence.
    pub fn highest(&self) -> u32 {
        self.dice.iter().map(|d| d.value).max().unwrap_or(0)
    }

    /// Whether any die shows its minimum face (1). Drives botch detection.
    pub fn has_minimum_face(&self) -> bool {
        self.dice.iter().any(|d| d.value == Die::MIN_FACE)
    }

    /// The highest die value after skipping exactly one die equal to the
    /// maximum. Used as the fractional tiebreak for individual initiative.
    pub fn second_highest(&self) -> u32 {
        let highest = self.highest();
        let mut skipped = false;
        let mut best = 0;
        for roll in &self.dice {
            if !skipped && roll.value == highest {
                skipped = true;
                continue;
            }
            best = best.max(roll.value);
        }
        best
    }

    /// Re-score the same die sequence under a different mode.
    ///
    /// The sequence is copied verbatim; only the derived summary changes.
    pub fn rescored(&self, mode: RollMode) -> Self {
        Self::scored(self.dice.clone(), mode)
    }

    /// Reroll the first die showing its minimum face, then score under `mode`.
    ///
    /// Scans left to right; only the first qualifying die is replaced, with a
    /// fresh roll of the same size. Without any minimum-face die this is
    /// identical to [`rescored`](Self::rescored).
    pub fn reroll_first_minimum(&self, mode: RollMode, rng: &mut StdRng) -> Self {
        let mut dice = self.dice.clone();
        if let Some(roll) = dice.iter_mut().find(|d| d.value == Die::MIN_FACE) {
            roll.value = rng.random_range(1..=roll.die.sides());
        }
        Self::scored(dice, mode)
    }

    /// Classify this outcome for display.
    pub fn verdict(&self) -> Verdict {
        match self.mode {
            RollMode::Threshold(_) => {
                if self.successes > 0 {
                    Verdict::Success(self.successes)
                } else if self.has_minimum_face() {
                    Verdict::Botch
                } else if self.ties > 0 {
                    Verdict::Tie(self.ties)
                } else {
                    Verdict::Failure
                }
            }
            RollMode::Highest => Verdict::Highest {
                value: self.highest(),
                botch: self.highest() == Die::MIN_FACE,
            },
        }
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "[{}] {}", values.join(", "), self.verdict())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn outcome(values: &[u32], mode: RollMode) -> RollOutcome {
        RollOutcome::scored(
            values
                .iter()
                .map(|&value| DieRoll { die: Die::D6, value })
                .collect(),
            mode,
        )
    }

    #[test]
    fn threshold_scoring_splits_successes_and_ties() {
        let o = outcome(&[4, 3, 2, 6, 3], RollMode::Threshold(3));
        assert_eq!(o.successes(), 2);
        assert_eq!(o.ties(), 2);
        assert!(!o.has_minimum_face());
    }

    #[test]
    fn single_d6_against_three() {
        // The system's worked example: 4 is a success, 3 only a tie, 1 a botch.
        let o = outcome(&[4], RollMode::Threshold(3));
        assert_eq!((o.successes(), o.ties()), (1, 0));
        assert_eq!(o.verdict(), Verdict::Success(1));

        let o = outcome(&[3], RollMode::Threshold(3));
        assert_eq!((o.successes(), o.ties()), (0, 1));
        assert_eq!(o.verdict(), Verdict::Tie(1));

        let o = outcome(&[1], RollMode::Threshold(3));
        assert!(o.has_minimum_face());
        assert_eq!(o.verdict(), Verdict::Botch);
    }

    #[test]
    fn success_takes_precedence_over_botch() {
        let o = outcome(&[1, 5], RollMode::Threshold(3));
        assert_eq!(o.verdict(), Verdict::Success(1));
    }

    #[test]
    fn botch_takes_precedence_over_tie() {
        let o = outcome(&[1, 3], RollMode::Threshold(3));
        assert_eq!(o.verdict(), Verdict::Botch);
    }

    #[test]
    fn failure_when_nothing_scores() {
        let o = outcome(&[2, 2], RollMode::Threshold(4));
        assert_eq!(o.verdict(), Verdict::Failure);
    }

    #[test]
    fn highest_mode_summary() {
        let o = outcome(&[2, 5, 3], RollMode::Highest);
        assert_eq!(o.highest(), 5);
        assert_eq!(o.successes(), 0);
        assert_eq!(o.ties(), 0);
        assert_eq!(
            o.verdict(),
            Verdict::Highest {
                value: 5,
                botch: false
            }
        );
    }

    #[test]
    fn highest_mode_botch_only_when_all_minimum() {
        let o = outcome(&[1, 1], RollMode::Highest);
        assert_eq!(
            o.verdict(),
            Verdict::Highest {
                value: 1,
                botch: true
            }
        );
        let o = outcome(&[1, 4], RollMode::Highest);
        assert_eq!(
            o.verdict(),
            Verdict::Highest {
                value: 4,
                botch: false
            }
        );
    }

    #[test]
    fn second_highest_skips_exactly_one_maximum() {
        // Two dice share the maximum: only one occurrence is skipped.
        let o = outcome(&[6, 6, 4], RollMode::Highest);
        assert_eq!(o.second_highest(), 6);

        let o = outcome(&[6, 4, 2], RollMode::Highest);
        assert_eq!(o.second_highest(), 4);

        let o = outcome(&[5], RollMode::Highest);
        assert_eq!(o.second_highest(), 0);
    }

    #[test]
    fn rescored_keeps_the_sequence() {
        let o = outcome(&[4, 3, 1], RollMode::Threshold(3));
        let as_highest = o.rescored(RollMode::Highest);
        assert_eq!(o.dice(), as_highest.dice());
        assert_eq!(as_highest.mode(), RollMode::Highest);
        assert_eq!(as_highest.successes(), 0);

        let back = as_highest.rescored(RollMode::Threshold(3));
        assert_eq!(back, o);
    }

    #[test]
    fn reroll_replaces_only_the_first_minimum() {
        let mut rng = StdRng::seed_from_u64(7);
        let o = outcome(&[1, 4, 1], RollMode::Threshold(3));
        let rerolled = o.reroll_first_minimum(RollMode::Threshold(3), &mut rng);
        assert_eq!(rerolled.dice().len(), 3);
        // Second and third dice untouched.
        assert_eq!(rerolled.dice()[1], o.dice()[1]);
        assert_eq!(rerolled.dice()[2], o.dice()[2]);
        // Source outcome unchanged.
        assert_eq!(o.dice()[0].value, 1);
    }

    #[test]
    fn reroll_without_minimum_equals_rescore() {
        let mut rng = StdRng::seed_from_u64(7);
        let o = outcome(&[4, 2, 5], RollMode::Threshold(3));
        let rerolled = o.reroll_first_minimum(RollMode::Highest, &mut rng);
        assert_eq!(rerolled, o.rescored(RollMode::Highest));
    }
}
