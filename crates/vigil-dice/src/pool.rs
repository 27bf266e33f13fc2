//! Dice pool construction and rolling.

use std::collections::BTreeMap;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::error::{DiceError, DiceResult};
use crate::outcome::{DieRoll, RollMode, RollOutcome};

/// A multiset of dice to be rolled together: a non-negative count per die size.
///
/// The expanded die sequence is deterministic — dice come out in ascending
/// size order (all d4s, then d6s, and so on). An empty pool is a valid value
/// but an explicit "no roll" signal: rolling it is rejected, not scored zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool {
    counts: BTreeMap<Die, u32>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` dice of the given size. Counts accumulate.
    pub fn add(mut self, die: Die, count: u32) -> Self {
        if count > 0 {
            *self.counts.entry(die).or_insert(0) += count;
        }
        self
    }

    /// Parse a pool spec like `"2d6 3d8"` or `"d10+2d4"`.
    ///
    /// Chunks are separated by whitespace, `+`, or `,`; each chunk is
    /// `NdS` or `dS` (count 1). An all-empty spec yields an empty pool.
    pub fn parse(spec: &str) -> DiceResult<Self> {
        let mut pool = Self::new();
        for chunk in spec.split(|c: char| c.is_whitespace() || c == '+' || c == ',') {
            if chunk.is_empty() {
                continue;
            }
            let lower = chunk.to_lowercase();
            let d = lower
                .find('d')
                .ok_or_else(|| DiceError::InvalidSpec(chunk.to_string()))?;
            let count = if d == 0 {
                1
            } else {
                lower[..d]
                    .parse::<u32>()
                    .map_err(|_| DiceError::InvalidSpec(chunk.to_string()))?
            };
            let die = Die::parse(&lower[d..])?;
            pool = pool.add(die, count);
        }
        Ok(pool)
    }

    /// How many dice of the given size the pool holds.
    pub fn count_of(&self, die: Die) -> u32 {
        self.counts.get(&die).copied().unwrap_or(0)
    }

    /// Total number of dice in the pool.
    pub fn count(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// The expanded die sequence, ascending by size.
    pub fn dice(&self) -> impl Iterator<Item = Die> + '_ {
        self.counts
            .iter()
            .flat_map(|(&die, &count)| std::iter::repeat_n(die, count as usize))
    }

    /// Roll the pool and score against a target number.
    ///
    /// Each die strictly above `threshold` counts one success; a die exactly
    /// equal counts one tie. Rejects an empty pool with
    /// [`DiceError::EmptyPool`].
    pub fn roll_threshold(&self, threshold: u32, rng: &mut StdRng) -> DiceResult<RollOutcome> {
        let dice = self.draw(rng)?;
        Ok(RollOutcome::scored(dice, RollMode::Threshold(threshold)))
    }

    /// Roll the pool and score by the single highest die.
    pub fn roll_highest(&self, rng: &mut StdRng) -> DiceResult<RollOutcome> {
        let dice = self.draw(rng)?;
        Ok(RollOutcome::scored(dice, RollMode::Highest))
    }

    fn draw(&self, rng: &mut StdRng) -> DiceResult<Vec<DieRoll>> {
        if self.is_empty() {
            return Err(DiceError::EmptyPool);
        }
        Ok(self
            .dice()
            .map(|die| DieRoll {
                die,
                value: rng.random_range(1..=die.sides()),
            })
            .collect())
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "empty pool");
        }
        let parts: Vec<String> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(die, count)| format!("{count}{die}"))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}
