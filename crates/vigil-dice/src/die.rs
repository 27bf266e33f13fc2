//! Die sizes supported by the system.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// A polyhedral die. The system uses d4 through d12 only.
///
/// Ordering follows die size, so `Die::D4 < Die::D12`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
}

/// Every die size, ascending. Pools expand their dice in this order.
pub const ALL_DICE: [Die; 5] = [Die::D4, Die::D6, Die::D8, Die::D10, Die::D12];

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
        }
    }

    /// The lowest face on any die. Rolling it signals a potential botch.
    pub const MIN_FACE: u32 = 1;

    /// Build a die from a side count.
    pub fn from_sides(sides: u32) -> DiceResult<Self> {
        match sides {
            4 => Ok(Self::D4),
            6 => Ok(Self::D6),
            8 => Ok(Self::D8),
            10 => Ok(Self::D10),
            12 => Ok(Self::D12),
            other => Err(DiceError::UnsupportedDie(other)),
        }
    }

    /// Parse a die from a tag like "d8" or "D10".
    pub fn parse(s: &str) -> DiceResult<Self> {
        let tag = s.trim().to_lowercase();
        let sides = tag
            .strip_prefix('d')
            .and_then(|n| n.parse::<u32>().ok())
            .ok_or_else(|| DiceError::InvalidSpec(s.to_string()))?;
        Self::from_sides(sides)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_sides() {
        assert_eq!(Die::D4.sides(), 4);
        assert_eq!(Die::D6.sides(), 6);
        assert_eq!(Die::D8.sides(), 8);
        assert_eq!(Die::D10.sides(), 10);
        assert_eq!(Die::D12.sides(), 12);
    }

    #[test]
    fn die_ordering_follows_size() {
        assert!(Die::D4 < Die::D6);
        assert!(Die::D10 < Die::D12);
    }

    #[test]
    fn parse_tags() {
        assert_eq!(Die::parse("d8").unwrap(), Die::D8);
        assert_eq!(Die::parse("D12").unwrap(), Die::D12);
        assert!(matches!(Die::parse("d20"), Err(DiceError::UnsupportedDie(20))));
        assert!(matches!(Die::parse("foo"), Err(DiceError::InvalidSpec(_))));
    }

    #[test]
    fn display() {
        assert_eq!(Die::D10.to_string(), "d10");
    }
}
