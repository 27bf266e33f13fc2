//! Dice-pool mechanics for Vigil.
//!
//! A [`DicePool`] holds counts of polyhedral dice (d4 through d12). Rolling a
//! pool produces an immutable [`RollOutcome`], scored either against a target
//! number (count successes and ties) or by the single highest die. Outcomes
//! classify into a [`Verdict`] and can be packaged into a chat-ready
//! [`RollReport`].
//!
//! "Reroll" and "rescore" operations never mutate an existing outcome; they
//! always derive a fresh one.

pub mod die;
pub mod error;
pub mod outcome;
pub mod pool;
pub mod report;
pub mod verdict;

pub use die::Die;
pub use error::{DiceError, DiceResult};
pub use outcome::{DieRoll, RollMode, RollOutcome};
pub use pool::DicePool;
pub use report::RollReport;
pub use verdict::Verdict;
