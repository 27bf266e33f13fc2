//! Host collaborator contracts, injected rather than looked up globally.

use vigil_dice::RollReport;

use crate::participant::Participant;

/// Measures the distance between two position-bearing participants.
///
/// Returns `None` when either side has no position; threshold computation
/// then falls back to the default target number.
pub trait DistanceModel {
    /// Scalar distance between `a` and `b`, in grid units.
    fn distance(&self, a: &Participant, b: &Participant) -> Option<f64>;
}

/// Straight-line distance over grid positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridDistance;

impl DistanceModel for GridDistance {
    fn distance(&self, a: &Participant, b: &Participant) -> Option<f64> {
        let pa = a.position?;
        let pb = b.position?;
        Some(((pa.x - pb.x).powi(2) + (pa.y - pb.y).powi(2)).sqrt())
    }
}

/// Accepts formatted roll results for a chat log.
///
/// Passing no sink to a rolling operation is the "compute only, do not
/// persist" mode: the roll still happens, nothing is recorded.
pub trait ChatSink {
    /// Record one report.
    fn post(&mut self, report: RollReport);
}

/// A sink that buffers reports in memory (tests and the CLI).
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Everything posted so far, in order.
    pub reports: Vec<RollReport>,
}

impl ChatSink for MemorySink {
    fn post(&mut self, report: RollReport) {
        self.reports.push(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_distance() {
        let a = Participant::new("a").at(0.0, 0.0);
        let b = Participant::new("b").at(3.0, 4.0);
        assert_eq!(GridDistance.distance(&a, &b), Some(5.0));
    }

    #[test]
    fn missing_position_yields_none() {
        let a = Participant::new("a").at(0.0, 0.0);
        let b = Participant::new("b");
        assert_eq!(GridDistance.distance(&a, &b), None);
        assert_eq!(GridDistance.distance(&b, &a), None);
    }
}
