use serde::{Deserialize, Serialize};

use std::fmt;

/// A snapshot of the state of one search round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Zero-based round number.
    pub round: usize,
    /// Frontier size after the round's merge.
    pub frontier_size: usize,
    /// Candidates synthesized by the round's pairings, before
    /// dominance pruning.
    pub candidates_emitted: usize,
    /// Frontier classes the merge inserted or improved.
    pub changed: usize,
}

impl fmt::Display for RoundSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "round {}: frontier {}, emitted {}, changed {}",
            self.round, self.frontier_size, self.candidates_emitted, self.changed
        )
    }
}

/// Hook into the solver's round loop.
///
/// `on_round` fires after each round's merge. `cancelled` is
/// polled between rounds; returning `true` stops the search,
/// which then returns whatever solutions the frontier already
/// holds.
pub trait SolverObserver {
    fn on_round(&mut self, snapshot: &RoundSnapshot) {
        let _ = snapshot;
    }

    fn cancelled(&self) -> bool {
        false
    }
}

/// The do-nothing observer.
impl SolverObserver for () {}

/// An observer that records every round snapshot.
///
/// # Examples
/// ```
/// use palbreed_solver::{RoundSnapshot, SolverLogger, SolverObserver};
///
/// let mut logger = SolverLogger::new();
/// logger.on_round(&RoundSnapshot {
///     round: 0,
///     frontier_size: 12,
///     candidates_emitted: 48,
///     changed: 7,
/// });
///
/// assert_eq!(logger.iter().count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverLogger {
    logs: Vec<RoundSnapshot>,
}

impl SolverLogger {
    pub fn new() -> SolverLogger {
        SolverLogger::default()
    }

    /// Iterate over all recorded snapshots, in round order.
    pub fn iter(&self) -> impl Iterator<Item = &RoundSnapshot> {
        self.logs.iter()
    }
}

impl SolverObserver for SolverLogger {
    fn on_round(&mut self, snapshot: &RoundSnapshot) {
        self.logs.push(*snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logger_records_in_order() {
        let mut logger = SolverLogger::new();
        for round in 0..3 {
            logger.on_round(&RoundSnapshot {
                round,
                frontier_size: round * 10,
                candidates_emitted: 0,
                changed: 0,
            });
        }
        let rounds: Vec<usize> = logger.iter().map(|s| s.round).collect();
        assert_eq!(rounds, vec![0, 1, 2]);
    }

    #[test]
    fn snapshots_serialize() {
        let snapshot = RoundSnapshot {
            round: 1,
            frontier_size: 2,
            candidates_emitted: 3,
            changed: 4,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: RoundSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
