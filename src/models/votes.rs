use serde::{Deserialize, Serialize};

/// Snapshot of the three live counters, as served by `GET /api/votes`.
///
/// Counters are written elsewhere; this side only reads them. Values are
/// always non-negative, whatever the store holds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteCounts {
    /// Votes in favour.
    pub yes: u64,
    /// Votes against.
    pub no: u64,
    /// Current voting round.
    pub round: u64,
}
