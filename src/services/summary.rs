//! Per-group occupancy summary.
//!
//! Recomputed from scratch after every mutation. The grid is small and
//! fixed, so a full scan per call is fine.

use crate::models::{Group, SeatMap};

/// Occupancy counts per group plus the combined B-H total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    counts: [usize; Group::ALL.len()],
    /// Total across all groups except the bulk-fill group.
    pub total_regular: usize,
}

impl Summary {
    /// Scans the full assignment mapping and tallies each group.
    #[must_use]
    pub fn compute(map: &SeatMap) -> Self {
        let mut counts = [0usize; Group::ALL.len()];
        for (_, group) in map.iter() {
            counts[group.index()] += 1;
        }

        let total_regular = Group::ALL
            .iter()
            .filter(|g| !g.is_bulk_fill())
            .map(|g| counts[g.index()])
            .sum();

        Self {
            counts,
            total_regular,
        }
    }

    /// The occupancy count for one group.
    #[must_use]
    pub const fn count(&self, group: Group) -> usize {
        self.counts[group.index()]
    }
}
