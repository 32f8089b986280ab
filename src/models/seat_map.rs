//! The seat assignment mapping.
//!
//! Maps seat ids to groups; an absent entry means the seat is
//! unassigned. This mapping is the sole persisted state - all visual
//! state derives from it.

use std::collections::BTreeMap;

use super::{Group, SeatId};

/// In-memory seat assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatMap {
    assignments: BTreeMap<SeatId, Group>,
}

impl SeatMap {
    /// Creates an empty map (every seat unassigned).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            assignments: BTreeMap::new(),
        }
    }

    /// The group assigned to a seat, if any.
    #[must_use]
    pub fn get(&self, seat: SeatId) -> Option<Group> {
        self.assignments.get(&seat).copied()
    }

    /// Assigns or clears a seat. Returns true if the map changed.
    pub fn set(&mut self, seat: SeatId, group: Option<Group>) -> bool {
        match group {
            Some(g) => self.assignments.insert(seat, g) != Some(g),
            None => self.assignments.remove(&seat).is_some(),
        }
    }

    /// Number of assigned seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no seat is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterates assigned seats.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, Group)> + '_ {
        self.assignments.iter().map(|(id, g)| (*id, *g))
    }

    /// Serializes to the wire shape: seat-id string to group label.
    #[must_use]
    pub fn to_wire(&self) -> BTreeMap<String, String> {
        self.assignments
            .iter()
            .map(|(id, g)| (id.to_string(), g.label().to_string()))
            .collect()
    }

    /// Rebuilds the map from a remote blob, replacing all local state.
    ///
    /// Unknown seat ids and group labels are skipped; the remote store
    /// is an opaque blob and may carry entries this grid cannot place.
    #[must_use]
    pub fn from_wire<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let assignments = entries
            .into_iter()
            .filter_map(|(id, label)| Some((SeatId::parse(id)?, Group::from_label(label)?)))
            .collect();
        Self { assignments }
    }
}
