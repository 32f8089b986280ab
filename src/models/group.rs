//! Seat groups.
//!
//! Eight fixed group labels (A through H). Group A is distinguished:
//! it is only ever assigned through the bulk column fill, never by
//! direct painting.

use serde::{Deserialize, Serialize};

/// One of the eight assignable seat groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Group {
    /// Group A - the distinguished bulk-fill group
    A,
    /// Group B
    B,
    /// Group C
    C,
    /// Group D
    D,
    /// Group E
    E,
    /// Group F
    F,
    /// Group G
    G,
    /// Group H
    H,
}

impl Group {
    /// All groups, in display order.
    pub const ALL: [Self; 8] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];

    /// The single-letter label used on the wire and in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
        }
    }

    /// Parses a wire label back into a group.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.label() == label)
    }

    /// Whether this is the distinguished bulk-fill group.
    ///
    /// The bulk-fill group cannot be painted or erased seat-by-seat;
    /// it is only assigned through the column-count fill.
    #[must_use]
    pub const fn is_bulk_fill(self) -> bool {
        matches!(self, Self::A)
    }

    /// Zero-based index into [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
            Self::E => 4,
            Self::F => 5,
            Self::G => 6,
            Self::H => 7,
        }
    }

    /// Group selected by the number keys 1-8 (or letters a-h).
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
