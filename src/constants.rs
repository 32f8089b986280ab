//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed seat-grid dimensions.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Seat Planner";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "seatplanner";

/// Number of seat rows in the grid.
pub const ROWS: u8 = 9;

/// Number of columns in each of the two seat blocks.
pub const COLS_PER_BLOCK: u8 = 22;

/// Number of seat blocks, separated by an aisle.
pub const BLOCKS: u8 = 2;

/// Total column span across both blocks.
pub const TOTAL_COLS: u8 = COLS_PER_BLOCK * BLOCKS;

/// Column header labels start at this base; column `c` is labelled `COL_LABEL_BASE + c`.
pub const COL_LABEL_BASE: u16 = 88;

/// Delay between the last mutation and the remote push, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 2000;
