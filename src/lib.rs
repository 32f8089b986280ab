//! Seat Planner Library
//!
//! This library provides core functionality for the Seat Planner
//! application: the seat grid data model, paint/erase and bulk-fill
//! operations, live summary counts, and best-effort remote sync.

// Module declarations
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
pub mod sync;
pub mod tui;
