//! Command-line interface for Footy.
//!
//! Provides the CLI commands for managing the squad database:
//! registering players and teams, recording stats and boot colors,
//! and querying rosters and leaderboards.

/// Individual CLI command implementations.
pub mod commands;

mod format;

pub use format::OutputFormat;
