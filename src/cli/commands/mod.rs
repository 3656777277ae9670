//! CLI commands for Footy.
//!
//! Each submodule implements a single CLI command with its argument
//! parsing and execution logic.

/// Record a player's boot color.
pub mod add_boot_color;

/// Register a new player.
pub mod add_player;

/// Record a stat entry for a player.
pub mod add_stat;

/// Register a new team.
pub mod add_team;

/// List every recorded boot color.
pub mod boot_colors;

/// Generate shell completion scripts.
pub mod completions;

/// Delete players, teams, stats, or boot colors.
pub mod delete;

/// Add a player to a team's roster.
pub mod join;

/// Remove a player from a team's roster.
pub mod leave;

/// Show a player's totals, boot color, and teams.
pub mod player;

/// Run a read-only SQL query.
pub mod sql;

/// Show database row counts and file size.
pub mod status;

/// Show a team's roster.
pub mod team;

/// Show the goal-scoring leaderboard.
pub mod top_scorers;
