//! Footy - football squad tracking from the command line
//!
//! Footy keeps players, teams, performance stats, and boot colors in an
//! embedded SQLite database and answers the questions that cut across
//! them: team rosters, per-player totals, and goal-scoring leaderboards.

pub mod error;
pub mod storage;
