//! Core data models for Footy
//!
//! The four record types stored in the squad database, plus the derived
//! views the CLI renders (player detail, rosters, leaderboards).
//! Field validation lives here so it runs before any persistence call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A football player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Surrogate integer id assigned by the database
    pub id: i64,

    /// The player's name, stored trimmed
    pub name: String,
}

/// A football team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Surrogate integer id assigned by the database
    pub id: i64,

    /// The team's name, stored trimmed
    pub name: String,
}

/// One recorded performance entry for a player.
///
/// A player accumulates one Stat row per recorded match or period; rows
/// are additive and never merged or deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    /// Surrogate integer id assigned by the database
    pub id: i64,

    /// Goals scored in this entry (never negative)
    pub goals: i64,

    /// Assists made in this entry (never negative)
    pub assists: i64,

    /// The player this entry belongs to
    pub player_id: i64,
}

/// The allowed boot colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Gold,
    Blue,
    Red,
    White,
    Black,
}

impl Color {
    /// Every allowed color, in display order.
    pub const ALL: [Color; 5] = [
        Color::Gold,
        Color::Blue,
        Color::Red,
        Color::White,
        Color::Black,
    ];

    /// The canonical name, as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Gold => "Gold",
            Color::Blue => "Blue",
            Color::Red => "Red",
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                let valid = Color::ALL.map(|c| c.as_str()).join(", ");
                Error::Validation(format!("Color must be one of: {valid}"))
            })
    }
}

/// A player's recorded boot color. At most one row exists per player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootColor {
    /// Surrogate integer id assigned by the database
    pub id: i64,

    /// One of the five allowed colors
    pub color: Color,

    /// The player wearing these boots
    pub player_id: i64,
}

/// Aggregated view of one player: stat totals, boot color, and teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDetail {
    pub id: i64,
    pub name: String,

    /// Sum of goals over all of the player's stat rows
    pub total_goals: i64,

    /// Sum of assists over all of the player's stat rows
    pub total_assists: i64,

    /// The player's boot color, if one has been recorded
    pub boot_color: Option<Color>,

    /// Names of the teams the player belongs to, ordered by name
    pub teams: Vec<String>,
}

/// One row of the boot color listing.
///
/// `player_name` is None when the owning player row cannot be resolved,
/// which should not happen as long as player deletion clears boot colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootColorListing {
    pub id: i64,
    pub color: Color,
    pub player_name: Option<String>,
}

/// A team together with its member names, ordered by player name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRoster {
    pub id: i64,
    pub name: String,
    pub players: Vec<String>,
}

/// One leaderboard entry: a player and their total goals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopScorer {
    pub player_id: i64,
    pub name: String,
    pub total_goals: i64,
}

/// Row counts for the status overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbStats {
    pub players: i64,
    pub teams: i64,
    pub stats: i64,
    pub boot_colors: i64,
    pub memberships: i64,
}

/// Validates a player or team name and returns the trimmed form.
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(
            "Name must be a non-empty string".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validates goal and assist counts for a stat entry.
pub fn validate_stat_values(goals: i64, assists: i64) -> Result<()> {
    if goals < 0 {
        return Err(Error::Validation(
            "Goals must be a non-negative integer".to_string(),
        ));
    }
    if assists < 0 {
        return Err(Error::Validation(
            "Assists must be a non-negative integer".to_string(),
        ));
    }
    Ok(())
}
