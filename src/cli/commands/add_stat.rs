//! Add-stat command - record goals and assists for a player.
//!
//! Each invocation adds a new stat row; rows are additive and the
//! player's totals are the sum over all of them.

use anyhow::Result;
use colored::Colorize;

use crate::storage::Database;

/// Arguments for the add-stat command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    footy add-stat 1 2 1    Record 2 goals and 1 assist for player 1\n    \
    footy add-stat 1        Record an empty entry (0 goals, 0 assists)")]
pub struct Args {
    /// Id of the player the entry belongs to
    #[arg(value_name = "PLAYER_ID")]
    pub player_id: i64,

    /// Goals scored in this entry
    #[arg(value_name = "GOALS", default_value_t = 0)]
    pub goals: i64,

    /// Assists made in this entry
    #[arg(value_name = "ASSISTS", default_value_t = 0)]
    pub assists: i64,
}

/// Executes the add-stat command.
pub fn run(db: &mut Database, args: Args) -> Result<()> {
    let (player, stat) = db.add_stat(args.player_id, args.goals, args.assists)?;

    println!(
        "{} stat for {}: {} goals, {} assists",
        "Added".green(),
        player.name.bold(),
        stat.goals,
        stat.assists
    );

    Ok(())
}
