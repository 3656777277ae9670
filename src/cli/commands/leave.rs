//! Leave command - remove a player from a team's roster.

use anyhow::Result;
use colored::Colorize;

use crate::storage::Database;

/// Arguments for the leave command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    footy leave 1 2    Remove player 1 from team 2")]
pub struct Args {
    /// Id of the player leaving
    #[arg(value_name = "PLAYER_ID")]
    pub player_id: i64,

    /// Id of the team being left
    #[arg(value_name = "TEAM_ID")]
    pub team_id: i64,
}

/// Executes the leave command.
pub fn run(db: &mut Database, args: Args) -> Result<()> {
    let (player, team) = db.remove_player_from_team(args.player_id, args.team_id)?;

    println!(
        "{} {} from {}",
        "Removed".green(),
        player.name.bold(),
        team.name.bold()
    );

    Ok(())
}
