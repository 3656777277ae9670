//! Join command - add a player to a team's roster.

use anyhow::Result;
use colored::Colorize;

use crate::storage::Database;

/// Arguments for the join command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    footy join 1 2    Add player 1 to team 2")]
pub struct Args {
    /// Id of the player joining
    #[arg(value_name = "PLAYER_ID")]
    pub player_id: i64,

    /// Id of the team being joined
    #[arg(value_name = "TEAM_ID")]
    pub team_id: i64,
}

/// Executes the join command.
pub fn run(db: &mut Database, args: Args) -> Result<()> {
    let (player, team) = db.add_player_to_team(args.player_id, args.team_id)?;

    println!(
        "{} {} to {}",
        "Added".green(),
        player.name.bold(),
        team.name.bold()
    );

    Ok(())
}
