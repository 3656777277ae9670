//! Add-player command - register a new player.

use anyhow::Result;
use colored::Colorize;

use crate::storage::Database;

/// Arguments for the add-player command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    footy add-player \"Lionel Messi\"    Register a player")]
pub struct Args {
    /// The player's name
    #[arg(value_name = "NAME")]
    #[arg(long_help = "The player's name. Leading and trailing whitespace is\n\
        trimmed; a blank name is rejected. Names are unique.")]
    pub name: String,
}

/// Executes the add-player command.
pub fn run(db: &mut Database, args: Args) -> Result<()> {
    let player = db.add_player(&args.name)?;

    println!(
        "{} player {} (id {})",
        "Added".green(),
        player.name.bold(),
        player.id.to_string().cyan()
    );

    Ok(())
}
