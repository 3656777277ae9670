//! Add-team command - register a new team.

use anyhow::Result;
use colored::Colorize;

use crate::storage::Database;

/// Arguments for the add-team command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    footy add-team Barcelona    Register a team")]
pub struct Args {
    /// The team's name
    #[arg(value_name = "NAME")]
    #[arg(long_help = "The team's name. Leading and trailing whitespace is\n\
        trimmed; a blank name is rejected. Names are unique.")]
    pub name: String,
}

/// Executes the add-team command.
pub fn run(db: &mut Database, args: Args) -> Result<()> {
    let team = db.add_team(&args.name)?;

    println!(
        "{} team {} (id {})",
        "Added".green(),
        team.name.bold(),
        team.id.to_string().cyan()
    );

    Ok(())
}
