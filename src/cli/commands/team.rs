//! Team command - show a team's roster.

use anyhow::Result;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::storage::Database;

/// Arguments for the team command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    footy team 1                  Show team 1's roster\n    \
    footy team 1 --format json    Output as JSON")]
pub struct Args {
    /// Id of the team to show
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the team command.
pub fn run(db: &mut Database, args: Args) -> Result<()> {
    let roster = db.team_roster(args.id)?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&roster)?;
            println!("{json}");
        }
        OutputFormat::Text => {
            println!("{} {}", "Team".bold(), roster.name.cyan());
            if roster.players.is_empty() {
                println!("  {}", "No players on the roster.".dimmed());
            } else {
                for name in &roster.players {
                    println!("  {name}");
                }
            }
        }
    }

    Ok(())
}
