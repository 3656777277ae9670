//! Player command - show a player's aggregated detail.
//!
//! Displays the player's stat totals (summed over every recorded entry),
//! boot color, and team memberships.

use anyhow::Result;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::storage::Database;

/// Arguments for the player command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    footy player 1                  Show player 1's totals and teams\n    \
    footy player 1 --format json    Output as JSON")]
pub struct Args {
    /// Id of the player to show
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the player command.
pub fn run(db: &mut Database, args: Args) -> Result<()> {
    let detail = db.player_detail(args.id)?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&detail)?;
            println!("{json}");
        }
        OutputFormat::Text => {
            println!("{} {}", "Player".bold(), detail.name.cyan());
            println!("  {}    {}", "Goals:".dimmed(), detail.total_goals);
            println!("  {}  {}", "Assists:".dimmed(), detail.total_assists);

            let boots = detail
                .boot_color
                .map(|c| c.to_string())
                .unwrap_or_else(|| "None".to_string());
            println!("  {}    {}", "Boots:".dimmed(), boots);

            if detail.teams.is_empty() {
                println!("  {}    None", "Teams:".dimmed());
            } else {
                println!("  {}    {}", "Teams:".dimmed(), detail.teams.join(", "));
            }
        }
    }

    Ok(())
}
