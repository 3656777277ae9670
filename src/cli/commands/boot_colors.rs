//! Boot-colors command - list every recorded boot color.

use anyhow::Result;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::storage::Database;

/// Arguments for the boot-colors command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    footy boot-colors                  List boot colors by player\n    \
    footy boot-colors --format json    Output as JSON")]
pub struct Args {
    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the boot-colors command.
pub fn run(db: &mut Database, args: Args) -> Result<()> {
    let listings = db.list_boot_colors()?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&listings)?;
            println!("{json}");
        }
        OutputFormat::Text => {
            if listings.is_empty() {
                println!("{}", "No boot colors recorded.".dimmed());
                return Ok(());
            }

            println!("{}", "Boot Colors".bold());
            for listing in &listings {
                match &listing.player_name {
                    Some(name) => println!("  {}: {}", name, listing.color),
                    None => println!(
                        "  {} (id {}): {} {}",
                        "?".yellow(),
                        listing.id,
                        listing.color,
                        "(player not found)".yellow()
                    ),
                }
            }
        }
    }

    Ok(())
}
