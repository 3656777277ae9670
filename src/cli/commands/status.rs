//! Status command - show database statistics.
//!
//! Displays row counts for every table plus the size of the database
//! file on disk.

use anyhow::Result;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::storage::Database;

/// Arguments for the status command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    footy status                  Show row counts and file size\n    \
    footy status --format json    Output counts as JSON")]
pub struct Args {
    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the status command.
pub fn run(db: &mut Database, args: Args) -> Result<()> {
    let stats = db.stats()?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stats)?;
            println!("{json}");
        }
        OutputFormat::Text => {
            println!("{}", "Database Statistics".bold());
            println!();
            println!("  {}      {}", "Players:".dimmed(), stats.players);
            println!("  {}        {}", "Teams:".dimmed(), stats.teams);
            println!("  {}        {}", "Stats:".dimmed(), stats.stats);
            println!("  {}  {}", "Boot colors:".dimmed(), stats.boot_colors);
            println!("  {}  {}", "Memberships:".dimmed(), stats.memberships);

            if let Some(size) = db.file_size() {
                println!("  {}    {}", "File size:".dimmed(), format_size(size));
            }
        }
    }

    Ok(())
}

/// Formats a file size in bytes as a human-readable string.
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
