//! Top-scorers command - show the goal-scoring leaderboard.
//!
//! Totals are summed over every stat entry a player has. Ties are
//! broken by ascending player id so repeated runs agree.

use anyhow::Result;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::storage::Database;

/// Arguments for the top-scorers command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    footy top-scorers             Show the top 3 goal scorers\n    \
    footy top-scorers --limit 10  Show the top 10")]
pub struct Args {
    /// Maximum number of scorers to display
    #[arg(short, long, default_value = "3", value_name = "N")]
    pub limit: usize,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the top-scorers command.
pub fn run(db: &mut Database, args: Args) -> Result<()> {
    let scorers = db.top_scorers(args.limit)?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&scorers)?;
            println!("{json}");
        }
        OutputFormat::Text => {
            if scorers.is_empty() {
                println!("{}", "No stats recorded yet.".dimmed());
                return Ok(());
            }

            println!("{}", format!("Top {} Goal Scorers", args.limit).bold());
            for (rank, scorer) in scorers.iter().enumerate() {
                println!(
                    "  {}. {}: {} goals",
                    rank + 1,
                    scorer.name.cyan(),
                    scorer.total_goals
                );
            }
        }
    }

    Ok(())
}
