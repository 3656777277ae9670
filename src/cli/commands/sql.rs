//! Sql command - run a read-only query against the database.
//!
//! Execution errors are printed rather than propagated so a typo in a
//! query exits cleanly without a stack of context.

use anyhow::Result;
use colored::Colorize;

use crate::storage::Database;

/// Arguments for the sql command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    footy sql \"SELECT * FROM players\"         Dump the players table\n    \
    footy sql \"SELECT COUNT(*) FROM stats\"    Count stat entries")]
pub struct Args {
    /// The SQL statement to run (must be read-only)
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Executes the sql command.
pub fn run(db: &mut Database, args: Args) -> Result<()> {
    match db.run_sql(&args.query) {
        Ok((columns, rows)) => {
            println!("{}", columns.join(" | ").bold());
            for row in &rows {
                println!("{}", row.join(" | "));
            }
            println!(
                "{}",
                format!("({} {})", rows.len(), if rows.len() == 1 { "row" } else { "rows" })
                    .dimmed()
            );
        }
        Err(e) => println!("{} {e}", "Error:".red()),
    }

    Ok(())
}
