use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod error;
mod storage;

use cli::commands;
use storage::Database;

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "footy")]
#[command(version)]
#[command(about = "Track football players, teams, stats, and boot colors")]
#[command(long_about = "Footy keeps players, teams, performance stats, and boot\n\
    colors in an embedded SQLite database and answers the questions that cut\n\
    across them: team rosters, per-player totals, and goal leaderboards.")]
#[command(after_help = "EXAMPLES:\n    \
    footy add-player \"Lionel Messi\"  Register a player\n    \
    footy add-team Barcelona          Register a team\n    \
    footy join 1 1                    Add player 1 to team 1\n    \
    footy add-stat 1 2 1              Record 2 goals, 1 assist for player 1\n    \
    footy player 1                    Show player 1's totals and teams\n    \
    footy top-scorers                 Show the leaderboard\n\n\
    For more information about a command, run 'footy <command> --help'.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the database file (defaults to ~/.footy/footy.db)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Register a new player
    AddPlayer(commands::add_player::Args),

    /// Register a new team
    AddTeam(commands::add_team::Args),

    /// Record goals and assists for a player
    AddStat(commands::add_stat::Args),

    /// Record a player's boot color
    AddBootColor(commands::add_boot_color::Args),

    /// Add a player to a team's roster
    Join(commands::join::Args),

    /// Remove a player from a team's roster
    Leave(commands::leave::Args),

    /// Show a player's totals, boot color, and teams
    Player(commands::player::Args),

    /// Show a team's roster
    Team(commands::team::Args),

    /// List every recorded boot color
    BootColors(commands::boot_colors::Args),

    /// Show the top goal scorers
    TopScorers(commands::top_scorers::Args),

    /// Delete a player, team, stat, or boot color
    Delete(commands::delete::Args),

    /// Run a read-only SQL query against the database
    Sql(commands::sql::Args),

    /// Show database row counts and file size
    Status(commands::status::Args),

    /// Generate shell completion scripts
    Completions(commands::completions::Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "footy=debug"
    } else {
        "footy=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    // Completions never touch the database
    if let Commands::Completions(args) = &cli.command {
        let mut cmd = Cli::command();
        commands::completions::generate_completions(&mut cmd, args.shell);
        return Ok(());
    }

    // One connection for the whole invocation, passed into each command
    let db_path = match cli.db {
        Some(path) => path,
        None => storage::default_db_path()?,
    };
    let mut db = Database::open(&db_path)?;

    match cli.command {
        Commands::AddPlayer(args) => commands::add_player::run(&mut db, args),
        Commands::AddTeam(args) => commands::add_team::run(&mut db, args),
        Commands::AddStat(args) => commands::add_stat::run(&mut db, args),
        Commands::AddBootColor(args) => commands::add_boot_color::run(&mut db, args),
        Commands::Join(args) => commands::join::run(&mut db, args),
        Commands::Leave(args) => commands::leave::run(&mut db, args),
        Commands::Player(args) => commands::player::run(&mut db, args),
        Commands::Team(args) => commands::team::run(&mut db, args),
        Commands::BootColors(args) => commands::boot_colors::run(&mut db, args),
        Commands::TopScorers(args) => commands::top_scorers::run(&mut db, args),
        Commands::Delete(args) => commands::delete::run(&mut db, args),
        Commands::Sql(args) => commands::sql::run(&mut db, args),
        Commands::Status(args) => commands::status::run(&mut db, args),
        // Handled before the database is opened
        Commands::Completions(_) => Ok(()),
    }
}
