//! Delete command - permanently remove records.
//!
//! Deleting a player or team first clears its dependent rows (team
//! memberships, stats, boot color) in the same transaction. This
//! operation is irreversible.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use crate::error::Error;
use crate::storage::Database;

/// Arguments for the delete command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    footy delete player 1          Delete player 1 (prompts for confirmation)\n    \
    footy delete team 2 --force    Delete team 2 without confirmation\n    \
    footy delete stat 3            Delete a single stat entry\n    \
    footy delete boot-color 4      Delete a boot color entry")]
pub struct Args {
    /// What to delete
    #[command(subcommand)]
    pub target: Target,
}

/// Record kinds that can be deleted.
#[derive(clap::Subcommand)]
pub enum Target {
    /// Delete a player along with their memberships, stats, and boot color
    Player(TargetArgs),

    /// Delete a team along with its roster entries
    Team(TargetArgs),

    /// Delete a single stat entry
    Stat(TargetArgs),

    /// Delete a boot color entry
    BootColor(TargetArgs),
}

/// Shared arguments for every delete target.
#[derive(clap::Args)]
pub struct TargetArgs {
    /// Id of the record to delete
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long)]
    #[arg(
        long_help = "Skip the confirmation prompt and proceed with deletion.\n\
        Use with caution as this operation cannot be undone."
    )]
    pub force: bool,
}

/// Executes the delete command.
pub fn run(db: &mut Database, args: Args) -> Result<()> {
    match args.target {
        Target::Player(target) => delete_player(db, target),
        Target::Team(target) => delete_team(db, target),
        Target::Stat(target) => delete_stat(db, target),
        Target::BootColor(target) => delete_boot_color(db, target),
    }
}

fn delete_player(db: &mut Database, args: TargetArgs) -> Result<()> {
    // Resolves not-found before anything is shown or prompted
    let detail = db.player_detail(args.id)?;

    println!("{} {}", "Player".bold(), detail.name.cyan());
    println!(
        "{}",
        "This will also remove their team memberships, stats, and boot color.".yellow()
    );

    if !args.force && !confirm(&format!("Delete player {}?", detail.name))? {
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    let (memberships, stats, boots) = db.delete_player(args.id)?;
    println!(
        "{} player {} ({} memberships, {} stats, {} boot colors)",
        "Deleted".green(),
        detail.name.bold(),
        memberships,
        stats,
        boots
    );

    Ok(())
}

fn delete_team(db: &mut Database, args: TargetArgs) -> Result<()> {
    let roster = db.team_roster(args.id)?;

    println!("{} {}", "Team".bold(), roster.name.cyan());
    println!(
        "{}",
        format!("This will remove {} roster entries.", roster.players.len()).yellow()
    );

    if !args.force && !confirm(&format!("Delete team {}?", roster.name))? {
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    let memberships = db.delete_team(args.id)?;
    println!(
        "{} team {} ({} roster entries)",
        "Deleted".green(),
        roster.name.bold(),
        memberships
    );

    Ok(())
}

fn delete_stat(db: &mut Database, args: TargetArgs) -> Result<()> {
    let stat = db
        .get_stat(args.id)?
        .ok_or_else(|| Error::not_found(format!("stat {}", args.id)))?;

    if !args.force
        && !confirm(&format!(
            "Delete stat {} ({} goals, {} assists)?",
            stat.id, stat.goals, stat.assists
        ))?
    {
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    db.delete_stat(args.id)?;
    println!("{} stat {}", "Deleted".green(), stat.id);

    Ok(())
}

fn delete_boot_color(db: &mut Database, args: TargetArgs) -> Result<()> {
    let boot = db
        .get_boot_color(args.id)?
        .ok_or_else(|| Error::not_found(format!("boot color {}", args.id)))?;

    if !args.force && !confirm(&format!("Delete boot color {} ({})?", boot.id, boot.color))? {
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    db.delete_boot_color(args.id)?;
    println!("{} boot color {}", "Deleted".green(), boot.id);

    Ok(())
}

/// Prompts for a yes/no confirmation, defaulting to no.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}
