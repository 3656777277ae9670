//! Add-boot-color command - record a player's boot color.
//!
//! A player can have at most one boot color; recording a second one is
//! rejected rather than overwriting the first.

use anyhow::Result;
use colored::Colorize;

use crate::storage::Database;

/// Arguments for the add-boot-color command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    footy add-boot-color 1 White    Record white boots for player 1\n\n\
    Valid colors: Gold, Blue, Red, White, Black")]
pub struct Args {
    /// Id of the player wearing the boots
    #[arg(value_name = "PLAYER_ID")]
    pub player_id: i64,

    /// The boot color (Gold, Blue, Red, White, or Black)
    #[arg(value_name = "COLOR")]
    pub color: String,
}

/// Executes the add-boot-color command.
pub fn run(db: &mut Database, args: Args) -> Result<()> {
    let (player, boot) = db.add_boot_color(args.player_id, &args.color)?;

    println!(
        "{} boot color {} for {}",
        "Added".green(),
        boot.color.to_string().bold(),
        player.name.bold()
    );

    Ok(())
}
