//! Completions command - generate shell completion scripts.
//!
//! Generates shell completion scripts for various shells that can be
//! installed to enable tab-completion of Footy commands and options.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Arguments for the completions command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    footy completions bash > ~/.local/share/bash-completion/completions/footy\n    \
    footy completions zsh > ~/.zfunc/_footy\n    \
    footy completions fish > ~/.config/fish/completions/footy.fish")]
pub struct Args {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    #[arg(value_enum)]
    #[arg(
        long_help = "The shell to generate completions for. Supported shells:\n  \
        - bash\n  \
        - zsh\n  \
        - fish\n  \
        - powershell\n  \
        - elvish"
    )]
    pub shell: Shell,
}

/// Generates completions using a provided clap Command.
///
/// This should be called from main.rs which has access to the Cli struct.
pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    generate(shell, cmd, "footy", &mut io::stdout());
}
