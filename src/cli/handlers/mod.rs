mod replay;
pub use replay::{ReplayError, cmd_replay, parse_script, replay};

use crate::cli::commands::Commands;

/// Run a subcommand (the TUI, with no subcommand, is started from main.rs)
pub fn dispatch(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Replay(args) => cmd_replay(args),
    }
}
