use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todos", about = concat!("[x] todos v", env!("CARGO_PKG_VERSION"), " - a task list in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read UI settings from this file instead of ./todos.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply intents to the starting list and print the result
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// File with one intent per line (reads stdin when omitted)
    pub file: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
    /// Print only the items that pass the active filter
    #[arg(long)]
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["todos"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn replay_flags() {
        let cli = Cli::try_parse_from([
            "todos", "replay", "intents.txt", "--json", "--visible", "--config", "ui.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("ui.toml")));
        match cli.command {
            Some(Commands::Replay(args)) => {
                assert_eq!(args.file, Some(PathBuf::from("intents.txt")));
                assert!(args.json);
                assert!(args.visible);
            }
            None => panic!("expected replay"),
        }
    }
}
