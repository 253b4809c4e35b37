use clap::Parser;
use todos::cli::commands::Cli;
use todos::cli::handlers;
use todos::io::logging;

fn main() {
    let cli = Cli::parse();
    logging::init_logging();

    let result = match cli.command {
        // No subcommand → launch TUI
        None => todos::tui::run(cli.config.as_deref()),
        Some(command) => handlers::dispatch(command),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
