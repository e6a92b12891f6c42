use clap::Parser;
use bufring::cli::commands::Cli;
use bufring::cli::handlers;

fn main() {
    let cli = Cli::parse();
    // The TUI owns the terminal, so its logs go nowhere unless asked for.
    let tui = cli.command.is_none();
    bufring::logging::init(tui);

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
