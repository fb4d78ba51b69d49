//! Wordle Guard - CLI
//!
//! Watches the guess you are typing and warns the moment it conflicts
//! with what the board has already revealed.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordle_guard::{
    commands::{run_check, run_show},
    interactive::{App, run_watch},
    output::{print_check_result, print_show_result},
    state::FileStore,
};

#[derive(Parser)]
#[command(
    name = "wordle_guard",
    about = "Live Wordle guess validation against revealed board judgements",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the storage export holding the board state
    #[arg(short = 's', long, global = true, default_value = "wordle-state.json")]
    state: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive watch mode (default - live warnings as you type)
    Watch,

    /// Validate one attempt against the stored board
    Check {
        /// The in-progress guess to validate (up to 5 letters)
        attempt: String,
    },

    /// Print the stored board as parsed
    Show,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "wordle_guard=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = FileStore::new(&cli.state);

    // Default to watch mode if no command given
    let command = cli.command.unwrap_or(Commands::Watch);

    match command {
        Commands::Watch => {
            // No subscriber in watch mode: log lines would tear the
            // alternate screen
            run_watch(App::new(store))
        }
        Commands::Check { attempt } => {
            init_tracing(cli.verbose);
            let result = run_check(store, &attempt);
            print_check_result(&result);
            Ok(())
        }
        Commands::Show => {
            init_tracing(cli.verbose);
            let result = run_show(&store);
            print_show_result(&result);
            Ok(())
        }
    }
}
