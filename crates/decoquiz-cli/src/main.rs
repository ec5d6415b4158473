//! decoquiz CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod console;

#[derive(Parser)]
#[command(
    name = "decoquiz",
    version,
    about = "Interactive quiz on decorators and OOP annotations"
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the quiz
    Run {
        /// Built-in bank locale (e.g. "en", "tr")
        #[arg(long)]
        locale: Option<String>,

        /// Path to a custom .toml question bank
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Do not wait for Enter between questions
        #[arg(long)]
        no_pause: bool,

        /// Exit after one session instead of offering a retry
        #[arg(long)]
        no_retry: bool,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to a bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// List built-in question banks
    List,

    /// Create starter config and example question bank
    Init,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout belongs to the quiz.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in [
        format!("decoquiz={default_level}"),
        format!("decoquiz_core={default_level}"),
    ] {
        if let Ok(d) = directive.parse() {
            filter = filter.add_directive(d);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Run {
            locale,
            bank,
            config,
            no_pause,
            no_retry,
        } => commands::run::execute(locale, bank, config, no_pause, no_retry).await,
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::List => commands::list::execute(),
        Commands::Init => commands::init::execute(),
    };

    // Exit explicitly: a read interrupted by Ctrl-C leaves a blocking stdin
    // thread behind that would otherwise hold up runtime shutdown.
    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
