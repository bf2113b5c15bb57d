use std::io;
use clap::Parser;
use tracing::Level;
use book_catalog::catalog::controller::CatalogController;
use book_catalog::core::controller::{AppState, Console, OutputFormat};
use book_catalog::core::domain::Configuration;
use book_catalog::core::library::LibraryResult;
use book_catalog::utils::logs::setup_tracing;

/// Interactive book catalog.
#[derive(Debug, Parser)]
#[command(name = "catalog", version, about)]
struct Args {
    /// Start with an empty catalog instead of the sample books
    #[arg(long)]
    no_seed: bool,

    /// Output format for listings and lookups
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level written to stderr
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,

    /// Branch name attached to log records
    #[arg(long, default_value = "main")]
    branch: String,
}

fn main() -> LibraryResult<()> {
    let args = Args::parse();
    setup_tracing(args.log_level);

    let mut config = Configuration::new(args.branch.as_str());
    if args.no_seed {
        config = config.without_seed();
    }
    let state = AppState::new(config, args.format);

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    CatalogController::new(&state, console).run()
}
