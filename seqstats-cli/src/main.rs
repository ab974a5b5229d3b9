mod analyze;

use anyhow::Result;
use clap::{Command, arg};
use tracing_subscriber::EnvFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "seqstats";
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    pub const VERBOSE_LOG_LEVEL: &str = "debug";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Descriptive statistics for files of integers: extrema, mean, median and longest monotonic runs.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose)
                .global(true)
                .help("Log progress to stderr (RUST_LOG takes precedence)")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(analyze::cli::create_analyze_cli())
}

fn init_logging(verbose: bool) {
    let default_level = match verbose {
        true => consts::VERBOSE_LOG_LEVEL,
        false => consts::DEFAULT_LOG_LEVEL,
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        //
        // ANALYZE
        //
        Some((analyze::cli::ANALYZE_CMD, matches)) => {
            analyze::handlers::run_analyze(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
