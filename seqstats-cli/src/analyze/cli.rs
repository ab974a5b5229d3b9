use clap::{Arg, Command, arg};

pub const ANALYZE_CMD: &str = "analyze";
pub const DEFAULT_FORMAT: &str = "text";

pub fn create_analyze_cli() -> Command {
    Command::new(ANALYZE_CMD)
        .about("Compute min, max, mean, median and the longest monotonic runs of an integer file.")
        .arg(
            Arg::new("file")
                .required(true)
                .help("Path to a file with one integer per line (plain or .gz)"),
        )
        .arg(
            arg!(--format <FORMAT>)
                .required(false)
                .value_parser(["text", "json"])
                .default_value(DEFAULT_FORMAT)
                .help("Output format"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output path (default: stdout)"),
        )
}
