use std::fs::{File, create_dir_all};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing::{debug, info};

use seqstats_core::{SampleStatistics, SequenceStatistics};
use seqstats_io::SampleSet;

use super::cli::DEFAULT_FORMAT;
use super::report::{OutputFormat, write_report};

///
/// Load a sample file and compute its summary statistics.
///
/// # Arguments
/// - path: path to a plain or gzip'd file with one integer per line
///
pub fn analyze_file(path: &Path) -> Result<SampleStatistics> {
    let set = SampleSet::try_from(path)
        .with_context(|| format!("Failed to load samples from {}", path.display()))?;

    debug!("Summarizing {} samples", set.len());

    let stats = set
        .as_slice()
        .summarize()
        .with_context(|| format!("Failed to analyze {}", path.display()))?;

    Ok(stats)
}

pub fn run_analyze(matches: &ArgMatches) -> Result<()> {
    let file = matches
        .get_one::<String>("file")
        .context("A sample file path is required")?;
    let format: OutputFormat = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or(DEFAULT_FORMAT)
        .parse()?;
    let output_path = matches.get_one::<String>("output");

    let stats = analyze_file(Path::new(file))?;

    match output_path {
        Some(p) => {
            let path = Path::new(p);
            if let Some(parent) = path.parent() {
                create_dir_all(parent)
                    .with_context(|| format!("Failed to create output directory for: {}", p))?;
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", p))?;
            let mut writer = BufWriter::new(file);
            write_report(&stats, format, &mut writer)?;
            writer.flush()?;
            info!("Output written to {}", p);
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_report(&stats, format, &mut writer)?;
        }
    }

    Ok(())
}
