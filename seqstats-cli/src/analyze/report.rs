use std::io::Write;
use std::str::FromStr;

use anyhow::{Context, Result};

use seqstats_core::SampleStatistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow::anyhow!("Invalid output format: {}", s)),
        }
    }
}

fn join_run(run: &[i32]) -> String {
    run.iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

///
/// Render a [SampleStatistics] summary as human readable text.
///
/// Floats use the shortest representation that round-trips, so no precision
/// is lost.
///
pub fn write_text<W: Write>(stats: &SampleStatistics, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "Max: {}", stats.max)?;
    writeln!(writer, "Min: {}", stats.min)?;
    writeln!(writer, "Median: {}", stats.median)?;
    writeln!(writer, "Average: {}", stats.average)?;
    writeln!(writer, "Ascending sequence: {}", join_run(&stats.ascending_run))?;
    writeln!(writer, "Descending sequence: {}", join_run(&stats.descending_run))?;
    Ok(())
}

pub fn write_json<W: Write>(stats: &SampleStatistics, writer: &mut W) -> Result<()> {
    let json =
        serde_json::to_string_pretty(stats).context("Failed to serialize output to JSON")?;
    writer.write_all(json.as_bytes())?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_report<W: Write>(
    stats: &SampleStatistics,
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(stats, writer)?,
        OutputFormat::Json => write_json(stats, writer)?,
    }
    Ok(())
}
