use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for seqstats-io operations.
#[derive(Error, Debug)]
pub enum SampleLoadError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The given path does not exist.
    #[error("File does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// The given path exists but is a directory, socket or similar.
    #[error("Path is not a regular file: {}", .0.display())]
    PathNotRegularFile(PathBuf),

    /// A line could not be parsed as an integer.
    #[error("Invalid data: Non-integer value found on line {line} - {content}")]
    NonIntegerLine { line: usize, content: String },

    /// A line holds an integer that does not fit into an `i32`.
    #[error("Invalid data: Value out of range on line {line} - {content}")]
    OutOfRangeValue { line: usize, content: String },

    /// The input held no samples at all.
    #[error("Data file is empty!")]
    EmptyData,
}

/// Result type alias for seqstats-io operations.
pub type Result<T> = std::result::Result<T, SampleLoadError>;
