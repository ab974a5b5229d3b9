//! # Input utilities for seqstats.
//!
//! This small crate validates input paths and loads sample files from disk: plain
//! text or gzip'd, one integer per line.
//!
pub mod error;
pub mod path;
pub mod reader;
pub mod samples;

// re-expose core functions
pub use error::*;
pub use path::*;
pub use reader::*;
pub use samples::*;
