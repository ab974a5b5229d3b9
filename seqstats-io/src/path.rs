use std::path::Path;

use crate::error::{Result, SampleLoadError};

///
/// Make sure `path` points at an existing regular file.
///
/// # Arguments
/// - path: the path to check
///
pub fn validate_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SampleLoadError::PathNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(SampleLoadError::PathNotRegularFile(path.to_path_buf()));
    }

    Ok(())
}
