use std::io::BufRead;
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, SampleLoadError};
use crate::path::validate_path;
use crate::reader::get_dynamic_reader;

///
/// Parse a single line holding one integer.
///
/// Surrounding whitespace is ignored. `line` is the 1-based line number used
/// in error messages.
///
pub fn parse_sample_line(line: usize, content: &str) -> Result<i32> {
    content.trim().parse::<i32>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => SampleLoadError::OutOfRangeValue {
            line,
            content: content.to_string(),
        },
        _ => SampleLoadError::NonIntegerLine {
            line,
            content: content.to_string(),
        },
    })
}

///
/// Read one integer per line until the reader is exhausted.
///
/// Fails on the first malformed line. An input without any line fails with
/// [`SampleLoadError::EmptyData`].
///
pub fn read_samples<R: BufRead>(reader: R) -> Result<Vec<i32>> {
    let mut samples = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        samples.push(parse_sample_line(idx + 1, &line)?);
    }

    if samples.is_empty() {
        return Err(SampleLoadError::EmptyData);
    }

    debug!("Parsed {} samples", samples.len());
    Ok(samples)
}

/// A loaded sample sequence together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSet {
    pub samples: Vec<i32>,
    pub path: Option<PathBuf>,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.samples
    }
}

impl AsRef<[i32]> for SampleSet {
    fn as_ref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl TryFrom<&Path> for SampleSet {
    type Error = SampleLoadError;

    ///
    /// Load a [SampleSet] from a text file with one integer per line.
    ///
    /// # Arguments:
    /// - value: path to the file on disk, optionally gzip'd.
    fn try_from(value: &Path) -> Result<Self> {
        validate_path(value)?;

        let reader = get_dynamic_reader(value)?;
        let samples = read_samples(reader)?;

        info!("Loaded {} samples from {}", samples.len(), value.display());

        Ok(SampleSet {
            samples,
            path: Some(value.to_owned()),
        })
    }
}

impl TryFrom<&str> for SampleSet {
    type Error = SampleLoadError;

    fn try_from(value: &str) -> Result<Self> {
        SampleSet::try_from(Path::new(value))
    }
}

impl TryFrom<String> for SampleSet {
    type Error = SampleLoadError;

    fn try_from(value: String) -> Result<Self> {
        SampleSet::try_from(Path::new(&value))
    }
}

impl TryFrom<PathBuf> for SampleSet {
    type Error = SampleLoadError;

    fn try_from(value: PathBuf) -> Result<Self> {
        SampleSet::try_from(value.as_path())
    }
}

impl From<Vec<i32>> for SampleSet {
    fn from(samples: Vec<i32>) -> Self {
        SampleSet {
            samples,
            path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;
    use std::io::{Cursor, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/samples")
            .join(file_name)
    }

    #[rstest]
    #[case("42", 42)]
    #[case("  -17  ", -17)]
    #[case("+8", 8)]
    #[case("2147483647", i32::MAX)]
    #[case("-2147483648", i32::MIN)]
    #[case("5\r", 5)]
    fn test_parse_valid_line(#[case] content: &str, #[case] expected: i32) {
        assert_eq!(parse_sample_line(1, content).unwrap(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("12abc")]
    #[case("1.5")]
    fn test_parse_non_integer_line(#[case] content: &str) {
        let err = parse_sample_line(3, content).unwrap_err();
        assert!(matches!(err, SampleLoadError::NonIntegerLine { line: 3, .. }));
    }

    #[rstest]
    #[case("2147483648")]
    #[case("-2147483649")]
    #[case("99999999999999999999")]
    fn test_parse_out_of_range_line(#[case] content: &str) {
        let err = parse_sample_line(7, content).unwrap_err();
        assert!(matches!(err, SampleLoadError::OutOfRangeValue { line: 7, .. }));
        assert!(err.to_string().contains(content));
    }

    #[rstest]
    fn test_read_samples_from_memory() {
        let reader = Cursor::new("3\n-1\n4\n");
        assert_eq!(read_samples(reader).unwrap(), vec![3, -1, 4]);
    }

    #[rstest]
    fn test_read_samples_reports_line_number() {
        let reader = Cursor::new("1\n2\nthree\n4\n");
        let err = read_samples(reader).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid data: Non-integer value found on line 3 - three"
        );
    }

    #[rstest]
    fn test_read_empty_input() {
        let err = read_samples(Cursor::new("")).unwrap_err();
        assert!(matches!(err, SampleLoadError::EmptyData));
    }

    #[rstest]
    fn test_load_sample_file() {
        let path = get_test_path("samples.txt");
        let set = SampleSet::try_from(path.as_path()).unwrap();

        assert_eq!(set.samples, vec![1, 2, 3, 2, 1, 4, 5, 6, 7, 8]);
        assert_eq!(set.path, Some(path));
    }

    #[rstest]
    fn test_load_from_str_and_string() {
        let path = get_test_path("samples.txt");
        let path_str = path.to_str().unwrap();

        let from_str = SampleSet::try_from(path_str).unwrap();
        let from_string = SampleSet::try_from(path_str.to_string()).unwrap();
        assert_eq!(from_str, from_string);
    }

    #[rstest]
    #[case("non_integer.txt")]
    #[case("out_of_range.txt")]
    #[case("empty.txt")]
    fn test_load_invalid_files(#[case] file_name: &str) {
        let path = get_test_path(file_name);
        assert!(SampleSet::try_from(path).is_err());
    }

    #[rstest]
    fn test_load_missing_file() {
        let path = get_test_path("does_not_exist.txt");
        let err = SampleSet::try_from(path).unwrap_err();
        assert!(matches!(err, SampleLoadError::PathNotFound(_)));
    }

    #[rstest]
    fn test_load_gzipped_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("samples.txt.gz");

        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        writeln!(encoder, "10\n-20\n30").unwrap();
        encoder.finish().unwrap();

        let set = SampleSet::try_from(path.as_path()).unwrap();
        assert_eq!(set.as_slice(), &[10, -20, 30]);
    }

    #[rstest]
    fn test_from_vec() {
        let set = SampleSet::from(vec![5, 6]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.path, None);
    }
}
