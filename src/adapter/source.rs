//! Line source implementations
//!
//! - FileLineSource: reads from the local file system, replacing invalid UTF-8
//! - InMemoryLineSource: fixed contents keyed by path, for tests and embedding

use std::{
    collections::HashMap,
    fs::{self, File},
    path::{Path, PathBuf}
};

use crate::{domain::error::WordFreqError, port::source::LineSource};

/// Reads files from disk
#[derive(Debug, Default, Clone, Copy)]
pub struct FileLineSource;

impl FileLineSource {
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for FileLineSource {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, WordFreqError> {
        let bytes = fs::read(path)
            .map_err(|e| WordFreqError::FileSystem(format!("Failed to read {}: {}", path.display(), e)))?;
        Ok(String::from_utf8_lossy(&bytes).lines().map(str::to_string).collect())
    }

    fn validate(&self, path: &Path) -> Result<(), WordFreqError> {
        if path.is_dir() {
            return Err(WordFreqError::FileSystem(format!("{} is a directory", path.display())));
        }
        File::open(path)
            .map(|_| ())
            .map_err(|e| WordFreqError::FileSystem(format!("Failed to open {}: {}", path.display(), e)))
    }
}

/// Serves fixed line lists keyed by path
#[derive(Debug, Default, Clone)]
pub struct InMemoryLineSource {
    files: HashMap<PathBuf, Vec<String>>
}

impl InMemoryLineSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `lines` as the content of `path`
    pub fn with_file<I, S>(mut self, path: impl Into<PathBuf>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.files.insert(path.into(), lines.into_iter().map(Into::into).collect());
        self
    }
}

impl LineSource for InMemoryLineSource {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, WordFreqError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| WordFreqError::FileSystem(format!("No such file: {}", path.display())))
    }

    fn validate(&self, path: &Path) -> Result<(), WordFreqError> {
        self.read_lines(path).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{NamedTempFile, tempdir};

    use super::*;

    #[test]
    fn test_file_source_reads_lines_without_terminators() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "first line\r\nsecond line\nthird").unwrap();

        let lines = FileLineSource::new().read_lines(file.path()).unwrap();

        assert_eq!(lines, vec!["first line", "second line", "third"]);
    }

    #[test]
    fn test_file_source_replaces_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"caf\xe9 au lait\nna\xefve\n").unwrap();

        let lines = FileLineSource::new().read_lines(file.path()).unwrap();

        assert_eq!(lines, vec!["caf\u{fffd} au lait", "na\u{fffd}ve"]);
    }

    #[test]
    fn test_file_source_empty_file_has_no_lines() {
        let file = NamedTempFile::new().unwrap();

        assert!(FileLineSource::new().read_lines(file.path()).unwrap().is_empty());
        assert!(FileLineSource::new().validate(file.path()).is_ok());
    }

    #[test]
    fn test_file_source_rejects_missing_file_and_directories() {
        let dir = tempdir().unwrap();
        let source = FileLineSource::new();

        let missing = source.validate(&dir.path().join("missing.txt"));
        assert!(matches!(missing, Err(WordFreqError::FileSystem(_))));

        let directory = source.validate(dir.path());
        assert!(matches!(directory, Err(WordFreqError::FileSystem(_))));
    }

    #[test]
    fn test_in_memory_source_serves_registered_files() {
        let source = InMemoryLineSource::new().with_file("input.txt", ["one", "two"]);

        assert_eq!(source.read_lines(Path::new("input.txt")).unwrap(), vec!["one", "two"]);
        assert!(source.validate(Path::new("other.txt")).is_err());
    }
}
