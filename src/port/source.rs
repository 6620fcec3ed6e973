use std::path::Path;

use crate::domain::error::WordFreqError;

/// Line-oriented text input used by the pipeline for both the corpus and the stop words
pub trait LineSource: Send + Sync {
    /// Read every line of the file at `path`
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, WordFreqError>;

    /// Fail if `path` cannot be read, without loading it
    fn validate(&self, path: &Path) -> Result<(), WordFreqError>;
}
