//! [`ShortCodeSource`] implementations.

use std::path::PathBuf;

use crate::domain::repositories::ShortCodeSource;
use crate::error::LoadError;

fn non_empty(raw: &str) -> Result<String, LoadError> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(LoadError::short_code("short code is empty"));
    }
    Ok(code.to_string())
}

/// A short code that never changes.
#[derive(Debug, Clone)]
pub struct FixedShortCode(String);

impl FixedShortCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl ShortCodeSource for FixedShortCode {
    fn read_code(&self) -> Result<String, LoadError> {
        non_empty(&self.0)
    }
}

/// Reads the short code from a file's text content at every fetch.
#[derive(Debug, Clone)]
pub struct FileShortCode {
    path: PathBuf,
}

impl FileShortCode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ShortCodeSource for FileShortCode {
    fn read_code(&self) -> Result<String, LoadError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            LoadError::short_code(format!("failed to read {}: {e}", self.path.display()))
        })?;
        non_empty(&content)
    }
}
