//! Where the short code of the displayed link comes from.

use crate::error::LoadError;

/// Provides the short-link code the dashboard is showing.
///
/// Read on every fetch and never cached, so a page that swaps its code
/// between refreshes is picked up immediately.
#[cfg_attr(test, mockall::automock)]
pub trait ShortCodeSource: Send + Sync {
    /// Returns the current code, trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ShortCode`] when no non-empty code is available.
    fn read_code(&self) -> Result<String, LoadError>;
}
