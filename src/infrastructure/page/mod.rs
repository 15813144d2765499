//! Short-code sources standing in for the dashboard page's code element.
//!
//! - [`FixedShortCode`] - a code known up front (e.g. a CLI argument)
//! - [`FileShortCode`] - a file whose text content is re-read on every fetch

mod short_code;

pub use short_code::{FileShortCode, FixedShortCode};
