//! Shared formatting helpers.
//!
//! - [`peak_hour`] - 12-hour clock label for the peak-hour widget

pub mod peak_hour;
