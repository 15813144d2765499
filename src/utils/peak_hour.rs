//! Peak-hour display formatting.

/// Formats an hour of day (0-23) on a 12-hour clock.
///
/// No timezone conversion is applied; the hour is assumed to already be in
/// the display timezone. `None` and out-of-range hours render as `"N/A"`.
///
/// # Examples
///
/// ```
/// use shortlink_dashboard::utils::peak_hour::format_peak_hour;
///
/// assert_eq!(format_peak_hour(Some(0)), "12:00 AM");
/// assert_eq!(format_peak_hour(Some(13)), "1:00 PM");
/// assert_eq!(format_peak_hour(None), "N/A");
/// ```
pub fn format_peak_hour(hour: Option<u8>) -> String {
    match hour {
        Some(h @ 0..=23) => {
            let suffix = if h < 12 { "AM" } else { "PM" };
            let display = match h % 12 {
                0 => 12,
                other => other,
            };
            format!("{display}:00 {suffix}")
        }
        _ => "N/A".to_string(),
    }
}
