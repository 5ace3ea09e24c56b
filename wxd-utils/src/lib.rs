//! Shared utility functions for WXD crates.

/// Decimal rounding and fixed-precision display
pub mod numbers {
    /// Round `value` to `places` decimal places. Ties go away from zero, so
    /// `2.25` becomes `2.3` and `-2.25` becomes `-2.3`.
    ///
    /// Binary representation noise is removed before the tie check so that
    /// values like `1.005` round the way they read.
    pub fn round_half_up(value: f64, places: u32) -> f64 {
        if !value.is_finite() {
            return value;
        }
        let factor = 10f64.powi(places as i32);
        let scaled = value.abs() * factor;
        let cleaned = (scaled * 1e9).round() / 1e9;
        let rounded = ((cleaned + 0.5).floor() / factor).copysign(value);
        // Avoid printing "-0.0"
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }

    /// Format `value` with exactly `places` decimals after half-up rounding.
    pub fn format_fixed(value: f64, places: u32) -> String {
        format!("{:.*}", places as usize, round_half_up(value, places))
    }

}

/// Timestamp utility functions
pub mod dates {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use chrono_tz::Tz;

    /// Formats the API is known to emit for reading timestamps.
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

    /// Display format for "as of" timestamps, e.g. "Aug 18, 2025 10:32 AM"
    pub const DISPLAY_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

    /// Zone "as of" times are shown in unless configured otherwise.
    pub const DEFAULT_DISPLAY_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

    /// Parse a reading timestamp as wall-clock time in `tz`.
    ///
    /// RFC 3339 values carry an offset and are converted into `tz`. Values
    /// without an offset are already local to the stations and are taken
    /// as-is. Bare dates are taken as midnight.
    pub fn parse_timestamp(s: &str, tz: Tz) -> anyhow::Result<NaiveDateTime> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&tz).naive_local());
        }
        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(dt);
            }
        }
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")?;
        date.and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("invalid midnight for {}", date))
    }

    /// Human-readable form of a reading timestamp in `tz`, or the raw string
    /// when it cannot be parsed.
    pub fn format_as_of(s: &str, tz: Tz) -> String {
        match parse_timestamp(s, tz) {
            Ok(dt) => dt.format(DISPLAY_FORMAT).to_string(),
            Err(_) => s.to_string(),
        }
    }

}
