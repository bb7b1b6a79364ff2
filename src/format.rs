// Output line formatting

use chrono::{DateTime, Utc};

/// Timestamp layout: UTC, microsecond precision, month and day unpadded,
/// time-of-day zero-padded. Downstream log scrapers match this exactly.
const TIMESTAMP_FORMAT: &str = "%Y-%-m-%-d %H:%M:%S%.6f";

pub(crate) fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Assemble a complete output line.
///
/// Default group: `<timestamp> <text>\n`
/// Named group:   `<timestamp> [<name>] <text>\n`
pub(crate) fn format_line(group_name: &str, timestamp: DateTime<Utc>, text: &str) -> String {
    let ts = format_timestamp(timestamp);
    if group_name.is_empty() {
        format!("{} {}\n", ts, text)
    } else {
        format!("{} [{}] {}\n", ts, group_name, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 3).unwrap()
            + chrono::Duration::microseconds(123_456)
    }

    #[test]
    fn test_timestamp_layout() {
        // Single-digit month and day stay unpadded; time-of-day is padded
        assert_eq!(format_timestamp(fixed_timestamp()), "2024-3-7 09:05:03.123456");
    }

    #[test]
    fn test_timestamp_fraction_is_six_digits() {
        let t = Utc.with_ymd_and_hms(2024, 11, 23, 14, 30, 59).unwrap()
            + chrono::Duration::microseconds(42);
        assert_eq!(format_timestamp(t), "2024-11-23 14:30:59.000042");
    }

    #[test]
    fn test_default_group_line() {
        let line = format_line("", fixed_timestamp(), "hello");
        assert_eq!(line, "2024-3-7 09:05:03.123456 hello\n");
    }

    #[test]
    fn test_named_group_line() {
        let line = format_line("audit", fixed_timestamp(), "login ok");
        assert_eq!(line, "2024-3-7 09:05:03.123456 [audit] login ok\n");
    }
}
