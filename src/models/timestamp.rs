//! Timestamps are persisted as `YYYY-MM-DD HH:MM:SS` text in local time.
//! The format is fixed-width, so lexical order matches chronological order.

use chrono::{Local, NaiveDateTime};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn now_timestamp() -> String {
    format_timestamp(now_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_without_fractional_seconds() {
        let value = NaiveDate::from_ymd_opt(2025, 11, 2)
            .unwrap()
            .and_hms_milli_opt(9, 5, 7, 450)
            .unwrap();
        assert_eq!(format_timestamp(value), "2025-11-02 09:05:07");
    }

    #[test]
    fn parses_well_formed_values() {
        let parsed = parse_timestamp("2025-11-03 14:30:00").unwrap();
        assert_eq!(format_timestamp(parsed), "2025-11-03 14:30:00");
    }

    #[test]
    fn rejects_out_of_range_and_malformed_values() {
        assert!(parse_timestamp("2025-13-40 99:99:99").is_none());
        assert!(parse_timestamp("2025-11-03T14:30:00").is_none());
        assert!(parse_timestamp("2025-11-03 2:30 PM").is_none());
        assert!(parse_timestamp("2025-11-03").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn lexical_order_follows_time_order() {
        let earlier = format_timestamp(parse_timestamp("2025-09-30 23:59:59").unwrap());
        let later = format_timestamp(parse_timestamp("2025-10-01 00:00:00").unwrap());
        assert!(earlier < later);
    }
}
