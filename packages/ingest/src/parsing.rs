//! Field parsing helpers for imported incident rows.

use chrono::{NaiveDate, NaiveTime};

/// Parses a calendar date. Accepts `YYYY-MM-DD`, `DD/MM/YYYY`, and
/// `DD-MM-YYYY`.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Parses a time of day in `HH:MM:SS` or `HH:MM` form.
#[must_use]
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

/// Parses a boolean flag. Empty input reads as `false`.
#[must_use]
pub fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Some(false),
        "true" | "yes" | "y" | "1" => Some(true),
        _ => None,
    }
}

/// Parses a finite decimal-degree coordinate.
#[must_use]
pub fn parse_coordinate(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_date("2024-03-15"), Some(expected));
        assert_eq!(parse_date("15/03/2024"), Some(expected));
        assert_eq!(parse_date(" 15-03-2024 "), Some(expected));
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn parses_times_with_and_without_seconds() {
        assert_eq!(parse_time("14:30"), NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(parse_time("07:05:09"), NaiveTime::from_hms_opt(7, 5, 9));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("noon"), None);
    }

    #[test]
    fn parses_flags() {
        assert_eq!(parse_flag("Yes"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("FALSE"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        assert_eq!(parse_coordinate("28.5355"), Some(28.5355));
        assert_eq!(parse_coordinate("NaN"), None);
        assert_eq!(parse_coordinate("inf"), None);
        assert_eq!(parse_coordinate(""), None);
    }
}
