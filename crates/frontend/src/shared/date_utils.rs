/// Utilities for date and time formatting
///
/// Dates come from the API as `YYYY-MM-DD` or full ISO timestamps.
use chrono::{Datelike, Local, NaiveDate};

/// Format ISO datetime string to DD/MM/YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let date = format_date(date_part);
        if date != date_part {
            let time: String = time_part.chars().take(5).collect();
            return format!("{} {}", date, time);
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// "01/03/2025 - 31/03/2025"
pub fn format_period(start: &str, end: &str) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today as `YYYY-MM-DD`, the value format of `<input type="date">`.
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

pub fn current_month_year() -> (u32, i32) {
    let now = today();
    (now.month(), now.year())
}

/// Years offered by month/year pickers: two back, one ahead.
pub fn year_options(around: i32) -> Vec<i32> {
    (around - 2..=around + 1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15/03/2024 14:02"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_period("2025-03-01", "2025-03-31"), "01/03/2025 - 31/03/2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn year_options_surround_current_year() {
        assert_eq!(year_options(2025), vec![2023, 2024, 2025, 2026]);
    }
}
