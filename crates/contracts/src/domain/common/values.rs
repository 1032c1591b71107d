use chrono::NaiveDate;

/// Rounds money to paise.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `YYYY-MM-DD` part of a date or ISO timestamp.
pub fn date_part(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

/// Parses `YYYY-MM-DD`, accepting full ISO timestamps as well.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_part(value.trim()), "%Y-%m-%d").ok()
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// Quantity without trailing zeros: `10` rather than `10.00`, `2.5` rather than `2.50`.
pub fn format_quantity(value: f64) -> String {
    let s = format!("{:.2}", round2(value));
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(83.3325), 83.33);
        assert_eq!(round2(0.125 + 0.0001), 0.13);
    }

    #[test]
    fn parses_plain_dates_and_timestamps() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(parse_date("2025-03-01"), Some(d));
        assert_eq!(parse_date("2025-03-01T00:00:00.000Z"), Some(d));
        assert_eq!(parse_date("01/03/2025"), None);
    }

    #[test]
    fn quantity_drops_trailing_zeros() {
        assert_eq!(format_quantity(10.0), "10");
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(0.0), "0");
        assert_eq!(format_quantity(1.256), "1.26");
    }
}
