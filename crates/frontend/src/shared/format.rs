//! Money formatting in Indian digit grouping.

use contracts::domain::common::round2;

/// `123456.5` -> `"1,23,456.50"`
pub fn format_amount(value: f64) -> String {
    let value = round2(value);
    let negative = value < 0.0;
    let paise = (value.abs() * 100.0).round() as u64;
    let grouped = group_indian(paise / 100);
    let sign = if negative { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, paise % 100)
}

/// `123456.5` -> `"₹1,23,456.50"`
pub fn format_currency(value: f64) -> String {
    let amount = format_amount(value);
    match amount.strip_prefix('-') {
        Some(rest) => format!("-₹{}", rest),
        None => format!("₹{}", amount),
    }
}

/// Last three digits, then groups of two: 12345678 -> 1,23,45,678.
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_in_lakhs_and_crores() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.0), "999.00");
        assert_eq!(format_amount(1000.0), "1,000.00");
        assert_eq!(format_amount(123456.5), "1,23,456.50");
        assert_eq!(format_amount(12345678.9), "1,23,45,678.90");
    }

    #[test]
    fn currency_keeps_sign_before_symbol() {
        assert_eq!(format_currency(1790.5), "₹1,790.50");
        assert_eq!(format_currency(-250.0), "-₹250.00");
    }

    #[test]
    fn rounds_to_paise() {
        assert_eq!(format_amount(83.3349), "83.33");
        assert_eq!(format_amount(0.005 + 0.0001), "0.01");
    }
}
