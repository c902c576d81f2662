//! Display formatting for fixture values. Amounts are Korean won, stored
//! as integer won and rendered with thousands separators.

use chrono::NaiveDate;

/// Formats an amount in won, e.g. `krw(45_000)` -> `"₩45,000"`.
pub(crate) fn krw(amount: u64) -> String {
    format!("₩{}", group_thousands(amount))
}

/// Short human date used in tables, e.g. "Mar 14, 2025".
pub(crate) fn short_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{krw, short_date};
    use chrono::NaiveDate;

    #[test]
    fn krw_groups_thousands() {
        assert_eq!(krw(0), "₩0");
        assert_eq!(krw(950), "₩950");
        assert_eq!(krw(45_000), "₩45,000");
        assert_eq!(krw(12_400_000), "₩12,400,000");
    }

    #[test]
    fn short_date_is_compact() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(short_date(date), "Mar 14, 2025");
    }
}
