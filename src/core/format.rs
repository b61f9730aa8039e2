//! Korean display formatting for durations, counts and prices
//!
//! These strings are shown verbatim on result cards and in share text, so the
//! branching here is a display contract.

/// 만 (ten thousand)
const MAN: u64 = 10_000;

/// 억 (one hundred million)
const EOK: u64 = 100_000_000;

/// Group digits in threes with commas, as the ko-KR locale does (`1234567` -> `1,234,567`).
#[must_use]
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Divide and round half up to a whole number.
const fn div_round(value: u64, divisor: u64) -> u64 {
    value / divisor + (value % divisor >= divisor.div_ceil(2)) as u64
}

/// Render a number of months as years and months.
///
/// - `0..12` months: `"{m}개월"`
/// - whole years: `"{y}년"`
/// - otherwise: `"{y}년 {m}개월"`
///
/// Years are digit-grouped, so 12,000 months is `"1,000년"`.
#[must_use]
pub fn format_duration(months: u64) -> String {
    let years = months / 12;
    let remainder = months % 12;
    if years == 0 {
        format!("{remainder}개월")
    } else if remainder == 0 {
        format!("{}년", group_digits(years))
    } else {
        format!("{}년 {remainder}개월", group_digits(years))
    }
}

/// Abbreviate a count with 억 / 만 units.
///
/// - `>= 100,000,000`: one decimal of 억 (`"1.0억"`)
/// - `>= 10,000`: whole 만, truncated (`12,345` -> `"1만"`)
/// - otherwise: digit-grouped (`"999"`)
#[must_use]
pub fn format_magnitude(count: u64) -> String {
    if count >= EOK {
        let tenths = div_round(count, EOK / 10);
        format!("{}.{}억", tenths / 10, tenths % 10)
    } else if count >= MAN {
        format!("{}만", group_digits(count / MAN))
    } else {
        group_digits(count)
    }
}

/// Price in whole 억, rounded (`3,000,000,000` -> `"30억"`).
#[must_use]
pub fn price_label(price: u64) -> String {
    format!("{}억", div_round(price, EOK))
}

/// Hint shown next to the savings rate.
#[must_use]
pub const fn savings_rate_hint(rate: u32) -> Option<&'static str> {
    if rate == 100 {
        Some("(풀 저축 😤)")
    } else if rate <= 30 {
        Some("(현실적 👍)")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(1_234_567), "1,234,567");
        assert_eq!(group_digits(100_000), "100,000");
    }

    #[test]
    fn test_format_duration_branches() {
        assert_eq!(format_duration(0), "0개월");
        assert_eq!(format_duration(6), "6개월");
        assert_eq!(format_duration(11), "11개월");
        assert_eq!(format_duration(12), "1년");
        assert_eq!(format_duration(14), "1년 2개월");
        assert_eq!(format_duration(1000), "83년 4개월");
        assert_eq!(format_duration(320), "26년 8개월");
    }

    #[test]
    fn test_format_duration_groups_years() {
        assert_eq!(format_duration(12_000), "1,000년");
        assert_eq!(format_duration(3_000_000), "250,000년");
    }

    #[test]
    fn test_format_magnitude_buckets() {
        assert_eq!(format_magnitude(999), "999");
        assert_eq!(format_magnitude(9_999), "9,999");
        assert_eq!(format_magnitude(10_000), "1만");
        assert_eq!(format_magnitude(12_345), "1만");
        assert_eq!(format_magnitude(177_777), "17만");
        assert_eq!(format_magnitude(99_999_999), "9,999만");
        assert_eq!(format_magnitude(100_000_000), "1.0억");
        assert_eq!(format_magnitude(125_000_000), "1.3억");
        assert_eq!(format_magnitude(1_234_000_000), "12.3억");
    }

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(3_000_000_000), "30억");
        assert_eq!(price_label(800_000_000), "8억");
        assert_eq!(price_label(150_000_000), "2억");
    }

    #[test]
    fn test_savings_rate_hint() {
        assert_eq!(savings_rate_hint(100), Some("(풀 저축 😤)"));
        assert_eq!(savings_rate_hint(30), Some("(현실적 👍)"));
        assert_eq!(savings_rate_hint(10), Some("(현실적 👍)"));
        assert_eq!(savings_rate_hint(50), None);
    }
}
