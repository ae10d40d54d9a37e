//! Display formatting for prize money and fan counts.

/// Groups an integer's digits with commas (`12345` → `"12,345"`).
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats prize money given in man-en (ten-thousands of yen).
///
/// Amounts of 1億 (10,000 man-en) and above split into the oku quotient
/// and a grouped man-en remainder; the remainder clause is omitted when
/// it is exactly zero.
pub fn format_prize(amount: i64) -> String {
    if amount == 0 {
        return "0万円".to_string();
    }
    if amount < 10_000 {
        return format!("{}万円", group_thousands(amount));
    }
    let oku = amount / 10_000;
    let man = amount % 10_000;
    if man == 0 {
        format!("{oku}億円")
    } else {
        format!("{}億{}万円", oku, group_thousands(man))
    }
}

/// Formats a fan count with digit grouping and the 人 suffix.
pub fn format_fans(amount: i64) -> String {
    format!("{}人", group_thousands(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12345), "12,345");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-9999), "-9,999");
    }

    #[test]
    fn test_format_prize_under_one_oku() {
        assert_eq!(format_prize(0), "0万円");
        assert_eq!(format_prize(1), "1万円");
        assert_eq!(format_prize(9999), "9,999万円");
    }

    #[test]
    fn test_format_prize_oku_split() {
        assert_eq!(format_prize(10000), "1億円");
        assert_eq!(format_prize(12000), "1億2,000万円");
        assert_eq!(format_prize(20001), "2億1万円");
        assert_eq!(format_prize(123_456), "12億3,456万円");
    }

    #[test]
    fn test_format_fans() {
        assert_eq!(format_fans(0), "0人");
        assert_eq!(format_fans(12345), "12,345人");
    }
}
