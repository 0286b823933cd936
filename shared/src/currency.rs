//! Vietnamese đồng formatting and grouped numeric input parsing.

/// Result of cleaning user-typed amount input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedInput {
    /// The digits the user actually entered, without separators.
    pub digits: String,
    /// The digits regrouped for display (no currency suffix).
    pub display: String,
}

/// Groups a digit string into thousands with `.` separators, vi-VN style.
/// Leading zeros are dropped the way a numeric parse would drop them.
pub fn group_digits(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let normalized = if trimmed.is_empty() && !digits.is_empty() {
        "0"
    } else {
        trimmed
    };
    let bytes = normalized.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    out
}

/// Formats an amount as integer-rounded VND, e.g. `1.234.568 ₫`.
pub fn format(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let grouped = group_digits(&rounded.unsigned_abs().to_string());
    if rounded < 0 {
        format!("-{} ₫", grouped)
    } else {
        format!("{} ₫", grouped)
    }
}

/// Strips everything except digits from user input and returns both the
/// cleaned digit string and its grouped display form. Empty input maps to
/// empty/empty. Idempotent: parsing a produced display string reproduces it.
pub fn parse_grouped_input(raw: &str) -> GroupedInput {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return GroupedInput {
            digits,
            display: String::new(),
        };
    }
    let display = group_digits(&digits);
    let digits = display.chars().filter(|c| c.is_ascii_digit()).collect();
    GroupedInput { digits, display }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(group_digits("0"), "0");
        assert_eq!(group_digits("999"), "999");
        assert_eq!(group_digits("1000"), "1.000");
        assert_eq!(group_digits("1234567"), "1.234.567");
    }

    #[test]
    fn format_rounds_to_whole_dong() {
        assert_eq!(format(0.0), "0 ₫");
        assert_eq!(format(1_234_567.89), "1.234.568 ₫");
        assert_eq!(format(-50_000.0), "-50.000 ₫");
    }

    #[test]
    fn parse_strips_non_digits() {
        let parsed = parse_grouped_input("1.200.000đ");
        assert_eq!(parsed.digits, "1200000");
        assert_eq!(parsed.display, "1.200.000");
    }

    #[test]
    fn parse_of_empty_input_is_empty() {
        let parsed = parse_grouped_input("");
        assert_eq!(parsed.digits, "");
        assert_eq!(parsed.display, "");

        let parsed = parse_grouped_input("abc");
        assert_eq!(parsed.digits, "");
        assert_eq!(parsed.display, "");
    }

    #[test]
    fn parse_is_idempotent_on_its_own_display() {
        for raw in ["7", "007", "1000", "123456789", "25.000"] {
            let once = parse_grouped_input(raw);
            let twice = parse_grouped_input(&once.display);
            assert_eq!(once, twice, "not a fixpoint for {raw:?}");
        }
    }

    #[test]
    fn format_and_parse_agree_on_grouping() {
        for n in [0u64, 5, 999, 1_000, 54_321, 1_000_000, 987_654_321] {
            let formatted = format(n as f64);
            let parsed = parse_grouped_input(&n.to_string());
            assert_eq!(formatted, format!("{} ₫", parsed.display));
        }
    }
}
