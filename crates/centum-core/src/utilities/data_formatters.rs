//! Data formatting helpers used when rendering amounts.

/// Insert `separator` between every group of three digits, counting from the
/// right (e.g. `"1234567"` → `"1,234,567"`).
///
/// An empty separator returns the digits unchanged.  The input is expected to
/// be an unsigned run of ASCII digits; sign handling is left to the caller.
pub fn group_digits(digits: &str, separator: &str) -> String {
    if separator.is_empty() || digits.len() <= 3 {
        return digits.to_owned();
    }
    let head = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + separator.len() * (digits.len() / 3));
    if head > 0 {
        out.push_str(&digits[..head]);
    }
    for (i, chunk) in digits.as_bytes()[head..].chunks(3).enumerate() {
        if head > 0 || i > 0 {
            out.push_str(separator);
        }
        // Chunks of an ASCII digit string are valid UTF-8.
        out.push_str(std::str::from_utf8(chunk).unwrap_or_default());
    }
    out
}

/// Render `value` zero-padded to `width` digits (e.g. `(5, 2)` → `"05"`).
pub fn zero_pad(value: u64, width: usize) -> String {
    format!("{value:0width$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("0", ","), "0");
        assert_eq!(group_digits("999", ","), "999");
        assert_eq!(group_digits("1000", ","), "1,000");
        assert_eq!(group_digits("123456", ","), "123,456");
        assert_eq!(group_digits("1234567", "."), "1.234.567");
        assert_eq!(group_digits("1234567", "'"), "1'234'567");
    }

    #[test]
    fn test_group_digits_without_separator() {
        assert_eq!(group_digits("1234567", ""), "1234567");
    }

    #[test]
    fn test_group_digits_multichar_separator() {
        assert_eq!(group_digits("12345", "\u{202f}"), "12\u{202f}345");
    }

    #[test]
    fn test_zero_pad() {
        assert_eq!(zero_pad(5, 2), "05");
        assert_eq!(zero_pad(99, 2), "99");
        assert_eq!(zero_pad(7, 0), "7");
    }

    proptest! {
        #[test]
        fn grouping_only_inserts_separators(n in any::<u64>()) {
            let digits = n.to_string();
            let grouped = group_digits(&digits, ",");
            prop_assert_eq!(grouped.replace(',', ""), digits);
            prop_assert!(grouped.split(',').skip(1).all(|group| group.len() == 3));
        }
    }
}
