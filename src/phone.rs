//! Phone number display formatting for the contact form.

/// Reformat free-typed input into the `(DDD) DDD-DDDD` display pattern.
///
/// Everything but ASCII digits is stripped first, so the function is
/// idempotent over its own output and tolerates pasted punctuation. Digits
/// past the tenth are dropped. Short fragments render progressively: up to
/// two digits stay bare, three to five open the area code group, and six or
/// more add the dash.
pub fn format_phone_fragment(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let digits: &str = if digits.len() > 10 { &digits[..10] } else { &digits };
    match digits.len() {
        0..=2 => digits.to_string(),
        3..=5 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

#[cfg(test)]
mod tests {
    use super::format_phone_fragment;

    #[test]
    fn short_fragments_stay_bare() {
        assert_eq!(format_phone_fragment(""), "");
        assert_eq!(format_phone_fragment("5"), "5");
        assert_eq!(format_phone_fragment("55"), "55");
    }

    #[test]
    fn three_digits_open_the_area_code() {
        assert_eq!(format_phone_fragment("555"), "(555) ");
        assert_eq!(format_phone_fragment("55512"), "(555) 12");
    }

    #[test]
    fn six_digits_add_the_dash() {
        assert_eq!(format_phone_fragment("555123"), "(555) 123-");
        assert_eq!(format_phone_fragment("5551234"), "(555) 123-4");
    }

    #[test]
    fn ten_digits_complete_the_pattern() {
        assert_eq!(format_phone_fragment("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn digits_past_ten_are_dropped() {
        assert_eq!(format_phone_fragment("555123456789"), "(555) 123-4567");
    }

    #[test]
    fn reformatting_formatted_input_is_stable() {
        assert_eq!(format_phone_fragment("(555) 123-4567"), "(555) 123-4567");
        assert_eq!(format_phone_fragment("(555) 12"), "(555) 12");
    }

    #[test]
    fn non_digit_input_formats_as_empty() {
        assert_eq!(format_phone_fragment("ext."), "");
    }
}
