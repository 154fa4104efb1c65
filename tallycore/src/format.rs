//! Number formatting and numeral validation

/// Fractional digits kept when rendering a result.
pub const MAX_FRACTION_DIGITS: usize = 10;

/// Render a value for the display.
///
/// At most ten fractional digits, trailing zeros stripped. Rounding is done
/// by the standard formatter on the exact binary value, ties to even.
/// Non-finite values render as the error marker.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return crate::engine::ERROR_MARKER.to_string();
    }
    let s = format!("{:.*}", MAX_FRACTION_DIGITS, n);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" | "-" => "0".to_string(),
        t => t.to_string(),
    }
}

/// Numeric value of a display string. The engine is the only producer of
/// these strings, so anything unparseable is treated as zero.
pub fn value_of(input: &str) -> f64 {
    input.parse().unwrap_or(0.0)
}

/// Validate text coming from outside the keypad (clipboard, history recall)
/// and normalize it into a numeral the engine could have typed itself.
///
/// Accepts an optional leading `-`, digits and at most one `.`. Exponents,
/// separators and anything non-finite are rejected.
pub fn parse_numeral(text: &str) -> Option<String> {
    let text = text.trim();
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
        return None;
    }
    if int_part.is_empty() && frac_part.map_or(true, str::is_empty) {
        return None;
    }

    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        rest => rest,
    };
    let mut numeral = String::with_capacity(text.len() + 1);
    numeral.push_str(int_part);
    if let Some(frac) = frac_part {
        numeral.push('.');
        numeral.push_str(frac);
    }

    let value: f64 = numeral.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    if negative && value != 0.0 {
        numeral.insert(0, '-');
    }
    Some(numeral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.000_000_000_01), "0");
    }

    #[test]
    fn test_fraction_rounding() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_number(2.0 / 3.0), "0.6666666667");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), "Error");
        assert_eq!(format_number(f64::INFINITY), "Error");
    }

    #[test]
    fn test_parse_numeral_accepts_plain_numbers() {
        assert_eq!(parse_numeral("42").as_deref(), Some("42"));
        assert_eq!(parse_numeral("  -3.25\n").as_deref(), Some("-3.25"));
        assert_eq!(parse_numeral(".5").as_deref(), Some("0.5"));
        assert_eq!(parse_numeral("007").as_deref(), Some("7"));
        assert_eq!(parse_numeral("-0").as_deref(), Some("0"));
        assert_eq!(parse_numeral("5.").as_deref(), Some("5."));
    }

    #[test]
    fn test_parse_numeral_rejects_garbage() {
        assert_eq!(parse_numeral(""), None);
        assert_eq!(parse_numeral("-"), None);
        assert_eq!(parse_numeral("."), None);
        assert_eq!(parse_numeral("1.2.3"), None);
        assert_eq!(parse_numeral("1e5"), None);
        assert_eq!(parse_numeral("12 + 3"), None);
        assert_eq!(parse_numeral("abc"), None);
        assert_eq!(parse_numeral("1,000"), None);
    }
}
