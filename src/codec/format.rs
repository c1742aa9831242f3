//! Field-level text conversions
//!
//! Unknown values become empty fields and empty fields read back as unknown.
//! Non-finite numbers are never written.

/// `%+.Nf`: always signed, fixed decimals
pub fn signed(value: Option<f64>, decimals: usize) -> String {
    finite(value).map_or_else(String::new, |v| format!("{:+.*}", decimals, v))
}

/// `%.Nf`: fixed decimals
pub fn fixed(value: Option<f64>, decimals: usize) -> String {
    finite(value).map_or_else(String::new, |v| format!("{:.*}", decimals, v))
}

/// `%.3E`: three decimals of mantissa and a signed exponent of at least
/// two digits, e.g. `2.637E+00`
pub fn scientific(value: Option<f64>) -> String {
    let Some(v) = finite(value) else {
        return String::new();
    };

    let text = format!("{:.3E}", v);
    match text.split_once('E') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}E{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => text,
        },
        None => text,
    }
}

/// Free text, quoted when it would otherwise split the record
pub fn text(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Reads a numeric field; empty or unparsable text is unknown
pub fn number(field: &str) -> Option<f64> {
    let field = field.trim();
    if field.is_empty() {
        return None;
    }
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(5.0), 2, "+5.00")]
    #[case(Some(-1.456), 2, "-1.46")]
    #[case(Some(0.0), 1, "+0.0")]
    #[case(Some(-0.03847), 5, "-0.03847")]
    #[case(None, 2, "")]
    #[case(Some(f64::INFINITY), 2, "")]
    #[case(Some(f64::NAN), 2, "")]
    fn test_signed(#[case] value: Option<f64>, #[case] decimals: usize, #[case] expected: &str) {
        assert_eq!(signed(value, decimals), expected);
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(Some(66.04), 1), "66.0");
        assert_eq!(fixed(Some(2451545.0), 2), "2451545.00");
        assert_eq!(fixed(None, 1), "");
    }

    #[rstest]
    #[case(2.6368, "2.637E+00")]
    #[case(1234.5, "1.234E+03")]
    #[case(0.0123, "1.230E-02")]
    #[case(5.0e12, "5.000E+12")]
    #[case(3.0e-120, "3.000E-120")]
    fn test_scientific(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(scientific(Some(value)), expected);
    }

    #[test]
    fn test_scientific_unknown() {
        assert_eq!(scientific(None), "");
        assert_eq!(scientific(Some(f64::INFINITY)), "");
    }

    #[test]
    fn test_text_quoting() {
        assert_eq!(text("A1V"), "A1V");
        assert_eq!(text("K0III,CN-1"), "\"K0III,CN-1\"");
        assert_eq!(text("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(text(""), "");
    }

    #[rstest]
    #[case("+5.00", Some(5.0))]
    #[case(" -1.46 ", Some(-1.46))]
    #[case("2.637E+00", Some(2.637))]
    #[case("", None)]
    #[case("   ", None)]
    #[case("bright", None)]
    #[case("inf", None)]
    fn test_number(#[case] field: &str, #[case] expected: Option<f64>) {
        assert_eq!(number(field), expected);
    }
}
