/// Format a number for display and for splicing back into formulas.
///
/// Uses the shortest decimal form that round-trips, without exponent.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // Covers -0.
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// Render a finite number as a float literal the evaluator accepts.
pub(crate) fn float_literal(n: f64) -> String {
    let mut text = format_number(n.abs());
    if !text.contains('.') {
        text.push_str(".0");
    }
    if n.is_sign_negative() && n != 0.0 {
        format!("(-{})", text)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-12.25), "-12.25");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_float_literal() {
        assert_eq!(float_literal(3.0), "3.0");
        assert_eq!(float_literal(0.25), "0.25");
        assert_eq!(float_literal(-4.0), "(-4.0)");
        assert_eq!(float_literal(-0.0), "0.0");
    }
}
