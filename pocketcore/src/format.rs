//! Number formatting for the display
//!
//! Integral values print without a fractional part. Everything else gets a
//! short general ("%g"-style) rendering capped at a fixed number of
//! significant digits, so `0.1 + 0.2` reads `0.3`.

/// Shown on the display when there is no number to show.
pub const ERROR_MARKER: &str = "Error";

/// Default significant-digit budget.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 10;

/// An f64 cannot carry more than this meaningfully.
pub const MAX_SIGNIFICANT_DIGITS: usize = 15;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    significant_digits: usize,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}

impl Formatter {
    /// Digits outside `1..=MAX_SIGNIFICANT_DIGITS` are clamped.
    pub fn new(significant_digits: usize) -> Self {
        Self {
            significant_digits: significant_digits.clamp(1, MAX_SIGNIFICANT_DIGITS),
        }
    }

    pub fn significant_digits(&self) -> usize {
        self.significant_digits
    }

    pub fn format(&self, n: f64) -> String {
        if n.is_nan() {
            return ERROR_MARKER.to_string();
        }
        if n.is_infinite() {
            return if n > 0.0 { "Inf" } else { "-Inf" }.to_string();
        }

        if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            // `as i64` also folds -0 into 0
            return format!("{}", n as i64);
        }

        self.format_general(n)
    }

    fn format_general(&self, n: f64) -> String {
        let precision = self.significant_digits;

        // Round to the digit budget first; rounding may carry into a new
        // decade (9.99.. -> 10.0), so the exponent is read back afterwards.
        let sci = format!("{:.*e}", precision - 1, n);
        let Some((mantissa, exp)) = sci
            .split_once('e')
            .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m.to_string(), e)))
        else {
            return n.to_string();
        };

        if exp < -4 || exp >= precision as i32 {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", trim_fraction(&mantissa), sign, exp.abs())
        } else {
            let decimals = (precision as i32 - 1 - exp).max(0) as usize;
            trim_fraction(&format!("{:.*}", decimals, n)).to_string()
        }
    }
}

/// Format with the default digit budget.
pub fn format_number(n: f64) -> String {
    Formatter::default().format(n)
}

/// Numeric value of a display string. `None` for the error marker or
/// anything else that is not a numeral.
pub fn parse_display(text: &str) -> Option<f64> {
    if text == ERROR_MARKER {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// True when the display holds a computed marker rather than typed digits.
pub(crate) fn is_marker(text: &str) -> bool {
    parse_display(text).map_or(true, |v| !v.is_finite())
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(1e15), "1000000000000000");
        assert_eq!(format_number(1e16), "10000000000000000");
        assert_eq!(format_number(-1.2345678901234568e17), "-123456789012345680");
    }

    #[test]
    fn test_float_noise_is_hidden() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.1 * 3.0), "3.3");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn test_ten_significant_digits() {
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_number(2.0 / 3.0), "0.6666666667");
        assert_eq!(format_number(123.456789012345), "123.456789");
        assert_eq!(format_number(-7.25), "-7.25");
    }

    #[test]
    fn test_rounding_carries_into_next_decade() {
        assert_eq!(format_number(9.99999999999), "10");
        assert_eq!(format_number(0.099999999999), "0.1");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_number(1e20), "1e+20");
        assert_eq!(format_number(1.5e-7), "1.5e-07");
        assert_eq!(format_number(12345678901.5), "1.23456789e+10");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(0.00001234), "1.234e-05");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), ERROR_MARKER);
        assert_eq!(format_number(f64::INFINITY), "Inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Inf");
    }

    #[test]
    fn test_custom_precision() {
        let f = Formatter::new(4);
        assert_eq!(f.format(1.0 / 3.0), "0.3333");
        assert_eq!(f.format(12346.7), "1.235e+04");
        assert_eq!(Formatter::new(0).significant_digits(), 1);
        assert_eq!(Formatter::new(40).significant_digits(), MAX_SIGNIFICANT_DIGITS);
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("12"), Some(12.0));
        assert_eq!(parse_display("0."), Some(0.0));
        assert_eq!(parse_display("-3.5"), Some(-3.5));
        assert_eq!(parse_display("Inf"), Some(f64::INFINITY));
        assert_eq!(parse_display(ERROR_MARKER), None);
        assert_eq!(parse_display("-"), None);
        assert!(is_marker(ERROR_MARKER));
        assert!(is_marker("-Inf"));
        assert!(!is_marker("0."));
    }
}
