//! Display text for calculation results
//!
//! Shortest round-trip digits, no rounding of floating-point noise
//! (`0.1 + 0.2` shows as `0.30000000000000004`). Very large and very small
//! magnitudes switch to exponent form with a signed exponent.

/// At or above this magnitude results are shown in exponent form.
const EXPONENT_ABOVE: f64 = 1e21;
/// Below this (non-zero) magnitude results are shown in exponent form.
const EXPONENT_BELOW: f64 = 1e-6;

pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // covers -0.0 too
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        let s = format!("{:e}", n);
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        }
    } else {
        format!("{}", n)
    }
}

/// Whether the text is a result the keypad cannot extend (infinity or NaN).
pub fn is_non_finite(text: &str) -> bool {
    matches!(text, "Infinity" | "-Infinity" | "NaN")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(-9.0), "-9");
        assert_eq!(format_number(144.0), "144");
        assert_eq!(format_number(123456789012.0), "123456789012");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(2.0 / 3.0), "0.6666666666666666");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert!(is_non_finite("Infinity"));
        assert!(is_non_finite("NaN"));
        assert!(!is_non_finite("15"));
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_output_parses_back() {
        for n in [15.0, 0.5, 1e21, 1.5e-7, -3.25, f64::INFINITY, f64::NEG_INFINITY] {
            let parsed: f64 = format_number(n).parse().unwrap();
            assert_eq!(parsed, n);
        }
        assert!(format_number(f64::NAN).parse::<f64>().unwrap().is_nan());
    }
}
