//! Sentinel values and optional-number parsing.
//!
//! Fields a device does not report, or reports as text (`N/A`, `Auto`,
//! `Unknown`), take their type's sentinel instead of failing the operation.

/// Integer counters, speed and MTU.
pub const INT_UNKNOWN: i64 = -1;

/// Float measurements where zero is a valid reading.
pub const FLOAT_UNKNOWN: f64 = -1.0;

/// Optical power in dBm. `-1.0` is a real reading there, so the sentinel
/// is negative zero; compare with [`is_dbm_unknown`].
pub const DBM_UNKNOWN: f64 = -0.0;

/// Free-text fields the device did not report.
pub const TEXT_UNKNOWN: &str = "N/A";

/// All-digit text → its value; anything else (including overflow) → `-1`.
pub fn parse_optional_int(text: &str) -> i64 {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return INT_UNKNOWN;
    }
    text.parse().unwrap_or(INT_UNKNOWN)
}

/// Finite float → its value; anything else → `sentinel`.
pub fn parse_optional_float(text: &str, sentinel: f64) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(sentinel)
}

/// `true` only for the float sentinel, not for a real negative reading.
pub fn is_float_unknown(value: f64) -> bool {
    value.to_bits() == FLOAT_UNKNOWN.to_bits()
}

/// `true` only for the dBm sentinel, not for a real `0.0` reading.
pub fn is_dbm_unknown(value: f64) -> bool {
    value.to_bits() == DBM_UNKNOWN.to_bits()
}

/// Empty text → [`TEXT_UNKNOWN`], otherwise the trimmed text.
pub fn text_or_unknown(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        TEXT_UNKNOWN.to_owned()
    } else {
        text.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_int() {
        assert_eq!(parse_optional_int("42"), 42);
        assert_eq!(parse_optional_int(" 9216 "), 9216);
        assert_eq!(parse_optional_int("N/A"), -1);
        assert_eq!(parse_optional_int("Auto"), -1);
        assert_eq!(parse_optional_int("-5"), -1);
        assert_eq!(parse_optional_int(""), -1);
        assert_eq!(parse_optional_int("99999999999999999999999"), -1);
    }

    #[test]
    fn optional_float() {
        assert!((parse_optional_float("78.5", FLOAT_UNKNOWN) - 78.5).abs() < f64::EPSILON);
        assert!((parse_optional_float("-2.345", DBM_UNKNOWN) + 2.345).abs() < f64::EPSILON);
        assert!((parse_optional_float("N/A", FLOAT_UNKNOWN) + 1.0).abs() < f64::EPSILON);
        assert!(is_dbm_unknown(parse_optional_float("N/A", DBM_UNKNOWN)));
        assert!(is_dbm_unknown(parse_optional_float("NaN", DBM_UNKNOWN)));
    }

    #[test]
    fn float_sentinel_is_exact() {
        assert!(is_float_unknown(FLOAT_UNKNOWN));
        assert!(!is_float_unknown(-1.5));
        assert!(!is_float_unknown(-0.0));
    }

    #[test]
    fn dbm_sentinel_is_distinct_from_zero() {
        assert!(is_dbm_unknown(DBM_UNKNOWN));
        assert!(!is_dbm_unknown(0.0));
        assert!(!is_dbm_unknown(-1.0));
    }

    #[test]
    fn text_unknown() {
        assert_eq!(text_or_unknown("  "), "N/A");
        assert_eq!(text_or_unknown(" Rack 12 "), "Rack 12");
    }
}
