//! Lenient numeric coercion and canonical decimal formatting.
//!
//! Property and load values arrive as free text typed by a user, possibly
//! mid-edit and possibly using a comma decimal separator. Coercion never
//! fails: text that does not parse (or parses to a non-finite value)
//! becomes `0.0`, so provisional entries cannot abort emission. Formatting
//! is canonical decimal — never scientific notation, never
//! locale-separated — so generated scripts are byte-stable and diffable.

/// Marker value a restraint component uses to leave a degree of freedom
/// unconstrained. Compared case-insensitively.
pub const FREE_MARKER: &str = "free";

/// Whether a raw component value is the "leave free" marker.
pub fn is_free_marker(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(FREE_MARKER)
}

/// Coerce free-form numeric text to a finite `f64`.
///
/// Comma decimal separators are normalized to dots before parsing.
/// Unparsable or non-finite input coerces to `0.0` — this is the
/// documented behavior for provisional entries, not an error path.
///
/// # Examples
///
/// ```
/// use commforge_core::numeric::coerce;
///
/// assert_eq!(coerce("1,23"), 1.23);
/// assert_eq!(coerce(" 210000 "), 210000.0);
/// assert_eq!(coerce("abc"), 0.0);
/// assert_eq!(coerce("inf"), 0.0);
/// ```
pub fn coerce(raw: &str) -> f64 {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Format a value as a canonical decimal literal.
///
/// Integral values carry a trailing `.0` so every emitted literal is
/// unambiguously a real. Non-finite input formats as `0.0`, matching
/// [`coerce`].
///
/// # Examples
///
/// ```
/// use commforge_core::numeric::format_decimal;
///
/// assert_eq!(format_decimal(1.23), "1.23");
/// assert_eq!(format_decimal(35.0), "35.0");
/// assert_eq!(format_decimal(1e-6), "0.000001");
/// ```
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return "0.0".to_string();
    }
    let mut text = format!("{value}");
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn coerce_normalizes_comma_separator() {
        assert_eq!(coerce("1,23"), 1.23);
        assert_eq!(coerce("-0,5"), -0.5);
    }

    #[test]
    fn coerce_rejects_garbage_to_zero() {
        assert_eq!(coerce(""), 0.0);
        assert_eq!(coerce("abc"), 0.0);
        assert_eq!(coerce("1.2.3"), 0.0);
        assert_eq!(coerce("NaN"), 0.0);
    }

    #[test]
    fn format_decimal_is_never_scientific() {
        assert_eq!(format_decimal(7.8e-9), "0.0000000078");
        assert_eq!(format_decimal(210000.0), "210000.0");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(-0.5), "-0.5");
    }

    #[test]
    fn free_marker_is_case_insensitive() {
        assert!(is_free_marker("free"));
        assert!(is_free_marker(" FREE "));
        assert!(!is_free_marker("0.0"));
    }

    proptest! {
        #[test]
        fn coerce_never_panics_and_is_finite(raw in ".*") {
            let v = coerce(&raw);
            prop_assert!(v.is_finite());
        }

        #[test]
        fn formatted_literals_have_no_exponent(v in -1e12f64..1e12) {
            let text = format_decimal(v);
            prop_assert!(!text.contains('e') && !text.contains('E'));
            prop_assert!(text.contains('.'));
        }
    }
}
