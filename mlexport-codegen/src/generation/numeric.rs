//! Number formatting for embedded data.

/// Fractional digits kept when rendering numbers.
pub const DEFAULT_PRECISION: usize = 10;

/// Render a value at [`DEFAULT_PRECISION`].
///
/// Rounds to the nearest representable decimal, then drops trailing zeros
/// and a trailing decimal point, so `1.0` renders as `1`. NaN and infinities
/// render as `0`.
///
/// ```
/// use mlexport_codegen::generation::format_number;
///
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(-3.0), "-3");
/// assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let mut text = format!("{:.*}", DEFAULT_PRECISION, value);
    if text.contains('.') {
        let len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(len);
    }
    text
}

/// Render values comma-separated, without spaces.
pub fn join_numbers(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(",")
}
