#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Not a number at all
    Invalid,
    /// Parsed, but NaN or infinite
    NonFinite,
}

/// Parse a decimal coordinate or intensity value, rejecting NaN and infinities.
///
/// Surrounding whitespace is ignored.
///
/// # Examples
/// ```
/// use firemap::utils::coordinates::{parse_finite, NumericError};
///
/// assert_eq!(parse_finite(" -12.5 "), Ok(-12.5));
/// assert_eq!(parse_finite("abc"), Err(NumericError::Invalid));
/// assert_eq!(parse_finite("NaN"), Err(NumericError::NonFinite));
/// ```
pub fn parse_finite(value: &str) -> Result<f64, NumericError> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|_| NumericError::Invalid)?;

    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(NumericError::NonFinite)
    }
}
