//! Length field validation.

use thiserror::Error;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

/// Why the length field is not acceptable. `Display` is the message shown
/// under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("Length is required")]
    Missing,
    #[error("Length must be a number")]
    NotANumber,
    #[error("Length must be a whole number")]
    NotInteger,
    #[error("Should be min of {min} characters", min = MIN_LENGTH)]
    TooShort,
    #[error("Should be max of {max} characters", max = MAX_LENGTH)]
    TooLong,
}

/// Check raw field text and return the accepted length.
///
/// Surrounding whitespace is ignored and integral decimals such as `"8.0"`
/// are accepted.
pub fn validate(raw: &str) -> Result<usize, LengthError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LengthError::Missing);
    }

    let value: f64 = raw.parse().map_err(|_| LengthError::NotANumber)?;
    if value.is_nan() {
        return Err(LengthError::NotANumber);
    }
    // Signed infinities fall through to the range checks.
    if value.is_finite() && value.fract() != 0.0 {
        return Err(LengthError::NotInteger);
    }

    if value < MIN_LENGTH as f64 {
        Err(LengthError::TooShort)
    } else if value > MAX_LENGTH as f64 {
        Err(LengthError::TooLong)
    } else {
        Ok(value as usize)
    }
}
