//! Ambient engine error types
//!
//! The render path itself cannot fail; these errors only come out of theme
//! parsing and validation.

use thiserror::Error;

/// Errors raised while building or validating an ambient theme
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmbientError {
    /// A colour string was not `rgba(...)`, `rgb(...)` or `#rrggbb`
    #[error("Invalid colour: {0}")]
    InvalidColor(String),

    /// A theme parameter is out of range
    #[error("Invalid theme: {field} {reason}")]
    InvalidTheme { field: String, reason: String },
}

impl AmbientError {
    pub(crate) fn theme(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AmbientError::InvalidTheme {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for theme operations
pub type AmbientResult<T> = Result<T, AmbientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AmbientError::InvalidColor("purple".to_string());
        assert_eq!(err.to_string(), "Invalid colour: purple");

        let err = AmbientError::theme("waves[0].wavelength", "must be positive");
        assert_eq!(err.to_string(), "Invalid theme: waves[0].wavelength must be positive");
    }
}
