//! Error types

use std::fmt;

/// Error returned when a value does not fit the target type of a conversion
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ConversionError {
    /// The first element of a pair could not be converted
    First,
    /// The second element of a pair could not be converted
    Second,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::First => write!(f, "first element out of range for target type"),
            ConversionError::Second => write!(f, "second element out of range for target type"),
        }
    }
}

impl std::error::Error for ConversionError {}

#[cfg(test)]
mod tests {
    use super::ConversionError;

    #[test]
    fn test_display() {
        assert_eq!(
            ConversionError::Second.to_string(),
            "second element out of range for target type"
        );
    }
}
