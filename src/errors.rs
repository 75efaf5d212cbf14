// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for stitch build operations

use thiserror::Error;

use crate::domain::LabelId;

/// Errors that can occur while building a stitch
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StitchError {
    /// Both endpoints of a connection are the public internet
    #[error("cannot connect public internet to itself")]
    PublicSelfConnection,

    /// A connection touching the public internet names a port range
    #[error("public internet cannot connect on port ranges (got {min}-{max})")]
    PublicPortRange { min: u32, max: u32 },

    /// Range lower bound exceeds its upper bound
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: u32, max: u32 },

    /// Label handle does not belong to this build context
    #[error("unknown label: {0}")]
    UnknownLabel(LabelId),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for stitch build operations
pub type StitchResult<T> = Result<T, StitchError>;

impl From<serde_json::Error> for StitchError {
    fn from(err: serde_json::Error) -> Self {
        StitchError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StitchError::PublicSelfConnection.to_string(),
            "cannot connect public internet to itself"
        );

        let err = StitchError::PublicPortRange { min: 1, max: 100 };
        assert!(err
            .to_string()
            .starts_with("public internet cannot connect on port ranges"));

        let err = StitchError::UnknownLabel(LabelId::new(1, 7));
        assert!(err.to_string().contains("label#7"));
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: StitchError = json_err.into();
        assert!(matches!(err, StitchError::Serialization(_)));
    }
}
