//! Error types for Hygiene Core.
//!
//! The evaluators themselves never fail. Errors only surface at the edges:
//! parsing tags from strings, validating configuration, decoding requests.

use thiserror::Error;

/// Unified error type for Hygiene Core operations.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unknown hazard statement: {0}")]
    UnknownHazardStatement(String),

    #[error("Unknown physical form: {0}")]
    UnknownPhysicalForm(String),

    #[error("Invalid below-LOD multiplier {0}: expected 0.5 or 1.0")]
    InvalidMultiplier(f64),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Hygiene Core operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidMultiplier(0.7);
        assert_eq!(
            err.to_string(),
            "Invalid below-LOD multiplier 0.7: expected 0.5 or 1.0"
        );

        let err = EngineError::UnknownHazardStatement("H999".to_string());
        assert!(err.to_string().contains("H999"));
    }

    #[test]
    fn test_serde_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: EngineError = parse.unwrap_err().into();
        assert!(matches!(err, EngineError::Serialization(_)));
    }
}
