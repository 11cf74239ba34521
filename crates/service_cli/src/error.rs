//! Error types for the spectrum CLI.

use thiserror::Error;

/// Errors surfaced by CLI commands.
///
/// The foundation layer's generators are total functions; everything that
/// can go wrong lives at this layer: bad arguments, unreadable
/// configuration, report serialisation and a cross-validation run whose
/// generators disagree.
#[derive(Error, Debug)]
pub enum CliError {
    /// Underlying I/O failure while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// Command argument outside the supported range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The indicator generators disagreed during cross-validation.
    #[error("Cross-validation failed: {0}")]
    Disagreement(String),

    /// Failed to serialise a report.
    #[error("Serialisation error: {0}")]
    Serialise(#[from] serde_json::Error),
}

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("bound must be positive".to_string());
        assert_eq!(format!("{}", err), "Invalid argument: bound must be positive");
    }

    #[test]
    fn test_disagreement_display() {
        let err = CliError::Disagreement("first divergence at n = 7".to_string());
        assert_eq!(
            format!("{}", err),
            "Cross-validation failed: first divergence at n = 7"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CliError = io.into();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = CliError::Config("bad toml".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
