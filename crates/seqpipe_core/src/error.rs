//! Error types for seqpipe core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur at the configuration boundary.
///
/// Pipelines themselves never fail: predicates and transforms are total
/// and an exhausted cursor is end-of-sequence, not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Scenario configuration was rejected.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// No scenario is registered under this name.
    #[error("unknown scenario: {name}")]
    UnknownScenario {
        /// The name that was looked up.
        name: String,
    },
}

impl CoreError {
    /// Creates an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates an unknown scenario error.
    pub fn unknown_scenario(name: impl Into<String>) -> Self {
        Self::UnknownScenario { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            CoreError::invalid_config("bad name").to_string(),
            "invalid config: bad name"
        );
        assert_eq!(
            CoreError::unknown_scenario("nope").to_string(),
            "unknown scenario: nope"
        );
    }
}
