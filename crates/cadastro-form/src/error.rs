//! # Form Error Types
//!
//! Error types for the submission lifecycle and configuration loading.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Form Error Categories                             │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────────┐  │
//! │  │      SubmitError         │        │        ConfigError           │  │
//! │  │                          │        │                              │  │
//! │  │  InFlight                │        │  InvalidValue                │  │
//! │  │  AwaitingAck             │        │  Parse (TOML)                │  │
//! │  │  Invalid                 │        │  Io                          │  │
//! │  │  Simulated               │        │                              │  │
//! │  └──────────────────────────┘        └──────────────────────────────┘  │
//! │                                                                         │
//! │  Field-level problems are NOT errors here: they live in ErrorState     │
//! │  as FieldError values and are rendered under each input.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A submission is already running; the button is disabled meanwhile.
    #[error("A submission is already in flight")]
    InFlight,

    /// The previous success has not been acknowledged yet; the form still
    /// holds the data that was sent.
    #[error("The previous submission has not been acknowledged")]
    AwaitingAck,

    /// Client-side validation failed; nothing was sent.
    #[error("Form has {count} invalid field(s)")]
    Invalid { count: usize },

    /// The mock backend was configured to fail.
    #[error("Simulated submission failure")]
    Simulated,
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable or setting could not be parsed.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    /// The TOML file is malformed.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SubmitError::Invalid { count: 2 }.to_string(),
            "Form has 2 invalid field(s)"
        );

        let err = ConfigError::InvalidValue {
            key: "CADASTRO_SUBMIT_DELAY_MS".to_string(),
            value: "soon".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CADASTRO_SUBMIT_DELAY_MS: 'soon'"
        );
    }
}
