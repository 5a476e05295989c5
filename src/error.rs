use thiserror::Error;

/// Errors raised while resolving the startup configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// A parameter override that is not of the form `key:=value`.
    #[error("malformed parameter `{0}`, expected `key:=value`")]
    Malformed(String),

    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),

    #[error("invalid value `{value}` for parameter `{key}`")]
    InvalidValue { key: String, value: String },

    #[error("spawn_frequency must be a positive, finite number of hertz (got {0})")]
    NonPositiveFrequency(f64),
}

/// Failure modes of a call to an external service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service never became reachable within the configured wait.
    #[error("service `{0}` is not available")]
    Unavailable(String),

    /// The service answered with an error.
    #[error("service call failed: {0}")]
    Failed(String),

    /// The responder went away without answering.
    #[error("service call dropped before completion")]
    Dropped,
}
