//! Error handling for the Triton QA client
//!
//! All failures in the client map onto a single error enum with two
//! recognized recoverable-by-the-user categories (invalid configuration,
//! model not ready) and a small set of transport-level categories that
//! simply terminate the run.

use thiserror::Error;

/// Result type alias for client operations
///
/// This is the standard Result type used throughout the crate. It provides
/// a consistent interface for error handling and makes error propagation
/// more ergonomic.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Error types for a single-shot inference invocation
///
/// Each variant carries the context a user needs to act on the failure:
/// the offending configuration value, the unready model name, or the
/// target and status of a failed HTTP exchange.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration validation errors
    ///
    /// Raised before any network activity when a value survives argument
    /// parsing but fails semantic validation (empty server address,
    /// zero batch size).
    #[error("Configuration error: {message}")]
    Configuration {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// Optional source error for additional context
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The target model is not ready to serve requests
    ///
    /// Raised by the readiness check; when this error occurs no inference
    /// request has been issued.
    #[error("model {model} (version {version}) not yet ready")]
    ModelNotReady {
        /// Name of the model on the server
        model: String,
        /// Requested model version
        version: String,
    },

    /// Network-level connectivity errors
    ///
    /// DNS resolution failures, connection refused, resets, and other
    /// transport problems reaching the inference server.
    #[error("Network error connecting to {target}: {message}")]
    Network {
        /// Target address that failed to connect
        target: String,
        /// Descriptive error message
        message: String,
        /// Underlying network error for debugging
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Request exceeded the client-side time bound
    #[error("Operation timed out after {timeout_ms}ms: {operation}")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
        /// Description of the operation that timed out
        operation: String,
    },

    /// The server answered with a non-success HTTP status
    #[error("Server error from {target}: HTTP {status} - {message}")]
    Server {
        /// Endpoint that produced the error
        target: String,
        /// HTTP status code from the server
        status: u16,
        /// Error message or response body
        message: String,
    },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ClientError {
    /// Creates a configuration error with context
    pub fn configuration(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source,
        }
    }

    /// Creates a network error with target and context
    pub fn network(
        target: impl Into<String>,
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Network {
            target: target.into(),
            message: message.into(),
            source,
        }
    }

    /// Creates a timeout error with operation context
    pub fn timeout(timeout: std::time::Duration, operation: impl Into<String>) -> Self {
        Self::Timeout {
            timeout_ms: timeout.as_millis() as u64,
            operation: operation.into(),
        }
    }

    /// Creates a server error with endpoint and status information
    pub fn server(target: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            target: target.into(),
            status,
            message: message.into(),
        }
    }

    /// Creates a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}
