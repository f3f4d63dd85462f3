//! Client configuration management

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::error::{ClientError, Result};

/// Default time bound applied to every HTTP request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Sequence length the demo fixtures are sized for
///
/// Only the two lengths the deployed models were exported with are
/// accepted; anything else fails argument parsing before any network
/// activity.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceLength {
    /// 16-token sequences (short fixture)
    #[value(name = "16")]
    Short,
    /// 256-token sequences (long fixture)
    #[value(name = "256")]
    Long,
}

impl SequenceLength {
    /// Number of tokens this selector stands for
    pub fn tokens(&self) -> u32 {
        match self {
            Self::Short => 16,
            Self::Long => 256,
        }
    }
}

impl fmt::Display for SequenceLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens())
    }
}

/// Serving runtime the transformer model was exported for
///
/// The deployed model name on the server is derived from this selector.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    /// ONNX Runtime export
    Onnx,
    /// TensorRT engine export
    Tensorrt,
}

impl ModelKind {
    /// Returns the lowercase runtime identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Onnx => "onnx",
            Self::Tensorrt => "tensorrt",
        }
    }

    /// Name of the deployed model on the inference server
    pub fn model_name(&self) -> String {
        format!("transformer_{}_inference", self.as_str())
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration for a single inference invocation
///
/// Built once from command-line input, validated, and immutable for the
/// run's duration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Inference server address (host:port, no scheme)
    pub url: String,
    /// Which fixture pair to send
    pub sequence_length: SequenceLength,
    /// Which deployed model runtime to query
    pub model: ModelKind,
    /// Model version to query
    pub model_version: String,
    /// Number of identical copies of the fixture replicated into one request
    pub batch_size: usize,
    /// Time bound applied to each HTTP request
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    /// Creates a default configuration matching the local demo deployment
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".to_string(),
            sequence_length: SequenceLength::Short,
            model: ModelKind::Onnx,
            model_version: "1".to_string(),
            batch_size: 1,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Validates values that survive argument parsing
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if the configuration is usable, or a
    /// `ClientError::Configuration` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(ClientError::configuration(
                "server address must not be empty",
                None,
            ));
        }
        if self.url.contains("://") {
            return Err(ClientError::configuration(
                format!(
                    "server address must be host:port without a scheme, got {}",
                    self.url
                ),
                None,
            ));
        }
        if self.batch_size == 0 {
            return Err(ClientError::configuration(
                "batch size must be at least 1",
                None,
            ));
        }
        if self.model_version.is_empty() {
            return Err(ClientError::configuration(
                "model version must not be empty",
                None,
            ));
        }
        Ok(())
    }
}
