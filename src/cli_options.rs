//! CLI options for the Triton QA client
//!
//! This module defines the command-line surface and the single-shot
//! request flow it drives: select a fixture, wait for the model to report
//! ready, fetch metadata and config, send one inference request, print the
//! raw response.

use clap::Parser;
use tracing::{debug, info};

use crate::api::InferRequest;
use crate::client::{ClientOptions, TritonClient};
use crate::config::{ClientConfig, ModelKind, SequenceLength, DEFAULT_REQUEST_TIMEOUT};
use crate::error::{ClientError, Result};
use crate::fixtures::Fixture;

/// Triton QA client - question answering demo against a Triton Inference Server
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sequence length the fixture pair is sized for
    #[arg(long, value_enum)]
    pub length: SequenceLength,

    /// Model runtime to query
    #[arg(long, value_enum)]
    pub model: ModelKind,

    /// REST API endpoint of the inference server
    #[arg(long, default_value = "127.0.0.1:8000", env = "TRITON_QA_URL")]
    pub url: String,

    /// Model version to query
    #[arg(long, default_value = "1", env = "TRITON_QA_MODEL_VERSION")]
    pub model_version: String,

    /// Number of identical copies of the input replicated into one request
    #[arg(long, default_value_t = 1, env = "TRITON_QA_BATCH_SIZE")]
    pub batch_size: usize,
}

impl Cli {
    /// Runs the single-shot inference flow
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` after the raw response has been printed, or the
    /// first error encountered. When the model is not ready no inference
    /// request is issued.
    pub async fn run(self) -> Result<()> {
        let config = self.to_config()?;
        let model_name = config.model.model_name();

        info!(
            url = %config.url,
            model = %model_name,
            model_version = %config.model_version,
            sequence_length = %config.sequence_length,
            batch_size = config.batch_size,
            "sending inference request"
        );

        let client = TritonClient::with_options(
            config.url.clone(),
            ClientOptions::new(config.request_timeout),
        );

        if !client
            .is_model_ready(&model_name, &config.model_version)
            .await?
        {
            return Err(ClientError::ModelNotReady {
                model: model_name,
                version: config.model_version,
            });
        }

        // Fetched for parity with the deployment tooling; informational only.
        let metadata = client
            .model_metadata(&model_name, &config.model_version)
            .await?;
        debug!(
            platform = %metadata.platform,
            inputs = metadata.inputs.len(),
            outputs = metadata.outputs.len(),
            "model metadata"
        );

        let model_config = client
            .model_config(&model_name, &config.model_version)
            .await?;
        debug!(config = %model_config, "model config");

        let fixture = Fixture::for_length(config.sequence_length);
        let request = InferRequest::question_answering(fixture, config.batch_size);
        let response = client
            .infer(&model_name, &config.model_version, &request)
            .await?;

        println!("{}", response);
        Ok(())
    }

    /// Converts CLI options to a validated ClientConfig
    fn to_config(&self) -> Result<ClientConfig> {
        let config = ClientConfig {
            url: self.url.clone(),
            sequence_length: self.length,
            model: self.model,
            model_version: self.model_version.clone(),
            batch_size: self.batch_size,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        };
        config.validate()?;
        Ok(config)
    }
}
