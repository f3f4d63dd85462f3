//! HTTP client for the Triton Inference Server
//!
//! This module provides the HTTP client used to talk to a Triton server
//! over its KServe v2 REST protocol: model readiness, metadata, config,
//! and synchronous inference. It reuses pooled connections and bounds
//! every request with a configurable timeout.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use triton_qa_client::client::TritonClient;
//!
//! # async fn example() -> triton_qa_client::Result<()> {
//! let client = TritonClient::new("127.0.0.1:8000");
//! let ready = client.is_model_ready("transformer_onnx_inference", "1").await?;
//! # Ok(())
//! # }
//! ```

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, StatusCode};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::api::{endpoints, InferRequest, ModelMetadata};
use crate::config::DEFAULT_REQUEST_TIMEOUT;
use crate::error::{ClientError, Result};

/// HTTP client options for the Triton client
///
/// # Performance Tuning
///
/// - `request_timeout`: balance between reliability and responsiveness
/// - `connection_pool_idle_timeout`: balance memory vs connection reuse
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Timeout for individual HTTP requests
    pub request_timeout: Duration,
    /// How long to keep idle connections in the pool
    pub connection_pool_idle_timeout: Duration,
}

impl ClientOptions {
    /// Creates client options with the specified request timeout
    pub fn new(request_timeout: Duration) -> Self {
        Self {
            request_timeout,
            connection_pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl Default for ClientOptions {
    /// Default options suitable for a local demo deployment
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_TIMEOUT)
    }
}

/// HTTP client for KServe v2 operations against one Triton server
///
/// The client holds a pooled hyper connection and is created once per run;
/// dropping it releases the connection. All operations are synchronous in
/// intent: each call blocks until the server answers or the request
/// timeout elapses.
#[derive(Clone)]
pub struct TritonClient {
    /// Hyper HTTP client with connection pooling
    client: Client<HttpConnector, Full<Bytes>>,

    /// Server address (host:port, no scheme)
    server_addr: String,

    /// Client options
    options: ClientOptions,
}

impl TritonClient {
    /// Creates a new client for the given server address with default options
    pub fn new(server_addr: impl Into<String>) -> Self {
        Self::with_options(server_addr, ClientOptions::default())
    }

    /// Creates a new client with custom options
    pub fn with_options(server_addr: impl Into<String>, options: ClientOptions) -> Self {
        let connector = HttpConnector::new();
        let client = Client::builder(hyper_util::rt::TokioExecutor::new())
            .pool_idle_timeout(options.connection_pool_idle_timeout)
            .build(connector);

        Self {
            client,
            server_addr: server_addr.into(),
            options,
        }
    }

    /// Returns the client options
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.server_addr, path)
    }

    /// Checks whether a model version is ready to serve requests
    ///
    /// Maps to `GET /v2/models/{model}/versions/{version}/ready`. The
    /// server answers 200 for a ready model and a 4xx status otherwise, so
    /// a non-success status here is `Ok(false)` rather than an error.
    #[instrument(skip(self), fields(model = model, version = version))]
    pub async fn is_model_ready(&self, model: &str, version: &str) -> Result<bool> {
        let url = self.url(&endpoints::model_ready(model, version));
        let request = Self::get_request(&url)?;
        let response = self.send(request, "model readiness check", &url).await?;

        let ready = response.status() == StatusCode::OK;
        debug!(ready = ready, status = %response.status(), "readiness check completed");
        Ok(ready)
    }

    /// Fetches metadata for a model version
    ///
    /// Maps to `GET /v2/models/{model}/versions/{version}`.
    #[instrument(skip(self), fields(model = model, version = version))]
    pub async fn model_metadata(&self, model: &str, version: &str) -> Result<ModelMetadata> {
        let body = self
            .get_success(&endpoints::model_metadata(model, version), "model metadata fetch")
            .await?;

        serde_json::from_slice(&body).map_err(|e| {
            ClientError::serialization(format!("failed to parse model metadata: {}", e))
        })
    }

    /// Fetches the server-side configuration of a model version
    ///
    /// Maps to `GET /v2/models/{model}/versions/{version}/config`. The
    /// config layout is server-defined, so it is returned as raw JSON.
    #[instrument(skip(self), fields(model = model, version = version))]
    pub async fn model_config(&self, model: &str, version: &str) -> Result<serde_json::Value> {
        let body = self
            .get_success(&endpoints::model_config(model, version), "model config fetch")
            .await?;

        serde_json::from_slice(&body).map_err(|e| {
            ClientError::serialization(format!("failed to parse model config: {}", e))
        })
    }

    /// Sends an inference request and returns the raw response body
    ///
    /// Maps to `POST /v2/models/{model}/versions/{version}/infer`. Blocks
    /// until the server answers or the request timeout elapses. The body is
    /// returned untouched so callers can print it verbatim.
    #[instrument(skip(self, request), fields(model = model, version = version))]
    pub async fn infer(
        &self,
        model: &str,
        version: &str,
        request: &InferRequest,
    ) -> Result<String> {
        let body = serde_json::to_string(request).map_err(|e| {
            ClientError::serialization(format!("failed to serialize inference request: {}", e))
        })?;

        let url = self.url(&endpoints::infer(model, version));
        let http_request = Request::builder()
            .method(Method::POST)
            .uri(&url)
            .header(hyper::header::CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(body)))
            .map_err(|e| {
                ClientError::network(
                    &url,
                    format!("failed to build HTTP request: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        let response = self.send(http_request, "inference request", &url).await?;
        let status = response.status();
        let bytes = Self::collect_body(response, &url).await?;

        if !status.is_success() {
            warn!(url = %url, status = %status, "inference request failed with HTTP error");
            return Err(ClientError::server(
                &url,
                status.as_u16(),
                String::from_utf8_lossy(&bytes).into_owned(),
            ));
        }

        debug!(bytes = bytes.len(), "inference request completed");
        String::from_utf8(bytes.to_vec()).map_err(|e| {
            ClientError::serialization(format!("response body is not valid UTF-8: {}", e))
        })
    }

    /// Issues a GET and returns the body, treating non-2xx statuses as errors
    async fn get_success(&self, path: &str, operation: &str) -> Result<Bytes> {
        let url = self.url(path);
        let request = Self::get_request(&url)?;
        let response = self.send(request, operation, &url).await?;

        let status = response.status();
        let bytes = Self::collect_body(response, &url).await?;
        if !status.is_success() {
            warn!(url = %url, status = %status, "request failed with HTTP error");
            return Err(ClientError::server(
                &url,
                status.as_u16(),
                String::from_utf8_lossy(&bytes).into_owned(),
            ));
        }

        Ok(bytes)
    }

    fn get_request(url: &str) -> Result<Request<Full<Bytes>>> {
        Request::builder()
            .method(Method::GET)
            .uri(url)
            .body(Full::new(Bytes::new()))
            .map_err(|e| {
                ClientError::network(
                    url,
                    format!("failed to build HTTP request: {}", e),
                    Some(Box::new(e)),
                )
            })
    }

    async fn send(
        &self,
        request: Request<Full<Bytes>>,
        operation: &str,
        url: &str,
    ) -> Result<hyper::Response<hyper::body::Incoming>> {
        tokio::time::timeout(self.options.request_timeout, self.client.request(request))
            .await
            .map_err(|_| ClientError::timeout(self.options.request_timeout, operation))?
            .map_err(|e| {
                ClientError::network(
                    url,
                    format!("HTTP request failed: {}", e),
                    Some(Box::new(e)),
                )
            })
    }

    async fn collect_body(
        response: hyper::Response<hyper::body::Incoming>,
        url: &str,
    ) -> Result<Bytes> {
        response
            .into_body()
            .collect()
            .await
            .map(|collected| collected.to_bytes())
            .map_err(|e| {
                ClientError::network(
                    url,
                    format!("failed to read response body: {}", e),
                    Some(Box::new(e)),
                )
            })
    }
}

impl std::fmt::Debug for TritonClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TritonClient")
            .field("server_addr", &self.server_addr)
            .field("options", &self.options)
            .field("client", &"<HyperClient>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_options_creation() {
        let options = ClientOptions::new(Duration::from_secs(10));
        assert_eq!(options.request_timeout, Duration::from_secs(10));
        assert_eq!(options.connection_pool_idle_timeout, Duration::from_secs(90));
    }

    #[test]
    fn test_client_options_default() {
        let options = ClientOptions::default();
        assert_eq!(options.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_client_creation() {
        let client = TritonClient::new("127.0.0.1:8000");
        assert_eq!(client.options().request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_url_construction() {
        let client = TritonClient::new("127.0.0.1:8000");
        assert_eq!(
            client.url("/v2/models/m/versions/1/ready"),
            "http://127.0.0.1:8000/v2/models/m/versions/1/ready"
        );
    }

    // Network tests would require a running Triton server; the request
    // flow against a live model is exercised manually with the deployed
    // demo models.
}
