//! Wire types for the Triton KServe v2 HTTP protocol
//!
//! Request and response payloads exchanged with the inference server, plus
//! the endpoint paths they travel on. Only the subset of the protocol the
//! QA demo touches is modelled here.

use serde::{Deserialize, Serialize};

use crate::fixtures::Fixture;

/// Tensor element type used for string payloads
pub const BYTES_DATATYPE: &str = "BYTES";

/// Fixed tensor names expected by the deployed QA models
pub mod tensor_names {
    /// Input tensor carrying the question strings
    pub const QUESTION: &str = "QUESTION";
    /// Input tensor carrying the context strings
    pub const CONTEXT: &str = "CONTEXT";
    /// Output tensor requested from the model
    pub const OUTPUT: &str = "output";
}

/// Endpoint paths of the KServe v2 HTTP protocol
pub mod endpoints {
    /// Readiness probe for a model version
    pub fn model_ready(model: &str, version: &str) -> String {
        format!("/v2/models/{}/versions/{}/ready", model, version)
    }

    /// Metadata for a model version
    pub fn model_metadata(model: &str, version: &str) -> String {
        format!("/v2/models/{}/versions/{}", model, version)
    }

    /// Server-side configuration for a model version
    pub fn model_config(model: &str, version: &str) -> String {
        format!("/v2/models/{}/versions/{}/config", model, version)
    }

    /// Inference endpoint for a model version
    pub fn infer(model: &str, version: &str) -> String {
        format!("/v2/models/{}/versions/{}/infer", model, version)
    }
}

/// A named tensor descriptor in an inference request
///
/// Inputs carry batch-replicated string data; the requested output is the
/// same descriptor without a data field, which `skip_serializing_if` keeps
/// off the wire.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InferTensor {
    /// Tensor name as deployed on the server
    pub name: String,
    /// Tensor shape; always `[batch_size]` for this demo
    pub shape: Vec<usize>,
    /// Element datatype
    pub datatype: String,
    /// Batch-replicated payload, absent for requested outputs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
}

impl InferTensor {
    /// Creates a BYTES input holding `batch_size` copies of `value`
    pub fn bytes_input(name: &str, value: &str, batch_size: usize) -> Self {
        Self {
            name: name.to_string(),
            shape: vec![batch_size],
            datatype: BYTES_DATATYPE.to_string(),
            data: Some(vec![value.to_string(); batch_size]),
        }
    }

    /// Creates a BYTES output placeholder with no data
    pub fn bytes_output(name: &str, batch_size: usize) -> Self {
        Self {
            name: name.to_string(),
            shape: vec![batch_size],
            datatype: BYTES_DATATYPE.to_string(),
            data: None,
        }
    }
}

/// Request body for `POST /v2/models/{model}/versions/{version}/infer`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InferRequest {
    /// Input tensors carrying the payload
    pub inputs: Vec<InferTensor>,
    /// Outputs requested from the model
    pub outputs: Vec<InferTensor>,
}

impl InferRequest {
    /// Builds the question-answering request
    ///
    /// Both inputs hold exactly `batch_size` identical copies of the
    /// respective fixture string; there is no per-item variation.
    pub fn question_answering(fixture: &Fixture, batch_size: usize) -> Self {
        Self {
            inputs: vec![
                InferTensor::bytes_input(tensor_names::QUESTION, fixture.question, batch_size),
                InferTensor::bytes_input(tensor_names::CONTEXT, fixture.context, batch_size),
            ],
            outputs: vec![InferTensor::bytes_output(tensor_names::OUTPUT, batch_size)],
        }
    }
}

/// Tensor description inside model metadata
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TensorMetadata {
    /// Tensor name
    pub name: String,
    /// Element datatype
    pub datatype: String,
    /// Tensor shape; -1 marks a variable dimension
    pub shape: Vec<i64>,
}

/// Model metadata returned by `GET /v2/models/{model}/versions/{version}`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ModelMetadata {
    /// Model name as deployed
    pub name: String,
    /// Available versions
    #[serde(default)]
    pub versions: Vec<String>,
    /// Serving platform (e.g. "onnxruntime_onnx", "ensemble")
    pub platform: String,
    /// Declared input tensors
    #[serde(default)]
    pub inputs: Vec<TensorMetadata>,
    /// Declared output tensors
    #[serde(default)]
    pub outputs: Vec<TensorMetadata>,
}
