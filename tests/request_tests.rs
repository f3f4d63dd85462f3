//! Inference Request Tests
//!
//! Tests for fixture selection and the shape of the request sent to the
//! server: batch replication, tensor names, and the not-ready error path.

use triton_qa_client::api::{tensor_names, BYTES_DATATYPE};
use triton_qa_client::{ClientError, Fixture, InferRequest, SequenceLength};

#[test]
fn test_batch_replication() {
    let fixture = Fixture::for_length(SequenceLength::Short);
    let request = InferRequest::question_answering(fixture, 4);

    assert_eq!(request.inputs.len(), 2);
    for input in &request.inputs {
        assert_eq!(input.shape, vec![4]);
        assert_eq!(input.datatype, BYTES_DATATYPE);
        let data = input.data.as_ref().expect("inputs carry data");
        assert_eq!(data.len(), 4);
        assert!(data.iter().all(|item| item == &data[0]));
    }
}

#[test]
fn test_tensor_names_and_payload() {
    let fixture = Fixture::for_length(SequenceLength::Long);
    let request = InferRequest::question_answering(fixture, 1);

    assert_eq!(request.inputs[0].name, tensor_names::QUESTION);
    assert_eq!(
        request.inputs[0].data.as_deref(),
        Some(&[fixture.question.to_string()][..])
    );
    assert_eq!(request.inputs[1].name, tensor_names::CONTEXT);
    assert_eq!(
        request.inputs[1].data.as_deref(),
        Some(&[fixture.context.to_string()][..])
    );
    assert_eq!(request.outputs.len(), 1);
    assert_eq!(request.outputs[0].name, tensor_names::OUTPUT);
    assert_eq!(request.outputs[0].data, None);
}

#[test]
fn test_serialized_request_layout() {
    let fixture = Fixture::for_length(SequenceLength::Short);
    let request = InferRequest::question_answering(fixture, 2);
    let json = serde_json::to_value(&request).unwrap();

    let inputs = json["inputs"].as_array().unwrap();
    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs[0]["name"], "QUESTION");
    assert_eq!(inputs[0]["shape"], serde_json::json!([2]));
    assert_eq!(inputs[0]["datatype"], "BYTES");
    assert_eq!(inputs[0]["data"].as_array().unwrap().len(), 2);
    assert_eq!(inputs[1]["name"], "CONTEXT");

    let outputs = json["outputs"].as_array().unwrap();
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0]["name"], "output");
    assert!(outputs[0].get("data").is_none());
}

#[test]
fn test_not_ready_error_names_model_and_version() {
    let error = ClientError::ModelNotReady {
        model: "transformer_onnx_inference".to_string(),
        version: "1".to_string(),
    };
    let message = error.to_string();
    assert!(message.contains("transformer_onnx_inference"));
    assert!(message.contains("1"));
    assert!(message.contains("not yet ready"));
}
