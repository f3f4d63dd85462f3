//! CLI Parsing Tests
//!
//! Verifies the argument surface: required choice flags are validated at
//! parse time, before any network activity, and optional flags fall back
//! to their documented defaults.

use clap::Parser;
use triton_qa_client::{Cli, ModelKind, SequenceLength};

#[test]
fn test_defaults_with_required_flags_only() {
    let cli = Cli::try_parse_from(["triton-qa-client", "--length", "16", "--model", "onnx"])
        .expect("valid invocation should parse");
    assert_eq!(cli.length, SequenceLength::Short);
    assert_eq!(cli.model, ModelKind::Onnx);
    assert_eq!(cli.url, "127.0.0.1:8000");
    assert_eq!(cli.model_version, "1");
    assert_eq!(cli.batch_size, 1);
}

#[test]
fn test_long_fixture_and_tensorrt_runtime() {
    let cli = Cli::try_parse_from(["triton-qa-client", "--length", "256", "--model", "tensorrt"])
        .expect("valid invocation should parse");
    assert_eq!(cli.length, SequenceLength::Long);
    assert_eq!(cli.model, ModelKind::Tensorrt);
}

#[test]
fn test_rejects_unsupported_length() {
    let result = Cli::try_parse_from(["triton-qa-client", "--length", "64", "--model", "onnx"]);
    assert!(result.is_err());
}

#[test]
fn test_rejects_unsupported_model() {
    let result = Cli::try_parse_from(["triton-qa-client", "--length", "16", "--model", "pytorch"]);
    assert!(result.is_err());
}

#[test]
fn test_length_and_model_are_required() {
    assert!(Cli::try_parse_from(["triton-qa-client"]).is_err());
    assert!(Cli::try_parse_from(["triton-qa-client", "--length", "16"]).is_err());
    assert!(Cli::try_parse_from(["triton-qa-client", "--model", "onnx"]).is_err());
}

#[test]
fn test_optional_flags_override_defaults() {
    let cli = Cli::try_parse_from([
        "triton-qa-client",
        "--length",
        "256",
        "--model",
        "onnx",
        "--url",
        "10.0.0.1:8001",
        "--model-version",
        "3",
        "--batch-size",
        "8",
    ])
    .expect("valid invocation should parse");
    assert_eq!(cli.url, "10.0.0.1:8001");
    assert_eq!(cli.model_version, "3");
    assert_eq!(cli.batch_size, 8);
}
