//! # Triton QA Client - Main Entry Point
//!
//! Sends one question-answering inference request to a Triton Inference
//! Server and prints the raw response.

use clap::Parser;
use std::process;
use tracing::error;
use triton_qa_client::Cli;

#[tokio::main]
async fn main() {
    // Initialize logging with TRITON_QA_LOG environment variable, defaulting to warn
    let log_level = std::env::var("TRITON_QA_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(log_level)
        .init();

    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        error!(error = %e, "inference request failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
