//! Invocation of the external transcription script.
//!
//! One child process per call: spawn, wait for exit, interpret the streams.
//! There is no pooling and no serialization, so concurrent calls simply run
//! independent processes.

use serde_json::Value;
use thiserror::Error;
use tokio::process::Command;
use tracing::{info, warn};

use super::output::{Transcription, parse_payload, relevant_warning};
use crate::config::InvokerConfig;

#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("Transcription process failed: {0}")]
    Process(String),
    #[error("Failed to parse output from transcription script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("No transcription output from script")]
    EmptyOutput,
}

/// Run the transcription script to completion and parse its JSON output.
///
/// The child inherits the full parent environment plus the configured
/// overrides, and both output streams are captured. Completes exactly once;
/// there is no timeout, so a hung script blocks until it exits.
///
/// Non-benign stderr from a successful run is logged as a warning but never
/// changes the result.
pub async fn transcribe(config: &InvokerConfig) -> Result<Value, TranscribeError> {
    info!(
        "Invoking transcription script: {} {}",
        config.program,
        config.script.display()
    );

    let output = Command::new(&config.program)
        .arg(&config.script)
        .envs(
            config
                .env_overrides
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        )
        .output()
        .await
        .map_err(|e| {
            TranscribeError::Process(format!("Failed to spawn {}: {}", config.program, e))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TranscribeError::Process(format!(
            "Script exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if let Some(warning) = relevant_warning(&stderr) {
        warn!("Warning from transcription script: {}", warning);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_payload(&stdout)
}

/// Run the script and extract the transcribed text from the stock payload.
///
/// The stock script prints `{"transcription": "<text>"}`; a payload missing
/// that field is reported as a parse failure.
pub async fn transcribe_text(config: &InvokerConfig) -> Result<String, TranscribeError> {
    let value = transcribe(config).await?;
    let payload: Transcription = serde_json::from_value(value)?;
    Ok(payload.transcription)
}
