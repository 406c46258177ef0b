//! Interpretation of the transcription script's output streams.

use serde_json::Value;

use super::invoke::TranscribeError;

/// Substring identifying known-benign library chatter on stderr.
/// Vosk prints model initialization notices there on every run.
const BENIGN_STDERR_MARKER: &str = "VoskAPI";

/// Payload the stock transcription script prints on success
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Transcription {
    /// The transcribed text
    pub transcription: String,
}

/// Extract the warning-worthy portion of the script's stderr.
///
/// Returns `None` when stderr is blank or contains only known-benign
/// library chatter. Anything else is surfaced for logging, never as
/// an error.
pub(super) fn relevant_warning(stderr: &str) -> Option<&str> {
    let trimmed = stderr.trim();
    if trimmed.is_empty() || trimmed.contains(BENIGN_STDERR_MARKER) {
        return None;
    }
    Some(trimmed)
}

/// Parse the script's stdout into a JSON payload.
///
/// Whitespace-only output is reported distinctly from malformed output.
pub(super) fn parse_payload(stdout: &str) -> Result<Value, TranscribeError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Err(TranscribeError::EmptyOutput);
    }

    Ok(serde_json::from_str(trimmed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_valid_json() {
        let value = parse_payload("{\"text\":\"hello world\"}\n").unwrap();
        assert_eq!(value, serde_json::json!({"text": "hello world"}));
    }

    #[test]
    fn test_parse_payload_empty_is_distinct() {
        assert!(matches!(
            parse_payload(""),
            Err(TranscribeError::EmptyOutput)
        ));
        assert!(matches!(
            parse_payload("   \n\t  "),
            Err(TranscribeError::EmptyOutput)
        ));
    }

    #[test]
    fn test_parse_payload_malformed() {
        assert!(matches!(
            parse_payload("not-json"),
            Err(TranscribeError::Parse(_))
        ));
    }

    #[test]
    fn test_relevant_warning_skips_blank_stderr() {
        assert_eq!(relevant_warning(""), None);
        assert_eq!(relevant_warning("  \n "), None);
    }

    #[test]
    fn test_relevant_warning_skips_benign_marker() {
        let stderr = "LOG (VoskAPI:ReadDataFiles():model.cc:213) Decoding params\n";
        assert_eq!(relevant_warning(stderr), None);
    }

    #[test]
    fn test_relevant_warning_surfaces_other_text() {
        let stderr = "UserWarning: FP16 is not supported on CPU\n";
        assert_eq!(
            relevant_warning(stderr),
            Some("UserWarning: FP16 is not supported on CPU")
        );
    }
}
