use std::path::PathBuf;

/// Configuration for launching the external transcription script.
///
/// The child process inherits the full parent environment; `env_overrides`
/// entries are applied on top of it. The default override forces UTF-8 text
/// decoding on the child's streams so the JSON output survives any locale.
#[derive(Debug, Clone)]
pub struct InvokerConfig {
    /// Interpreter used to run the script
    pub program: String,
    /// Path to the transcription script
    pub script: PathBuf,
    /// Environment entries applied on top of the inherited environment
    pub env_overrides: Vec<(String, String)>,
}

impl Default for InvokerConfig {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
            script: PathBuf::from("transcribe.py"),
            env_overrides: vec![("PYTHONIOENCODING".to_string(), "utf-8".to_string())],
        }
    }
}

impl InvokerConfig {
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_script(mut self, script: impl Into<PathBuf>) -> Self {
        self.script = script.into();
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_overrides.push((key.into(), value.into()));
        self
    }
}
