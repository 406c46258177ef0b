//! Bridge to an external transcription script.
//!
//! Spawns the script as a child process, captures its JSON stdout and its
//! diagnostic stderr, and returns the parsed result. The transcription work
//! itself (audio handling, model loading, recognition) lives entirely in the
//! script; this crate only launches it and interprets what comes back.

pub mod config;
pub mod transcribe;

pub use config::InvokerConfig;
pub use transcribe::{TranscribeError, Transcription, transcribe, transcribe_text};
