mod invoke;
mod output;

pub use invoke::{TranscribeError, transcribe, transcribe_text};
pub use output::Transcription;
