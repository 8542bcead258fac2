use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod whisper;

pub use whisper::WhisperCliTranscriber;

use crate::Result;

/// A timed span of transcribed speech
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Start time in seconds
    pub start: f64,

    /// End time in seconds
    pub end: f64,

    /// Segment text
    pub text: String,
}

/// Full transcription of a media file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcription {
    /// The complete transcript text
    pub text: String,

    /// Ordered timed segments
    pub segments: Vec<TranscriptSegment>,

    /// Detected or requested language, if reported
    pub language: Option<String>,
}

/// Trait for speech-to-text collaborators
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe a media file into timed segments and a full transcript
    async fn transcribe(&self, media: &Path, model: &str) -> Result<Transcription>;

    /// Name of the speech-to-text tool for display and diagnostics
    fn tool_name(&self) -> &'static str;
}
