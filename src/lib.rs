//! ViralSpark - turn one piece of content into many
//!
//! This library powers a CLI studio that transcribes a video or audio file (or
//! takes pasted text), summarizes it, and generates platform-specific social
//! media posts, translated captions, and subtitled clips. Speech-to-text,
//! text generation, and media manipulation are all delegated to external
//! collaborators (the Whisper CLI, a remote or local language model, and
//! ffmpeg/ffprobe).

pub mod ai;
pub mod cli;
pub mod config;
pub mod media;
pub mod scoring;
pub mod session;
pub mod studio;
pub mod subtitles;
pub mod transcribe;
pub mod utils;

pub use cli::{Cli, CaptionFormat, Commands, Platform, TargetLanguage};
pub use config::Config;
pub use session::{Session, Stage};
pub use studio::Studio;
pub use transcribe::{TranscriptSegment, Transcription};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to the studio's external collaborators
#[derive(thiserror::Error, Debug)]
pub enum StudioError {
    #[error("Speech-to-text tool not available: {0}")]
    TranscriberUnavailable(String),

    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    #[error("Language model unreachable: {0}")]
    LlmUnreachable(String),

    #[error("Language model request failed: {0}")]
    LlmFailed(String),

    #[error("Media tool invocation failed: {0}")]
    MediaToolFailed(String),

    #[error("Session has no analyzed content: {0}")]
    NothingAnalyzed(String),
}
