use super::{Transcriber, Transcription, TranscriptSegment};
use crate::{Result, StudioError};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::process::Command;

/// Speech-to-text via the Whisper CLI (openai-whisper)
///
/// Invokes the `whisper` binary as a subprocess, asking it to write JSON
/// output into a temporary directory, then parses the segments back out.
pub struct WhisperCliTranscriber {
    binary: String,
    language: Option<String>,
}

/// JSON shape produced by `whisper --output_format json`
#[derive(Debug, Deserialize)]
struct WhisperOutput {
    text: String,
    segments: Vec<WhisperSegment>,
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WhisperSegment {
    start: f64,
    end: f64,
    text: String,
}

impl WhisperCliTranscriber {
    pub fn new(binary: impl Into<String>, language: Option<String>) -> Self {
        Self {
            binary: binary.into(),
            language,
        }
    }

    /// Locate the JSON file Whisper wrote for the given input
    fn json_output_path(output_dir: &Path, media: &Path) -> PathBuf {
        let stem = media
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("transcript");
        output_dir.join(format!("{stem}.json"))
    }
}

/// Parse Whisper's JSON output into a `Transcription`
pub fn parse_whisper_json(content: &str) -> Result<Transcription> {
    let output: WhisperOutput = serde_json::from_str(content)
        .map_err(|e| StudioError::TranscriptionFailed(format!("unexpected Whisper output: {e}")))?;

    let segments = output
        .segments
        .into_iter()
        .map(|s| TranscriptSegment {
            start: s.start,
            end: s.end,
            text: s.text,
        })
        .collect();

    Ok(Transcription {
        text: output.text,
        segments,
        language: output.language,
    })
}

#[async_trait]
impl Transcriber for WhisperCliTranscriber {
    async fn transcribe(&self, media: &Path, model: &str) -> Result<Transcription> {
        if !media.exists() {
            anyhow::bail!("Media file does not exist: {}", media.display());
        }

        let output_dir = TempDir::new()?;

        let mut cmd = Command::new(&self.binary);
        cmd.arg(media)
            .args(["--model", model])
            .args(["--output_format", "json"])
            .arg("--output_dir")
            .arg(output_dir.path())
            .args(["--fp16", "False"])
            .args(["--verbose", "False"]);

        if let Some(lang) = &self.language {
            cmd.args(["--language", lang]);
        }

        tracing::info!(
            "Transcribing {} with Whisper model '{}'",
            media.display(),
            model
        );

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StudioError::TranscriberUnavailable(format!(
                    "'{}' not found on PATH. Install openai-whisper.",
                    self.binary
                ))
            } else {
                StudioError::TranscriptionFailed(e.to_string())
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(
                StudioError::TranscriptionFailed(stderr.trim().to_string()).into(),
            );
        }

        let json_path = Self::json_output_path(output_dir.path(), media);
        let content = fs_err::read_to_string(&json_path).map_err(|e| {
            StudioError::TranscriptionFailed(format!(
                "Whisper produced no JSON output at {}: {e}",
                json_path.display()
            ))
        })?;

        let transcription = parse_whisper_json(&content)?;
        tracing::info!(
            "Transcribed {} segments ({} chars)",
            transcription.segments.len(),
            transcription.text.len()
        );

        Ok(transcription)
    }

    fn tool_name(&self) -> &'static str {
        "Whisper"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whisper_json() {
        let content = r#"{
            "text": " Hello world. This is a test.",
            "segments": [
                {"id": 0, "start": 0.0, "end": 2.5, "text": " Hello world."},
                {"id": 1, "start": 2.5, "end": 5.0, "text": " This is a test."}
            ],
            "language": "en"
        }"#;

        let result = parse_whisper_json(content).unwrap();
        assert_eq!(result.text, " Hello world. This is a test.");
        assert_eq!(result.segments.len(), 2);
        assert_eq!(result.segments[0].start, 0.0);
        assert_eq!(result.segments[1].end, 5.0);
        assert_eq!(result.language.as_deref(), Some("en"));
    }

    #[test]
    fn test_parse_whisper_json_rejects_garbage() {
        assert!(parse_whisper_json("not json").is_err());
    }

    #[test]
    fn test_json_output_path_uses_file_stem() {
        let path = WhisperCliTranscriber::json_output_path(
            Path::new("/tmp/out"),
            Path::new("/videos/my talk.mp4"),
        );
        assert_eq!(path, PathBuf::from("/tmp/out/my talk.json"));
    }
}
