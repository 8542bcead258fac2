use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::process::Command;

pub mod ffmpeg;

pub use ffmpeg::{burn_subtitles, cut_clip};

/// Information about a media file, as reported by ffprobe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaInfo {
    /// Duration in seconds, if reported
    pub duration: Option<f64>,

    /// Whether the file contains at least one audio stream
    pub has_audio: bool,

    /// Title derived from the file name
    pub title: String,
}

/// Check that the file exists, is a file, and is non-empty
pub async fn validate_media_file(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File does not exist: {}", path.display());
    }

    if !path.is_file() {
        anyhow::bail!("Path is not a file: {}", path.display());
    }

    match fs::metadata(path).await {
        Ok(metadata) => {
            if metadata.len() == 0 {
                anyhow::bail!("File is empty: {}", path.display());
            }
        }
        Err(e) => {
            anyhow::bail!("Cannot access file {}: {}", path.display(), e);
        }
    }

    Ok(())
}

/// Inspect a media file with ffprobe
pub async fn probe(path: &Path) -> Result<MediaInfo> {
    let output = Command::new("ffprobe")
        .args([
            "-v", "quiet",
            "-print_format", "json",
            "-show_format",
            "-show_streams",
            &path.to_string_lossy(),
        ])
        .output()
        .await?;

    if !output.status.success() {
        let error = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("Failed to analyze file with ffprobe: {}", error);
    }

    let info: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    let duration = info["format"]["duration"]
        .as_str()
        .and_then(|d| d.parse::<f64>().ok());

    let title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Media File")
        .to_string();

    let empty_vec = vec![];
    let streams = info["streams"].as_array().unwrap_or(&empty_vec);
    let has_audio = streams
        .iter()
        .any(|stream| stream["codec_type"].as_str() == Some("audio"));

    Ok(MediaInfo {
        duration,
        has_audio,
        title,
    })
}
