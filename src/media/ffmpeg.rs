//! ffmpeg invocations for clip cutting and subtitle burning.
//!
//! Both operations try a fast stream-copy variant first and fall back to a
//! single re-encode attempt when ffmpeg exits non-zero. Argument lists are
//! built by plain functions so the exact invocations stay testable.

use crate::{Result, StudioError};
use std::path::Path;
use tokio::process::Command;

/// Arguments for trimming a clip with stream copy
pub fn cut_args(input: &Path, start: f64, duration: f64, out: &Path) -> Vec<String> {
    vec![
        "-y".into(),
        "-ss".into(),
        start.to_string(),
        "-i".into(),
        input.to_string_lossy().into_owned(),
        "-t".into(),
        duration.to_string(),
        "-c".into(),
        "copy".into(),
        out.to_string_lossy().into_owned(),
    ]
}

/// Fallback arguments for trimming with a full re-encode
pub fn cut_fallback_args(input: &Path, start: f64, duration: f64, out: &Path) -> Vec<String> {
    vec![
        "-y".into(),
        "-ss".into(),
        start.to_string(),
        "-i".into(),
        input.to_string_lossy().into_owned(),
        "-t".into(),
        duration.to_string(),
        "-c:v".into(),
        "libx264".into(),
        "-c:a".into(),
        "aac".into(),
        "-preset".into(),
        "veryfast".into(),
        out.to_string_lossy().into_owned(),
    ]
}

/// Escape a subtitle file path for use inside an ffmpeg filter expression
pub fn escape_filter_path(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "/")
        .replace(':', "\\:")
}

/// Arguments for burning a styled subtitle file into a clip
pub fn burn_args(input: &Path, subtitles: &Path, out: &Path, reencode_audio: bool) -> Vec<String> {
    let vf = format!("subtitles=filename='{}'", escape_filter_path(subtitles));
    vec![
        "-y".into(),
        "-i".into(),
        input.to_string_lossy().into_owned(),
        "-vf".into(),
        vf,
        "-c:a".into(),
        if reencode_audio { "aac" } else { "copy" }.into(),
        out.to_string_lossy().into_owned(),
    ]
}

/// Run ffmpeg with the given arguments, returning stderr on failure
async fn run_ffmpeg(args: &[String]) -> Result<std::result::Result<(), String>> {
    tracing::debug!("Running ffmpeg {}", args.join(" "));

    let output = Command::new("ffmpeg").args(args).output().await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StudioError::MediaToolFailed("ffmpeg not found on PATH".to_string())
        } else {
            StudioError::MediaToolFailed(e.to_string())
        }
    })?;

    if output.status.success() {
        Ok(Ok(()))
    } else {
        Ok(Err(String::from_utf8_lossy(&output.stderr).into_owned()))
    }
}

/// Cut a clip out of the source media
///
/// Tries a fast stream copy first; on failure retries once with a re-encode.
pub async fn cut_clip(input: &Path, start: f64, duration: f64, out: &Path) -> Result<()> {
    if let Err(stderr) = run_ffmpeg(&cut_args(input, start, duration, out)).await? {
        tracing::warn!("Stream copy failed, re-encoding: {}", stderr.trim());

        if let Err(stderr) = run_ffmpeg(&cut_fallback_args(input, start, duration, out)).await? {
            return Err(StudioError::MediaToolFailed(format!(
                "clip re-encode failed: {}",
                stderr.trim()
            ))
            .into());
        }
    }

    Ok(())
}

/// Burn a styled subtitle file into a clip
///
/// Copies the audio stream first; on failure retries once re-encoding audio.
pub async fn burn_subtitles(input: &Path, subtitles: &Path, out: &Path) -> Result<()> {
    if let Err(stderr) = run_ffmpeg(&burn_args(input, subtitles, out, false)).await? {
        tracing::warn!("Audio copy failed, trying re-encode: {}", stderr.trim());

        if let Err(stderr) = run_ffmpeg(&burn_args(input, subtitles, out, true)).await? {
            return Err(StudioError::MediaToolFailed(format!(
                "subtitle burn failed: {}",
                stderr.trim()
            ))
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cut_args_stream_copy() {
        let args = cut_args(
            &PathBuf::from("in.mp4"),
            12.5,
            15.0,
            &PathBuf::from("out.mp4"),
        );
        assert_eq!(
            args,
            vec!["-y", "-ss", "12.5", "-i", "in.mp4", "-t", "15", "-c", "copy", "out.mp4"]
        );
    }

    #[test]
    fn test_cut_fallback_reencodes() {
        let args = cut_fallback_args(
            &PathBuf::from("in.mp4"),
            0.0,
            10.0,
            &PathBuf::from("out.mp4"),
        );
        assert!(args.contains(&"libx264".to_string()));
        assert!(args.contains(&"veryfast".to_string()));
    }

    #[test]
    fn test_escape_filter_path() {
        assert_eq!(
            escape_filter_path(&PathBuf::from("C:\\temp\\subs.ass")),
            "C\\:/temp/subs.ass"
        );
        assert_eq!(
            escape_filter_path(&PathBuf::from("/tmp/subs.ass")),
            "/tmp/subs.ass"
        );
    }

    #[test]
    fn test_burn_args_audio_copy_then_reencode() {
        let copy = burn_args(
            &PathBuf::from("raw.mp4"),
            &PathBuf::from("/tmp/subs.ass"),
            &PathBuf::from("final.mp4"),
            false,
        );
        assert!(copy.contains(&"subtitles=filename='/tmp/subs.ass'".to_string()));
        assert!(copy.contains(&"copy".to_string()));

        let reencode = burn_args(
            &PathBuf::from("raw.mp4"),
            &PathBuf::from("/tmp/subs.ass"),
            &PathBuf::from("final.mp4"),
            true,
        );
        assert!(reencode.contains(&"aac".to_string()));
    }
}
