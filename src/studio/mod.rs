use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

use crate::ai::{self, TextGenerator};
use crate::cli::{CaptionFormat, Platform, TargetLanguage};
use crate::config::Config;
use crate::media;
use crate::scoring;
use crate::session::{AnalyzedContent, Session};
use crate::subtitles;
use crate::transcribe::{Transcriber, TranscriptSegment, WhisperCliTranscriber};
use crate::utils;

/// One generated post with its engagement score
#[derive(Debug, Clone)]
pub struct GeneratedPost {
    pub platform: Platform,
    pub text: String,
    pub score: u8,
    pub upgraded: bool,
}

/// A clip candidate anchored on a transcript segment
#[derive(Debug, Clone)]
pub struct Highlight {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub preview: String,
}

/// Result of cutting and subtitling one clip
#[derive(Debug, Clone)]
pub struct ClipOutcome {
    pub path: PathBuf,
    pub subtitle_text: String,
}

/// List clip candidates: the first `max` segments, each opening a
/// fixed-length window into the transcript
pub fn highlights(segments: &[TranscriptSegment], length: f64, max: usize) -> Vec<Highlight> {
    segments
        .iter()
        .take(max)
        .enumerate()
        .map(|(index, seg)| {
            let start = seg.start;
            let end = start + length;
            let preview = subtitles::segments_overlapping(segments, start, end)
                .iter()
                .map(|s| s.text.trim().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            Highlight {
                index,
                start,
                end,
                preview,
            }
        })
        .collect()
}

/// Main studio pipeline
///
/// Owns the configured collaborators and a temp directory for intermediate
/// artifacts (raw clips, subtitle files).
pub struct Studio {
    config: Config,
    llm: Box<dyn TextGenerator>,
    transcriber: WhisperCliTranscriber,
    temp_dir: TempDir,
    quiet: bool,
}

impl Studio {
    /// Create a new studio pipeline from configuration
    pub fn new(config: Config, quiet: bool) -> Result<Self> {
        let llm = ai::client_from_config(&config)?;
        let transcriber = WhisperCliTranscriber::new(
            config.whisper.binary.clone(),
            config.whisper.language.clone(),
        );

        let temp_dir = match &config.app.temp_dir {
            Some(dir) => {
                fs_err::create_dir_all(dir)?;
                TempDir::new_in(dir)
            }
            None => TempDir::new(),
        }
        .context("Failed to create temporary directory")?;

        Ok(Self {
            config,
            llm,
            transcriber,
            temp_dir,
            quiet,
        })
    }

    fn spinner(&self, message: &str) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }
        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        progress.set_message(message.to_string());
        progress.enable_steady_tick(Duration::from_millis(120));
        progress
    }

    /// Step 1 + 2 for a media file: transcribe, then summarize
    pub async fn analyze_media(
        &self,
        media_path: &Path,
        model_override: Option<&str>,
    ) -> Result<AnalyzedContent> {
        media::validate_media_file(media_path).await?;

        let info = media::probe(media_path).await?;
        if !info.has_audio {
            anyhow::bail!(
                "File does not contain any audio streams: {}",
                media_path.display()
            );
        }
        if let Some(duration) = info.duration {
            tracing::info!(
                "Analyzing '{}' ({})",
                info.title,
                utils::format_duration(duration)
            );
        }

        let model = model_override.unwrap_or(&self.config.whisper.model);

        let progress = self.spinner("Step 1/2: Transcribing...");
        let transcription = self.transcriber.transcribe(media_path, model).await?;
        progress.finish_with_message(format!(
            "Transcribed {} segments",
            transcription.segments.len()
        ));

        let progress = self.spinner("Step 2/2: Summarizing...");
        let summary = ai::summarize(self.llm.as_ref(), &transcription.text).await?;
        progress.finish_with_message("Summary ready");

        Ok(AnalyzedContent {
            transcript: transcription.text.trim().to_string(),
            segments: transcription.segments,
            summary,
            media_path: Some(media_path.to_path_buf()),
        })
    }

    /// Analysis for pasted text: the text becomes the transcript
    pub async fn analyze_text(&self, text: &str) -> Result<AnalyzedContent> {
        let progress = self.spinner("Summarizing...");
        let summary = ai::summarize(self.llm.as_ref(), text).await?;
        progress.finish_with_message("Summary ready");

        Ok(AnalyzedContent {
            transcript: text.trim().to_string(),
            segments: Vec::new(),
            summary,
            media_path: None,
        })
    }

    /// Generate posts for the requested platforms
    ///
    /// A failure on one platform becomes a user-visible message in that
    /// platform's slot rather than aborting the remaining platforms.
    pub async fn generate_posts(
        &self,
        summary: &str,
        platform: Platform,
        tone: &str,
        language: TargetLanguage,
        auto_upgrade: bool,
    ) -> Result<Vec<GeneratedPost>> {
        let mut posts = Vec::new();

        for platform in platform.expand() {
            let progress = self.spinner(&format!("Generating {} post...", platform.display_name()));

            let text = match self.generate_one_post(summary, platform, tone, language).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!("Post generation for {} failed: {e:#}", platform.display_name());
                    format!("An error occurred while generating the post: {e:#}")
                }
            };

            let mut post = GeneratedPost {
                platform,
                score: scoring::engagement_score(&text),
                text,
                upgraded: false,
            };

            if auto_upgrade && post.score < scoring::VIRAL_THRESHOLD {
                progress.set_message(format!("Enhancing {} post...", platform.display_name()));
                match ai::upgrade_post(self.llm.as_ref(), &post.text, platform, tone, language).await
                {
                    Ok(improved) => {
                        post.score = scoring::engagement_score(&improved);
                        post.text = improved;
                        post.upgraded = true;
                    }
                    Err(e) => {
                        tracing::warn!("Auto-upgrade for {} failed: {e:#}", platform.display_name());
                    }
                }
            }

            progress.finish_with_message(format!("{} post ready", platform.display_name()));
            posts.push(post);
        }

        Ok(posts)
    }

    async fn generate_one_post(
        &self,
        summary: &str,
        platform: Platform,
        tone: &str,
        language: TargetLanguage,
    ) -> Result<String> {
        let base = ai::platform_post(self.llm.as_ref(), summary, platform, tone).await?;
        ai::translate(self.llm.as_ref(), &base, language).await
    }

    /// Translate the full transcript or article
    pub async fn translate_transcript(
        &self,
        text: &str,
        language: TargetLanguage,
    ) -> Result<String> {
        let progress = self.spinner(&format!("Translating to {language}..."));
        let translated = ai::translate(self.llm.as_ref(), text, language).await?;
        progress.finish_with_message("Translation ready");
        Ok(translated)
    }

    /// Build a subtitle file from the session's segments
    pub async fn render_captions(
        &self,
        segments: &[TranscriptSegment],
        format: CaptionFormat,
        language: TargetLanguage,
    ) -> Result<String> {
        let progress = self.spinner(&format!("Generating {format} captions..."));
        let translated = subtitles::translate_segments(self.llm.as_ref(), segments, language).await?;
        let font = self.subtitle_font();
        let rendered = subtitles::render(format, &translated, font.as_deref());
        progress.finish_with_message("Captions ready");
        Ok(rendered)
    }

    /// Cut one highlight clip and burn subtitles into it
    pub async fn generate_clip(
        &self,
        session: &Session,
        index: usize,
        length: f64,
        language: TargetLanguage,
        output: Option<PathBuf>,
    ) -> Result<ClipOutcome> {
        let media_path = session.media_path.as_ref().ok_or_else(|| {
            anyhow::anyhow!("Session was analyzed from pasted text; there is no media to cut")
        })?;

        let anchor = session.segments.get(index).ok_or_else(|| {
            anyhow::anyhow!(
                "No highlight at index {index} (transcript has {} segments)",
                session.segments.len()
            )
        })?;

        let start = anchor.start;
        let end = start + length;
        let clip_segments = subtitles::segments_overlapping(&session.segments, start, end);

        let raw_path = self.temp_dir.path().join(format!("raw_clip_{}.mp4", index + 1));
        let ass_path = self.temp_dir.path().join(format!("subs_{}.ass", index + 1));
        let title = media_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("clip");
        let final_path = match output {
            Some(path) => path,
            None => std::env::current_dir()?.join(utils::unique_clip_filename(title, index)),
        };

        let progress = self.spinner(&format!("Cutting clip {}...", index + 1));
        media::cut_clip(media_path, start, length, &raw_path).await?;

        progress.set_message("Preparing subtitles...");
        let windowed = subtitles::rebase_into_window(&clip_segments, start, length);
        let translated =
            subtitles::translate_segments(self.llm.as_ref(), &windowed, language).await?;

        let subtitle_text = translated
            .iter()
            .map(|s| s.text.trim().to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let font = self.subtitle_font();
        let script = subtitles::ass::render(&translated, font.as_deref());
        fs_err::write(&ass_path, script)?;

        progress.set_message("Burning subtitles...");
        media::burn_subtitles(&raw_path, &ass_path, &final_path).await?;

        if self.config.app.keep_raw_clips {
            let kept = std::env::current_dir()?.join(format!("raw_clip_{}.mp4", index + 1));
            fs_err::copy(&raw_path, &kept)?;
            tracing::info!("Kept raw clip at {}", kept.display());
        }

        progress.finish_with_message(format!("Clip {} ready", index + 1));

        Ok(ClipOutcome {
            path: final_path,
            subtitle_text,
        })
    }

    /// Resolve the font file referenced by styled subtitles, if configured
    fn subtitle_font(&self) -> Option<PathBuf> {
        let font = self
            .config
            .app
            .fonts_dir
            .as_ref()
            .map(|dir| dir.join("Roboto-Regular.ttf"))?;

        if !font.exists() {
            tracing::warn!(
                "Font file not found at {}. Subtitles might not render correctly.",
                font.display()
            );
        }
        Some(font)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: f64, end: f64, text: &str) -> TranscriptSegment {
        TranscriptSegment {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_highlights_anchor_on_first_segments() {
        let segments = vec![
            seg(0.0, 4.0, "intro"),
            seg(4.0, 9.0, "the main point"),
            seg(9.0, 14.0, "wrap up"),
        ];

        let hits = highlights(&segments, 10.0, 2);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].start, 0.0);
        assert_eq!(hits[0].end, 10.0);
        // The 10 second window starting at the first segment covers all three.
        assert_eq!(hits[0].preview, "intro the main point wrap up");
        assert_eq!(hits[1].start, 4.0);
    }

    #[test]
    fn test_highlights_capped_by_max() {
        let segments = vec![seg(0.0, 2.0, "a"), seg(2.0, 4.0, "b"), seg(4.0, 6.0, "c")];
        assert_eq!(highlights(&segments, 5.0, 1).len(), 1);
        assert_eq!(highlights(&segments, 5.0, 10).len(), 3);
    }

    #[test]
    fn test_highlights_empty_transcript() {
        assert!(highlights(&[], 15.0, 5).is_empty());
    }
}
