use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::transcribe::TranscriptSegment;
use crate::StudioError;

/// Default session file in the working directory
pub const DEFAULT_SESSION_FILE: &str = "viralspark.session.json";

/// Which part of the studio flow the session is in
///
/// A session starts in `Input` and moves to `Create` only once content has
/// been analyzed. Post, caption, and clip commands require `Create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Input,
    Create,
}

/// Everything one analysis produces, applied to the session in one step
#[derive(Debug, Clone)]
pub struct AnalyzedContent {
    pub transcript: String,
    pub segments: Vec<TranscriptSegment>,
    pub summary: String,
    pub media_path: Option<PathBuf>,
}

/// Per-session state, persisted between command invocations
///
/// This is the explicit counterpart of a UI framework's per-session key-value
/// store: one transcript, one summary, generated posts keyed by platform, and
/// generated clip paths keyed by highlight index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub stage: Stage,

    pub transcript: String,

    pub segments: Vec<TranscriptSegment>,

    pub summary: String,

    /// Generated posts keyed by platform display name
    pub generated: BTreeMap<String, String>,

    /// Generated clip paths keyed by highlight index
    pub clips: BTreeMap<usize, PathBuf>,

    /// Source media file, when the session came from a transcription
    pub media_path: Option<PathBuf>,

    pub created_at: DateTime<Utc>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            stage: Stage::Input,
            transcript: String::new(),
            segments: Vec::new(),
            summary: String::new(),
            generated: BTreeMap::new(),
            clips: BTreeMap::new(),
            media_path: None,
            created_at: Utc::now(),
        }
    }
}

impl Session {
    /// Load a session from file, or start a fresh one if the file is absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs_err::read_to_string(path)
            .with_context(|| format!("Failed to read session file {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse session file {}", path.display()))
    }

    /// Save the session to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize session")?;

        fs_err::write(path, content)
            .with_context(|| format!("Failed to write session file {}", path.display()))?;

        Ok(())
    }

    /// Delete the session file, discarding all analyzed content
    pub fn reset(path: &Path) -> Result<()> {
        if path.exists() {
            fs_err::remove_file(path)
                .with_context(|| format!("Failed to remove session file {}", path.display()))?;
        }
        Ok(())
    }

    /// Apply a completed analysis, moving the session to the Create stage
    pub fn complete_analysis(&mut self, content: AnalyzedContent) -> Result<()> {
        if content.transcript.trim().is_empty() {
            anyhow::bail!("Analysis produced an empty transcript");
        }

        self.transcript = content.transcript;
        self.segments = content.segments;
        self.summary = content.summary;
        self.media_path = content.media_path;
        self.generated.clear();
        self.clips.clear();
        self.stage = Stage::Create;

        Ok(())
    }

    /// Ensure the session has analyzed content before a Create-stage command
    pub fn require_create(&self) -> Result<()> {
        if self.stage != Stage::Create {
            return Err(StudioError::NothingAnalyzed(
                "run `viralspark analyze` with a media file or text first".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// True when the session came from a media file (has timed segments)
    pub fn has_segments(&self) -> bool {
        !self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzed() -> AnalyzedContent {
        AnalyzedContent {
            transcript: "hello world".to_string(),
            segments: vec![TranscriptSegment {
                start: 0.0,
                end: 2.0,
                text: "hello world".to_string(),
            }],
            summary: "a greeting".to_string(),
            media_path: Some(PathBuf::from("talk.mp4")),
        }
    }

    #[test]
    fn test_new_session_starts_in_input_stage() {
        let session = Session::default();
        assert_eq!(session.stage, Stage::Input);
        assert!(session.require_create().is_err());
    }

    #[test]
    fn test_complete_analysis_moves_to_create() {
        let mut session = Session::default();
        session.complete_analysis(analyzed()).unwrap();

        assert_eq!(session.stage, Stage::Create);
        assert!(session.require_create().is_ok());
        assert!(session.has_segments());
    }

    #[test]
    fn test_empty_transcript_rejected_and_stage_unchanged() {
        let mut session = Session::default();
        let result = session.complete_analysis(AnalyzedContent {
            transcript: "   ".to_string(),
            segments: Vec::new(),
            summary: String::new(),
            media_path: None,
        });

        assert!(result.is_err());
        assert_eq!(session.stage, Stage::Input);
    }

    #[test]
    fn test_reanalysis_clears_generated_content() {
        let mut session = Session::default();
        session.complete_analysis(analyzed()).unwrap();
        session
            .generated
            .insert("Twitter".to_string(), "old post".to_string());
        session.clips.insert(0, PathBuf::from("clip.mp4"));

        session.complete_analysis(analyzed()).unwrap();
        assert!(session.generated.is_empty());
        assert!(session.clips.is_empty());
    }

    #[test]
    fn test_session_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = Session::default();
        session.complete_analysis(analyzed()).unwrap();
        session
            .generated
            .insert("LinkedIn".to_string(), "a post".to_string());
        session.save(&path).unwrap();

        let loaded = Session::load(&path).unwrap();
        assert_eq!(loaded.stage, Stage::Create);
        assert_eq!(loaded.transcript, "hello world");
        assert_eq!(loaded.generated["LinkedIn"], "a post");
    }

    #[test]
    fn test_load_missing_file_gives_fresh_session() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(session.stage, Stage::Input);
    }

    #[test]
    fn test_reset_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        Session::default().save(&path).unwrap();
        assert!(path.exists());

        Session::reset(&path).unwrap();
        assert!(!path.exists());

        // Resetting an absent session is fine too.
        Session::reset(&path).unwrap();
    }
}
