use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "viralspark",
    about = "ViralSpark - create once, publish everywhere",
    version,
    long_about = "A CLI studio for repurposing content. Analyze a video, audio file, or pasted text once, then generate platform-specific social posts, translated captions, and subtitled clips from it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Session file to read and write (defaults to viralspark.session.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub session: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a media file or pasted text (transcribe + summarize)
    Analyze {
        /// Video or audio file to transcribe (mp4, mov, wav, mp3, ...)
        #[arg(value_name = "MEDIA")]
        media: Option<PathBuf>,

        /// Pasted text to analyze instead of a media file
        #[arg(long, value_name = "TEXT", conflicts_with = "media")]
        text: Option<String>,

        /// Read the pasted text from a file
        #[arg(long, value_name = "FILE", conflicts_with_all = ["media", "text"])]
        text_file: Option<PathBuf>,

        /// Whisper model size to use (overrides config)
        #[arg(long, value_name = "SIZE")]
        model: Option<String>,
    },

    /// Generate a social media post from the analyzed content
    Post {
        /// Target platform
        #[arg(short, long, value_enum, default_value = "all")]
        platform: Platform,

        /// Tone preset or free-form brand voice instruction
        #[arg(short, long, value_name = "PRESET")]
        tone: Option<String>,

        /// Translate the generated post to this language
        #[arg(short, long, value_enum, default_value = "original")]
        language: TargetLanguage,

        /// Automatically rewrite posts that score below the viral threshold
        #[arg(long)]
        auto_upgrade: bool,
    },

    /// Translate the full transcript or article
    Translate {
        /// Target language
        #[arg(short, long, value_enum)]
        language: TargetLanguage,

        /// Output file path (prints to console if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Generate a subtitle file from the transcribed segments
    Captions {
        /// Subtitle format
        #[arg(short, long, value_enum, default_value = "srt")]
        format: CaptionFormat,

        /// Translate captions to this language
        #[arg(short, long, value_enum, default_value = "original")]
        language: TargetLanguage,

        /// Output file path (prints to console if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List auto-labeled clip candidates from the transcript
    Highlights {
        /// Clip length in seconds
        #[arg(short, long, default_value = "15")]
        length: f64,

        /// Maximum number of candidates to list
        #[arg(short, long, default_value = "5")]
        max: usize,
    },

    /// Cut a clip and burn subtitles into it
    Clip {
        /// Highlight index to cut (see the highlights command)
        #[arg(short, long)]
        index: usize,

        /// Clip length in seconds
        #[arg(short, long, default_value = "15")]
        length: f64,

        /// Translate the burned subtitles to this language
        #[arg(long, value_enum, default_value = "original")]
        language: TargetLanguage,

        /// Output file path for the final clip
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Score a post with the engagement heuristic
    Score {
        /// Text to score (reads stdin if not specified)
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },

    /// Show the current session (transcript, summary, posts, clips)
    Show,

    /// Discard the current session and start over
    Reset,

    /// Configure language model and transcription settings
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,
    },

    /// List supported target platforms
    Platforms,
}

/// Social platforms a post can be generated for
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Platform {
    Youtube,
    Tiktok,
    Twitter,
    Linkedin,
    /// Generate for every platform at once
    All,
}

impl Platform {
    /// Expand the `All` choice into the concrete platform list
    pub fn expand(self) -> Vec<Platform> {
        match self {
            Platform::All => vec![
                Platform::Youtube,
                Platform::Tiktok,
                Platform::Twitter,
                Platform::Linkedin,
            ],
            single => vec![single],
        }
    }

    /// Human-readable name used in prompts and output headers
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Tiktok => "TikTok",
            Platform::Twitter => "Twitter",
            Platform::Linkedin => "LinkedIn",
            Platform::All => "All Platforms",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Languages the language model can translate into
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetLanguage {
    /// Keep the source language unchanged
    Original,
    English,
    Spanish,
    French,
    German,
    Hindi,
    Chinese,
    Japanese,
    Arabic,
}

impl TargetLanguage {
    /// True when no translation should happen
    pub fn is_original(&self) -> bool {
        matches!(self, TargetLanguage::Original)
    }

    /// Language name as used inside translation prompts
    pub fn name(&self) -> &'static str {
        match self {
            TargetLanguage::Original => "Original",
            TargetLanguage::English => "English",
            TargetLanguage::Spanish => "Spanish",
            TargetLanguage::French => "French",
            TargetLanguage::German => "German",
            TargetLanguage::Hindi => "Hindi",
            TargetLanguage::Chinese => "Chinese",
            TargetLanguage::Japanese => "Japanese",
            TargetLanguage::Arabic => "Arabic",
        }
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Subtitle file formats
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptionFormat {
    /// Plain SRT subtitles with millisecond timestamps
    Srt,
    /// Styled ASS subtitles suitable for burning into video
    Ass,
}

impl std::fmt::Display for CaptionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptionFormat::Srt => write!(f, "srt"),
            CaptionFormat::Ass => write!(f, "ass"),
        }
    }
}
