use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Language model configuration
    pub llm: LlmConfig,

    /// Speech-to-text configuration
    pub whisper: WhisperConfig,

    /// Application settings
    pub app: AppConfig,
}

/// Which language model backend handles text generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmBackend {
    /// Remote Gemini API
    Gemini,
    /// Local Ollama server
    Ollama,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Backend used for summarization, posts, and translation
    pub backend: LlmBackend,

    /// Gemini settings (used when backend = gemini)
    pub gemini: GeminiConfig,

    /// Ollama settings (used when backend = ollama)
    pub ollama: OllamaConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Model name
    pub model: String,

    /// Environment variable holding the API key
    pub api_key_env: String,

    /// API endpoint base URL
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Local server base URL
    pub base_url: String,

    /// Model name
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhisperConfig {
    /// Whisper CLI binary name or path
    pub binary: String,

    /// Model size name (tiny, base, small, medium, large)
    pub model: String,

    /// Language hint passed to Whisper (auto-detect if not set)
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Temporary directory for intermediate clips and subtitle files
    pub temp_dir: Option<PathBuf>,

    /// Keep raw (pre-subtitle) clips after generation
    pub keep_raw_clips: bool,

    /// Default tone preset for post generation
    pub default_tone: String,

    /// Directory containing fonts referenced by styled subtitles
    pub fonts_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                backend: LlmBackend::Gemini,
                gemini: GeminiConfig {
                    model: "gemini-1.5-flash".to_string(),
                    api_key_env: "GOOGLE_API_KEY".to_string(),
                    base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                },
                ollama: OllamaConfig {
                    base_url: "http://localhost:11434".to_string(),
                    model: "llama3".to_string(),
                },
            },
            whisper: WhisperConfig {
                binary: "whisper".to_string(),
                model: "base".to_string(),
                language: None,
            },
            app: AppConfig {
                temp_dir: None,
                keep_raw_clips: false,
                default_tone: "Witty, concise, emojis".to_string(),
                fonts_dir: None,
            },
        }
    }
}

impl Config {
    /// Load configuration from file or create default
    pub async fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = fs_err::read_to_string(&config_path)
                .context("Failed to read config file")?;

            let config: Config = serde_yaml::from_str(&content)
                .context("Failed to parse config file")?;

            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save().await?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub async fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs_err::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs_err::write(&config_path, content)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get configuration file path
    fn config_path() -> Result<PathBuf> {
        // First try current directory for easy testing
        let local_config = PathBuf::from("config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?;

        Ok(config_dir.join("viralspark").join("config.yaml"))
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.whisper.model.is_empty() {
            anyhow::bail!("Whisper model size must be configured");
        }

        match self.llm.backend {
            LlmBackend::Gemini => {
                if self.llm.gemini.model.is_empty() {
                    anyhow::bail!("Gemini model must be configured");
                }
                if self.llm.gemini.api_key_env.is_empty() {
                    anyhow::bail!("Gemini API key environment variable must be configured");
                }
            }
            LlmBackend::Ollama => {
                if self.llm.ollama.base_url.is_empty() {
                    anyhow::bail!("Ollama base URL must be configured");
                }
            }
        }

        Ok(())
    }

    /// Display current configuration
    pub fn display(&self) {
        println!("Current Configuration:");
        match self.llm.backend {
            LlmBackend::Gemini => {
                println!("  LLM Backend: Gemini (remote)");
                println!("  Gemini Model: {}", self.llm.gemini.model);
                println!("  API Key Env: {}", self.llm.gemini.api_key_env);
            }
            LlmBackend::Ollama => {
                println!("  LLM Backend: Ollama (local)");
                println!("  Ollama URL: {}", self.llm.ollama.base_url);
                println!("  Ollama Model: {}", self.llm.ollama.model);
            }
        }
        println!("  Whisper Binary: {}", self.whisper.binary);
        println!("  Whisper Model: {}", self.whisper.model);
        println!("  Default Tone: {}", self.app.default_tone);
        println!("  Keep Raw Clips: {}", self.app.keep_raw_clips);
    }

    /// Interactive configuration setup
    pub async fn interactive_setup(&self) -> Result<()> {
        println!("Interactive configuration setup coming soon!");
        println!("For now, please edit the config file manually:");
        println!("  {}", Self::config_path()?.display());
        Ok(())
    }

    /// Resolve the Gemini API key from the configured environment variable
    pub fn gemini_api_key(&self) -> Result<String> {
        std::env::var(&self.llm.gemini.api_key_env).with_context(|| {
            format!(
                "Gemini API key not found in environment variable {}",
                self.llm.gemini.api_key_env
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_whisper_model_rejected() {
        let mut config = Config::default();
        config.whisper.model = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_backend_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.llm.backend, LlmBackend::Gemini);
    }
}
