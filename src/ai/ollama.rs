use super::TextGenerator;
use crate::{Result, StudioError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Local language model via an Ollama server
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .http
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    StudioError::LlmUnreachable(format!(
                        "Local model server unreachable at {} (is Ollama running?)",
                        self.base_url
                    ))
                } else {
                    StudioError::LlmFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StudioError::LlmFailed(format!(
                "Ollama returned HTTP {status}: {body}"
            ))
            .into());
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| StudioError::LlmFailed(format!("unexpected Ollama response: {e}")))?;

        tracing::debug!("Ollama returned {} chars", parsed.response.len());
        Ok(parsed.response)
    }

    fn backend_name(&self) -> &'static str {
        "Ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_normalizes_trailing_slash() {
        let client = OllamaClient::new("http://localhost:11434/", "llama3");
        assert_eq!(client.endpoint(), "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest {
            model: "llama3",
            prompt: "hi",
            stream: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3");
        assert_eq!(json["stream"], false);
    }
}
