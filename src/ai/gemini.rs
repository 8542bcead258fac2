use super::TextGenerator;
use crate::{Result, StudioError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Remote language model via the Gemini generateContent API
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    StudioError::LlmUnreachable(format!("Gemini API unreachable: {e}"))
                } else {
                    StudioError::LlmFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(StudioError::LlmFailed(format!(
                "Gemini API rejected the request ({status}). Check your API key."
            ))
            .into());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StudioError::LlmFailed(format!(
                "Gemini API returned HTTP {status}: {body}"
            ))
            .into());
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| StudioError::LlmFailed(format!("unexpected Gemini response: {e}")))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| StudioError::LlmFailed("Gemini returned no candidates".to_string()))?;

        tracing::debug!("Gemini returned {} chars", text.len());
        Ok(text)
    }

    fn backend_name(&self) -> &'static str {
        "Gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_includes_model_and_key() {
        let client = GeminiClient::new(
            "https://generativelanguage.googleapis.com/v1beta/",
            "gemini-1.5-flash",
            "secret".to_string(),
        );
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=secret"
        );
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "generated text"}], "role": "model"}}
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.candidates[0].content.parts[0].text, "generated text");
    }

    #[test]
    fn test_empty_response_parses() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
