use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wingman_core::error::GenerateError;
use wingman_core::ports::ReplyModel;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// `timeout` bounds the whole round trip so a hung request cannot wedge
    /// the event loop indefinitely.
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE}/{}:generateContent", self.model)
    }
}

#[async_trait]
impl ReplyModel for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
        if self.api_key.is_empty() {
            return Err(GenerateError::Auth);
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "requesting completion");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerateError::Network(e.to_string()))?;

        match response.status().as_u16() {
            429 => return Err(GenerateError::RateLimited),
            401 | 403 => return Err(GenerateError::Auth),
            _ => {}
        }
        if !response.status().is_success() {
            return Err(GenerateError::Api(format!("HTTP {}", response.status())));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::Api(format!("unreadable response: {e}")))?;

        Ok(completion_text(&body))
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Text of the first candidate, trimmed. Empty when the model returned no
/// candidates or no text parts; callers treat that as "no suggestion".
fn completion_text(response: &GenerateContentResponse) -> String {
    let Some(content) = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
    else {
        return String::new();
    };

    content
        .parts
        .iter()
        .map(|part| part.text.as_str())
        .collect::<Vec<_>>()
        .join("")
        .trim()
        .to_string()
}
