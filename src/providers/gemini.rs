// Google Gemini API client
//
// Gemini wraps message content in a contents/parts structure and keys
// requests with a query parameter rather than a header.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::ReviewModel;
use crate::config::constants::REQUEST_TIMEOUT_SECS;
use crate::errors::{ReviewError, Result};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini API client
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(api_key: String, model: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                ReviewError::Configuration(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url: GEMINI_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API root (tests use a local mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn to_gemini_request(&self, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }

    fn from_gemini_response(&self, response: GeminiResponse) -> Result<String> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ReviewError::Upstream("Gemini returned no candidates".to_string()))?;

        // A candidate may split its text across several parts
        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();

        if text.is_empty() {
            return Err(ReviewError::Upstream(
                "Gemini returned an empty response".to_string(),
            ));
        }

        Ok(text)
    }
}

#[async_trait]
impl ReviewModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = self.to_gemini_request(prompt);

        tracing::debug!(model = %self.model, "Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ReviewError::Upstream(format!("failed to send request to Gemini API: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Gemini API request failed");
            return Err(ReviewError::Upstream(format!(
                "Gemini API request failed: status {status}, body: {error_body}"
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            ReviewError::Upstream(format!("failed to parse Gemini API response: {e}"))
        })?;

        tracing::debug!("Received Gemini response");

        self.from_gemini_response(gemini_response)
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn default_model(&self) -> &str {
        &self.model
    }
}

// Gemini API types

#[derive(Debug, Clone, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiContent {
    role: String, // "user" or "model"
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
struct GeminiCandidate {
    content: GeminiContent,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}
