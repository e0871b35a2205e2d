//! Generative Language API (Gemini) client

use reqwest::blocking::{Client, Request};
use serde::Deserialize;
use tracing::debug;

use super::ensure_success;
use crate::error::{ExpenseError, ExpenseResult};

/// Base URL of the Generative Language API
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Header carrying the API key, so it never appears in a URL
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Prompt sent by the `brain` command when none is given
pub const JEEVES_PROMPT: &str = "Give me a 1-sentence sarcastic but helpful tip for a \
                                 student who wants to save money but just bought 4 pairs \
                                 of luxury sneakers.";

/// Client for single-turn `generateContent` calls
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: GEMINI_API_BASE.to_string(),
            client: Client::new(),
        }
    }

    /// Create a client with the key from `GEMINI_API_KEY`
    pub fn from_env(model: impl Into<String>) -> ExpenseResult<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ExpenseError::Config(format!("{} is not set", API_KEY_VAR)))?;
        Ok(Self::new(api_key, model))
    }

    /// Point the client at a different API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full `generateContent` URL for the configured model
    pub fn endpoint(&self) -> String {
        let model = self.model.trim_start_matches('/');
        if model.starts_with("models/") {
            format!("{}/{}:generateContent", self.base_url, model)
        } else {
            format!("{}/models/{}:generateContent", self.base_url, model)
        }
    }

    /// Request body for a single user prompt
    pub fn build_request_body(prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }],
        })
    }

    /// Build the `generateContent` request for a prompt
    pub fn build_request(&self, prompt: &str) -> ExpenseResult<Request> {
        self.client
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&Self::build_request_body(prompt))
            .build()
            .map_err(|e| ExpenseError::gemini(e.without_url().to_string()))
    }

    /// Send a prompt and return the model's text reply
    pub fn generate(&self, prompt: &str) -> ExpenseResult<String> {
        debug!(model = %self.model, prompt_len = prompt.len(), "gemini generateContent");

        let request = self.build_request(prompt)?;
        let response = self
            .client
            .execute(request)
            .map_err(|e| ExpenseError::gemini(e.without_url().to_string()))?;

        let response = ensure_success(response, ExpenseError::gemini)?;
        let body: GenerateResponse = response.json().map_err(|e| {
            ExpenseError::gemini(format!("Failed to parse response: {}", e.without_url()))
        })?;

        extract_text(body)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Concatenate the text parts of the first candidate
fn extract_text(response: GenerateResponse) -> ExpenseResult<String> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ExpenseError::gemini("response contained no candidates"))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".into());
        return Err(ExpenseError::gemini(format!(
            "response contained no text (finish reason: {})",
            reason
        )));
    }

    Ok(text)
}
