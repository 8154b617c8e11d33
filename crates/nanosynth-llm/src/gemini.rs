//! Google Gemini REST client
//!
//! Thin blocking wrappers around the Generative Language API: one provider
//! for text generation (`generateContent`) and one for embeddings
//! (`embedContent`). Both authenticate with an API key taken from the
//! `GEMINI_API_KEY` environment variable.
//!
//! Neither provider retries: a rate limit or transport failure is returned
//! to the caller, which decides on backoff. The pipeline treats these
//! errors as fatal for the current document only.

use crate::LlmError;
use nanosynth_domain::traits::{EmbeddingProvider, GenerativeProvider};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Base URL for the Generative Language API
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generation model
pub const DEFAULT_GENERATION_MODEL: &str = "gemini-1.5-flash";

/// Default embedding model
pub const DEFAULT_EMBEDDING_MODEL: &str = "embedding-001";

/// Dimension of embedding-001 vectors
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 768;

/// Generation temperature; kept low for mostly-deterministic extraction
const GENERATION_TEMPERATURE: f64 = 0.3;

/// Default timeout for API requests
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable holding the API key
const API_KEY_VAR: &str = "GEMINI_API_KEY";

fn build_client() -> Result<reqwest::blocking::Client, LlmError> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))
}

fn api_key_from_env() -> Result<String, LlmError> {
    std::env::var(API_KEY_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or(LlmError::MissingApiKey(API_KEY_VAR))
}

/// Classify an HTTP error status into an `LlmError`
fn status_error(status: reqwest::StatusCode, body: String, model: &str) -> LlmError {
    match status {
        reqwest::StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(model.to_string()),
        reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
        _ => LlmError::Communication(format!("HTTP {}: {}", status, body)),
    }
}

/// Gemini text-generation provider
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiProvider {
    /// Create a provider with an explicit API key and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key: api_key.into(),
            client: build_client()?,
        })
    }

    /// Create a provider reading `GEMINI_API_KEY` from the environment
    ///
    /// Fails with `LlmError::MissingApiKey` when the key is absent; callers
    /// surface this immediately at startup rather than on first use.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(api_key_from_env()?, DEFAULT_GENERATION_MODEL)
    }

    /// Override the API endpoint (tests, proxies)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl GenerativeProvider for GeminiProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: GENERATION_TEMPERATURE,
            },
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "Calling Gemini generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_error(status, body, &self.model));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("No candidates in response".to_string()))?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();

        debug!(response_len = text.len(), "Gemini generation complete");
        Ok(text)
    }
}

/// Gemini embedding provider
pub struct GeminiEmbedder {
    endpoint: String,
    model: String,
    api_key: String,
    dimension: usize,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    content: Content<'a>,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: EmbeddingValues,
}

#[derive(Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

impl GeminiEmbedder {
    /// Create an embedder with an explicit API key and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key: api_key.into(),
            dimension: DEFAULT_EMBEDDING_DIMENSION,
            client: build_client()?,
        })
    }

    /// Create an embedder reading `GEMINI_API_KEY` from the environment
    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(api_key_from_env()?, DEFAULT_EMBEDDING_MODEL)
    }

    /// Override the API endpoint (tests, proxies)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl EmbeddingProvider for GeminiEmbedder {
    type Error = LlmError;

    fn embed(&self, text: &str) -> Result<Vec<f32>, LlmError> {
        let url = format!("{}/models/{}:embedContent", self.endpoint, self.model);

        let request = EmbedRequest {
            content: Content {
                parts: vec![Part { text }],
            },
        };

        debug!(model = %self.model, text_len = text.len(), "Calling Gemini embedContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_error(status, body, &self.model));
        }

        let parsed: EmbedResponse = response
            .json()
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(parsed.embedding.values)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
            generation_config: GenerationConfig { temperature: 0.3 },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["temperature"], 0.3);
    }

    #[test]
    fn test_generate_response_parsing() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "part one "}, {"text": "part two"}]}}
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.clone())
            .collect();
        assert_eq!(text, "part one part two");
    }

    #[test]
    fn test_embed_response_parsing() {
        let body = r#"{"embedding": {"values": [0.1, -0.2, 0.3]}}"#;
        let parsed: EmbedResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.embedding.values, vec![0.1, -0.2, 0.3]);
    }

    #[test]
    fn test_status_classification() {
        let err = status_error(
            reqwest::StatusCode::NOT_FOUND,
            "missing".to_string(),
            "gemini-1.5-flash",
        );
        assert!(matches!(err, LlmError::ModelNotAvailable(_)));

        let err = status_error(
            reqwest::StatusCode::TOO_MANY_REQUESTS,
            "slow down".to_string(),
            "gemini-1.5-flash",
        );
        assert!(matches!(err, LlmError::RateLimitExceeded));

        let err = status_error(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "boom".to_string(),
            "gemini-1.5-flash",
        );
        assert!(matches!(err, LlmError::Communication(_)));
    }

    #[test]
    fn test_connection_error_surfaces_as_communication() {
        // Unroutable port, no retry loop to wait out
        let provider = GeminiProvider::new("test-key", "gemini-1.5-flash")
            .unwrap()
            .with_endpoint("http://127.0.0.1:1");

        let result = provider.generate("test");
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
