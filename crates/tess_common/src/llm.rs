//! LLM client abstraction.
//!
//! Generic interface for calling a text-understanding backend with a
//! strict JSON contract. Ships a real OpenAI-compatible HTTP client and
//! a scripted fake for tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Classifier backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    500
}

fn default_timeout() -> u64 {
    8
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout(),
        }
    }
}

/// LLM transport errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    #[error("LLM is disabled in configuration")]
    Disabled,

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("LLM returned empty response")]
    EmptyResponse,
}

/// Generic LLM client trait.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Call the backend with a prompt and expect a JSON object back.
    async fn call_json(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema_description: &str,
    ) -> Result<serde_json::Value, LlmError>;
}

/// Real client speaking the OpenAI-compatible chat completions API.
pub struct HttpLlmClient {
    config: LlmConfig,
    client: reqwest::Client,
}

impl HttpLlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::HttpError(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl LlmClient for HttpLlmClient {
    async fn call_json(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema_description: &str,
    ) -> Result<serde_json::Value, LlmError> {
        if !self.config.enabled {
            return Err(LlmError::Disabled);
        }

        let url = format!("{}/v1/chat/completions", self.config.endpoint);
        let full_prompt = format!(
            "{user_prompt}\n\nYou must respond with valid JSON matching this schema:\n{schema_description}"
        );

        let request_body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": full_prompt},
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
            "response_format": {"type": "json_object"},
        });

        let mut request = self.client.post(&url).json(&request_body);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout(self.config.timeout_secs)
            } else {
                LlmError::HttpError(format!("request failed: {e}"))
            }
        })?;

        if !response.status().is_success() {
            return Err(LlmError::HttpError(format!(
                "HTTP {} from classifier backend",
                response.status()
            )));
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidJson(format!("failed to parse response: {e}")))?;

        // Extract the message content from the OpenAI response shape.
        let text = response_json
            .get("choices")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("message"))
            .and_then(|v| v.get("content"))
            .and_then(|v| v.as_str())
            .ok_or(LlmError::EmptyResponse)?;

        serde_json::from_str(text)
            .map_err(|e| LlmError::InvalidJson(format!("LLM output is not valid JSON: {e}")))
    }
}

/// Scripted client for tests. Returns canned responses in order and
/// keeps returning the last one when the script runs out.
pub struct FakeLlmClient {
    responses: std::sync::Mutex<Vec<Result<serde_json::Value, LlmError>>>,
    call_count: std::sync::Mutex<usize>,
}

impl FakeLlmClient {
    pub fn new(responses: Vec<Result<serde_json::Value, LlmError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses),
            call_count: std::sync::Mutex::new(0),
        }
    }

    /// A client that always returns the given JSON.
    pub fn always_valid(json: serde_json::Value) -> Self {
        Self::new(vec![Ok(json)])
    }

    /// A client that always fails with the given error.
    pub fn always_error(error: LlmError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl LlmClient for FakeLlmClient {
    async fn call_json(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _schema_description: &str,
    ) -> Result<serde_json::Value, LlmError> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        if responses.len() == 1 {
            responses[0].clone()
        } else {
            responses.remove(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = LlmConfig::default();
        assert!(config.enabled);
        assert_eq!(config.endpoint, "https://api.openai.com");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert!(config.api_key.is_none());
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.timeout_secs, 8);
    }

    #[tokio::test]
    async fn fake_client_always_valid() {
        let json = serde_json::json!({"test": "data"});
        let client = FakeLlmClient::always_valid(json.clone());

        let result = client.call_json("system", "user", "schema").await;
        assert_eq!(result.unwrap(), json);
        assert_eq!(client.call_count(), 1);

        let result2 = client.call_json("system", "user", "schema").await;
        assert!(result2.is_ok());
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn fake_client_always_error() {
        let client = FakeLlmClient::always_error(LlmError::Disabled);

        let result = client.call_json("system", "user", "schema").await;
        assert!(result.is_err());
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn fake_client_scripted_responses() {
        let client = FakeLlmClient::new(vec![
            Ok(serde_json::json!({"response": 1})),
            Ok(serde_json::json!({"response": 2})),
            Err(LlmError::Timeout(8)),
        ]);

        assert_eq!(client.call_json("", "", "").await.unwrap()["response"], 1);
        assert_eq!(client.call_json("", "", "").await.unwrap()["response"], 2);
        assert!(client.call_json("", "", "").await.is_err());
        assert_eq!(client.call_count(), 3);
    }
}
