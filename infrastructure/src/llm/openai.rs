//! OpenAI-compatible chat completion adapter for argument enrichment.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;
use tribunal_application::{EnrichmentGateway, GatewayError};
use tribunal_domain::core::string::excerpt;

use crate::config::FileEnrichmentConfig;

const MAX_TOKENS: u32 = 512;
/// Bytes of an error body kept in the gateway error
const ERROR_BODY_LIMIT: usize = 320;

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Value,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Enrichment gateway backed by a `/chat/completions` endpoint
pub struct OpenAiEnrichmentGateway {
    client: Client,
    url: String,
    model: String,
    api_key: String,
    temperature: f32,
}

impl OpenAiEnrichmentGateway {
    pub fn new(
        endpoint: &str,
        model: impl Into<String>,
        api_key: impl Into<String>,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            url: resolve_chat_endpoint(endpoint),
            model: model.into(),
            api_key: api_key.into(),
            temperature,
        })
    }

    /// Build from the `[enrichment]` section, reading the API key from the environment
    pub fn from_config(config: &FileEnrichmentConfig) -> Result<Self, GatewayError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| GatewayError::MissingApiKey(config.api_key_env.clone()))?;
        Self::new(
            &config.endpoint,
            config.model.clone(),
            api_key,
            config.temperature,
            config.timeout(),
        )
    }
}

#[async_trait]
impl EnrichmentGateway for OpenAiEnrichmentGateway {
    fn name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, GatewayError> {
        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": prompt },
            ],
            "temperature": self.temperature,
            "max_tokens": MAX_TOKENS,
        });

        debug!("POST {} (model {})", self.url, self.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(error_detail(status, &body)));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let text = body
            .choices
            .first()
            .map(|choice| extract_text(&choice.message.content))
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GatewayError::InvalidResponse("empty completion".into()));
        }
        Ok(text.trim().to_string())
    }
}

fn resolve_chat_endpoint(endpoint: &str) -> String {
    if endpoint.contains("/chat/completions") {
        endpoint.to_string()
    } else {
        format!("{}/chat/completions", endpoint.trim_end_matches('/'))
    }
}

fn extract_text(content: &Value) -> String {
    match content {
        Value::String(text) => text.clone(),
        Value::Array(parts) => parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}

/// Status plus a one-line excerpt of the error body
fn error_detail(status: StatusCode, body: &str) -> String {
    format!("{}: {}", status, excerpt(body, ERROR_BODY_LIMIT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_chat_endpoint() {
        assert_eq!(
            resolve_chat_endpoint("https://api.openai.com/v1/"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            resolve_chat_endpoint("http://localhost:8080/v1/chat/completions"),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_extract_text_handles_parts() {
        assert_eq!(extract_text(&json!("plain")), "plain");
        assert_eq!(
            extract_text(&json!([{"type": "text", "text": "a"}, {"type": "text", "text": "b"}])),
            "a\nb"
        );
        assert_eq!(extract_text(&json!(null)), "");
    }

    #[test]
    fn test_error_detail_is_one_bounded_line() {
        let body = format!("{{\n  \"error\": \"{}\"\n}}", "€".repeat(200));
        let detail = error_detail(StatusCode::TOO_MANY_REQUESTS, &body);

        assert!(detail.starts_with("429 Too Many Requests: { \"error\""));
        assert!(!detail.contains('\n'));
        assert!(detail.ends_with("..."));
        let excerpt_len = detail.len() - "429 Too Many Requests: ".len();
        assert!(excerpt_len <= ERROR_BODY_LIMIT);
    }

    #[test]
    fn test_error_detail_keeps_short_body() {
        assert_eq!(
            error_detail(StatusCode::UNAUTHORIZED, "bad key"),
            "401 Unauthorized: bad key"
        );
    }

    #[test]
    fn test_from_config_requires_key() {
        let config = FileEnrichmentConfig {
            enabled: true,
            api_key_env: "TRIBUNAL_TEST_SURELY_UNSET_API_KEY".into(),
            ..Default::default()
        };
        assert!(matches!(
            OpenAiEnrichmentGateway::from_config(&config),
            Err(GatewayError::MissingApiKey(_))
        ));
    }

    #[test]
    fn test_name_is_model() {
        let gateway = OpenAiEnrichmentGateway::new(
            "https://api.openai.com/v1",
            "gpt-4o-mini",
            "sk-test",
            0.3,
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(gateway.name(), "gpt-4o-mini");
        assert_eq!(gateway.url, "https://api.openai.com/v1/chat/completions");
    }
}
