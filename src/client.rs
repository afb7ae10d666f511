use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::{LlmProvider, LlmSettings};

/// Text-generation endpoint the planner talks to.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn chat_completion(&self, request: ChatCompletionRequest)
    -> Result<ChatCompletionResponse>;
}

pub type DynLlmClient = dyn LlmClient;

/// Client for OpenAI-compatible `chat/completions` endpoints.
#[derive(Debug, Clone)]
pub struct AIClient {
    http: Client,
    base_url: String,
    api_key: String,
    user_agent: String,
    provider: LlmProvider,
}

impl AIClient {
    pub fn new(settings: &LlmSettings) -> Result<Self> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(anyhow!("Base URL cannot be empty"));
        }

        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            api_key: settings.api_key.clone(),
            user_agent: settings.user_agent.clone(),
            provider: settings.provider,
        })
    }
}

#[async_trait]
impl LlmClient for AIClient {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(
            provider = %self.provider,
            model = %request.model,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        let mut req_builder = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("User-Agent", &self.user_agent)
            .header("Content-Type", "application/json")
            .json(&request);

        if matches!(self.provider, LlmProvider::OpenRouter) {
            req_builder = req_builder
                .header("HTTP-Referer", "https://github.com/bitrifttech/tripplan")
                .header("X-Title", "tripplan CLI");
        }

        let response = req_builder
            .send()
            .await
            .context("Failed to send request to chat completions endpoint")?;

        let status = response.status();
        debug!(%status, "chat completion response received");

        match status {
            reqwest::StatusCode::OK => {
                let body = response
                    .json::<ChatCompletionResponse>()
                    .await
                    .context("Failed to parse chat completion response JSON")?;
                trace!(choices = body.choices.len(), "decoded chat completion");
                Ok(body)
            }
            reqwest::StatusCode::TOO_MANY_REQUESTS => {
                let error_text = response.text().await.unwrap_or_default();
                let error_msg = if error_text.contains("per second") || error_text.contains("quota")
                {
                    "Rate limit exceeded. Please wait a moment and try again."
                } else if error_text.contains("traffic") {
                    "Service is experiencing high traffic. Please try again in a few moments."
                } else {
                    "Too many requests. Please wait before trying again."
                };
                Err(anyhow!("{} (API response: {})", error_msg, error_text))
            }
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => Err(anyhow!(
                "Invalid API key. Please check your {} API key configuration.",
                self.provider.display_name()
            )),
            reqwest::StatusCode::BAD_REQUEST => {
                let error_text = response.text().await.unwrap_or_default();
                Err(anyhow!("Invalid request: {}", error_text))
            }
            reqwest::StatusCode::INTERNAL_SERVER_ERROR
            | reqwest::StatusCode::SERVICE_UNAVAILABLE => Err(anyhow!(
                "Service is temporarily unavailable. Please try again later."
            )),
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(anyhow!("API error (status {}): {}", status, error_text))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatMessageRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMessageRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
    pub finish_reason: Option<String>,
}

/// Assistant message as returned by the provider; `content` may be null.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}
