use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::traits::NluService;
use super::types::{NluError, NluRequest};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4";

const MAX_ERROR_BODY_CHARS: usize = 256;

static SECRET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sk-[A-Za-z0-9_\-]{16,}").unwrap());

/// Chat completions request body
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// OpenAI chat completions backend
pub struct OpenAiService {
    client: Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl OpenAiService {
    /// Create a service against the public endpoint with the default model
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_endpoint(api_key, DEFAULT_MODEL.to_string(), DEFAULT_API_BASE.to_string())
    }

    /// Create a service with a custom model and endpoint
    pub fn with_endpoint(api_key: String, model: String, api_base: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_base,
            model,
            api_key,
        })
    }
}

/// Wire body for one prompt
pub fn build_request(model: &str, request: &NluRequest) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: Some(request.prompt.clone()),
        }],
        temperature: request.temperature,
    }
}

/// Text of the first choice
///
/// An empty or whitespace-only answer is a payload error.
pub fn parse_response(body: &str) -> Result<String, NluError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| NluError::Payload(e.to_string()))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| NluError::Payload("missing choices[0]".to_string()))?
        .message
        .content
        .unwrap_or_default();

    let content = content.trim();
    if content.is_empty() {
        return Err(NluError::Payload("empty response".to_string()));
    }
    Ok(content.to_string())
}

/// Map a non-success status to its error class
pub fn classify_status(status: StatusCode, body: &str) -> NluError {
    let detail = format!("{}: {}", status.as_u16(), sanitize_error_body(body));
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => NluError::Auth(detail),
        StatusCode::TOO_MANY_REQUESTS => NluError::RateLimited(detail),
        _ => NluError::Transport(detail),
    }
}

fn sanitize_error_body(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let sanitized = SECRET_RE.replace_all(&collapsed, "[REDACTED]");

    if sanitized.chars().count() > MAX_ERROR_BODY_CHARS {
        let shortened: String = sanitized.chars().take(MAX_ERROR_BODY_CHARS).collect();
        return format!("{}...[truncated]", shortened);
    }
    sanitized.into_owned()
}

#[async_trait]
impl NluService for OpenAiService {
    async fn complete(&self, request: &NluRequest) -> Result<String, NluError> {
        let body = build_request(&self.model, request);

        debug!("Posting prompt to {} ({})", self.api_base, self.model);

        let response = self
            .client
            .post(&self.api_base)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("OpenAI returned status: {}", status);
            return Err(classify_status(status, &text));
        }

        debug!("Received {} bytes from OpenAI", text.len());
        parse_response(&text)
    }

    fn service_name(&self) -> &'static str {
        "OpenAI"
    }
}
