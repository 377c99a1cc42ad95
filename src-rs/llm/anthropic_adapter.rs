use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use super::types::DispatchFailure;

const LABEL: &str = "Claude";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const DEFAULT_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 200;

pub struct AnthropicConfig {
    pub base_url: String,
    pub version: String,
}

/// Messages adapter (`POST {base}/messages`, `x-api-key` + pinned `anthropic-version`).
pub struct AnthropicAdapter {
    cfg: AnthropicConfig,
    client: Client,
}

impl AnthropicAdapter {
    pub fn new(mut cfg: AnthropicConfig, client: Client) -> Self {
        if cfg.base_url.is_empty() {
            cfg.base_url = DEFAULT_BASE_URL.to_string();
        }
        if cfg.version.is_empty() {
            cfg.version = DEFAULT_VERSION.to_string();
        }
        Self { cfg, client }
    }

    pub async fn summarize(&self, model: &str, text: &str, api_key: &str) -> Result<String, DispatchFailure> {
        let endpoint = format!("{}/messages", self.cfg.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .post(endpoint)
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.cfg.version)
            .json(&build_payload(model, text))
            .send()
            .await
            .map_err(|err| DispatchFailure::upstream(LABEL, &err.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|err| DispatchFailure::upstream(LABEL, &err.to_string()))?;
        if !status.is_success() {
            return Err(DispatchFailure::upstream(LABEL, &error_detail(status, &body)));
        }

        let raw: Value = serde_json::from_str(&body).map_err(|_| DispatchFailure::unexpected_shape(LABEL))?;
        parse_response(&raw).ok_or_else(|| DispatchFailure::unexpected_shape(LABEL))
    }
}

fn build_payload(model: &str, text: &str) -> Value {
    json!({
        "model": model,
        "max_tokens": MAX_TOKENS,
        "messages": [{
            "role": "user",
            "content": format!(
                "Please provide a concise summary of the following text in 2-4 sentences:\n\n{}",
                text
            )
        }]
    })
}

fn parse_response(raw: &Value) -> Option<String> {
    let text = raw.get("content")?.get(0)?.get("text")?.as_str()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn error_detail(status: StatusCode, body: &str) -> String {
    let upstream = serde_json::from_str::<Value>(body).ok().and_then(|raw| {
        raw.pointer("/error/message")
            .and_then(|v| v.as_str())
            .map(str::to_string)
    });
    match upstream {
        Some(message) => message,
        None => format!("request failed with status code {}", status.as_u16()),
    }
}
