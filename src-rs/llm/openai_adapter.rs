use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use super::types::DispatchFailure;

const LABEL: &str = "OpenAI";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const MAX_TOKENS: u32 = 200;
const TEMPERATURE: f64 = 0.3;
const SYSTEM_PROMPT: &str = "You are a helpful assistant that provides concise and accurate summaries of text. \
Keep summaries between 2-4 sentences while capturing the key points.";

pub struct OpenAiConfig {
    pub base_url: String,
}

/// Chat-completion adapter (`POST {base}/chat/completions`, bearer auth).
pub struct OpenAiAdapter {
    cfg: OpenAiConfig,
    client: Client,
}

impl OpenAiAdapter {
    pub fn new(mut cfg: OpenAiConfig, client: Client) -> Self {
        if cfg.base_url.is_empty() {
            cfg.base_url = DEFAULT_BASE_URL.to_string();
        }
        Self { cfg, client }
    }

    pub async fn summarize(&self, model: &str, text: &str, api_key: &str) -> Result<String, DispatchFailure> {
        let endpoint = format!("{}/chat/completions", self.cfg.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .post(endpoint)
            .bearer_auth(api_key)
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
        "messages": [
            {"role": "system", "content": SYSTEM_PROMPT},
            {"role": "user", "content": format!("Please summarize the following text:\n\n{}", text)}
        ],
        "max_tokens": MAX_TOKENS,
        "temperature": TEMPERATURE
    })
}

fn parse_response(raw: &Value) -> Option<String> {
    let content = raw
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()?
        .trim();
    if content.is_empty() {
        return None;
    }
    Some(content.to_string())
}

fn error_detail(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|raw| {
            raw.pointer("/error/message")
                .and_then(|v| v.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("request failed with status code {}", status.as_u16()))
}
