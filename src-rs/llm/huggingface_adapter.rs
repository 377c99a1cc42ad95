use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use super::types::{DispatchFailure, FailureKind};

const LABEL: &str = "HuggingFace";
const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
const MAX_LENGTH: u32 = 150;
const MIN_LENGTH: u32 = 30;
const MODEL_LOADING: &str = "Model is loading. Please try again in a few moments.";

pub struct HuggingFaceConfig {
    pub base_url: String,
}

/// Hosted inference adapter (`POST {base}/models/{model}`, bearer auth).
pub struct HuggingFaceAdapter {
    cfg: HuggingFaceConfig,
    client: Client,
}

impl HuggingFaceAdapter {
    pub fn new(mut cfg: HuggingFaceConfig, client: Client) -> Self {
        if cfg.base_url.is_empty() {
            cfg.base_url = DEFAULT_BASE_URL.to_string();
        }
        Self { cfg, client }
    }

    pub async fn summarize(&self, model: &str, text: &str, api_key: &str) -> Result<String, DispatchFailure> {
        let endpoint = format!("{}/models/{}", self.cfg.base_url.trim_end_matches('/'), model);
        let payload = json!({
            "inputs": text,
            "parameters": {
                "max_length": MAX_LENGTH,
                "min_length": MIN_LENGTH,
                "do_sample": false
            }
        });
        let resp = self
            .client
            .post(endpoint)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|err| DispatchFailure::upstream(LABEL, &err.to_string()))?;

        let status = resp.status();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Err(DispatchFailure::new(FailureKind::TransientUpstream, MODEL_LOADING));
        }
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

/// Accepts `[{..}, ..]` or `{..}`; `summary_text` is preferred over `generated_text`.
fn parse_response(raw: &Value) -> Option<String> {
    let item = match raw {
        Value::Array(items) => items.first()?,
        other => other,
    };
    let text = item
        .get("summary_text")
        .and_then(|v| v.as_str())
        .or_else(|| item.get("generated_text").and_then(|v| v.as_str()))?
        .trim();
    if text.is_empty() {
        return None;
    }
    Some(text.to_string())
}

fn error_detail(status: StatusCode, body: &str) -> String {
    let upstream = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|raw| raw.get("error").cloned())
        .and_then(|err| match err {
            Value::String(message) => Some(message),
            Value::Null => None,
            other => Some(other.to_string()),
        });
    upstream.unwrap_or_else(|| format!("request failed with status code {}", status.as_u16()))
}
