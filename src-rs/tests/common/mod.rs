#![allow(dead_code)]

use serde_json::{json, Value};
use summarizer_showdown::comparison::RoundStore;
use summarizer_showdown::{CredentialSet, Dispatcher, Showdown, ShowdownConfig};

pub const ARTICLE: &str = "The city council met on Tuesday to debate the new transit plan. \
After four hours of testimony, members voted to fund two additional bus lines and \
to study a light rail corridor along the river.";

/// Points every provider family at the same mock server; paths keep them apart.
pub fn config_for(uri: &str) -> ShowdownConfig {
    ShowdownConfig {
        request_timeout_secs: 5,
        openai_base_url: format!("{}/v1", uri),
        anthropic_base_url: format!("{}/v1", uri),
        huggingface_base_url: uri.to_string(),
        ..ShowdownConfig::default()
    }
}

pub fn dispatcher_for(uri: &str) -> Dispatcher {
    Dispatcher::new(&config_for(uri)).expect("dispatcher")
}

pub fn showdown_for(uri: &str, defaults: CredentialSet) -> Showdown {
    let cfg = config_for(uri);
    let dispatcher = Dispatcher::new(&cfg).expect("dispatcher");
    Showdown::new(cfg, dispatcher, defaults, RoundStore::new(10))
}

pub fn all_keys() -> CredentialSet {
    CredentialSet {
        openai: Some("sk-openai".to_string()),
        anthropic: Some("sk-ant".to_string()),
        huggingface: Some("hf-token".to_string()),
    }
}

pub fn chat_completion(text: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "gpt-4",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }]
    })
}

pub fn message_completion(text: &str) -> Value {
    json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn"
    })
}

pub fn inference_summary(text: &str) -> Value {
    json!([{"summary_text": text}])
}
