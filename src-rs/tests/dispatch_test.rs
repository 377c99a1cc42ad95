mod common;

use std::time::Duration;

use serde_json::json;
use summarizer_showdown::{CredentialSet, Dispatcher, FailureKind, ShowdownConfig};
use wiremock::matchers::{any, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{all_keys, chat_completion, dispatcher_for, inference_summary, message_completion, ARTICLE};

#[tokio::test]
async fn every_family_round_trips_the_summary_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-openai"))
        .and(body_partial_json(json!({"model": "gpt-4", "max_tokens": 200, "temperature": 0.3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion("Example summary.")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "sk-ant"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({"model": "claude-3-haiku", "max_tokens": 200})))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_completion("Example summary.")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/facebook/bart-large-cnn"))
        .and(header("authorization", "Bearer hf-token"))
        .and(body_partial_json(json!({
            "inputs": ARTICLE,
            "parameters": {"max_length": 150, "min_length": 30, "do_sample": false}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(inference_summary("Example summary.")))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server.uri());
    let keys = all_keys();
    for (model, name, provider) in [
        ("gpt-4", "GPT-4", "OpenAI"),
        ("claude-3-haiku", "Claude 3 Haiku", "Anthropic"),
        ("facebook/bart-large-cnn", "BART Large CNN", "Facebook/Meta"),
    ] {
        let result = dispatcher.dispatch(model, ARTICLE, &keys).await.unwrap();
        assert_eq!(result.text, "Example summary.");
        assert_eq!(result.display_name, name);
        assert_eq!(result.display_provider, provider);
        assert!(result.elapsed_ms < 5_000);
    }
}

#[tokio::test]
async fn unknown_model_fails_without_a_network_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = dispatcher_for(&server.uri())
        .dispatch("gpt-17-ultra", ARTICLE, &all_keys())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::UnknownModel);
    assert_eq!(err.message, "Unknown model: gpt-17-ultra");
}

#[tokio::test]
async fn missing_credential_fails_without_a_network_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server.uri());
    let blank = CredentialSet {
        openai: Some("  ".to_string()),
        anthropic: None,
        huggingface: Some(String::new()),
    };
    for (model, message) in [
        ("gpt-3.5-turbo", "OpenAI API key is required"),
        ("claude-3-haiku", "Anthropic API key is required"),
        ("google/pegasus-xsum", "HuggingFace API key is required"),
    ] {
        let err = dispatcher.dispatch(model, ARTICLE, &blank).await.unwrap_err();
        assert_eq!(err.kind, FailureKind::MissingCredential);
        assert_eq!(err.message, message);
    }
}

#[tokio::test]
async fn hosted_model_loading_is_transient() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/google/pegasus-xsum"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": "Model google/pegasus-xsum is currently loading",
            "estimated_time": 20.0
        })))
        .mount(&server)
        .await;

    let err = dispatcher_for(&server.uri())
        .dispatch("google/pegasus-xsum", ARTICLE, &all_keys())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::TransientUpstream);
    assert!(err.kind.is_retryable());
    assert_eq!(err.message, "Model is loading. Please try again in a few moments.");
}

#[tokio::test]
async fn hosted_error_field_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/facebook/bart-large-cnn"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Input is too long for this model"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/google/pegasus-xsum"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server.uri());
    let err = dispatcher
        .dispatch("facebook/bart-large-cnn", ARTICLE, &all_keys())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::UpstreamError);
    assert_eq!(err.message, "HuggingFace API Error: Input is too long for this model");

    let err = dispatcher
        .dispatch("google/pegasus-xsum", ARTICLE, &all_keys())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::UpstreamError);
    assert_eq!(err.message, "HuggingFace API Error: request failed with status code 500");
}

#[tokio::test]
async fn hosted_response_shapes_are_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/facebook/bart-large-cnn"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"summary_text": "X"}])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/mistralai/Mixtral-8x7B-Instruct-v0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"generated_text": "Y"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/google/pegasus-xsum"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"label": "NEGATIVE", "score": 0.9}])))
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server.uri());
    let keys = all_keys();

    let result = dispatcher.dispatch("facebook/bart-large-cnn", ARTICLE, &keys).await.unwrap();
    assert_eq!(result.text, "X");

    let result = dispatcher
        .dispatch("mistralai/Mixtral-8x7B-Instruct-v0.1", ARTICLE, &keys)
        .await
        .unwrap();
    assert_eq!(result.text, "Y");

    let err = dispatcher.dispatch("google/pegasus-xsum", ARTICLE, &keys).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::UnexpectedResponseShape);
    assert_eq!(err.message, "Unexpected response format from HuggingFace API");
}

#[tokio::test]
async fn chat_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Incorrect API key provided: sk-opena**",
                "type": "invalid_request_error",
                "param": null,
                "code": "invalid_api_key"
            }
        })))
        .mount(&server)
        .await;

    let err = dispatcher_for(&server.uri())
        .dispatch("gpt-4", ARTICLE, &all_keys())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::UpstreamError);
    assert_eq!(err.message, "OpenAI API Error: Incorrect API key provided: sk-opena**");
}

#[tokio::test]
async fn message_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(529).set_body_json(json!({
            "type": "error",
            "error": {"type": "overloaded_error", "message": "Overloaded"}
        })))
        .mount(&server)
        .await;

    let err = dispatcher_for(&server.uri())
        .dispatch("claude-3-haiku", ARTICLE, &all_keys())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::UpstreamError);
    assert!(!err.kind.is_retryable());
    assert_eq!(err.message, "Claude API Error: Overloaded");
}

#[tokio::test]
async fn empty_chat_choice_is_an_unexpected_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = dispatcher_for(&server.uri())
        .dispatch("gpt-3.5-turbo", ARTICLE, &all_keys())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::UnexpectedResponseShape);
}

#[tokio::test]
async fn non_json_success_bodies_are_unexpected_shapes() {
    let server = MockServer::start().await;
    for route in ["/v1/chat/completions", "/v1/messages", "/models/google/pegasus-xsum"] {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;
    }

    let dispatcher = dispatcher_for(&server.uri());
    for (model, label) in [
        ("gpt-4", "OpenAI"),
        ("claude-3-haiku", "Claude"),
        ("google/pegasus-xsum", "HuggingFace"),
    ] {
        let err = dispatcher.dispatch(model, ARTICLE, &all_keys()).await.unwrap_err();
        assert_eq!(err.kind, FailureKind::UnexpectedResponseShape);
        assert_eq!(err.message, format!("Unexpected response format from {} API", label));
    }
}

#[tokio::test]
async fn message_error_without_detail_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let err = dispatcher_for(&server.uri())
        .dispatch("claude-3-haiku", ARTICLE, &all_keys())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::UpstreamError);
    assert_eq!(err.message, "Claude API Error: request failed with status code 500");
}

#[tokio::test]
async fn transport_failures_are_upstream_errors() {
    // Nothing listens on port 9 locally.
    let cfg = ShowdownConfig {
        request_timeout_secs: 2,
        openai_base_url: "http://127.0.0.1:9/v1".to_string(),
        ..ShowdownConfig::default()
    };
    let err = Dispatcher::new(&cfg)
        .unwrap()
        .dispatch("gpt-4", ARTICLE, &all_keys())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::UpstreamError);
    assert!(err.message.starts_with("OpenAI API Error: "));
}

#[tokio::test]
async fn slow_upstreams_hit_the_request_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(message_completion("too late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let cfg = ShowdownConfig {
        request_timeout_secs: 1,
        ..common::config_for(&server.uri())
    };
    let err = Dispatcher::new(&cfg)
        .unwrap()
        .dispatch("claude-3-haiku", ARTICLE, &all_keys())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::UpstreamError);
    assert!(err.message.starts_with("Claude API Error: "));
}
