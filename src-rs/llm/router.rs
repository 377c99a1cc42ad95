use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{info, warn};

use super::anthropic_adapter::{AnthropicAdapter, AnthropicConfig};
use super::huggingface_adapter::{HuggingFaceAdapter, HuggingFaceConfig};
use super::openai_adapter::{OpenAiAdapter, OpenAiConfig};
use super::registry::{self, ModelDescriptor};
use super::types::{CredentialSet, DispatchFailure, ProviderFamily, SummaryResult};
use crate::config::ShowdownConfig;

/// Resolves a model id to its provider family and runs the matching adapter.
pub struct Dispatcher {
    openai: OpenAiAdapter,
    anthropic: AnthropicAdapter,
    huggingface: HuggingFaceAdapter,
}

impl Dispatcher {
    pub fn new(cfg: &ShowdownConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()?;
        Ok(Self {
            openai: OpenAiAdapter::new(
                OpenAiConfig {
                    base_url: cfg.openai_base_url.clone(),
                },
                client.clone(),
            ),
            anthropic: AnthropicAdapter::new(
                AnthropicConfig {
                    base_url: cfg.anthropic_base_url.clone(),
                    version: cfg.anthropic_version.clone(),
                },
                client.clone(),
            ),
            huggingface: HuggingFaceAdapter::new(
                HuggingFaceConfig {
                    base_url: cfg.huggingface_base_url.clone(),
                },
                client,
            ),
        })
    }

    pub async fn dispatch(
        &self,
        model_id: &str,
        text: &str,
        credentials: &CredentialSet,
    ) -> Result<SummaryResult, DispatchFailure> {
        let (model, credential) = match resolve(model_id, credentials) {
            Ok(resolved) => resolved,
            Err(err) => {
                warn!(model = model_id, code = err.kind.code(), "summary rejected before dispatch");
                return Err(err);
            }
        };

        let started = Instant::now();
        let outcome = match model.family {
            ProviderFamily::CommercialChat => self.openai.summarize(model.id, text, credential).await,
            ProviderFamily::CommercialMessage => self.anthropic.summarize(model.id, text, credential).await,
            ProviderFamily::HostedInference => self.huggingface.summarize(model.id, text, credential).await,
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(text) => {
                info!(model = model.id, family = ?model.family, elapsed_ms = elapsed_ms, "summary received");
                Ok(SummaryResult {
                    text,
                    elapsed_ms,
                    display_name: model.display_name.to_string(),
                    display_provider: model.display_provider.to_string(),
                })
            }
            Err(err) => {
                warn!(model = model.id, code = err.kind.code(), elapsed_ms = elapsed_ms, "summary failed");
                Err(err)
            }
        }
    }

    /// Runs both dispatches concurrently and waits for both to settle.
    /// Any failure fails the pair; when both fail, the first model's failure is reported.
    pub async fn dispatch_pair(
        &self,
        model_a: &str,
        model_b: &str,
        text: &str,
        credentials: &CredentialSet,
    ) -> Result<(SummaryResult, SummaryResult), DispatchFailure> {
        let (first, second) = tokio::join!(
            self.dispatch(model_a, text, credentials),
            self.dispatch(model_b, text, credentials)
        );
        Ok((first?, second?))
    }
}

/// Looks up the model and its credential slot; runs before any network call.
fn resolve<'a>(
    model_id: &str,
    credentials: &'a CredentialSet,
) -> Result<(&'static ModelDescriptor, &'a str), DispatchFailure> {
    let model = registry::describe(model_id).ok_or_else(|| DispatchFailure::unknown_model(model_id))?;
    let credential = credentials
        .slot(model.family)
        .ok_or_else(|| DispatchFailure::missing_credential(model.family))?;
    Ok((model, credential))
}
