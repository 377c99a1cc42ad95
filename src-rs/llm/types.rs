use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// The upstream API shapes this crate knows how to speak.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderFamily {
    CommercialChat,
    CommercialMessage,
    HostedInference,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ClosedSource,
    OpenSource,
}

impl ProviderFamily {
    pub fn category(self) -> Category {
        match self {
            ProviderFamily::CommercialChat | ProviderFamily::CommercialMessage => Category::ClosedSource,
            ProviderFamily::HostedInference => Category::OpenSource,
        }
    }

    /// Vendor label used in credential and error messages.
    pub fn vendor(self) -> &'static str {
        match self {
            ProviderFamily::CommercialChat => "OpenAI",
            ProviderFamily::CommercialMessage => "Anthropic",
            ProviderFamily::HostedInference => "HuggingFace",
        }
    }
}

/// One secret per provider family. Blank values count as absent.
#[derive(Clone, Default, Deserialize)]
pub struct CredentialSet {
    #[serde(default)]
    pub openai: Option<String>,
    #[serde(default)]
    pub anthropic: Option<String>,
    #[serde(default)]
    pub huggingface: Option<String>,
}

impl CredentialSet {
    pub fn from_env() -> Self {
        Self {
            openai: env_secret("OPENAI_API_KEY"),
            anthropic: env_secret("ANTHROPIC_API_KEY"),
            huggingface: env_secret("HUGGINGFACE_API_KEY"),
        }
    }

    pub fn slot(&self, family: ProviderFamily) -> Option<&str> {
        let value = match family {
            ProviderFamily::CommercialChat => self.openai.as_deref(),
            ProviderFamily::CommercialMessage => self.anthropic.as_deref(),
            ProviderFamily::HostedInference => self.huggingface.as_deref(),
        };
        value.map(str::trim).filter(|secret| !secret.is_empty())
    }

    /// Slots set on `self` win; empty slots fall back to `defaults`.
    pub fn merged_over(&self, defaults: &CredentialSet) -> CredentialSet {
        let pick = |family: ProviderFamily| {
            self.slot(family)
                .or_else(|| defaults.slot(family))
                .map(str::to_string)
        };
        CredentialSet {
            openai: pick(ProviderFamily::CommercialChat),
            anthropic: pick(ProviderFamily::CommercialMessage),
            huggingface: pick(ProviderFamily::HostedInference),
        }
    }
}

impl fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSet")
            .field("openai", &self.slot(ProviderFamily::CommercialChat).is_some())
            .field("anthropic", &self.slot(ProviderFamily::CommercialMessage).is_some())
            .field("huggingface", &self.slot(ProviderFamily::HostedInference).is_some())
            .finish()
    }
}

fn env_secret(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub text: String,
    pub elapsed_ms: u64,
    pub display_name: String,
    pub display_provider: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    UnknownModel,
    MissingCredential,
    TransientUpstream,
    UpstreamError,
    UnexpectedResponseShape,
}

impl FailureKind {
    pub fn code(self) -> &'static str {
        match self {
            FailureKind::UnknownModel => "unknown_model",
            FailureKind::MissingCredential => "missing_credential",
            FailureKind::TransientUpstream => "transient_upstream",
            FailureKind::UpstreamError => "upstream_error",
            FailureKind::UnexpectedResponseShape => "unexpected_response_shape",
        }
    }

    pub fn is_retryable(self) -> bool {
        matches!(self, FailureKind::TransientUpstream)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct DispatchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl DispatchFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unknown_model(model_id: &str) -> Self {
        Self::new(FailureKind::UnknownModel, format!("Unknown model: {}", model_id))
    }

    pub fn missing_credential(family: ProviderFamily) -> Self {
        Self::new(
            FailureKind::MissingCredential,
            format!("{} API key is required", family.vendor()),
        )
    }

    pub fn upstream(label: &str, detail: &str) -> Self {
        Self::new(FailureKind::UpstreamError, format!("{} API Error: {}", label, detail))
    }

    pub fn unexpected_shape(label: &str) -> Self {
        Self::new(
            FailureKind::UnexpectedResponseShape,
            format!("Unexpected response format from {} API", label),
        )
    }
}
