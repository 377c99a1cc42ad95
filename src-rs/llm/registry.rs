use serde::Serialize;

use super::types::{Category, ProviderFamily};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    pub id: &'static str,
    pub family: ProviderFamily,
    pub display_name: &'static str,
    pub display_provider: &'static str,
}

impl ModelDescriptor {
    pub fn category(&self) -> Category {
        self.family.category()
    }
}

static MODELS: [ModelDescriptor; 6] = [
    ModelDescriptor {
        id: "gpt-3.5-turbo",
        family: ProviderFamily::CommercialChat,
        display_name: "GPT-3.5 Turbo",
        display_provider: "OpenAI",
    },
    ModelDescriptor {
        id: "gpt-4",
        family: ProviderFamily::CommercialChat,
        display_name: "GPT-4",
        display_provider: "OpenAI",
    },
    ModelDescriptor {
        id: "claude-3-haiku",
        family: ProviderFamily::CommercialMessage,
        display_name: "Claude 3 Haiku",
        display_provider: "Anthropic",
    },
    ModelDescriptor {
        id: "facebook/bart-large-cnn",
        family: ProviderFamily::HostedInference,
        display_name: "BART Large CNN",
        display_provider: "Facebook/Meta",
    },
    ModelDescriptor {
        id: "google/pegasus-xsum",
        family: ProviderFamily::HostedInference,
        display_name: "Pegasus XSum",
        display_provider: "Google",
    },
    ModelDescriptor {
        id: "mistralai/Mixtral-8x7B-Instruct-v0.1",
        family: ProviderFamily::HostedInference,
        display_name: "Mixtral 8x7B",
        display_provider: "Mistral AI",
    },
];

pub fn all() -> &'static [ModelDescriptor] {
    &MODELS
}

pub fn describe(model_id: &str) -> Option<&'static ModelDescriptor> {
    MODELS.iter().find(|model| model.id == model_id)
}

/// Splits the catalog into (closed-source, open-source), keeping catalog order.
pub fn list_by_category() -> (Vec<ModelDescriptor>, Vec<ModelDescriptor>) {
    all()
        .iter()
        .copied()
        .partition(|model| model.category() == Category::ClosedSource)
}
